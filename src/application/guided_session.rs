//! Guided breathing session runtime.
//!
//! One tokio task owns a [`BreathingSession`] on a [`TokioPhaseTimer`] and is
//! the only place it is touched. Commands and timer expiries are serialised
//! through a `select!` loop, and every state change is published on a
//! `watch` channel for whoever renders the session.
//!
//! ```text
//!   GuidedSession ──commands (mpsc)──▶ ┌──────────────┐ ──snapshots (watch)──▶ subscribers
//!                                      │ session task │
//!   TokioPhaseTimer ──expiries──────▶ └──────────────┘
//! ```
//!
//! Dropping the handle closes the command channel; the task then stops the
//! sequencer and exits.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::adapters::timer::TokioPhaseTimer;
use crate::domain::breathing::{BreathingSession, Exercise, SessionError, SessionSnapshot};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::TimerId;

const COMMAND_BUFFER: usize = 16;

/// Control actions accepted by a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Play,
    Pause,
    Toggle,
    Reset,
}

struct Envelope {
    command: SessionCommand,
    reply: oneshot::Sender<Result<(), SessionError>>,
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope").field("command", &self.command).finish()
    }
}

/// Handle to a breathing session running on its own task.
#[derive(Debug)]
pub struct GuidedSession {
    id: SessionId,
    commands: mpsc::Sender<Envelope>,
    snapshots: watch::Receiver<SessionSnapshot>,
    task: JoinHandle<()>,
}

impl GuidedSession {
    /// Starts the session task for `exercise`. The session begins `Ready`.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(exercise: Exercise) -> Self {
        let id = SessionId::new();
        let (timer, fired) = TokioPhaseTimer::new();
        let session = BreathingSession::new(exercise, timer).with_cycle_complete(move |completed| {
            tracing::info!(session = %id, completed, "breathing cycle complete");
        });

        let (commands, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshots) = watch::channel(session.snapshot());

        tracing::debug!(
            session = %id,
            exercise = %session.exercise().slug(),
            total_cycles = session.total_cycles(),
            "guided session started"
        );
        let task = tokio::spawn(run(id, session, command_rx, fired, snapshot_tx));

        Self {
            id,
            commands,
            snapshots,
            task,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Applies `command` and waits until the session has processed it.
    ///
    /// # Errors
    ///
    /// - `SessionInapplicable` when playing a session shorter than one cycle
    /// - `InternalError` if the session task is gone
    pub async fn execute(&self, command: SessionCommand) -> Result<(), DomainError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Envelope { command, reply })
            .await
            .map_err(|_| closed(self.id))?;
        response
            .await
            .map_err(|_| closed(self.id))?
            .map_err(DomainError::from)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Closes the command channel and waits for the task to finish.
    pub async fn shutdown(self) {
        let Self { id, commands, task, .. } = self;
        drop(commands);
        if let Err(e) = task.await {
            tracing::warn!(session = %id, error = %e, "guided session task failed");
        }
    }
}

fn closed(id: SessionId) -> DomainError {
    DomainError::new(ErrorCode::InternalError, "Guided session has ended")
        .with_detail("session_id", id.to_string())
}

async fn run(
    id: SessionId,
    mut session: BreathingSession<TokioPhaseTimer>,
    mut commands: mpsc::Receiver<Envelope>,
    mut fired: mpsc::UnboundedReceiver<TimerId>,
    snapshots: watch::Sender<SessionSnapshot>,
) {
    loop {
        tokio::select! {
            envelope = commands.recv() => {
                let Some(Envelope { command, reply }) = envelope else {
                    break;
                };
                let result = apply(&mut session, command);
                if let Err(e) = &result {
                    tracing::warn!(session = %id, ?command, error = %e, "session command rejected");
                }
                snapshots.send_replace(session.snapshot());
                let _ = reply.send(result);
            }
            Some(timer) = fired.recv() => {
                let Some(advance) = session.on_timer_fired(timer) else {
                    tracing::trace!(session = %id, %timer, "stale phase timer ignored");
                    continue;
                };
                tracing::debug!(
                    session = %id,
                    phase = %advance.phase.state,
                    index = advance.index,
                    "phase advanced"
                );
                snapshots.send_replace(session.snapshot());
            }
        }
    }

    session.reset();
    snapshots.send_replace(session.snapshot());
    tracing::debug!(
        session = %id,
        completed_cycles = session.completed_cycles(),
        "guided session ended"
    );
}

fn apply(
    session: &mut BreathingSession<TokioPhaseTimer>,
    command: SessionCommand,
) -> Result<(), SessionError> {
    match command {
        SessionCommand::Play => session.play(),
        SessionCommand::Pause => {
            session.pause();
            Ok(())
        }
        SessionCommand::Toggle => session.toggle(),
        SessionCommand::Reset => {
            session.reset();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::breathing::{
        Cycle, ExerciseSlug, Phase, PhaseState, SessionStatus, BUILTIN_EXERCISES,
    };
    use std::time::Duration;
    use tokio::time::sleep;

    fn builtin(slug: &str) -> Exercise {
        BUILTIN_EXERCISES
            .iter()
            .find(|e| e.slug().as_str() == slug)
            .cloned()
            .unwrap()
    }

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn phase_of(session: &GuidedSession) -> Option<PhaseState> {
        session.snapshot().current_phase.map(|p| p.state)
    }

    #[tokio::test(start_paused = true)]
    async fn new_session_is_ready() {
        let session = GuidedSession::spawn(builtin("box-breathing"));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, SessionStatus::Ready);
        assert_eq!(snapshot.total_cycles, 18);
        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn box_breathing_advances_on_schedule() {
        let session = GuidedSession::spawn(builtin("box-breathing"));
        session.execute(SessionCommand::Play).await.unwrap();
        assert_eq!(phase_of(&session), Some(PhaseState::Inhale));

        sleep(millis(4_500)).await;
        assert_eq!(phase_of(&session), Some(PhaseState::HoldAfterInhale));

        sleep(millis(12_000)).await;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.completed_cycles, 1);
        assert_eq!(snapshot.current_phase.map(|p| p.state), Some(PhaseState::Inhale));

        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn pause_freezes_progress() {
        let session = GuidedSession::spawn(builtin("box-breathing"));
        session.execute(SessionCommand::Play).await.unwrap();
        sleep(millis(5_000)).await;

        session.execute(SessionCommand::Pause).await.unwrap();
        sleep(millis(60_000)).await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, SessionStatus::Paused);
        assert_eq!(snapshot.completed_cycles, 0);
        assert!(snapshot.current_phase.is_none());
        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn session_finishes_after_all_cycles() {
        let session = GuidedSession::spawn(builtin("4-7-8-breathing"));
        let mut updates = session.subscribe();
        session.execute(SessionCommand::Play).await.unwrap();

        sleep(Duration::from_secs(9 * 19) + millis(500)).await;

        let snapshot = updates.borrow_and_update().clone();
        assert_eq!(snapshot.status, SessionStatus::Finished);
        assert_eq!(snapshot.completed_cycles, 9);
        assert_eq!(snapshot.progress_percent, 100.0);
        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn inapplicable_session_rejects_play() {
        let exercise = Exercise::new(
            ExerciseSlug::new("too-long").unwrap(),
            "tooLong",
            "",
            1,
            vec![],
            Cycle::new(vec![Phase::inhale(40), Phase::exhale(40)]).unwrap(),
        )
        .unwrap();
        let session = GuidedSession::spawn(exercise);

        let err = session.execute(SessionCommand::Play).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::SessionInapplicable);
        assert_eq!(session.snapshot().status, SessionStatus::Inapplicable);
        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn reset_returns_to_ready() {
        let session = GuidedSession::spawn(builtin("pursed-lip-breathing"));
        session.execute(SessionCommand::Toggle).await.unwrap();
        sleep(millis(13_000)).await;
        assert_eq!(session.snapshot().completed_cycles, 2);

        session.execute(SessionCommand::Reset).await.unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, SessionStatus::Ready);
        assert_eq!(snapshot.completed_cycles, 0);
        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_the_session_end_when_handle_is_dropped() {
        let session = GuidedSession::spawn(builtin("box-breathing"));
        let mut updates = session.subscribe();
        session.execute(SessionCommand::Play).await.unwrap();

        drop(session);

        // The sender side is dropped once the task exits.
        while updates.changed().await.is_ok() {}
        assert_eq!(updates.borrow().status, SessionStatus::Ready);
    }
}
