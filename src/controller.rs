//! Session controller: runs a [`Game`] on a tokio task.
//!
//! The task handles one command or timer at a time. It owns a single
//! delayed-task slot: the CPU reply after a human move, or the reset after
//! game over. Scheduling replaces whatever was pending, `force_reset`
//! clears it, and dropping the controller aborts the task along with any
//! pending timer. Every transition publishes a fresh [`Snapshot`] on a
//! `watch` channel.

use crate::config::GameConfig;
use crate::error::ControllerError;
use crate::games::tictactoe::{Effect, Game, Selection, Snapshot};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument};

/// Delayed work owned by the session task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Apply the CPU reply.
    OpponentMove,
    /// Clear the finished board.
    Reset,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    kind: TaskKind,
    deadline: Instant,
}

#[derive(Debug)]
enum Command {
    SelectCell {
        index: usize,
        reply: oneshot::Sender<Selection>,
    },
    ForceReset {
        reply: oneshot::Sender<()>,
    },
}

/// Handle to a running game session.
#[derive(Debug)]
pub struct GameController {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
    task: JoinHandle<()>,
}

impl GameController {
    /// Starts a session on the current tokio runtime.
    #[instrument]
    pub fn spawn(config: GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        let game = Game::new();
        let (snapshot_tx, snapshot_rx) = watch::channel(game.snapshot());
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let session = Session {
            game,
            rng,
            config,
            pending: None,
            snapshots: snapshot_tx,
        };
        let task = tokio::spawn(session.run(command_rx));
        info!("Game session started");

        Self {
            commands: command_tx,
            snapshots: snapshot_rx,
            task,
        }
    }

    /// Forwards a human cell selection (index 0-8).
    #[instrument(skip(self))]
    pub async fn select_cell(&self, index: usize) -> Result<Selection, ControllerError> {
        let (reply, rx) = oneshot::channel();
        self.commands.send(Command::SelectCell { index, reply })?;
        Ok(rx.await?)
    }

    /// Cancels pending work and starts a fresh game. Scores are kept.
    #[instrument(skip(self))]
    pub async fn force_reset(&self) -> Result<(), ControllerError> {
        let (reply, rx) = oneshot::channel();
        self.commands.send(Command::ForceReset { reply })?;
        Ok(rx.await?)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified after every transition.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }
}

impl Drop for GameController {
    fn drop(&mut self) {
        self.task.abort();
    }
}

struct Session {
    game: Game,
    rng: StdRng,
    config: GameConfig,
    pending: Option<Pending>,
    snapshots: watch::Sender<Snapshot>,
}

impl Session {
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        loop {
            let deadline = self.pending.map(|p| p.deadline);
            tokio::select! {
                biased;
                _ = wait_for(deadline) => self.fire(),
                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
            }
        }
        debug!("Game session stopped");
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::SelectCell { index, reply } => {
                let selection = match self.game.select_cell(index) {
                    Ok(effect) => {
                        self.apply(effect);
                        self.publish();
                        Selection::Accepted
                    }
                    Err(reason) => Selection::Ignored(reason),
                };
                let _ = reply.send(selection);
            }
            Command::ForceReset { reply } => {
                if let Some(pending) = self.pending.take() {
                    debug!(kind = ?pending.kind, "Cancelled pending task");
                }
                self.game.reset();
                self.publish();
                let _ = reply.send(());
            }
        }
    }

    fn fire(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        debug!(kind = ?pending.kind, "Delayed task fired");

        match pending.kind {
            TaskKind::OpponentMove => {
                if let Some(effect) = self.game.play_opponent(&mut self.rng) {
                    self.apply(effect);
                }
            }
            TaskKind::Reset => self.game.reset(),
        }
        self.publish();
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None => self.pending = None,
            Effect::ScheduleOpponentMove => {
                self.schedule(TaskKind::OpponentMove, self.config.opponent_delay())
            }
            Effect::ScheduleReset => self.schedule(TaskKind::Reset, self.config.reset_delay()),
        }
    }

    fn schedule(&mut self, kind: TaskKind, delay: std::time::Duration) {
        if let Some(previous) = self.pending.replace(Pending {
            kind,
            deadline: Instant::now() + delay,
        }) {
            debug!(kind = ?previous.kind, "Replaced pending task");
        }
        debug!(?kind, ?delay, "Scheduled task");
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.game.snapshot());
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
