use std::time::Duration;

use panels::{PanelError, PanelId};
use status_sim::{SimConfig, TimerKind};
use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::{
    dashboard::DashboardState,
    events::{PanelCommand, SessionInput, SessionSnapshot},
    logging::{SessionLogEvent, SessionLogEventKind, SessionLogWriter},
    registry::{RegistryError, TaskId, TaskRegistry},
};

const INPUT_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session is closed")]
    Closed,
    #[error("{} interval must be greater than zero", .0.as_str())]
    ZeroInterval(TimerKind),
    #[error(transparent)]
    Panel(#[from] PanelError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnmountReport {
    pub session_id: u64,
    pub stopped: Vec<TimerKind>,
    pub active_tasks: usize,
    pub final_snapshot: SessionSnapshot,
}

/// One mounted dashboard: three periodic timers feeding a single owner task.
///
/// Timers never touch state. They post [`TimerKind`] ticks into the owner's
/// queue, and the owner applies ticks and panel commands one at a time.
pub struct Session {
    id: u64,
    inputs: Option<mpsc::Sender<SessionInput>>,
    snapshots: watch::Receiver<SessionSnapshot>,
    registry: TaskRegistry,
    timers: Vec<(TaskId, JoinHandle<()>)>,
    owner: Option<JoinHandle<()>>,
}

impl Session {
    /// Must be called from within a tokio runtime.
    pub fn mount(
        id: u64,
        config: SimConfig,
        log: Box<dyn SessionLogWriter>,
    ) -> Result<Self, SessionError> {
        if let Some(timer) = TimerKind::ALL
            .into_iter()
            .find(|timer| config.interval(*timer).is_zero())
        {
            return Err(SessionError::ZeroInterval(timer));
        }

        let state = DashboardState::new(&config);
        let (snapshot_tx, snapshots) = watch::channel(state.snapshot());
        let (inputs, input_rx) = mpsc::channel(INPUT_QUEUE_CAPACITY);

        let owner = tokio::spawn(run_owner(id, state, input_rx, snapshot_tx, log));

        let mut registry = TaskRegistry::new();
        let timers = TimerKind::ALL
            .into_iter()
            .map(|timer| {
                let task_id = registry.register(timer);
                let handle = tokio::spawn(run_timer(
                    timer,
                    config.interval(timer),
                    inputs.clone(),
                ));
                registry.mark_running(task_id);
                (task_id, handle)
            })
            .collect();

        Ok(Self {
            id,
            inputs: Some(inputs),
            snapshots,
            registry,
            timers,
            owner: Some(owner),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    pub fn active_tasks(&self) -> usize {
        self.registry.active_count()
    }

    pub async fn select(&self, id: PanelId) -> Result<SessionSnapshot, SessionError> {
        self.command(PanelCommand::Select(id)).await
    }

    /// Rejects keys outside the catalog before anything reaches the owner.
    pub async fn select_key(&self, key: &str) -> Result<SessionSnapshot, SessionError> {
        let id = key.parse::<PanelId>()?;
        self.select(id).await
    }

    pub async fn clear(&self) -> Result<SessionSnapshot, SessionError> {
        self.command(PanelCommand::Clear).await
    }

    async fn command(&self, command: PanelCommand) -> Result<SessionSnapshot, SessionError> {
        let inputs = self.inputs.as_ref().ok_or(SessionError::Closed)?;
        let (reply, response) = oneshot::channel();
        inputs
            .send(SessionInput::Panel { command, reply })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Closed)
    }

    /// Stops every timer exactly once, then drains and joins the owner.
    pub async fn unmount(mut self) -> Result<UnmountReport, SessionError> {
        let mut stopped = Vec::with_capacity(self.timers.len());
        for (task_id, handle) in std::mem::take(&mut self.timers) {
            handle.abort();
            let _ = handle.await;
            let timer = self.registry.deregister(task_id)?;
            tracing::debug!(session_id = self.id, timer = timer.as_str(), "timer stopped");
            stopped.push(timer);
        }

        self.inputs.take();
        if let Some(owner) = self.owner.take() {
            let _ = owner.await;
        }

        Ok(UnmountReport {
            session_id: self.id,
            stopped,
            active_tasks: self.registry.active_count(),
            final_snapshot: self.snapshot(),
        })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        for (_, handle) in &self.timers {
            handle.abort();
        }
        if let Some(owner) = &self.owner {
            owner.abort();
        }
    }
}

async fn run_timer(timer: TimerKind, period: Duration, inputs: mpsc::Sender<SessionInput>) {
    // First tick lands one full period after mount.
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        if inputs.send(SessionInput::Tick(timer)).await.is_err() {
            return;
        }
    }
}

async fn run_owner(
    session_id: u64,
    mut state: DashboardState,
    mut inputs: mpsc::Receiver<SessionInput>,
    snapshots: watch::Sender<SessionSnapshot>,
    mut log: Box<dyn SessionLogWriter>,
) {
    log.write(SessionLogEvent::new(session_id, SessionLogEventKind::Mounted));

    while let Some(input) = inputs.recv().await {
        match input {
            SessionInput::Tick(timer) => {
                let kind = state.apply_tick(timer);
                log.write(SessionLogEvent::new(session_id, kind));
                snapshots.send_replace(state.snapshot());
            }
            SessionInput::Panel { command, reply } => {
                let kind = state.apply_panel(command);
                log.write(SessionLogEvent::new(session_id, kind));
                let snapshot = state.snapshot();
                snapshots.send_replace(snapshot.clone());
                let _ = reply.send(snapshot);
            }
        }
    }

    log.write(SessionLogEvent::new(session_id, SessionLogEventKind::Unmounted));
}
