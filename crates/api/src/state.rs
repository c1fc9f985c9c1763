use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use runtime::SessionSnapshot;
use status_sim::SimConfig;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StartSessionError {
    SessionIdOverflow,
}

/// Sent to the browser over the session socket.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ServerMessage {
    Connected { session_id: u64 },
    Snapshot(SessionSnapshot),
    Rejected { reason: String },
}

impl ServerMessage {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Sent by the browser: a button press or an overlay dismissal.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ClientCommand {
    Select { panel: String },
    Close,
}

#[derive(Clone, Debug)]
pub struct AppState {
    next_session_id: Arc<AtomicU64>,
    sim_config: SimConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl AppState {
    pub fn new(sim_config: SimConfig) -> Self {
        Self {
            next_session_id: Arc::new(AtomicU64::new(0)),
            sim_config,
        }
    }

    pub fn sim_config(&self) -> SimConfig {
        self.sim_config
    }

    pub fn start_session(&self) -> Result<u64, StartSessionError> {
        let previous = self
            .next_session_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .map_err(|_| StartSessionError::SessionIdOverflow)?;

        Ok(previous + 1)
    }
}
