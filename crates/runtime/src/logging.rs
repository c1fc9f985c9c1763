use std::sync::{Arc, Mutex};

use panels::PanelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLogEventKind {
    Mounted,
    ClockTicked,
    CountdownTicked { remaining: u32 },
    CountdownWrapped,
    MetricsPerturbed { ticks: u64 },
    PanelSelected(PanelId),
    PanelCleared,
    Unmounted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLogEvent {
    pub session_id: u64,
    pub kind: SessionLogEventKind,
}

impl SessionLogEvent {
    pub fn new(session_id: u64, kind: SessionLogEventKind) -> Self {
        Self { session_id, kind }
    }
}

pub trait SessionLogWriter: Send {
    fn write(&mut self, event: SessionLogEvent);
}

/// Forwards session events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogWriter;

impl SessionLogWriter for TracingLogWriter {
    fn write(&mut self, event: SessionLogEvent) {
        let session_id = event.session_id;
        match event.kind {
            SessionLogEventKind::Mounted => tracing::info!(session_id, "session mounted"),
            SessionLogEventKind::Unmounted => tracing::info!(session_id, "session unmounted"),
            SessionLogEventKind::ClockTicked => tracing::trace!(session_id, "clock ticked"),
            SessionLogEventKind::CountdownTicked { remaining } => {
                tracing::trace!(session_id, remaining, "countdown ticked")
            }
            SessionLogEventKind::CountdownWrapped => {
                tracing::debug!(session_id, "countdown wrapped to ceiling")
            }
            SessionLogEventKind::MetricsPerturbed { ticks } => {
                tracing::debug!(session_id, ticks, "metrics perturbed")
            }
            SessionLogEventKind::PanelSelected(panel) => {
                tracing::info!(session_id, panel = panel.as_str(), "panel selected")
            }
            SessionLogEventKind::PanelCleared => tracing::info!(session_id, "panel cleared"),
        }
    }
}

/// Shared in-memory log. Clones append to the same buffer, so a test can keep
/// one handle while the session owns another.
#[derive(Debug, Default, Clone)]
pub struct InMemorySessionLogWriter {
    events: Arc<Mutex<Vec<SessionLogEvent>>>,
}

impl InMemorySessionLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SessionLogEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn count(&self, predicate: impl Fn(&SessionLogEventKind) -> bool) -> usize {
        self.events()
            .iter()
            .filter(|event| predicate(&event.kind))
            .count()
    }
}

impl SessionLogWriter for InMemorySessionLogWriter {
    fn write(&mut self, event: SessionLogEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}
