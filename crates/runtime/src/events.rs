use panels::{PanelEntry, PanelId};
use status_sim::{FormattedMetrics, MetricsState, TimerKind};
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    Select(PanelId),
    Clear,
}

/// Messages consumed by a session's owner task.
#[derive(Debug)]
pub(crate) enum SessionInput {
    Tick(TimerKind),
    Panel {
        command: PanelCommand,
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Everything the view reads, captured after one applied input.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SessionSnapshot {
    pub clock: String,
    pub countdown_seconds: u32,
    pub countdown: String,
    pub gauges: MetricsState,
    pub metrics: FormattedMetrics,
    pub metrics_ticks: u64,
    pub is_open: bool,
    pub panel: Option<&'static PanelEntry>,
}
