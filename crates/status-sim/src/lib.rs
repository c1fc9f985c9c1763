mod clock;
mod config;
mod countdown;
mod format;
mod metrics;
mod state;

pub use clock::{format_time_of_day, ClockTimer};
pub use config::{SimConfig, TimerKind, DEFAULT_COUNTDOWN_CEILING_SECS};
pub use countdown::{format_countdown, Countdown, CountdownStep};
pub use format::format_currency;
pub use metrics::{Gauge, MetricsSimulator, MetricsState};
pub use state::{FormattedMetrics, StatusBoard, TickOutcome};
