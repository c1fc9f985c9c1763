use std::time::Duration;

pub const DEFAULT_COUNTDOWN_CEILING_SECS: u32 = 180;

/// The three periodic timers a status board runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    Clock,
    Countdown,
    Metrics,
}

impl TimerKind {
    pub const ALL: [TimerKind; 3] = [TimerKind::Clock, TimerKind::Countdown, TimerKind::Metrics];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Countdown => "countdown",
            Self::Metrics => "metrics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub clock_interval_ms: u64,
    pub countdown_interval_ms: u64,
    pub metrics_interval_ms: u64,
    pub countdown_ceiling_secs: u32,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: 1_000,
            countdown_interval_ms: 1_000,
            metrics_interval_ms: 3_000,
            countdown_ceiling_secs: DEFAULT_COUNTDOWN_CEILING_SECS,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn interval(&self, timer: TimerKind) -> Duration {
        let millis = match timer {
            TimerKind::Clock => self.clock_interval_ms,
            TimerKind::Countdown => self.countdown_interval_ms,
            TimerKind::Metrics => self.metrics_interval_ms,
        };
        Duration::from_millis(millis)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
