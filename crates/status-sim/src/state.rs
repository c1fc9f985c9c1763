use rand::Rng;

use crate::{
    clock::ClockTimer,
    config::{SimConfig, TimerKind},
    countdown::{Countdown, CountdownStep},
    format::format_currency,
    metrics::{MetricsSimulator, MetricsState},
};

/// What a single timer tick changed.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Clock { display: String },
    Countdown { remaining: u32, step: CountdownStep },
    Metrics { state: MetricsState, ticks: u64 },
}

/// Gauge values rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FormattedMetrics {
    pub total_value_locked: String,
    pub volume_24h: String,
    pub trades_24h: String,
    pub active_users: String,
}

impl From<&MetricsState> for FormattedMetrics {
    fn from(state: &MetricsState) -> Self {
        Self {
            total_value_locked: format_currency(state.total_value_locked),
            volume_24h: format_currency(state.volume_24h),
            trades_24h: format_currency(state.trades_24h),
            active_users: format_currency(state.active_users),
        }
    }
}

/// Clock, countdown and gauges. Each timer only ever touches its own slice.
#[derive(Debug, Clone)]
pub struct StatusBoard {
    clock: ClockTimer,
    countdown: Countdown,
    metrics: MetricsSimulator,
}

impl StatusBoard {
    pub fn new(config: &SimConfig) -> Self {
        Self::with_clock(config, ClockTimer::new())
    }

    pub fn with_clock(config: &SimConfig, clock: ClockTimer) -> Self {
        Self {
            clock,
            countdown: Countdown::new(config.countdown_ceiling_secs),
            metrics: MetricsSimulator::new(),
        }
    }

    pub fn clock(&self) -> &ClockTimer {
        &self.clock
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn metrics(&self) -> &MetricsSimulator {
        &self.metrics
    }

    pub fn formatted_metrics(&self) -> FormattedMetrics {
        FormattedMetrics::from(self.metrics.state())
    }

    pub fn apply_tick<R: Rng + ?Sized>(&mut self, timer: TimerKind, rng: &mut R) -> TickOutcome {
        match timer {
            TimerKind::Clock => TickOutcome::Clock {
                display: self.clock.tick().to_string(),
            },
            TimerKind::Countdown => {
                let step = self.countdown.tick();
                TickOutcome::Countdown {
                    remaining: self.countdown.remaining(),
                    step,
                }
            }
            TimerKind::Metrics => {
                let state = self.metrics.tick(rng);
                TickOutcome::Metrics {
                    state,
                    ticks: self.metrics.ticks(),
                }
            }
        }
    }
}
