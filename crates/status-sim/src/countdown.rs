use crate::config::DEFAULT_COUNTDOWN_CEILING_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownStep {
    Decremented,
    Wrapped,
}

/// Sawtooth countdown. Zero stays visible for one full tick before the
/// counter jumps back to the ceiling, so one period is `ceiling + 1` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    ceiling: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN_CEILING_SECS)
    }
}

impl Countdown {
    pub fn new(ceiling: u32) -> Self {
        Self {
            remaining: ceiling,
            ceiling,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    pub fn tick(&mut self) -> CountdownStep {
        if self.remaining > 0 {
            self.remaining -= 1;
            CountdownStep::Decremented
        } else {
            self.remaining = self.ceiling;
            CountdownStep::Wrapped
        }
    }

    pub fn formatted(&self) -> String {
        format_countdown(self.remaining)
    }
}

pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
