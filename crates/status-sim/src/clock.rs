use chrono::{Local, NaiveTime};

const TIME_OF_DAY_FORMAT: &str = "%-I:%M:%S %p";

/// Wall-clock display, regenerated wholesale on every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockTimer {
    display: String,
}

impl Default for ClockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockTimer {
    pub fn new() -> Self {
        Self::at(Local::now().time())
    }

    pub fn at(time: NaiveTime) -> Self {
        Self {
            display: format_time_of_day(time),
        }
    }

    pub fn tick(&mut self) -> &str {
        self.tick_at(Local::now().time())
    }

    pub fn tick_at(&mut self, time: NaiveTime) -> &str {
        self.display = format_time_of_day(time);
        &self.display
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_OF_DAY_FORMAT).to_string()
}
