use panels::PanelSelector;
use rand::{rngs::StdRng, SeedableRng};
use status_sim::{CountdownStep, SimConfig, StatusBoard, TickOutcome, TimerKind};

use crate::{
    events::{PanelCommand, SessionSnapshot},
    logging::SessionLogEventKind,
};

/// All state of one mounted dashboard. Only the session owner task holds it.
#[derive(Debug, Clone)]
pub struct DashboardState {
    board: StatusBoard,
    selector: PanelSelector,
    rng: StdRng,
}

impl DashboardState {
    pub fn new(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_board(StatusBoard::new(config), rng)
    }

    pub fn with_board(board: StatusBoard, rng: StdRng) -> Self {
        Self {
            board,
            selector: PanelSelector::new(),
            rng,
        }
    }

    pub fn board(&self) -> &StatusBoard {
        &self.board
    }

    pub fn selector(&self) -> &PanelSelector {
        &self.selector
    }

    pub fn apply_tick(&mut self, timer: TimerKind) -> SessionLogEventKind {
        match self.board.apply_tick(timer, &mut self.rng) {
            TickOutcome::Clock { .. } => SessionLogEventKind::ClockTicked,
            TickOutcome::Countdown {
                step: CountdownStep::Wrapped,
                ..
            } => SessionLogEventKind::CountdownWrapped,
            TickOutcome::Countdown { remaining, .. } => {
                SessionLogEventKind::CountdownTicked { remaining }
            }
            TickOutcome::Metrics { ticks, .. } => SessionLogEventKind::MetricsPerturbed { ticks },
        }
    }

    pub fn apply_panel(&mut self, command: PanelCommand) -> SessionLogEventKind {
        match command {
            PanelCommand::Select(id) => {
                self.selector.select(id);
                SessionLogEventKind::PanelSelected(id)
            }
            PanelCommand::Clear => {
                self.selector.clear();
                SessionLogEventKind::PanelCleared
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let countdown = self.board.countdown();
        let metrics = self.board.metrics();
        SessionSnapshot {
            clock: self.board.clock().display().to_owned(),
            countdown_seconds: countdown.remaining(),
            countdown: countdown.formatted(),
            gauges: *metrics.state(),
            metrics: self.board.formatted_metrics(),
            metrics_ticks: metrics.ticks(),
            is_open: self.selector.is_open(),
            panel: self.selector.current_content(),
        }
    }
}
