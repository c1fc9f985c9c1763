use rand::Rng;

/// One of the four simulated status gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gauge {
    TotalValueLocked,
    Volume24h,
    Trades24h,
    ActiveUsers,
}

impl Gauge {
    pub const ALL: [Gauge; 4] = [
        Gauge::TotalValueLocked,
        Gauge::Volume24h,
        Gauge::Trades24h,
        Gauge::ActiveUsers,
    ];

    pub fn seed_value(self) -> f64 {
        match self {
            Self::TotalValueLocked => 1_250_000.0,
            Self::Volume24h => 450_000.0,
            Self::Trades24h => 1_200.0,
            Self::ActiveUsers => 850.0,
        }
    }

    /// Exclusive upper bound on the magnitude of a single tick's delta.
    pub fn max_step(self) -> f64 {
        match self {
            Self::TotalValueLocked => 10_000.0,
            Self::Volume24h => 5_000.0,
            Self::Trades24h => 10.0,
            Self::ActiveUsers => 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct MetricsState {
    pub total_value_locked: f64,
    pub volume_24h: f64,
    pub trades_24h: f64,
    pub active_users: f64,
}

impl Default for MetricsState {
    fn default() -> Self {
        Self {
            total_value_locked: Gauge::TotalValueLocked.seed_value(),
            volume_24h: Gauge::Volume24h.seed_value(),
            trades_24h: Gauge::Trades24h.seed_value(),
            active_users: Gauge::ActiveUsers.seed_value(),
        }
    }
}

impl MetricsState {
    pub fn get(&self, gauge: Gauge) -> f64 {
        match gauge {
            Gauge::TotalValueLocked => self.total_value_locked,
            Gauge::Volume24h => self.volume_24h,
            Gauge::Trades24h => self.trades_24h,
            Gauge::ActiveUsers => self.active_users,
        }
    }

    fn get_mut(&mut self, gauge: Gauge) -> &mut f64 {
        match gauge {
            Gauge::TotalValueLocked => &mut self.total_value_locked,
            Gauge::Volume24h => &mut self.volume_24h,
            Gauge::Trades24h => &mut self.trades_24h,
            Gauge::ActiveUsers => &mut self.active_users,
        }
    }
}

/// Random walk over the four gauges. Values are never clamped, so a long
/// session can walk a gauge below zero.
#[derive(Debug, Clone, Default)]
pub struct MetricsSimulator {
    state: MetricsState,
    ticks: u64,
}

impl MetricsSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: MetricsState) -> Self {
        Self { state, ticks: 0 }
    }

    pub fn state(&self) -> &MetricsState {
        &self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MetricsState {
        for gauge in Gauge::ALL {
            let delta = signed_delta(rng, gauge.max_step());
            *self.state.get_mut(gauge) += delta;
        }
        self.ticks += 1;
        self.state
    }
}

fn signed_delta<R: Rng + ?Sized>(rng: &mut R, max_step: f64) -> f64 {
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    sign * rng.gen_range(0.0..max_step)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::mock::StepRng, rngs::StdRng, SeedableRng};

    use super::{Gauge, MetricsSimulator, MetricsState};

    #[test]
    fn seeds_match_initial_dashboard_values() {
        let state = MetricsState::default();

        assert_eq!(state.total_value_locked, 1_250_000.0);
        assert_eq!(state.volume_24h, 450_000.0);
        assert_eq!(state.trades_24h, 1_200.0);
        assert_eq!(state.active_users, 850.0);
    }

    #[test]
    fn seeded_simulators_are_deterministic() {
        let mut sim_a = MetricsSimulator::new();
        let mut sim_b = MetricsSimulator::new();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let ticks_a: Vec<MetricsState> = (0..10).map(|_| sim_a.tick(&mut rng_a)).collect();
        let ticks_b: Vec<MetricsState> = (0..10).map(|_| sim_b.tick(&mut rng_b)).collect();

        assert_eq!(ticks_a, ticks_b);
        assert_eq!(sim_a.ticks(), 10);
    }

    #[test]
    fn every_gauge_stays_within_n_steps_of_its_seed() {
        let ticks = 1_000_u64;
        let mut sim = MetricsSimulator::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..ticks {
            sim.tick(&mut rng);
        }

        for gauge in Gauge::ALL {
            let bound = ticks as f64 * gauge.max_step();
            let value = sim.state().get(gauge);
            assert!(
                (gauge.seed_value() - bound..=gauge.seed_value() + bound).contains(&value),
                "{gauge:?} drifted to {value}"
            );
        }
    }

    #[test]
    fn a_single_tick_moves_each_gauge_by_less_than_its_step() {
        let mut sim = MetricsSimulator::new();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..200 {
            let before = *sim.state();
            let after = sim.tick(&mut rng);
            for gauge in Gauge::ALL {
                assert!((after.get(gauge) - before.get(gauge)).abs() < gauge.max_step());
            }
        }
    }

    #[test]
    fn gauges_are_not_clamped_at_zero() {
        // A constant all-ones source always picks the negative sign and a
        // near-maximal magnitude.
        let mut rng = StepRng::new(u64::MAX, 0);
        let mut sim = MetricsSimulator::new();

        for _ in 0..200 {
            sim.tick(&mut rng);
        }

        assert!(sim.state().active_users < 0.0);
        assert!(sim.state().trades_24h < 0.0);
        assert!(sim.state().active_users >= 850.0 - 200.0 * 5.0);
    }
}
