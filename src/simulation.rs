//! Seeded Monte Carlo experiments.
//!
//! Simulates the classic classroom chance experiments (coin flip, die
//! roll, two dice) and tracks how the running relative frequency of
//! success converges toward the theoretical probability.
//!
//! # Reproducibility
//!
//! The RNG is injected by the caller, so a fixed seed via [`create_rng`]
//! replays the exact same trial sequence. The underlying algorithm
//! (SmallRng) is deterministic for a given seed on the same platform.

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// # Examples
/// ```
/// use statkit::simulation::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// A chance experiment with a fixed success event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experiment {
    /// One fair coin; success is heads.
    CoinFlip,
    /// One fair six-sided die; success is rolling a six.
    DieRoll,
    /// Two fair dice; success is a sum of seven.
    TwoDice,
}

impl Experiment {
    /// Theoretical probability of the success event.
    pub fn theoretical(&self) -> f64 {
        match self {
            Experiment::CoinFlip => 0.5,
            Experiment::DieRoll => 1.0 / 6.0,
            Experiment::TwoDice => 1.0 / 6.0,
        }
    }

    fn trial<R: Rng>(&self, rng: &mut R) -> bool {
        match self {
            Experiment::CoinFlip => rng.random::<f64>() < 0.5,
            Experiment::DieRoll => rng.random_range(1..=6) == 6,
            Experiment::TwoDice => {
                let sum: u32 = rng.random_range(1..=6) + rng.random_range(1..=6);
                sum == 7
            }
        }
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    /// Running relative frequency of success after each trial.
    pub running_frequency: Vec<f64>,
    /// Number of successes over all trials.
    pub successes: u64,
    /// Final empirical relative frequency.
    pub empirical: f64,
    /// Theoretical probability of the success event.
    pub theoretical: f64,
}

/// Runs `trials` repetitions of the experiment.
///
/// # Returns
/// - `None` for zero trials.
///
/// # Examples
/// ```
/// use statkit::simulation::{create_rng, run, Experiment};
/// let mut rng = create_rng(7);
/// let result = run(Experiment::CoinFlip, 1000, &mut rng).unwrap();
/// assert!((result.empirical - 0.5).abs() < 0.05);
/// ```
pub fn run<R: Rng>(experiment: Experiment, trials: u64, rng: &mut R) -> Option<SimulationRun> {
    if trials == 0 {
        return None;
    }
    let mut running = Vec::with_capacity(trials as usize);
    let mut successes = 0u64;
    for t in 1..=trials {
        if experiment.trial(rng) {
            successes += 1;
        }
        running.push(successes as f64 / t as f64);
    }
    Some(SimulationRun {
        empirical: successes as f64 / trials as f64,
        successes,
        running_frequency: running,
        theoretical: experiment.theoretical(),
    })
}
