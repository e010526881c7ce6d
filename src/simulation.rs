//! Simulation driver: owns the lattice, steps it and records the history.

use std::time::Instant;

use tracing::{debug, info};

use crate::automaton::Lattice;
use crate::error::ConfigError;
use crate::history::SimulationHistory;
use crate::seed::{self, DEFAULT_DENSITY};

/// Parameters for a seeded run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Edge length of the cubic lattice.
    pub size: usize,
    /// Generations to compute in [`Simulation::run_configured`].
    pub generations: usize,
    pub seed: u64,
    /// Probability of a cell starting alive.
    pub density: f64,
    /// Worker threads used for stepping.
    pub num_threads: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: 10,
            generations: 10,
            seed: 0,
            density: DEFAULT_DENSITY,
            num_threads: 1,
        }
    }
}

impl SimulationConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.num_threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange(self.density));
        }
        Ok(())
    }
}

/// Drives a [`Lattice`] forward and records every generation.
pub struct Simulation {
    lattice: Lattice,
    history: SimulationHistory,
    thread_pool: rayon::ThreadPool,
    generations: usize,
}

fn build_pool(num_threads: usize) -> Result<rayon::ThreadPool, ConfigError> {
    if num_threads == 0 {
        return Err(ConfigError::ZeroThreads);
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| ConfigError::ThreadPool(e.to_string()))
}

impl Simulation {
    /// Validate `config`, seed the lattice and build the worker pool.
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lattice = seed::seeded_grid(config.seed, config.size, config.density)?;
        let mut sim = Self::from_lattice(lattice, config.num_threads)?;
        sim.generations = config.generations;

        info!(
            size = config.size,
            seed = config.seed,
            density = config.density,
            generations = config.generations,
            threads = config.num_threads,
            "simulation created"
        );
        Ok(sim)
    }

    /// Drive an existing lattice. The configured generation count defaults to 0.
    pub fn from_lattice(lattice: Lattice, num_threads: usize) -> Result<Self, ConfigError> {
        let thread_pool = build_pool(num_threads)?;
        let history = SimulationHistory::for_lattice(&lattice);
        Ok(Self {
            lattice,
            history,
            thread_pool,
            generations: 0,
        })
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn history(&self) -> &SimulationHistory {
        &self.history
    }

    pub fn into_history(self) -> SimulationHistory {
        self.history
    }

    pub fn generation(&self) -> u64 {
        self.lattice.generation()
    }

    /// Advance one generation and record it.
    pub fn step(&mut self) {
        let start = Instant::now();
        let lattice = &mut self.lattice;
        self.thread_pool.install(|| lattice.step());
        let elapsed = start.elapsed();

        self.history.add_compute_time(elapsed);
        self.history.record(self.lattice.snapshot());

        debug!(
            generation = self.lattice.generation(),
            alive = self.lattice.alive_count(),
            elapsed_us = elapsed.as_micros() as u64,
            "step"
        );
    }

    /// Advance `generations` times.
    pub fn run(&mut self, generations: usize) {
        self.run_with_progress(generations, |_, _| {});
    }

    /// Advance the generation count given at construction.
    pub fn run_configured(&mut self) {
        self.run(self.generations);
    }

    /// Advance `generations` times, calling `progress(done, total)` after each step.
    pub fn run_with_progress(&mut self, generations: usize, mut progress: impl FnMut(usize, usize)) {
        for done in 1..=generations {
            self.step();
            progress(done, generations);
        }

        info!(
            generations,
            total_generation = self.lattice.generation(),
            calculation_ms = self.history.elapsed_compute_time().as_secs_f64() * 1000.0,
            "run complete"
        );
    }
}
