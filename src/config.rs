use anyhow::{ensure, Result as AnyResult};
use clap::Parser;
use log::LevelFilter;

/// Feeds simulated sensor readings through a moving average and prints raw vs. filtered values.
#[derive(Debug, Clone, Parser)]
#[clap(about, version)]
pub struct Config {
    /// Number of most recent readings to average.
    #[clap(long, short, default_value_t = 3)]
    pub window: usize,

    /// How many readings to take before stopping.
    #[clap(long, short = 'n', default_value_t = 10)]
    pub samples: usize,

    /// Seed of the simulated sensor, runs with the same seed produce the same readings.
    #[clap(long, default_value_t = 42)]
    pub seed: u64,

    /// The true value the simulated sensor measures.
    #[clap(long, default_value_t = 25.0)]
    pub baseline: f64,

    /// Readings are uniformly distributed in `baseline ± noise`.
    #[clap(long, default_value_t = 2.0)]
    pub noise: f64,

    /// Most verbose log level to print, `RUST_LOG` overrides it.
    #[clap(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: 3,
            samples: 10,
            seed: 42,
            baseline: 25.0,
            noise: 2.0,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn validate(&self) -> AnyResult<()> {
        ensure!(self.baseline.is_finite(), "baseline must be finite");
        ensure!(
            self.noise.is_finite() && self.noise >= 0.0,
            "noise must be a non-negative number, got {}",
            self.noise
        );
        ensure!(
            (2.0 * self.noise).is_finite()
                && (self.baseline + self.noise).is_finite()
                && (self.baseline - self.noise).is_finite(),
            "readings in {} ± {} are out of range",
            self.baseline,
            self.noise
        );

        Ok(())
    }
}
