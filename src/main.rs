use anyhow::{Context, Result as AnyResult};
use clap::Parser;
use sensor_filters::RunningAverageFilter;

use crate::{config::Config, monitor::measure, sensor::NoisySensor};

mod config;
mod monitor;
mod sensor;

fn main() -> AnyResult<()> {
    let config = Config::parse();

    simple_logger::SimpleLogger::new()
        .with_level(config.log_level)
        .env()
        .init()?;

    config.validate()?;

    let mut filter = RunningAverageFilter::new(config.window)
        .with_context(|| format!("Failed to set up moving average of {} samples", config.window))?;
    log::info!("Using {}", filter);

    let sensor = NoisySensor::new(config.seed, config.baseline, config.noise);

    measure(&mut filter, sensor, config.samples, |m| {
        println!("Raw: {:.2} -> Filtered: {:.2}", m.raw, m.filtered);
    });

    match filter.current_average() {
        Some(average) => log::info!("Final average: {:.2} over {} readings", average, filter.len()),
        None => log::warn!("No readings were taken"),
    }

    Ok(())
}
