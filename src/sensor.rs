use rand::{rngs::StdRng, Rng, SeedableRng};

/// A simulated sensor that reads a constant quantity with uniform noise.
pub struct NoisySensor {
    rng: StdRng,
    baseline: f64,
    noise: f64,
}

impl NoisySensor {
    pub fn new(seed: u64, baseline: f64, noise: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            baseline,
            noise,
        }
    }

    pub fn read(&mut self) -> f64 {
        self.baseline + self.rng.gen_range(-self.noise..=self.noise)
    }
}

impl Iterator for NoisySensor {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.read())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn readings_stay_within_noise_band() {
        let sensor = NoisySensor::new(1, 25.0, 2.0);
        for reading in sensor.take(1000) {
            assert!((23.0..=27.0).contains(&reading), "{reading}");
        }
    }

    #[test]
    fn same_seed_gives_same_readings() {
        let a: Vec<f64> = NoisySensor::new(42, 25.0, 2.0).take(10).collect();
        let b: Vec<f64> = NoisySensor::new(42, 25.0, 2.0).take(10).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn noiseless_sensor_reads_baseline() {
        let mut sensor = NoisySensor::new(7, -3.5, 0.0);
        assert_eq!(sensor.read(), -3.5);
        assert_eq!(sensor.read(), -3.5);
    }
}
