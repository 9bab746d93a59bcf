//! Arithmetic mean over a fixed window of the most recent samples.
//!
//! Until the window has been filled, the average covers only the samples seen since the filter
//! was created or last reset. Once full, every new sample evicts the oldest one and the sum is
//! updated in O(1).

use core::{fmt, num::NonZeroUsize};

use crate::{error::FilterError, filter::Filter, moving::sum::RunningSum};

#[derive(Clone)]
pub struct RunningAverageFilter {
    sum: RunningSum,
    /// Set once a non-finite sample has been reported, cleared on reset.
    tainted: bool,
}

impl RunningAverageFilter {
    pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(5) {
        Some(capacity) => capacity,
        None => unreachable!(),
    };

    pub fn new(capacity: usize) -> Result<Self, FilterError> {
        match NonZeroUsize::new(capacity) {
            Some(capacity) => Ok(Self::with_capacity(capacity)),
            None => {
                warn!("Rejecting moving average window of {} samples", capacity);
                Err(FilterError::InvalidConfiguration { capacity })
            }
        }
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        debug!("Creating moving average over {} samples", capacity.get());
        Self {
            sum: RunningSum::new(capacity),
            tainted: false,
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.sum.window_size()
    }

    /// Number of samples the current average is taken over.
    pub fn len(&self) -> usize {
        self.sum.window().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sum.window().is_empty()
    }

    /// Returns `true` once the window holds `capacity` samples.
    pub fn is_full(&self) -> bool {
        self.sum.window().is_full()
    }

    /// Live samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.sum.window().iter()
    }

    /// Adds `value` to the window and returns the updated average.
    pub fn ingest(&mut self, value: f64) -> f64 {
        if !value.is_finite() && !self.tainted {
            warn!("Non-finite sample entered the moving average window");
            self.tainted = true;
        }

        let sum = self.sum.update(value);
        sum / self.len() as f64
    }

    pub fn reset(&mut self) {
        trace!("Resetting moving average");
        self.sum.clear();
        self.tainted = false;
    }

    /// The average of the live samples, or `None` before the first sample.
    pub fn current_average(&self) -> Option<f64> {
        let samples = self.len();
        (samples > 0).then(|| self.sum.current() / samples as f64)
    }

    /// Recomputes the running sum from the window contents and returns the corrected average.
    ///
    /// Long streams accumulate rounding error from the incremental update. A non-finite sample
    /// also leaves the sum non-finite after it has been evicted; resyncing clears that once the
    /// window no longer holds the sample.
    pub fn resync(&mut self) -> Option<f64> {
        self.sum.resync();
        self.current_average()
    }
}

impl Default for RunningAverageFilter {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl Filter for RunningAverageFilter {
    fn update(&mut self, sample: f64) -> Option<f64> {
        Some(self.ingest(sample))
    }

    fn clear(&mut self) {
        self.reset();
    }
}

impl fmt::Debug for RunningAverageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunningAverageFilter")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("average", &self.current_average())
            .finish()
    }
}

impl fmt::Display for RunningAverageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RunningAverageFilter(capacity={})", self.capacity())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RunningAverageFilter {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "RunningAverageFilter(capacity={})", self.capacity())
    }
}
