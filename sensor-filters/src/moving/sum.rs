use core::num::NonZeroUsize;

use crate::sliding::RingWindow;

/// Sum of the samples currently held by a [`RingWindow`], maintained incrementally.
#[derive(Clone, Debug)]
pub struct RunningSum {
    window: RingWindow,
    current: f64,
}

impl RunningSum {
    pub fn new(window_size: NonZeroUsize) -> Self {
        Self {
            window: RingWindow::new(window_size),
            current: 0.0,
        }
    }

    #[inline(always)]
    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }

    pub fn window(&self) -> &RingWindow {
        &self.window
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn clear(&mut self) {
        self.window.clear();
        self.current = 0.0;
    }

    pub fn update(&mut self, sample: f64) -> f64 {
        match self.window.push(sample) {
            Some(old) => self.current = self.current - old + sample,
            None => self.current += sample,
        }
        self.current
    }

    /// Recomputes the sum from the live samples, discarding accumulated rounding error.
    pub fn resync(&mut self) -> f64 {
        self.current = self.window.iter().sum();
        self.current
    }
}
