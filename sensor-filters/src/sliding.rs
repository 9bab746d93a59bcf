//! Sliding window
//!
//! A fixed-capacity ring of `f64` samples whose size is chosen at runtime. The backing storage
//! is allocated once and reused in place; pushing into a full window overwrites (and returns)
//! the oldest sample.

use alloc::{boxed::Box, vec};
use core::num::NonZeroUsize;

#[derive(Clone, Debug)]
pub struct RingWindow {
    buffer: Box<[f64]>,
    /// Next slot to overwrite.
    idx: usize,
    /// Number of live samples, saturates at the capacity.
    len: usize,
}

impl RingWindow {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            buffer: vec![0.0; capacity.get()].into_boxed_slice(),
            idx: 0,
            len: 0,
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.idx = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Stores `sample`, returning the sample it displaced if the window was already full.
    pub fn push(&mut self, sample: f64) -> Option<f64> {
        let old = self.is_full().then_some(self.buffer[self.idx]);

        self.buffer[self.idx] = sample;
        self.idx = (self.idx + 1) % self.capacity();
        if old.is_none() {
            self.len += 1;
        }

        old
    }

    /// Live samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        let start = (self.idx + self.capacity() - self.len) % self.capacity();

        (start..self.capacity())
            .chain(0..start)
            .map(|i| self.buffer[i])
            .take(self.len)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn window(capacity: usize) -> RingWindow {
        RingWindow::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn new_window_is_empty() {
        let window = window(4);
        assert!(window.is_empty());
        assert!(!window.is_full());
        assert_eq!(window.len(), 0);
        assert_eq!(window.capacity(), 4);
        assert_eq!(window.iter().count(), 0);
    }

    #[test]
    fn push_does_not_evict_until_full() {
        let mut window = window(3);
        assert_eq!(window.push(1.0), None);
        assert_eq!(window.push(2.0), None);
        assert_eq!(window.push(3.0), None);
        assert!(window.is_full());
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn push_into_full_window_returns_oldest() {
        let mut window = window(3);
        for sample in [1.0, 2.0, 3.0] {
            window.push(sample);
        }

        assert_eq!(window.push(4.0), Some(1.0));
        assert_eq!(window.push(5.0), Some(2.0));
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn iter_yields_oldest_first() {
        let mut window = window(3);
        window.push(1.0);
        window.push(2.0);
        assert_eq!(window.iter().collect::<Vec<_>>(), [1.0, 2.0]);

        window.push(3.0);
        window.push(4.0);
        assert_eq!(window.iter().collect::<Vec<_>>(), [2.0, 3.0, 4.0]);
    }

    #[test]
    fn single_slot_window_always_evicts_previous() {
        let mut window = window(1);
        assert_eq!(window.push(5.0), None);
        assert_eq!(window.push(-3.0), Some(5.0));
        assert_eq!(window.iter().collect::<Vec<_>>(), [-3.0]);
    }

    #[test]
    fn clear_empties_window() {
        let mut window = window(2);
        window.push(10.0);
        window.push(20.0);
        window.clear();

        assert!(window.is_empty());
        assert_eq!(window.iter().count(), 0);
        assert_eq!(window.push(7.0), None);
        assert_eq!(window.iter().collect::<Vec<_>>(), [7.0]);
    }
}
