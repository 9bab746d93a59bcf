pub trait Filter {
    fn update(&mut self, sample: f64) -> Option<f64>;
    fn clear(&mut self);
}
