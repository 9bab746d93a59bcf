pub mod average;
pub mod sum;
