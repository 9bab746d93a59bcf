#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
extern crate logger;

pub mod error;
pub mod filter;
pub mod moving;
pub mod sliding;

pub use error::FilterError;
pub use filter::Filter;
pub use moving::average::RunningAverageFilter;
