use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterError {
    /// The averaging window must hold at least one sample.
    InvalidConfiguration { capacity: usize },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { capacity } => {
                write!(f, "invalid window capacity {capacity}, must be > 0")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterError {}
