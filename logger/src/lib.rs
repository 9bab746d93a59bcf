//! Logging macros forwarding to `log` or `defmt`, depending on the caller's features.

#![no_std]

#[cfg(feature = "log")]
#[doc(hidden)]
pub use log as __log;

#[macro_export]
macro_rules! trace {
    ($($args:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::trace!($($args)*);
        #[cfg(feature = "log")]
        $crate::__log::trace!($($args)*);
    }
}

#[macro_export]
macro_rules! debug {
    ($($args:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::debug!($($args)*);
        #[cfg(feature = "log")]
        $crate::__log::debug!($($args)*);
    }
}

#[macro_export]
macro_rules! info {
    ($($args:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::info!($($args)*);
        #[cfg(feature = "log")]
        $crate::__log::info!($($args)*);
    }
}

#[macro_export]
macro_rules! warn {
    ($($args:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::warn!($($args)*);
        #[cfg(feature = "log")]
        $crate::__log::warn!($($args)*);
    }
}

#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::error!($($args)*);
        #[cfg(feature = "log")]
        $crate::__log::error!($($args)*);
    }
}
