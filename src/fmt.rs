//! Internal logging shim.
//!
//! Routes the crate's few diagnostic call sites to `defmt` or `log`
//! depending on the enabled feature, and compiles them out entirely when
//! neither backend is selected. Call sites stick to plain integer
//! formatting so both backends accept the same format strings.

#![allow(unused_macros)]

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt-0-3")]
        ::defmt::trace!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "defmt-0-3")))]
        ::log::trace!($($arg)*);
        #[cfg(not(any(feature = "defmt-0-3", feature = "log")))]
        let _ = ($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt-0-3")]
        ::defmt::debug!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "defmt-0-3")))]
        ::log::debug!($($arg)*);
        #[cfg(not(any(feature = "defmt-0-3", feature = "log")))]
        let _ = ($($arg)*);
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt-0-3")]
        ::defmt::warn!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "defmt-0-3")))]
        ::log::warn!($($arg)*);
        #[cfg(not(any(feature = "defmt-0-3", feature = "log")))]
        let _ = ($($arg)*);
    }};
}
