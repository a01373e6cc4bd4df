//! Logging macros
//!
//! Library crates cannot assume a global `defmt` logger is linked, so every
//! log statement goes through these macros. Crates using them must enable
//! their own `defmt` dependency together with `clcd-hal/defmt`.

#[cfg(feature = "defmt")]
mod defmt_enabled {
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => { $crate::__defmt::trace!($($arg)*) };
    }

    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => { $crate::__defmt::debug!($($arg)*) };
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => { $crate::__defmt::info!($($arg)*) };
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => { $crate::__defmt::warn!($($arg)*) };
    }
}

#[cfg(not(feature = "defmt"))]
mod defmt_disabled {
    #[macro_export]
    macro_rules! trace {
        ($fmt:literal $(, $x:expr)* $(,)?) => {{ let _ = ($(&$x),*); }};
    }

    #[macro_export]
    macro_rules! debug {
        ($fmt:literal $(, $x:expr)* $(,)?) => {{ let _ = ($(&$x),*); }};
    }

    #[macro_export]
    macro_rules! info {
        ($fmt:literal $(, $x:expr)* $(,)?) => {{ let _ = ($(&$x),*); }};
    }

    #[macro_export]
    macro_rules! warn {
        ($fmt:literal $(, $x:expr)* $(,)?) => {{ let _ = ($(&$x),*); }};
    }
}
