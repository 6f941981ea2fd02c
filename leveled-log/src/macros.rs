// ABOUTME: Variadic front-ends for the Logger emitters.
// ABOUTME: Each macro takes a logger followed by any number of Display values.

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($method:ident, $logger:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        ($logger).$method(&[$(&$arg as &dyn ::std::fmt::Display),*])
    }};
}

/// `debug!(logger, "cache miss", key)`
#[macro_export]
macro_rules! debug {
    ($($t:tt)*) => { $crate::__emit!(debug, $($t)*) };
}

#[macro_export]
macro_rules! info {
    ($($t:tt)*) => { $crate::__emit!(info, $($t)*) };
}

#[macro_export]
macro_rules! warn {
    ($($t:tt)*) => { $crate::__emit!(warn, $($t)*) };
}

#[macro_export]
macro_rules! error {
    ($($t:tt)*) => { $crate::__emit!(error, $($t)*) };
}

/// Emits at FATAL and exits with status 1, unless the logger suppresses FATAL.
#[macro_export]
macro_rules! fatal {
    ($($t:tt)*) => { $crate::__emit!(fatal, $($t)*) };
}
