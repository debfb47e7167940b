//! Logging shims so call sites don't need to care whether the `tracing`
//! feature is enabled.

macro_rules! debug {
    ( $( $tt:tt )* ) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!( $( $tt )* );
    };
}

macro_rules! warn {
    ( $( $tt:tt )* ) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!( $( $tt )* );
    };
}
