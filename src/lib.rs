#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "collections")]
pub mod slice;

/// Emits a `tracing` event when the `tracing` feature is enabled, otherwise nothing.
#[allow(unused_macros)]
macro_rules! event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    }};
}

#[allow(unused_imports)]
pub(crate) use event;
