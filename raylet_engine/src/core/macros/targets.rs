//! This module contains string definitions for different log targets for the [`tracing`] crate
//! Used in macros like [`tracing::info`]
//!
//! Each target is namespaced by the package that invokes the macro, e.g. `raylet_engine::output`

#[macro_export]
macro_rules! tracing_targets {
    {$( $name:ident $(=$val:expr)? ),* $(,)?} => {
        $( $crate::tracing_targets!(@value $name $(=$val)? ); )*
    };

    (@value $name:ident = $val:expr) => {pub const $name: &'static str = concat!(env!("CARGO_PKG_NAME"), "::", $val);};
    (@value $name:ident)             => {$crate::tracing_targets!($name = stringify!($name));};
}
