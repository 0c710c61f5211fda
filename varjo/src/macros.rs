// Thin wrappers so call sites don't need `use log::...` everywhere and the
// backend stays swappable.

#[macro_export]
macro_rules! varjo_error {
    ($($args:tt)*) => {
        log::error!($($args)*)
    };
}

#[macro_export]
macro_rules! varjo_warn {
    ($($args:tt)*) => {
        log::warn!($($args)*)
    };
}

#[macro_export]
macro_rules! varjo_info {
    ($($args:tt)*) => {
        log::info!($($args)*)
    };
}

#[macro_export]
macro_rules! varjo_debug {
    ($($args:tt)*) => {
        log::debug!($($args)*)
    };
}
