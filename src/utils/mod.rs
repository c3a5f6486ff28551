// Shared utils

pub mod number_format;
pub mod chart_ffi;
pub mod leaflet_ffi;
pub mod lottie_ffi;
pub mod theme;

pub use number_format::{format_decimal, NumberLocale};
