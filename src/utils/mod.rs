// Utility modules

pub mod number_format;

pub use number_format::format_general;
