//! Math types shared across the launcher

mod insets;

pub use insets::Insets;
