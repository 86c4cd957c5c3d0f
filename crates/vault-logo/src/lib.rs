//! Vault logo generator.
//!
//! [`logo::compose_logo`] renders the "V" mark at any size;
//! [`batch::generate_all`] writes the fixed set of app icon files.

pub mod batch;
pub mod geometry;
pub mod logo;
pub mod style;

pub use logo::compose_logo;
