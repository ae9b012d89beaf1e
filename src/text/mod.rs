//! Text measurement helpers.

pub mod width;

pub use width::text_width;
