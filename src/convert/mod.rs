pub mod converter;
pub mod error;
pub mod naming;
pub mod pixel_grid;
