pub mod color;
pub mod csx;
pub mod palette;
