pub mod button;
pub mod container;
pub mod text;
pub mod theme;

pub const BORDER_RADIUS: f32 = 8.0;
pub const BORDER_WIDTH: f32 = 1.0;
