pub mod coord;
pub mod exclusion;
pub mod point;
pub mod rect;
pub mod shape;
pub mod viewport;
