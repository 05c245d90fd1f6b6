pub mod grid;
pub mod gridlines;
pub mod probe;

pub use grid::{NOT_APPLICABLE, WaferLayout, layout};
pub use gridlines::{Gridlines, gridlines};
pub use probe::Probe;
