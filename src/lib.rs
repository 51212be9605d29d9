//! **mazegen** is a perfect maze carving and visualisation library.

pub mod cells;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod renderers;
pub mod topology;
pub mod units;
