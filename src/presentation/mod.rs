// Presentation layer - render-ready output for the grid renderer
pub mod grid_item;
