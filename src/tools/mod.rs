pub mod brush;
pub mod circle;
pub mod crop;
pub mod eyedropper;
pub mod fill;
pub mod geometry;
pub mod lasso_select;
pub mod line;
pub mod move_tool;
pub mod pencil;
pub mod rect_select;
pub mod rectangle;
pub mod shape;
pub mod tool_trait;
