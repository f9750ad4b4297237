pub mod blend;
pub mod buffer;
pub mod color;
pub mod error;
pub mod frame;
pub mod grid;
pub mod layer;
pub mod selection;
pub mod settings;
pub mod store;
