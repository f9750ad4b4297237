use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Layer identity and visibility. Pixels live per frame in
/// [`Frame::layer_pixels`](super::frame::Frame), indexed by layer position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub id: u32,
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Layer {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
        }
    }

    /// `Layer N` where `N` is the 1-based position the layer will take.
    pub fn default_name(position: usize) -> String {
        t!("layer.default_name", num = position).to_string()
    }
}

#[cfg(test)]
mod tests;
