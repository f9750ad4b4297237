use rust_i18n::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    InvalidDimensions { width: usize, height: usize },
    LayerNotFound(usize),
    FrameNotFound(usize),
    LastLayer,
    LastFrame,
    EmptySelection,
    NoCropRegion,
    EmptyImport,
    BufferSizeMismatch { width: usize, height: usize, actual: usize },
    IdsExhausted,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::InvalidDimensions { width, height } => {
                write!(f, "{}", t!("error.invalid_dimensions", width = width, height = height))
            }
            CoreError::LayerNotFound(index) => write!(f, "{}", t!("error.layer_not_found", index = index)),
            CoreError::FrameNotFound(index) => write!(f, "{}", t!("error.frame_not_found", index = index)),
            CoreError::LastLayer => write!(f, "{}", t!("error.last_layer")),
            CoreError::LastFrame => write!(f, "{}", t!("error.last_frame")),
            CoreError::EmptySelection => write!(f, "{}", t!("error.empty_selection")),
            CoreError::NoCropRegion => write!(f, "{}", t!("error.no_crop_region")),
            CoreError::EmptyImport => write!(f, "{}", t!("error.empty_import")),
            CoreError::BufferSizeMismatch { width, height, actual } => write!(
                f,
                "{}",
                t!("error.buffer_size_mismatch", actual = actual, width = width, height = height)
            ),
            CoreError::IdsExhausted => write!(f, "{}", t!("error.ids_exhausted")),
        }
    }
}

impl std::error::Error for CoreError {}

pub type Result<T> = std::result::Result<T, CoreError>;
