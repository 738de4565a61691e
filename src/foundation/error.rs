/// Convenience result type used across cubeblend.
pub type BlendResult<T> = Result<T, BlendError>;

/// Top-level error taxonomy used by engine and loader APIs.
///
/// Parameter errors (selection, colors, alphas) are kept apart from data errors
/// (degenerate or mismatched pixels) and from [`BlendError::Load`], which only
/// cube loaders produce.
#[derive(thiserror::Error, Debug)]
pub enum BlendError {
    /// Slice selection is malformed or references a slice outside the cube.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// Number of colors differs from the number of slices being composited.
    #[error("color count mismatch: got {colors} colors for {slices} slices")]
    ColorCountMismatch {
        /// Number of colors supplied.
        colors: usize,
        /// Number of slices in the selected cube.
        slices: usize,
    },

    /// Number of explicit alphas differs from the number of slices.
    #[error("alpha count mismatch: got {alphas} alphas for {slices} slices")]
    AlphaCountMismatch {
        /// Number of alphas supplied.
        alphas: usize,
        /// Number of slices in the selected cube.
        slices: usize,
    },

    /// Alpha value outside `[0, 1]` (or not a number).
    #[error("invalid alpha {value}{}: must be within [0, 1]", at_layer(.index))]
    InvalidAlpha {
        /// Layer index (bottom content layer is 0), when the layer sits in a stack.
        index: Option<usize>,
        /// Offending value.
        value: f64,
    },

    /// A normalization or stretch step met a zero, negative or non-finite maximum.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Color specification could not be resolved to RGB.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Images or slices with differing dimensions were combined.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Straight-alpha layers were requested for the premultiplied "over" operator.
    #[error("not premultiplied: {0}")]
    NotPremultiplied(String),

    /// Invalid options or recipe data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Cube loading failed (missing, unreadable or corrupt source).
    #[error("load failure: {0}")]
    Load(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlendError {
    /// Build a [`BlendError::InvalidSelection`] value.
    pub fn selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    /// Build a [`BlendError::DegenerateInput`] value.
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }

    /// Build a [`BlendError::InvalidColor`] value.
    pub fn color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    /// Build a [`BlendError::ShapeMismatch`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Build a [`BlendError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlendError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// True for errors caused by the data rather than by call parameters.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::DegenerateInput(_) | Self::ShapeMismatch(_) | Self::Load(_)
        )
    }
}

fn at_layer(index: &Option<usize>) -> String {
    index.map(|i| format!(" at layer {i}")).unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
