/// Result alias used by every fallible pathtween API.
pub type TweenResult<T> = Result<T, TweenError>;

/// Failures raised by the tweening engine, the demo driver and the renderer.
#[derive(thiserror::Error, Debug)]
pub enum TweenError {
    /// No blend or inverse lerp exists for the value shape, or for the mixed pair.
    #[error("unsupported blend: {0}")]
    Unsupported(String),

    /// Inverse lerp over a zero-width interval.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// Malformed setup: too few values, bad durations, templates or sizes.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Tuple values with different component counts.
    #[error("arity mismatch: {left} vs {right} components")]
    Arity { left: usize, right: usize },

    /// Sprite preparation or drawing failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TweenError {
    /// Build a [`TweenError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`TweenError::Arithmetic`] value.
    pub fn arithmetic(msg: impl Into<String>) -> Self {
        Self::Arithmetic(msg.into())
    }

    /// Build a [`TweenError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TweenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
