/// Convenience result type used across the renderer.
pub type RenderResult<T> = Result<T, RenderError>;

/// Top-level error taxonomy used by scene, render and harness APIs.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// Invalid user-provided options or image dimensions.
    #[error("validation error: {0}")]
    Validation(String),

    /// A scene identifier that does not name any known scene.
    #[error("unknown scene name '{0}' (expected one of: rgb, rgby, rand10k, rand100k, pattern)")]
    UnknownScene(String),

    /// The two compared images do not have the same dimensions.
    #[error(
        "image dimensions differ: reference is {}x{}, actual is {}x{}",
        .reference.0,
        .reference.1,
        .actual.0,
        .actual.1
    )]
    DimensionMismatch {
        /// Reference `(width, height)`.
        reference: (u32, u32),
        /// Compared `(width, height)`.
        actual: (u32, u32),
    },

    /// The compared images differ in more channels than the tolerated maximum.
    #[error("mismatch detected between reference and actual: found {count} errors")]
    TooManyMismatches {
        /// Mismatch count at the moment the comparison aborted.
        count: usize,
    },

    /// Filesystem errors while writing frames or particle dumps.
    #[error("io error while {context}: {source}")]
    Io {
        /// What the renderer was doing.
        context: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Encoder errors from the `image` crate.
    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RenderError {
    /// Build a [`RenderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RenderError::Io`] value with a short description of the failed step.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Return `true` for failures raised by the correctness checker.
    pub fn is_correctness(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. } | Self::TooManyMismatches { .. }
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
