use crate::{
    canvas::buffer::Image,
    foundation::error::{RenderError, RenderResult},
};

/// Largest per-channel difference that still counts as a match.
pub const CHANNEL_TOLERANCE: f32 = 0.1;

/// Mismatch count above which the comparison fails.
pub const MAX_MISMATCHES: usize = 100;

/// Outcome of a passing comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CompareReport {
    /// Color channels that differed by more than [`CHANNEL_TOLERANCE`].
    pub mismatches: usize,
    /// Pixels scanned.
    pub pixels: usize,
}

/// Compare the RGB channels of two images; alpha is ignored.
///
/// Fails with [`RenderError::DimensionMismatch`] when sizes differ and with
/// [`RenderError::TooManyMismatches`] as soon as more than [`MAX_MISMATCHES`] channels differ.
#[tracing::instrument(skip_all, fields(width = reference.width(), height = reference.height()))]
pub fn compare_images(reference: &Image, actual: &Image) -> RenderResult<CompareReport> {
    if reference.dims() != actual.dims() {
        return Err(RenderError::DimensionMismatch {
            reference: reference.dims(),
            actual: actual.dims(),
        });
    }

    let mut mismatches = 0usize;
    for (r, a) in reference
        .data()
        .chunks_exact(4)
        .zip(actual.data().chunks_exact(4))
    {
        for ch in 0..3 {
            if (r[ch] - a[ch]).abs() > CHANNEL_TOLERANCE {
                mismatches += 1;
                if mismatches > MAX_MISMATCHES {
                    tracing::warn!(mismatches, "comparison aborted");
                    return Err(RenderError::TooManyMismatches { count: mismatches });
                }
            }
        }
    }

    tracing::info!(mismatches, "correctness check passed");
    Ok(CompareReport {
        mismatches,
        pixels: reference.data().len() / 4,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/check/compare.rs"]
mod tests;
