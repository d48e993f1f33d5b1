use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{
    ExtendedColorType, ImageEncoder,
    codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding},
};

use crate::{
    canvas::buffer::Image,
    foundation::error::{RenderError, RenderResult},
};

/// On-disk frame format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Binary PPM (`P6`, maxval 255).
    #[default]
    Ppm,
    /// 8-bit RGB PNG.
    Png,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Ppm => "ppm",
            ExportFormat::Png => "png",
        }
    }
}

/// Quantize RGB channels to bytes, dropping alpha.
///
/// Each channel is clamped to `[0,1]`, scaled by 255 and truncated.
pub fn to_rgb8(img: &Image) -> Vec<u8> {
    let mut out = Vec::with_capacity(img.data().len() / 4 * 3);
    for px in img.data().chunks_exact(4) {
        for &c in &px[..3] {
            out.push((255.0 * c.clamp(0.0, 1.0)) as u8);
        }
    }
    out
}

/// Encode `img` as a binary PPM into `out`.
pub fn write_ppm<W: Write>(img: &Image, out: W) -> RenderResult<()> {
    let rgb = to_rgb8(img);
    PnmEncoder::new(out)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(&rgb, img.width(), img.height(), ExtendedColorType::Rgb8)?;
    Ok(())
}

/// Write `img` to `path` in the requested format.
pub fn save_image(img: &Image, path: &Path, format: ExportFormat) -> RenderResult<()> {
    match format {
        ExportFormat::Ppm => {
            let f = File::create(path)
                .map_err(|e| RenderError::io(format!("create '{}'", path.display()), e))?;
            let mut w = BufWriter::new(f);
            write_ppm(img, &mut w)?;
            w.flush()
                .map_err(|e| RenderError::io(format!("flush '{}'", path.display()), e))?;
        }
        ExportFormat::Png => {
            image::save_buffer_with_format(
                path,
                &to_rgb8(img),
                img.width(),
                img.height(),
                image::ColorType::Rgb8,
                image::ImageFormat::Png,
            )?;
        }
    }
    tracing::debug!(path = %path.display(), ?format, "saved frame");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/export.rs"]
mod tests;
