use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, GenericImageView, ImageFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use texprep_image::{fit_within, ImageSize};

/// Output bound and re-encoding knobs for one run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResizePolicy {
    pub max_width: u32,
    pub max_height: u32,
    pub jpeg_quality: u8,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self {
            max_width: 1024,
            max_height: 1024,
            jpeg_quality: 85,
        }
    }
}

impl ResizePolicy {
    fn bounds(&self) -> ImageSize {
        ImageSize::new(self.max_width, self.max_height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ProgressEvent {
    OriginalSize { path: String, width: u32, height: u32 },
    Resized { path: String, width: u32, height: u32 },
    FileNotFound { path: String },
    Failed { path: String, message: String },
}

pub trait ReportSink: Send + Sync {
    fn emit(&self, event: ProgressEvent);
}

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Per-file result. The batch caller may ignore it; failures never
/// escape as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Missing,
    Resized {
        original: ImageSize,
        output: ImageSize,
    },
    Failed,
}

/// Shrinks the image at `path` to fit the policy bounds and overwrites
/// it in place, reporting progress through `sink`.
///
/// A missing file is skipped after a `FileNotFound` event; any decode,
/// resample, or write failure is absorbed into a `Failed` event so the
/// caller's next file is unaffected.
pub fn resize_in_place(path: &Path, policy: &ResizePolicy, sink: &dyn ReportSink) -> FileOutcome {
    let display = path.display().to_string();
    if !path.exists() {
        sink.emit(ProgressEvent::FileNotFound { path: display });
        return FileOutcome::Missing;
    }
    match shrink_file(path, &display, policy, sink) {
        Ok((original, output)) => FileOutcome::Resized { original, output },
        Err(err) => {
            sink.emit(ProgressEvent::Failed {
                path: display,
                message: err.to_string(),
            });
            FileOutcome::Failed
        }
    }
}

fn shrink_file(
    path: &Path,
    display: &str,
    policy: &ResizePolicy,
    sink: &dyn ReportSink,
) -> Result<(ImageSize, ImageSize), ResizeError> {
    let img = image::open(path).map_err(ResizeError::Decode)?;
    let (width, height) = img.dimensions();
    let original = ImageSize::new(width, height);
    sink.emit(ProgressEvent::OriginalSize {
        path: display.to_string(),
        width,
        height,
    });

    let target = fit_within(original, policy.bounds());
    let shrunk = if target == original {
        // Already inside the bound; re-encode without resampling.
        img
    } else {
        img.thumbnail_exact(target.width, target.height)
    };
    write_in_place(&shrunk, path, policy)?;

    sink.emit(ProgressEvent::Resized {
        path: display.to_string(),
        width: target.width,
        height: target.height,
    });
    Ok((original, target))
}

/// Re-encodes to the original path and format. The quality factor only
/// applies to JPEG; PNG gets maximum compression effort instead.
fn write_in_place(
    img: &DynamicImage,
    path: &Path,
    policy: &ResizePolicy,
) -> Result<(), ResizeError> {
    let format = ImageFormat::from_path(path).map_err(ResizeError::Encode)?;
    match format {
        ImageFormat::Jpeg => {
            let writer = BufWriter::new(File::create(path)?);
            img.to_rgb8()
                .write_with_encoder(JpegEncoder::new_with_quality(writer, policy.jpeg_quality))
                .map_err(ResizeError::Encode)?;
        }
        ImageFormat::Png => {
            let writer = BufWriter::new(File::create(path)?);
            img.write_with_encoder(PngEncoder::new_with_quality(
                writer,
                CompressionType::Best,
                FilterType::Adaptive,
            ))
            .map_err(ResizeError::Encode)?;
        }
        _ => img.save(path).map_err(ResizeError::Encode)?,
    }
    Ok(())
}
