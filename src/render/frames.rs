use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::core::FrameIndex,
    foundation::error::{TweenError, TweenResult},
    render::surface::Frame,
};

/// A printf-style output path with exactly one integer slot, e.g. `out/%04d.png`.
///
/// Accepts `%d` and zero-padded `%0Nd`; `%%` is a literal percent sign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramePattern {
    prefix: String,
    width: usize,
    suffix: String,
}

impl FramePattern {
    pub fn parse(pattern: &str) -> TweenResult<Self> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut width = None;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            let out = if width.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            if c != '%' {
                out.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                out.push('%');
                continue;
            }

            let mut digits = String::new();
            while let Some(d) = chars.next_if(char::is_ascii_digit) {
                digits.push(d);
            }
            if chars.next() != Some('d') {
                return Err(bad_pattern(pattern, "only %d and %0Nd are supported"));
            }
            if !(digits.is_empty() || digits.starts_with('0')) {
                return Err(bad_pattern(pattern, "padding must be zero-padding (%0Nd)"));
            }
            if width.is_some() {
                return Err(bad_pattern(pattern, "more than one frame number slot"));
            }
            width = Some(if digits.is_empty() {
                0
            } else {
                digits
                    .parse::<usize>()
                    .map_err(|_| bad_pattern(pattern, "padding width out of range"))?
            });
        }

        let Some(width) = width else {
            return Err(bad_pattern(pattern, "missing frame number slot"));
        };
        Ok(Self {
            prefix,
            width,
            suffix,
        })
    }

    pub fn render(&self, index: u64) -> PathBuf {
        PathBuf::from(format!(
            "{}{:0width$}{}",
            self.prefix,
            index,
            self.suffix,
            width = self.width
        ))
    }
}

fn bad_pattern(pattern: &str, why: &str) -> TweenError {
    TweenError::config(format!("output pattern '{pattern}': {why}"))
}

/// Consumes rendered frames in display order.
pub trait FrameSink {
    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> TweenResult<()>;
}

/// Writes each frame to `pattern.render(idx)`; the format follows the extension.
#[derive(Debug)]
pub struct FileSink {
    pattern: FramePattern,
}

impl FileSink {
    pub fn new(pattern: FramePattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &FramePattern {
        &self.pattern
    }
}

impl FrameSink for FileSink {
    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> TweenResult<()> {
        let path = self.pattern.render(idx.0);
        write_frame(&path, frame)?;
        tracing::info!("saved: {}", path.display());
        Ok(())
    }
}

fn write_frame(path: &Path, frame: &Frame) -> TweenResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let format = image::ImageFormat::from_path(path)
        .with_context(|| format!("unknown image format for '{}'", path.display()))?;

    // JPEG has no alpha channel.
    let (bytes, color) = if format != image::ImageFormat::Jpeg {
        (frame.data.clone(), image::ColorType::Rgba8)
    } else {
        let rgb = frame
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        (rgb, image::ColorType::Rgb8)
    };

    image::save_buffer_with_format(path, &bytes, frame.width, frame.height, color, format)
        .with_context(|| format!("write frame '{}'", path.display()))?;
    Ok(())
}

/// Keeps frames in memory, for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    frames: Vec<(FrameIndex, Frame)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[(FrameIndex, Frame)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> TweenResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frames.rs"]
mod tests;
