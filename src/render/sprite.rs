use std::{fmt, path::Path, sync::Arc};

use anyhow::Context as _;

use crate::foundation::{
    core::Rgba8,
    error::{TweenError, TweenResult},
};

/// Arm length divisors for the synthesized blink frames: open, half shut, shut.
pub const BLINK_DIVISORS: [f64; 3] = [4.0, 8.0, 32.0];

/// Decoded image ready to paint: premultiplied RGBA8 in a `vello_cpu` pixmap.
#[derive(Clone)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixmap: Arc<vello_cpu::Pixmap>,
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Sprite {
    /// Builds a sprite from tightly packed straight-alpha RGBA8 rows.
    pub fn from_rgba8(width: u32, height: u32, mut rgba: Vec<u8>) -> TweenResult<Self> {
        if width == 0 || height == 0 {
            return Err(TweenError::render("sprite must be non-empty"));
        }
        if rgba.len() != width as usize * height as usize * 4 {
            return Err(TweenError::render(format!(
                "sprite byte length {} does not match {width}x{height}",
                rgba.len()
            )));
        }
        premultiply_in_place(&mut rgba);
        let pixmap = premul_bytes_to_pixmap(&rgba, width, height)?;
        Ok(Self {
            width,
            height,
            pixmap: Arc::new(pixmap),
        })
    }

    pub fn from_image_bytes(bytes: &[u8]) -> TweenResult<Self> {
        let rgba = image::load_from_memory(bytes)
            .context("decode image from memory")?
            .to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> TweenResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
        let sprite = Self::from_image_bytes(&bytes)
            .map_err(|e| TweenError::render(format!("'{}': {e}", path.display())))?;
        tracing::debug!(width = sprite.width, height = sprite.height, "sprite loaded");
        Ok(sprite)
    }

    pub fn solid(width: u32, height: u32, color: Rgba8) -> TweenResult<Self> {
        let rgba = color
            .to_array()
            .repeat(width as usize * height as usize);
        Self::from_rgba8(width, height, rgba)
    }

    /// Transparent square with a plus sign whose arms reach `size / divisor` from the center.
    pub fn crosshairs(size: u32, color: Rgba8, divisor: f64) -> TweenResult<Self> {
        if size == 0 {
            return Err(TweenError::render("sprite must be non-empty"));
        }
        if !(divisor.is_finite() && divisor >= 1.0) {
            return Err(TweenError::render(format!(
                "crosshair divisor must be at least 1, got {divisor}"
            )));
        }
        let n = size as usize;
        let mut rgba = vec![0u8; n * n * 4];
        let c = n / 2;
        let arm = (f64::from(size) / divisor).round() as usize;
        let lo = c.saturating_sub(arm);
        let hi = (c + arm).min(n.saturating_sub(1));
        let px = color.to_array();
        for i in lo..=hi {
            for (x, y) in [(c, i), (i, c)] {
                let at = (y * n + x) * 4;
                rgba[at..at + 4].copy_from_slice(&px);
            }
        }
        Self::from_rgba8(size, size, rgba)
    }

    /// The actor used when no images are given: crosshairs closing in three steps.
    pub fn default_actor_frames(size: u32) -> TweenResult<Vec<Self>> {
        BLINK_DIVISORS
            .iter()
            .map(|&d| Self::crosshairs(size, Rgba8::WHITE, d))
            .collect()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Straight-alpha color at `(x, y)`, if inside the sprite.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixmap.data_as_u8_slice().get(at..at + 4)?;
        Some(unpremultiply([px[0], px[1], px[2], px[3]]))
    }

    pub(crate) fn paint(&self) -> vello_cpu::Image {
        vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::clone(&self.pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        }
    }
}

pub(crate) fn premultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        for c in &mut px[..3] {
            *c = ((*c as u16 * a + 127) / 255) as u8;
        }
    }
}

pub(crate) fn unpremultiply([r, g, b, a]: [u8; 4]) -> Rgba8 {
    if a == 0 {
        return Rgba8::new(0, 0, 0, 0);
    }
    let un = |c: u8| ((c as u16 * 255 + a as u16 / 2) / a as u16).min(255) as u8;
    Rgba8::new(un(r), un(g), un(b), a)
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> TweenResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| TweenError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| TweenError::render("image height exceeds u16"))?;

    let mut may_have_opacities = false;
    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sprite.rs"]
mod tests;
