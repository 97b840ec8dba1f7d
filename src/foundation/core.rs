use crate::foundation::error::{TweenError, TweenResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> TweenResult<Self> {
        if den == 0 {
            return Err(TweenError::config("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(TweenError::config("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> TweenResult<Self> {
        if width == 0 || height == 0 {
            return Err(TweenError::config("canvas size must be non-zero"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(TweenError::config("canvas size exceeds 65535"));
        }
        Ok(Self { width, height })
    }

    /// Parses two integers separated by commas and/or whitespace, e.g. `"600,600"`.
    pub fn parse_size(s: &str) -> TweenResult<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        let [w, h] = parts.as_slice() else {
            return Err(TweenError::config(format!(
                "size '{s}' must have exactly two components"
            )));
        };
        let parse = |p: &str| {
            p.parse::<u32>()
                .map_err(|e| TweenError::config(format!("size component '{p}': {e}")))
        };
        Self::new(parse(w)?, parse(h)?)
    }

    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> TweenResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| TweenError::config(format!("color '{s}' must start with '#'")))?;
        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TweenError::config(format!(
                "color '{s}' must be #RRGGBB or #RRGGBBAA"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| TweenError::config(format!("color '{s}': {e}")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Which rectangle attribute a positional value is written into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopLeft,
    Center,
}

impl Anchor {
    pub fn read(self, rect: Rect) -> Point {
        match self {
            Self::TopLeft => rect.origin(),
            Self::Center => rect.center(),
        }
    }

    /// Moves `rect` so that its anchor lands on `p`, keeping its size.
    pub fn apply(self, rect: Rect, p: Point) -> Rect {
        let size = rect.size();
        match self {
            Self::TopLeft => rect.with_origin(p),
            Self::Center => Rect::from_center_size(p, size),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
