use crate::{
    foundation::core::{Canvas, Point, Rect, Rgba8},
    foundation::error::{TweenError, TweenResult},
    render::sprite::{Sprite, unpremultiply},
};

/// What a frame starts from.
#[derive(Clone, Debug)]
pub enum Background {
    Solid(Rgba8),
    Image(Sprite),
}

impl Default for Background {
    fn default() -> Self {
        Self::Solid(Rgba8::BLACK)
    }
}

/// A finished frame as straight-alpha RGBA8, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(at..at + 4)?;
        Some(Rgba8::new(px[0], px[1], px[2], px[3]))
    }
}

/// Immediate-mode drawing target for one frame at a time.
///
/// Call order per frame: `clear`, any number of draws, then `finish`.
pub trait RenderSurface {
    fn canvas(&self) -> Canvas;
    fn clear(&mut self, background: &Background);
    /// A 1-pixel wide segment.
    fn line(&mut self, from: Point, to: Point, color: Rgba8);
    /// Draws `sprite` with its top-left corner at `at`.
    fn blit(&mut self, sprite: &Sprite, at: Point);
    /// Traces the pixel ring just inside `rect`.
    fn outline(&mut self, rect: Rect, color: Rgba8);
    fn finish(&mut self) -> TweenResult<Frame>;
}

/// Software surface backed by `vello_cpu`.
pub struct CpuSurface {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("canvas", &self.canvas)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> TweenResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| TweenError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| TweenError::render("surface height exceeds u16"))?;
        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    fn fill_quad(&mut self, corners: [Point; 4], color: Rgba8) {
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(to_cpu(corners[0]));
        for p in &corners[1..] {
            path.line_to(to_cpu(*p));
        }
        path.close_path();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(solid(color));
        self.ctx.fill_path(&path);
    }
}

impl RenderSurface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self, background: &Background) {
        self.ctx.reset();
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match background {
            Background::Solid(color) => {
                self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                self.ctx.set_paint(solid(*color));
                self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(self.canvas.width),
                    f64::from(self.canvas.height),
                ));
            }
            Background::Image(sprite) => self.blit(sprite, Point::ZERO),
        }
    }

    fn line(&mut self, from: Point, to: Point, color: Rgba8) {
        let d = to - from;
        let len = d.hypot();
        if len < f64::EPSILON {
            return;
        }
        let n = crate::foundation::core::Vec2::new(-d.y, d.x) * (0.5 / len);
        self.fill_quad([from + n, to + n, to - n, from - n], color);
    }

    fn blit(&mut self, sprite: &Sprite, at: Point) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((at.x, at.y)));
        self.ctx.set_paint(sprite.paint());
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(sprite.width()),
            f64::from(sprite.height()),
        ));
    }

    fn outline(&mut self, rect: Rect, color: Rgba8) {
        let r = Rect::new(rect.x0 + 0.5, rect.y0 + 0.5, rect.x1 - 0.5, rect.y1 - 0.5);
        let corners = [
            Point::new(r.x0, r.y0),
            Point::new(r.x1, r.y0),
            Point::new(r.x1, r.y1),
            Point::new(r.x0, r.y1),
        ];
        for i in 0..4 {
            self.line(corners[i], corners[(i + 1) % 4], color);
        }
    }

    fn finish(&mut self) -> TweenResult<Frame> {
        self.pixmap.data_as_u8_slice_mut().fill(0);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);

        let premul = self.pixmap.data_as_u8_slice();
        let mut data = Vec::with_capacity(premul.len());
        for px in premul.chunks_exact(4) {
            data.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]).to_array());
        }
        Ok(Frame {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
        })
    }
}

fn solid(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
