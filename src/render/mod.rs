//! Offscreen drawing on `vello_cpu` and frame output through `image`.

/// Numbered output paths and frame sinks.
pub mod frames;
/// Decoded and synthesized images.
pub mod sprite;
/// The drawing surface trait and its CPU implementation.
pub mod surface;
