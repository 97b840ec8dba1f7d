//! Keyframe tweening: values, interpolation, paths, sequences and the engine.

/// The keyframe state machine.
pub mod anim;
/// Blend-function selection.
pub mod blend;
pub mod ease;
/// Linear interpolation and its inverse.
pub mod lerp;
/// Circular arc and wave path generators.
pub mod path;
pub mod seq;
pub mod trail;
pub mod value;
