//! The keyframe demo: role wrappers, the driver, the built-in choreography and the
//! render loop around them.

pub mod driver;
pub mod io;
pub mod roles;
pub mod run;
pub mod script;
