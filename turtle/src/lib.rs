// turtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs turtle commands against a pen on a canvas: movement, shapes,
//! obstacles, recording with timed playback, and saving the result.

#[macro_use]
extern crate bitflags;

pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod obstacle;
pub mod persist;
pub mod player;
pub mod recorder;
pub mod session;
pub mod shapes;
pub mod signature;
pub mod state;
pub mod turtle;

#[cfg(test)]
mod testing;

pub use crate::canvas::{Canvas, SceneCanvas};
pub use crate::config::Config;
pub use crate::error::{ErrorKind, Result, TurtleError};
pub use crate::geometry::{Point, Rgb};
pub use crate::persist::{LoadKind, NoPrompt, Prompt, SaveTargets, UnsavedChoice};
pub use crate::player::PlaybackReport;
pub use crate::session::Session;
pub use crate::state::TurtleState;
pub use crate::turtle::Turtle;
