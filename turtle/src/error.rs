// turtle/src/error.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::geometry::Point;
use std::any::Any;
use std::io;
use thiserror::Error;
use uturtle::LangError;

pub type Result<T> = std::result::Result<T, TurtleError>;

/// Everything that can make a command fail. None of these end the session.
#[derive(Debug, Error)]
pub enum TurtleError {
    #[error(transparent)]
    Lang(#[from] LangError),

    #[error("Collision detected! Move to {at} blocked by obstacle at {obstacle}")]
    CollisionVeto { at: Point, obstacle: Point },

    #[error("Move of {distance} from {from} leaves the coordinate range")]
    OutOfBounds { from: Point, distance: i32 },

    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    #[error("image failure: {0}")]
    Image(#[from] image::ImageError),

    #[error("a playback is already running")]
    PlaybackBusy,

    #[error("`{0}` cannot be used inside a loaded command file")]
    NotDuringReplay(&'static str),

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized command.
    Parse,
    /// Missing, non-numeric or out-of-range argument.
    Argument,
    /// A move was suppressed by obstacle proximity.
    Collision,
    /// Persistence read or write failure.
    Io,
    /// A recognized command that cannot run right now.
    Rejected,
    Unexpected,
}

impl TurtleError {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            TurtleError::Lang(LangError::Argument(_)) | TurtleError::OutOfBounds { .. } => {
                ErrorKind::Argument
            }
            TurtleError::Lang(_) => ErrorKind::Parse,
            TurtleError::CollisionVeto { .. } => ErrorKind::Collision,
            TurtleError::Io(_) | TurtleError::Image(_) => ErrorKind::Io,
            TurtleError::PlaybackBusy | TurtleError::NotDuringReplay(_) => ErrorKind::Rejected,
            TurtleError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> TurtleError {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_owned()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "unknown panic".to_owned()
        };
        TurtleError::Unexpected(message)
    }
}
