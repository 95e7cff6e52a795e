// uturtle/src/error.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Why a line could not be turned into a [`Command`](crate::ast::Command).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LangError {
    #[error("empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("malformed command line: {0}")]
    Syntax(String),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

/// A recognized command with a missing or unusable argument.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Missing {param} parameter")]
    Missing { param: &'static str },

    #[error("Invalid {param} parameter: `{value}` is not an integer")]
    NotANumber { param: &'static str, value: String },

    #[error("Invalid {param} parameter: {value} must be greater than zero")]
    NotPositive { param: &'static str, value: i32 },

    #[error("Invalid {param} parameter: {value} is outside {min}..={max}")]
    OutOfRange {
        param: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Need 3 comma-separated RGB values, got {found}")]
    ChannelCount { found: usize },
}

impl ArgumentError {
    /// The parameter the error is about, if it concerns a single one.
    pub fn param(&self) -> Option<&'static str> {
        match *self {
            ArgumentError::Missing { param }
            | ArgumentError::NotANumber { param, .. }
            | ArgumentError::NotPositive { param, .. }
            | ArgumentError::OutOfRange { param, .. } => Some(param),
            ArgumentError::ChannelCount { .. } => None,
        }
    }
}
