// turtle/src/config.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::geometry::{Point, Rgb};
use crate::state::DEFAULT_SPEED_MS;
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Session settings. Build with struct update syntax over `Config::default()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Where the turtle starts and where `reset` puts it.
    pub home: Point,
    /// Initial replay delay in milliseconds.
    pub speed: u32,
    /// Size of the raster produced by the default canvas.
    pub canvas_size: (u32, u32),
    /// Name appended to every history entry as ` [name]`.
    pub attribution: String,
    /// Color of the marker dropped at each replayed point, if any.
    pub trail_color: Option<Rgb>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            home: Point::new(0, 0),
            speed: DEFAULT_SPEED_MS,
            canvas_size: (800, 400),
            attribution: "turtle".to_owned(),
            trail_color: None,
        }
    }
}

impl Config {
    /// Reads `TURTLE_*` variables, keeping the default for anything unset or malformed.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let home = Point::new(
            parsed(&lookup, "TURTLE_HOME_X").unwrap_or(defaults.home.x),
            parsed(&lookup, "TURTLE_HOME_Y").unwrap_or(defaults.home.y),
        );
        let speed = positive(&lookup, "TURTLE_SPEED").unwrap_or(defaults.speed);
        let canvas_size = (
            positive(&lookup, "TURTLE_CANVAS_WIDTH").unwrap_or(defaults.canvas_size.0),
            positive(&lookup, "TURTLE_CANVAS_HEIGHT").unwrap_or(defaults.canvas_size.1),
        );
        let attribution = lookup("TURTLE_ATTRIBUTION")
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty() && !name.contains(|c: char| c == '[' || c == ']'))
            .unwrap_or(defaults.attribution);
        let trail_color = lookup("TURTLE_TRAIL").and_then(|raw| match parse_rgb(&raw) {
            Some(color) => Some(color),
            None => {
                warn!(value = %raw, "ignoring malformed TURTLE_TRAIL");
                None
            }
        });

        Config {
            home,
            speed,
            canvas_size,
            attribution,
            trail_color,
        }
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring malformed setting");
            None
        }
    }
}

fn positive<F>(lookup: &F, key: &str) -> Option<u32>
where
    F: Fn(&str) -> Option<String>,
{
    parsed::<F, u32>(lookup, key).filter(|&value| value > 0)
}

fn parse_rgb(raw: &str) -> Option<Rgb> {
    let channels = raw
        .split(',')
        .map(|channel| channel.trim().parse::<u8>().ok())
        .collect::<Option<Vec<_>>>()?;
    match channels.as_slice() {
        [r, g, b] => Some(Rgb::new(*r, *g, *b)),
        _ => None,
    }
}
