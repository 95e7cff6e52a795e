// turtle/src/state.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::geometry::{Point, Rgb};

pub const DEFAULT_SPEED_MS: u32 = 100;

/// Position and heading, the part of the state shapes put back when they finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pose {
    pub position: Point,
    pub heading: u32,
}

/// The pen. Heading stays in `0..360`, width and speed stay above zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurtleState {
    pub position: Point,
    heading: u32,
    pub pen_down: bool,
    pub pen_color: Rgb,
    stroke_width: u32,
    speed: u32,
    pub saved: bool,
}

impl TurtleState {
    pub fn new(home: Point, speed: u32) -> TurtleState {
        TurtleState {
            position: home,
            heading: 0,
            pen_down: true,
            pen_color: Rgb::BLACK,
            stroke_width: 1,
            speed: speed.max(1),
            saved: true,
        }
    }

    /// Back to the starting pose, pen and color. Speed and the saved flag are kept.
    pub fn reset_pose(&mut self, home: Point) {
        self.position = home;
        self.heading = 0;
        self.pen_down = true;
        self.pen_color = Rgb::BLACK;
        self.stroke_width = 1;
    }

    #[inline]
    pub fn heading(&self) -> u32 {
        self.heading
    }

    #[inline]
    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            heading: self.heading,
        }
    }

    /// Clockwise on screen for positive `degrees`.
    pub fn turn(&mut self, degrees: i64) {
        self.point(i64::from(self.heading) + degrees);
    }

    pub fn point(&mut self, degrees: i64) {
        self.heading = degrees.rem_euclid(360) as u32;
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = width.max(1);
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.max(1);
    }

    /// Where `distance` units along the heading lands, rounded to the pixel grid.
    /// `None` if that point is outside the coordinate range.
    pub fn destination(&self, distance: i32) -> Option<Point> {
        let (s, c) = f64::from(self.heading).to_radians().sin_cos();
        let unit = f64::from(distance);
        let to_x = f64::from(self.position.x) + unit * c;
        let to_y = f64::from(self.position.y) + unit * s;
        Some(Point::new(coordinate(to_x)?, coordinate(to_y)?))
    }
}

fn coordinate(value: f64) -> Option<i32> {
    let value = value.round();
    if value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        Some(value as i32)
    } else {
        None
    }
}
