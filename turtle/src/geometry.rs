// turtle/src/geometry.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integer canvas points, rectangles and pen colors.

use image::Rgba;
use std::fmt::{Display, Formatter, Result as FormatResult};

/// A point in canvas coordinates. `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl Display for Point {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        write!(formatter, "({},{})", self.x, self.y)
    }
}

/// Axis-aligned bounds, inclusive on both corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[inline]
    pub fn from_point(point: Point) -> Rect {
        Rect {
            min: point,
            max: point,
        }
    }

    pub fn union_point(self, point: Point) -> Rect {
        Rect {
            min: Point::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Point::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    pub fn union_rect(self, other: Rect) -> Rect {
        self.union_point(other.min).union_point(other.max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    #[inline]
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from(pencolor: (u8, u8, u8)) -> Rgb {
        Rgb::new(pencolor.0, pencolor.1, pencolor.2)
    }
}

impl Display for Rgb {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        write!(formatter, "{},{},{}", self.r, self.g, self.b)
    }
}
