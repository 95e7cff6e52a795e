// turtle/src/obstacle.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::geometry::Point;

/// A destination closer than this on both axes to an obstacle is blocked.
pub const PROXIMITY: u32 = 10;

/// Point obstacles. Duplicates are kept.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    points: Vec<Point>,
}

impl ObstacleSet {
    pub fn new() -> ObstacleSet {
        ObstacleSet::default()
    }

    pub fn add(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// The first obstacle within the proximity window of `destination`, if any.
    /// Only the destination is tested, not the path leading to it.
    pub fn blocking(&self, destination: Point) -> Option<Point> {
        self.points
            .iter()
            .copied()
            .find(|obstacle| {
                destination.x.abs_diff(obstacle.x) < PROXIMITY
                    && destination.y.abs_diff(obstacle.y) < PROXIMITY
            })
    }
}
