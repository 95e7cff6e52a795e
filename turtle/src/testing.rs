// turtle/src/testing.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::canvas::{Canvas, Stroke};
use crate::geometry::{Point, Rgb};
use image::RgbaImage;
use parking_lot::Mutex;
use std::sync::Arc;

/// A canvas whose strokes stay readable after it has been handed to a turtle.
#[derive(Clone, Default)]
pub struct LogCanvas {
    strokes: Arc<Mutex<Vec<Stroke>>>,
}

impl LogCanvas {
    pub fn strokes(&self) -> Vec<Stroke> {
        self.strokes.lock().clone()
    }

    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.strokes()
            .into_iter()
            .filter_map(|stroke| match stroke {
                Stroke::Segment { from, to, .. } => Some((from, to)),
                Stroke::Arc { .. } => None,
            })
            .collect()
    }
}

impl Canvas for LogCanvas {
    fn draw_segment(&mut self, from: Point, to: Point, color: Rgb, width: u32) {
        self.strokes.lock().push(Stroke::Segment {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_arc(&mut self, center: Point, radius: u32, color: Rgb, width: u32) {
        self.strokes.lock().push(Stroke::Arc {
            center,
            radius,
            color,
            width,
        });
    }

    fn clear_surface(&mut self) {
        self.strokes.lock().clear();
    }

    fn raster_snapshot(&self) -> RgbaImage {
        RgbaImage::new(1, 1)
    }

    fn set_raster_snapshot(&mut self, _: RgbaImage) {
        self.strokes.lock().clear();
    }
}
