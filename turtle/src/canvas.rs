// turtle/src/canvas.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The drawing surface the turtle paints on.

use crate::geometry::{Point, Rect, Rgb};
use image::RgbaImage;
use std::f64::consts::PI;

/// A surface that can stroke lines and circles and hand out a raster copy of
/// itself. The turtle owns one and drives it; it never reads the pose back.
pub trait Canvas: Send {
    fn draw_segment(&mut self, from: Point, to: Point, color: Rgb, width: u32);
    fn draw_arc(&mut self, center: Point, radius: u32, color: Rgb, width: u32);
    fn clear_surface(&mut self);
    fn raster_snapshot(&self) -> RgbaImage;
    fn set_raster_snapshot(&mut self, image: RgbaImage);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stroke {
    Segment {
        from: Point,
        to: Point,
        color: Rgb,
        width: u32,
    },
    Arc {
        center: Point,
        radius: u32,
        color: Rgb,
        width: u32,
    },
}

impl Stroke {
    pub fn bounds(&self) -> Rect {
        match *self {
            Stroke::Segment { from, to, width, .. } => {
                pad_rect(Rect::from_point(from).union_point(to), half_width(width))
            }
            Stroke::Arc {
                center,
                radius,
                width,
                ..
            } => {
                let reach = (radius.min(i32::MAX as u32) as i32).saturating_add(half_width(width));
                pad_rect(Rect::from_point(center), reach)
            }
        }
    }
}

/// An in-memory vector surface. Strokes are kept in drawing order on top of a
/// background raster; the origin sits at the center of the raster.
#[derive(Clone, Debug)]
pub struct SceneCanvas {
    strokes: Vec<Stroke>,
    background: RgbaImage,
    bounds: Option<Rect>,
}

impl SceneCanvas {
    pub fn new(size: (u32, u32)) -> SceneCanvas {
        SceneCanvas {
            strokes: Vec::new(),
            background: blank(size.0, size.1),
            bounds: None,
        }
    }

    #[inline]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Area covered by everything stroked since the last clear.
    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    fn push(&mut self, stroke: Stroke) {
        let rect = stroke.bounds();
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.union_rect(rect),
            None => rect,
        });
        self.strokes.push(stroke);
    }
}

impl Canvas for SceneCanvas {
    fn draw_segment(&mut self, from: Point, to: Point, color: Rgb, width: u32) {
        self.push(Stroke::Segment {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_arc(&mut self, center: Point, radius: u32, color: Rgb, width: u32) {
        self.push(Stroke::Arc {
            center,
            radius,
            color,
            width,
        });
    }

    fn clear_surface(&mut self) {
        let (width, height) = self.background.dimensions();
        self.strokes.clear();
        self.bounds = None;
        self.background = blank(width, height);
    }

    fn raster_snapshot(&self) -> RgbaImage {
        let mut image = self.background.clone();
        for stroke in &self.strokes {
            rasterize(&mut image, stroke);
        }
        image
    }

    fn set_raster_snapshot(&mut self, image: RgbaImage) {
        self.strokes.clear();
        self.bounds = None;
        self.background = image;
    }
}

fn blank(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width.max(1), height.max(1), Rgb::WHITE.to_rgba())
}

#[inline]
fn half_width(width: u32) -> i32 {
    (width.min(i32::MAX as u32) as i32).saturating_add(1) / 2
}

fn pad_rect(rect: Rect, pad: i32) -> Rect {
    Rect {
        min: Point::new(rect.min.x.saturating_sub(pad), rect.min.y.saturating_sub(pad)),
        max: Point::new(rect.max.x.saturating_add(pad), rect.max.y.saturating_add(pad)),
    }
}

// Samples the stroke every half pixel and stamps a square pen at each sample.
fn rasterize(image: &mut RgbaImage, stroke: &Stroke) {
    let origin = (
        f64::from(image.width() / 2),
        f64::from(image.height() / 2),
    );

    match *stroke {
        Stroke::Segment {
            from,
            to,
            color,
            width,
        } => {
            let start = (origin.0 + f64::from(from.x), origin.1 + f64::from(from.y));
            let end = (origin.0 + f64::from(to.x), origin.1 + f64::from(to.y));
            let pad = f64::from(width.max(1));
            let limits = (
                -pad,
                f64::from(image.width()) + pad,
                -pad,
                f64::from(image.height()) + pad,
            );
            let (t0, t1) = match clip(start, end, limits) {
                Some(range) => range,
                None => return,
            };

            let (dx, dy) = (end.0 - start.0, end.1 - start.1);
            let length = dx.hypot(dy) * (t1 - t0);
            let steps = (length * 2.0).ceil().max(1.0) as u32;
            for step in 0..=steps {
                let t = t0 + (t1 - t0) * f64::from(step) / f64::from(steps);
                stamp(image, start.0 + dx * t, start.1 + dy * t, color, width);
            }
        }
        Stroke::Arc {
            center,
            radius,
            color,
            width,
        } => {
            let radius = f64::from(radius);
            let steps = (2.0 * PI * radius * 2.0).ceil().max(8.0).min(MAX_ARC_SAMPLES) as u32;
            for step in 0..steps {
                let angle = 2.0 * PI * f64::from(step) / f64::from(steps);
                let x = origin.0 + f64::from(center.x) + radius * angle.cos();
                let y = origin.1 + f64::from(center.y) + radius * angle.sin();
                stamp(image, x, y, color, width);
            }
        }
    }
}

const MAX_ARC_SAMPLES: f64 = 1_048_576.0;

// Liang-Barsky: the parameter range of `start..end` inside the limits
// `(min_x, max_x, min_y, max_y)`, or `None` if the segment misses them.
fn clip(start: (f64, f64), end: (f64, f64), limits: (f64, f64, f64, f64)) -> Option<(f64, f64)> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let edges = [
        (-dx, start.0 - limits.0),
        (dx, limits.1 - start.0),
        (-dy, start.1 - limits.2),
        (dy, limits.3 - start.1),
    ];

    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for &(p, q) in &edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
    }

    if t0 <= t1 {
        Some((t0, t1))
    } else {
        None
    }
}

fn stamp(image: &mut RgbaImage, x: f64, y: f64, color: Rgb, width: u32) {
    let half = f64::from(width.max(1)) / 2.0;
    let (min_x, max_x) = ((x - half).round() as i64, (x + half).round() as i64);
    let (min_y, max_y) = ((y - half).round() as i64, (y + half).round() as i64);
    let pixel = color.to_rgba();
    for py in min_y..max_y.max(min_y + 1) {
        for px in min_x..max_x.max(min_x + 1) {
            let inside = px >= 0
                && py >= 0
                && (px as u64) < u64::from(image.width())
                && (py as u64) < u64::from(image.height());
            if inside {
                image.put_pixel(px as u32, py as u32, pixel);
            }
        }
    }
}
