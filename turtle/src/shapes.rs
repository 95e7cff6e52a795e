// turtle/src/shapes.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Figures built from turn and move primitives. Every figure leaves the turtle
//! where it started, facing the way it started, with the pen down.

use crate::error::Result;
use crate::turtle::{MoveFlags, Turtle};

pub fn square(turtle: &mut Turtle, size: i32) -> Result<()> {
    if size <= 0 {
        return Ok(());
    }
    pose_preserving(turtle, |turtle| {
        for _ in 0..4 {
            turtle.forward(size)?;
            turtle.right(90);
        }
        Ok(())
    })
}

pub fn triangle(turtle: &mut Turtle, size: i32) -> Result<()> {
    if size <= 0 {
        return Ok(());
    }
    pose_preserving(turtle, |turtle| {
        for _ in 0..3 {
            turtle.forward(size)?;
            turtle.right(120);
        }
        Ok(())
    })
}

pub fn rectangle(turtle: &mut Turtle, width: i32, height: i32) -> Result<()> {
    if width <= 0 || height <= 0 {
        return Ok(());
    }
    pose_preserving(turtle, |turtle| {
        for _ in 0..2 {
            turtle.forward(width)?;
            turtle.right(90);
            turtle.forward(height)?;
            turtle.right(90);
        }
        Ok(())
    })
}

/// A full circle of `radius` around the current position. The turtle walks
/// out to the eastern edge with the pen up before the circle is stroked.
pub fn circle(turtle: &mut Turtle, radius: i32) -> Result<()> {
    if radius <= 0 {
        return Ok(());
    }
    let center = turtle.position();
    pose_preserving(turtle, |turtle| {
        turtle.set_pen_down(false);
        turtle.point(0);
        turtle.forward(radius)?;
        turtle.set_pen_down(true);
        turtle.draw_arc(center, radius as u32);
        Ok(())
    })
}

// Rounding on diagonal edges can leave the turtle a pixel off the start, so
// the way home is an explicit pen-up move. It skips the collision check: the
// start is where the turtle already was.
fn pose_preserving<F>(turtle: &mut Turtle, draw: F) -> Result<()>
where
    F: FnOnce(&mut Turtle) -> Result<()>,
{
    let start = turtle.pose();
    turtle.set_pen_down(true);
    let drawn = draw(turtle);

    turtle.set_pen_down(false);
    let homed = turtle.commit(start.position, MoveFlags::CAPTURE);
    turtle.point(start.heading);
    turtle.set_pen_down(true);

    drawn.and(homed)
}
