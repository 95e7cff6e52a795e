// turtle/src/signature.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The signature word "ROHAN", drawn letter by letter from plain turtle moves.
//! Each letter is a fixed script; there is no font here.

use crate::error::Result;
use crate::geometry::Point;
use crate::turtle::Turtle;

/// Horizontal distance between the origins of consecutive letters.
pub const LETTER_SPACING: i32 = 60;

type Letter = fn(&mut Turtle) -> Result<()>;

const LETTERS: [Letter; 5] = [letter_r, letter_o, letter_h, letter_a, letter_n];

/// Clears everything and writes the word starting at the home position.
pub fn draw(turtle: &mut Turtle) -> Result<()> {
    turtle.reset();
    turtle.clear_surface();
    turtle.point(0);
    let origin = turtle.position();

    for (index, letter) in LETTERS.iter().enumerate() {
        let start = Point::new(origin.x + LETTER_SPACING * index as i32, origin.y);
        turtle.set_pen_down(false);
        turtle.move_to(start)?;
        turtle.set_pen_down(true);
        letter(turtle)?;
    }
    Ok(())
}

fn letter_r(turtle: &mut Turtle) -> Result<()> {
    turtle.point(90);
    turtle.forward(50)?;
    turtle.right(90);
    turtle.forward(30)?;
    turtle.right(90);
    turtle.forward(50)?;
    turtle.left(135);
    turtle.forward(45)
}

fn letter_o(turtle: &mut Turtle) -> Result<()> {
    turtle.point(0);
    turtle.forward(30)?;
    turtle.right(90);
    turtle.forward(50)?;
    turtle.right(90);
    turtle.forward(30)?;
    turtle.right(90);
    turtle.forward(50)
}

fn letter_h(turtle: &mut Turtle) -> Result<()> {
    turtle.point(90);
    turtle.forward(50)?;
    turtle.set_pen_down(false);
    turtle.forward(-25)?;
    turtle.set_pen_down(true);
    turtle.point(0);
    turtle.forward(30)?;
    turtle.set_pen_down(false);
    turtle.point(90);
    turtle.forward(-25)?;
    turtle.set_pen_down(true);
    turtle.forward(50)
}

fn letter_a(turtle: &mut Turtle) -> Result<()> {
    turtle.point(90);
    turtle.forward(50)?;
    turtle.right(135);
    turtle.forward(60)?;
    turtle.set_pen_down(false);
    turtle.forward(-30)?;
    turtle.left(90);
    turtle.set_pen_down(true);
    turtle.forward(30)
}

fn letter_n(turtle: &mut Turtle) -> Result<()> {
    turtle.point(90);
    turtle.forward(50)?;
    turtle.right(135);
    turtle.forward(70)?;
    turtle.left(135);
    turtle.forward(50)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::testing::LogCanvas;

    #[test]
    fn letters_start_sixty_units_apart() {
        let canvas = LogCanvas::default();
        let mut turtle = Turtle::new(&Config::default(), Box::new(canvas.clone()));
        turtle.forward(500).unwrap();
        turtle.add_obstacle(Point::new(5, 5));
        turtle.set_collision(true);

        draw(&mut turtle).unwrap();

        let segments = canvas.segments();
        for index in 0..LETTERS.len() as i32 {
            let origin = Point::new(LETTER_SPACING * index, 0);
            assert!(
                segments.iter().any(|&(from, _)| from == origin),
                "no stroke starts at {}",
                origin
            );
        }
        // The first stroke of R goes straight down from the origin.
        assert_eq!(segments[0], (Point::new(0, 0), Point::new(0, 50)));
        // Nothing from before the reset survives.
        assert!(!segments.contains(&(Point::new(0, 0), Point::new(500, 0))));
        assert!(turtle.obstacles().is_empty());
    }
}
