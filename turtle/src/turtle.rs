// turtle/src/turtle.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The turtle state machine: pose and pen, the obstacles it must avoid, the
//! recorder watching it and the canvas it draws on.

use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::{Result, TurtleError};
use crate::geometry::{Point, Rgb};
use crate::obstacle::ObstacleSet;
use crate::recorder::{Movement, Recorder};
use crate::state::{Pose, TurtleState};
use std::fmt::{Debug, Formatter, Result as FormatResult};

/// Radius of the dot dropped at each replayed point when a trail is configured.
const MARKER_RADIUS: u32 = 2;

bitflags! {
    /// What a committed move goes through before it lands.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MoveFlags: u8 {
        const CHECK_COLLISION = 0x01;
        const CAPTURE         = 0x02;
    }
}

pub struct Turtle {
    state: TurtleState,
    home: Point,
    obstacles: ObstacleSet,
    collision: bool,
    recorder: Recorder,
    canvas: Box<dyn Canvas>,
}

impl Turtle {
    pub fn new(config: &Config, canvas: Box<dyn Canvas>) -> Turtle {
        Turtle {
            state: TurtleState::new(config.home, config.speed),
            home: config.home,
            obstacles: ObstacleSet::new(),
            collision: false,
            recorder: Recorder::new(),
            canvas,
        }
    }

    #[inline]
    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.state.position
    }

    #[inline]
    pub fn heading(&self) -> u32 {
        self.state.heading()
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.state.pose()
    }

    /// Moves `distance` along the heading, backward if negative. A move that
    /// would leave the coordinate range is refused without side effects.
    pub fn forward(&mut self, distance: i32) -> Result<()> {
        let to = self
            .state
            .destination(distance)
            .ok_or(TurtleError::OutOfBounds {
                from: self.state.position,
                distance,
            })?;
        self.commit(to, MoveFlags::all())
    }

    /// Counter-clockwise on screen.
    pub fn left(&mut self, degrees: u32) {
        self.state.turn(-i64::from(degrees));
    }

    /// Clockwise on screen.
    pub fn right(&mut self, degrees: u32) {
        self.state.turn(i64::from(degrees));
    }

    pub fn point(&mut self, degrees: u32) {
        self.state.point(i64::from(degrees));
    }

    /// Goes straight to `to` without changing the heading.
    pub fn move_to(&mut self, to: Point) -> Result<()> {
        self.commit(to, MoveFlags::all())
    }

    /// The single path every move takes. A vetoed move changes nothing: no
    /// capture, no stroke, no position update.
    pub fn commit(&mut self, to: Point, flags: MoveFlags) -> Result<()> {
        if flags.contains(MoveFlags::CHECK_COLLISION) && self.collision {
            if let Some(obstacle) = self.obstacles.blocking(to) {
                return Err(TurtleError::CollisionVeto { at: to, obstacle });
            }
        }

        if flags.contains(MoveFlags::CAPTURE) {
            self.recorder.capture(Movement {
                to,
                pen_down: self.state.pen_down,
                color: self.state.pen_color,
                stroke_width: self.state.stroke_width(),
            });
        }

        let from = self.state.position;
        if self.state.pen_down && from != to {
            self.canvas
                .draw_segment(from, to, self.state.pen_color, self.state.stroke_width());
        }
        self.state.position = to;
        Ok(())
    }

    /// Puts the pose back without drawing, checking or recording anything.
    pub fn restore_pose(&mut self, pose: Pose) {
        self.state.position = pose.position;
        self.state.point(i64::from(pose.heading));
    }

    pub fn set_pen_down(&mut self, pen_down: bool) {
        self.state.pen_down = pen_down;
    }

    pub fn set_pen_color(&mut self, color: Rgb) {
        self.state.pen_color = color;
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        self.state.set_stroke_width(width);
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.state.set_speed(speed);
    }

    pub fn set_saved(&mut self, saved: bool) {
        self.state.saved = saved;
    }

    /// A circle around `center` in the current pen.
    pub fn draw_arc(&mut self, center: Point, radius: u32) {
        self.canvas
            .draw_arc(center, radius, self.state.pen_color, self.state.stroke_width());
    }

    pub fn draw_marker(&mut self, at: Point, color: Rgb) {
        self.canvas.draw_arc(at, MARKER_RADIUS, color, MARKER_RADIUS);
    }

    /// Default pose, no obstacles, empty recording buffer. The surface is left alone.
    pub fn reset(&mut self) {
        self.state.reset_pose(self.home);
        self.obstacles.clear();
        self.recorder.clear();
    }

    pub fn clear_surface(&mut self) {
        self.canvas.clear_surface();
    }

    pub fn add_obstacle(&mut self, at: Point) {
        self.obstacles.add(at);
    }

    #[inline]
    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn set_collision(&mut self, enabled: bool) {
        self.collision = enabled;
    }

    #[inline]
    pub fn collision_enabled(&self) -> bool {
        self.collision
    }

    #[inline]
    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    #[inline]
    pub fn recorder_mut(&mut self) -> &mut Recorder {
        &mut self.recorder
    }

    #[inline]
    pub fn canvas(&self) -> &dyn Canvas {
        &*self.canvas
    }

    #[inline]
    pub fn canvas_mut(&mut self) -> &mut dyn Canvas {
        &mut *self.canvas
    }
}

impl Debug for Turtle {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        formatter
            .debug_struct("Turtle")
            .field("state", &self.state)
            .field("obstacles", &self.obstacles.len())
            .field("collision", &self.collision)
            .field("recorder", &self.recorder)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::LogCanvas;
    use proptest::prelude::*;

    fn turtle() -> (Turtle, LogCanvas) {
        let canvas = LogCanvas::default();
        (Turtle::new(&Config::default(), Box::new(canvas.clone())), canvas)
    }

    #[test]
    fn forward_draws_only_with_the_pen_down() {
        let (mut turtle, canvas) = turtle();
        turtle.forward(30).unwrap();
        assert_eq!(turtle.position(), Point::new(30, 0));
        assert_eq!(canvas.segments(), vec![(Point::new(0, 0), Point::new(30, 0))]);

        turtle.set_pen_down(false);
        turtle.forward(-50).unwrap();
        assert_eq!(turtle.position(), Point::new(-20, 0));
        assert_eq!(canvas.segments().len(), 1);
    }

    #[test]
    fn left_then_right_restores_heading() {
        let (mut turtle, _) = turtle();
        turtle.right(10);
        turtle.left(45);
        assert_eq!(turtle.heading(), 325);
        turtle.right(45);
        assert_eq!(turtle.heading(), 10);
    }

    #[test]
    fn move_to_keeps_heading_and_lands_exactly() {
        let (mut turtle, canvas) = turtle();
        turtle.right(30);
        turtle.move_to(Point::new(7, -11)).unwrap();
        assert_eq!(turtle.position(), Point::new(7, -11));
        assert_eq!(turtle.heading(), 30);
        assert_eq!(canvas.segments(), vec![(Point::new(0, 0), Point::new(7, -11))]);
    }

    #[test]
    fn obstacles_veto_only_with_collision_enabled() {
        let (mut turtle, canvas) = turtle();
        turtle.add_obstacle(Point::new(50, 50));
        turtle.set_collision(true);
        turtle.recorder_mut().start();

        let err = turtle.move_to(Point::new(52, 52)).unwrap_err();
        assert!(matches!(err, TurtleError::CollisionVeto { .. }));
        assert_eq!(turtle.position(), Point::new(0, 0));
        assert!(canvas.segments().is_empty());
        assert!(turtle.recorder().is_empty());

        turtle.set_collision(false);
        turtle.move_to(Point::new(52, 52)).unwrap();
        assert_eq!(turtle.position(), Point::new(52, 52));
    }

    #[test]
    fn commit_without_check_ignores_obstacles() {
        let (mut turtle, _) = turtle();
        turtle.add_obstacle(Point::new(0, 0));
        turtle.set_collision(true);
        assert!(turtle.forward(5).is_err());
        turtle.commit(Point::new(3, 3), MoveFlags::CAPTURE).unwrap();
        assert_eq!(turtle.position(), Point::new(3, 3));
    }

    #[test]
    fn recording_snapshots_the_pen_before_the_move() {
        let (mut turtle, _) = turtle();
        turtle.recorder_mut().start();
        turtle.set_pen_color(Rgb::RED);
        turtle.forward(10).unwrap();
        turtle.set_pen_down(false);
        turtle.move_to(Point::new(10, 20)).unwrap();
        turtle.commit(Point::new(0, 0), MoveFlags::CHECK_COLLISION).unwrap();

        let movements = turtle.recorder().movements();
        assert_eq!(movements.len(), 2);
        assert_eq!(movements[0].to, Point::new(10, 0));
        assert!(movements[0].pen_down);
        assert_eq!(movements[0].color, Rgb::RED);
        assert_eq!(movements[1].to, Point::new(10, 20));
        assert!(!movements[1].pen_down);
    }

    #[test]
    fn reset_clears_obstacles_and_recording_but_not_the_surface() {
        let (mut turtle, canvas) = turtle();
        turtle.recorder_mut().start();
        turtle.forward(10).unwrap();
        turtle.add_obstacle(Point::new(90, 90));
        turtle.set_speed(7);
        turtle.reset();
        assert_eq!(turtle.position(), Point::new(0, 0));
        assert!(turtle.obstacles().is_empty());
        assert!(turtle.recorder().is_empty());
        assert_eq!(turtle.state().speed(), 7);
        assert_eq!(canvas.segments().len(), 1);

        turtle.clear_surface();
        assert!(canvas.segments().is_empty());
    }

    #[test]
    fn moves_off_the_coordinate_range_are_refused() {
        let canvas = LogCanvas::default();
        let config = Config {
            home: Point::new(i32::MAX - 3, 0),
            ..Config::default()
        };
        let mut turtle = Turtle::new(&config, Box::new(canvas.clone()));
        turtle.recorder_mut().start();

        let err = turtle.forward(10).unwrap_err();
        assert!(matches!(err, TurtleError::OutOfBounds { distance: 10, .. }));
        assert_eq!(turtle.position(), Point::new(i32::MAX - 3, 0));
        assert!(canvas.segments().is_empty());
        assert!(turtle.recorder().is_empty());

        turtle.forward(3).unwrap();
        turtle.forward(-3).unwrap();
        assert_eq!(turtle.position(), Point::new(i32::MAX - 3, 0));
    }

    proptest! {
        #[test]
        fn forward_and_back_returns_home(heading in 0u32..360, distance in 1i32..5000) {
            let (mut turtle, _) = turtle();
            turtle.point(heading);
            turtle.forward(distance).unwrap();
            turtle.forward(-distance).unwrap();
            let end = turtle.position();
            prop_assert!(end.x.abs() <= 1 && end.y.abs() <= 1, "ended at {}", end);
            prop_assert_eq!(turtle.heading(), heading);
        }
    }
}
