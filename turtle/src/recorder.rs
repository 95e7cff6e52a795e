// turtle/src/recorder.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::geometry::{Point, Rgb};

/// One committed move: where it went and the pen it was made with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Movement {
    pub to: Point,
    pub pen_down: bool,
    pub color: Rgb,
    pub stroke_width: u32,
}

#[derive(Clone, Debug, Default)]
pub struct Recorder {
    recording: bool,
    buffer: Vec<Movement>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    /// Throws away the previous take and starts capturing.
    pub fn start(&mut self) {
        self.buffer.clear();
        self.recording = true;
    }

    /// Stops capturing and returns how many movements the take holds.
    pub fn stop(&mut self) -> usize {
        self.recording = false;
        self.buffer.len()
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn capture(&mut self, movement: Movement) {
        if self.recording {
            self.buffer.push(movement);
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[inline]
    pub fn movements(&self) -> &[Movement] {
        &self.buffer
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(x: i32) -> Movement {
        Movement {
            to: Point::new(x, 0),
            pen_down: true,
            color: Rgb::BLACK,
            stroke_width: 1,
        }
    }

    #[test]
    fn captures_only_while_recording() {
        let mut recorder = Recorder::new();
        recorder.capture(movement(1));
        assert!(recorder.is_empty());

        recorder.start();
        recorder.capture(movement(2));
        recorder.capture(movement(3));
        assert_eq!(recorder.stop(), 2);

        recorder.capture(movement(4));
        assert_eq!(recorder.movements(), &[movement(2), movement(3)]);
    }

    #[test]
    fn starting_again_discards_the_old_take() {
        let mut recorder = Recorder::new();
        recorder.start();
        recorder.capture(movement(1));
        recorder.stop();
        recorder.start();
        assert!(recorder.is_recording());
        assert!(recorder.is_empty());
    }
}
