// turtle/src/player.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Timed replay of a recorded take on a background thread.
//!
//! The take is copied out of the recorder when playback is prepared, so the
//! user can start a new recording while the old one is still being played.
//! Each step takes the turtle lock only for the duration of its move; the
//! wait between steps happens with the lock released and doubles as the
//! cancellation point.

use crate::error::{Result, TurtleError};
use crate::geometry::Rgb;
use crate::recorder::Movement;
use crate::turtle::{MoveFlags, Turtle};
use crossbeam_channel::{self, RecvTimeoutError, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, warn};

const THREAD_NAME: &str = "turtle-playback";

/// How a playback ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    /// Steps that were attempted, vetoed ones included.
    pub steps: usize,
    pub vetoed: usize,
    pub cancelled: bool,
}

#[derive(Clone, Debug)]
pub struct Playback {
    steps: Vec<Movement>,
    restore_color: Rgb,
    restore_width: u32,
    trail: Option<Rgb>,
}

impl Playback {
    /// Snapshots the recorded take and the pen to restore once it is over.
    pub fn prepare(turtle: &Turtle, trail: Option<Rgb>) -> Playback {
        Playback {
            steps: turtle.recorder().movements().to_vec(),
            restore_color: turtle.state().pen_color,
            restore_width: turtle.state().stroke_width(),
            trail,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn spawn(self, turtle: Arc<Mutex<Turtle>>, notices: Sender<String>) -> Result<PlaybackHandle> {
        let (cancel, cancelled) = crossbeam_channel::bounded(1);
        let steps = self.len();
        let worker = thread::Builder::new()
            .name(THREAD_NAME.to_owned())
            .spawn(move || self.run(&turtle, &notices, |delay| {
                match cancelled.recv_timeout(delay) {
                    Err(RecvTimeoutError::Timeout) => false,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
                }
            }))
            .map_err(TurtleError::Io)?;
        info!(steps, "playback started");
        Ok(PlaybackHandle { cancel, worker })
    }

    // `wait` returns true when the playback should stop.
    fn run<W>(self, turtle: &Mutex<Turtle>, notices: &Sender<String>, mut wait: W) -> PlaybackReport
    where
        W: FnMut(Duration) -> bool,
    {
        let mut report = PlaybackReport::default();
        let total = self.steps.len();

        for (index, step) in self.steps.iter().enumerate() {
            let speed = {
                let mut turtle = turtle.lock();
                turtle.set_pen_color(step.color);
                turtle.set_stroke_width(step.stroke_width);
                turtle.set_pen_down(step.pen_down);
                match turtle.commit(step.to, MoveFlags::CHECK_COLLISION) {
                    Ok(()) => {
                        if let Some(trail) = self.trail {
                            turtle.draw_marker(step.to, trail);
                        }
                    }
                    Err(err) => {
                        report.vetoed += 1;
                        warn!(step = index, "{}", err);
                        // The receiver may already be gone if the session was dropped.
                        let _ = notices.send(format!("Error: {}", err));
                    }
                }
                turtle.state().speed()
            };
            report.steps += 1;
            debug!(step = index, to = %step.to, "played");

            if index + 1 < total && wait(Duration::from_millis(u64::from(speed))) {
                report.cancelled = true;
                break;
            }
        }

        let mut turtle = turtle.lock();
        turtle.set_pen_color(self.restore_color);
        turtle.set_stroke_width(self.restore_width);
        info!(steps = report.steps, vetoed = report.vetoed, cancelled = report.cancelled, "playback finished");
        report
    }
}

/// The running playback. Dropping the handle detaches the thread and, since
/// the cancellation sender goes with it, stops it at its next wait.
#[derive(Debug)]
pub struct PlaybackHandle {
    cancel: Sender<()>,
    worker: JoinHandle<PlaybackReport>,
}

impl PlaybackHandle {
    pub fn cancel(&self) {
        // Full means a cancellation is already pending.
        let _ = self.cancel.try_send(());
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    pub fn wait(self) -> Result<PlaybackReport> {
        self.worker.join().map_err(TurtleError::from_panic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::geometry::Point;
    use crate::testing::LogCanvas;
    use crate::state::Pose;
    use std::time::Instant;

    const HOME: Pose = Pose {
        position: Point { x: 0, y: 0 },
        heading: 0,
    };

    fn recorded(moves: &[(i32, i32)]) -> (Turtle, LogCanvas) {
        let canvas = LogCanvas::default();
        let mut turtle = Turtle::new(&Config::default(), Box::new(canvas.clone()));
        turtle.recorder_mut().start();
        for &(x, y) in moves {
            turtle.move_to(Point::new(x, y)).unwrap();
        }
        turtle.recorder_mut().stop();
        (turtle, canvas)
    }

    #[test]
    fn replays_every_step_in_order() {
        let (mut turtle, canvas) = recorded(&[(10, 0), (10, 10), (0, 10)]);
        turtle.restore_pose(HOME);
        turtle.clear_surface();
        turtle.set_speed(1);
        let playback = Playback::prepare(&turtle, None);
        assert_eq!(playback.len(), 3);

        let turtle = Arc::new(Mutex::new(turtle));
        let (notices, _inbox) = crossbeam_channel::unbounded();
        let report = playback.spawn(turtle.clone(), notices).unwrap().wait().unwrap();

        assert_eq!(report, PlaybackReport { steps: 3, vetoed: 0, cancelled: false });
        assert_eq!(turtle.lock().position(), Point::new(0, 10));
        assert_eq!(
            canvas.segments(),
            vec![
                (Point::new(0, 0), Point::new(10, 0)),
                (Point::new(10, 0), Point::new(10, 10)),
                (Point::new(10, 10), Point::new(0, 10)),
            ]
        );
        // Playback never records itself.
        assert_eq!(turtle.lock().recorder().len(), 3);
    }

    #[test]
    fn waits_between_steps_and_restores_the_pen() {
        let (mut turtle, _) = recorded(&[(5, 0), (6, 0), (7, 0)]);
        turtle.set_speed(30);
        let playback = Playback::prepare(&turtle, None);
        turtle.set_pen_color(Rgb::RED);
        turtle.set_stroke_width(4);
        let turtle = Arc::new(Mutex::new(turtle));

        let waits = Arc::new(Mutex::new(Vec::new()));
        let (notices, _inbox) = crossbeam_channel::unbounded();
        let report = {
            let waits = waits.clone();
            let playback = Playback {
                restore_color: Rgb::GREEN,
                restore_width: 2,
                ..playback
            };
            playback.run(&turtle, &notices, move |delay| {
                waits.lock().push(delay);
                false
            })
        };

        assert_eq!(report.steps, 3);
        assert_eq!(*waits.lock(), vec![Duration::from_millis(30); 2]);
        let turtle = turtle.lock();
        assert_eq!(turtle.state().pen_color, Rgb::GREEN);
        assert_eq!(turtle.state().stroke_width(), 2);
    }

    #[test]
    fn real_delays_are_observed() {
        let (mut turtle, _) = recorded(&[(1, 0), (2, 0), (3, 0)]);
        turtle.set_speed(20);
        let playback = Playback::prepare(&turtle, None);
        let (notices, _inbox) = crossbeam_channel::unbounded();

        let started = Instant::now();
        playback
            .spawn(Arc::new(Mutex::new(turtle)), notices)
            .unwrap()
            .wait()
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn vetoed_steps_are_reported_and_skipped() {
        let (mut turtle, _) = recorded(&[(20, 0), (50, 50), (80, 0)]);
        turtle.restore_pose(HOME);
        turtle.add_obstacle(Point::new(48, 48));
        turtle.set_collision(true);
        let playback = Playback::prepare(&turtle, Some(Rgb::RED));
        let turtle = Mutex::new(turtle);
        let (notices, inbox) = crossbeam_channel::unbounded();

        let report = playback.run(&turtle, &notices, |_| false);
        assert_eq!(report.vetoed, 1);
        assert_eq!(report.steps, 3);
        assert_eq!(turtle.lock().position(), Point::new(80, 0));
        let message = inbox.try_recv().unwrap();
        assert!(message.starts_with("Error: Collision detected!"), "{}", message);
    }

    #[test]
    fn cancelling_stops_at_the_next_wait() {
        let (mut turtle, _) = recorded(&[(1, 0), (2, 0), (3, 0), (4, 0)]);
        turtle.set_speed(10_000);
        let playback = Playback::prepare(&turtle, None);
        let turtle = Arc::new(Mutex::new(turtle));
        let (notices, _inbox) = crossbeam_channel::unbounded();

        let handle = playback.spawn(turtle.clone(), notices).unwrap();
        handle.cancel();
        let report = handle.wait().unwrap();
        assert!(report.cancelled);
        assert_eq!(report.steps, 1);
        assert_eq!(turtle.lock().position(), Point::new(1, 0));
    }
}
