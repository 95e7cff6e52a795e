// turtle/src/session.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One interactive session: a line goes in, gets parsed and dispatched against
//! the turtle, and whatever the user should see comes out of the message
//! channel.

use crate::canvas::{Canvas, SceneCanvas};
use crate::config::Config;
use crate::error::{ErrorKind, Result, TurtleError};
use crate::geometry::{Point, Rgb};
use crate::history::CommandHistory;
use crate::persist::{self, LoadKind, NoPrompt, Prompt, SaveTargets, UnsavedChoice};
use crate::player::{Playback, PlaybackHandle, PlaybackReport};
use crate::shapes;
use crate::signature;
use crate::state::TurtleState;
use crate::turtle::Turtle;
use crossbeam_channel::{self, Receiver, Sender};
use parking_lot::{Mutex, MutexGuard};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uturtle::{parse_line, Command, LangError};

pub struct Session {
    config: Config,
    turtle: Arc<Mutex<Turtle>>,
    history: CommandHistory,
    prompt: Box<dyn Prompt>,
    playback: Option<PlaybackHandle>,
    notices: Sender<String>,
    messages: Receiver<String>,
    replaying: bool,
    exit_requested: bool,
}

impl Session {
    pub fn new(config: Config, canvas: Box<dyn Canvas>, prompt: Box<dyn Prompt>) -> Session {
        let (notices, messages) = crossbeam_channel::unbounded();
        Session {
            turtle: Arc::new(Mutex::new(Turtle::new(&config, canvas))),
            history: CommandHistory::new(&config.attribution),
            config,
            prompt,
            playback: None,
            notices,
            messages,
            replaying: false,
            exit_requested: false,
        }
    }

    /// A session over an in-memory canvas that declines every dialog.
    pub fn headless(config: Config) -> Session {
        let canvas = SceneCanvas::new(config.canvas_size);
        Session::new(config, Box::new(canvas), Box::new(NoPrompt))
    }

    /// Runs one line. Returns true if the command was recognized, its
    /// arguments were valid and it went through. Failures are reported once on
    /// the message channel; blank lines are ignored silently.
    pub fn parse_and_execute(&mut self, line: &str) -> bool {
        match self.execute(line) {
            Ok(()) => true,
            Err(TurtleError::Lang(LangError::Empty)) => false,
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    pub fn execute(&mut self, line: &str) -> Result<()> {
        let command = parse_line(line)?;
        debug!(command = command.keyword(), replaying = self.replaying, "dispatching");
        if self.replaying && command.is_session_control() {
            return Err(TurtleError::NotDuringReplay(command.keyword()));
        }

        // The turtle lock does not poison, so a panicking canvas leaves the
        // session usable.
        panic::catch_unwind(AssertUnwindSafe(|| self.dispatch(command)))
            .unwrap_or_else(|payload| Err(TurtleError::from_panic(payload)))?;

        if !command.is_session_control() {
            self.history.append(line);
            self.turtle.lock().set_saved(false);
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::About => {
                self.notify(format!(
                    "Turtle graphics command interpreter, history signed [{}]",
                    self.config.attribution
                ));
                Ok(())
            }
            Command::Save => self.save().map(|_| ()),
            Command::Load => self.load(),
            Command::Exit => self.exit(),
            Command::Play => self.play(),
            command => {
                let mut turtle = self.turtle.lock();
                apply(&mut turtle, command, &self.notices)
            }
        }
    }

    /// Writes what the prompt asks for. Returns whether everything chosen was
    /// written; declining a question is not an error.
    fn save(&mut self) -> Result<bool> {
        let targets = match self.prompt.save_targets() {
            Some(targets) if !targets.is_empty() => targets,
            _ => {
                self.notify("Save cancelled");
                return Ok(false);
            }
        };
        debug!(%targets, "saving");

        let mut written = SaveTargets::empty();
        if targets.contains(SaveTargets::IMAGE) {
            if let Some(path) = self.prompt.image_save_path() {
                let image = self.turtle.lock().canvas().raster_snapshot();
                persist::write_image(&path, &image)?;
                self.notify("Image saved successfully");
                written |= SaveTargets::IMAGE;
            }
        }
        if targets.contains(SaveTargets::HISTORY) {
            if let Some(path) = self.prompt.history_save_path() {
                persist::write_history(&path, &self.history.plain_lines())?;
                self.notify("Commands saved successfully");
                written |= SaveTargets::HISTORY;
            }
        }

        if written != targets {
            self.notify(format!("Saved {} only", written));
            return Ok(false);
        }
        self.turtle.lock().set_saved(true);
        Ok(true)
    }

    fn load(&mut self) -> Result<()> {
        if !self.confirm_unsaved()? {
            self.notify("Load cancelled");
            return Ok(());
        }

        match self.prompt.load_kind() {
            Some(LoadKind::Image) => {
                let path = match self.prompt.image_load_path() {
                    Some(path) => path,
                    None => {
                        self.notify("Load cancelled");
                        return Ok(());
                    }
                };
                let image = persist::read_image(&path)?;
                {
                    let mut turtle = self.turtle.lock();
                    turtle.canvas_mut().set_raster_snapshot(image);
                    turtle.set_saved(false);
                }
                self.notify("Image loaded successfully");
            }
            Some(LoadKind::Commands) => {
                let path = match self.prompt.history_load_path() {
                    Some(path) => path,
                    None => {
                        self.notify("Load cancelled");
                        return Ok(());
                    }
                };
                // Read first so a missing file leaves the drawing alone.
                let lines = persist::read_history(&path)?;
                let failed = self.replay_lines(&lines);
                if failed > 0 {
                    warn!(failed, total = lines.len(), "some loaded commands were rejected");
                }
                self.notify("Commands loaded successfully");
            }
            None => self.notify("Load cancelled"),
        }
        Ok(())
    }

    /// Starts from a clean turtle, surface and history with collision checks
    /// off, then feeds `lines` through the dispatcher. Returns how many lines
    /// were rejected.
    pub fn replay_lines<S>(&mut self, lines: &[S]) -> usize
    where
        S: AsRef<str>,
    {
        if let Err(err) = self.cancel_playback() {
            error!(%err, "playback failed");
        }
        {
            let mut turtle = self.turtle.lock();
            turtle.reset();
            turtle.set_collision(false);
            turtle.clear_surface();
        }
        self.history.clear();

        self.replaying = true;
        let mut failed = 0;
        for line in lines {
            if !self.parse_and_execute(line.as_ref()) {
                failed += 1;
            }
        }
        self.replaying = false;

        // The session now matches the file it came from.
        self.turtle.lock().set_saved(true);
        info!(lines = lines.len(), failed, "commands replayed");
        failed
    }

    fn exit(&mut self) -> Result<()> {
        if !self.confirm_unsaved()? {
            self.notify("Exit cancelled");
            return Ok(());
        }
        if let Err(err) = self.cancel_playback() {
            error!(%err, "playback failed");
        }
        info!("exit requested");
        self.exit_requested = true;
        Ok(())
    }

    /// Asks what to do about unsaved work. True means go ahead.
    pub fn confirm_unsaved(&mut self) -> Result<bool> {
        if self.turtle.lock().state().saved {
            return Ok(true);
        }
        match self.prompt.unsaved_changes() {
            UnsavedChoice::Save => self.save(),
            UnsavedChoice::Discard => Ok(true),
            UnsavedChoice::Cancel => Ok(false),
        }
    }

    fn play(&mut self) -> Result<()> {
        if let Some(handle) = &self.playback {
            if !handle.is_finished() {
                return Err(TurtleError::PlaybackBusy);
            }
        }
        if let Some(handle) = self.playback.take() {
            let report = handle.wait()?;
            debug!(?report, "previous playback collected");
        }

        let playback = Playback::prepare(&self.turtle.lock(), self.config.trail_color);
        if playback.is_empty() {
            self.notify("Nothing to play");
            return Ok(());
        }
        self.notify(format!("Playing {} movements", playback.len()));
        self.playback = Some(playback.spawn(self.turtle.clone(), self.notices.clone())?);
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        self.playback
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    /// Blocks until the current playback, if any, has finished.
    pub fn wait_for_playback(&mut self) -> Result<Option<PlaybackReport>> {
        match self.playback.take() {
            Some(handle) => handle.wait().map(Some),
            None => Ok(None),
        }
    }

    pub fn cancel_playback(&mut self) -> Result<Option<PlaybackReport>> {
        if let Some(handle) = &self.playback {
            handle.cancel();
        }
        self.wait_for_playback()
    }

    /// Everything reported since the last call, oldest first.
    pub fn drain_messages(&self) -> Vec<String> {
        self.messages.try_iter().collect()
    }

    /// A copy of the turtle's state as of now.
    pub fn state(&self) -> TurtleState {
        self.turtle.lock().state().clone()
    }

    /// Locks the turtle. Playback stalls while the guard is held.
    pub fn turtle(&self) -> MutexGuard<'_, Turtle> {
        self.turtle.lock()
    }

    #[inline]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    #[inline]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn notify<S>(&self, message: S)
    where
        S: Into<String>,
    {
        // The receiver lives as long as the session.
        let _ = self.notices.send(message.into());
    }

    fn report(&self, err: &TurtleError) {
        match err.kind() {
            ErrorKind::Io | ErrorKind::Unexpected => error!(%err, "command failed"),
            _ => warn!(%err, "command rejected"),
        }
        self.notify(format!("Error: {}", err));
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(err) = self.cancel_playback() {
            error!(%err, "playback failed");
        }
    }
}

fn apply(turtle: &mut Turtle, command: Command, notices: &Sender<String>) -> Result<()> {
    let notify = |message: String| {
        let _ = notices.send(message);
    };

    match command {
        Command::PenUp => turtle.set_pen_down(false),
        Command::PenDown => turtle.set_pen_down(true),
        Command::Reset => turtle.reset(),
        Command::Clear => turtle.clear_surface(),
        Command::Left(degrees) => turtle.left(degrees),
        Command::Right(degrees) => turtle.right(degrees),
        Command::Move(distance) => turtle.forward(distance)?,
        Command::Reverse(distance) => turtle.forward(-distance)?,
        Command::Black => turtle.set_pen_color(Rgb::BLACK),
        Command::Red => turtle.set_pen_color(Rgb::RED),
        Command::Green => turtle.set_pen_color(Rgb::GREEN),
        Command::White => turtle.set_pen_color(Rgb::WHITE),
        Command::PenColour(r, g, b) => turtle.set_pen_color(Rgb::new(r, g, b)),
        Command::Square(size) => shapes::square(turtle, size)?,
        Command::Triangle(size) => shapes::triangle(turtle, size)?,
        Command::Circle(radius) => shapes::circle(turtle, radius)?,
        Command::Rectangle(width, height) => shapes::rectangle(turtle, width, height)?,
        Command::Record => {
            turtle.recorder_mut().start();
            info!("recording started");
            notify("Recording started".to_owned());
        }
        Command::StopRecord => {
            let captured = turtle.recorder_mut().stop();
            info!(captured, "recording stopped");
            notify(format!("Recording stopped. {} movements captured", captured));
        }
        Command::Speed(speed) => turtle.set_speed(speed),
        Command::AddObstacle(x, y) => {
            let at = Point::new(x, y);
            turtle.add_obstacle(at);
            notify(format!("Obstacle added at {}", at));
        }
        Command::Collision => turtle.set_collision(true),
        Command::NoCollision => turtle.set_collision(false),
        Command::Signature => {
            signature::draw(turtle)?;
            notify("Signature drawn".to_owned());
        }
        Command::About | Command::Save | Command::Load | Command::Exit | Command::Play => {
            unreachable!("`{}` is handled by the session", command.keyword())
        }
    }
    Ok(())
}
