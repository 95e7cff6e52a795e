// demo/native-turtle/src/main.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interactive turtle on the terminal. One command per line; `exit` quits.

mod prompt;

use crate::prompt::StdinPrompt;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use turtle_graphics::{Config, SceneCanvas, Session};

const LOG_ENV: &str = "TURTLE_LOG";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    info!(?config, "starting");
    let canvas = SceneCanvas::new(config.canvas_size);
    let mut session = Session::new(config, Box::new(canvas), Box::new(StdinPrompt));

    let stdin = io::stdin();
    loop {
        print!("turtle> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                error!(%err, "cannot read from stdin");
                break;
            }
        }

        let accepted = session.parse_and_execute(&line);
        debug!(accepted, "line handled");
        for message in session.drain_messages() {
            println!("{}", message);
        }
        if session.exit_requested() {
            break;
        }
    }

    // Let a running playback finish unless the user asked to leave.
    match session.wait_for_playback() {
        Ok(Some(report)) => info!(?report, "playback finished before exit"),
        Ok(None) => {}
        Err(err) => error!(%err, "playback failed"),
    }
    for message in session.drain_messages() {
        println!("{}", message);
    }
}
