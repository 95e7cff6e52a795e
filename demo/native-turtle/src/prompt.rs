// demo/native-turtle/src/prompt.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Questions asked on the terminal in place of file dialogs.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use turtle_graphics::{LoadKind, Prompt, SaveTargets, UnsavedChoice};

/// Reads answers from stdin. An empty answer or end of input declines.
pub struct StdinPrompt;

impl StdinPrompt {
    fn ask(&self, question: &str) -> Option<String> {
        print!("{} ", question);
        io::stdout().flush().ok()?;

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = answer.trim();
                if answer.is_empty() {
                    None
                } else {
                    Some(answer.to_owned())
                }
            }
        }
    }

    fn ask_path(&self, question: &str) -> Option<PathBuf> {
        self.ask(question).map(PathBuf::from)
    }
}

impl Prompt for StdinPrompt {
    fn save_targets(&mut self) -> Option<SaveTargets> {
        let answer = self.ask("Save [i]mage, [c]ommands or [b]oth?")?;
        match answer.to_ascii_lowercase().as_str() {
            "i" | "image" => Some(SaveTargets::IMAGE),
            "c" | "commands" => Some(SaveTargets::HISTORY),
            "b" | "both" => Some(SaveTargets::all()),
            _ => None,
        }
    }

    fn image_save_path(&mut self) -> Option<PathBuf> {
        self.ask_path("Save image to (.png or .jpg):")
    }

    fn history_save_path(&mut self) -> Option<PathBuf> {
        self.ask_path("Save commands to:")
    }

    fn load_kind(&mut self) -> Option<LoadKind> {
        let answer = self.ask("Load [i]mage or [c]ommands?")?;
        match answer.to_ascii_lowercase().as_str() {
            "i" | "image" => Some(LoadKind::Image),
            "c" | "commands" => Some(LoadKind::Commands),
            _ => None,
        }
    }

    fn image_load_path(&mut self) -> Option<PathBuf> {
        self.ask_path("Load image from:")
    }

    fn history_load_path(&mut self) -> Option<PathBuf> {
        self.ask_path("Load commands from:")
    }

    fn unsaved_changes(&mut self) -> UnsavedChoice {
        let answer = self.ask("There are unsaved changes. [s]ave, [d]iscard or [c]ancel?");
        match answer.as_ref().map(|answer| answer.to_ascii_lowercase()) {
            Some(ref answer) if answer == "s" || answer == "save" => UnsavedChoice::Save,
            Some(ref answer) if answer == "d" || answer == "discard" => UnsavedChoice::Discard,
            _ => UnsavedChoice::Cancel,
        }
    }
}
