// turtle/src/history.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static ATTRIBUTION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[[^\]]*\]\s*$").expect("attribution pattern compiles"));

/// Accepted commands in submission order, each tagged with ` [attribution]`.
#[derive(Clone, Debug)]
pub struct CommandHistory {
    attribution: String,
    entries: Vec<String>,
}

impl CommandHistory {
    pub fn new(attribution: &str) -> CommandHistory {
        CommandHistory {
            attribution: attribution.to_owned(),
            entries: Vec::new(),
        }
    }

    pub fn append(&mut self, command: &str) {
        self.entries
            .push(format!("{} [{}]", command.trim(), self.attribution));
    }

    #[inline]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The commands as they were typed, ready to be written one per line.
    pub fn plain_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| strip_attribution(entry).into_owned())
            .collect()
    }
}

pub fn strip_attribution(entry: &str) -> Cow<'_, str> {
    ATTRIBUTION_SUFFIX.replace(entry, "")
}
