// uturtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The turtle command language: one command per line, a keyword followed by
//! whitespace-separated arguments.

#[macro_use]
extern crate lalrpop_util;

pub mod ast;
pub mod error;
pub mod parse;

lalrpop_mod!(grammar); // synthesized by LALRPOP

pub use crate::ast::Command;
pub use crate::error::{ArgumentError, LangError};
pub use crate::parse::parse_line;

#[test]
fn turtle_command_parser() {
    assert!(parse_line("about").is_ok());
    assert!(parse_line("penup").is_ok());
    assert!(parse_line("pendown").is_ok());
    assert!(parse_line("left 90").is_ok());
    assert!(parse_line("right 12").is_ok());
    assert!(parse_line("move 100").is_ok());
    assert!(parse_line("reverse 5").is_ok());
    assert!(parse_line("red").is_ok());
    assert!(parse_line("pencolour 255,128,128").is_ok());
    assert!(parse_line("square 30").is_ok());
    assert!(parse_line("triangle 30").is_ok());
    assert!(parse_line("circle 15").is_ok());
    assert!(parse_line("rectangle 40 20").is_ok());
    assert!(parse_line("record").is_ok());
    assert!(parse_line("stoprecord").is_ok());
    assert!(parse_line("play").is_ok());
    assert!(parse_line("speed 250").is_ok());
    assert!(parse_line("addobstacle 50 50").is_ok());
    assert!(parse_line("collision").is_ok());
    assert!(parse_line("nocollision").is_ok());
    assert!(parse_line("signature").is_ok());

    assert!(parse_line("bleh").is_err());
    assert!(parse_line("left").is_err());
    assert!(parse_line("move 22.5").is_err());
    assert!(parse_line("pencolour 255,128").is_err());
    assert!(parse_line("pencolour 255, 128, 128").is_err());
    assert!(parse_line("rectangle 40 -20").is_err());
}

#[test]
fn turtle_keyword_round_trip() {
    for line in &["clear", "reset", "save", "load", "exit", "black", "green", "white"] {
        let command = parse_line(line).unwrap();
        assert_eq!(command.keyword(), *line);
    }
    assert!(parse_line("load").unwrap().is_session_control());
    assert!(!parse_line("move 3").unwrap().is_session_control());
}
