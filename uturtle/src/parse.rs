// uturtle/src/parse.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turns one line of text into a validated [`Command`].

use crate::ast::{Command, Words};
use crate::error::{ArgumentError, LangError};
use crate::grammar::LineParser;
use std::convert::TryFrom;

/// Parses and validates a single command line.
///
/// The keyword is matched case-insensitively. Arguments past the ones a
/// command needs are ignored.
pub fn parse_line(line: &str) -> Result<Command, LangError> {
    parse_words(&tokenize(line)?)
}

/// Splits a line into its keyword and arguments without validating either.
pub fn tokenize(line: &str) -> Result<Words<'_>, LangError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(LangError::Empty);
    }
    LineParser::new()
        .parse(line)
        .map_err(|err| LangError::Syntax(err.to_string()))
}

pub fn parse_words(words: &Words<'_>) -> Result<Command, LangError> {
    let args = Args(&words.tail);
    let keyword = words.head.to_lowercase();

    let command = match keyword.as_str() {
        "about" => Command::About,
        "penup" => Command::PenUp,
        "pendown" => Command::PenDown,
        "reset" => Command::Reset,
        "clear" => Command::Clear,
        "save" => Command::Save,
        "load" => Command::Load,
        "exit" => Command::Exit,

        "left" => Command::Left(args.degrees(0)?),
        "right" => Command::Right(args.degrees(0)?),
        "move" => Command::Move(args.positive(0, "distance")?),
        "reverse" => Command::Reverse(args.positive(0, "distance")?),

        "black" => Command::Black,
        "red" => Command::Red,
        "green" => Command::Green,
        "white" => Command::White,
        "pencolour" => {
            let (r, g, b) = args.rgb(0)?;
            Command::PenColour(r, g, b)
        }

        "square" => Command::Square(args.positive(0, "size")?),
        "triangle" => Command::Triangle(args.positive(0, "size")?),
        "circle" => Command::Circle(args.positive(0, "radius")?),
        "rectangle" => {
            let width = args.positive(0, "width")?;
            let height = args.positive(1, "height")?;
            Command::Rectangle(width, height)
        }

        "record" => Command::Record,
        "stoprecord" => Command::StopRecord,
        "play" => Command::Play,
        "speed" => Command::Speed(args.positive(0, "speed")? as u32),

        "addobstacle" => {
            let x = args.positive(0, "x")?;
            let y = args.positive(1, "y")?;
            Command::AddObstacle(x, y)
        }
        "collision" => Command::Collision,
        "nocollision" => Command::NoCollision,

        "signature" | "rohan" => Command::Signature,

        _ => return Err(LangError::Unknown(keyword)),
    };

    Ok(command)
}

struct Args<'a, 'b>(&'a [&'b str]);

impl<'a, 'b> Args<'a, 'b> {
    fn get(&self, index: usize, param: &'static str) -> Result<&'b str, ArgumentError> {
        self.0
            .get(index)
            .copied()
            .ok_or(ArgumentError::Missing { param })
    }

    fn positive(&self, index: usize, param: &'static str) -> Result<i32, ArgumentError> {
        positive(self.get(index, param)?, param)
    }

    fn degrees(&self, index: usize) -> Result<u32, ArgumentError> {
        // Positive, so the cast is lossless.
        Ok(self.positive(index, "degrees")? as u32)
    }

    fn rgb(&self, index: usize) -> Result<(u8, u8, u8), ArgumentError> {
        let raw = self.get(index, "RGB")?;
        let parts: Vec<&str> = raw.split(',').collect();
        if parts.len() != 3 {
            return Err(ArgumentError::ChannelCount { found: parts.len() });
        }
        Ok((
            channel(parts[0], "red")?,
            channel(parts[1], "green")?,
            channel(parts[2], "blue")?,
        ))
    }
}

fn integer(raw: &str, param: &'static str) -> Result<i32, ArgumentError> {
    raw.parse::<i32>().map_err(|_| ArgumentError::NotANumber {
        param,
        value: raw.to_owned(),
    })
}

fn positive(raw: &str, param: &'static str) -> Result<i32, ArgumentError> {
    let value = integer(raw, param)?;
    if value > 0 {
        Ok(value)
    } else {
        Err(ArgumentError::NotPositive { param, value })
    }
}

fn channel(raw: &str, param: &'static str) -> Result<u8, ArgumentError> {
    let value = integer(raw, param)?;
    u8::try_from(value).map_err(|_| ArgumentError::OutOfRange {
        param,
        value,
        min: 0,
        max: 255,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn argument_error(line: &str) -> ArgumentError {
        match parse_line(line) {
            Err(LangError::Argument(err)) => err,
            other => panic!("expected an argument error for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_line("PenUp"), Ok(Command::PenUp));
        assert_eq!(parse_line("  MOVE   20  "), Ok(Command::Move(20)));
        assert_eq!(parse_line("Rohan"), Ok(Command::Signature));
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse_line(""), Err(LangError::Empty));
        assert_eq!(parse_line(" \t  "), Err(LangError::Empty));
    }

    #[test]
    fn unknown_keyword_is_reported_lowercased() {
        assert_eq!(
            parse_line("FooBar 1 2"),
            Err(LangError::Unknown("foobar".to_owned()))
        );
    }

    #[test]
    fn missing_arguments_name_the_parameter() {
        assert_eq!(argument_error("left").param(), Some("degrees"));
        assert_eq!(argument_error("move").param(), Some("distance"));
        assert_eq!(argument_error("circle").param(), Some("radius"));
        assert_eq!(argument_error("rectangle 10").param(), Some("height"));
        assert_eq!(argument_error("addobstacle 5").param(), Some("y"));
        assert_eq!(argument_error("pencolour").param(), Some("RGB"));
    }

    #[test]
    fn non_positive_values_are_rejected() {
        assert_eq!(
            argument_error("square 0"),
            ArgumentError::NotPositive {
                param: "size",
                value: 0
            }
        );
        assert_eq!(argument_error("speed -5").param(), Some("speed"));
        assert_eq!(
            argument_error("move ten"),
            ArgumentError::NotANumber {
                param: "distance",
                value: "ten".to_owned()
            }
        );
    }

    #[test]
    fn pencolour_takes_one_comma_joined_token() {
        assert_eq!(parse_line("pencolour 10,20,30"), Ok(Command::PenColour(10, 20, 30)));
        assert_eq!(parse_line("pencolour 0,0,255"), Ok(Command::PenColour(0, 0, 255)));
        assert_eq!(
            argument_error("pencolour 300,0,0"),
            ArgumentError::OutOfRange {
                param: "red",
                value: 300,
                min: 0,
                max: 255
            }
        );
        assert_eq!(
            argument_error("pencolour 1,2"),
            ArgumentError::ChannelCount { found: 2 }
        );
        assert_eq!(argument_error("pencolour 1,-2,3").param(), Some("green"));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        assert_eq!(parse_line("penup now"), Ok(Command::PenUp));
        assert_eq!(parse_line("right 90 45"), Ok(Command::Right(90)));
    }

    #[test]
    fn tokenize_splits_on_whitespace_runs() {
        let words = tokenize("  rectangle\t40    20 ").unwrap();
        assert_eq!(words.head, "rectangle");
        assert_eq!(words.tail, vec!["40", "20"]);
    }

    proptest! {
        #[test]
        fn any_positive_distance_is_accepted(distance in 1..=i32::MAX) {
            prop_assert_eq!(parse_line(&format!("reverse {}", distance)), Ok(Command::Reverse(distance)));
        }

        #[test]
        fn any_channel_triple_round_trips(r: u8, g: u8, b: u8) {
            let line = format!("pencolour {},{},{}", r, g, b);
            prop_assert_eq!(parse_line(&line), Ok(Command::PenColour(r, g, b)));
        }
    }
}
