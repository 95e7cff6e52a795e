// uturtle/src/ast.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// A validated command. Positive arguments are guaranteed to be greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    About,
    PenUp,
    PenDown,
    Reset,
    Clear,
    Save,
    Load,
    Exit,
    Left(u32),
    Right(u32),
    Move(i32),
    Reverse(i32),
    Black,
    Red,
    Green,
    White,
    PenColour(u8, u8, u8), // RGB color.
    Square(i32),
    Triangle(i32),
    Circle(i32),
    Rectangle(i32, i32),
    Record,
    StopRecord,
    Play,
    Speed(u32),
    AddObstacle(i32, i32),
    Collision,
    NoCollision,
    Signature,
}

impl Command {
    /// The lowercase keyword this command is spelled with.
    pub fn keyword(&self) -> &'static str {
        match *self {
            Command::About => "about",
            Command::PenUp => "penup",
            Command::PenDown => "pendown",
            Command::Reset => "reset",
            Command::Clear => "clear",
            Command::Save => "save",
            Command::Load => "load",
            Command::Exit => "exit",
            Command::Left(_) => "left",
            Command::Right(_) => "right",
            Command::Move(_) => "move",
            Command::Reverse(_) => "reverse",
            Command::Black => "black",
            Command::Red => "red",
            Command::Green => "green",
            Command::White => "white",
            Command::PenColour(..) => "pencolour",
            Command::Square(_) => "square",
            Command::Triangle(_) => "triangle",
            Command::Circle(_) => "circle",
            Command::Rectangle(..) => "rectangle",
            Command::Record => "record",
            Command::StopRecord => "stoprecord",
            Command::Play => "play",
            Command::Speed(_) => "speed",
            Command::AddObstacle(..) => "addobstacle",
            Command::Collision => "collision",
            Command::NoCollision => "nocollision",
            Command::Signature => "signature",
        }
    }

    /// Commands that talk to the persistence or lifecycle collaborators rather
    /// than the turtle. These are never written to the command history.
    pub fn is_session_control(&self) -> bool {
        match *self {
            Command::Save | Command::Load | Command::Exit => true,
            _ => false,
        }
    }
}

/// A tokenized line: the keyword and whatever followed it.
#[derive(Debug, PartialEq, Eq)]
pub struct Words<'a> {
    pub head: &'a str,
    pub tail: Vec<&'a str>,
}
