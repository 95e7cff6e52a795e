// turtle/src/persist.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Saving and loading drawings and command scripts, and the questions the
//! session asks the user along the way.

use crate::error::Result;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

bitflags! {
    /// What a `save` writes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SaveTargets: u8 {
        const IMAGE   = 0x01;
        const HISTORY = 0x02;
    }
}

impl Display for SaveTargets {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        if self.is_empty() {
            return formatter.write_str("nothing");
        }

        let mut first = true;
        for (bit, name) in NAMES.iter().enumerate() {
            if (self.bits() >> bit) & 1 == 0 {
                continue;
            }
            if !first {
                formatter.write_str(" and ")?;
            } else {
                first = false;
            }
            formatter.write_str(name)?;
        }

        return Ok(());

        // Must match the order in `SaveTargets`.
        static NAMES: &'static [&'static str] = &["image", "commands"];
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    Image,
    Commands,
}

/// Answer to "there are unsaved changes".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnsavedChoice {
    Save,
    Discard,
    Cancel,
}

/// The user-facing side of persistence. Every question may be declined by
/// returning `None`, which cancels the command that asked it.
pub trait Prompt: Send {
    fn save_targets(&mut self) -> Option<SaveTargets>;
    fn image_save_path(&mut self) -> Option<PathBuf>;
    fn history_save_path(&mut self) -> Option<PathBuf>;
    fn load_kind(&mut self) -> Option<LoadKind>;
    fn image_load_path(&mut self) -> Option<PathBuf>;
    fn history_load_path(&mut self) -> Option<PathBuf>;
    fn unsaved_changes(&mut self) -> UnsavedChoice;
}

/// Declines every save and load and lets unsaved work go.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPrompt;

impl Prompt for NoPrompt {
    fn save_targets(&mut self) -> Option<SaveTargets> {
        None
    }

    fn image_save_path(&mut self) -> Option<PathBuf> {
        None
    }

    fn history_save_path(&mut self) -> Option<PathBuf> {
        None
    }

    fn load_kind(&mut self) -> Option<LoadKind> {
        None
    }

    fn image_load_path(&mut self) -> Option<PathBuf> {
        None
    }

    fn history_load_path(&mut self) -> Option<PathBuf> {
        None
    }

    fn unsaved_changes(&mut self) -> UnsavedChoice {
        UnsavedChoice::Discard
    }
}

/// JPEG for `.jpg` and `.jpeg`, PNG for anything else.
pub fn image_format_for(path: &Path) -> ImageFormat {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase());
    match extension.as_ref().map(String::as_str) {
        Some("jpg") | Some("jpeg") => ImageFormat::Jpeg,
        _ => ImageFormat::Png,
    }
}

pub fn write_image(path: &Path, image: &RgbaImage) -> Result<()> {
    let format = image_format_for(path);
    match format {
        // JPEG has no alpha channel.
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, format)?,
        _ => image.save_with_format(path, format)?,
    }
    info!(path = %path.display(), ?format, "image saved");
    Ok(())
}

pub fn read_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)?.to_rgba8();
    info!(path = %path.display(), width = image.width(), height = image.height(), "image loaded");
    Ok(image)
}

pub fn write_history<S>(path: &Path, lines: &[S]) -> Result<()>
where
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()?;
    info!(path = %path.display(), lines = lines.len(), "commands saved");
    Ok(())
}

/// Every non-blank line of a command file, trimmed.
pub fn read_history(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    info!(path = %path.display(), lines = lines.len(), "commands loaded");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, TurtleError};
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn targets_read_like_a_sentence() {
        assert_eq!(SaveTargets::IMAGE.to_string(), "image");
        assert_eq!(SaveTargets::all().to_string(), "image and commands");
        assert_eq!(SaveTargets::empty().to_string(), "nothing");
    }

    #[test]
    fn format_follows_the_extension() {
        assert_eq!(image_format_for(Path::new("a.JPG")), ImageFormat::Jpeg);
        assert_eq!(image_format_for(Path::new("a.jpeg")), ImageFormat::Jpeg);
        assert_eq!(image_format_for(Path::new("a.png")), ImageFormat::Png);
        assert_eq!(image_format_for(Path::new("drawing")), ImageFormat::Png);
    }

    #[test]
    fn history_round_trips_through_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("commands.txt");
        write_history(&path, &["move 10", "left 90", "square 20"]).unwrap();

        std::fs::write(&path, std::fs::read_to_string(&path).unwrap() + "\n   \n").unwrap();
        assert_eq!(read_history(&path).unwrap(), vec!["move 10", "left 90", "square 20"]);
    }

    #[test]
    fn png_keeps_every_pixel() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("drawing.png");
        let mut image = RgbaImage::from_pixel(4, 3, Rgba([255, 255, 255, 255]));
        image.put_pixel(1, 2, Rgba([10, 20, 30, 255]));

        write_image(&path, &image).unwrap();
        assert_eq!(read_image(&path).unwrap(), image);
    }

    #[test]
    fn jpeg_is_written_without_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("drawing.jpg");
        let image = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));

        write_image(&path, &image).unwrap();
        let loaded = read_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (8, 8));
    }

    #[test]
    fn missing_files_are_io_failures() {
        let dir = tempdir().unwrap();
        let err: TurtleError = read_history(&dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        let err = read_image(&dir.path().join("absent.png")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
