//! JSON rendering of detection results for the output channel.
//!
//! Separators follow the `", "` / `": "` style, e.g. `[[1, 3], [4, 5]]`
//! and `{"error": "..."}`.
use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::detection::domain::segment::Segment;

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: &'a str,
}

/// Segment list as `[[start, end], ...]`.
pub fn segments_json(segments: &[Segment]) -> Result<String, serde_json::Error> {
    to_spaced_json(&segments)
}

/// Structured failure object `{"error": message}`.
pub fn error_json(message: &str) -> Result<String, serde_json::Error> {
    to_spaced_json(&ErrorReport { error: message })
}

/// A single speech probability.
pub fn probability_json(probability: f32) -> Result<String, serde_json::Error> {
    to_spaced_json(&probability)
}

fn to_spaced_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Single-line formatter with a space after each `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}
