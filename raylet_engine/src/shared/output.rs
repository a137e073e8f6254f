//! Writing colours out as text, one pixel per line, in the body format of a plain-text (`P3`) PPM image.
//!
//! ```text
//! <r> <g> <b>\n
//! ```
//!
//! Only the per-pixel lines are written here, any image header is up to the caller.

use crate::core::targets::OUTPUT;
use crate::core::types::{Channel, Colour};
use std::io::{self, Write};
use thiserror::Error;
use tracing::trace;

/// Scale from a `0..=1` channel to a `0..=255` byte.
///
/// Slightly under `256` so that `1.0` still lands on `255`, while the rest of the range is split evenly.
pub const BYTE_SCALE: Channel = 255.999;

#[derive(Error, Debug)]
pub enum ColourWriteError {
    /// A channel was outside of `0..=1` (or `NaN`), and would not have fit in a byte
    #[error("colour channel {channel} was out of range (value {value}, expected 0..=1)")]
    ChannelOutOfRange { channel: usize, value: Channel },
    #[error("failed to write colour to output")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Converts each channel to its byte value, `(255.999 * c)` truncated towards zero.
///
/// Truncation, not `floor`: the two agree for non-negative channels, but `-0.5` gives `-127` rather than `-128`.
/// `NaN` saturates to `0`.
///
/// Nothing is clamped: channels above `1` give values above `255`, and negative channels give negative values.
pub fn colour_to_bytes(colour: Colour) -> [i64; 3] { colour.0.map(|c| (BYTE_SCALE * c) as i64) }

/// Writes the colour as a single `"r g b\n"` line.
///
/// Channels are expected to be in `0..=1` but are not checked (see [colour_to_bytes]).
/// Use [write_colour_checked] to reject out-of-range colours instead.
pub fn write_colour(out: &mut impl Write, colour: Colour) -> io::Result<()> {
    let [r, g, b] = colour_to_bytes(colour);
    writeln!(out, "{r} {g} {b}")
}

/// Same as [write_colour], but fails if any channel is outside `0..=1`, before anything is written.
pub fn write_colour_checked(out: &mut impl Write, colour: Colour) -> Result<(), ColourWriteError> {
    if let Some((channel, &value)) = colour
        .0
        .iter()
        .enumerate()
        .find(|(_, c)| !(0.0..=1.0).contains(*c))
    {
        trace!(target: OUTPUT, ?colour, channel, value, "rejected colour with out-of-range channel");
        return Err(ColourWriteError::ChannelOutOfRange { channel, value });
    }

    write_colour(out, colour)?;
    Ok(())
}
