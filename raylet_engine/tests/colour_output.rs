use raylet_engine::core::types::*;
use raylet_engine::shared::output::{self, ColourWriteError, BYTE_SCALE};
use std::io::{self, Write};

/// Runs the writer into a fresh buffer, and returns what got written
fn written(colour: Colour) -> String {
    let mut buf = Vec::new();
    output::write_colour(&mut buf, colour).expect("writing to a vec can't fail");
    String::from_utf8(buf).expect("output should be utf8")
}

#[test]
pub fn writes_black_white_and_grey() {
    assert_eq!(written(Colour::BLACK), "0 0 0\n");
    assert_eq!(written(Colour::WHITE), "255 255 255\n");
    assert_eq!(written(Colour::new([0.5, 0.5, 0.5])), "127 127 127\n");
}

#[test]
pub fn channels_are_independent() {
    assert_eq!(written(Colour::new([1., 0., 0.5])), "255 0 127\n");
    assert_eq!(written(Colour::new([0.25, 0.75, 0.1])), "63 191 25\n");
}

#[test]
pub fn scale_keeps_one_inside_a_byte() {
    assert_eq!(output::colour_to_bytes(Colour::WHITE), [255; 3]);
    assert!(BYTE_SCALE < 256.);
    // Just under one still rounds down into the top bucket
    assert_eq!(output::colour_to_bytes(Colour::new([0.999, 0.996, 0.0039])), [255, 254, 0]);
}

#[test]
pub fn out_of_range_channels_are_not_clamped() {
    assert_eq!(written(Colour::new([2., 1.5, 0.])), "511 383 0\n");
    // Truncated towards zero
    assert_eq!(written(Colour::new([-0.5, -1., 0.])), "-127 -255 0\n");
}

#[test]
pub fn lines_are_appended() {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"P3\n2 1\n255\n");
    output::write_colour(&mut buf, Colour::BLACK).unwrap();
    output::write_colour(&mut buf, Colour::WHITE).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "P3\n2 1\n255\n0 0 0\n255 255 255\n");
}

#[test]
pub fn checked_writer_accepts_valid_colours() {
    let mut buf = Vec::new();
    output::write_colour_checked(&mut buf, Colour::new([0., 0.5, 1.])).unwrap();
    assert_eq!(buf, b"0 127 255\n");
}

#[test]
pub fn checked_writer_rejects_before_writing() {
    let mut buf = Vec::new();
    let err = output::write_colour_checked(&mut buf, Colour::new([0.5, 1.25, -1.])).unwrap_err();
    assert!(
        matches!(err, ColourWriteError::ChannelOutOfRange { channel: 1, value } if value == 1.25),
        "{err:?}"
    );
    assert!(buf.is_empty());

    let err = output::write_colour_checked(&mut buf, Colour::new([0.5, 0.5, Channel::NAN])).unwrap_err();
    assert!(matches!(err, ColourWriteError::ChannelOutOfRange { channel: 2, .. }), "{err:?}");
    assert!(buf.is_empty());
}

/// A sink that refuses every write
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> { Err(io::Error::from(io::ErrorKind::BrokenPipe)) }
    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

#[test]
pub fn io_errors_are_passed_through() {
    let err = output::write_colour(&mut BrokenPipe, Colour::WHITE).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

    let err = output::write_colour_checked(&mut BrokenPipe, Colour::WHITE).unwrap_err();
    assert!(
        matches!(&err, ColourWriteError::Io { source } if source.kind() == io::ErrorKind::BrokenPipe),
        "{err:?}"
    );
}
