//! Document encoding.
//!
//! Matches the layout of Python's `json.dumps` defaults: no newlines, a space
//! after every `,` and `:`. Key order comes from the map being serialized.

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// Compact JSON with `", "` and `": "` separators.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes `value` with [`SpacedFormatter`].
pub(crate) fn to_spaced_vec<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, SpacedFormatter);
    value.serialize(&mut serializer)?;
    Ok(bytes)
}
