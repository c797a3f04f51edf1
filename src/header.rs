//! Length-tiered headers for arrays, maps, strings and binary data
//!
//! Each header is written in the smallest tier that holds the length:
//!
//! ```text
//! array   0..=15 fixarray | ..=0xffff array16 | else array32
//! map     0..=15 fixmap   | ..=0xffff map16   | else map32
//! str     0..=31 fixstr   | ..=0xff str8 | ..=0xffff str16 | else str32
//! bin                       ..=0xff bin8 | ..=0xffff bin16 | else bin32
//! ```
//!
//! These are intended for streaming scenarios where the caller writes the
//! body itself; [`Encoder::encode_array`] and friends are usually the
//! better fit.

use crate::encoder::Encoder;
use crate::error::{Result, Violation};
use crate::sink::Sink;
use crate::wire;

/// Convert a length to the format's 32-bit length field
///
/// # Panics
///
/// Panics with [`Violation::LengthOverflow`] above `u32::MAX`.
#[inline]
pub(crate) fn wire_len(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(len) => len,
        Err(_) => panic!("{}: {} > {}", Violation::LengthOverflow, len, u32::MAX),
    }
}

impl<S: Sink> Encoder<S> {
    /// Write the marker and element count of an array
    pub fn write_array_header(&mut self, len: usize) -> Result<()> {
        match wire_len(len) {
            n @ 0..=15 => self.write(wire::FIXARRAY | n as u8),
            n @ 16..=0xffff => self.write_marked(wire::ARRAY16, n as u16),
            n => self.write_marked(wire::ARRAY32, n),
        }
    }

    /// Write the marker and entry count of a map
    pub fn write_map_header(&mut self, len: usize) -> Result<()> {
        match wire_len(len) {
            n @ 0..=15 => self.write(wire::FIXMAP | n as u8),
            n @ 16..=0xffff => self.write_marked(wire::MAP16, n as u16),
            n => self.write_marked(wire::MAP32, n),
        }
    }

    /// Write the marker and byte length of a string
    ///
    /// The length is in bytes, not characters.
    pub fn write_string_header(&mut self, len: usize) -> Result<()> {
        match wire_len(len) {
            n @ 0..=31 => self.write(wire::FIXSTR | n as u8),
            n @ 32..=0xff => self.write_marked(wire::STR8, n as u8),
            n @ 0x100..=0xffff => self.write_marked(wire::STR16, n as u16),
            n => self.write_marked(wire::STR32, n),
        }
    }

    /// Write the marker and byte length of binary data
    pub fn write_bin_header(&mut self, len: usize) -> Result<()> {
        match wire_len(len) {
            n @ 0..=0xff => self.write_marked(wire::BIN8, n as u8),
            n @ 0x100..=0xffff => self.write_marked(wire::BIN16, n as u16),
            n => self.write_marked(wire::BIN32, n),
        }
    }
}
