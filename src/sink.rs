//! Output sinks
//!
//! A [`Sink`] is the only capability the encoder needs from its output:
//! accept a run of bytes or report a failure. The in-memory sinks are
//! all-or-nothing per `write_bytes` call; [`IoSink`] may leave part of a
//! run in the writer before it fails.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// Destination for encoded bytes
pub trait Sink {
    /// Write all of `bytes`, or report a failure
    ///
    /// Whether a failed call leaves a prefix of `bytes` behind depends on
    /// the sink. Either way the encoder treats the failure as its sticky
    /// error and writes nothing more.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Write a single byte
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bytes(&[byte])
    }
}

impl Sink for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_bytes(bytes)
    }

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        (**self).write_byte(byte)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_bytes(bytes)
    }
}

/// Sink that writes into a caller-provided buffer
///
/// A write that does not fit fails with [`Error::ShortBuffer`] and leaves
/// the buffer untouched.
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    /// Create new sink over the given buffer
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Get current position in buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get remaining buffer capacity
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Get a slice of the bytes written so far
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Reset for reuse with the same buffer
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
    }
}

impl Sink for SliceSink<'_> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > self.remaining() {
            return Err(Error::ShortBuffer);
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}

/// Sink that accepts and drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl Sink for Discard {
    #[inline]
    fn write_bytes(&mut self, _bytes: &[u8]) -> Result<()> {
        Ok(())
    }
}

/// Adapter exposing any [`std::io::Write`] as a sink
///
/// Writes go through `write_all`, which may hand part of a run to the
/// writer before failing. Those bytes stay in the writer; the error is
/// returned and becomes the encoder's sticky error.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W>(W);

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self(writer)
    }

    /// Borrow the wrapped writer
    pub fn get_ref(&self) -> &W {
        &self.0
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.0
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.0.write_all(bytes).map_err(Error::from)
    }
}
