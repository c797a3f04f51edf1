//! Streaming encoder session with sticky error state
//!
//! An [`Encoder`] writes MessagePack values to its current [`Sink`]. The
//! first sink failure is retained as the sticky error: every later write
//! is skipped and returns that same error until [`Encoder::reset_error`]
//! is called. Callers may check the result of each call, or encode a whole
//! sequence and check once at the end:
//!
//! ```rust
//! use mpstream::Encoder;
//!
//! let mut enc = Encoder::new(Vec::new());
//! let _ = enc.encode_int(1);
//! let _ = enc.encode_str("two");
//! let _ = enc.encode_bool(true);
//! enc.reset_error().map_or(Ok(()), Err)?;
//! assert_eq!(enc.sink(), &[0x01, 0xa3, b't', b'w', b'o', 0xc3]);
//! # Ok::<(), mpstream::Error>(())
//! ```
//!
//! A failed session may leave a compound value truncated relative to its
//! header; treat any error as "output may be malformed".

use core::mem;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::primitive::Primitive;
use crate::sink::Sink;

/// MessagePack encoder bound to a sink
///
/// Not safe for concurrent use: every operation takes `&mut self`.
#[derive(Debug)]
pub struct Encoder<S> {
    sink: S,
    error: Option<Error>,
}

impl<S: Sink> Encoder<S> {
    /// Create new encoder writing to the given sink
    #[inline]
    pub fn new(sink: S) -> Self {
        Self { sink, error: None }
    }

    /// Write a raw primitive in big-endian order, with no type marker
    ///
    /// This is the single point of contact with the sink. If the encoder
    /// already carries an error the sink is not touched and that error is
    /// returned. A sink failure becomes the sticky error.
    ///
    /// Intended for other encoder operations and hand-rolled streaming of
    /// already-headed content. To encode binary data use
    /// [`Encoder::encode_bin`].
    #[inline]
    pub fn write<P: Primitive>(&mut self, value: P) -> Result<()> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if let Err(err) = value.write_to(&mut self.sink) {
            debug!(error = ?err, "sink write failed, encoder entering error state");
            self.error = Some(err);
            return Err(err);
        }
        Ok(())
    }

    /// Write a marker byte followed by its payload
    #[inline]
    pub(crate) fn write_marked<P: Primitive>(&mut self, marker: u8, value: P) -> Result<()> {
        self.write(marker)?;
        self.write(value)
    }

    /// Record `err` as the sticky error unless one is already held
    #[inline]
    pub(crate) fn capture(&mut self, err: Error) {
        if self.error.is_none() {
            debug!(error = ?err, "encoder entering error state");
            self.error = Some(err);
        }
    }

    /// Sticky error as a result
    #[inline]
    pub fn result(&self) -> Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Get the sticky error without clearing it
    #[inline]
    pub fn error(&self) -> Option<Error> {
        self.error
    }

    /// Whether the encoder is in the error state
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Take the sticky error, returning the encoder to the writing state
    ///
    /// This is the only way to resume after a failure. Bytes already
    /// accepted by the sink are not affected. Calling it on a healthy
    /// encoder returns `None` and changes nothing.
    #[inline]
    pub fn reset_error(&mut self) -> Option<Error> {
        let err = self.error.take();
        if let Some(err) = err {
            trace!(error = ?err, "sticky error cleared");
        }
        err
    }

    /// Borrow the current sink
    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the current sink
    ///
    /// Bytes written directly bypass the sticky error check.
    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the encoder, returning the sink
    #[inline]
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Replace the sink, returning the previous one
    ///
    /// The sticky error is left as it is.
    #[inline]
    pub fn set_sink(&mut self, sink: S) -> S {
        mem::replace(&mut self.sink, sink)
    }

    /// Run `f` against a temporary sink
    ///
    /// `f` receives an encoder bound to `dest` that starts with this
    /// encoder's sticky error. The original sink is never moved, so it is
    /// in place again however `f` exits, including by panic. An error
    /// returned by `f` (or left behind on the temporary encoder) becomes
    /// the sticky error of this encoder unless it already holds one.
    pub fn using<D, F>(&mut self, dest: D, f: F) -> Result<()>
    where
        D: Sink,
        F: FnOnce(&mut Encoder<D>) -> Result<()>,
    {
        trace!("encoder retargeted for scoped operation");
        let mut scoped = Encoder {
            sink: dest,
            error: self.error,
        };

        let outcome = f(&mut scoped);
        if let Err(err) = outcome {
            self.capture(err);
        }
        if let Some(err) = scoped.error {
            self.capture(err);
        }

        trace!(failed = self.is_failed(), "scoped operation finished");
        self.result()
    }
}
