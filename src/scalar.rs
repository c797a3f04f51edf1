//! Scalar encoders
//!
//! Every integer encoder picks the shortest representation of the value,
//! independent of the static width it was given. Non-negative signed values
//! go through the unsigned encoders, so `128i32` becomes `uint8` rather than
//! `int16` and a value produces the same bytes whatever its width.

use crate::encoder::Encoder;
use crate::error::{Result, Violation};
use crate::sink::Sink;
use crate::wire;

const FIXINT_MIN: i64 = wire::MIN_FIXINT as i64;
const FIXINT_MAX: i64 = wire::MAX_FIXINT as i64;

impl<S: Sink> Encoder<S> {
    /// Encode nil
    #[inline]
    pub fn encode_nil(&mut self) -> Result<()> {
        self.write(wire::NIL)
    }

    /// Encode a boolean
    #[inline]
    pub fn encode_bool(&mut self, b: bool) -> Result<()> {
        self.write(if b { wire::TRUE } else { wire::FALSE })
    }

    /// Encode a fixint
    ///
    /// # Panics
    ///
    /// Panics with [`Violation::ValueOutOfRange`] outside `-32..=127`, even
    /// when the encoder is in the error state. Use [`Encoder::encode_int`]
    /// for values of any size.
    pub fn encode_fixed_int(&mut self, i: isize) -> Result<()> {
        let i = i as i64;
        if !(FIXINT_MIN..=FIXINT_MAX).contains(&i) {
            panic!(
                "encode_fixed_int: {}: {}: {}..={}",
                i,
                Violation::ValueOutOfRange,
                FIXINT_MIN,
                FIXINT_MAX
            );
        }
        self.write(i as i8)
    }

    /// Encode a signed 8-bit integer as fixint or int8
    #[inline]
    pub fn encode_int8(&mut self, i: i8) -> Result<()> {
        if i < wire::MIN_FIXINT {
            self.write_marked(wire::INT8, i)
        } else {
            self.write(i)
        }
    }

    /// Encode a signed 16-bit integer in its shortest form
    pub fn encode_int16(&mut self, i: i16) -> Result<()> {
        if i >= 0 {
            self.encode_uint16(i as u16)
        } else if i < i8::MIN as i16 {
            self.write_marked(wire::INT16, i)
        } else {
            self.encode_int8(i as i8)
        }
    }

    /// Encode a signed 32-bit integer in its shortest form
    pub fn encode_int32(&mut self, i: i32) -> Result<()> {
        if i >= 0 {
            self.encode_uint32(i as u32)
        } else if i < i16::MIN as i32 {
            self.write_marked(wire::INT32, i)
        } else {
            self.encode_int16(i as i16)
        }
    }

    /// Encode a signed 64-bit integer in its shortest form
    pub fn encode_int64(&mut self, i: i64) -> Result<()> {
        if i >= 0 {
            self.encode_uint64(i as u64)
        } else if i < i32::MIN as i64 {
            self.write_marked(wire::INT64, i)
        } else {
            self.encode_int32(i as i32)
        }
    }

    /// Encode a platform-width signed integer in its shortest form
    #[inline]
    pub fn encode_int(&mut self, i: isize) -> Result<()> {
        self.encode_int64(i as i64)
    }

    /// Encode an unsigned 8-bit integer as fixint or uint8
    #[inline]
    pub fn encode_uint8(&mut self, i: u8) -> Result<()> {
        if i <= FIXINT_MAX as u8 {
            self.write(i)
        } else {
            self.write_marked(wire::UINT8, i)
        }
    }

    /// Encode an unsigned 16-bit integer as fixint, uint8 or uint16
    #[inline]
    pub fn encode_uint16(&mut self, i: u16) -> Result<()> {
        match u8::try_from(i) {
            Ok(i) => self.encode_uint8(i),
            Err(_) => self.write_marked(wire::UINT16, i),
        }
    }

    /// Encode an unsigned 32-bit integer in its shortest form
    #[inline]
    pub fn encode_uint32(&mut self, i: u32) -> Result<()> {
        match u16::try_from(i) {
            Ok(i) => self.encode_uint16(i),
            Err(_) => self.write_marked(wire::UINT32, i),
        }
    }

    /// Encode an unsigned 64-bit integer in its shortest form
    #[inline]
    pub fn encode_uint64(&mut self, i: u64) -> Result<()> {
        match u32::try_from(i) {
            Ok(i) => self.encode_uint32(i),
            Err(_) => self.write_marked(wire::UINT64, i),
        }
    }

    /// Encode a platform-width unsigned integer in its shortest form
    #[inline]
    pub fn encode_uint(&mut self, i: usize) -> Result<()> {
        self.encode_uint64(i as u64)
    }

    /// Encode a 32-bit float (always full width)
    #[inline]
    pub fn encode_float32(&mut self, f: f32) -> Result<()> {
        self.write_marked(wire::FLOAT32, f)
    }

    /// Encode a 64-bit float (always full width)
    #[inline]
    pub fn encode_float64(&mut self, f: f64) -> Result<()> {
        self.write_marked(wire::FLOAT64, f)
    }

    /// Encode a byte slice as binary data
    ///
    /// To encode a missing byte string as nil, encode an `Option` through
    /// [`Encoder::encode`].
    pub fn encode_bin(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_bin_header(bytes.len())?;
        self.write(bytes)
    }

    /// Encode a UTF-8 string
    pub fn encode_str(&mut self, s: &str) -> Result<()> {
        self.write_string_header(s.len())?;
        self.write(s.as_bytes())
    }
}
