//! Fixed-width big-endian primitives
//!
//! [`Primitive`] is the closed set of raw values the encoder can put on the
//! wire without a type marker. The trait is sealed: any other type is a
//! compile error rather than a silent miswrite.

use crate::error::Result;
use crate::sink::Sink;

mod sealed {
    pub trait Sealed {}
}

/// Raw value written in big-endian order with no MessagePack marker
pub trait Primitive: sealed::Sealed + Copy {
    /// Write the full byte representation in a single sink call
    fn write_to<S: Sink + ?Sized>(self, sink: &mut S) -> Result<()>;
}

macro_rules! impl_primitive {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                #[inline]
                fn write_to<S: Sink + ?Sized>(self, sink: &mut S) -> Result<()> {
                    sink.write_bytes(&self.to_be_bytes())
                }
            }
        )*
    };
}

impl_primitive!(i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl sealed::Sealed for u8 {}

impl Primitive for u8 {
    #[inline]
    fn write_to<S: Sink + ?Sized>(self, sink: &mut S) -> Result<()> {
        sink.write_byte(self)
    }
}

impl sealed::Sealed for &[u8] {}

impl Primitive for &[u8] {
    #[inline]
    fn write_to<S: Sink + ?Sized>(self, sink: &mut S) -> Result<()> {
        sink.write_bytes(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn bytes_of<P: Primitive>(value: P) -> Vec<u8> {
        let mut out = Vec::new();
        value.write_to(&mut out).unwrap();
        out
    }

    #[test]
    fn test_integers_are_big_endian() {
        assert_eq!(bytes_of(0xabu8), [0xab]);
        assert_eq!(bytes_of(-1i8), [0xff]);
        assert_eq!(bytes_of(0x0102u16), [0x01, 0x02]);
        assert_eq!(bytes_of(-129i16), [0xff, 0x7f]);
        assert_eq!(bytes_of(0x01020304u32), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(bytes_of(-32769i32), [0xff, 0xff, 0x7f, 0xff]);
        assert_eq!(
            bytes_of(0x0102030405060708u64),
            [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );
        assert_eq!(
            bytes_of(i64::MIN),
            [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_floats_are_ieee754_big_endian() {
        assert_eq!(bytes_of(core::f32::consts::PI), [0x40, 0x49, 0x0f, 0xdb]);
        assert_eq!(
            bytes_of(core::f64::consts::PI),
            [0x40, 0x09, 0x21, 0xfb, 0x54, 0x44, 0x2d, 0x18]
        );
        assert_eq!(bytes_of(-1.5f64), [0xbf, 0xf8, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_raw_bytes_pass_through() {
        assert_eq!(bytes_of(&b"raw"[..]), b"raw");
        assert!(bytes_of(&[0u8; 0][..]).is_empty());
    }
}
