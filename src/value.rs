//! Dynamic dispatch over the supported value kinds
//!
//! [`Value`] is the closed set of kinds the encoder understands, and
//! [`Encode`] maps Rust types onto it. [`Encoder::encode`] is the generic
//! entry point; width-specific methods such as [`Encoder::encode_int16`]
//! skip the dispatch and produce identical bytes.
//!
//! For callers holding a `&dyn Any`, [`Encoder::encode_any`] inspects the
//! runtime type. A type outside the supported set is a caller bug and
//! panics with [`Violation::UnsupportedType`].

use core::any::Any;

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::encoder::Encoder;
use crate::error::{Result, Violation};
use crate::sink::Sink;

/// A value of one of the kinds the encoder supports
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// nil
    Nil,
    /// Boolean
    Bool(bool),
    /// Platform-width signed integer
    Int(isize),
    /// Signed 8-bit integer
    I8(i8),
    /// Signed 16-bit integer
    I16(i16),
    /// Signed 32-bit integer
    I32(i32),
    /// Signed 64-bit integer
    I64(i64),
    /// Platform-width unsigned integer
    Uint(usize),
    /// Unsigned 8-bit integer
    U8(u8),
    /// Unsigned 16-bit integer
    U16(u16),
    /// Unsigned 32-bit integer
    U32(u32),
    /// Unsigned 64-bit integer
    U64(u64),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
    /// UTF-8 string
    Str(&'a str),
    /// Binary data
    Bin(&'a [u8]),
    /// Sequence of platform-width signed integers
    IntArray(&'a [isize]),
    /// Array of values
    Array(&'a [Value<'a>]),
    /// Map of key/value pairs, in the given order
    Map(&'a [(Value<'a>, Value<'a>)]),
}

macro_rules! downcast_scalar {
    ($any:expr, $($ty:ty => $variant:ident),* $(,)?) => {
        $(
            if let Some(v) = $any.downcast_ref::<$ty>() {
                return Some(Value::$variant(*v));
            }
        )*
    };
}

impl<'a> Value<'a> {
    /// Classify a value by its runtime type
    ///
    /// Returns `None` when the type has no MessagePack mapping. Recognised
    /// are `()` (nil), `bool`, every integer and float width, `&str`,
    /// `String`, `Vec<u8>` (binary) and `Vec<isize>`.
    pub fn from_any(any: &'a dyn Any) -> Option<Value<'a>> {
        if any.is::<()>() {
            return Some(Value::Nil);
        }
        downcast_scalar!(any,
            bool => Bool,
            isize => Int, i8 => I8, i16 => I16, i32 => I32, i64 => I64,
            usize => Uint, u8 => U8, u16 => U16, u32 => U32, u64 => U64,
            f32 => F32, f64 => F64,
        );
        if let Some(s) = any.downcast_ref::<&'static str>() {
            return Some(Value::Str(*s));
        }
        if let Some(s) = any.downcast_ref::<String>() {
            return Some(Value::Str(s));
        }
        if let Some(b) = any.downcast_ref::<Vec<u8>>() {
            return Some(Value::Bin(b));
        }
        if let Some(ints) = any.downcast_ref::<Vec<isize>>() {
            return Some(Value::IntArray(ints));
        }
        None
    }
}

/// Types that can be written as a single MessagePack value
pub trait Encode {
    /// Write `self` to the encoder
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()>;
}

impl<S: Sink> Encoder<S> {
    /// Encode any supported value
    #[inline]
    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.encode(self)
    }

    /// Encode a [`Value`], dispatching on its kind
    pub fn encode_value(&mut self, value: &Value<'_>) -> Result<()> {
        match *value {
            Value::Nil => self.encode_nil(),
            Value::Bool(b) => self.encode_bool(b),
            Value::Int(i) => self.encode_int(i),
            Value::I8(i) => self.encode_int8(i),
            Value::I16(i) => self.encode_int16(i),
            Value::I32(i) => self.encode_int32(i),
            Value::I64(i) => self.encode_int64(i),
            Value::Uint(i) => self.encode_uint(i),
            Value::U8(i) => self.encode_uint8(i),
            Value::U16(i) => self.encode_uint16(i),
            Value::U32(i) => self.encode_uint32(i),
            Value::U64(i) => self.encode_uint64(i),
            Value::F32(f) => self.encode_float32(f),
            Value::F64(f) => self.encode_float64(f),
            Value::Str(s) => self.encode_str(s),
            Value::Bin(b) => self.encode_bin(b),
            Value::IntArray(ints) => self.encode_array_with(ints, |enc, i| enc.encode_int(*i)),
            Value::Array(items) => self.encode_array(items),
            Value::Map(entries) => {
                self.encode_map(entries.iter().map(|(k, v)| (k, v)))
            }
        }
    }

    /// Encode a value whose type is only known at runtime
    ///
    /// # Panics
    ///
    /// Panics with [`Violation::UnsupportedType`] when [`Value::from_any`]
    /// does not recognise the type, even when the encoder is in the error
    /// state.
    pub fn encode_any(&mut self, any: &dyn Any) -> Result<()> {
        match Value::from_any(any) {
            Some(value) => self.encode_value(&value),
            None => panic!("encode_any: {}: {:?}", Violation::UnsupportedType, (*any).type_id()),
        }
    }
}

/// Byte slice encoded as binary data rather than an array of integers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bin<'a>(pub &'a [u8]);

impl Encode for Value<'_> {
    #[inline]
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        enc.encode_value(self)
    }
}

impl Encode for Bin<'_> {
    #[inline]
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        enc.encode_bin(self.0)
    }
}

macro_rules! impl_encode {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
                    enc.$method(*self)
                }
            }
        )*
    };
}

impl_encode!(
    bool => encode_bool,
    isize => encode_int, i8 => encode_int8, i16 => encode_int16,
    i32 => encode_int32, i64 => encode_int64,
    usize => encode_uint, u8 => encode_uint8, u16 => encode_uint16,
    u32 => encode_uint32, u64 => encode_uint64,
    f32 => encode_float32, f64 => encode_float64,
);

impl Encode for () {
    #[inline]
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        enc.encode_nil()
    }
}

impl Encode for str {
    #[inline]
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        enc.encode_str(self)
    }
}

impl Encode for String {
    #[inline]
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        enc.encode_str(self)
    }
}

impl<T: Encode> Encode for Option<T> {
    #[inline]
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        match self {
            Some(v) => v.encode(enc),
            None => enc.encode_nil(),
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    #[inline]
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        (**self).encode(enc)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    #[inline]
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        (**self).encode(enc)
    }
}

impl<T: Encode> Encode for [T] {
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        enc.encode_array(self)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        enc.encode_array(self)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        enc.encode_array(self)
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        enc.encode_map(self)
    }
}

#[cfg(feature = "std")]
impl<K: Encode, V: Encode, H> Encode for std::collections::HashMap<K, V, H> {
    fn encode<S: Sink>(&self, enc: &mut Encoder<S>) -> Result<()> {
        enc.encode_map(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use alloc::string::ToString;
    use alloc::vec;

    fn encoded<T: Encode + ?Sized>(value: &T) -> Vec<u8> {
        let mut enc = Encoder::new(Vec::new());
        enc.encode(value).unwrap();
        enc.into_inner()
    }

    fn encoded_any(any: &dyn Any) -> Vec<u8> {
        let mut enc = Encoder::new(Vec::new());
        enc.encode_any(any).unwrap();
        enc.into_inner()
    }

    #[test]
    fn test_encode_scalars() {
        assert_eq!(encoded(&()), [0xc0]);
        assert_eq!(encoded(&true), [0xc3]);
        assert_eq!(encoded(&0isize), [0x00]);
        assert_eq!(encoded(&127i8), [0x7f]);
        assert_eq!(encoded(&32767i16), [0xcd, 0x7f, 0xff]);
        assert_eq!(encoded(&-32768i16), [0xd1, 0x80, 0x00]);
        assert_eq!(encoded(&255u8), [0xcc, 0xff]);
        assert_eq!(encoded(&65535u16), [0xcd, 0xff, 0xff]);
        assert_eq!(encoded(&-32isize), [0xe0]);
        assert_eq!(encoded(&1.0f32), [0xca, 0x3f, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_encode_strings_and_bin() {
        assert_eq!(encoded("ab"), [0xa2, b'a', b'b']);
        assert_eq!(encoded(&"ab".to_string()), [0xa2, b'a', b'b']);
        assert_eq!(encoded(&Bin(&[1, 2])), [0xc4, 0x02, 0x01, 0x02]);
    }

    #[test]
    fn test_encode_option_as_nil() {
        assert_eq!(encoded(&None::<Bin<'_>>), [0xc0]);
        assert_eq!(encoded(&Some(Bin(b"x"))), [0xc4, 0x01, b'x']);
        assert_eq!(encoded(&vec![Some(1u8), None]), [0x92, 0x01, 0xc0]);
    }

    #[test]
    fn test_encode_collections() {
        assert_eq!(encoded(&[1isize, 2]), [0x92, 0x01, 0x02]);
        assert_eq!(encoded(&Vec::<u8>::new()), [0x90]);
        assert_eq!(encoded(&vec![vec![1u8], vec![]]), [0x92, 0x91, 0x01, 0x90]);

        let mut map = BTreeMap::new();
        map.insert(1u8, "one");
        assert_eq!(encoded(&map), [0x81, 0x01, 0xa3, b'o', b'n', b'e']);
    }

    #[test]
    fn test_encode_value_tree() {
        let items = [Value::Int(1), Value::Str("x"), Value::Nil];
        let entries = [
            (Value::Str("a"), Value::Array(&items)),
            (Value::Str("b"), Value::F64(0.5)),
        ];
        assert_eq!(
            encoded(&Value::Map(&entries)),
            [
                0x82, 0xa1, b'a', 0x93, 0x01, 0xa1, b'x', 0xc0, 0xa1, b'b', 0xcb, 0x3f, 0xe0, 0, 0,
                0, 0, 0, 0
            ]
        );
    }

    #[test]
    fn test_value_matches_width_specific_encoders() {
        let mut direct = Encoder::new(Vec::new());
        direct.encode_int16(256).unwrap();
        direct.encode_uint32(70000).unwrap();

        let mut dynamic = Encoder::new(Vec::new());
        dynamic.encode_value(&Value::I16(256)).unwrap();
        dynamic.encode_value(&Value::U32(70000)).unwrap();

        assert_eq!(direct.into_inner(), dynamic.into_inner());
    }

    #[test]
    fn test_value_widths_encode_identically() {
        let same = |values: &[Value<'_>]| {
            let first = encoded(&values[0]);
            for v in &values[1..] {
                assert_eq!(encoded(v), first, "{v:?}");
            }
        };

        same(&[Value::I16(256), Value::I32(256), Value::I64(256), Value::Int(256), Value::U16(256)]);
        same(&[Value::I32(65536), Value::I64(65536), Value::U32(65536), Value::Uint(65536)]);
        same(&[Value::I8(-100), Value::I16(-100), Value::I32(-100), Value::I64(-100)]);
    }

    #[test]
    fn test_encode_any() {
        assert_eq!(encoded_any(&()), [0xc0]);
        assert_eq!(encoded_any(&false), [0xc2]);
        assert_eq!(encoded_any(&-33i32), [0xd0, 0xdf]);
        assert_eq!(encoded_any(&u64::MAX)[0], 0xcf);
        assert_eq!(encoded_any(&"hi"), [0xa2, b'h', b'i']);
        assert_eq!(encoded_any(&"hi".to_string()), [0xa2, b'h', b'i']);
        assert_eq!(encoded_any(&vec![1u8, 2]), [0xc4, 0x02, 0x01, 0x02]);
        assert_eq!(encoded_any(&vec![1isize, 2]), [0x92, 0x01, 0x02]);
    }

    #[test]
    #[should_panic(expected = "unsupported type")]
    fn test_encode_any_unsupported_type() {
        struct Opaque;
        let _ = Encoder::new(Vec::new()).encode_any(&Opaque);
    }

    #[test]
    #[should_panic(expected = "unsupported type")]
    fn test_encode_any_unsupported_type_in_error_state() {
        let mut enc = Encoder::new(Vec::new());
        enc.capture(Error::Custom("encoder error"));
        let _ = enc.encode_any(&vec!["not", "bytes"]);
    }

    #[test]
    fn test_dispatch_in_error_state() {
        let mut enc = Encoder::new(Vec::new());
        enc.capture(Error::Custom("encoder error"));

        assert_eq!(enc.encode(&1u8), Err(Error::Custom("encoder error")));
        assert_eq!(enc.encode_any(&1u8), Err(Error::Custom("encoder error")));
        assert!(enc.sink().is_empty());
    }
}
