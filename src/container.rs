//! Generic array and map encoders
//!
//! Both write the header for the full length first and then stream the
//! items through an item encoder. If an item encoder fails, the remaining
//! items are skipped and the error is returned. The header already written
//! then claims more items than the body holds; the output is not valid
//! MessagePack in that case.

use tracing::debug;

use crate::encoder::Encoder;
use crate::error::Result;
use crate::sink::Sink;
use crate::value::Encode;

impl<S: Sink> Encoder<S> {
    /// Encode a sequence as an array, each item through [`Encode`]
    pub fn encode_array<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: Encode,
    {
        self.encode_array_with(items, |enc, item| item.encode(enc))
    }

    /// Encode a sequence as an array, each item through `f`
    ///
    /// Nothing past the header is attempted when the header write fails.
    /// An error returned by `f` becomes the sticky error unless one is
    /// already held, and stops the iteration.
    pub fn encode_array_with<I, F>(&mut self, items: I, mut f: F) -> Result<()>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        F: FnMut(&mut Self, I::Item) -> Result<()>,
    {
        let items = items.into_iter();
        let len = items.len();
        self.write_array_header(len)?;

        let mut written = 0;
        for item in items {
            if self.is_failed() {
                break;
            }
            if let Err(err) = f(self, item) {
                self.capture(err);
            }
            written += 1;
        }

        if self.is_failed() {
            debug!(declared = len, attempted = written, "array body truncated");
        }
        self.result()
    }

    /// Encode key/value pairs as a map, keys and values through [`Encode`]
    ///
    /// Entries are written in iteration order, so a `HashMap` produces an
    /// unspecified order.
    pub fn encode_map<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: ExactSizeIterator,
        K: Encode,
        V: Encode,
    {
        self.encode_map_with(entries, |enc, key, value| {
            key.encode(enc)?;
            value.encode(enc)
        })
    }

    /// Encode key/value pairs as a map, each entry through `f`
    ///
    /// `f` is expected to write exactly one key and one value. Failure
    /// handling matches [`Encoder::encode_array_with`].
    pub fn encode_map_with<I, K, V, F>(&mut self, entries: I, mut f: F) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: ExactSizeIterator,
        F: FnMut(&mut Self, K, V) -> Result<()>,
    {
        let entries = entries.into_iter();
        let len = entries.len();
        self.write_map_header(len)?;

        let mut written = 0;
        for (key, value) in entries {
            if self.is_failed() {
                break;
            }
            if let Err(err) = f(self, key, value) {
                self.capture(err);
            }
            written += 1;
        }

        if self.is_failed() {
            debug!(declared = len, attempted = written, "map body truncated");
        }
        self.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sink::SliceSink;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    const ENCODER_ERROR: Error = Error::Custom("encoder error");

    #[test]
    fn test_empty_array() {
        let mut enc = Encoder::new(Vec::new());
        enc.encode_array(Vec::<i32>::new()).unwrap();
        assert_eq!(enc.sink(), &[0x90]);
    }

    #[test]
    fn test_array_of_ints() {
        let mut enc = Encoder::new(Vec::new());
        enc.encode_array(&[1i64, -1, 128]).unwrap();
        assert_eq!(enc.sink(), &[0x93, 0x01, 0xff, 0xcc, 0x80]);
    }

    #[test]
    fn test_array_header_tiers_with_items() {
        for n in [15usize, 16, 65535, 65536] {
            let mut enc = Encoder::new(Vec::new());
            enc.encode_array(vec![0u8; n]).unwrap();

            let out = enc.into_inner();
            let header = match n {
                0..=15 => 1,
                16..=65535 => 3,
                _ => 5,
            };
            assert_eq!(out.len() - header, n);
        }
    }

    #[test]
    fn test_array_with_custom_item_encoder() {
        let mut enc = Encoder::new(Vec::new());
        enc.encode_array_with(["a", "b"], |e, s| e.encode_bin(s.as_bytes()))
            .unwrap();
        assert_eq!(enc.sink(), &[0x92, 0xc4, 0x01, b'a', 0xc4, 0x01, b'b']);
    }

    #[test]
    fn test_array_in_error_state_writes_nothing() {
        let mut enc = Encoder::new(Vec::new());
        enc.capture(ENCODER_ERROR);

        let mut calls = 0;
        let result = enc.encode_array_with(&[1, 2, 3], |e, i| {
            calls += 1;
            e.encode_int32(*i)
        });

        assert_eq!(result, Err(ENCODER_ERROR));
        assert_eq!(calls, 0);
        assert!(enc.sink().is_empty());
    }

    #[test]
    fn test_array_item_failure_stops_iteration() {
        let mut enc = Encoder::new(Vec::new());

        let mut calls = 0;
        let result = enc.encode_array_with(&[1, 2, 3], |e, i| {
            calls += 1;
            e.encode_int32(*i)?;
            Err(ENCODER_ERROR)
        });

        assert_eq!(result, Err(ENCODER_ERROR));
        assert_eq!(calls, 1);
        assert_eq!(enc.sink(), &[0x93, 0x01]);
    }

    #[test]
    fn test_array_sink_failure_midway() {
        let mut buf = [0u8; 3];
        let mut enc = Encoder::new(SliceSink::new(&mut buf));

        // the uint16 marker fits, its payload does not
        let result = enc.encode_array(&[1u16, 300, 3]);
        assert_eq!(result, Err(Error::ShortBuffer));
        assert_eq!(enc.sink().as_slice(), &[0x93, 0x01, 0xcd]);
    }

    #[test]
    fn test_item_encoder_cannot_clear_sticky_error() {
        let mut buf = [0u8; 2];
        let mut enc = Encoder::new(SliceSink::new(&mut buf));

        // the callback swallows the write failure and reports success
        let result = enc.encode_array_with(&[1u32, 70000, 2], |e, i| {
            let _ = e.encode_uint32(*i);
            Ok(())
        });
        assert_eq!(result, Err(Error::ShortBuffer));
    }

    #[test]
    fn test_item_encoder_error_does_not_replace_sticky_error() {
        let mut buf = [0u8; 1];
        let mut enc = Encoder::new(SliceSink::new(&mut buf));

        let result = enc.encode_array_with(&[1u32], |e, i| {
            let _ = e.encode_uint32(*i);
            Err(ENCODER_ERROR)
        });
        assert_eq!(result, Err(Error::ShortBuffer));
    }

    #[test]
    fn test_empty_map() {
        let mut enc = Encoder::new(Vec::new());
        enc.encode_map(&BTreeMap::<String, i32>::new()).unwrap();
        assert_eq!(enc.sink(), &[0x80]);
    }

    #[test]
    fn test_map_default_entry_encoder() {
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        map.insert("b", -1);

        let mut enc = Encoder::new(Vec::new());
        enc.encode_map(&map).unwrap();
        assert_eq!(enc.sink(), &[0x82, 0xa1, b'a', 0x01, 0xa1, b'b', 0xff]);
    }

    #[test]
    fn test_map_entry_failure_leaves_partial_body() {
        let map: BTreeMap<i32, i32> = [(1, 1), (2, 2), (3, 3)].into_iter().collect();

        let mut enc = Encoder::new(Vec::new());
        let result = enc.encode_map_with(&map, |e, k, v| {
            e.encode_int32(*k)?;
            e.encode_int32(*v)?;
            Err(ENCODER_ERROR)
        });

        assert_eq!(result, Err(ENCODER_ERROR));
        assert_eq!(enc.sink(), &[0x83, 0x01, 0x01]);
    }

    #[test]
    fn test_map_in_error_state() {
        let mut enc = Encoder::new(Vec::new());
        enc.capture(ENCODER_ERROR);

        let map: BTreeMap<i32, i32> = (0..20).map(|i| (i, 0)).collect();
        assert_eq!(enc.encode_map(&map), Err(ENCODER_ERROR));
        assert!(enc.sink().is_empty());
    }

    #[test]
    fn test_map_from_pairs() {
        let mut enc = Encoder::new(Vec::new());
        enc.encode_map(vec![(true, "x"), (false, "y")]).unwrap();
        assert_eq!(enc.sink(), &[0x82, 0xc3, 0xa1, b'x', 0xc2, 0xa1, b'y']);
    }
}
