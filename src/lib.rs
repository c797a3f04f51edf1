//! mpstream: Streaming MessagePack encoder
//!
//! This crate writes MessagePack directly into a byte sink, always choosing
//! the smallest representation for each integer and length.
//!
//! # Error Model
//!
//! ```text
//! sink write fails ──► error stored on the Encoder (first one wins)
//!                      │
//!                      └─► every later operation is a no-op returning it
//!                          until reset_error() clears it
//! ```
//!
//! Contract violations (an out-of-range `encode_fixed_int`, an unsupported
//! type passed to `encode_any`, a length above `u32::MAX`) are bugs in the
//! caller and panic instead.
//!
//! # Features
//!
//! - Minimal-size integer, string, binary, array and map encodings
//! - Sticky first-error semantics across chains of operations
//! - Scoped sink retargeting with guaranteed restoration
//! - Pooled scratch encoders for one-shot encodings (`std`)
//! - `no_std` support with `alloc`
//!
//! # Example
//!
//! ```rust
//! use mpstream::{Encoder, SliceSink};
//!
//! let mut buf = [0u8; 64];
//! let mut enc = Encoder::new(SliceSink::new(&mut buf));
//!
//! enc.write_map_header(2)?;
//! enc.encode_str("price")?;
//! enc.encode_int64(50_000)?;
//! enc.encode_str("tags")?;
//! enc.encode_array(["a", "b"])?;
//!
//! assert_eq!(enc.sink().position(), 20);
//! # Ok::<(), mpstream::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod container;
pub mod encoder;
pub mod error;
pub mod header;
pub mod primitive;
pub mod scalar;
pub mod sink;
pub mod value;
pub mod wire;

#[cfg(feature = "std")]
pub mod pool;

// Re-export main types
pub use encoder::Encoder;
pub use error::{Error, Result, Violation};
pub use primitive::Primitive;
pub use sink::{Discard, Sink, SliceSink};
pub use value::{Bin, Encode, Value};

#[cfg(feature = "std")]
pub use pool::{string, to_vec, EncoderPool, PoolConfig, PooledEncoder};
#[cfg(feature = "std")]
pub use sink::IoSink;
