//! Pool of scratch encoders for one-shot encodings
//!
//! Encoding a single value into a fresh buffer is common enough that
//! allocating an encoder and buffer for each call shows up in profiles.
//! [`EncoderPool`] keeps idle encoders bound to reusable `Vec<u8>` buffers.
//!
//! # Lifecycle
//!
//! 1. [`EncoderPool::acquire`] hands out a [`PooledEncoder`] with an empty
//!    buffer and no sticky error.
//! 2. The guard derefs to [`Encoder<Vec<u8>>`]; encode as usual.
//! 3. [`PooledEncoder::finish`] copies the bytes out. Dropping the guard
//!    clears the buffer and error and returns the encoder to the pool.
//!
//! # Example
//!
//! ```rust
//! use mpstream::pool::{EncoderPool, PoolConfig};
//!
//! let pool = EncoderPool::new(PoolConfig::new().max_idle(4));
//!
//! let mut enc = pool.acquire();
//! enc.encode_str("hello")?;
//! assert_eq!(enc.finish()?, b"\xa5hello");
//! assert_eq!(pool.idle_count(), 1);
//! # Ok::<(), mpstream::Error>(())
//! ```

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::vec::Vec;

use tracing::trace;

use crate::encoder::Encoder;
use crate::error::Result;
use crate::value::Encode;

/// Configuration for an [`EncoderPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of idle encoders kept for reuse.
    /// Default: 16
    pub max_idle: usize,

    /// Capacity of the buffer given to a newly allocated encoder.
    /// Default: 64 bytes
    pub initial_capacity: usize,

    /// Buffers that grew beyond this capacity are dropped on release
    /// instead of being retained.
    /// Default: 64 KiB
    pub max_retained_capacity: usize,
}

impl PoolConfig {
    /// Default configuration, usable in const context.
    pub const DEFAULT: Self = Self {
        max_idle: 16,
        initial_capacity: 64,
        max_retained_capacity: 64 * 1024,
    };

    /// Create a new configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Set the maximum number of idle encoders.
    #[must_use]
    pub const fn max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = max_idle;
        self
    }

    /// Set the capacity of freshly allocated buffers.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the largest buffer capacity that is retained on release.
    #[must_use]
    pub const fn max_retained_capacity(mut self, capacity: usize) -> Self {
        self.max_retained_capacity = capacity;
        self
    }

    /// Create a configuration that retains nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::DEFAULT.max_idle(0)
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Concurrency-safe pool of scratch encoders.
///
/// Each checked-out encoder is exclusively owned by its guard; only the
/// checkout and return touch shared state.
#[derive(Debug)]
pub struct EncoderPool {
    idle: Mutex<Vec<Encoder<Vec<u8>>>>,
    config: PoolConfig,
}

impl EncoderPool {
    /// Create an empty pool.
    #[must_use]
    pub const fn new(config: PoolConfig) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Get the pool configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Number of idle encoders currently held.
    pub fn idle_count(&self) -> usize {
        self.lock().len()
    }

    /// Check out an encoder with an empty buffer and no sticky error.
    pub fn acquire(&self) -> PooledEncoder<'_> {
        let encoder = match self.lock().pop() {
            Some(mut enc) => {
                reset(&mut enc);
                enc
            }
            None => {
                trace!(
                    capacity = self.config.initial_capacity,
                    "allocating pooled encoder"
                );
                Encoder::new(Vec::with_capacity(self.config.initial_capacity))
            }
        };
        PooledEncoder {
            pool: self,
            encoder: Some(encoder),
        }
    }

    fn release(&self, mut encoder: Encoder<Vec<u8>>) {
        if encoder.sink().capacity() > self.config.max_retained_capacity {
            trace!(
                capacity = encoder.sink().capacity(),
                "dropping oversized pooled encoder"
            );
            return;
        }
        reset(&mut encoder);

        let mut idle = self.lock();
        if idle.len() < self.config.max_idle {
            idle.push(encoder);
        } else {
            trace!(max_idle = self.config.max_idle, "pool full, dropping encoder");
        }
    }

    // A panic while holding the lock cannot leave the idle list invalid.
    fn lock(&self) -> MutexGuard<'_, Vec<Encoder<Vec<u8>>>> {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EncoderPool {
    fn default() -> Self {
        Self::new(PoolConfig::DEFAULT)
    }
}

fn reset(encoder: &mut Encoder<Vec<u8>>) {
    encoder.reset_error();
    encoder.sink_mut().clear();
}

/// Encoder checked out of an [`EncoderPool`].
///
/// Returned to the pool, emptied, when dropped.
#[derive(Debug)]
pub struct PooledEncoder<'a> {
    pool: &'a EncoderPool,
    encoder: Option<Encoder<Vec<u8>>>,
}

impl PooledEncoder<'_> {
    /// Copy of the bytes encoded so far, or the sticky error.
    pub fn finish(self) -> Result<Vec<u8>> {
        self.result()?;
        Ok(self.to_bytes())
    }

    /// Copy of the bytes encoded so far, regardless of the error state.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.sink().clone()
    }
}

impl Deref for PooledEncoder<'_> {
    type Target = Encoder<Vec<u8>>;

    fn deref(&self) -> &Self::Target {
        match &self.encoder {
            Some(enc) => enc,
            None => unreachable!("pooled encoder used after release"),
        }
    }
}

impl DerefMut for PooledEncoder<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.encoder {
            Some(enc) => enc,
            None => unreachable!("pooled encoder used after release"),
        }
    }
}

impl Drop for PooledEncoder<'_> {
    fn drop(&mut self) {
        if let Some(encoder) = self.encoder.take() {
            self.pool.release(encoder);
        }
    }
}

static GLOBAL: EncoderPool = EncoderPool::new(PoolConfig::DEFAULT);

/// Process-wide pool used by [`string`] and [`to_vec`].
pub fn global() -> &'static EncoderPool {
    &GLOBAL
}

/// Encode a string into a new buffer
///
/// ```rust
/// assert_eq!(mpstream::string("hi"), [0xa2, b'h', b'i']);
/// ```
pub fn string(s: &str) -> Vec<u8> {
    let mut enc = global().acquire();
    // Vec sinks never fail
    let _ = enc.encode_str(s);
    enc.to_bytes()
}

/// Encode any supported value into a new buffer
pub fn to_vec<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut enc = global().acquire();
    enc.encode(value)?;
    enc.finish()
}
