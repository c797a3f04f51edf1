//! MessagePack format markers
//!
//! Atoms carry type and value in a single byte. Masks carry type and a
//! small size or value in the low bits. Type markers are followed by a
//! big-endian length or value field.

/// Smallest value representable as a negative fixint
pub const MIN_FIXINT: i8 = -32;
/// Largest value representable as a positive fixint
pub const MAX_FIXINT: i8 = 127;
/// Largest count carried in a fixarray / fixmap marker
pub const MAX_FIX_COLLECTION: usize = 15;
/// Largest byte length carried in a fixstr marker
pub const MAX_FIX_STR: usize = 31;

// atoms
/// nil
pub const NIL: u8 = 0xc0;
/// false
pub const FALSE: u8 = 0xc2;
/// true
pub const TRUE: u8 = 0xc3;
/// Alias for a fixarray with no entries
pub const EMPTY_ARRAY: u8 = 0x90;
/// Alias for a fixmap with no entries
pub const EMPTY_MAP: u8 = 0x80;
/// Alias for a fixstr with zero length
pub const EMPTY_STR: u8 = 0xa0;

// masks
/// 0x00-0x7f: positive fixint (0..=127)
pub const FIXINT: u8 = 0x00;
/// 0x80-0x8f: map with 0-15 entries
pub const FIXMAP: u8 = 0x80;
/// 0x90-0x9f: array with 0-15 entries
pub const FIXARRAY: u8 = 0x90;
/// 0xa0-0xbf: string with 0-31 bytes
pub const FIXSTR: u8 = 0xa0;
/// 0xe0-0xff: negative fixint (-32..=-1)
pub const NEG_FIXINT: u8 = 0xe0;

// binary
/// bin 8
pub const BIN8: u8 = 0xc4;
/// bin 16
pub const BIN16: u8 = 0xc5;
/// bin 32
pub const BIN32: u8 = 0xc6;

// floats
/// float 32
pub const FLOAT32: u8 = 0xca;
/// float 64
pub const FLOAT64: u8 = 0xcb;

// unsigned ints
/// uint 8
pub const UINT8: u8 = 0xcc;
/// uint 16
pub const UINT16: u8 = 0xcd;
/// uint 32
pub const UINT32: u8 = 0xce;
/// uint 64
pub const UINT64: u8 = 0xcf;

// signed ints
/// int 8
pub const INT8: u8 = 0xd0;
/// int 16
pub const INT16: u8 = 0xd1;
/// int 32
pub const INT32: u8 = 0xd2;
/// int 64
pub const INT64: u8 = 0xd3;

// strings
/// str 8
pub const STR8: u8 = 0xd9;
/// str 16
pub const STR16: u8 = 0xda;
/// str 32
pub const STR32: u8 = 0xdb;

// collections
/// array 16
pub const ARRAY16: u8 = 0xdc;
/// array 32
pub const ARRAY32: u8 = 0xdd;
/// map 16
pub const MAP16: u8 = 0xde;
/// map 32
pub const MAP32: u8 = 0xdf;
