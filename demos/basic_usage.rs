//! Basic usage example for mpstream
//!
//! Run with: cargo run --example basic_usage

use std::collections::BTreeMap;

use mpstream::*;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    println!("mpstream Basic Usage Example");
    println!("============================");

    // Example 1: Shortest integer forms
    println!("\n1. Integers:");
    {
        for v in [0i64, 127, 128, -33, 32768, 1 << 40] {
            let mut enc = Encoder::new(Vec::new());
            enc.encode_int64(v)?;
            println!("  {:>14} -> {}", v, hex(enc.sink()));
        }
    }

    // Example 2: A record as a map, into a fixed buffer
    println!("\n2. Map into a Fixed Buffer:");
    {
        let mut buf = [0u8; 64];
        let mut enc = Encoder::new(SliceSink::new(&mut buf));

        enc.write_map_header(3)?;
        enc.encode_str("symbol")?;
        enc.encode_str("AAPL")?;
        enc.encode_str("price")?;
        enc.encode_int64(50_000_000)?;
        enc.encode_str("note")?;
        enc.encode(&None::<&str>)?;

        println!("  Encoded {} bytes", enc.sink().position());
        println!("  {}", hex(enc.sink().as_slice()));
    }

    // Example 3: Sticky errors
    println!("\n3. Sticky Error State:");
    {
        let mut buf = [0u8; 4];
        let mut enc = Encoder::new(SliceSink::new(&mut buf));

        // errors are checked once, after the whole sequence
        let _ = enc.encode_str("abc");
        let _ = enc.encode_str("does not fit");
        let _ = enc.encode_bool(true);

        println!("  Error: {:?}", enc.error());
        println!("  Bytes kept: {}", hex(enc.sink().as_slice()));

        enc.sink_mut().reset();
        enc.reset_error();
        enc.encode_bool(true)?;
        println!("  After reset: {}", hex(enc.sink().as_slice()));
    }

    // Example 4: Generic containers and dynamic values
    println!("\n4. Containers:");
    {
        let mut prices = BTreeMap::new();
        prices.insert("AAPL", 189_500_000i64);
        prices.insert("MSFT", 411_200_000);

        let mut enc = Encoder::new(Vec::new());
        enc.encode(&prices)?;
        enc.encode_array_with(["a", "b"], |e, s| e.encode_bin(s.as_bytes()))?;

        let items = [Value::Bool(false), Value::F32(1.5)];
        enc.encode_value(&Value::Array(&items))?;
        enc.encode_any(&String::from("dynamic"))?;

        println!("  {}", hex(enc.sink()));
    }

    // Example 5: Scoped retarget to build a length-prefixed blob
    println!("\n5. Scoped Retarget:");
    {
        let mut enc = Encoder::new(Vec::new());
        let mut nested = Vec::new();

        enc.using(&mut nested, |e| e.encode(&[1u8, 2, 3]))?;
        enc.encode_bin(&nested)?;

        println!("  Nested: {}", hex(&nested));
        println!("  Outer:  {}", hex(enc.sink()));
    }

    // Example 6: Pooled one-shot encodings
    println!("\n6. Pooled Encoders:");
    {
        println!("  string(\"hi\") -> {}", hex(&string("hi")));
        println!("  to_vec(&[-1, 1]) -> {}", hex(&to_vec(&[-1i32, 1])?));

        let pool = EncoderPool::new(PoolConfig::new().max_idle(2));
        let mut enc = pool.acquire();
        enc.encode_uint(usize::MAX)?;
        println!("  usize::MAX -> {}", hex(&enc.finish()?));
        println!("  Idle encoders: {}", pool.idle_count());
    }

    Ok(())
}
