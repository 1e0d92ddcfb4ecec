//! Building and walking documents with Value.
//!
//! Run with: cargo run --example dynamic_values

use serde_ndf::{ndf, parse, to_text, Value};
use std::error::Error;

fn describe(value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Map(map) => {
            for (key, child) in map {
                println!("{}{} ({})", pad, key, child.type_name());
                describe(child, depth + 1);
            }
        }
        Value::List(items) => {
            for (index, item) in items.iter().enumerate() {
                println!("{}[{}] ({})", pad, index, item.type_name());
                describe(item, depth + 1);
            }
        }
        _ => {}
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = ndf!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "limits": { "rps": 250, "burst": 1.5 },
        "debug": true
    });

    let doc = config.as_map().ok_or("ndf! built a non-map value")?;
    let text = to_text(doc)?;
    println!("Config as NDF:\n{}\n", text);

    let parsed = parse(&text);
    if let Some(port) = parsed.get("port").and_then(Value::as_i64) {
        println!("port: {}", port);
    }
    if let Some(features) = parsed.get("features").and_then(Value::as_list) {
        println!("features: {} items\n", features.len());
    }

    println!("Structure:");
    describe(&Value::Map(parsed), 1);

    Ok(())
}
