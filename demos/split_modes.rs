//! Flat versus quote-aware splitting of inline values.
//!
//! Run with: cargo run --example split_modes

use serde_ndf::{parse_with_options, ParseOptions, SplitMode};

const TEXT: &str = r##"title: "Dinner, then a walk"
tag: "#home" # comment
plain: milk, eggs, bread"##;

fn main() {
    for mode in [SplitMode::Flat, SplitMode::QuoteAware] {
        let options = ParseOptions::new().with_split_mode(mode);
        let doc = parse_with_options(TEXT, &options);

        println!("{:?}:", mode);
        for (key, value) in &doc {
            println!("  {} = {:?}", key, value);
        }
        println!();
    }
}
