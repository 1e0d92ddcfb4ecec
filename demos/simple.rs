//! Basic NDF serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_ndf::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Contact {
    id: u32,
    email: String,
    tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct AddressBook {
    owner: String,
    contacts: Vec<Contact>,
    notes: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let book = AddressBook {
        owner: "ada".to_string(),
        contacts: vec![
            Contact {
                id: 42,
                email: "alice@example.com".to_string(),
                tags: vec!["work".to_string(), "urgent".to_string()],
            },
            Contact {
                id: 43,
                email: "bob@example.com".to_string(),
                tags: vec!["family".to_string()],
            },
        ],
        notes: "Call Alice on Monday.\nBob moved in March.".to_string(),
    };

    let text = to_string(&book)?;
    println!("NDF output:\n{}\n", text);

    let back: AddressBook = from_str(&text)?;
    assert_eq!(book, back);
    println!("✓ Round-trip successful");

    Ok(())
}
