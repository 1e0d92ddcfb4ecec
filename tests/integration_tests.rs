use serde::{Deserialize, Serialize};
use serde_ndf::{
    from_reader, from_str, load_from_path, parse, save_to_path, to_string, to_text, to_value,
    to_writer, Error, Number, Value,
};
use std::collections::BTreeMap;
use std::fs;
use std::io;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Status {
    Draft,
    Published { at: String },
    Archived(u32),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Post {
    title: String,
    status: Status,
    body: String,
    editor: Option<String>,
    grid: Vec<Vec<i32>>,
}

fn alice() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    }
}

#[test]
fn test_simple_struct() {
    let user = alice();

    let text = to_string(&user).unwrap();
    assert_eq!(
        text,
        "id: 123\nname: Alice\nactive: true\ntags: admin, developer"
    );

    let back: User = from_str(&text).unwrap();
    assert_eq!(user, back);
}

#[test]
fn test_nested_struct_with_list_of_structs() {
    let order = Order {
        order_id: 9,
        customer: alice(),
        items: vec![
            Product {
                sku: "W-1".to_string(),
                price: 9.5,
                quantity: 2,
            },
            Product {
                sku: "G-2".to_string(),
                price: 1.0,
                quantity: 1,
            },
        ],
        total: 20.0,
    };

    let text = to_string(&order).unwrap();
    assert!(text.contains("customer:\n  id: 123"));
    assert!(text.contains("items:\n  -\n    sku: W-1\n    price: 9.5"));
    assert!(text.ends_with("total: 20.0"));

    let back: Order = from_str(&text).unwrap();
    assert_eq!(order, back);
}

#[test]
fn test_single_element_collections() {
    let user = User {
        id: 1,
        name: "Bo".to_string(),
        active: false,
        tags: vec!["solo".to_string()],
    };
    let text = to_string(&user).unwrap();
    assert!(text.contains("tags: [solo]"));
    assert_eq!(from_str::<User>(&text).unwrap(), user);

    let empty = User {
        tags: vec![],
        ..user
    };
    let text = to_string(&empty).unwrap();
    assert!(text.contains("tags: []"));
    assert_eq!(from_str::<User>(&text).unwrap(), empty);
}

#[test]
fn test_enums_options_and_multiline_text() {
    let post = Post {
        title: "Release".to_string(),
        status: Status::Published {
            at: "2024-05-01".to_string(),
        },
        body: "First paragraph.\n\nSecond paragraph.".to_string(),
        editor: None,
        grid: vec![vec![1, 2], vec![3, 4]],
    };

    let text = to_string(&post).unwrap();
    assert_eq!(
        text,
        "title: Release\n\
         status:\n  Published:\n    at: 2024-05-01\n\
         body: |\n  First paragraph.\n\n  Second paragraph.\n\
         editor:\n\
         grid:\n  - [1, 2]\n  - [3, 4]"
    );

    let back: Post = from_str(&text).unwrap();
    assert_eq!(post, back);

    let draft = Post {
        status: Status::Draft,
        ..back
    };
    let back: Post = from_str(&to_string(&draft).unwrap()).unwrap();
    assert_eq!(back.status, Status::Draft);

    let archived: Status = serde_ndf::from_value(to_value(&Status::Archived(3)).unwrap()).unwrap();
    assert_eq!(archived, Status::Archived(3));
}

#[test]
fn test_string_with_spaces_reads_back_through_list() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Note {
        title: String,
    }

    let note = Note {
        title: "Meeting with the team".to_string(),
    };
    let text = to_string(&note).unwrap();
    assert_eq!(text, "title: Meeting with the team");

    let doc = parse(&text);
    assert!(doc.get("title").map_or(false, Value::is_list));

    let back: Note = from_str(&text).unwrap();
    assert_eq!(back, note);
}

#[test]
fn test_maps_with_non_string_keys() {
    let mut scores = BTreeMap::new();
    scores.insert(1, "gold".to_string());
    scores.insert(2, "silver".to_string());

    let text = to_string(&scores).unwrap();
    assert_eq!(text, "1: gold\n2: silver");

    let back: BTreeMap<u32, String> = from_str(&text).unwrap();
    assert_eq!(back, scores);
}

#[test]
fn test_handwritten_document_into_struct() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Settings {
        theme: String,
        font_size: u8,
        autosave: bool,
        recent: Vec<String>,
        plugins: Option<Vec<String>>,
    }

    let text = "\
# editor settings
theme: dark       # default is light
font_size: 14
autosave: Yes
recent: notes.ndf, todo.ndf
plugins:
";

    let settings: Settings = from_str(text).unwrap();
    assert_eq!(
        settings,
        Settings {
            theme: "dark".to_string(),
            font_size: 14,
            autosave: true,
            recent: vec!["notes.ndf".to_string(), "todo.ndf".to_string()],
            plugins: None,
        }
    );
}

#[test]
fn test_type_mismatch_surfaces() {
    #[derive(Deserialize, Debug)]
    struct Strict {
        #[allow(dead_code)]
        count: u32,
    }

    let err = from_str::<Strict>("count:\n  nested: 1").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_to_value_big_integers() {
    let value = to_value(&u128::MAX).unwrap();
    match value {
        Value::Number(Number::BigInt(bi)) => assert_eq!(bi.to_string(), u128::MAX.to_string()),
        other => panic!("Expected big integer, got {:?}", other),
    }

    let doc = parse("id: 340282366920938463463374607431768211455");
    let text = to_text(&doc).unwrap();
    assert_eq!(text, "id: 340282366920938463463374607431768211455");
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.ndf");

    let doc = parse("title: Groceries\nitems: milk, eggs\nmeta:\n  done: no");
    save_to_path(&doc, &path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "title: Groceries\nitems: milk, eggs\nmeta:\n  done: false"
    );
    assert_eq!(load_from_path(&path).unwrap(), doc);
}

#[test]
fn test_load_missing_file_passes_io_error_through() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_path(dir.path().join("missing.ndf")).unwrap_err();
    match err {
        Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
        other => panic!("Expected Io, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.ndf");
    fs::write(&path, [b'a', b':', b' ', 0xc3, 0x28]).unwrap();

    assert!(matches!(load_from_path(&path), Err(Error::Encoding(_))));
}

#[test]
fn test_failed_render_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keep.ndf");
    fs::write(&path, "old: content").unwrap();

    let mut doc = parse("ok: 1");
    doc.insert(
        "bad".to_string(),
        Value::List(vec![Value::Null, Value::from("two\nlines")]),
    );

    assert!(matches!(
        save_to_path(&doc, &path),
        Err(Error::UnsupportedValue(_))
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "old: content");
}

#[test]
fn test_reader_writer() {
    let doc = parse("a: [1, 2]\nb: |\n  x\n  y");

    let mut buffer = Vec::new();
    to_writer(&mut buffer, &doc).unwrap();
    assert_eq!(from_reader(io::Cursor::new(buffer)).unwrap(), doc);
}

#[test]
fn test_save_to_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("note.ndf");
    let doc = parse("a: 1");

    assert!(matches!(save_to_path(&doc, &path), Err(Error::Io(_))));
}
