//! NDF serialization.
//!
//! Two halves live here:
//!
//! - the text renderer, which writes a [`Document`] back out as NDF text
//! - [`ValueSerializer`], a serde [`Serializer`](serde::Serializer) that turns
//!   any `Serialize` type into a [`Value`] tree
//!
//! ## Output Shapes
//!
//! | Value | Rendered as |
//! |-------|-------------|
//! | `Map` | `key:` then the map one indent step deeper |
//! | `List` of scalars | `key: a, b, c` |
//! | `List` with nested values | `key:` then one `- item` line per element |
//! | multi-line `String` | `key: \|` then each line one step deeper |
//! | anything else | `key: value` |
//!
//! Strings are written verbatim. A string holding a comma or a space re-parses
//! as a list; that is a property of the format, not something the renderer
//! tries to hide.
//!
//! ## Usage
//!
//! ```rust
//! use serde::Serialize;
//! use serde_ndf::to_string;
//!
//! #[derive(Serialize)]
//! struct Note {
//!     title: String,
//!     tags: Vec<String>,
//! }
//!
//! let note = Note {
//!     title: "Groceries".to_string(),
//!     tags: vec!["home".to_string(), "weekly".to_string()],
//! };
//!
//! assert_eq!(to_string(&note).unwrap(), "title: Groceries\ntags: home, weekly");
//! ```

use crate::options::INDENT_STEP;
use crate::{Document, Error, NdfMap, Number, Result, Value};
use num_bigint::BigInt;
use serde::{ser, Serialize};
use tracing::debug;

/// Renders `doc` with its top-level keys at `base_level` indent steps.
pub(crate) fn render(doc: &Document, base_level: usize) -> Result<String> {
    let mut renderer = Renderer::default();
    renderer.write_map(doc, base_level)?;
    debug!(
        keys = doc.len(),
        lines = renderer.lines.len(),
        base_level,
        "rendered NDF document"
    );
    Ok(renderer.lines.join("\n"))
}

#[derive(Default)]
struct Renderer {
    lines: Vec<String>,
}

impl Renderer {
    /// Blank text gets no indentation, so blank lines stay blank.
    fn push(&mut self, level: usize, text: &str) {
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            let mut line = " ".repeat(level * INDENT_STEP);
            line.push_str(text);
            self.lines.push(line);
        }
    }

    fn write_map(&mut self, map: &NdfMap, level: usize) -> Result<()> {
        for (key, value) in map {
            self.write_entry(key, value, level)?;
        }
        Ok(())
    }

    fn write_entry(&mut self, key: &str, value: &Value, level: usize) -> Result<()> {
        match value {
            Value::Null => self.push(level, &format!("{key}:")),
            Value::Map(map) if map.is_empty() => self.push(level, &format!("{key}: {{}}")),
            Value::Map(map) => {
                self.push(level, &format!("{key}:"));
                self.write_map(map, level + 1)?;
            }
            Value::List(items) if items.is_empty() => self.push(level, &format!("{key}: []")),
            Value::List(items) if items.iter().all(Value::is_primitive) => {
                let text = join_inline(items)?;
                // A lone element would otherwise re-parse as a scalar
                if items.len() == 1 {
                    self.push(level, &format!("{key}: [{text}]"));
                } else {
                    self.push(level, &format!("{key}: {text}"));
                }
            }
            Value::List(items) => {
                self.push(level, &format!("{key}:"));
                self.write_items(items, level + 1)?;
            }
            Value::String(text) if text.contains('\n') => {
                self.push(level, &format!("{key}: |"));
                for line in text.split('\n') {
                    self.push(level + 1, line);
                }
            }
            other => self.push(level, &format!("{key}: {}", inline_text(other)?)),
        }
        Ok(())
    }

    /// Block list form, one element per `- ` line.
    ///
    /// A map element is written as a plain block when a `- ` line separates it
    /// from any neighbouring plain block; otherwise it hangs under a bare `-`.
    fn write_items(&mut self, items: &[Value], level: usize) -> Result<()> {
        let has_dash_line = items.iter().any(|item| !is_block_map(item));
        let mut after_block = false;

        for item in items {
            match item {
                Value::Map(map) if !map.is_empty() => {
                    if has_dash_line && !after_block {
                        self.write_map(map, level)?;
                        after_block = true;
                        continue;
                    }
                    // Adjacent maps, or a list of maps only: plain blocks here
                    // would merge into one map on re-parse
                    self.push(level, "-");
                    self.write_map(map, level + 1)?;
                }
                Value::List(inner) if !is_inline_list(inner) => {
                    self.push(level, "-");
                    self.write_items(inner, level + 1)?;
                }
                other => self.push(level, &format!("- {}", inline_text(other)?)),
            }
            after_block = false;
        }
        Ok(())
    }
}

fn is_block_map(value: &Value) -> bool {
    matches!(value, Value::Map(map) if !map.is_empty())
}

/// Whether `items` fits on one line as `[a, b]`.
fn is_inline_list(items: &[Value]) -> bool {
    items.iter().all(|item| match item {
        Value::Null | Value::Bool(_) | Value::Number(_) => true,
        Value::String(text) => !text.contains('\n'),
        Value::List(inner) => is_inline_list(inner),
        Value::Map(_) => false,
    })
}

fn join_inline(items: &[Value]) -> Result<String> {
    let parts = items.iter().map(inline_text).collect::<Result<Vec<_>>>()?;
    Ok(parts.join(", "))
}

/// Single-line text for a value appearing after `key: `, `- ` or inside `[...]`.
fn inline_text(value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(text) if text.is_empty() => Ok("\"\"".to_string()),
        Value::String(text) if text.contains('\n') => Err(Error::unsupported_value(
            "multi-line string inside a list",
        )),
        Value::String(text) => Ok(text.clone()),
        Value::List(items) if items.is_empty() => Ok("[]".to_string()),
        Value::List(items) => Ok(format!("[{}]", join_inline(items)?)),
        Value::Map(map) if map.is_empty() => Ok("{}".to_string()),
        Value::Map(_) => Err(Error::unsupported_value("map inside an inline array")),
    }
}

/// Serializer whose output is a [`Value`] instead of text.
///
/// Enum variants with data become single-key maps (`{Variant: data}`); unit
/// variants become their name as a string.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_ndf::{Value, ValueSerializer};
///
/// #[derive(Serialize)]
/// enum Status {
///     Open,
///     Closed { reason: String },
/// }
///
/// let open = Status::Open.serialize(ValueSerializer).unwrap();
/// assert_eq!(open, Value::from("Open"));
///
/// let closed = Status::Closed { reason: "done".into() }
///     .serialize(ValueSerializer)
///     .unwrap();
/// let inner = closed.as_map().and_then(|m| m.get("Closed")).unwrap();
/// assert_eq!(inner.as_map().and_then(|m| m.get("reason")), Some(&Value::from("done")));
/// ```
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    name: String,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: NdfMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: String,
    map: NdfMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::Number(Number::from(BigInt::from(v))))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(Number::from(BigInt::from(v))))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::Number(Number::from(BigInt::from(v))))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Number(Number::Integer(i64::from(b))))
            .collect();
        Ok(Value::List(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = NdfMap::with_capacity(1);
        map.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Map(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant.to_string(),
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant.to_string(),
            map: NdfMap::new(),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: NdfMap::new(),
            current_key: None,
        }
    }
}

fn single_entry(name: String, value: Value) -> Value {
    let mut map = NdfMap::with_capacity(1);
    map.insert(name, value);
    Value::Map(map)
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(single_entry(self.name, Value::List(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        // NDF keys are text; scalar keys keep their canonical spelling
        let key = match to_value(key)? {
            Value::String(s) => s,
            scalar @ (Value::Bool(_) | Value::Number(_)) => scalar.to_string(),
            other => {
                return Err(Error::type_mismatch("string map key", other.type_name()));
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(single_entry(self.name, Value::Map(self.map)))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn doc(entries: Vec<(&str, Value)>) -> Document {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_scalars() {
        let d = doc(vec![
            ("n", Value::from(5)),
            ("f", Value::from(2.0)),
            ("b", Value::from(false)),
            ("nothing", Value::Null),
            ("s", Value::from("word")),
        ]);
        assert_eq!(
            render(&d, 0).unwrap(),
            "n: 5\nf: 2.0\nb: false\nnothing:\ns: word"
        );
    }

    #[test]
    fn test_null_entry_is_bare_key() {
        let d = doc(vec![
            ("a", Value::Null),
            ("b", Value::Map(NdfMap::new())),
            ("c", Value::Null),
        ]);
        let text = render(&d, 0).unwrap();
        assert_eq!(text, "a:\nb: {}\nc:");
        assert_eq!(crate::parse(&text), d);
    }

    #[test]
    fn test_nested_map_and_base_level() {
        let inner = doc(vec![("leaf", Value::from(1))]);
        let d = doc(vec![("outer", Value::Map(inner))]);
        assert_eq!(render(&d, 0).unwrap(), "outer:\n  leaf: 1");
        assert_eq!(render(&d, 1).unwrap(), "  outer:\n    leaf: 1");
    }

    #[test]
    fn test_scalar_list_is_inline() {
        let d = doc(vec![
            ("tags", Value::List(vec![Value::from("a"), Value::from(2)])),
            ("one", Value::List(vec![Value::from(7)])),
            ("none", Value::List(vec![])),
            ("empty", Value::Map(NdfMap::new())),
        ]);
        assert_eq!(
            render(&d, 0).unwrap(),
            "tags: a, 2\none: [7]\nnone: []\nempty: {}"
        );
    }

    #[test]
    fn test_null_forces_block_list() {
        let d = doc(vec![(
            "items",
            Value::List(vec![Value::from(1), Value::Null]),
        )]);
        assert_eq!(render(&d, 0).unwrap(), "items:\n  - 1\n  - null");
    }

    #[test]
    fn test_nested_lists_render_inline_items() {
        let d = doc(vec![(
            "grid",
            Value::List(vec![
                Value::List(vec![Value::from(1), Value::from(2)]),
                Value::List(vec![Value::from(3)]),
            ]),
        )]);
        assert_eq!(render(&d, 0).unwrap(), "grid:\n  - [1, 2]\n  - [3]");
    }

    #[test]
    fn test_map_elements() {
        let a = Value::Map(doc(vec![("name", Value::from("ada"))]));
        let b = Value::Map(doc(vec![("name", Value::from("alan"))]));

        let mixed = doc(vec![("people", Value::List(vec![a.clone(), Value::from("x")]))]);
        assert_eq!(
            render(&mixed, 0).unwrap(),
            "people:\n  name: ada\n  - x"
        );

        let maps = doc(vec![("people", Value::List(vec![a, b]))]);
        assert_eq!(
            render(&maps, 0).unwrap(),
            "people:\n  -\n    name: ada\n  -\n    name: alan"
        );
    }

    #[test]
    fn test_multiline_string() {
        let d = doc(vec![("body", Value::from("one\n\nthree"))]);
        assert_eq!(render(&d, 0).unwrap(), "body: |\n  one\n\n  three");
    }

    #[test]
    fn test_empty_string_is_quoted() {
        let d = doc(vec![("s", Value::from(""))]);
        assert_eq!(render(&d, 0).unwrap(), "s: \"\"");
    }

    #[test]
    fn test_map_inside_inline_array_is_rejected() {
        let inner = Value::Map(doc(vec![("k", Value::from(1))]));
        let d = doc(vec![(
            "bad",
            Value::List(vec![Value::Null, Value::List(vec![inner])]),
        )]);
        // The nested list is not inline, so it takes the bare dash form
        assert!(render(&d, 0).is_ok());

        assert!(matches!(
            inline_text(&Value::List(vec![Value::Map(doc(vec![("k", Value::Null)]))])),
            Err(Error::UnsupportedValue(_))
        ));
    }

    #[test]
    fn test_multiline_string_in_list_is_rejected() {
        let d = doc(vec![(
            "bad",
            Value::List(vec![Value::Null, Value::from("a\nb")]),
        )]);
        assert!(matches!(render(&d, 0), Err(Error::UnsupportedValue(_))));
    }

    #[derive(Serialize)]
    enum Shape {
        Point,
        Circle(f64),
        Pair(i32, i32),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn test_value_serializer_enums() {
        assert_eq!(to_value(&Shape::Point).unwrap(), Value::from("Point"));

        let circle = to_value(&Shape::Circle(1.5)).unwrap();
        assert_eq!(circle.as_map().and_then(|m| m.get("Circle")), Some(&Value::from(1.5)));

        let pair = to_value(&Shape::Pair(1, 2)).unwrap();
        assert_eq!(
            pair.as_map().and_then(|m| m.get("Pair")),
            Some(&Value::List(vec![Value::from(1), Value::from(2)]))
        );

        let rect = to_value(&Shape::Rect { w: 2, h: 3 }).unwrap();
        let fields = rect.as_map().and_then(|m| m.get("Rect")).and_then(|v| v.as_map());
        assert_eq!(fields.map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_value_serializer_large_unsigned() {
        assert_eq!(to_value(&7u64).unwrap(), Value::from(7));
        let big = to_value(&u64::MAX).unwrap();
        assert_eq!(big, Value::Number(Number::BigInt(BigInt::from(u64::MAX))));
    }

    #[test]
    fn test_value_serializer_map_keys() {
        let mut scores = std::collections::BTreeMap::new();
        scores.insert(1, "one");
        let value = to_value(&scores).unwrap();
        assert_eq!(value.as_map().and_then(|m| m.get("1")), Some(&Value::from("one")));
    }
}
