//! Value and scalar parsing for single-line fragments.
//!
//! Everything right of `key:` that is neither empty nor `|` lands here. The
//! fragment's outer shape picks the parse:
//!
//! | Shape | Result |
//! |-------|--------|
//! | `{a: 1, b: x}` | flat inline object (values are scalars) |
//! | `[1, [2, 3]]` | inline array, nesting allowed |
//! | `a, b` or `a b` | implicit list of scalars |
//! | anything else | scalar |
//!
//! In [`SplitMode::Flat`] commas split unconditionally: `"x, y"` is a list of
//! two odd strings, not one quoted string. [`SplitMode::QuoteAware`] keeps
//! quoted and bracketed regions intact.

use crate::line::QuoteState;
use crate::options::SplitMode;
use crate::{NdfMap, Number, Value};
use num_bigint::BigInt;

/// Parses a trimmed value fragment.
pub(crate) fn parse_value(fragment: &str, mode: SplitMode) -> Value {
    let value = fragment.trim();

    if value.starts_with('{') && value.ends_with('}') {
        return parse_inline_object(value, mode);
    }

    if value.starts_with('[') && value.ends_with(']') {
        return parse_inline_array(value, mode);
    }

    match mode {
        SplitMode::Flat => {
            if value.contains(',') || (value.contains(' ') && !value.starts_with('"')) {
                let items = value
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .map(str::trim)
                    .filter(|item| !item.is_empty());
                return Value::List(items.map(parse_scalar).collect());
            }
        }
        SplitMode::QuoteAware => {
            if is_wholly_quoted(value) {
                return parse_scalar(value);
            }
            if value.contains(|c: char| c == ',' || c == ' ') {
                let items = split_top_level(value, mode, true);
                // Every separator sat inside quotes or brackets
                if items != [value] {
                    return Value::List(items.into_iter().map(parse_scalar).collect());
                }
            }
        }
    }

    parse_scalar(value)
}

/// Parses a scalar: quoted string, bool, null, integer, float or bare string.
///
/// Never fails; anything unrecognised is returned as the trimmed text.
pub(crate) fn parse_scalar(text: &str) -> Value {
    let value = text.trim();

    if let Some(inner) = unquote(value) {
        return Value::String(inner.to_string());
    }

    if ["yes", "true"].iter().any(|t| value.eq_ignore_ascii_case(t)) {
        return Value::Bool(true);
    }
    if ["no", "false"].iter().any(|f| value.eq_ignore_ascii_case(f)) {
        return Value::Bool(false);
    }
    if ["null", "none", "-"].iter().any(|n| value.eq_ignore_ascii_case(n)) {
        return Value::Null;
    }

    match parse_number(value) {
        Some(number) => Value::Number(number),
        None => Value::String(value.to_string()),
    }
}

/// Strict numeric parse: base-10 integers (any magnitude) and floats that
/// carry a `.` or an exponent marker.
fn parse_number(value: &str) -> Option<Number> {
    if is_integer_literal(value) {
        return match value.parse::<i64>() {
            Ok(i) => Some(Number::Integer(i)),
            Err(_) => value.parse::<BigInt>().ok().map(Number::BigInt),
        };
    }

    if value.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
        return value.parse::<f64>().ok().map(Number::Float);
    }

    None
}

fn is_integer_literal(value: &str) -> bool {
    let digits = value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Interior of a value wrapped in matching `"` or `'`.
///
/// A lone quote character counts as wrapped and yields an empty interior.
fn unquote(value: &str) -> Option<&str> {
    let first = value.chars().next()?;
    if (first == '"' || first == '\'') && value.ends_with(first) {
        Some(interior(value))
    } else {
        None
    }
}

/// One quoted region spanning the whole value, e.g. `"a, b"` but not `"a" "b"`.
fn is_wholly_quoted(value: &str) -> bool {
    match (value.chars().next(), unquote(value)) {
        (Some(quote), Some(inner)) => value.len() > 1 && !inner.contains(quote),
        _ => false,
    }
}

/// Drops the first and last character.
fn interior(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// `{key: value, ...}`; one level only, each value a scalar.
fn parse_inline_object(text: &str, mode: SplitMode) -> Value {
    let body = interior(text);
    let pairs = match mode {
        SplitMode::Flat => body.split(',').collect::<Vec<_>>(),
        SplitMode::QuoteAware => split_top_level(body, mode, false),
    };

    let mut map = NdfMap::new();
    for pair in pairs {
        if let Some((key, value)) = pair.split_once(':') {
            map.insert(key.trim().to_string(), parse_scalar(value));
        }
    }
    Value::Map(map)
}

/// `[a, b]` or `[[1, 2], [3, 4]]`.
///
/// Without a nested `[` a flat body splits on every comma, stray `]` included.
fn parse_inline_array(text: &str, mode: SplitMode) -> Value {
    let body = interior(text);
    let items = if mode == SplitMode::Flat && !body.contains('[') {
        body.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect()
    } else {
        split_top_level(body, mode, false)
    };
    let items = items
        .into_iter()
        .map(|item| {
            if item.starts_with('[') {
                parse_inline_array(item, mode)
            } else {
                parse_scalar(item)
            }
        })
        .collect();
    Value::List(items)
}

/// Splits on commas (and optionally whitespace) outside nested groups,
/// returning trimmed, non-empty pieces.
///
/// Flat mode tracks only square-bracket depth; quote-aware mode also treats
/// braces as groups and skips over quoted regions.
fn split_top_level(text: &str, mode: SplitMode, on_whitespace: bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut quotes = QuoteState::default();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if mode.is_quote_aware() && quotes.feed(ch) {
            continue;
        }
        match ch {
            '[' => depth += 1,
            ']' => depth = (depth - 1).max(0),
            '{' if mode.is_quote_aware() => depth += 1,
            '}' if mode.is_quote_aware() => depth = (depth - 1).max(0),
            c if depth == 0 && (c == ',' || (on_whitespace && c.is_whitespace())) => {
                parts.push(&text[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> Value {
        Value::Number(Number::Integer(i))
    }

    fn s(text: &str) -> Value {
        Value::String(text.to_string())
    }

    #[test]
    fn test_scalar_literals() {
        assert_eq!(parse_scalar("yes"), Value::Bool(true));
        assert_eq!(parse_scalar("TRUE"), Value::Bool(true));
        assert_eq!(parse_scalar("No"), Value::Bool(false));
        assert_eq!(parse_scalar("-"), Value::Null);
        assert_eq!(parse_scalar("NONE"), Value::Null);
        assert_eq!(parse_scalar("null"), Value::Null);
    }

    #[test]
    fn test_scalar_numbers() {
        assert_eq!(parse_scalar("42"), int(42));
        assert_eq!(parse_scalar("-7"), int(-7));
        assert_eq!(parse_scalar("+3"), int(3));
        assert_eq!(parse_scalar("3.25"), Value::Number(Number::Float(3.25)));
        assert_eq!(parse_scalar("1e3"), Value::Number(Number::Float(1000.0)));
        assert_eq!(parse_scalar(".5"), Value::Number(Number::Float(0.5)));
    }

    #[test]
    fn test_big_integer() {
        let value = parse_scalar("98765432109876543210");
        let expected: BigInt = "98765432109876543210".parse().unwrap();
        assert_eq!(value, Value::Number(Number::BigInt(expected)));
    }

    #[test]
    fn test_numeric_looking_strings_fall_through() {
        assert_eq!(parse_scalar("1.2.3"), s("1.2.3"));
        assert_eq!(parse_scalar("12abc"), s("12abc"));
        assert_eq!(parse_scalar("three"), s("three"));
        assert_eq!(parse_scalar("nan"), s("nan"));
        assert_eq!(parse_scalar("1_000"), s("1_000"));
    }

    #[test]
    fn test_quotes_are_stripped_verbatim() {
        assert_eq!(parse_scalar("\"yes\""), s("yes"));
        assert_eq!(parse_scalar("'42'"), s("42"));
        assert_eq!(parse_scalar(r#""a\n""#), s(r"a\n"));
        assert_eq!(parse_scalar("\"mismatched'"), s("\"mismatched'"));
        assert_eq!(parse_scalar("\""), s(""));
    }

    #[test]
    fn test_implicit_list() {
        assert_eq!(
            parse_value("1, 2, 3", SplitMode::Flat),
            Value::List(vec![int(1), int(2), int(3)])
        );
        assert_eq!(
            parse_value("hello world", SplitMode::Flat),
            Value::List(vec![s("hello"), s("world")])
        );
        assert_eq!(
            parse_value("a,,  b", SplitMode::Flat),
            Value::List(vec![s("a"), s("b")])
        );
    }

    #[test]
    fn test_quoted_space_is_single_scalar() {
        assert_eq!(parse_value("\"x y\"", SplitMode::Flat), s("x y"));
    }

    #[test]
    fn test_quoted_comma_still_splits_in_flat_mode() {
        assert_eq!(
            parse_value("\"x, y\"", SplitMode::Flat),
            Value::List(vec![s("\"x"), s("y\"")])
        );
        assert_eq!(parse_value("\"x, y\"", SplitMode::QuoteAware), s("x, y"));
        assert_eq!(
            parse_value("\"a\" \"b\"", SplitMode::QuoteAware),
            Value::List(vec![s("a"), s("b")])
        );
    }

    #[test]
    fn test_inline_object_is_flat() {
        let value = parse_value("{name: Ada, age: 36, admin: yes}", SplitMode::Flat);
        let map = value.as_map().unwrap();
        assert_eq!(map.get("name"), Some(&s("Ada")));
        assert_eq!(map.get("age"), Some(&int(36)));
        assert_eq!(map.get("admin"), Some(&Value::Bool(true)));
        assert_eq!(map.keys().cloned().collect::<Vec<_>>(), ["name", "age", "admin"]);
    }

    #[test]
    fn test_inline_object_skips_pairs_without_colon() {
        let value = parse_value("{a: 1, stray, b: 2}", SplitMode::Flat);
        assert_eq!(value.as_map().map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_inline_object_quote_aware() {
        let value = parse_value(r#"{title: "a, b", n: 1}"#, SplitMode::QuoteAware);
        let map = value.as_map().unwrap();
        assert_eq!(map.get("title"), Some(&s("a, b")));
        assert_eq!(map.get("n"), Some(&int(1)));

        let flat = parse_value(r#"{title: "a, b", n: 1}"#, SplitMode::Flat);
        assert_eq!(flat.as_map().unwrap().get("title"), Some(&s("\"a")));
    }

    #[test]
    fn test_nested_inline_arrays() {
        assert_eq!(
            parse_value("[[1,2],[3,4]]", SplitMode::Flat),
            Value::List(vec![
                Value::List(vec![int(1), int(2)]),
                Value::List(vec![int(3), int(4)]),
            ])
        );
        assert_eq!(
            parse_value("[1, [2, [3]], x]", SplitMode::Flat),
            Value::List(vec![
                int(1),
                Value::List(vec![int(2), Value::List(vec![int(3)])]),
                s("x"),
            ])
        );
    }

    #[test]
    fn test_stray_closing_bracket_does_not_stop_splitting() {
        assert_eq!(
            parse_value("[x], y]", SplitMode::Flat),
            Value::List(vec![s("x]"), s("y")])
        );
        assert_eq!(
            parse_value("[1, 2]]", SplitMode::Flat),
            Value::List(vec![int(1), s("2]")])
        );
        assert_eq!(
            parse_value("[[1], 2], 3]", SplitMode::Flat),
            Value::List(vec![Value::List(vec![int(1)]), s("2]"), int(3)])
        );
        assert_eq!(
            parse_value("[x], y]", SplitMode::QuoteAware),
            Value::List(vec![s("x]"), s("y")])
        );
    }

    #[test]
    fn test_quote_aware_splits_adjacent_quoted_words() {
        assert_eq!(
            parse_value(r#""x" "y""#, SplitMode::QuoteAware),
            Value::List(vec![s("x"), s("y")])
        );
        assert_eq!(
            parse_value(r#""x y" z"#, SplitMode::QuoteAware),
            Value::List(vec![s("x y"), s("z")])
        );
        assert_eq!(parse_value("[a, b]x", SplitMode::QuoteAware), s("[a, b]x"));
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(parse_value("[]", SplitMode::Flat), Value::List(vec![]));
        assert_eq!(parse_value("{}", SplitMode::Flat), Value::Map(NdfMap::new()));
    }

    #[test]
    fn test_quote_aware_implicit_list() {
        assert_eq!(
            parse_value(r#""New York", Paris 'San Jose'"#, SplitMode::QuoteAware),
            Value::List(vec![s("New York"), s("Paris"), s("San Jose")])
        );
    }
}
