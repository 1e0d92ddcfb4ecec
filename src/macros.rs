/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Keys must be string literals. Anything that is not `null`, `true`,
/// `false`, a bracketed list or a braced map goes through
/// [`to_value`](crate::to_value), and falls back to `null` if it cannot be
/// serialized.
///
/// ```rust
/// use serde_ndf::{ndf, Value};
///
/// let note = ndf!({
///     "title": "Standup",
///     "attendees": ["ada", "alan"],
///     "meta": { "draft": true, "revision": 3 }
/// });
///
/// let meta = note.as_map().and_then(|m| m.get("meta")).unwrap();
/// assert_eq!(meta.as_map().and_then(|m| m.get("draft")), Some(&Value::Bool(true)));
/// ```
#[macro_export]
macro_rules! ndf {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::ndf!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::NdfMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::NdfMap::new();
        $(
            map.insert($key.to_string(), $crate::ndf!($value));
        )*
        $crate::Value::Map(map)
    }};

    ($s:expr) => {
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    };
}
