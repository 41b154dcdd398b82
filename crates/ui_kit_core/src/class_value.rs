//! Nested, conditionally-truthy class descriptions and their flattening into ordered tokens.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Recursive description of style tokens accepted anywhere a class list is expected.
///
/// Strings may carry several space-separated tokens. Lists flatten in order. Maps contribute
/// each key whose flag is set, in insertion order. Numbers are dropped unless the caller opts in
/// through [`FlattenOptions::keep_numbers`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClassValue {
    /// Contributes nothing (`null`, `false`, an absent optional).
    Empty,
    /// One or more space-separated tokens.
    Token(String),
    /// Numeric leaf.
    Number(f64),
    /// Ordered nested values.
    List(Vec<ClassValue>),
    /// Token keys gated by a flag, kept in insertion order.
    Map(Vec<(String, bool)>),
}

impl Default for ClassValue {
    fn default() -> Self {
        Self::Empty
    }
}

impl ClassValue {
    /// Builds a map value from `(token, enabled)` entries, preserving their order.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, bool)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, enabled)| (key.into(), enabled))
                .collect(),
        )
    }

    /// Returns `value` when `condition` holds, otherwise [`ClassValue::Empty`].
    pub fn when(condition: bool, value: impl Into<ClassValue>) -> Self {
        if condition {
            value.into()
        } else {
            Self::Empty
        }
    }

    /// Returns `true` when flattening would yield no tokens.
    pub fn is_empty(&self) -> bool {
        flatten(self).is_empty()
    }
}

/// Flattening switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlattenOptions {
    /// Emit non-zero finite numbers in their string form instead of dropping them.
    pub keep_numbers: bool,
}

/// Flattens `input` into its ordered token sequence, dropping numeric leaves.
///
/// The output is not deduplicated; conflict resolution belongs to [`crate::merge`].
pub fn flatten(input: &ClassValue) -> Vec<String> {
    flatten_with(input, FlattenOptions::default())
}

/// Flattens `input` with explicit [`FlattenOptions`].
pub fn flatten_with(input: &ClassValue, options: FlattenOptions) -> Vec<String> {
    let mut tokens = Vec::new();
    push_tokens(input, options, &mut tokens);
    tokens
}

fn push_tokens(value: &ClassValue, options: FlattenOptions, out: &mut Vec<String>) {
    match value {
        ClassValue::Empty => {}
        ClassValue::Token(raw) => push_split(raw, out),
        ClassValue::Number(number) => {
            if options.keep_numbers && number.is_finite() && *number != 0.0 {
                out.push(format_number(*number));
            }
        }
        ClassValue::List(items) => {
            for item in items {
                push_tokens(item, options, out);
            }
        }
        ClassValue::Map(entries) => {
            for (key, enabled) in entries {
                if *enabled {
                    push_split(key, out);
                }
            }
        }
    }
}

fn push_split(raw: &str, out: &mut Vec<String>) {
    out.extend(raw.split_whitespace().map(str::to_string));
}

fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        Self::Token(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        Self::Token(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        Self::Token(value.clone())
    }
}

impl From<&ClassValue> for ClassValue {
    fn from(value: &ClassValue) -> Self {
        value.clone()
    }
}

impl From<bool> for ClassValue {
    /// Bare booleans carry no token, mirroring `condition && "token"` composition.
    fn from(_: bool) -> Self {
        Self::Empty
    }
}

impl From<()> for ClassValue {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

macro_rules! number_into_class_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ClassValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

number_into_class_value!(i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<(&str, bool)> for ClassValue {
    fn from((key, enabled): (&str, bool)) -> Self {
        Self::Map(vec![(key.to_string(), enabled)])
    }
}

impl<T: Into<ClassValue>> FromIterator<T> for ClassValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

/// Builds a [`ClassValue::List`] from heterogeneous parts.
///
/// ```
/// use ui_kit_core::{classes, flatten};
///
/// let active = true;
/// let value = classes!["px-4 py-2", active.then_some("bg-primary"), ("hidden", false)];
/// assert_eq!(flatten(&value), vec!["px-4", "py-2", "bg-primary"]);
/// ```
#[macro_export]
macro_rules! classes {
    ($($part:expr),* $(,)?) => {
        $crate::ClassValue::List(vec![$($crate::ClassValue::from($part)),*])
    };
}

impl Serialize for ClassValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_unit(),
            Self::Token(token) => serializer.serialize_str(token),
            Self::Number(number) => serializer.serialize_f64(*number),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, enabled) in entries {
                    map.serialize_entry(key, enabled)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ClassValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ClassValueVisitor)
    }
}

struct ClassValueVisitor;

impl<'de> Visitor<'de> for ClassValueVisitor {
    type Value = ClassValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a class string, list, or map of class flags")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(ClassValue::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(ClassValue::Number(value as f64))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(ClassValue::Number(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(ClassValue::Token(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(ClassValue::Token(value))
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<Self::Value, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        ClassValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<ClassValue>()? {
            items.push(item);
        }
        Ok(ClassValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, Truthy(enabled))) = map.next_entry::<String, Truthy>()? {
            entries.push((key, enabled));
        }
        Ok(ClassValue::Map(entries))
    }
}

/// Map flag that accepts any value and keeps only its truthiness.
struct Truthy(bool);

impl<'de> Deserialize<'de> for Truthy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TruthyVisitor)
    }
}

struct TruthyVisitor;

impl<'de> Visitor<'de> for TruthyVisitor {
    type Value = Truthy;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a class flag")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Truthy(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Truthy(value != 0))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Truthy(value != 0))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Truthy(value != 0.0 && !value.is_nan()))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Truthy(!value.is_empty()))
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        Ok(Truthy(!value.is_empty()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Truthy(false))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Truthy(false))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        Truthy::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Truthy(true))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Truthy(true))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_space_separated_tokens_in_order() {
        let value = ClassValue::from("  inline-flex   items-center rounded-full ");
        assert_eq!(flatten(&value), vec!["inline-flex", "items-center", "rounded-full"]);
    }

    #[test]
    fn nested_lists_and_maps_flatten_depth_first() {
        let value = classes![
            "a",
            vec![classes!["b", Option::<&str>::None], ClassValue::from("c d")],
            ClassValue::map([("e", true), ("f", false), ("g h", true)]),
            false,
        ];
        assert_eq!(flatten(&value), vec!["a", "b", "c", "d", "e", "g", "h"]);
    }

    #[test]
    fn numbers_are_dropped_unless_requested() {
        let value = classes!["p-4", 3, 0, 2.5];
        assert_eq!(flatten(&value), vec!["p-4"]);
        assert_eq!(
            flatten_with(&value, FlattenOptions { keep_numbers: true }),
            vec!["p-4", "3", "2.5"]
        );
    }

    #[test]
    fn flattening_does_not_deduplicate() {
        let value = classes!["p-4", "p-4", "m-2"];
        assert_eq!(flatten(&value), vec!["p-4", "p-4", "m-2"]);
    }

    #[test]
    fn flattening_is_idempotent() {
        let value = classes![
            "x y",
            ClassValue::map([("z", true), ("w", false)]),
            vec!["q", ""],
            7
        ];
        let once = flatten(&value);
        let twice = flatten(&ClassValue::from(vec![ClassValue::from(once.clone())]));
        assert_eq!(twice, once);
    }

    #[test]
    fn when_gates_a_value() {
        assert_eq!(flatten(&ClassValue::when(true, "ring-2")), vec!["ring-2"]);
        assert!(ClassValue::when(false, "ring-2").is_empty());
    }

    #[test]
    fn deserializes_every_json_shape() {
        let value: ClassValue = serde_json::from_str(
            r#"["a b", null, false, 4, {"c": true, "d": 0, "e": "yes", "f": null}, [["g"]]]"#,
        )
        .expect("parse class value");
        assert_eq!(flatten(&value), vec!["a", "b", "c", "e", "g"]);
    }

    #[test]
    fn map_order_survives_deserialization() {
        let value: ClassValue =
            serde_json::from_str(r#"{"z": true, "a": true, "m": true}"#).expect("parse map");
        assert_eq!(flatten(&value), vec!["z", "a", "m"]);
    }

    #[test]
    fn serializes_back_to_json() {
        let value = classes!["a", ClassValue::map([("b", true)]), ClassValue::Empty];
        let json = serde_json::to_string(&value).expect("serialize");
        assert_eq!(json, r#"["a",{"b":true},null]"#);
    }
}
