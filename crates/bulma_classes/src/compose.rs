//! Class composition: nested inputs in, one ordered and deduplicated class string out.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use indexmap::IndexSet;
use serde_json::Value;

use crate::config::is_usable_prefix;

/// One argument accepted by [`compose`].
///
/// Inputs nest freely through [`ClassInput::List`]. Text and map keys may carry several
/// whitespace-separated tokens; each one is treated independently.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassInput<'a> {
    /// Ignored input (`false`, `null`, absent values).
    Skip,
    /// Literal class text, split on whitespace.
    Text(Cow<'a, str>),
    /// Numeric class name, stringified before splitting. `0` is kept.
    Number(f64),
    /// Ordered sequence of nested inputs.
    List(Vec<ClassInput<'a>>),
    /// Keys paired with their already-evaluated truthiness. Only enabled keys are emitted.
    Map(Vec<(Cow<'a, str>, bool)>),
}

impl<'a> ClassInput<'a> {
    /// Builds a [`ClassInput::Map`] from `(key, enabled)` pairs.
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<Cow<'a, str>>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, enabled)| (key.into(), enabled))
                .collect(),
        )
    }

    /// Builds a [`ClassInput::List`] from anything convertible into inputs.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ClassInput<'a>>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<'a> From<&'a str> for ClassInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for ClassInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for ClassInput<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for ClassInput<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

macro_rules! number_inputs {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for ClassInput<'_> {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )+
    };
}

number_inputs!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Booleans never name a class on their own; `false` and `true` are both skipped positionally.
impl From<bool> for ClassInput<'_> {
    fn from(_: bool) -> Self {
        Self::Skip
    }
}

impl<'a, T> From<Option<T>> for ClassInput<'a>
where
    T: Into<ClassInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Skip, Into::into)
    }
}

impl<'a, T> From<Vec<T>> for ClassInput<'a>
where
    T: Into<ClassInput<'a>>,
{
    fn from(value: Vec<T>) -> Self {
        Self::list(value)
    }
}

impl<'a, const N: usize> From<[(&'a str, bool); N]> for ClassInput<'a> {
    fn from(value: [(&'a str, bool); N]) -> Self {
        Self::map(value)
    }
}

/// JSON values follow JavaScript truthiness when used as map values.
impl From<Value> for ClassInput<'_> {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Bool(_) => Self::Skip,
            Value::Number(number) => number.as_f64().map_or(Self::Skip, Self::Number),
            Value::String(text) => Self::Text(Cow::Owned(text)),
            Value::Array(items) => Self::list(items),
            Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| {
                        let enabled = is_truthy(&value);
                        (Cow::Owned(key), enabled)
                    })
                    .collect(),
            ),
        }
    }
}

impl<'a> From<&'a Value> for ClassInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null | Value::Bool(_) => Self::Skip,
            Value::Number(number) => number.as_f64().map_or(Self::Skip, Self::Number),
            Value::String(text) => Self::Text(Cow::Borrowed(text.as_str())),
            Value::Array(items) => Self::list(items),
            Value::Object(entries) => Self::Map(
                entries
                    .iter()
                    .map(|(key, value)| (Cow::Borrowed(key.as_str()), is_truthy(value)))
                    .collect(),
            ),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Stringifies a number the way a JavaScript runtime would print it in a class list.
///
/// Magnitudes from `1e21` up and below `1e-6` switch to exponent form (`1e+21`, `1.5e-7`).
fn number_token(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers `-0.0` as well.
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) && !value.is_nan() {
        let exponent_form = format!("{value:e}");
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponent_form,
        };
    }
    value.to_string()
}

/// Insertion-ordered set of class tokens with an optional prefix applied on insert.
///
/// The first occurrence of a token fixes its position; later duplicates are ignored.
#[derive(Debug, Clone, Default)]
pub struct ClassSet<'p> {
    prefix: Option<&'p str>,
    tokens: IndexSet<String>,
}

impl<'p> ClassSet<'p> {
    /// Creates an empty, unprefixed set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set that prepends `prefix` to every inserted token.
    ///
    /// An empty prefix, or one containing whitespace, behaves like no prefix.
    pub fn with_prefix(prefix: Option<&'p str>) -> Self {
        Self {
            prefix: prefix.filter(|prefix| is_usable_prefix(prefix)),
            tokens: IndexSet::new(),
        }
    }

    /// Walks `input` and inserts every token it yields.
    pub fn add<'a>(&mut self, input: impl Into<ClassInput<'a>>) -> &mut Self {
        self.collect(&input.into());
        self
    }

    fn collect(&mut self, input: &ClassInput<'_>) {
        match input {
            ClassInput::Skip => {}
            ClassInput::Text(text) => self.insert_words(text),
            ClassInput::Number(number) => self.insert_words(&number_token(*number)),
            ClassInput::List(items) => {
                for item in items {
                    self.collect(item);
                }
            }
            ClassInput::Map(entries) => {
                for (key, enabled) in entries {
                    if *enabled {
                        self.insert_words(key);
                    }
                }
            }
        }
    }

    fn insert_words(&mut self, words: &str) {
        for word in words.split_whitespace() {
            let token = match self.prefix {
                Some(prefix) => format!("{prefix}{word}"),
                None => word.to_string(),
            };
            self.tokens.insert(token);
        }
    }

    /// Returns `true` when the final (prefixed) token is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when no token has been inserted.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates tokens in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// Joins the tokens with single spaces. An empty set yields an empty string.
    pub fn into_class_string(self) -> String {
        self.to_string()
    }
}

impl Display for ClassSet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Composes `inputs` into a single space-separated, deduplicated class string.
pub fn compose<'a, I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassInput<'a>>,
{
    compose_with_prefix(None, inputs)
}

/// Composes `inputs` and prepends `prefix` to every resulting token.
///
/// `None` leaves tokens untouched. So does a prefix that [`ClassPrefix`] would reject (empty or
/// containing whitespace), since it could not form a single class token.
///
/// [`ClassPrefix`]: crate::ClassPrefix
pub fn compose_with_prefix<'a, I>(prefix: Option<&str>, inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassInput<'a>>,
{
    let mut set = ClassSet::with_prefix(prefix);
    for input in inputs {
        set.add(input);
    }
    set.into_class_string()
}
