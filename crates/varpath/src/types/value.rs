use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use indexmap::IndexMap;

use super::{Container, Members, Record, ToValue};

/// A subject value that paths are resolved against.
///
/// `Value` is a closed set of shapes. Lookup only distinguishes three of them
/// (see [`Shape`]): containers are indexed by key, objects are probed through
/// their [`Members`] table, and everything else is opaque.
///
/// # Example
///
/// ```
/// use varpath::{Value, map};
///
/// let subject = map! { "title" => "Home", "views" => 3 };
/// assert_eq!(subject.as_map().map(|m| m.len()), Some(2));
///
/// let count: Value = 42.into();
/// assert_eq!(count.as_number(), Some(42));
/// ```
#[derive(Clone, Default)]
pub enum Value {
    /// An explicit null. Distinct from an absent lookup, which is `None`.
    #[default]
    Null,

    /// A boolean.
    Bool(bool),

    /// An integer.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string.
    String(String),

    /// A sequence, indexed by canonical decimal keys (`"0"`, `"1"`, ...).
    List(Vec<Value>),

    /// A string-keyed map that keeps insertion order.
    Map(IndexMap<String, Value>),

    /// An object whose members are reached through getters, asserters and
    /// public fields.
    Object(Arc<dyn Members>),

    /// A caller-defined keyed container.
    Container(Arc<dyn Container>),
}

/// How a value takes part in member lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Supports key-existence checks and indexed reads.
    Container,
    /// Exposes named members through accessor methods or fields.
    Object,
    /// Not traversable.
    Scalar,
}

impl Value {
    /// Wraps an object-like value.
    pub fn object(object: impl Members + 'static) -> Value {
        Value::Object(Arc::new(object))
    }

    /// Wraps a caller-defined container.
    pub fn container(container: impl Container + 'static) -> Value {
        Value::Container(Arc::new(container))
    }

    /// Returns how lookup treats this value.
    pub fn shape(&self) -> Shape {
        match self {
            Value::List(_) | Value::Map(_) | Value::Container(_) => Shape::Container,
            Value::Object(_) => Shape::Object,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Float(_) | Value::String(_) => {
                Shape::Scalar
            }
        }
    }

    /// Whether this value is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get this value as a map, if it is one.
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The text this value contributes when it is spliced into a path segment.
    ///
    /// Null and `false` contribute nothing, `true` contributes `"1"`, numbers
    /// their decimal form (integral floats without a fraction) and strings
    /// themselves. Lists, maps and objects have no name form and contribute
    /// an empty string.
    ///
    /// ```
    /// use varpath::Value;
    ///
    /// assert_eq!(Value::from(true).name_form(), "1");
    /// assert_eq!(Value::from(2.0).name_form(), "2");
    /// assert_eq!(Value::from("bar").name_form(), "bar");
    /// assert_eq!(Value::Null.name_form(), "");
    /// ```
    pub fn name_form(&self) -> Cow<'_, str> {
        match self {
            Value::Bool(true) => Cow::Borrowed("1"),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Float(f) => Cow::Owned(f.to_string()),
            Value::String(s) => Cow::Borrowed(s),
            Value::Null
            | Value::Bool(false)
            | Value::List(_)
            | Value::Map(_)
            | Value::Object(_)
            | Value::Container(_) => Cow::Borrowed(""),
        }
    }

    /// Keys this value can be indexed by, when it is a list or a map.
    ///
    /// Objects and custom containers do not enumerate their members.
    pub fn keys(&self) -> Vec<String> {
        match self {
            Value::List(items) => (0..items.len()).map(|index| index.to_string()).collect(),
            Value::Map(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Value::Object(_) => write!(f, "Object(..)"),
            Value::Container(_) => write!(f, "Container(..)"),
        }
    }
}

/// Objects and containers compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Container(a), Value::Container(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                write!(f, "}}")
            }
            Value::Object(_) => write!(f, "<object>"),
            Value::Container(_) => write!(f, "<container>"),
        }
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<IndexMap<String, T>> for Value {
    fn from(map: IndexMap<String, T>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(map: BTreeMap<String, T>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// Hash maps have no stable order; entries are sorted by key.
impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(map: HashMap<String, T>) -> Self {
        let sorted: BTreeMap<String, T> = map.into_iter().collect();
        Value::from(sorted)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::object(record)
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}
