//! Capability traits for object-like and container-like subjects.
//!
//! Objects expose a fixed member table instead of being inspected at runtime.
//! `#[derive(Members)]` and `#[member_methods]` generate these tables; types
//! built at runtime can implement the traits by hand or use [`Record`].
//!
//! [`Record`]: crate::Record

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use indexmap::IndexMap;

use super::Value;

/// Named members of an object-like subject.
///
/// Each probe returns `None` when the object has no such member. A member
/// that exists but holds null returns `Some(Value::Null)`.
///
/// Getter and asserter probes receive the capitalized member name (`Title`
/// for a `title` segment); the field probe receives the segment verbatim.
///
/// # Example
///
/// ```
/// use varpath::{Members, Value, access};
///
/// struct Page {
///     title: String,
/// }
///
/// impl Members for Page {
///     fn call_getter(&self, member: &str) -> Option<Value> {
///         match member {
///             "Title" => Some(Value::from(self.title.as_str())),
///             _ => None,
///         }
///     }
/// }
///
/// let page = Value::object(Page { title: "Home".into() });
/// assert_eq!(access(&page, "title"), Some(Value::from("Home")));
/// ```
pub trait Members: Send + Sync {
    /// Calls the zero-argument getter registered for `member`.
    fn call_getter(&self, _member: &str) -> Option<Value> {
        None
    }

    /// Calls the zero-argument boolean-style getter registered for `member`.
    fn call_asserter(&self, _member: &str) -> Option<Value> {
        None
    }

    /// Reads the publicly readable field called exactly `name`.
    fn read_field(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// Getter and asserter tables generated by `#[member_methods]`.
///
/// A `#[derive(Members)]` type marked `#[members(methods)]` routes its
/// getter and asserter probes through this trait.
pub trait MemberMethods {
    /// Calls the `get_*` method registered for `member`.
    fn getter(&self, member: &str) -> Option<Value>;

    /// Calls the `is_*` method registered for `member`.
    fn asserter(&self, member: &str) -> Option<Value>;
}

/// A caller-defined container with key-existence checks and indexed reads.
///
/// Containers always take the container path during lookup, even when the
/// implementing type also has object members.
pub trait Container: Send + Sync {
    /// Whether `key` is present.
    fn contains_key(&self, key: &str) -> bool;

    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Option<Value>;
}

/// Converts a borrowed member into a [`Value`].
///
/// Generated member tables call this on fields and on method results, so
/// every field type exposed through `#[derive(Members)]` and every return
/// type of a registered method must implement it.
pub trait ToValue {
    /// Produces an owned value.
    fn to_value(&self) -> Value;
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! number_to_value {
    ($($ty:ty),+) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Number(i64::from(*self))
                }
            }
        )+
    };
}

number_to_value!(i8, i16, i32, i64, u8, u16, u32);

impl ToValue for u64 {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for IndexMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}

/// Entries are sorted by key.
impl<T: ToValue> ToValue for HashMap<String, T> {
    fn to_value(&self) -> Value {
        let mut entries: Vec<(&String, &T)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}
