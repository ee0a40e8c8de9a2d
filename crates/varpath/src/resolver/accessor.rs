//! Single-step member access.

use std::borrow::Cow;

use varpath_naming::{AccessorKind, capitalize};

use crate::types::{Members, Value};

/// Reads the member `name` from `subject`.
///
/// - Lists, maps and custom containers are checked for the key and indexed.
/// - Objects are probed in fixed order: `get_<name>` getter, `is_<name>`
///   asserter, then the public field `name`.
/// - Scalars have no members.
///
/// Returns `None` when the member does not exist.
///
/// # Example
///
/// ```
/// use varpath::{Value, access, list, map};
///
/// let subject = map! { "tags" => list!["a", "b"] };
/// assert_eq!(access(&subject, "tags"), Some(list!["a", "b"]));
/// assert_eq!(access(&subject, "missing"), None);
/// assert_eq!(access(&Value::from(3), "anything"), None);
/// ```
pub fn access(subject: &Value, name: &str) -> Option<Value> {
    access_ref(subject, name).map(Cow::into_owned)
}

/// Borrowing form of [`access`]. Container members are borrowed from the
/// subject; object members are produced by calling into the object.
pub(crate) fn access_ref<'a>(subject: &'a Value, name: &str) -> Option<Cow<'a, Value>> {
    match subject {
        Value::Object(object) => object_member(object.as_ref(), name).map(Cow::Owned),
        Value::Map(map) => map.get(name).map(Cow::Borrowed),
        Value::List(items) => list_index(name)
            .and_then(|index| items.get(index))
            .map(Cow::Borrowed),
        Value::Container(container) => {
            if container.contains_key(name) {
                container.get(name).map(Cow::Owned)
            } else {
                None
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Float(_) | Value::String(_) => {
            None
        }
    }
}

fn object_member(object: &dyn Members, name: &str) -> Option<Value> {
    let capitalized = capitalize(name);
    AccessorKind::LOOKUP_ORDER.into_iter().find_map(|kind| {
        let key = if kind.uses_capitalized_key() {
            capitalized.as_ref()
        } else {
            name
        };
        match kind {
            AccessorKind::Getter => object.call_getter(key),
            AccessorKind::Asserter => object.call_asserter(key),
            AccessorKind::Field => object.read_field(key),
        }
    })
}

/// Parses a list key. Only canonical non-negative decimals index a list:
/// `"0"` and `"12"` do, `"01"`, `"+1"` and `"-1"` do not.
fn list_index(key: &str) -> Option<usize> {
    let canonical = match key.as_bytes() {
        [b'0'] => true,
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
        [] => false,
    };
    if canonical { key.parse().ok() } else { None }
}
