//! Resolve dotted variable paths such as `user.address.city` against a
//! subject value.
//!
//! Segments may carry one `{name}` region; `name` is looked up on the root
//! subject and its value becomes part of the member name, so
//! `items.{selected}` reads the item whose key is stored under `selected`.
//! Every miss collapses into `None`.

pub mod resolver;
pub mod types;

pub use indexmap::IndexMap;
pub use resolver::{PropertyPath, Resolver, Segment, access, compute_suggestions, resolve};
pub use types::{Container, MemberMethods, Members, Record, Shape, ToValue, Value};

// Re-export the member table generators
pub use varpath_macros::{Members, member_methods};

/// Creates a [`Value::Map`] from key-value pairs, keeping their order.
///
/// Values are converted via `Into<Value>`, so nested `map!`/`list!` calls,
/// numbers, strings and records can be mixed freely.
///
/// # Example
///
/// ```
/// use varpath::{map, resolve};
///
/// let subject = map! { "user" => map! { "name" => "Alice", "age" => 36 } };
/// assert_eq!(resolve(&subject, "user.age"), Some(36.into()));
/// ```
#[macro_export]
macro_rules! map {
    {} => {
        $crate::Value::Map($crate::IndexMap::new())
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::IndexMap::<String, $crate::Value>::new();
            $(
                map.insert(
                    ::std::string::ToString::to_string(&$key),
                    ::std::convert::Into::<$crate::Value>::into($value),
                );
            )+
            $crate::Value::Map(map)
        }
    };
}

/// Creates a [`Value::List`] from its items.
///
/// ```
/// use varpath::{list, resolve};
///
/// let subject = list!["zero", "one"];
/// assert_eq!(resolve(&subject, "1"), Some("one".into()));
/// ```
#[macro_export]
macro_rules! list {
    [] => {
        $crate::Value::List(::std::vec::Vec::new())
    };
    [ $($value:expr),+ $(,)? ] => {
        $crate::Value::List(::std::vec![
            $(::std::convert::Into::<$crate::Value>::into($value)),+
        ])
    };
}
