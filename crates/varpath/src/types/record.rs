use bon::Builder;
use indexmap::IndexMap;
use varpath_naming::capitalize;

use super::{Members, Value};

/// An object-like value assembled at runtime.
///
/// A record behaves like an object with stored getter, asserter and field
/// results. Getter and asserter entries are keyed by member name and matched
/// through the same capitalization rule as generated tables, so an entry
/// `"title"` answers the `title` and `Title` segments. Field entries match
/// exactly.
///
/// # Example
///
/// ```
/// use varpath::{IndexMap, Record, Value, resolve};
///
/// let user = Record::builder()
///     .getters(IndexMap::from([("name".to_string(), Value::from("Ada"))]))
///     .build()
///     .with_asserter("admin", true)
///     .with_field("id", 7);
///
/// let subject = Value::from(user);
/// assert_eq!(resolve(&subject, "name"), Some(Value::from("Ada")));
/// assert_eq!(resolve(&subject, "admin"), Some(Value::from(true)));
/// assert_eq!(resolve(&subject, "id"), Some(Value::from(7)));
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct Record {
    /// Results of `get_*` members.
    #[builder(default)]
    pub getters: IndexMap<String, Value>,

    /// Results of `is_*` members.
    #[builder(default)]
    pub asserters: IndexMap<String, Value>,

    /// Publicly readable fields.
    #[builder(default)]
    pub fields: IndexMap<String, Value>,
}

impl Record {
    /// Returns a record with no members.
    pub fn empty() -> Record {
        Record::default()
    }

    /// Adds a getter result for `member`.
    pub fn with_getter(mut self, member: impl Into<String>, value: impl Into<Value>) -> Record {
        self.getters.insert(member.into(), value.into());
        self
    }

    /// Adds an asserter result for `member`.
    pub fn with_asserter(mut self, member: impl Into<String>, value: impl Into<Value>) -> Record {
        self.asserters.insert(member.into(), value.into());
        self
    }

    /// Adds a public field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Record {
        self.fields.insert(name.into(), value.into());
        self
    }
}

fn find_method(table: &IndexMap<String, Value>, member: &str) -> Option<Value> {
    table
        .iter()
        .find(|(key, _)| capitalize(key) == member)
        .map(|(_, value)| value.clone())
}

impl Members for Record {
    fn call_getter(&self, member: &str) -> Option<Value> {
        find_method(&self.getters, member)
    }

    fn call_asserter(&self, member: &str) -> Option<Value> {
        find_method(&self.asserters, member)
    }

    fn read_field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }
}
