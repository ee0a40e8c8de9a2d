use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use tracing::trace;

use super::access_ref;
use crate::types::Value;

/// One `.`-separated unit of a [`PropertyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A member name used as written.
    Literal(String),

    /// A segment with a `{inner}` region. `inner` is looked up on the root
    /// subject and its name form replaces the braces.
    Indirect {
        prefix: String,
        inner: String,
        suffix: String,
    },

    /// A segment whose last `}` comes before its first `{`, such as
    /// `}key{`. Still spliced: the text after the `{` shortened from the end
    /// by the width of the `}`..`{` span is looked up on the root and
    /// replaces the `}`..`{` span. For `}key{` that lookup is the empty name.
    Reversed(String),
}

impl Segment {
    /// Parses one segment.
    ///
    /// The braced region runs from the first `{` to the last `}`, so
    /// `{a}{b}` has the inner text `a}{b`. A segment lacking either brace is
    /// literal.
    pub fn parse(text: &str) -> Segment {
        let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
            return Segment::Literal(text.to_string());
        };
        if end < start {
            return Segment::Reversed(text.to_string());
        }
        Segment::Indirect {
            prefix: text[..start].to_string(),
            inner: text[start + 1..end].to_string(),
            suffix: text[end + 1..].to_string(),
        }
    }

    /// Whether the whole segment is one `{...}` region.
    pub fn is_fully_wrapped(&self) -> bool {
        matches!(
            self,
            Segment::Indirect { prefix, suffix, .. } if prefix.is_empty() && suffix.is_empty()
        )
    }

    /// The member name this segment stands for, with any indirection looked
    /// up on `root`. An indirection that misses contributes nothing.
    pub fn name(&self, root: &Value) -> Cow<'_, str> {
        match self {
            Segment::Literal(name) => Cow::Borrowed(name),
            Segment::Indirect {
                prefix,
                inner,
                suffix,
            } => {
                Cow::Owned(splice(root, prefix, inner, suffix))
            }
            Segment::Reversed(text) => {
                let (prefix, inner, suffix) = reversed_parts(text);
                Cow::Owned(splice(root, prefix, inner, suffix))
            }
        }
    }
}

/// Looks `inner` up on `root` and places its name form between `prefix` and
/// `suffix`. A miss contributes nothing.
fn splice(root: &Value, prefix: &str, inner: &str, suffix: &str) -> String {
    let substitute = access_ref(root, inner);
    let form = substitute
        .as_deref()
        .map(Value::name_form)
        .unwrap_or_default();
    let name = format!("{prefix}{form}{suffix}");
    trace!(inner = %inner, name = %name, "substituted indirection");
    name
}

/// Splits a segment whose last `}` precedes its first `{`.
///
/// The inner text starts after the `{` and stops `start - end + 1` bytes
/// before the end of the segment; it is empty when that leaves nothing, or
/// when the cut would fall inside a multi-byte character.
fn reversed_parts(text: &str) -> (&str, &str, &str) {
    let start = text.find('{').unwrap_or_default();
    let end = text.rfind('}').unwrap_or_default();
    let stop = text.len() - (start - end + 1);
    let inner = text.get(start + 1..stop).unwrap_or_default();
    (&text[..start], inner, &text[end + 1..])
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Segment::Literal(name) => write!(f, "{name}"),
            Segment::Indirect {
                prefix,
                inner,
                suffix,
            } => write!(f, "{prefix}{{{inner}}}{suffix}"),
            Segment::Reversed(text) => write!(f, "{text}"),
        }
    }
}

/// A parsed dotted path.
///
/// Parsing never fails: empty components are kept (`a..b` has three
/// segments, the middle one empty) and malformed braces are literal text.
///
/// # Example
///
/// ```
/// use varpath::{PropertyPath, map};
///
/// let subject = map! {
///     "foo" => map! { "bar" => "baz" },
///     "key" => "bar",
/// };
/// let path = PropertyPath::parse("foo.{key}");
/// assert_eq!(path.segments().len(), 2);
/// assert_eq!(path.resolve(&subject), Some("baz".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    source: String,
    segments: Vec<Segment>,
}

impl PropertyPath {
    /// Splits `path` on `.` and parses each segment.
    pub fn parse(path: &str) -> PropertyPath {
        PropertyPath {
            source: path.to_string(),
            segments: path.split('.').map(Segment::parse).collect(),
        }
    }

    /// The path as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The parsed segments, in traversal order. Never empty.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Walks `subject` along this path.
    ///
    /// Indirections always look up on `subject` itself, not on the value
    /// reached so far. Traversal stops at the first missing member and at a
    /// null that still has segments after it; both give `None` and no later
    /// segment (or its indirection) is evaluated.
    pub fn resolve(&self, subject: &Value) -> Option<Value> {
        let mut current = Cow::Borrowed(subject);
        let last = self.segments.len() - 1;

        for (index, segment) in self.segments.iter().enumerate() {
            let name = segment.name(subject);
            let next = match current {
                Cow::Borrowed(value) => access_ref(value, &name),
                Cow::Owned(value) => {
                    let step = access_ref(&value, &name).map(Cow::into_owned);
                    step.map(Cow::Owned)
                }
            };
            let Some(next) = next else {
                trace!(path = %self.source, segment = %name, "member not found");
                return None;
            };
            if index < last && next.is_null() {
                trace!(path = %self.source, segment = %name, "null before end of path");
                return None;
            }
            current = next;
        }

        Some(current.into_owned())
    }
}

impl Display for PropertyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.source)
    }
}

impl FromStr for PropertyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<PropertyPath, Infallible> {
        Ok(PropertyPath::parse(s))
    }
}

impl From<&str> for PropertyPath {
    fn from(path: &str) -> Self {
        PropertyPath::parse(path)
    }
}

/// Resolves `path` against `subject`.
///
/// Shorthand for [`PropertyPath::parse`] followed by
/// [`PropertyPath::resolve`]. Returns `None` when any step misses.
///
/// ```
/// use varpath::{map, resolve};
///
/// let subject = map! { "prefix_bar" => "x", "key" => "bar" };
/// assert_eq!(resolve(&subject, "prefix_{key}"), Some("x".into()));
/// assert_eq!(resolve(&subject, "nope.deeper"), None);
/// ```
pub fn resolve(subject: &Value, path: &str) -> Option<Value> {
    PropertyPath::parse(path).resolve(subject)
}

/// Value-free entry point for callers that want a resolver to pass around.
///
/// Holds no state; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver;

impl Resolver {
    /// Creates a resolver.
    pub fn new() -> Resolver {
        Resolver
    }

    /// Resolves `path` against `subject`. Same as [`resolve`].
    pub fn resolve(&self, subject: &Value, path: &str) -> Option<Value> {
        resolve(subject, path)
    }

    /// Resolves `path` against `subject` in one call, without a resolver.
    pub fn extract(subject: &Value, path: &str) -> Option<Value> {
        Resolver::new().resolve(subject, path)
    }
}
