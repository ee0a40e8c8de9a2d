//! Integration tests for path resolution.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use insta::assert_snapshot;
use varpath::{Members, PropertyPath, Record, Resolver, Segment, Value, list, map, resolve};

// =============================================================================
// Plain Paths
// =============================================================================

#[test]
fn resolves_nested_maps() {
    let subject = map! { "foo" => map! { "bar" => map! { "baz" => "deep" } } };
    assert_eq!(resolve(&subject, "foo.bar.baz"), Some(Value::from("deep")));
    assert_eq!(
        resolve(&subject, "foo.bar"),
        Some(map! { "baz" => "deep" })
    );
}

#[test]
fn resolves_through_lists() {
    let subject = map! {
        "users" => list![map! { "name" => "Alice" }, map! { "name" => "Bob" }],
    };
    assert_eq!(resolve(&subject, "users.1.name"), Some(Value::from("Bob")));
    assert_eq!(resolve(&subject, "users.2.name"), None);
}

#[test]
fn resolves_through_objects() {
    let user = Record::empty()
        .with_getter("profile", map! { "city" => "Lyon" })
        .with_asserter("active", true);
    let subject = map! { "user" => user };
    assert_eq!(
        resolve(&subject, "user.profile.city"),
        Some(Value::from("Lyon"))
    );
    assert_eq!(resolve(&subject, "user.active"), Some(Value::from(true)));
}

#[test]
fn missing_member_anywhere_gives_none() {
    let subject = map! { "foo" => map! { "bar" => 1 } };
    assert_eq!(resolve(&subject, "nope"), None);
    assert_eq!(resolve(&subject, "foo.nope"), None);
    assert_eq!(resolve(&subject, "foo.bar.nope"), None);
    assert_eq!(resolve(&Value::Null, "foo"), None);
}

// =============================================================================
// Indirection
// =============================================================================

#[test]
fn fully_wrapped_segment_uses_root_value_as_name() {
    let subject = map! {
        "foo" => map! { "bar" => "baz" },
        "key" => "bar",
    };
    assert_eq!(resolve(&subject, "foo.{key}"), Some(Value::from("baz")));
}

#[test]
fn partial_segment_splices_root_value_into_name() {
    let subject = map! { "prefix_bar" => "x", "key" => "bar" };
    assert_eq!(resolve(&subject, "prefix_{key}"), Some(Value::from("x")));

    let subject = map! { "bar_suffix" => "y", "pre_bar_post" => "z", "key" => "bar" };
    assert_eq!(resolve(&subject, "{key}_suffix"), Some(Value::from("y")));
    assert_eq!(resolve(&subject, "pre_{key}_post"), Some(Value::from("z")));
}

#[test]
fn indirection_looks_up_root_not_current_value() {
    let subject = map! {
        "outer" => map! {
            "key" => "wrong",
            "bar" => "right",
            "wrong" => "from current",
        },
        "key" => "bar",
    };
    assert_eq!(resolve(&subject, "outer.{key}"), Some(Value::from("right")));
}

#[test]
fn whole_path_can_be_an_indirection() {
    let subject = map! { "key" => "target", "target" => "hit" };
    assert_eq!(resolve(&subject, "{key}"), Some(Value::from("hit")));
}

#[test]
fn inner_reference_is_a_single_lookup() {
    // `{a.b}` splits at the dot, so neither half carries a full brace pair.
    let subject = map! {
        "{a" => map! { "b}" => "literal halves" },
        "a" => map! { "b" => "never read" },
    };
    assert_eq!(
        resolve(&subject, "{a.b}"),
        Some(Value::from("literal halves"))
    );
}

#[test]
fn scalar_indirection_values_use_their_name_form() {
    let subject = map! {
        "items" => list!["a", "b"],
        "scores" => map! { "2" => "two", "1.5" => "one and a half" },
        "flags" => map! { "1" => "on", "" => "off" },
        "idx" => 1,
        "whole" => 2.0,
        "half" => 1.5,
        "yes" => true,
        "no" => false,
    };
    assert_eq!(resolve(&subject, "items.{idx}"), Some(Value::from("b")));
    assert_eq!(resolve(&subject, "scores.{whole}"), Some(Value::from("two")));
    assert_eq!(
        resolve(&subject, "scores.{half}"),
        Some(Value::from("one and a half"))
    );
    assert_eq!(resolve(&subject, "flags.{yes}"), Some(Value::from("on")));
    assert_eq!(resolve(&subject, "flags.{no}"), Some(Value::from("off")));
}

#[test]
fn missed_indirection_contributes_an_empty_name() {
    let subject = map! { "foo" => map! { "" => "empty key", "x_" => "prefixed" } };
    assert_eq!(
        resolve(&subject, "foo.{missing}"),
        Some(Value::from("empty key"))
    );
    assert_eq!(resolve(&subject, "foo.x_{missing}"), Some(Value::from("prefixed")));
    assert_eq!(resolve(&map! { "foo" => map! {} }, "foo.{missing}"), None);
}

#[test]
fn composite_indirection_values_contribute_an_empty_name() {
    let subject = map! {
        "foo" => map! { "" => "empty key" },
        "key" => list![1, 2],
    };
    assert_eq!(resolve(&subject, "foo.{key}"), Some(Value::from("empty key")));
}

#[test]
fn braces_match_greedily_from_first_open_to_last_close() {
    let subject = map! { "a}{b" => "k", "k" => "found" };
    assert_eq!(resolve(&subject, "{a}{b}"), Some(Value::from("found")));

    let nested = map! { "{key}" => "name", "name" => "outer", "key" => "unused" };
    // `{{key}}` has inner text `{key}`; nested indirection is not evaluated.
    assert_eq!(resolve(&nested, "{{key}}"), Some(Value::from("outer")));
}

#[test]
fn one_sided_braces_are_literal() {
    let subject = map! {
        "{key" => 1,
        "key}" => 2,
        "key" => "unused",
    };
    assert_eq!(resolve(&subject, "{key"), Some(Value::from(1)));
    assert_eq!(resolve(&subject, "key}"), Some(Value::from(2)));
}

#[test]
fn close_before_open_still_splices() {
    // `}key{`: the `}`..`{` span is replaced by the empty-name lookup.
    let subject = map! { "}key{" => 3, "}keykey{" => "spliced" };
    assert_eq!(resolve(&subject, "}key{"), Some(Value::from("spliced")));

    let with_blank = map! { "" => "X", "}keyXkey{" => "blank spliced" };
    assert_eq!(
        resolve(&with_blank, "}key{"),
        Some(Value::from("blank spliced"))
    );

    // `}ab{cdefgh`: inner text `cd`, prefix `}ab`, suffix `ab{cdefgh`.
    let longer = map! { "cd" => "7", "}ab7ab{cdefgh" => "inner" };
    assert_eq!(resolve(&longer, "}ab{cdefgh"), Some(Value::from("inner")));
}

#[test]
fn empty_braces_look_up_the_empty_name_on_root() {
    let subject = map! { "" => "blank", "blank" => "hit" };
    assert_eq!(resolve(&subject, "{}"), Some(Value::from("hit")));
}

// =============================================================================
// Early Termination
// =============================================================================

#[test]
fn null_before_end_of_path_gives_none() {
    let subject = map! { "a" => Value::Null };
    assert_eq!(resolve(&subject, "a.b.c"), None);
    assert_eq!(resolve(&subject, "a"), Some(Value::Null));
}

/// Root object with a null field `a` and a getter that counts its calls.
struct Root {
    key_reads: Arc<AtomicUsize>,
}

impl Members for Root {
    fn call_getter(&self, member: &str) -> Option<Value> {
        (member == "Key").then(|| {
            self.key_reads.fetch_add(1, Ordering::SeqCst);
            Value::from("b")
        })
    }

    fn read_field(&self, name: &str) -> Option<Value> {
        (name == "a").then_some(Value::Null)
    }
}

#[test]
fn segments_after_a_stop_are_not_evaluated() {
    let key_reads = Arc::new(AtomicUsize::new(0));
    let subject = Value::object(Root {
        key_reads: key_reads.clone(),
    });

    assert_eq!(resolve(&subject, "a.{key}"), None);
    assert_eq!(resolve(&subject, "missing.{key}.{key}"), None);
    assert_eq!(key_reads.load(Ordering::SeqCst), 0);

    assert_eq!(resolve(&subject, "{key}"), None);
    assert_eq!(key_reads.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn consecutive_dots_look_up_an_empty_member() {
    let subject = map! { "a" => map! { "b" => 1 } };
    assert_eq!(resolve(&subject, "a..b"), None);

    let with_empty = map! { "a" => map! { "" => map! { "b" => 1 } } };
    assert_eq!(resolve(&with_empty, "a..b"), Some(Value::from(1)));
}

#[test]
fn empty_path_looks_up_the_empty_member() {
    assert_eq!(resolve(&map! { "a" => 1 }, ""), None);
    assert_eq!(resolve(&map! { "" => 1 }, ""), Some(Value::from(1)));
}

#[test]
fn trailing_dot_looks_up_an_empty_member() {
    let subject = map! { "a" => map! { "b" => 1 } };
    assert_eq!(resolve(&subject, "a."), None);
}

#[test]
fn resolution_is_repeatable() {
    let subject = map! { "foo" => map! { "bar" => "baz" }, "key" => "bar" };
    let first = resolve(&subject, "foo.{key}");
    let second = resolve(&subject, "foo.{key}");
    assert_eq!(first, second);
    assert_eq!(first, Some(Value::from("baz")));
}

#[test]
fn resolver_entry_points_agree() {
    let subject = map! { "foo" => map! { "bar" => "baz" }, "key" => "bar" };
    let path = PropertyPath::parse("foo.{key}");
    let expected = Some(Value::from("baz"));

    assert_eq!(resolve(&subject, "foo.{key}"), expected);
    assert_eq!(path.resolve(&subject), expected);
    assert_eq!(Resolver::new().resolve(&subject, "foo.{key}"), expected);
    assert_eq!(Resolver::extract(&subject, "foo.{key}"), expected);
}

#[test]
fn concurrent_resolution_against_shared_subject() {
    let subject = map! {
        "items" => list!["a", "b", "c", "d"],
        "pick" => 2,
    };
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| resolve(&subject, "items.{pick}")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(Value::from("c")));
        }
    });
}

// =============================================================================
// Path Parsing
// =============================================================================

#[test]
fn parse_keeps_every_component() {
    let path = PropertyPath::parse("a..{b}.c_{d}_e.{f");
    let rendered: Vec<String> = path.segments().iter().map(ToString::to_string).collect();
    assert_snapshot!(rendered.join(" | "), @"a |  | {b} | c_{d}_e | {f");
}

#[test]
fn parse_segment_shapes() {
    assert_eq!(Segment::parse("plain"), Segment::Literal("plain".to_string()));
    assert_eq!(
        Segment::parse("pre_{key}_post"),
        Segment::Indirect {
            prefix: "pre_".to_string(),
            inner: "key".to_string(),
            suffix: "_post".to_string(),
        }
    );
    assert_eq!(
        Segment::parse("}key{"),
        Segment::Reversed("}key{".to_string())
    );
    assert_eq!(Segment::parse("}key{").to_string(), "}key{");
    assert!(!Segment::parse("}key{").is_fully_wrapped());
    assert!(Segment::parse("{key}").is_fully_wrapped());
    assert!(!Segment::parse("x{key}").is_fully_wrapped());
    assert!(!Segment::parse("key").is_fully_wrapped());
}

#[test]
fn parsed_path_displays_as_written() {
    let path: PropertyPath = "foo.{key}.bar".parse().unwrap();
    assert_eq!(path.to_string(), "foo.{key}.bar");
    assert_eq!(path.as_str(), "foo.{key}.bar");
    assert_eq!(PropertyPath::from("").segments().len(), 1);
}
