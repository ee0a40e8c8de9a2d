//! Path resolution over subject values.
//!
//! A path such as `users.{current}.name` is split on `.` and walked one
//! segment at a time. Segments containing a `{...}` region first look the
//! enclosed name up on the root subject and splice the result into the
//! segment. Each step goes through [`access`], which knows how to read a
//! member from containers and objects.

mod accessor;
mod path;
mod suggest;

pub use accessor::access;
pub use path::{PropertyPath, Resolver, Segment, resolve};
pub use suggest::compute_suggestions;

pub(crate) use accessor::access_ref;
