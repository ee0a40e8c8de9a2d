mod members;
mod record;
mod serialize;
mod value;

pub use members::{Container, MemberMethods, Members, ToValue};
pub use record::Record;
pub use value::{Shape, Value};
