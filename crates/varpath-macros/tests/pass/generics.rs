// Generic structs get bounded impls.
use varpath::{Members, ToValue, Value, resolve};

#[derive(Clone, Members)]
pub struct Labeled<T: ToValue + Clone + Send + Sync + 'static> {
    pub label: String,
    pub value: T,
}

fn main() {
    let labeled = Labeled {
        label: "answer".to_string(),
        value: 42_i64,
    };
    let subject = Value::from(labeled);
    assert_eq!(resolve(&subject, "value"), Some(Value::from(42)));
    assert_eq!(resolve(&subject, "label"), Some(Value::from("answer")));
}
