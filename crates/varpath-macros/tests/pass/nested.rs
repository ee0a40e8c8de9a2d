// Derived objects nest inside each other and inside maps.
use varpath::{Members, Value, map, resolve};

#[derive(Clone, Members)]
pub struct Address {
    pub city: String,
}

#[derive(Clone, Members)]
pub struct Person {
    pub address: Address,
    pub previous: Vec<Address>,
    pub manager: Option<Box<Person>>,
}

fn main() {
    let person = Person {
        address: Address {
            city: "Lyon".to_string(),
        },
        previous: vec![Address {
            city: "Oslo".to_string(),
        }],
        manager: None,
    };
    let subject = map! { "person" => person };
    assert_eq!(
        resolve(&subject, "person.address.city"),
        Some(Value::from("Lyon"))
    );
    assert_eq!(
        resolve(&subject, "person.previous.0.city"),
        Some(Value::from("Oslo"))
    );
    assert_eq!(resolve(&subject, "person.manager"), Some(Value::Null));
    assert_eq!(resolve(&subject, "person.manager.address"), None);
}
