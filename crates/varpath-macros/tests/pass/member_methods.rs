// Getters and asserters registered from an inherent impl block.
use varpath::{Members, Value, member_methods, resolve};

#[derive(Clone, Members)]
#[members(methods)]
pub struct Account {
    pub name: String,
    pub admin: bool,
}

#[member_methods]
impl Account {
    pub fn get_name(&self) -> String {
        self.name.to_uppercase()
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn get_first_login(&self) -> Option<String> {
        None
    }

    pub fn get_with_argument(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.name)
    }

    fn get_hidden(&self) -> String {
        String::from("hidden")
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

fn main() {
    let mut account = Account {
        name: "ada".to_string(),
        admin: true,
    };
    account.rename("grace".to_string());
    let _ = account.get_with_argument("!");
    let _ = account.get_hidden();

    let subject = Value::from(account);
    assert_eq!(resolve(&subject, "name"), Some(Value::from("GRACE")));
    assert_eq!(resolve(&subject, "admin"), Some(Value::from(true)));
    assert_eq!(resolve(&subject, "first_login"), Some(Value::Null));
    assert_eq!(resolve(&subject, "with_argument"), None);
    assert_eq!(resolve(&subject, "hidden"), None);
}
