// Public fields become readable members; private ones do not.
use varpath::{Members, Value, resolve};

#[derive(Clone, Members)]
pub struct Article {
    pub title: String,
    pub views: u32,
    pub r#type: String,
    #[members(skip)]
    pub internal_id: u64,
    draft_notes: String,
}

fn main() {
    let article = Article {
        title: "Hello".to_string(),
        views: 3,
        r#type: "post".to_string(),
        internal_id: 99,
        draft_notes: String::new(),
    };
    let _ = &article.draft_notes;
    let _ = article.internal_id;

    let subject = Value::from(article);
    assert_eq!(resolve(&subject, "title"), Some(Value::from("Hello")));
    assert_eq!(resolve(&subject, "type"), Some(Value::from("post")));
    assert_eq!(resolve(&subject, "internal_id"), None);
    assert_eq!(resolve(&subject, "draft_notes"), None);
}
