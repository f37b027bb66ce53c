#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub title: String,
    pub content: String,
}

impl Tweet {
    pub fn new(title: String, content: String) -> Self {
        Self { title, content }
    }
}
