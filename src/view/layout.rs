use super::ViewData;
use rinja::Template;

#[derive(Template)]
#[template(path = "layout.html")]
pub struct Layout {
    pub content: String,
    pub version_string: String,
    pub metadata: ViewData,
}

impl Layout {
    pub fn new(content: String, metadata: ViewData) -> Self {
        Self {
            content,
            version_string: env!("CARGO_PKG_VERSION").to_string(),
            metadata,
        }
    }

    pub fn title(&self) -> &str {
        self.metadata
            .get("title")
            .map(String::as_str)
            .unwrap_or("postboard")
    }
}
