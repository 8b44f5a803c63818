use super::Feed;
use rinja::Template;

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct Home<'f> {
    pub feed: Feed<'f>,
}
