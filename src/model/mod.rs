mod author;
mod media;
mod post;

pub use author::*;
pub use media::*;
pub use post::*;
