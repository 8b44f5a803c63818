mod feed;
mod home;

pub(crate) use feed::*;
pub(crate) use home::*;
