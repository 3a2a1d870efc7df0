mod entry;
mod repository;

pub(crate) use entry::*;
pub(crate) use repository::*;
