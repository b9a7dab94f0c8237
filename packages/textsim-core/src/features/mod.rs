//! Feature modules

pub mod similarity;
pub mod text_format;
