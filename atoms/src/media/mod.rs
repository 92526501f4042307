// Image normalization for documents that embed their pictures inline
pub mod service;

pub use service::*;
