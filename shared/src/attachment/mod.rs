pub mod attachment_type;
pub mod builder;
pub mod erased;
pub mod error;
