pub mod helpers;

pub use attachment_shared;
pub use helpers::*;
pub use test_values::{Position, Quantized};
