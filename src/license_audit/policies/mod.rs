pub mod spdx_expression;
pub mod system_packages;

pub use spdx_expression::{split_expression, ExpressionOutcome, SpdxMode};
pub use system_packages::{system_exclusions, SYSTEM_PACKAGES};
