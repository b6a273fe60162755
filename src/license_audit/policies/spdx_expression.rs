//! SPDX license expression splitting
//!
//! Expressions are parsed and validated with the `spdx` crate.
//! Only disjunctions are split into their identifiers. Expressions using
//! `AND` or `WITH` are reported as unsupported and kept verbatim, and anything
//! that does not parse is kept verbatim as well.

use spdx::expression::{ExprNode, Operator};
use spdx::Expression;

/// Whether metadata license fields are interpreted as SPDX expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpdxMode {
    /// Every field is one opaque license name
    #[default]
    Disabled,
    /// `A OR B` fields are split into `A` and `B`
    Enabled,
}

impl SpdxMode {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            SpdxMode::Enabled
        } else {
            SpdxMode::Disabled
        }
    }

    /// Resolves one metadata value into license names
    pub fn resolve(self, expression: &str) -> Vec<String> {
        match self {
            SpdxMode::Disabled => vec![expression.to_string()],
            SpdxMode::Enabled => match split_expression(expression) {
                ExpressionOutcome::Identifiers(ids) => ids,
                ExpressionOutcome::Unsupported | ExpressionOutcome::Invalid => {
                    vec![expression.to_string()]
                }
            },
        }
    }
}

/// Result of splitting an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionOutcome {
    /// Distinct identifiers of a single id or an `OR` chain, in expression order
    Identifiers(Vec<String>),
    /// Well-formed, but uses `AND` or `WITH`
    Unsupported,
    /// Not a license expression
    Invalid,
}

/// Parses `expression` and returns the identifiers of a pure disjunction
///
/// Only expressions made of registered SPDX identifiers (or `LicenseRef-`
/// references) are accepted, so free text such as `Foo OR Bar` is invalid.
pub fn split_expression(expression: &str) -> ExpressionOutcome {
    let expr = match Expression::parse(expression) {
        Ok(expr) => expr,
        Err(_) => return ExpressionOutcome::Invalid,
    };

    let has_conjunction = expr.iter().any(|node| match node {
        ExprNode::Op(op) => matches!(op, Operator::And),
        ExprNode::Req(req) => req.req.exception.is_some(),
    });
    if has_conjunction {
        return ExpressionOutcome::Unsupported;
    }

    let mut ids: Vec<String> = Vec::new();
    for req in expr.requirements() {
        let id = req.req.to_string();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ExpressionOutcome::Identifiers(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> ExpressionOutcome {
        ExpressionOutcome::Identifiers(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_single_identifier() {
        assert_eq!(split_expression("MIT"), ids(&["MIT"]));
    }

    #[test]
    fn test_or_expression_is_split() {
        assert_eq!(
            split_expression("MIT OR Apache-2.0"),
            ids(&["MIT", "Apache-2.0"])
        );
    }

    #[test]
    fn test_nested_or_expression_is_split_and_deduplicated() {
        assert_eq!(
            split_expression("(MIT OR BSD-3-Clause) OR MIT"),
            ids(&["MIT", "BSD-3-Clause"])
        );
    }

    #[test]
    fn test_or_later_identifier_is_kept() {
        assert_eq!(
            split_expression("LGPL-2.1-or-later OR MIT"),
            ids(&["LGPL-2.1-or-later", "MIT"])
        );
    }

    #[test]
    fn test_unknown_identifiers_are_invalid() {
        assert_eq!(split_expression("Foo OR Bar"), ExpressionOutcome::Invalid);
        assert_eq!(
            split_expression("Proprietary OR Commercial"),
            ExpressionOutcome::Invalid
        );
        assert_eq!(split_expression("MIT OR Foo"), ExpressionOutcome::Invalid);
    }

    #[test]
    fn test_and_expression_is_unsupported() {
        assert_eq!(
            split_expression("MIT AND Apache-2.0"),
            ExpressionOutcome::Unsupported
        );
        assert_eq!(
            split_expression("MIT OR (Apache-2.0 AND BSD-2-Clause)"),
            ExpressionOutcome::Unsupported
        );
    }

    #[test]
    fn test_with_expression_is_unsupported() {
        assert_eq!(
            split_expression("GPL-2.0-only WITH Classpath-exception-2.0"),
            ExpressionOutcome::Unsupported
        );
    }

    #[test]
    fn test_free_text_is_invalid() {
        assert_eq!(split_expression("MIT License"), ExpressionOutcome::Invalid);
        assert_eq!(split_expression("GPL or later"), ExpressionOutcome::Invalid);
        assert_eq!(split_expression("BSD (3 clause)"), ExpressionOutcome::Invalid);
        assert_eq!(split_expression(""), ExpressionOutcome::Invalid);
    }

    #[test]
    fn test_malformed_expressions_are_invalid() {
        assert_eq!(split_expression("MIT OR"), ExpressionOutcome::Invalid);
        assert_eq!(split_expression("(MIT OR BSD"), ExpressionOutcome::Invalid);
        assert_eq!(split_expression("MIT)"), ExpressionOutcome::Invalid);
        assert_eq!(split_expression("MIT WITH"), ExpressionOutcome::Invalid);
    }

    #[test]
    fn test_spdx_mode_resolve() {
        assert_eq!(
            SpdxMode::Disabled.resolve("MIT OR Apache-2.0"),
            vec!["MIT OR Apache-2.0".to_string()]
        );
        assert_eq!(
            SpdxMode::Enabled.resolve("MIT OR Apache-2.0"),
            vec!["MIT".to_string(), "Apache-2.0".to_string()]
        );
        assert_eq!(
            SpdxMode::Enabled.resolve("MIT AND Apache-2.0"),
            vec!["MIT AND Apache-2.0".to_string()]
        );
        assert_eq!(
            SpdxMode::Enabled.resolve("Hello World"),
            vec!["Hello World".to_string()]
        );
        assert_eq!(
            SpdxMode::Enabled.resolve("Foo OR Bar"),
            vec!["Foo OR Bar".to_string()]
        );
    }

    #[test]
    fn test_spdx_mode_from_flag() {
        assert_eq!(SpdxMode::from_flag(true), SpdxMode::Enabled);
        assert_eq!(SpdxMode::from_flag(false), SpdxMode::Disabled);
    }
}
