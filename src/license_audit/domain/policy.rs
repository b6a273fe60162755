use std::fmt;

/// How policy literals are compared with license names
///
/// Both modes compare case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The license name equals the literal
    #[default]
    Exact,
    /// The literal is a substring of the license name
    Partial,
}

impl MatchMode {
    /// Checks whether `literal` matches `license` under this mode
    pub fn matches(self, license: &str, literal: &str) -> bool {
        let license = license.to_lowercase();
        let literal = literal.to_lowercase();
        match self {
            MatchMode::Exact => license == literal,
            MatchMode::Partial => license.contains(&literal),
        }
    }
}

/// Whether evaluation stops at the first failing package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    #[default]
    FailFast,
    CollectAll,
}

/// Splits a semicolon-separated license list, trimming items and dropping empties
pub fn parse_license_list(list: &str) -> Vec<String> {
    list.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// fail-on / allow-only rules and how to apply them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicySpec {
    fail_on: Vec<String>,
    allow_only: Vec<String>,
    match_mode: MatchMode,
    aggregation: Aggregation,
}

impl PolicySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fail-on list from its semicolon-separated form
    pub fn with_fail_on(mut self, list: &str) -> Self {
        self.fail_on = parse_license_list(list);
        self
    }

    /// Sets the allow-only list from its semicolon-separated form
    pub fn with_allow_only(mut self, list: &str) -> Self {
        self.allow_only = parse_license_list(list);
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn fail_on(&self) -> &[String] {
        &self.fail_on
    }

    pub fn allow_only(&self) -> &[String] {
        &self.allow_only
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// True when neither list has any literal
    pub fn is_empty(&self) -> bool {
        self.fail_on.is_empty() && self.allow_only.is_empty()
    }
}

/// Reason a package failed a policy check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// License names that matched a fail-on literal
    FailOn(Vec<String>),
    /// License names of a package that matched no allow-only literal
    NotAllowed(Vec<String>),
}

impl Violation {
    pub fn licenses(&self) -> &[String] {
        match self {
            Violation::FailOn(licenses) | Violation::NotAllowed(licenses) => licenses,
        }
    }
}

/// One failing package and why it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyFailure {
    pub package: String,
    pub version: String,
    pub violations: Vec<Violation>,
}

impl PolicyFailure {
    /// Diagnostic lines, one per violation
    pub fn messages(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|violation| {
                let licenses = violation.licenses().join("; ");
                match violation {
                    Violation::FailOn(_) => format!(
                        "fail-on license {} was found for package {}:{}",
                        licenses, self.package, self.version
                    ),
                    Violation::NotAllowed(_) => format!(
                        "license {} not in allow-only licenses was found for package {}:{}",
                        licenses, self.package, self.version
                    ),
                }
            })
            .collect()
    }
}

impl fmt::Display for PolicyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("\n"))
    }
}

/// Outcome of a policy evaluation over one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    failures: Vec<PolicyFailure>,
}

impl Verdict {
    pub fn pass() -> Self {
        Self::default()
    }

    pub fn from_failures(failures: Vec<PolicyFailure>) -> Self {
        Self { failures }
    }

    pub fn is_pass(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PolicyFailure] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_license_list() {
        assert_eq!(
            parse_license_list(" MIT License ;;BSD License; "),
            vec!["MIT License".to_string(), "BSD License".to_string()]
        );
        assert!(parse_license_list("").is_empty());
        assert!(parse_license_list(" ; ").is_empty());
    }

    #[test]
    fn test_match_mode_exact_is_case_insensitive() {
        assert!(MatchMode::Exact.matches("MIT License", "mit license"));
        assert!(!MatchMode::Exact.matches("MIT License", "MIT"));
    }

    #[test]
    fn test_match_mode_partial_is_substring() {
        assert!(MatchMode::Partial.matches("MIT License", "mit"));
        assert!(!MatchMode::Partial.matches("MIT", "MIT License"));
    }

    #[test]
    fn test_policy_spec_builder() {
        let spec = PolicySpec::new()
            .with_fail_on("GPL;AGPL")
            .with_allow_only("")
            .with_match_mode(MatchMode::Partial)
            .with_aggregation(Aggregation::CollectAll);

        assert_eq!(spec.fail_on(), &["GPL".to_string(), "AGPL".to_string()]);
        assert!(spec.allow_only().is_empty());
        assert_eq!(spec.match_mode(), MatchMode::Partial);
        assert_eq!(spec.aggregation(), Aggregation::CollectAll);
        assert!(!spec.is_empty());
        assert!(PolicySpec::new().is_empty());
    }

    #[test]
    fn test_failure_messages() {
        let failure = PolicyFailure {
            package: "django".to_string(),
            version: "2.0.2".to_string(),
            violations: vec![
                Violation::FailOn(vec!["BSD License".to_string()]),
                Violation::NotAllowed(vec!["BSD License".to_string(), "MIT".to_string()]),
            ],
        };

        assert_eq!(
            failure.messages(),
            vec![
                "fail-on license BSD License was found for package django:2.0.2".to_string(),
                "license BSD License; MIT not in allow-only licenses was found for package django:2.0.2"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_verdict_pass() {
        assert!(Verdict::pass().is_pass());
        let failing = Verdict::from_failures(vec![PolicyFailure {
            package: "a".to_string(),
            version: "1".to_string(),
            violations: vec![Violation::FailOn(vec!["GPL".to_string()])],
        }]);
        assert!(!failing.is_pass());
        assert_eq!(failing.failures().len(), 1);
    }
}
