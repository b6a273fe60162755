use super::license_extractor::has_known_license;
use crate::license_audit::domain::{
    Aggregation, MatchMode, PolicyFailure, PolicySpec, ResolvedPackage, Verdict, Violation,
};

/// PolicyEvaluator - Applies fail-on and allow-only rules to resolved packages
///
/// Evaluation has no side effects; the caller decides what a failing
/// verdict means for the process.
pub struct PolicyEvaluator;

impl PolicyEvaluator {
    /// Evaluates every package in order
    ///
    /// With `Aggregation::FailFast` evaluation stops at the first failing
    /// package, otherwise all failures are collected in input order.
    pub fn evaluate(packages: &[ResolvedPackage], spec: &PolicySpec) -> Verdict {
        if spec.is_empty() {
            return Verdict::pass();
        }

        let mut failures = Vec::new();
        for package in packages {
            if let Some(failure) = Self::check_package(package, spec) {
                failures.push(failure);
                if spec.aggregation() == Aggregation::FailFast {
                    break;
                }
            }
        }
        Verdict::from_failures(failures)
    }

    /// Checks one package against both rule lists
    pub fn check_package(package: &ResolvedPackage, spec: &PolicySpec) -> Option<PolicyFailure> {
        let licenses = package.licenses();
        let names: Vec<&str> = licenses.iter().collect();
        let mode = spec.match_mode();
        let mut violations = Vec::new();

        if !spec.fail_on().is_empty() {
            let offending: Vec<&str> = names
                .iter()
                .copied()
                .filter(|name| matches_any(mode, name, spec.fail_on()))
                .collect();
            if !offending.is_empty() {
                violations.push(Violation::FailOn(sorted_unique(offending)));
            }
        }

        if !spec.allow_only().is_empty() {
            let uncommon: Vec<&str> = names
                .iter()
                .copied()
                .filter(|name| !matches_any(mode, name, spec.allow_only()))
                .collect();
            if !has_known_license(licenses) || uncommon.len() == names.len() {
                violations.push(Violation::NotAllowed(sorted_unique(names.clone())));
            }
        }

        if violations.is_empty() {
            None
        } else {
            Some(PolicyFailure {
                package: package.name().to_string(),
                version: package.version().to_string(),
                violations,
            })
        }
    }
}

fn matches_any(mode: MatchMode, license: &str, literals: &[String]) -> bool {
    literals.iter().any(|literal| mode.matches(license, literal))
}

fn sorted_unique(mut names: Vec<&str>) -> Vec<String> {
    names.sort_unstable();
    names.dedup();
    names.into_iter().map(str::to_string).collect()
}
