//! Core metadata parsing for installed distributions
//!
//! `METADATA` and `PKG-INFO` files are RFC 822 style header blocks. A
//! header value continues on following lines that start with whitespace,
//! and the first blank line ends the headers.

use crate::license_audit::domain::{PackageRecord, UNKNOWN_LICENSE};
use crate::shared::Result;

/// Header fields of one distribution's core metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub maintainer: Option<String>,
    pub maintainer_email: Option<String>,
    pub home_page: Option<String>,
    pub project_urls: Vec<(String, String)>,
    pub license_expression: Option<String>,
    pub license: Option<String>,
    pub classifiers: Vec<String>,
    pub license_files: Vec<String>,
}

impl CoreMetadata {
    /// URL of the project home page
    ///
    /// `Home-page` wins; otherwise the `Project-URL` entry labelled
    /// `Homepage` is used.
    pub fn homepage(&self) -> Option<&str> {
        self.home_page.as_deref().or_else(|| {
            self.project_urls
                .iter()
                .find(|(label, _)| is_homepage_label(label))
                .map(|(_, url)| url.as_str())
        })
    }

    /// License field, preferring the SPDX `License-Expression` header
    pub fn license_field(&self) -> Option<&str> {
        self.license_expression
            .as_deref()
            .or(self.license.as_deref())
    }

    /// Builds the package record for these headers
    ///
    /// # Errors
    /// Returns an error if `Name` or `Version` is missing or invalid
    pub fn into_record(self) -> Result<PackageRecord> {
        let homepage = self.homepage().map(str::to_string);
        let license = self.license_field().map(str::to_string);

        let name = self
            .name
            .ok_or_else(|| anyhow::anyhow!("Missing 'Name' header"))?;
        let version = self
            .version
            .ok_or_else(|| anyhow::anyhow!("Missing 'Version' header"))?;

        let mut record = PackageRecord::new(name, version)?.with_classifiers(self.classifiers);

        if let Some(author) = self.author.or(self.author_email) {
            record = record.with_author(author);
        }
        if let Some(maintainer) = self.maintainer.or(self.maintainer_email) {
            record = record.with_maintainer(maintainer);
        }
        if let Some(url) = homepage {
            record = record.with_url(url);
        }
        if let Some(summary) = self.summary {
            record = record.with_description(summary);
        }
        if let Some(license) = license {
            record = record.with_license(license);
        }

        Ok(record)
    }
}

fn is_homepage_label(label: &str) -> bool {
    let label: String = label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    label == "homepage" || label == "home"
}

/// Parses the header block of a core metadata file
///
/// Unknown headers are ignored. Values equal to `UNKNOWN` (written by old
/// packaging tools for absent fields) and empty values are treated as absent.
pub fn parse_metadata(content: &str) -> CoreMetadata {
    let mut metadata = CoreMetadata::default();

    for (key, value) in header_fields(content) {
        let single = non_placeholder(&value);
        match key.to_ascii_lowercase().as_str() {
            "name" => metadata.name = single,
            "version" => metadata.version = single,
            "summary" => metadata.summary = single,
            "author" => metadata.author = single,
            "author-email" => metadata.author_email = single,
            "maintainer" => metadata.maintainer = single,
            "maintainer-email" => metadata.maintainer_email = single,
            "home-page" => metadata.home_page = single,
            "license" => metadata.license = single,
            "license-expression" => metadata.license_expression = single,
            "classifier" => metadata.classifiers.extend(single),
            "license-file" => metadata.license_files.extend(single),
            "project-url" => {
                if let Some((label, url)) = value.split_once(',') {
                    metadata
                        .project_urls
                        .push((label.trim().to_string(), url.trim().to_string()));
                }
            }
            _ => {}
        }
    }

    metadata
}

/// Unfolds the header block into `(key, value)` pairs
fn header_fields(content: &str) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            break;
        }

        if line.starts_with(' ') || line.starts_with('\t') {
            // Continuation of the previous header
            if let Some((_, value)) = fields.last_mut() {
                let continued = line.trim_start();
                let continued = continued.strip_prefix('|').unwrap_or(continued);
                value.push('\n');
                value.push_str(continued);
            }
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            fields.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    fields
}

fn non_placeholder(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == UNKNOWN_LICENSE {
        None
    } else {
        Some(value.to_string())
    }
}
