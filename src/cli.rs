use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::adapters::outbound::python::DEFAULT_PYTHON;
use crate::application::dto::{AuditRequest, DisplayOptions, OutputFormat};
use crate::config::ConfigFile;
use crate::license_audit::domain::{
    Aggregation, FilterSpec, LicenseSource, MatchMode, PolicySpec, SortKey,
};
use crate::license_audit::policies::{system_exclusions, SpdxMode, SYSTEM_PACKAGES};
use crate::license_audit::services::CodePage;
use crate::shared::error::LicenseAuditError;
use crate::shared::Result;

/// Report and enforce the licenses of installed Python packages
#[derive(Parser, Debug)]
#[command(name = "py-licenses")]
#[command(version)]
#[command(about = "Report and enforce the licenses of installed Python packages", long_about = None)]
pub struct Args {
    /// Python executable whose site-packages are audited (default: python3)
    #[arg(long, value_name = "EXEC")]
    pub python: Option<PathBuf>,

    /// Site-packages directory to scan instead of asking the interpreter
    /// Can be specified multiple times: --site-packages a --site-packages b
    #[arg(long = "site-packages", value_name = "DIR")]
    pub site_packages: Vec<PathBuf>,

    /// Configuration file (YAML, or TOML with an optional [tool.py-licenses] table)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to find license information: meta, classifier, mixed, all
    #[arg(long, value_name = "SOURCE")]
    pub from: Option<String>,

    /// Order by column: count, license, name, author, maintainer, url
    #[arg(short, long, value_name = "COL")]
    pub order: Option<String>,

    /// Output format: plain, plain-vertical, markdown, rst, confluence, html, json, json-license-finder, csv
    #[arg(short, long, value_name = "STYLE")]
    pub format: Option<String>,

    /// Dump a summary of licenses and the number of packages using each
    #[arg(long)]
    pub summary: bool,

    /// Save the report to a file instead of printing it
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Ignore packages by name or name:version
    #[arg(short = 'i', long, value_name = "PKG", num_args = 1..)]
    pub ignore_packages: Vec<String>,

    /// Only include the given packages, by name or name:version
    #[arg(short, long, value_name = "PKG", num_args = 1..)]
    pub packages: Vec<String>,

    /// Include the tool itself and packaging tools (pip, setuptools, wheel)
    #[arg(short = 's', long)]
    pub with_system: bool,

    /// Show the author column
    #[arg(short = 'a', long)]
    pub with_authors: bool,

    /// Show the maintainer column
    #[arg(long)]
    pub with_maintainers: bool,

    /// Show the URL column
    #[arg(short = 'u', long)]
    pub with_urls: bool,

    /// Show the description column
    #[arg(short = 'd', long)]
    pub with_description: bool,

    /// Hide the version column
    #[arg(long)]
    pub no_version: bool,

    /// Show the license file path and text columns
    #[arg(short = 'l', long)]
    pub with_license_file: bool,

    /// Hide the license file path column (requires --with-license-file)
    #[arg(long)]
    pub no_license_path: bool,

    /// Show the notice file text column (requires --with-license-file)
    #[arg(long)]
    pub with_notice_file: bool,

    /// Drop characters that cannot be encoded in the filter code page
    #[arg(long)]
    pub filter_strings: bool,

    /// Code page used by --filter-strings: ascii, latin1, utf-8
    #[arg(long, value_name = "CODE")]
    pub filter_code_page: Option<String>,

    /// Fail (exit 1) if any of these semicolon-separated licenses is found
    #[arg(long, value_name = "LICENSES")]
    pub fail_on: Option<String>,

    /// Fail (exit 1) unless every license is in this semicolon-separated list
    #[arg(long, value_name = "LICENSES")]
    pub allow_only: Option<String>,

    /// Match --fail-on/--allow-only entries as substrings
    #[arg(long)]
    pub partial_match: bool,

    /// Report every failing package instead of stopping at the first
    #[arg(long)]
    pub collect_all_failures: bool,

    /// Split SPDX OR expressions into separate licenses
    #[arg(long)]
    pub spdx: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges these arguments over a configuration file and validates the result
    ///
    /// Options given on the command line win; everything else falls back to
    /// the file and then to built-in defaults.
    ///
    /// # Errors
    /// Returns `InvalidOption` for unknown keywords and `IncompatibleOptions`
    /// for option combinations that need another option.
    pub fn into_settings(self, config: ConfigFile) -> Result<Settings> {
        let flag = |cli: bool, file: Option<bool>| cli || file.unwrap_or(false);

        let source: LicenseSource = parse_keyword(
            "--from",
            self.from.or(config.from),
            LicenseSource::VARIANTS,
        )?;
        let order: SortKey =
            parse_keyword("--order", self.order.or(config.order), SortKey::VARIANTS)?;
        let format: OutputFormat = parse_keyword(
            "--format",
            self.format.or(config.format),
            OutputFormat::VARIANTS,
        )?;
        let code_page: CodePage = parse_keyword(
            "--filter-code-page",
            self.filter_code_page.or(config.filter_code_page),
            CodePage::VARIANTS,
        )?;

        let display = DisplayOptions {
            source,
            summary: flag(self.summary, config.summary),
            with_authors: flag(self.with_authors, config.with_authors),
            with_maintainers: flag(self.with_maintainers, config.with_maintainers),
            with_urls: flag(self.with_urls, config.with_urls),
            with_description: flag(self.with_description, config.with_description),
            no_version: flag(self.no_version, config.no_version),
            with_license_file: flag(self.with_license_file, config.with_license_file),
            no_license_path: flag(self.no_license_path, config.no_license_path),
            with_notice_file: flag(self.with_notice_file, config.with_notice_file),
        };
        let filter_strings = flag(self.filter_strings, config.filter_strings);

        if display.no_license_path && !display.with_license_file {
            return Err(incompatible("--no-license-path", "--with-license-file"));
        }
        if display.with_notice_file && !display.with_license_file {
            return Err(incompatible("--with-notice-file", "--with-license-file"));
        }
        if code_page != CodePage::Latin1 && !filter_strings {
            return Err(incompatible("--filter-code-page", "--filter-strings"));
        }

        let include = FilterSpec::parse(prefer_cli(self.packages, config.packages))?;
        let exclude = FilterSpec::parse(prefer_cli(self.ignore_packages, config.ignore_packages))?;
        let default_exclusions = if flag(self.with_system, config.with_system) {
            FilterSpec::default()
        } else {
            system_exclusions(SYSTEM_PACKAGES)?
        };

        let mut policy = PolicySpec::new();
        if let Some(fail_on) = self.fail_on.or(config.fail_on) {
            policy = policy.with_fail_on(&fail_on);
        }
        if let Some(allow_only) = self.allow_only.or(config.allow_only) {
            policy = policy.with_allow_only(&allow_only);
        }
        if flag(self.partial_match, config.partial_match) {
            policy = policy.with_match_mode(MatchMode::Partial);
        }
        if flag(self.collect_all_failures, config.collect_all_failures) {
            policy = policy.with_aggregation(Aggregation::CollectAll);
        }

        let request = AuditRequest::new()
            .with_source(source)
            .with_spdx(SpdxMode::from_flag(flag(self.spdx, config.spdx)))
            .with_order(order)
            .with_summary(display.summary)
            .with_include(include)
            .with_exclude(exclude)
            .with_default_exclusions(default_exclusions)
            .with_include_files(display.include_files())
            .with_code_page(filter_strings.then_some(code_page))
            .with_policy(policy);

        Ok(Settings {
            python: self
                .python
                .or(config.python)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PYTHON)),
            site_packages: prefer_cli(self.site_packages, config.site_packages),
            format,
            output_file: self.output_file.or(config.output_file),
            display,
            request,
        })
    }
}

/// Fully resolved options for one run
#[derive(Debug)]
pub struct Settings {
    pub python: PathBuf,
    pub site_packages: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
    pub display: DisplayOptions,
    pub request: AuditRequest,
}

impl Settings {
    /// Warnings about option combinations that are accepted but partly ignored
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.display.with_license_file && !self.format.is_json() {
            warnings.push(
                "Due to the length of these fields, this option is best paired with --format=json.",
            );
        }
        if self.display.summary && (self.display.with_authors || self.display.with_urls) {
            warnings.push(
                "When using this option, only --order=count or --order=license has an effect for the --order option. And using --with-authors and --with-urls will be ignored.",
            );
        }
        warnings
    }
}

fn prefer_cli<T>(cli: Vec<T>, file: Option<Vec<T>>) -> Vec<T> {
    if cli.is_empty() {
        file.unwrap_or_default()
    } else {
        cli
    }
}

fn parse_keyword<T>(option: &str, value: Option<String>, expected: &str) -> Result<T>
where
    T: FromStr<Err = String> + Default,
{
    match value {
        None => Ok(T::default()),
        Some(value) => T::from_str(&value).map_err(|_| {
            LicenseAuditError::InvalidOption {
                option: option.to_string(),
                value,
                expected: expected.to_string(),
            }
            .into()
        }),
    }
}

fn incompatible(option: &str, required: &str) -> anyhow::Error {
    LicenseAuditError::IncompatibleOptions {
        option: option.to_string(),
        required: required.to_string(),
    }
    .into()
}
