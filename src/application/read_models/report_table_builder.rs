//! Builder for constructing ReportTable from the audit response
//!
//! This module decides the column layout and turns every resolved package
//! or license group into a row of display strings.

use super::report_table::ReportTable;
use crate::application::dto::{AuditResponse, DisplayOptions};
use crate::license_audit::domain::{
    AttachedFile, LicenseGroup, LicenseSource, ResolvedPackage, UNKNOWN_LICENSE,
};
use crate::license_audit::services::LicenseNormalizer;

pub const COLUMN_NAME: &str = "Name";
pub const COLUMN_VERSION: &str = "Version";
pub const COLUMN_LICENSE: &str = "License";
pub const COLUMN_LICENSE_METADATA: &str = "License-Metadata";
pub const COLUMN_LICENSE_CLASSIFIER: &str = "License-Classifier";
pub const COLUMN_AUTHOR: &str = "Author";
pub const COLUMN_MAINTAINER: &str = "Maintainer";
pub const COLUMN_URL: &str = "URL";
pub const COLUMN_DESCRIPTION: &str = "Description";
pub const COLUMN_LICENSE_FILE: &str = "LicenseFile";
pub const COLUMN_LICENSE_TEXT: &str = "LicenseText";
pub const COLUMN_NOTICE_TEXT: &str = "NoticeText";
pub const COLUMN_NOTICE_FILE: &str = "NoticeFile";
pub const COLUMN_COUNT: &str = "Count";

/// Builder for constructing ReportTable from the audit response
pub struct ReportTableBuilder;

impl ReportTableBuilder {
    /// Builds the table for either the package view or the summary view
    ///
    /// The summary view is used whenever the response carries license groups.
    pub fn build(response: &AuditResponse, options: &DisplayOptions) -> ReportTable {
        match &response.summary {
            Some(groups) => Self::build_summary(groups),
            None => Self::build_packages(&response.packages, options),
        }
    }

    /// Column headings for the package view, in display order
    pub fn columns(options: &DisplayOptions) -> Vec<&'static str> {
        if options.summary {
            return vec![COLUMN_COUNT, COLUMN_LICENSE];
        }

        let mut columns = vec![COLUMN_NAME];
        if !options.no_version {
            columns.push(COLUMN_VERSION);
        }

        if options.source == LicenseSource::All {
            columns.push(COLUMN_LICENSE_METADATA);
            columns.push(COLUMN_LICENSE_CLASSIFIER);
        } else {
            columns.push(COLUMN_LICENSE);
        }

        let optional = [
            (options.with_authors, COLUMN_AUTHOR),
            (options.with_maintainers, COLUMN_MAINTAINER),
            (options.with_urls, COLUMN_URL),
            (options.with_description, COLUMN_DESCRIPTION),
        ];
        columns.extend(
            optional
                .iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, column)| *column),
        );

        if options.with_license_file {
            if !options.no_license_path {
                columns.push(COLUMN_LICENSE_FILE);
            }
            columns.push(COLUMN_LICENSE_TEXT);
            if options.with_notice_file {
                columns.push(COLUMN_NOTICE_TEXT);
                if !options.no_license_path {
                    columns.push(COLUMN_NOTICE_FILE);
                }
            }
        }

        columns
    }

    fn build_summary(groups: &[LicenseGroup]) -> ReportTable {
        let mut table = ReportTable::new(vec![COLUMN_COUNT.to_string(), COLUMN_LICENSE.to_string()]);
        for group in groups {
            table.push_row(vec![group.count.to_string(), group.license.clone()]);
        }
        table
    }

    fn build_packages(packages: &[ResolvedPackage], options: &DisplayOptions) -> ReportTable {
        let columns = Self::columns(&DisplayOptions {
            summary: false,
            ..*options
        });
        let mut table = ReportTable::new(columns.iter().map(|c| c.to_string()).collect());

        for package in packages {
            let row = columns
                .iter()
                .map(|column| Self::cell(package, column))
                .collect();
            table.push_row(row);
        }
        table
    }

    fn cell(package: &ResolvedPackage, column: &str) -> String {
        let record = package.record();
        let value = match column {
            COLUMN_NAME => Some(record.name().to_string()),
            COLUMN_VERSION => Some(record.version().to_string()),
            COLUMN_LICENSE => Some(package.license_display().to_string()),
            COLUMN_LICENSE_METADATA => Some(
                LicenseNormalizer::normalize(package.metadata_licenses())
                    .display()
                    .to_string(),
            ),
            COLUMN_LICENSE_CLASSIFIER => Some(
                LicenseNormalizer::normalize(package.classifier_licenses())
                    .display()
                    .to_string(),
            ),
            COLUMN_AUTHOR => record.author().map(str::to_string),
            COLUMN_MAINTAINER => record.maintainer().map(str::to_string),
            COLUMN_URL => record.url().map(str::to_string),
            COLUMN_DESCRIPTION => record.description().map(str::to_string),
            COLUMN_LICENSE_FILE => first_path(record.license_files()),
            COLUMN_LICENSE_TEXT => first_text(record.license_files()),
            COLUMN_NOTICE_FILE => first_path(record.notice_files()),
            COLUMN_NOTICE_TEXT => first_text(record.notice_files()),
            _ => None,
        };
        value.unwrap_or_else(|| UNKNOWN_LICENSE.to_string())
    }
}

fn first_path(files: &[AttachedFile]) -> Option<String> {
    files.first().map(|file| file.path.display().to_string())
}

fn first_text(files: &[AttachedFile]) -> Option<String> {
    files.iter().find_map(|file| file.text.clone())
}
