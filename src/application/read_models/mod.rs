//! Read models for CQRS-lite pattern
//!
//! This module contains the view-optimized table that formatters render,
//! a denormalized representation of the audit response.

mod report_table;
mod report_table_builder;

pub use report_table::ReportTable;
pub use report_table_builder::{
    ReportTableBuilder, COLUMN_COUNT, COLUMN_LICENSE, COLUMN_LICENSE_CLASSIFIER,
    COLUMN_LICENSE_METADATA, COLUMN_NAME, COLUMN_VERSION,
};
