/// Filesystem adapters for reading installed distributions and writing reports
mod file_writer;
mod metadata_parser;
mod site_packages_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use metadata_parser::{parse_metadata, CoreMetadata};
pub use site_packages_reader::SitePackagesReader;
