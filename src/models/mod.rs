pub mod error;
pub mod mapping_file;
pub mod report_format;
pub mod site_record;
pub mod summary;
