use std::path::PathBuf;

mod diff;
mod parse;
mod report;
#[cfg(test)]
mod tests;

pub use diff::{format_memory_diff, same_image_name};
pub use parse::{ParseError, parse_headers};
pub use report::format_report;

/// Sizes of one section-header block as reported by dumpbin: the in-memory
/// (virtual) size and the on-disk (raw data) size, both in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSize {
    pub name: String,
    pub mem_size: u64,
    pub disk_size: u64,
}

/// Parsed sections of one image, in the order dumpbin emitted them, plus the
/// path the image was read from. The path's final component decides whether
/// two consecutive images are diffed against each other.
#[derive(Debug, Clone)]
pub struct ImageSummary {
    pub path: PathBuf,
    pub sections: Vec<SectionSize>,
}

impl ImageSummary {
    pub fn new(path: impl Into<PathBuf>, sections: Vec<SectionSize>) -> Self {
        Self {
            path: path.into(),
            sections,
        }
    }
}
