use crate::SectionSize;
use std::path::Path;

/// The disk size is omitted when it is within this many bytes of the memory
/// size. Most sections match exactly on disk and in memory; the interesting
/// discrepancies come from zero-initialized data.
const DISK_SIZE_DISPLAY_THRESHOLD: u64 = 512;

/// Renders the per-image report: a file-size header, a column header, and
/// one line per section. Sizes are decimal MB (bytes / 1e6, six fraction
/// digits) so that large numbers stay readable while converting back to an
/// exact byte count stays trivial.
pub fn format_report(path: &Path, file_bytes: u64, sections: &[SectionSize]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Size of {} is {:.6} MB\n",
        path.display(),
        decimal_mb(file_bytes)
    ));
    out.push_str(&format!(
        "{:>10}:  {:>9}  ,  {:>9}\n",
        "name", "mem size", "disk size"
    ));

    for section in sections {
        if section.mem_size.abs_diff(section.disk_size) <= DISK_SIZE_DISPLAY_THRESHOLD {
            out.push_str(&format!(
                "{:>10}: {:9.6} MB\n",
                section.name,
                decimal_mb(section.mem_size)
            ));
        } else {
            out.push_str(&format!(
                "{:>10}: {:9.6} MB, {:9.6} MB\n",
                section.name,
                decimal_mb(section.mem_size),
                decimal_mb(section.disk_size)
            ));
        }
    }

    out
}

fn decimal_mb(bytes: u64) -> f64 {
    bytes as f64 / 1e6
}
