use crate::{ImageSummary, SectionSize};
use std::path::Path;

/// Two inputs describe "the same" image when their final path components
/// match case-insensitively, e.g. `out/x64/chrome.dll` and
/// `out/x86/Chrome.DLL`.
pub fn same_image_name(previous: &Path, current: &Path) -> bool {
    match (previous.file_name(), current.file_name()) {
        (Some(previous), Some(current)) => {
            previous.to_string_lossy().to_lowercase() == current.to_string_lossy().to_lowercase()
        }
        _ => false,
    }
}

/// Renders the section-by-section memory-size delta between two parses of
/// the same image. Disk sizes are not compared. Name mismatches are expected
/// when comparing 32-bit and 64-bit builds, or when one binary pulls in code
/// that defines custom sections; such sections surface as whole-size deltas.
///
/// Matching is a first-match linear scan by name, so with duplicate section
/// names only the first occurrence on the other side is ever matched. That
/// ambiguity is kept as-is for output compatibility.
pub fn format_memory_diff(previous: &ImageSummary, current: &ImageSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Memory size change from {} to {}\n",
        previous.path.display(),
        current.path.display()
    ));

    let mut total: i64 = 0;
    for section in &current.sections {
        let mut delta = section.mem_size as i64;
        if let Some(matched) = find_section(&previous.sections, &section.name) {
            delta -= previous.sections[matched].mem_size as i64;
        }
        total += delta;
        if delta != 0 {
            out.push_str(&format!(
                "{:>12}: {:>7} bytes change\n",
                section.name, delta
            ));
        }
    }

    // Sections present only in the previous image count as fully removed.
    for section in &previous.sections {
        if find_section(&current.sections, &section.name).is_none() {
            let delta = -(section.mem_size as i64);
            total += delta;
            if delta != 0 {
                out.push_str(&format!(
                    "{:>12}: {:>7} bytes change\n",
                    section.name, delta
                ));
            }
        }
    }

    out.push_str(&format!("Total change: {total:>7} bytes\n"));
    out
}

fn find_section(sections: &[SectionSize], name: &str) -> Option<usize> {
    sections.iter().position(|section| section.name == name)
}
