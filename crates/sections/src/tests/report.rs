use super::*;
use std::path::Path;

#[test]
fn file_size_header_is_decimal_mb_with_six_digits() {
    let out = format_report(Path::new("out/release/chrome.dll"), 41_190_912, &[]);
    assert!(out.starts_with("Size of out/release/chrome.dll is 41.190912 MB\n"));
}

#[test]
fn column_header_is_fixed() {
    let out = format_report(Path::new("chrome.dll"), 0, &[]);
    assert!(out.contains("      name:   mem size  ,  disk size\n"));
}

#[test]
fn equal_sizes_print_memory_size_only() {
    let sections = vec![section(".text", 0x1F00000, 0x1F00000)];
    let out = format_report(Path::new("chrome.dll"), 0x1F00000, &sections);
    assert!(out.contains("     .text: 32.505856 MB\n"));
    assert!(!out.contains("32.505856 MB,"));
}

#[test]
fn disk_size_is_hidden_at_exactly_512_bytes_difference() {
    let sections = vec![section(".data", 1000, 1512)];
    let out = format_report(Path::new("chrome.dll"), 2000, &sections);
    assert!(out.contains("     .data:  0.001000 MB\n"));
    assert!(!out.contains("0.001512"));
}

#[test]
fn disk_size_is_shown_above_512_bytes_difference() {
    let sections = vec![section(".data", 1000, 1513)];
    let out = format_report(Path::new("chrome.dll"), 2000, &sections);
    assert!(out.contains("     .data:  0.001000 MB,  0.001513 MB\n"));
}

#[test]
fn small_sections_keep_six_fraction_digits() {
    let sections = vec![section(".tls", 25, 25)];
    let out = format_report(Path::new("chrome.dll"), 100, &sections);
    assert!(out.contains("      .tls:  0.000025 MB\n"));
}

#[test]
fn report_lists_sections_in_parse_order() {
    let sections = vec![
        section(".text", 33_199_959, 33_200_000),
        section(".data", 713_864, 270_336),
        section(".reloc", 1_410_172, 1_410_560),
    ];
    let out = format_report(Path::new("chrome.dll"), 41_190_912, &sections);
    let expected = [
        "Size of chrome.dll is 41.190912 MB",
        "      name:   mem size  ,  disk size",
        "     .text: 33.199959 MB",
        "     .data:  0.713864 MB,  0.270336 MB",
        "    .reloc:  1.410172 MB",
    ]
    .map(|line| format!("{line}\n"))
    .concat();
    assert_eq!(out, expected);
}
