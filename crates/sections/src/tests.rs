use super::*;

mod report;

fn section(name: &str, mem_size: u64, disk_size: u64) -> SectionSize {
    SectionSize {
        name: name.to_string(),
        mem_size,
        disk_size,
    }
}

fn image(path: &str, sections: Vec<SectionSize>) -> ImageSummary {
    ImageSummary::new(path, sections)
}

fn header_block(index: usize, name: &str, mem_size: u64, disk_size: u64) -> String {
    format!(
        "SECTION HEADER #{index}\n   {name} name\n  {mem_size:X} virtual size\n 1CEF000 virtual address (11CEF000 to 122BBD55)\n  {disk_size:X} size of raw data\n 1CEE000 file pointer to raw data (01CEE000 to 022BADFF)\n       0 file pointer to relocation table\n       0 file pointer to line numbers\n       0 number of relocations\n       0 number of line numbers\n40000040 flags\n         Initialized Data\n         Read Only\n"
    )
}
