use crate::SectionSize;
use thiserror::Error;

/// Start of a section-header block in dumpbin output, followed by the
/// section's numeric index.
const SECTION_HEADER_MARKER: &str = "SECTION HEADER #";

const NAME_TOKEN: &str = "name";
const MEM_SIZE_TOKEN: &str = "virtual size";
const DISK_SIZE_TOKEN: &str = "size of raw data";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("section header line should contain '{token}' exactly once: '{line}'")]
    MalformedSection { token: &'static str, line: String },
    #[error("invalid hexadecimal size '{value}' in line '{line}'")]
    NumericParse { value: String, line: String },
}

enum State {
    Idle,
    InBlock(Vec<String>),
}

/// Parses the stdout text of `dumpbin /nopdb /headers` into the ordered list
/// of per-section sizes. Section order and duplicate names are preserved as
/// emitted. Lines outside a section-header block are ignored, and a trailing
/// block cut short by end of input is silently discarded; a structurally
/// wrong block is an error, since it means the dumpbin output layout has
/// changed incompatibly.
pub fn parse_headers(text: &str) -> Result<Vec<SectionSize>, ParseError> {
    let mut sections = Vec::new();
    let mut state = State::Idle;

    for line in text.lines() {
        if line.starts_with(SECTION_HEADER_MARKER) {
            // The four lines of interest follow the marker immediately. A
            // marker seen mid-block restarts accumulation.
            state = State::InBlock(Vec::new());
            continue;
        }

        let State::InBlock(buffer) = &mut state else {
            continue;
        };
        buffer.push(line.trim().to_string());
        if buffer.len() == 4 {
            sections.push(interpret_block(buffer)?);
            state = State::Idle;
        }
    }

    Ok(sections)
}

/// Positional block layout: name, virtual size, virtual address (unused
/// here), size of raw data.
fn interpret_block(lines: &[String]) -> Result<SectionSize, ParseError> {
    require_token_once(&lines[0], NAME_TOKEN)?;
    require_token_once(&lines[1], MEM_SIZE_TOKEN)?;
    require_token_once(&lines[3], DISK_SIZE_TOKEN)?;

    let name = first_token(&lines[0]).to_string();
    let mem_size = parse_hex(first_token(&lines[1]), &lines[1])?;
    let disk_size = parse_hex(first_token(&lines[3]), &lines[3])?;
    Ok(SectionSize {
        name,
        mem_size,
        disk_size,
    })
}

fn require_token_once(line: &str, token: &'static str) -> Result<(), ParseError> {
    if line.matches(token).count() != 1 {
        return Err(ParseError::MalformedSection {
            token,
            line: line.to_string(),
        });
    }
    Ok(())
}

fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

fn parse_hex(value: &str, line: &str) -> Result<u64, ParseError> {
    u64::from_str_radix(value, 16).map_err(|_| ParseError::NumericParse {
        value: value.to_string(),
        line: line.to_string(),
    })
}
