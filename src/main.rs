use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use pesum_sections::{
    ImageSummary, format_memory_diff, format_report, parse_headers, same_image_name,
};

#[derive(Debug, Parser)]
#[command(
    name = "pesum",
    version,
    about = "Summarize and diff PE section sizes via dumpbin",
    long_about = None,
    override_usage = "pesum <IMAGE>...",
    after_help = "Examples:\n  pesum chrome.dll\n  pesum chrome.dll original\\chrome.dll\n\nSizes are printed in decimal MB. When two consecutive images share a file\nname, a section-by-section memory-size diff is printed as well."
)]
struct Cli {
    /// PE image files to summarize, processed in order.
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.images.is_empty() {
        let mut command = Cli::command();
        command.print_help()?;
        println!();
        return Ok(());
    }

    let mut previous: Option<ImageSummary> = None;
    for path in &cli.images {
        previous = process_image(path, previous)?;
    }

    Ok(())
}

/// Handles one input image and returns the summary to carry into the next
/// iteration. A missing input is reported and skipped; the carried summary
/// is kept so later files can still diff against it.
fn process_image(path: &Path, previous: Option<ImageSummary>) -> Result<Option<ImageSummary>> {
    if !path.exists() {
        println!("{} does not exist!", path.display());
        return Ok(previous);
    }

    let file_bytes = std::fs::metadata(path)
        .with_context(|| format!("failed to stat '{}'", path.display()))?
        .len();

    let dump = run_dumpbin(path)?;
    let sections = parse_headers(&dump)
        .with_context(|| format!("unexpected dumpbin output for '{}'", path.display()))?;
    let current = ImageSummary::new(path, sections);

    print!("{}", format_report(path, file_bytes, &current.sections));
    println!();

    if let Some(previous) = &previous {
        if same_image_name(&previous.path, &current.path) {
            print!("{}", format_memory_diff(previous, &current));
        }
    }

    Ok(Some(current))
}

/// Invokes `dumpbin.exe /nopdb /headers "<path>"` and returns its stdout.
/// The undocumented /nopdb flag stops dumpbin from hitting symbol servers to
/// resolve the entrypoint name.
fn run_dumpbin(path: &Path) -> Result<String> {
    let output = match Command::new("dumpbin.exe")
        .arg("/nopdb")
        .arg("/headers")
        .arg(path)
        .output()
    {
        Ok(output) => output,
        Err(_) => bail!(
            "Cannot find dumpbin. Run \"C:\\Program Files (x86)\\Microsoft Visual Studio\\2017\\Professional\\VC\\Auxiliary\\Build\\vcvarsall.bat amd64\" or similar to add dumpbin to the path."
        ),
    };

    if !output.status.success() {
        bail!(
            "dumpbin exited with {} for '{}'",
            output.status,
            path.display()
        );
    }

    String::from_utf8(output.stdout)
        .with_context(|| format!("dumpbin output for '{}' is not valid UTF-8", path.display()))
}
