//! Articset CLI - Convert articulation CSV sheets to Logic Pro Articulation Sets
//!
//! ```bash
//! articset strings.csv    # writes strings.plist next to the input
//! articset                # converts artics.csv in the current directory
//! ```
//!
//! The sheet's first line is a header and is ignored. Every following line
//! holds exactly 20 comma-separated columns:
//!
//! 1. Articulation name
//! 2. Channel (1-16, 1-based)
//! 3. Symbol name, e.g. `staccato`, matching Logic's own symbol identifiers
//! 4. Input type (`Note On`, `Program`, ...) - blank means no switch
//! 5. Input selector (first MIDI data byte, e.g. the note number)
//! 6. Input value start (lowest second data byte, e.g. velocity)
//! 7. Input value end (highest second data byte)
//! 8. Input mode (`Permanent`, `Momentary`, ...)
//! 9-12. Output 1: type, channel (1-16), selector, value
//! 13-16. Output 2 (optional): type, channel, selector, value
//! 17-20. Output 3 (optional): type, channel, selector, value

use articset::{convert_records, parse_csv_file, ConvertError};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "articset")]
#[command(about = "Convert articulation CSV sheets to Logic Pro Articulation Set plists", long_about = None)]
struct Cli {
    /// Input CSV file
    #[arg(default_value = "artics.csv")]
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cmd_convert(&cli.input) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_convert(input: &Path) -> Result<(), ConvertError> {
    let records = parse_csv_file(input)?;
    for record in &records {
        println!("Articulation: {}", record.name);
    }

    let output = convert_records(&records, input)?;
    println!("Converted to {}", output.display());
    Ok(())
}
