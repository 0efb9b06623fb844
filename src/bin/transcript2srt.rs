use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use transcriptsrt::{convert_batch, FileOutcome, LocalDirectory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Creates .srt files from the .txt transcripts in a directory
#[derive(Parser, Debug)]
#[command(name = "transcript2srt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the .txt transcripts; subtitles are written next to them
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Do not print the usage banner
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    if !args.quiet {
        print_intro_text();
    }

    let directory = LocalDirectory::new(&args.dir);
    println!("Converting...");
    let report = match convert_batch(&directory, &directory) {
        Ok(report) => report,
        Err(e) => {
            println!("Error reading files in {}", directory.root().display());
            println!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    for entry in &report.entries {
        match &entry.outcome {
            FileOutcome::Converted { target } => println!("Created {}", target),
            FileOutcome::SkippedEmpty => {}
            FileOutcome::SkippedParseError(e) => {
                println!("Ignoring file {}: {}", entry.source, e);
            }
            FileOutcome::SkippedIo(e) => {
                println!("Error converting file {}: {}", entry.source, e);
            }
        }
    }

    if report.nothing_converted() {
        println!("No files converted. Are there .txt files in this directory?");
    }
    ExitCode::SUCCESS
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "error".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_intro_text() {
    println!("transcript2srt v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("About:");
    println!("Creates .srt files from any .txt files in the given");
    println!("directory (the current directory by default).");
    println!();
    println!("Usage:");
    println!("1. Open a video in your browser.");
    println!("2. Press the Menu button (...) then Open Transcript.");
    println!("3. Copy the transcript text.");
    println!("4. Paste the text into a .txt file in this directory.");
    println!("5. Run transcript2srt");
    println!("6. The subtitles will be in this directory renamed with .srt");
    println!();
}
