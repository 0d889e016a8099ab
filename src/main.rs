use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;

use tagbox::cli::{process, summary_lines, CliArgs, OutputFormat};

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    // A trailing newline from the shell is not part of the message
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    tagbox::tracing::init(args.log);

    let config = args.text_box_config()?;
    let warning_threshold = config.warning_threshold;
    let text = match args.text() {
        Some(text) => text,
        None => read_stdin()?,
    };

    let outcome = process(config, text, args.submit);
    if let Some(rejection) = outcome.rejection {
        eprintln!("Not submitted: {}", rejection);
    }

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome.snapshot)
                .context("Failed to encode snapshot")?;
            println!("{}", json);
        }
        OutputFormat::Summary => {
            for line in summary_lines(&outcome.snapshot, warning_threshold) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
