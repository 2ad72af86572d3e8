use std::io::{self, BufRead};

use anyhow::{Error, Result};
use clap::{Parser, Subcommand};
use kvwire::{Envelope, MessageKind, codec};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build and inspect key-value protocol envelopes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]

enum Commands {
    /// Build an envelope and print its wire form.
    Encode {
        #[arg(short, long)]
        kind: MessageKind,
        #[arg(short, long)]
        src: String,
        #[arg(short, long)]
        dest: String,
        #[arg(short, long)]
        leader: Option<String>,
    },
    /// Decode one wire message and print its fields.
    Decode { message: String },
    /// Validate newline-delimited wire messages from stdin.
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encode {
            kind,
            src,
            dest,
            leader,
        } => {
            let envelope = match leader {
                Some(leader) => Envelope::with_leader(kind, src, dest, leader)?,
                None => Envelope::new(kind, src, dest)?,
            };
            println!("{}", codec::encode_to_string(&envelope));
        }
        Commands::Decode { message } => {
            let envelope = codec::decode_str(&message)?;
            println!("kind:   {}", envelope.kind());
            println!("src:    {}", envelope.source());
            println!("dest:   {}", envelope.destination());
            println!("leader: {}", envelope.leader_hint());
        }
        Commands::Check => check_stdin()?,
    }
    Ok(())
}

/// Validate every line from stdin, reporting bad ones without stopping.
fn check_stdin() -> Result<()> {
    let stdin = io::stdin().lock();
    let mut total = 0usize;
    let mut invalid = 0usize;
    for (number, line) in stdin.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        total += 1;
        if let Err(e) = codec::decode_str(&line) {
            invalid += 1;
            eprintln!("line {}: {}", number + 1, e);
        }
    }
    println!("checked {total} messages, {invalid} invalid");
    if invalid > 0 {
        return Err(Error::msg(format!(
            "{invalid} of {total} messages failed to decode"
        )));
    }
    Ok(())
}
