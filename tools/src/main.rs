use anyhow::{Result, bail};
use clap::Parser;
use retype_core::{WordSequence, compare};
use std::path::PathBuf;

/// Compare a typed transcript against a reference article and print
/// the word-level comparison document as JSON.
#[derive(Parser)]
struct Args {
    /// Reference article text (inline)
    #[arg(long, conflicts_with = "article_file")]
    article: Option<String>,

    /// Reference article text (file)
    #[arg(long)]
    article_file: Option<PathBuf>,

    /// Transcript text (inline)
    #[arg(long, conflicts_with = "user_file")]
    user: Option<String>,

    /// Transcript text (file)
    #[arg(long)]
    user_file: Option<PathBuf>,

    /// Pretty-print the JSON document
    #[arg(long)]
    pretty: bool,
}

fn read_input(inline: Option<String>, file: Option<PathBuf>, side: &str) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => bail!("no {side} text: pass --{side} or --{side}-file"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let article = read_input(args.article, args.article_file, "article")?;
    let user = read_input(args.user, args.user_file, "user")?;

    let result = compare(
        WordSequence::from_text(&user),
        WordSequence::from_text(&article),
    );

    let json = if args.pretty {
        result.to_json_pretty()?
    } else {
        result.to_json()?
    };
    println!("{}", json);

    Ok(())
}
