//! CLI tool that writes the Medicine King talk decks as PPTX files.

use anyhow::Result;
use clap::Parser;
use deckgen_cli::{run, Config, DEFAULT_WORKDIR};
use std::path::PathBuf;

/// Generate the general-audience and practitioner talk decks.
#[derive(Parser, Debug)]
#[command(name = "deckgen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the source texts and receiving the decks
    #[arg(short, long, default_value = DEFAULT_WORKDIR)]
    workdir: PathBuf,

    /// Article text file (default: inside workdir)
    #[arg(long)]
    article: Option<PathBuf>,

    /// Analysis summary text file (default: inside workdir)
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Output path of the general-audience deck
    #[arg(long)]
    general_out: Option<PathBuf>,

    /// Output path of the practitioner deck
    #[arg(long)]
    practitioner_out: Option<PathBuf>,

    /// Language tag for text runs
    #[arg(long)]
    lang: Option<String>,

    /// Re-read each written deck and check it
    #[arg(long)]
    verify: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::in_dir(&self.workdir);
        if let Some(path) = self.article {
            config.article_path = path;
        }
        if let Some(path) = self.summary {
            config.summary_path = path;
        }
        if let Some(path) = self.general_out {
            config.general_output = path;
        }
        if let Some(path) = self.practitioner_out {
            config.practitioner_output = path;
        }
        if let Some(lang) = self.lang {
            config.language = lang;
        }
        config.verify = self.verify;
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = args.into_config();
    log::debug!("{:?}", config);

    let written = run(&config)?;
    let report: Vec<String> = written
        .iter()
        .map(|path| format!("已輸出：{}", path.display()))
        .collect();
    println!("{}", report.join("\n"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_match_defaults() {
        let args = Args::parse_from(["deckgen"]);
        assert_eq!(args.into_config(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "deckgen",
            "--workdir",
            "/tmp/talk",
            "--summary",
            "/elsewhere/summary.txt",
            "--lang",
            "en-US",
            "--verify",
        ]);
        let config = args.into_config();

        assert_eq!(config.article_path, Config::in_dir("/tmp/talk").article_path);
        assert_eq!(config.summary_path, PathBuf::from("/elsewhere/summary.txt"));
        assert_eq!(config.language, "en-US");
        assert!(config.verify);
    }
}
