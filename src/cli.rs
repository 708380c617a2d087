//! Command-line surface.
//!
//! Parses arguments into one typed [`SyncRequest`]; nothing below this
//! layer ever looks at strings to decide what to do.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use crate::sync::{ContentKind, Direction, SyncRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Topics,
    Tutorials,
    #[value(name = "english_topics")]
    EnglishTopics,
    #[value(name = "english_tutorials")]
    EnglishTutorials,
    All,
}

impl KindArg {
    fn kinds(self) -> Vec<ContentKind> {
        match self {
            KindArg::Topics => vec![ContentKind::Topics],
            KindArg::Tutorials => vec![ContentKind::Tutorials],
            KindArg::EnglishTopics => vec![ContentKind::EnglishTopics],
            KindArg::EnglishTutorials => vec![ContentKind::EnglishTutorials],
            KindArg::All => ContentKind::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "content-shuttle",
    about = "Shuttle content between a content store and a translation store"
)]
pub struct Args {
    /// Types of content to sync
    #[arg(short = 't', long = "types", value_enum)]
    pub types: KindArg,

    /// Push content from the content store to the translation store
    #[arg(long)]
    pub push: bool,

    /// Pull content from the translation store to the content store
    #[arg(long)]
    pub pull: bool,

    /// Content backend
    #[arg(long, default_value = "desk")]
    pub content: String,

    /// Translation backend
    #[arg(long, default_value = "transifex")]
    pub translation: String,

    /// Comma delimited list of locales to process
    #[arg(short = 'l', long, value_delimiter = ',')]
    pub locales: Vec<String>,

    /// Comma delimited list of content resource IDs to sync (tutorials only)
    #[arg(short = 'r', long, value_delimiter = ',')]
    pub resources: Vec<String>,

    /// Always push even if not out of date
    #[arg(long)]
    pub force: bool,
}

impl Args {
    pub fn into_request(self) -> Result<SyncRequest> {
        let Some(direction) = Direction::from_flags(self.push, self.pull) else {
            bail!("nothing to do: pass --push and/or --pull");
        };

        Ok(SyncRequest {
            kinds: self.types.kinds(),
            direction,
            locales: trimmed(self.locales),
            resources: trimmed(self.resources),
            force: self.force,
        })
    }
}

fn trimmed(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
