//! Command-line interface for reelcast.
//!
//! Thin presentation over the catalog store and query engine: every
//! command builds the configured backend, refreshes once, derives a view
//! and prints it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::adapters::{FixtureStore, RecordStore, RemoteStore, Session, StaticSession};
use crate::config::{BackendKind, Config};
use crate::domain::{CatalogStatus, ContentId, ContentRecord, ContentType, UserId};
use crate::publish::{publish_content, ContentDraft};
use crate::query;
use crate::store::CatalogStore;

/// reelcast - streaming content catalog browser
#[derive(Parser, Debug)]
#[command(name = "reelcast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (YAML); env vars REELCAST_* override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the full catalog, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// List the featured (hero carousel) subset
    Featured,

    /// Filter by genre chip ("All" and "Live" are special)
    Genre {
        /// Genre tag, exact match
        name: String,
    },

    /// Filter by content type
    Type {
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// Search titles, descriptions and genre tags
    Search {
        /// Query string; empty means no results
        query: String,
    },

    /// Show a single record by id
    Show {
        id: String,
    },

    /// Submit a new content record (media URLs must already be resolved)
    Publish {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long, value_enum)]
        kind: KindArg,

        /// Genre tags, comma-separated
        #[arg(long)]
        genre: String,

        #[arg(long)]
        video_url: String,

        #[arg(long)]
        thumbnail: String,

        #[arg(long)]
        duration: Option<String>,

        /// Languages, comma-separated (defaults to English)
        #[arg(long)]
        language: Option<String>,
    },

    /// Show resolved configuration
    Config,
}

/// Content type as a CLI argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum KindArg {
    Movie,
    Series,
    Podcast,
    Live,
}

impl From<KindArg> for ContentType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Movie => ContentType::Movie,
            KindArg::Series => ContentType::Series,
            KindArg::Podcast => ContentType::Podcast,
            KindArg::Live => ContentType::Live,
        }
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        if let Commands::Config = &self.command {
            println!("{}", serde_yaml::to_string(&config)?);
            return Ok(());
        }

        match config.backend {
            BackendKind::Fixture => {
                let store =
                    CatalogStore::with_fetch_timeout(FixtureStore::with_sample_data(), config.fetch_timeout());
                run_command(store, &config, self.command).await
            }
            BackendKind::Remote => {
                let remote = config
                    .remote
                    .clone()
                    .context("remote backend selected but no remote settings given")?;
                let store =
                    CatalogStore::with_fetch_timeout(RemoteStore::new(remote), config.fetch_timeout());
                run_command(store, &config, self.command).await
            }
        }
    }
}

async fn run_command<S: RecordStore>(
    store: CatalogStore<S>,
    config: &Config,
    command: Commands,
) -> Result<()> {
    let snapshot = store.refresh().await;
    if let CatalogStatus::Error(message) = &snapshot.status {
        eprintln!("warning: refresh incomplete: {message}");
    }

    match command {
        Commands::List { limit } => {
            for record in snapshot.all.iter().take(limit) {
                print_record(record);
            }
        }
        Commands::Featured => {
            for record in &snapshot.featured {
                print_record(record);
            }
        }
        Commands::Genre { name } => {
            for record in query::by_genre(&snapshot.all, &name) {
                print_record(record);
            }
        }
        Commands::Type { kind } => {
            for record in query::by_type(&snapshot.all, kind.into()) {
                print_record(record);
            }
        }
        Commands::Search { query: q } => {
            // No query means no results, not the full catalog
            if !q.trim().is_empty() {
                for record in query::search(&snapshot.all, &q) {
                    print_record(record);
                }
            }
        }
        Commands::Show { id } => {
            match store.content_by_id(&ContentId::new(id)).await? {
                Some(record) => print_record_detail(&record),
                None => println!("not found"),
            }
        }
        Commands::Publish {
            title,
            description,
            kind,
            genre,
            video_url,
            thumbnail,
            duration,
            language,
        } => {
            let session = session_from(config);
            let creator = session
                .current_user()
                .context("publishing requires a signed-in user (set user_id)")?;

            let draft = ContentDraft {
                title,
                description,
                content_type: Some(kind.into()),
                genre: split_tags(&genre),
                video_url: Some(video_url),
                thumbnail_url: Some(thumbnail),
                duration,
                language: language.as_deref().map(split_tags).unwrap_or_default(),
                ..ContentDraft::default()
            };

            publish_content(store.backend(), draft, &creator).await?;
            println!("published");
        }
        Commands::Config => unreachable!("handled before backend construction"),
    }

    Ok(())
}

fn session_from(config: &Config) -> StaticSession {
    match &config.user_id {
        Some(id) => StaticSession::signed_in(UserId::new(id.clone())),
        None => StaticSession::signed_out(),
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn print_record(record: &ContentRecord) {
    let extras = [
        record.year.map(|y| y.to_string()),
        record.duration.clone(),
        record.rating.map(|r| format!("{r:.1}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ");

    println!(
        "{:<28} [{}] {}  {}",
        record.id.as_str(),
        record.content_type,
        record.title,
        if extras.is_empty() {
            String::new()
        } else {
            format!("({extras})")
        }
    );
}

fn print_record_detail(record: &ContentRecord) {
    print_record(record);
    println!("  genres: {}", record.genre.join(", "));
    println!("  {}", record.description);
    if let Some(url) = &record.video_url {
        println!("  media: {url}");
    }
}
