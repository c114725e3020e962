//! Toolshelf terminal browser - main entry point.
//!
//! Drives a `BrowseSession` over a JSON catalog file:
//! - `list`: filtered, paginated card listing with category badges
//! - `random`: "surprise me" pick
//! - `counts`: category badge counts
//! - `visit-count`: bump and print the cosmetic visitor counter

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolshelf_core::browse::{BrowseSession, CategoryFilter};
use toolshelf_core::catalog::Catalog;
use toolshelf_core::counter::{FileStore, VisitorCounter};
use toolshelf_core::render::Frame;
use toolshelf_core::Config;

#[derive(Parser)]
#[command(name = "toolshelf", version, about = "Browse a tool catalog from the terminal")]
struct Cli {
    /// Optional JSON config file; defaults apply otherwise.
    #[arg(long, global = true, env = "TOOLSHELF_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog entries matching a category and/or search text.
    List {
        /// Catalog JSON file.
        #[arg(long)]
        catalog: PathBuf,

        /// Category label ("All" for no restriction).
        #[arg(long, default_value = "All")]
        category: String,

        /// Free-text search over names and descriptions.
        #[arg(long, default_value = "")]
        search: String,

        /// How many pages to reveal.
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Pick one random entry and print its URL.
    Random {
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Print per-category counts.
    Counts {
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Bump and print the visitor counter.
    VisitCount {
        /// Counter state file.
        #[arg(long, default_value = "toolshelf-visits.json")]
        state_file: PathBuf,
    },
}

fn main() -> toolshelf_core::Result<()> {
    toolshelf_core::observability::init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::List {
            catalog,
            category,
            search,
            pages,
        } => {
            let catalog = Catalog::from_json_file(catalog)?;
            tracing::info!(records = catalog.len(), "catalog loaded");

            let mut session = BrowseSession::new(catalog, config);
            session.set_category(CategoryFilter::named(category));
            let mut frame = session.set_search(search);
            for _ in 1..pages {
                frame = session.load_more();
            }
            print_frame(&frame);
        }
        Command::Random { catalog } => {
            let catalog = Catalog::from_json_file(catalog)?;
            let session = BrowseSession::new(catalog, config);
            let action = session.surprise_me(&mut rand::thread_rng())?;
            println!("{}", action.url);
        }
        Command::Counts { catalog } => {
            let catalog = Catalog::from_json_file(catalog)?;
            let session = BrowseSession::new(catalog, config);
            let frame = session.frame();
            println!("All: {}", frame.all_count);
            for badge in &frame.badges {
                println!("{}: {}", badge.label, badge.count);
            }
        }
        Command::VisitCount { state_file } => {
            let mut counter = VisitorCounter::new(FileStore::new(state_file), config.counter);
            println!("{}", counter.bump(&mut rand::thread_rng()));
        }
    }

    Ok(())
}

fn print_frame(frame: &Frame) {
    if frame.no_results {
        println!("No tools match the current filters.");
        return;
    }

    for view in &frame.views {
        let hot = if view.hot { " [HOT]" } else { "" };
        println!("{} ({}){}", view.name, view.category, hot);
        println!("  {}", view.description);
        println!("  visit: {}", view.visit.href);
        println!("  image: {}", view.image.src());
    }

    println!();
    println!("{} of {} shown", frame.views.len(), frame.total_matches);
    if let Some(load_more) = &frame.load_more {
        println!("{}", load_more.label());
    }
}
