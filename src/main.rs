use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wiki_sync::{output, sync};

#[derive(Parser)]
#[command(name = "wiki-sync")]
#[command(about = "Sync an mkdocs documentation tree to a GitHub wiki checkout")]
#[command(long_about = "\
Sync an mkdocs documentation tree to a GitHub wiki checkout

Reads mkdocs.yml, walks its nav tree, and writes one wiki page per
navigation entry plus Home.md and _Sidebar.md. Internal links are
rewritten to flat wiki page names; relative image references become
absolute raw.githubusercontent.com URLs.

Expected layout:

  mkdocs.yml                   # site_name, site_description, docs_dir, nav
  docs/
  ├── index.md                 # becomes Home.md (front matter stripped)
  ├── guide/
  │   ├── intro.md             # nav: Intro → guide-intro.md
  │   └── advanced.md
  └── assets/
      └── diagram.png          # image refs rewritten to raw URLs
  wiki/                        # output checkout; .git preserved, rest replaced

Repository identity for image URLs comes from --repo, the
GITHUB_REPOSITORY environment variable, or the origin git remote, in
that order. Without mkdocs.yml every markdown file under the docs
directory becomes a top-level page; a config without a nav key
produces no pages beyond Home and the sidebar.

Problems are warnings, not errors: a missing page or unresolvable image
is reported and skipped, and the run completes.")]
#[command(version)]
struct Cli {
    /// Path to mkdocs.yml
    #[arg(long, default_value = "mkdocs.yml", global = true)]
    config: PathBuf,

    /// Wiki checkout to write into (its .git subdirectory is preserved)
    #[arg(long, default_value = "wiki", global = true)]
    output: PathBuf,

    /// Repository identity as owner/name, overriding GITHUB_REPOSITORY
    /// and the git remote
    #[arg(long, global = true)]
    repo: Option<String>,

    /// Write a JSON run report to this path
    #[arg(long, global = true)]
    report: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the documentation tree into wiki pages
    Sync,
    /// Parse config and navigation, report problems, write nothing
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let opts = sync::SyncOptions {
        repo_root: std::env::current_dir()?,
        config_path: cli.config,
        wiki_dir: cli.output,
        repo: cli.repo,
    };

    let report = match cli.command {
        Command::Sync => sync::sync(&opts)?,
        Command::Check => sync::check(&opts),
    };

    output::print_report(&report);

    if let Some(path) = cli.report {
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
    }

    Ok(())
}
