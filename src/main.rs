use anyhow::Result;
use clap::Parser;

use git_tags::command::SystemCommandRunner;
use git_tags::config;
use git_tags::tags::{TagLister, TagQuery};
use git_tags::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-tags",
    about = "List a repository's semantic-version tags, newest first"
)]
struct Args {
    #[arg(help = "Semver range the listed versions must satisfy (e.g. ^1.1.0)")]
    range: Option<String>,

    #[arg(long, help = "Restrict the scan to a revision range (e.g. v1.0.0..HEAD)")]
    rev: Option<String>,

    #[arg(short, long, help = "Print only the most recent matching tag")]
    latest: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let query = TagQuery {
        range: args.range.or(config.defaults.range),
        rev: args.rev.or(config.defaults.rev),
    };

    let lister = TagLister::new(SystemCommandRunner::with_program(config.git.bin.as_str()));

    if args.latest {
        match lister.latest(query) {
            Ok(Some(tag)) => ui::display_tag(&tag),
            Ok(None) => ui::display_status("no matching tags"),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
    } else {
        match lister.list(query) {
            Ok(tags) => ui::display_tag_list(&tags),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
