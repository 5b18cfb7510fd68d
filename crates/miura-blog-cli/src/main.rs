use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use miura_blog_config::Config;
use miura_blog_engine::analysis::{SeoData, reading_time, tags, toc};
use miura_blog_engine::models::sort_newest_first;
use miura_blog_engine::{Document, Post, io, normalize};
use serde_json::json;

/// Input argument that reads standard input instead of a file
const STDIN: &str = "-";

#[derive(Parser)]
#[command(name = "miura-blog", version, about = "Tools for 三浦海の学校 blog content")]
struct Cli {
    /// Config file to use instead of ~/.config/miura-blog/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge dangling punctuation paragraphs and tidy whitespace
    Normalize(NormalizeArgs),

    /// Print the table of contents of a document
    Toc(DocumentArgs),

    /// Estimate how long a document takes to read
    ReadingTime(ReadingTimeArgs),

    /// Detect topic tags for exported posts
    Tags(PostsArgs),

    /// Generate SEO metadata for exported posts
    Seo(PostsArgs),
}

#[derive(clap::Args)]
struct DocumentArgs {
    /// Portable text JSON file, or `-` for standard input
    input: String,
}

#[derive(clap::Args)]
struct NormalizeArgs {
    #[command(flatten)]
    document: DocumentArgs,

    /// Write the result here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,
}

#[derive(clap::Args)]
struct ReadingTimeArgs {
    #[command(flatten)]
    document: DocumentArgs,

    /// Reading speed in characters per minute
    #[arg(long)]
    cpm: Option<u32>,
}

#[derive(clap::Args)]
struct PostsArgs {
    /// JSON file holding an array of posts or a single post
    posts: PathBuf,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    log::debug!("Using config: {config:?}");

    match cli.command {
        Command::Normalize(args) => run_normalize(&config, args),
        Command::Toc(args) => run_toc(&config, args),
        Command::ReadingTime(args) => run_reading_time(&config, args),
        Command::Tags(args) => run_tags(&config, args),
        Command::Seo(args) => run_seo(&config, args),
    }
}

fn read_input(config: &Config, input: &str) -> Result<Document> {
    if input == STDIN {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read standard input")?;
        return Ok(io::parse_document(&json, Path::new("<stdin>"))?);
    }

    let path = io::resolve(Path::new(input), config.export_dir.as_deref());
    log::info!("Reading document from {}", path.display());
    Ok(io::read_document(&path)?)
}

fn read_posts(config: &Config, posts: &Path) -> Result<Vec<Post>> {
    let path = io::resolve(posts, config.export_dir.as_deref());
    log::info!("Reading posts from {}", path.display());
    let mut posts: Vec<Post> = io::read_posts(&path)?
        .iter()
        .map(Post::normalized)
        .collect();
    sort_newest_first(&mut posts);
    Ok(posts)
}

fn run_normalize(config: &Config, args: NormalizeArgs) -> Result<()> {
    let blocks = read_input(config, &args.document.input)?;
    let normalized = normalize(&blocks);
    log::info!(
        "Normalized {} blocks into {} ({} merged)",
        blocks.len(),
        normalized.len(),
        blocks.len() - normalized.len()
    );

    match args.output {
        Some(path) => {
            io::write_document(&path, &normalized, args.compact)?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let json = io::to_json(&normalized, args.compact)?;
            writeln!(std::io::stdout(), "{json}")?;
        }
    }
    Ok(())
}

fn run_toc(config: &Config, args: DocumentArgs) -> Result<()> {
    let blocks = normalize(&read_input(config, &args.input)?);
    let mut stdout = std::io::stdout().lock();
    for entry in toc::extract(&blocks) {
        writeln!(stdout, "{}  {}  {}", entry.level, entry.id, entry.text)?;
    }
    Ok(())
}

fn run_reading_time(config: &Config, args: ReadingTimeArgs) -> Result<()> {
    let blocks = normalize(&read_input(config, &args.document.input)?);
    let cpm = args.cpm.unwrap_or(config.chars_per_minute);
    if cpm == 0 {
        anyhow::bail!("--cpm must be greater than zero");
    }
    let minutes = reading_time::for_document(&blocks, cpm);
    writeln!(std::io::stdout(), "{}", reading_time::format(minutes))?;
    Ok(())
}

fn run_tags(config: &Config, args: PostsArgs) -> Result<()> {
    let mut posts = read_posts(config, &args.posts)?;
    for post in posts.iter_mut() {
        post.detect_tags();
    }

    let mut stdout = std::io::stdout().lock();
    for post in &posts {
        writeln!(stdout, "{}: {}", post.slug, post.auto_tags.join(", "))?;
    }
    writeln!(stdout)?;
    for count in tags::popular(&posts) {
        writeln!(stdout, "{}\t{}\t{}", count.tag, count.count, count.color)?;
    }
    Ok(())
}

fn run_seo(config: &Config, args: PostsArgs) -> Result<()> {
    let posts = read_posts(config, &args.posts)?;
    let entries: Vec<_> = posts
        .iter()
        .map(|post| {
            json!({
                "slug": post.slug,
                "seo": SeoData::generate(&post.title, &post.body, &config.site_name),
            })
        })
        .collect();
    writeln!(std::io::stdout(), "{}", serde_json::to_string_pretty(&entries)?)?;
    Ok(())
}
