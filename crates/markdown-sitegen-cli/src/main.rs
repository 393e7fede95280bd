use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::{CONFIG_FILE_NAME, Config};
use markdown_sitegen_engine::{SitePaths, build_site, markdown_to_html, parse_document, site};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(version, about = "Build a static HTML site from a tree of markdown files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page and copy static assets into the output directory
    Build {
        /// Site config file (defaults to ./sitegen.toml; built-in layout if absent)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the HTML for a single markdown file
    Render {
        /// Markdown file to render
        file: PathBuf,
    },
    /// Print the classified blocks of a markdown file as JSON
    Blocks {
        /// Markdown file to inspect
        file: PathBuf,
    },
    /// Write a starter config and template
    Init {
        /// Directory to initialise
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build { config } => build(config),
        Command::Render { file } => render(&file),
        Command::Blocks { file } => blocks(&file),
        Command::Init { dir } => init(&dir),
    }
}

fn build(config_path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::config_path);
    let config = match Config::load_from_path(&config_path)? {
        Some(config) => config,
        None => {
            log::info!(
                "No config file at {}, using the default site layout",
                config_path.display()
            );
            Config::default()
        }
    };

    // Paths in the config are relative to the directory holding it
    let root = match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let config = config.relative_to(root);
    let paths = SitePaths {
        content_dir: config.content_dir,
        static_dir: config.static_dir,
        public_dir: config.public_dir,
        template: config.template,
    };

    let report = build_site(&paths).with_context(|| {
        format!(
            "Failed to build site from {} into {}",
            paths.content_dir.display(),
            paths.public_dir.display()
        )
    })?;

    println!(
        "Built {} pages and copied {} static files into {}",
        report.pages.len(),
        report.static_files,
        paths.public_dir.display()
    );
    Ok(())
}

fn render(file: &Path) -> Result<()> {
    let markdown = read_markdown(file)?;
    let html = markdown_to_html(&markdown)
        .with_context(|| format!("Failed to render {}", file.display()))?;
    println!("{html}");
    Ok(())
}

fn blocks(file: &Path) -> Result<()> {
    let markdown = read_markdown(file)?;
    let doc = parse_document(&markdown);
    let json = serde_json::to_string_pretty(&doc.blocks)?;
    println!("{json}");
    Ok(())
}

fn init(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        log::warn!("{} already exists, leaving it alone", config_path.display());
    } else {
        Config::default()
            .save_to_path(&config_path)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("Created {}", config_path.display());
    }

    let template_path = dir.join(&Config::default().template);
    if template_path.exists() {
        log::warn!("{} already exists, leaving it alone", template_path.display());
    } else {
        fs::write(&template_path, site::DEFAULT_TEMPLATE)
            .with_context(|| format!("Failed to write {}", template_path.display()))?;
        println!("Created {}", template_path.display());
    }

    Ok(())
}

fn read_markdown(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}
