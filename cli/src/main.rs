//! docweave CLI - structured-text report rendering tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use docweave::{parse_file_with_options, render, JsonFormat, ParseOptions, RenderOptions};

#[derive(Parser)]
#[command(name = "docweave")]
#[command(version)]
#[command(about = "Render structured-text reports to HTML and plain text", long_about = None)]
struct Cli {
    /// Input report source file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: Format,

    /// Emit a standalone HTML page with embedded styles
    #[arg(long)]
    standalone: bool,

    /// Include a table of contents
    #[arg(long)]
    toc: bool,

    /// Document title (defaults to the input file name)
    #[arg(long)]
    title: Option<String>,

    /// Reject inputs larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_size: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document structure and statistics
    Info {
        /// Input report source file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Styled HTML markup
    Html,
    /// Plain text
    Text,
    /// Document model as JSON
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match cli.input {
            Some(ref input) => cmd_render(
                input,
                cli.output.as_deref(),
                cli.format,
                cli.standalone,
                cli.toc,
                cli.title.clone(),
                cli.max_size,
            ),
            None => {
                println!("{}", "Usage: docweave <FILE> [-o OUT] [--format html|text|json]".yellow());
                println!("       docweave --help for more information");
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    format: Format,
    standalone: bool,
    toc: bool,
    title: Option<String>,
    max_size: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_input(input, title, max_size)?;

    let render_options = RenderOptions::new()
        .with_standalone(standalone)
        .with_toc(toc);

    let content = match format {
        Format::Html => render::to_html(&doc, &render_options)?,
        Format::Text => render::to_text(&doc, &render_options)?,
        Format::Json => render::to_json(&doc, JsonFormat::Pretty)?,
    };

    match output {
        Some(path) => fs::write(path, content)?,
        None => print!("{}", content),
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_input(input, None, None)?;
    let stats = docweave::DocumentStats::collect(&doc);

    println!("{}: {}", "Title".cyan().bold(), display_title(&doc.title));
    println!("{}: {}", "Sections".cyan().bold(), stats.section_count);
    println!("{}: {}", "Paragraphs".cyan().bold(), stats.paragraph_count);
    println!(
        "{}: {} ({} rows)",
        "Tables".cyan().bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!("{}: {}", "Words".cyan().bold(), stats.word_count);

    let outline = doc.outline();
    if !outline.is_empty() {
        println!("\n{}:", "Outline".cyan().bold());
        for item in &outline.items {
            let indent = "  ".repeat(item.level.saturating_sub(1) as usize);
            println!("  {}{}", indent, item.title);
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("docweave {}", env!("CARGO_PKG_VERSION"));
}

fn parse_input(
    input: &Path,
    title: Option<String>,
    max_size: Option<usize>,
) -> Result<docweave::Document, Box<dyn std::error::Error>> {
    let title = title.unwrap_or_else(|| {
        input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let mut options = ParseOptions::new().with_title(title);
    if let Some(bytes) = max_size {
        options = options.with_max_input_bytes(bytes);
    }

    log::debug!("parsing {}", input.display());
    Ok(parse_file_with_options(input, options)?)
}

fn display_title(title: &str) -> &str {
    if title.is_empty() {
        "(untitled)"
    } else {
        title
    }
}
