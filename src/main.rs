use anyhow::Result;
use clap::{Parser, Subcommand};
use dit::ColorWhen;
use dit::areas::renderer::Renderer;
use dit::artifacts::core::{PagerWriter, use_pager};
use dit::domain::policy::MovedConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A diff tool with moved-line detection",
    long_about = "This is a small line-diff tool, written in Rust. \
    Beyond rendering a colorized unified diff, it detects blocks of lines \
    that were moved (and possibly re-indented) rather than changed, \
    and colors them distinctly from ordinary additions and deletions.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the changes between two files",
        long_about = "This command renders a colorized unified diff between two files, \
        optionally detecting and highlighting blocks of moved lines."
    )]
    Diff {
        #[arg(index = 1, help = "The old file")]
        old: PathBuf,
        #[arg(index = 2, help = "The new file")]
        new: PathBuf,
        #[arg(
            long = "color-moved",
            value_name = "MODE",
            num_args = 0..=1,
            default_missing_value = "zebra",
            help = "Detect moved blocks of lines (no, plain, blocks, zebra, dimmed-zebra)"
        )]
        color_moved: Option<String>,
        #[arg(
            long = "color-moved-ws",
            value_name = "MODES",
            help = "Whitespace handling when matching moved lines (comma-separated: \
            ignore-space-at-eol, ignore-space-change, ignore-all-space, allow-indentation-change, no)"
        )]
        color_moved_ws: Option<String>,
        #[arg(long, value_enum, default_value = "auto", help = "When to colorize output")]
        color: ColorWhen,
        #[arg(long, help = "Do not pipe output into a pager")]
        no_pager: bool,
    },
    #[command(
        name = "annotate",
        about = "Dump the per-line moved-block annotations",
        long_about = "This command prints the emitted diff lines in a machine-readable form, \
        one line each: the sign marker, a class marker ('.' ordinary, 'm' moved, \
        'M' moved with the alternate stripe), and the line's text. \
        Moved-line detection defaults to zebra mode."
    )]
    Annotate {
        #[arg(index = 1, help = "The old file")]
        old: PathBuf,
        #[arg(index = 2, help = "The new file")]
        new: PathBuf,
        #[arg(
            long = "color-moved",
            value_name = "MODE",
            help = "Detection mode (no, plain, blocks, zebra, dimmed-zebra)"
        )]
        color_moved: Option<String>,
        #[arg(
            long = "color-moved-ws",
            value_name = "MODES",
            help = "Whitespace handling when matching moved lines"
        )]
        color_moved_ws: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Diff {
            old,
            new,
            color_moved,
            color_moved_ws,
            color,
            no_pager,
        } => {
            let moved = MovedConfig::from_cli(color_moved.as_deref(), color_moved_ws.as_deref())?;
            color.apply();

            if use_pager(*no_pager) {
                let pager = minus::Pager::new();
                let renderer = Renderer::new(Box::new(PagerWriter::new(pager.clone())), moved);
                renderer.diff(old, new)?;
                minus::page_all(pager)?;
            } else {
                let renderer = Renderer::new(Box::new(std::io::stdout()), moved);
                renderer.diff(old, new)?;
            }
        }
        Commands::Annotate {
            old,
            new,
            color_moved,
            color_moved_ws,
        } => {
            let mode = color_moved.as_deref().or(Some("zebra"));
            let moved = MovedConfig::from_cli(mode, color_moved_ws.as_deref())?;
            let renderer = Renderer::new(Box::new(std::io::stdout()), moved);

            renderer.annotate(old, new)?;
        }
    }

    Ok(())
}
