use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};
use studygen::api::StudygenApi;
use studygen::commands::{CmdMessage, MessageLevel};
use studygen::error::{Result, StudygenError};
use studygen::guide::{GuideFormat, GuideOptions};
use studygen::manifest::Manifest;

mod args;
use args::{Cli, Commands, FormatArg};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = StudygenApi::new();

    match cli.command {
        Commands::Guide {
            sources,
            manifest,
            out,
            title,
            format,
            strip_emoji,
        } => handle_guide(&api, sources, manifest, out, title, format, strip_emoji),
        Commands::Flashcards {
            sources,
            out,
            title,
        } => handle_flashcards(&api, sources, out, title),
        Commands::Build {
            sources,
            manifest,
            out_guide,
            out_flashcards,
            title,
        } => handle_build(&api, sources, manifest, out_guide, out_flashcards, title),
    }
}

fn guide_options(format: FormatArg, strip_emoji: bool) -> GuideOptions {
    GuideOptions {
        format: match format {
            FormatArg::Printable => GuideFormat::Printable,
            FormatArg::Web => GuideFormat::Web,
        },
        strip_emoji,
    }
}

fn handle_guide(
    api: &StudygenApi,
    sources: Vec<PathBuf>,
    manifest: Option<PathBuf>,
    out: PathBuf,
    title: Option<String>,
    format: FormatArg,
    strip_emoji: bool,
) -> Result<()> {
    let options = guide_options(format, strip_emoji);
    let result = match manifest {
        Some(path) => {
            let manifest = Manifest::load(&path)?;
            api.build_guide(&manifest, &out, &options)?
        }
        None => {
            require_sources(&sources)?;
            api.build_guide_from_sources(&sources, title, &out, &options)?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_flashcards(
    api: &StudygenApi,
    sources: Vec<PathBuf>,
    out: PathBuf,
    title: String,
) -> Result<()> {
    let result = api.build_flashcards(&sources, &out, &title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_build(
    api: &StudygenApi,
    sources: Vec<PathBuf>,
    manifest: Option<PathBuf>,
    out_guide: PathBuf,
    out_flashcards: PathBuf,
    title: Option<String>,
) -> Result<()> {
    let options = GuideOptions::default();
    let (guide_result, card_sources) = match manifest {
        Some(path) => {
            let manifest = Manifest::load(&path)?;
            let sources: Vec<PathBuf> = manifest
                .source_paths()
                .into_iter()
                .map(Path::to_path_buf)
                .collect();
            let result = api.build_guide(&manifest, &out_guide, &options)?;
            (result, sources)
        }
        None => {
            require_sources(&sources)?;
            let result = api.build_guide_from_sources(&sources, title, &out_guide, &options)?;
            (result, sources)
        }
    };
    print_messages(&guide_result.messages);

    let deck_result = api.build_flashcards(&card_sources, &out_flashcards, "Algorithm Flashcards")?;
    print_messages(&deck_result.messages);
    Ok(())
}

fn require_sources(sources: &[PathBuf]) -> Result<()> {
    if sources.is_empty() {
        return Err(StudygenError::Usage(
            "provide --sources or --manifest".to_string(),
        ));
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
