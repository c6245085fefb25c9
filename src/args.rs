use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "studygen")]
#[command(about = "Build a printable study guide and flashcard decks from markdown topic files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatArg {
    /// Plain table of contents, for printing
    #[default]
    Printable,
    /// Anchor-linked table of contents for web viewing
    Web,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the consolidated study guide
    #[command(alias = "g")]
    Guide {
        /// Ordered source files (alternative to --manifest)
        #[arg(long, num_args = 1.., conflicts_with = "manifest")]
        sources: Vec<PathBuf>,

        /// JSON manifest describing parts and section labels
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Output path
        #[arg(long, default_value = "study-guide-printable.md")]
        out: PathBuf,

        /// Guide title (with --sources; manifests carry their own)
        #[arg(long)]
        title: Option<String>,

        /// Output flavor
        #[arg(long, value_enum, default_value_t)]
        format: FormatArg,

        /// Remove emoji from prose (code blocks untouched)
        #[arg(long)]
        strip_emoji: bool,
    },

    /// Generate a flashcard deck from pattern-catalog sections
    #[command(alias = "f")]
    Flashcards {
        /// Ordered source files to scan
        #[arg(long, required = true, num_args = 1..)]
        sources: Vec<PathBuf>,

        /// Output path
        #[arg(long, default_value = "flashcards.md")]
        out: PathBuf,

        /// Deck title
        #[arg(long, default_value = "Algorithm Flashcards")]
        title: String,
    },

    /// Generate both artifacts in one run
    #[command(alias = "b")]
    Build {
        /// Ordered source files
        #[arg(long, num_args = 1.., conflicts_with = "manifest")]
        sources: Vec<PathBuf>,

        /// JSON manifest for the guide (sections also feed the flashcards)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Guide output path
        #[arg(long)]
        out_guide: PathBuf,

        /// Flashcard deck output path
        #[arg(long)]
        out_flashcards: PathBuf,

        /// Guide title (with --sources)
        #[arg(long)]
        title: Option<String>,
    },
}
