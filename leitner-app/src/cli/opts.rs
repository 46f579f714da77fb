use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "leitner", version, about = "Leitner-box flashcards and quizzes")]
pub struct Cli {
    /// Directory holding progress.json, corpus.json and backups (defaults to app data dir)
    #[arg(long, env = "LEITNER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Question list to study instead of the saved/bundled one
    #[arg(long, env = "LEITNER_QUESTIONS")]
    pub questions: Option<PathBuf>,

    /// Only study cards whose review day has arrived
    #[arg(long, global = true)]
    pub due_only: bool,

    /// How many progress backups to keep
    #[arg(long, default_value_t = 10)]
    pub backups: usize,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Flashcard review loop
    Flash(FlashCmd),
    /// Multiple-choice quiz (up to 10 questions)
    Quiz,
    /// Append a custom question
    Add(AddCmd),
    /// Write progress and questions to a JSON file
    Export { path: Option<PathBuf> },
    /// Replace progress and/or questions from an exported JSON file
    Import { path: PathBuf },
    /// Reset every card to box 1
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Progress summary
    Stats,
    /// Launch Terminal UI
    Tui,
}

#[derive(Debug, Args, Clone)]
pub struct FlashCmd {
    /// Stop after this many cards
    #[arg(long, default_value_t = 50)]
    pub max: usize,
}

#[derive(Debug, Args, Clone)]
pub struct AddCmd {
    #[arg(long)]
    pub question: String,
    #[arg(long)]
    pub answer: String,
    /// Wrong option; repeat or separate with commas
    #[arg(long = "distractor", value_delimiter = ',')]
    pub distractors: Vec<String>,
}
