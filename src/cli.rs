use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "professor", version, about = "Edit and grade quizzes with text commands")]
pub struct Cli {
    /// Quiz file [default: quiz.yaml in the data directory]
    pub quiz: Option<PathBuf>,

    /// Create the quiz with this name if the file does not exist
    #[arg(long, value_name = "name")]
    pub new: Option<String>,

    /// Read command lines from a file instead of stdin
    #[arg(long, value_name = "path")]
    pub script: Option<PathBuf>,

    /// Print the quiz and every question, then exit
    #[arg(long)]
    pub status: bool,

    /// Print a sample of questions as respondents see them, then exit
    #[arg(long)]
    pub deal: bool,

    /// Grade a response to question N, then exit
    #[arg(long, value_name = "N", requires = "response")]
    pub grade: Option<usize>,

    /// Response to grade
    #[arg(long, value_name = "text", requires = "grade")]
    pub response: Option<String>,

    /// Apply commands without saving
    #[arg(long)]
    pub dry_run: bool,

    /// Owner icon shown on cards
    #[arg(long, value_name = "url")]
    pub icon: Option<String>,
}
