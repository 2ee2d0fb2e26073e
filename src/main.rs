mod cli;

use std::io::{self, BufRead, BufReader};

use clap::Parser;

use professor::persist;
use professor::view;
use professor::{EditSession, Quiz};

use crate::cli::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("professor=info".parse().expect("valid directive")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let path = cli.quiz.clone().unwrap_or_else(persist::default_quiz_path);

    // Load, or start a new quiz
    let quiz = if path.exists() {
        persist::load_quiz(&path).map_err(|e| e.to_string())?
    } else if let Some(ref name) = cli.new {
        Quiz::new(name).map_err(|e| e.to_string())?
    } else {
        return Err(format!(
            "{} does not exist (use --new <name> to create it)",
            path.display()
        ));
    };

    let mut session = EditSession::new(quiz).with_icon(cli.icon.clone());
    let icon = cli.icon.as_deref();

    // Handle --status
    if cli.status {
        print!("{}", view::quiz_card(&session.quiz, icon));
        for (i, q) in session.quiz.questions.iter().enumerate() {
            println!();
            println!("#{}", i + 1);
            print!("{}", view::editor_card(q, icon));
        }
        return Ok(());
    }

    // Handle --deal
    if cli.deal {
        for (i, q) in session.quiz.deal().iter().enumerate() {
            print!("{}", view::question_card(q, i + 1, icon));
        }
        return Ok(());
    }

    // Handle --grade
    if let (Some(number), Some(response)) = (cli.grade, cli.response.as_deref()) {
        return match session.grade(number, response) {
            Some(true) => {
                println!("correct");
                Ok(())
            }
            Some(false) => {
                println!("incorrect");
                Ok(())
            }
            None => Err(format!("no question {}", number)),
        };
    }

    let reader: Box<dyn BufRead> = match cli.script {
        Some(ref script) => Box::new(BufReader::new(
            std::fs::File::open(script)
                .map_err(|e| format!("Cannot open {}: {}", script.display(), e))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = line.map_err(|e| format!("Cannot read command: {}", e))?;
        for refresh in session.apply_line(&line) {
            print!("{}", refresh.card());
        }
    }

    if cli.dry_run {
        eprintln!("Dry run, nothing saved.");
    } else if session.is_modified() || !path.exists() {
        persist::save_quiz(&session.quiz, &path).map_err(|e| e.to_string())?;
    }

    Ok(())
}
