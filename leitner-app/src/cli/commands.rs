use crate::cli::opts::*;
use crate::tui::app::TuiApp;

use anyhow::{bail, Context, Result};
use leitner_core::{
    AnswerOutcome, Clock, CoreError, DayIndex, FlashcardCursor, Question, QuizSession, StudyState,
    SystemClock,
};
use leitner_json::corpus::{load_corpus, load_saved_corpus, parse_corpus, save_corpus};
use leitner_json::paths::{data_root, DataPaths};
use leitner_json::JsonFileBackend;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;

const BUNDLED_QUESTIONS: &str = include_str!("../../data/questions.json");

/// Everything a command needs: the study state plus where it lives on disk.
pub struct Study {
    pub state: StudyState<JsonFileBackend>,
    pub paths: DataPaths,
    pub clock: SystemClock,
    pub due_only: bool,
}

impl Study {
    pub fn today(&self) -> DayIndex {
        self.clock.today()
    }

    pub fn save_corpus(&self) -> Result<()> {
        save_corpus(&self.paths.corpus, self.state.corpus())
    }
}

pub fn run_cli(args: Cli) -> Result<()> {
    let mut study = open_study(&args)?;
    match args.cmd.clone() {
        Command::Flash(cmd) => flash_cmd(&mut study, cmd, &mut stdin().lock()),
        Command::Quiz => quiz_cmd(&mut study, &mut stdin().lock()),
        Command::Add(cmd) => add_cmd(&mut study, cmd),
        Command::Export { path } => export_cmd(&study, path),
        Command::Import { path } => import_cmd(&mut study, path),
        Command::Reset { yes } => reset_cmd(&mut study, yes, &mut stdin().lock()),
        Command::Stats => stats_cmd(&study),
        Command::Tui => TuiApp::new(study).run(),
    }
}

pub fn open_study(args: &Cli) -> Result<Study> {
    let root = args.data_dir.clone().unwrap_or_else(data_root);
    let paths = DataPaths::under(&root);
    let corpus = active_corpus(args.questions.as_ref(), &paths)?;
    let backend = JsonFileBackend::open_in(&paths, args.backups)?;
    let state = StudyState::open(corpus, backend);
    tracing::info!(
        questions = state.corpus().len(),
        data_dir = %root.display(),
        "study state loaded"
    );
    Ok(Study {
        state,
        paths,
        clock: SystemClock,
        due_only: args.due_only,
    })
}

/// `--questions` wins, then a corpus saved by earlier add/import, then the
/// bundled list.
fn active_corpus(explicit: Option<&PathBuf>, paths: &DataPaths) -> Result<Vec<Question>> {
    if let Some(p) = explicit {
        return load_corpus(p);
    }
    match load_saved_corpus(&paths.corpus) {
        Ok(Some(v)) => return Ok(v),
        Ok(None) => {}
        Err(e) => tracing::warn!("ignoring unreadable saved corpus: {e:#}"),
    }
    parse_corpus(BUNDLED_QUESTIONS)
}

fn warn_on_storage(result: Result<(), CoreError>) {
    if let Err(e) = result {
        tracing::warn!("progress not saved: {e}");
    }
}

enum Step {
    Mark(bool),
    Next,
    Previous,
}

fn flash_cmd(study: &mut Study, cmd: FlashCmd, input: &mut impl BufRead) -> Result<()> {
    let today = study.today();
    let mut cursor = FlashcardCursor::new(study.state.due_set(today, study.due_only));
    if cursor.current().is_none() {
        println!("no cards {}", if study.due_only { "due" } else { "to study" });
        return Ok(());
    }

    let mut count = 0usize;
    while count < cmd.max {
        let Some(card) = cursor.current().cloned() else {
            println!("\nall caught up");
            break;
        };
        count += 1;
        println!("\n[{}/{}]", count, cmd.max);
        println!("Q: {}", card.text);
        if read_line(input, "[enter=show]")?.is_none() {
            break;
        }
        cursor.reveal();
        println!("A: {}", card.answer);
        println!("[g=good, w=wrong, n=next, p=previous, q=quit]");
        let step = loop {
            // closed input ends the session without marking the card
            let Some(line) = read_line(input, "mark> ")? else {
                println!();
                return Ok(());
            };
            match line.trim().to_lowercase().as_str() {
                "g" | "good" | "y" | "" => break Step::Mark(true),
                "w" | "wrong" | "x" => break Step::Mark(false),
                "n" | "next" => break Step::Next,
                "p" | "prev" => break Step::Previous,
                "q" | "quit" => return Ok(()),
                _ => println!("enter g, w, n, p or q"),
            }
        };

        match step {
            Step::Mark(ok) => {
                match cursor.mark(ok, study.state.store_mut(), today) {
                    Ok(Some(r)) => println!("→ box {}, next review in {} day(s)", r.leitner_box, r.next_due_day - today),
                    Ok(None) => {}
                    Err(e) => warn_on_storage(Err(e)),
                }
                if study.due_only {
                    cursor.refresh(study.state.due_set(today, true));
                }
            }
            Step::Next => cursor.advance(),
            Step::Previous => cursor.back(),
        }
    }

    println!("\nreviewed {}", count);
    Ok(())
}

fn quiz_cmd(study: &mut Study, input: &mut impl BufRead) -> Result<()> {
    let today = study.today();
    let mut rng = rand::rng();
    let mut quiz = QuizSession::start(
        study.state.corpus(),
        study.state.store(),
        today,
        study.due_only,
        &mut rng,
    );
    if quiz.is_empty() {
        println!("no questions {}", if study.due_only { "due" } else { "available" });
        return Ok(());
    }

    while let Some(round) = quiz.current_round().cloned() {
        println!("\n[{}/{}] {}", quiz.current_index() + 1, quiz.len(), round.question().text);
        for (i, c) in round.choices().iter().enumerate() {
            println!("  {}) {}", i + 1, c);
        }
        let choice = loop {
            let Some(line) = read_line(input, "answer> ")? else {
                println!();
                return Ok(());
            };
            let t = line.trim();
            if t.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            match t.parse::<usize>() {
                Ok(n) if (1..=round.choices().len()).contains(&n) => break round.choices()[n - 1].clone(),
                _ => println!("enter 1-{} or q", round.choices().len()),
            }
        };
        match quiz.commit_answer(&choice, study.state.store_mut(), today) {
            Ok(AnswerOutcome::Accepted { correct: true, .. }) => println!("✓ correct"),
            Ok(AnswerOutcome::Accepted { correct: false, .. }) => {
                println!("✗ wrong, answer: {}", round.question().answer)
            }
            Ok(AnswerOutcome::Ignored) => {}
            Err(e) => warn_on_storage(Err(e)),
        }
        quiz.advance_round();
    }

    println!("\nscore: {}/{}", quiz.score(), quiz.len());
    Ok(())
}

fn add_cmd(study: &mut Study, cmd: AddCmd) -> Result<()> {
    let text = cmd.question.trim();
    let answer = cmd.answer.trim();
    if text.is_empty() || answer.is_empty() {
        bail!("question and answer must not be empty");
    }
    let distractors: Vec<String> = cmd
        .distractors
        .iter()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect();
    let question = Question::new(text, answer).with_distractors(distractors);
    match study.state.add_question(question) {
        Ok(()) => {}
        Err(CoreError::DuplicateQuestion(q)) => bail!("question already exists: {q}"),
        Err(e) => warn_on_storage(Err(e)),
    }
    study.save_corpus()?;
    println!("added ({} questions)", study.state.corpus().len());
    Ok(())
}

fn export_cmd(study: &Study, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| {
        PathBuf::from(format!(
            "leitner-progress-{}.json",
            chrono::Local::now().format("%Y%m%d")
        ))
    });
    let snapshot = study.state.export_snapshot();
    let s = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(&path, s).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported progress");
    println!("wrote {}", path.display());
    Ok(())
}

fn import_cmd(study: &mut Study, path: PathBuf) -> Result<()> {
    let data = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let value: serde_json::Value = match serde_json::from_str(&data) {
        Ok(v) => v,
        Err(e) => bail!("invalid file: {e}"),
    };
    match study.state.apply_imported_snapshot(value) {
        Ok(imported) => {
            if imported.corpus.is_some() {
                study.save_corpus()?;
            }
            if imported.is_empty() {
                println!("nothing to import");
            } else {
                println!("import complete");
            }
            Ok(())
        }
        Err(CoreError::InvalidSnapshot(msg)) => bail!("invalid file: {msg}"),
        Err(e) => {
            warn_on_storage(Err(e));
            println!("import complete");
            Ok(())
        }
    }
}

fn reset_cmd(study: &mut Study, yes: bool, input: &mut impl BufRead) -> Result<()> {
    if !yes {
        let line = read_line(input, "erase saved progress? [y/N] ")?.unwrap_or_default();
        if !matches!(line.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("cancelled");
            return Ok(());
        }
    }
    warn_on_storage(study.state.reset_all());
    println!("progress reset");
    Ok(())
}

fn stats_cmd(study: &Study) -> Result<()> {
    let s = study.state.summary(study.today());
    println!("questions:  {}", s.total_questions);
    println!("due today:  {}", s.due_today);
    println!("seen:       {}", s.seen);
    println!("accuracy:   {}%", s.accuracy_percent());
    let boxes: Vec<String> = s
        .box_counts
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{}:{}", i + 1, n))
        .collect();
    println!("boxes:      {}", boxes.join("  "));
    Ok(())
}

// ===== Helpers =====
/// `None` once the input is closed.
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    stdout().flush().ok();
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s))
}
