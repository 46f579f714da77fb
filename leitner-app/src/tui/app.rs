use crate::cli::commands::Study;
use crate::tui::{inputs::{map_event, Action}, views::{self, MainPane, SidePane}};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use leitner_core::{FlashcardCursor, QuizSession, QuizState};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

/// Pause between showing a quiz answer's feedback and the next round.
const FEEDBACK_DELAY: Duration = Duration::from_millis(650);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Flashcards,
    Quiz,
    Results,
}

pub struct TuiApp {
    study: Study,
    mode: Mode,
    cursor: FlashcardCursor,
    quiz: Option<QuizSession>,
    selected: usize,
    advance_at: Option<Instant>,
    status: Option<String>,
}

impl TuiApp {
    pub fn new(study: Study) -> Self {
        let mut app = Self {
            study,
            mode: Mode::Flashcards,
            cursor: FlashcardCursor::default(),
            quiz: None,
            selected: 0,
            advance_at: None,
            status: None,
        };
        app.rebuild_cursor();
        app
    }

    fn rebuild_cursor(&mut self) {
        let today = self.study.today();
        self.cursor = FlashcardCursor::new(self.study.state.due_set(today, self.study.due_only));
    }

    fn start_quiz(&mut self) {
        let today = self.study.today();
        let quiz = QuizSession::start(
            self.study.state.corpus(),
            self.study.state.store(),
            today,
            self.study.due_only,
            &mut rand::rng(),
        );
        self.mode = if quiz.is_finished() { Mode::Results } else { Mode::Quiz };
        self.quiz = Some(quiz);
        self.selected = 0;
        self.advance_at = None;
    }

    fn note_storage(&mut self, result: Result<(), leitner_core::CoreError>) {
        if let Err(e) = result {
            tracing::warn!("progress not saved: {e}");
            self.status = Some("progress could not be saved".into());
        }
    }

    fn mark(&mut self, correct: bool) {
        let today = self.study.today();
        let result = self.cursor.mark(correct, self.study.state.store_mut(), today).map(|_| ());
        self.note_storage(result);
        if self.study.due_only {
            self.cursor.refresh(self.study.state.due_set(today, true));
        }
    }

    fn answer(&mut self, idx: usize) {
        if self.advance_at.is_some() {
            return;
        }
        let today = self.study.today();
        let Some(quiz) = self.quiz.as_mut() else { return };
        let Some(choice) = quiz.current_round().and_then(|r| r.choices().get(idx)).cloned() else {
            return;
        };
        let result = quiz.commit_answer(&choice, self.study.state.store_mut(), today).map(|_| ());
        self.advance_at = Some(Instant::now() + FEEDBACK_DELAY);
        self.note_storage(result);
    }

    fn tick(&mut self) {
        let Some(at) = self.advance_at else { return };
        if Instant::now() < at {
            return;
        }
        self.advance_at = None;
        self.selected = 0;
        if let Some(quiz) = self.quiz.as_mut() {
            if quiz.advance_round() == QuizState::Finished {
                self.mode = Mode::Results;
            }
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            self.tick();
            let summary = self.study.state.summary(self.study.today());
            terminal.draw(|f| {
                let main = match self.mode {
                    Mode::Flashcards => match self.cursor.current() {
                        Some(question) => MainPane::Card { question, revealed: self.cursor.is_revealed() },
                        None if self.study.due_only => MainPane::Empty("No cards due. Press d to see all cards."),
                        None => MainPane::Empty("No cards. Add questions with `leitner add`."),
                    },
                    Mode::Quiz => match self.quiz.as_ref().and_then(|q| q.current_round().map(|r| (q, r))) {
                        Some((quiz, round)) => MainPane::Quiz {
                            round,
                            number: quiz.current_index() + 1,
                            total: quiz.len(),
                            selected: self.selected,
                            progress: quiz.progress(),
                        },
                        None => MainPane::Empty("No questions."),
                    },
                    Mode::Results => {
                        let (score, total) = self.quiz.as_ref().map(|q| (q.score(), q.len())).unwrap_or((0, 0));
                        MainPane::Results { score, total }
                    }
                };
                let side = SidePane { summary: &summary, due_only: self.study.due_only, status: self.status.as_deref() };
                let area = f.size();
                views::draw_ui(f, area, main, side);
            })?;

            if event::poll(Duration::from_millis(50))? {
                let action = map_event(event::read()?);
                if action == Action::Quit {
                    break;
                }
                self.handle(action);
            }
        }
        Ok(())
    }

    fn handle(&mut self, action: Action) {
        match (self.mode, action) {
            (_, Action::ToggleDueOnly) => {
                self.study.due_only = !self.study.due_only;
                self.rebuild_cursor();
            }
            (Mode::Flashcards, Action::SwitchMode) => self.start_quiz(),
            (Mode::Quiz | Mode::Results, Action::SwitchMode) => {
                self.quiz = None;
                self.advance_at = None;
                self.mode = Mode::Flashcards;
                self.rebuild_cursor();
            }

            (Mode::Flashcards, Action::Space) => {
                if self.cursor.is_revealed() { self.mark(true); } else { self.cursor.reveal(); }
            }
            (Mode::Flashcards, Action::Enter) => self.cursor.reveal(),
            (Mode::Flashcards, Action::MarkGood) => self.mark(true),
            (Mode::Flashcards, Action::MarkWrong) => self.mark(false),
            (Mode::Flashcards, Action::Next) => self.cursor.advance(),
            (Mode::Flashcards, Action::Previous) => self.cursor.back(),

            (Mode::Quiz, Action::Up) => self.selected = self.selected.saturating_sub(1),
            (Mode::Quiz, Action::Down) => {
                let n = self.quiz.as_ref().and_then(|q| q.current_round()).map(|r| r.choices().len()).unwrap_or(0);
                if self.selected + 1 < n { self.selected += 1; }
            }
            (Mode::Quiz, Action::Enter | Action::Space) => self.answer(self.selected),
            (Mode::Quiz, Action::Choose(i)) => self.answer(i),

            (Mode::Results, Action::Enter) => self.start_quiz(),
            _ => {}
        }
    }
}
