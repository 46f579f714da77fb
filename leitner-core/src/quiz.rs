use crate::filters::due_set;
use crate::{CardRecord, CoreError, DayIndex, Persistence, ProgressStore, Question};
use rand::seq::SliceRandom;
use rand::Rng;

pub const QUIZ_LENGTH: usize = 10;
pub const MAX_DISTRACTORS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    InProgress,
    Finished,
}

#[derive(Clone, Debug)]
pub struct QuizRound {
    question: Question,
    choices: Vec<String>,
    chosen: Option<String>,
}

impl QuizRound {
    /// The answer plus up to three distinct distractors, shuffled.
    pub fn build<R: Rng + ?Sized>(question: Question, rng: &mut R) -> Self {
        let mut wrong: Vec<String> = question
            .wrong_options()
            .into_iter()
            .map(str::to_string)
            .collect();
        wrong.shuffle(rng);
        wrong.truncate(MAX_DISTRACTORS);

        let mut choices = Vec::with_capacity(wrong.len() + 1);
        choices.push(question.answer.clone());
        choices.extend(wrong);
        choices.shuffle(rng);

        Self {
            question,
            choices,
            chosen: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    pub fn is_answered(&self) -> bool {
        self.chosen.is_some()
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.chosen.as_ref().map(|c| *c == self.question.answer)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Accepted { correct: bool, record: CardRecord },
    /// Session finished or the round already has an answer.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    rounds: Vec<QuizRound>,
    current: usize,
    score: usize,
    state: QuizState,
}

impl QuizSession {
    pub fn start<P: Persistence, R: Rng + ?Sized>(
        corpus: &[Question],
        store: &ProgressStore<P>,
        today: DayIndex,
        due_only: bool,
        rng: &mut R,
    ) -> Self {
        let mut pool = due_set(corpus, store, today, due_only);
        pool.shuffle(rng);
        pool.truncate(QUIZ_LENGTH);
        Self::from_questions(pool, rng)
    }

    /// Builds a session over exactly these questions, in this order.
    pub fn from_questions<R: Rng + ?Sized>(questions: Vec<Question>, rng: &mut R) -> Self {
        let rounds: Vec<QuizRound> = questions
            .into_iter()
            .map(|q| QuizRound::build(q, rng))
            .collect();
        let state = if rounds.is_empty() {
            QuizState::Finished
        } else {
            QuizState::InProgress
        };
        tracing::debug!(rounds = rounds.len(), "quiz started");
        Self {
            rounds,
            current: 0,
            score: 0,
            state,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Finished
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn rounds(&self) -> &[QuizRound] {
        &self.rounds
    }

    pub fn current_round(&self) -> Option<&QuizRound> {
        match self.state {
            QuizState::InProgress => self.rounds.get(self.current),
            QuizState::Finished => None,
        }
    }

    /// Fraction of rounds already moved past, for progress bars.
    pub fn progress(&self) -> f64 {
        if self.rounds.is_empty() {
            1.0
        } else {
            self.current as f64 / self.rounds.len() as f64
        }
    }

    /// First half of an answer: records the choice, scores it and updates the
    /// card. The round stays current until `advance_round`.
    pub fn commit_answer<P: Persistence>(
        &mut self,
        choice: &str,
        store: &mut ProgressStore<P>,
        today: DayIndex,
    ) -> Result<AnswerOutcome, CoreError> {
        if self.state == QuizState::Finished {
            return Ok(AnswerOutcome::Ignored);
        }
        let Some(round) = self.rounds.get_mut(self.current) else {
            return Ok(AnswerOutcome::Ignored);
        };
        if round.chosen.is_some() {
            return Ok(AnswerOutcome::Ignored);
        }
        round.chosen = Some(choice.to_string());
        let correct = choice == round.question.answer;
        if correct {
            self.score += 1;
        }
        let text = round.question.text.clone();
        let record = store.record_answer(&text, correct, today)?;
        Ok(AnswerOutcome::Accepted { correct, record })
    }

    /// Second half: moves past an answered round. Unanswered rounds stay put.
    pub fn advance_round(&mut self) -> QuizState {
        let answered = self
            .rounds
            .get(self.current)
            .map(QuizRound::is_answered)
            .unwrap_or(false);
        if self.state == QuizState::InProgress && answered {
            self.current += 1;
            if self.current >= self.rounds.len() {
                self.state = QuizState::Finished;
            }
        }
        self.state
    }
}
