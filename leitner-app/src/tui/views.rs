use crate::tui::theme::*;
use leitner_core::{ProgressSummary, Question, QuizRound};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub enum MainPane<'a> {
    Card { question: &'a Question, revealed: bool },
    Quiz { round: &'a QuizRound, number: usize, total: usize, selected: usize, progress: f64 },
    Results { score: usize, total: usize },
    Empty(&'a str),
}

pub struct SidePane<'a> {
    pub summary: &'a ProgressSummary,
    pub due_only: bool,
    pub status: Option<&'a str>,
}

pub fn draw_ui(f: &mut Frame, area: Rect, main: MainPane, side: SidePane) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[0]);
    draw_main(f, chunks[0], main);
    draw_side(f, chunks[1], side);

    let foot = Paragraph::new(Line::from(vec![
        Span::raw(" space reveal/good  "),
        Span::raw(" g/w mark  "),
        Span::raw(" ←/→ prev/next  "),
        Span::raw(" 1-4 ↑↓ Enter answer  "),
        Span::raw(" Tab quiz/cards  "),
        Span::raw(" d due-only  "),
        Span::raw(" q quit "),
    ]))
    .style(footer_style());
    f.render_widget(foot, rows[1]);
}

fn draw_side(f: &mut Frame, area: Rect, side: SidePane) {
    let s = side.summary;
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Accuracy ").style(title_style()),
            Span::raw(format!("{}%", s.accuracy_percent())),
        ]),
        Line::from(format!("Questions: {}", s.total_questions)),
        Line::from(format!("Due today: {}", s.due_today)),
        Line::from(format!("Seen: {}", s.seen)),
        Line::from(""),
        Line::from(Span::raw("Leitner boxes").style(title_style())),
    ];
    for (i, n) in s.box_counts.iter().enumerate() {
        lines.push(Line::from(format!("  {}: {}", i + 1, n)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(
        Span::raw(if side.due_only { "showing due cards only" } else { "showing all cards" })
            .style(hint_style()),
    ));
    if let Some(msg) = side.status {
        lines.push(Line::from(Span::raw(msg).style(hint_style())));
    }

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Progress").borders(Borders::ALL));
    f.render_widget(p, area);
}

fn draw_main(f: &mut Frame, area: Rect, pane: MainPane) {
    match pane {
        MainPane::Empty(msg) => {
            let p = Paragraph::new(msg)
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Study").borders(Borders::ALL));
            f.render_widget(p, area);
        }
        MainPane::Card { question, revealed } => {
            let mut text = vec![
                Line::from(Span::raw("Question").style(title_style())),
                Line::from(question.text.as_str()),
                Line::from(""),
            ];
            if revealed {
                text.push(Line::from(vec![
                    Span::raw("Answer: ").style(title_style()),
                    Span::raw(question.answer.as_str()),
                ]));
                text.push(Line::from(""));
                text.push(Line::from(Span::raw("g = knew it, w = missed it").style(hint_style())));
            } else {
                text.push(Line::from(Span::raw("space to show the answer").style(hint_style())));
            }
            let p = Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Flashcards").borders(Borders::ALL));
            f.render_widget(p, area);
        }
        MainPane::Quiz { round, number, total, selected, progress } => {
            let block = Block::default().title("Quiz").borders(Borders::ALL);
            let inner = block.inner(area);
            f.render_widget(block, area);

            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(1)])
                .split(inner);

            let gauge = Gauge::default()
                .gauge_style(selected_style())
                .label(format!("{number}/{total}"))
                .ratio(progress.clamp(0.0, 1.0));
            f.render_widget(gauge, parts[0]);

            let q = Paragraph::new(round.question().text.as_str()).wrap(Wrap { trim: true });
            f.render_widget(q, parts[1]);

            let items: Vec<ListItem> = round
                .choices()
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let line = Line::from(format!("{}) {}", i + 1, c));
                    let style = match round.chosen() {
                        Some(_) if *c == round.question().answer => correct_style(),
                        Some(chosen) if chosen == c.as_str() => wrong_style(),
                        Some(_) => hint_style(),
                        None if i == selected => selected_style(),
                        None => Default::default(),
                    };
                    ListItem::new(line.style(style))
                })
                .collect();
            f.render_widget(List::new(items), parts[2]);
        }
        MainPane::Results { score, total } => {
            let text = vec![
                Line::from(Span::raw("Result").style(title_style())),
                Line::from(format!("Score: {score}/{total}")),
                Line::from(""),
                Line::from(Span::raw("Enter to repeat the quiz, Tab for flashcards").style(hint_style())),
            ];
            let p = Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Quiz").borders(Borders::ALL));
            f.render_widget(p, area);
        }
    }
}
