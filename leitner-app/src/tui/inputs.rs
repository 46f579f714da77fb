use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    Enter,
    Space,
    MarkGood,
    MarkWrong,
    Next,
    Previous,
    SwitchMode,
    ToggleDueOnly,
    Choose(usize),
    None,
}

pub fn map_event(ev: Event) -> Action {
    if let Event::Key(KeyEvent { code, kind, .. }) = ev {
        if kind == KeyEventKind::Release {
            return Action::None;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => Action::Up,
            KeyCode::Down | KeyCode::Char('j') => Action::Down,
            KeyCode::Enter => Action::Enter,
            KeyCode::Char(' ') => Action::Space,
            KeyCode::Char('g') => Action::MarkGood,
            KeyCode::Char('w') => Action::MarkWrong,
            KeyCode::Right | KeyCode::Char('l') => Action::Next,
            KeyCode::Left | KeyCode::Char('h') => Action::Previous,
            KeyCode::Tab => Action::SwitchMode,
            KeyCode::Char('d') => Action::ToggleDueOnly,
            KeyCode::Char(c @ '1'..='4') => Action::Choose(c as usize - '1' as usize),
            _ => Action::None,
        }
    } else {
        Action::None
    }
}
