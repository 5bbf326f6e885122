use crate::domain::models::Options;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{io, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Clipboard,
    LineNumbers,
    Extensions,
    Output,
    Run,
}

const FIELDS: [Field; 5] = [
    Field::Clipboard,
    Field::LineNumbers,
    Field::Extensions,
    Field::Output,
    Field::Run,
];

#[derive(Debug, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Confirmed,
    Cancelled,
}

/// Editable state behind the interactive options screen.
pub struct OptionsForm {
    copy_to_clipboard: bool,
    include_line_numbers: bool,
    extensions: String,
    output: String,
    state: ListState,
    status: FormState,
}

impl OptionsForm {
    pub fn new(initial: &Options) -> Self {
        let mut state = ListState::default();
        state.select(Some(0));

        Self {
            copy_to_clipboard: initial.copy_to_clipboard,
            include_line_numbers: initial.include_line_numbers,
            extensions: initial.extensions.clone().unwrap_or_default(),
            output: initial.output.clone().unwrap_or_default(),
            state,
            status: FormState::Editing,
        }
    }

    fn focused(&self) -> Field {
        FIELDS[self.state.selected().unwrap_or(0)]
    }

    fn next(&mut self) {
        let i = match self.state.selected() {
            Some(i) if i + 1 < FIELDS.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    fn previous(&mut self) {
        let i = match self.state.selected() {
            Some(0) | None => FIELDS.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focused() {
            Field::Extensions => Some(&mut self.extensions),
            Field::Output => Some(&mut self.output),
            _ => None,
        }
    }

    pub fn status(&self) -> &FormState {
        &self.status
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.status = FormState::Cancelled;
            return;
        }

        match key.code {
            KeyCode::Esc => self.status = FormState::Cancelled,
            KeyCode::Enter => self.status = FormState::Confirmed,
            KeyCode::Down | KeyCode::Tab => self.next(),
            KeyCode::Up | KeyCode::BackTab => self.previous(),
            KeyCode::Backspace => {
                if let Some(text) = self.focused_text() {
                    text.pop();
                }
            }
            KeyCode::Char(' ') if self.focused() == Field::Clipboard => {
                self.copy_to_clipboard = !self.copy_to_clipboard;
            }
            KeyCode::Char(' ') if self.focused() == Field::LineNumbers => {
                self.include_line_numbers = !self.include_line_numbers;
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.focused_text() {
                    text.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn options(&self) -> Options {
        let non_empty = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Options {
            copy_to_clipboard: self.copy_to_clipboard,
            extensions: non_empty(&self.extensions),
            include_line_numbers: self.include_line_numbers,
            output: non_empty(&self.output),
        }
    }

    fn row_label(&self, field: Field) -> String {
        let checkbox = |on: bool| if on { "[✓]" } else { "[ ]" };
        match field {
            Field::Clipboard => format!("{} Copy to clipboard", checkbox(self.copy_to_clipboard)),
            Field::LineNumbers => format!(
                "{} Include line numbers",
                checkbox(self.include_line_numbers)
            ),
            Field::Extensions => format!("Extensions (comma-separated): {}", self.extensions),
            Field::Output => format!("Output file (empty for stdout): {}", self.output),
            Field::Run => "▶ Run".to_string(),
        }
    }
}

fn ui(f: &mut Frame, form: &mut OptionsForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    let title = Paragraph::new(Span::styled(
        "Concatenate tracked files",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    f.render_widget(title, chunks[0]);

    let selected_style = Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let items: Vec<ListItem> = FIELDS
        .iter()
        .map(|&field| ListItem::new(Span::raw(form.row_label(field))))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Options"))
        .highlight_style(selected_style);
    f.render_stateful_widget(list, chunks[1], &mut form.state);

    let controls = Paragraph::new(Span::styled(
        "↑/↓: Navigate | Space: Toggle | Type to edit | Enter: Run | Esc: Cancel",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(controls, chunks[2]);
}

fn run_form<B: Backend>(terminal: &mut Terminal<B>, form: &mut OptionsForm) -> anyhow::Result<()> {
    while form.status == FormState::Editing {
        terminal.draw(|f| ui(f, form))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    form.handle_key(key);
                }
            }
        }
    }
    Ok(())
}

/// Shows the options form; `None` means the user cancelled.
pub fn prompt_options(initial: &Options) -> anyhow::Result<Option<Options>> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let mut form = OptionsForm::new(initial);
    let result = run_form(&mut terminal, &mut form);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    match form.status() {
        FormState::Confirmed => {
            let options = form.options();
            debug!("Interactive options: {:?}", options);
            Ok(Some(options))
        }
        _ => {
            info!("Interactive prompt cancelled");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(form: &mut OptionsForm, code: KeyCode) {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(form: &mut OptionsForm, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_defaults_carry_over() {
        let initial = Options {
            copy_to_clipboard: true,
            extensions: Some("rs".to_string()),
            include_line_numbers: false,
            output: None,
        };

        let form = OptionsForm::new(&initial);

        assert_eq!(form.options(), initial);
        assert_eq!(form.status(), &FormState::Editing);
    }

    #[test]
    fn test_toggles_and_text_fields() {
        let mut form = OptionsForm::new(&Options::default());

        press(&mut form, KeyCode::Char(' '));
        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Char(' '));
        press(&mut form, KeyCode::Down);
        type_text(&mut form, "go, ");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "out.txx");
        press(&mut form, KeyCode::Backspace);
        type_text(&mut form, "t");
        press(&mut form, KeyCode::Enter);

        assert_eq!(form.status(), &FormState::Confirmed);
        assert_eq!(
            form.options(),
            Options {
                copy_to_clipboard: true,
                extensions: Some("go,".to_string()),
                include_line_numbers: true,
                output: Some("out.txt".to_string()),
            }
        );
    }

    #[test]
    fn test_typing_on_toggle_is_ignored() {
        let mut form = OptionsForm::new(&Options::default());

        type_text(&mut form, "abc");

        assert_eq!(form.options(), Options::default());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut form = OptionsForm::new(&Options::default());

        press(&mut form, KeyCode::Up);
        assert_eq!(form.focused(), Field::Run);
        press(&mut form, KeyCode::Down);
        assert_eq!(form.focused(), Field::Clipboard);
    }

    #[test]
    fn test_cancel() {
        let mut form = OptionsForm::new(&Options::default());
        press(&mut form, KeyCode::Esc);
        assert_eq!(form.status(), &FormState::Cancelled);

        let mut form = OptionsForm::new(&Options::default());
        form.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(form.status(), &FormState::Cancelled);
    }
}
