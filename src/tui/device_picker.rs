//! List picker used for vendor and model selection.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::Theme;

/// State of a single-choice list dialog.
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Prompt shown above the list
    pub title: String,
    /// Choices, in display order
    pub items: Vec<String>,
    /// Index of the highlighted choice
    pub selected: usize,
}

impl PickerState {
    /// Creates a picker with the first item highlighted.
    pub fn new(title: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            title: title.into(),
            items,
            selected: 0,
        }
    }

    /// Moves the highlight up, wrapping to the last item.
    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.items.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Moves the highlight down, wrapping to the first item.
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Currently highlighted item.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }
}

/// Action returned by the picker when the user makes a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// User confirmed the item at this index
    Select(usize),
    /// User cancelled the picker
    Cancel,
}

/// Handles keyboard input for the picker.
///
/// Returns Some(action) if user made a choice, None otherwise.
pub fn handle_input(state: &mut PickerState, key: KeyEvent) -> Option<PickerAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.next();
            None
        }
        KeyCode::Home => {
            state.selected = 0;
            None
        }
        KeyCode::End => {
            state.selected = state.items.len().saturating_sub(1);
            None
        }
        KeyCode::Enter if !state.items.is_empty() => Some(PickerAction::Select(state.selected)),
        KeyCode::Esc | KeyCode::Char('q') => Some(PickerAction::Cancel),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PickerAction::Cancel)
        }
        _ => None,
    }
}

/// Renders the picker dialog.
pub fn render(f: &mut Frame, state: &PickerState, theme: &Theme) {
    let area = f.area();

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // List
            Constraint::Length(3), // Instructions
        ])
        .split(area);

    let title = Paragraph::new(state.title.as_str())
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = state
        .items
        .iter()
        .map(|item| ListItem::new(item.as_str()).style(Style::default().fg(theme.text)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} entries", state.items.len())),
        )
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    let instructions = "↑↓: Navigate  |  Enter: Select  |  Esc: Cancel";
    let paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(theme.text_muted))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn picker() -> PickerState {
        PickerState::new(
            "Pick a vendor",
            vec!["AJA".to_string(), "Blackmagic".to_string(), "Sony".to_string()],
        )
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = picker();
        assert_eq!(handle_input(&mut state, key(KeyCode::Up)), None);
        assert_eq!(state.current(), Some("Sony"));
        handle_input(&mut state, key(KeyCode::Down));
        assert_eq!(state.current(), Some("AJA"));
        handle_input(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.current(), Some("Blackmagic"));
        handle_input(&mut state, key(KeyCode::End));
        assert_eq!(state.selected, 2);
        handle_input(&mut state, key(KeyCode::Home));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_enter_selects_and_esc_cancels() {
        let mut state = picker();
        handle_input(&mut state, key(KeyCode::Down));
        assert_eq!(
            handle_input(&mut state, key(KeyCode::Enter)),
            Some(PickerAction::Select(1))
        );
        assert_eq!(
            handle_input(&mut state, key(KeyCode::Esc)),
            Some(PickerAction::Cancel)
        );
        assert_eq!(
            handle_input(
                &mut state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(PickerAction::Cancel)
        );
    }

    #[test]
    fn test_empty_picker_ignores_enter() {
        let mut state = PickerState::new("Pick a model", Vec::new());
        handle_input(&mut state, key(KeyCode::Down));
        assert_eq!(state.selected, 0);
        assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), None);
        assert_eq!(state.current(), None);
    }
}
