//! TUI application state
//!
//! The app owns the dataset and the [`FilterSelection`]. Every edit to the
//! selection recomputes the visible set right away; the renderer only reads
//! the stored indices.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use policy_table_core::{Dataset, FilterSelection, Record, StatusSelector};
use tracing::debug;

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

/// Result from processing a text input key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputResult {
    /// User pressed Enter
    Committed,
    /// User pressed Esc
    Cancelled,
    /// Input was modified, continue editing
    Continue,
    /// Key was not handled by text input
    NotHandled,
}

/// Process a key event for a text input field
fn handle_text_input(key: KeyEvent, input: &mut String) -> TextInputResult {
    match key.code {
        KeyCode::Enter => TextInputResult::Committed,
        KeyCode::Esc => TextInputResult::Cancelled,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.clear();
            TextInputResult::Continue
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            TextInputResult::NotHandled
        }
        KeyCode::Char(c) => {
            input.push(c);
            TextInputResult::Continue
        }
        KeyCode::Backspace => {
            input.pop();
            TextInputResult::Continue
        }
        _ => TextInputResult::NotHandled,
    }
}

/// Main application state
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Where the dataset was loaded from, shown in the title
    pub origin: String,
    dataset: Dataset,
    selection: FilterSelection,
    /// Dataset indices of the visible set
    visible: Vec<usize>,
    /// Cursor within the visible set
    cursor: usize,
}

impl App {
    pub fn new(dataset: Dataset, origin: impl Into<String>, status: StatusSelector) -> Self {
        let mut app = Self {
            running: true,
            origin: origin.into(),
            dataset,
            selection: FilterSelection::new(status, ""),
            visible: Vec::new(),
            cursor: 0,
        };
        app.recompute();
        app
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_len(&self) -> usize {
        self.dataset.len()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Visible records in dataset order
    pub fn visible_records(&self) -> impl Iterator<Item = &Record> + '_ {
        let records = self.dataset.records();
        self.visible.iter().map(move |idx| &records[*idx])
    }

    /// Record under the cursor
    pub fn selected_record(&self) -> Option<&Record> {
        self.visible
            .get(self.cursor)
            .map(|idx| &self.dataset.records()[*idx])
    }

    pub fn set_status(&mut self, status: StatusSelector) {
        if self.selection.status != status {
            self.selection.status = status;
            self.recompute();
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.selection.search = search.into();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = self.selection.visible_indices(self.dataset.records());
        self.cursor = self.cursor.min(self.visible.len().saturating_sub(1));
        debug!(
            status = %self.selection.status,
            search = %self.selection.search,
            visible = self.visible.len(),
            "visible set recomputed"
        );
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.visible.is_empty() {
            self.cursor = 0;
            return;
        }
        let last = self.visible.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
                return;
            }
            KeyCode::Tab | KeyCode::Right => {
                self.set_status(self.selection.status.next());
                return;
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.set_status(self.selection.status.prev());
                return;
            }
            KeyCode::F(n) => {
                if let Some(status) = StatusSelector::BUTTONS.get(usize::from(n).wrapping_sub(1)) {
                    self.set_status(*status);
                }
                return;
            }
            KeyCode::Up => return self.move_cursor(-1),
            KeyCode::Down => return self.move_cursor(1),
            KeyCode::PageUp => return self.move_cursor(-(PAGE_SIZE as isize)),
            KeyCode::PageDown => return self.move_cursor(PAGE_SIZE as isize),
            KeyCode::Home => {
                self.cursor = 0;
                return;
            }
            KeyCode::End => {
                self.cursor = self.visible.len().saturating_sub(1);
                return;
            }
            _ => {}
        }

        let mut search = self.selection.search.clone();
        match handle_text_input(key, &mut search) {
            TextInputResult::Continue => {
                if search != self.selection.search {
                    self.set_search(search);
                }
            }
            TextInputResult::Cancelled => {
                // Esc clears the search first; a second Esc quits.
                if self.selection.search.is_empty() {
                    self.running = false;
                } else {
                    self.set_search(String::new());
                }
            }
            TextInputResult::Committed | TextInputResult::NotHandled => {}
        }
    }
}
