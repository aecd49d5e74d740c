//! TUI rendering

use policy_table_core::table::{self, NO_RECORDS_PLACEHOLDER};
use policy_table_core::{Field, StatusSelector};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::app::App;

const FOOTER_HINTS: &str =
    " [Type] Search  [Tab/←→] Status  [F1-F7] Jump  [↑↓/PgUp/PgDn] Move  [Ctrl+U] Clear  [Esc] Clear/Quit ";

/// Draw the entire UI
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title bar
            Constraint::Length(3), // Search input
            Constraint::Length(3), // Status buttons
            Constraint::Min(0),    // Records table
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    let title = Paragraph::new(format!(" Policy Table - {} ", app.origin))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_search(frame, app, chunks[1]);
    draw_status_buttons(frame, app, chunks[2]);
    draw_records(frame, app, chunks[3]);

    let footer = Paragraph::new(FOOTER_HINTS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[4]);
}

fn draw_search(frame: &mut Frame, app: &App, area: Rect) {
    let search = &app.selection().search;
    let line = if search.is_empty() {
        Line::from(Span::styled(
            "Search across all columns",
            Style::default().fg(Color::DarkGray).italic(),
        ))
    } else {
        Line::from(vec![Span::raw(search.as_str()), Span::styled("█", Style::default().fg(Color::Cyan))])
    };

    let input = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Search "));
    frame.render_widget(input, area);
}

fn draw_status_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.selection().status;
    let mut spans = Vec::with_capacity(StatusSelector::BUTTONS.len() * 2);
    for selector in StatusSelector::BUTTONS {
        let style = if selector == active {
            Style::default().fg(Color::White).bg(Color::Indexed(63)).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", selector.label()), style));
        spans.push(Span::raw(" "));
    }

    let buttons = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(buttons, area);
}

fn draw_records(frame: &mut Frame, app: &App, area: Rect) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Records ({} of {}) ", app.visible_len(), app.total_len()));
    if let Some(record) = app.selected_record() {
        let id = table::cell_text(record, Field::ProposalNumber);
        let status = table::status_label(record).unwrap_or_default();
        block = block.title_bottom(format!(" {} · {} ", id, status));
    }

    let header = Row::new(table::headers().into_iter().map(Cell::from))
        .style(Style::default().fg(Color::Cyan).bold());
    let widths = [Constraint::Ratio(1, Field::ALL.len() as u32); Field::ALL.len()];

    if app.visible_len() == 0 {
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);
        let empty: Vec<Row> = Vec::new();
        frame.render_widget(Table::new(empty, widths).header(header), parts[0]);
        let placeholder = Paragraph::new(NO_RECORDS_PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, parts[1]);
        return;
    }

    let rows: Vec<Row> = app
        .visible_records()
        .map(|record| Row::new(table::row_cells(record).into_iter().map(Cell::from)))
        .collect();

    let records = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray).bold())
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.cursor()));
    frame.render_stateful_widget(records, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_table_core::{Dataset, Record};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_plain_text(terminal.backend().buffer())
    }

    /// Convert a Buffer into a plain text grid.
    fn buffer_to_plain_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                let symbol = buf[(x, y)].symbol();
                out.push_str(if symbol.is_empty() { " " } else { symbol });
            }
            out.push('\n');
        }
        out
    }

    fn sample_app() -> App {
        App::new(Dataset::sample().unwrap(), "bundled sample", StatusSelector::All)
    }

    #[test]
    fn test_renders_headers_buttons_and_rows() {
        let app = sample_app();
        let screen = render(&app, 160, 30);
        assert!(screen.contains("Policy Table - bundled sample"));
        assert!(screen.contains("Policy Number"));
        assert!(screen.contains("Terminated"));
        assert!(screen.contains("Lapse"));
        assert!(screen.contains("PR-10001"));
        assert!(screen.contains(&format!("Records ({} of {})", app.visible_len(), app.total_len())));
    }

    #[test]
    fn test_status_cells_are_formatted() {
        let records = vec![Record::default()
            .with(Field::ProposalNumber, "PR-1")
            .with(Field::Status, "SURRENDERED")];
        let app = App::new(Dataset::new(records), "test", StatusSelector::All);
        let screen = render(&app, 160, 20);
        let row = screen
            .lines()
            .find(|line| line.contains("PR-1"))
            .expect("record row rendered");
        assert!(row.contains("Surrendered"));
        assert!(!screen.contains("SURRENDERED"));
    }

    #[test]
    fn test_empty_visible_set_shows_placeholder() {
        let mut app = sample_app();
        app.set_search("no such policy anywhere");
        let screen = render(&app, 120, 24);
        assert!(screen.contains(NO_RECORDS_PLACEHOLDER));
        assert!(screen.contains("Records (0 of"));
    }

    #[test]
    fn test_search_text_is_echoed() {
        let mut app = sample_app();
        app.set_search("hart");
        let screen = render(&app, 120, 24);
        assert!(screen.contains("hart"));
        assert!(!screen.contains("Search across all columns"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let app = sample_app();
        let screen = render(&app, 20, 6);
        assert_eq!(screen.lines().count(), 6);
    }
}
