//! UI rendering
//!
//! Rendering functions that convert gate state into terminal output using
//! ratatui widgets. Rendering is a pure projection of `(App, InputState)`;
//! no screen-flow decisions are made here.

use agegate_app::{App, InputState, Screen, UnlockCheck};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PANEL_WIDTH: u16 = 44;
const PANEL_HEIGHT: u16 = 7;
const PROMPT_WIDTH: u16 = 3; // "> " inside the left border
const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border

/// Render the entire UI for the current state.
pub fn render(frame: &mut Frame, app: &App, input: &InputState) {
    // Until the startup probe resolves, the gate shows a placeholder.
    if app.screen() == Screen::Gate && app.unlock_check() != UnlockCheck::Resolved {
        render_checking(frame);
        return;
    }

    match app.screen() {
        Screen::Gate => render_gate(frame, app, input),
        Screen::Interstitial => render_interstitial(frame),
        Screen::Content => render_content(frame),
    }
}

/// Placeholder while the existing-unlock probe is in flight.
fn render_checking(frame: &mut Frame) {
    let area = centered(PANEL_WIDTH, PANEL_HEIGHT, frame.area());
    let paragraph = Paragraph::new("Checking your access...")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// The gate screen: prompt, date field, rejection status.
fn render_gate(frame: &mut Frame, app: &App, input: &InputState) {
    let area = centered(PANEL_WIDTH, PANEL_HEIGHT, frame.area());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3), Constraint::Length(1)])
        .split(area);
    let [title_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    let title = Paragraph::new("Enter your birthdate").alignment(Alignment::Center);
    frame.render_widget(title, *title_area);

    // Red border is the rejection cue; it clears on the next keystroke.
    let border_style = if app.input_rejected() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let block =
        Block::default().borders(Borders::ALL).border_style(border_style).title("DD/MM/YYYY");
    let entry = Paragraph::new(format!("> {}", input.buffer())).block(block);
    frame.render_widget(entry, *input_area);

    let cursor_x =
        input_area.x.saturating_add(PROMPT_WIDTH).saturating_add(input.cursor() as u16);
    let cursor_y = input_area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    frame.set_cursor_position((cursor_x, cursor_y));

    if let Some(message) = app.status_message() {
        let status = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)))
            .alignment(Alignment::Center);
        frame.render_widget(status, *status_area);
    }
}

/// The interstitial between a successful submission and the content.
fn render_interstitial(frame: &mut Frame) {
    let area = centered(PANEL_WIDTH, PANEL_HEIGHT, frame.area());
    let lines = vec![
        Line::styled("Noted.", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw("That makes you exactly old enough."),
        Line::raw(""),
        Line::styled("Press Enter to continue", Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// The unlocked content screen.
fn render_content(frame: &mut Frame) {
    let area = centered(PANEL_WIDTH, PANEL_HEIGHT, frame.area());
    let lines = vec![
        Line::styled(
            "Access granted",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw("Welcome in. This is the good stuff."),
        Line::styled("Press Esc to leave", Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Center a fixed-size panel inside `area`, clamped to fit.
fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x.saturating_add(area.width.saturating_sub(width) / 2);
    let y = area.y.saturating_add(area.height.saturating_sub(height) / 2);
    Rect { x, y, width, height }
}

#[cfg(test)]
mod tests {
    use agegate_app::GateEvent;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn gated_app() -> App {
        let mut app = App::new(2026);
        let _ = app.start();
        let _ = app.handle(GateEvent::UnlockMissing);
        app
    }

    fn rendered(app: &App, input: &InputState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app, input)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in buffer.area.top()..buffer.area.bottom() {
            for x in buffer.area.left()..buffer.area.right() {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn placeholder_until_probe_resolves() {
        let mut app = App::new(2026);
        let _ = app.start();

        let text = rendered(&app, &InputState::new());
        assert!(text.contains("Checking your access"));
    }

    #[test]
    fn gate_shows_field_and_typed_entry() {
        let mut app = gated_app();
        let mut input = InputState::new();
        let _ = input.type_str("1506", &mut app);

        let text = rendered(&app, &input);
        assert!(text.contains("Enter your birthdate"));
        assert!(text.contains("DD/MM/YYYY"));
        assert!(text.contains("> 15/06/"));
    }

    #[test]
    fn rejection_shows_the_status_message() {
        let mut app = gated_app();
        let _ = app.submit("");

        let text = rendered(&app, &InputState::new());
        assert!(text.contains("Enter a valid date as DD/MM/YYYY"));
    }

    #[test]
    fn interstitial_prompts_to_continue() {
        let mut app = gated_app();
        let _ = app.submit("15/06/2000");

        let text = rendered(&app, &InputState::new());
        assert!(text.contains("Press Enter to continue"));
    }

    #[test]
    fn content_screen_after_acknowledge() {
        let mut app = gated_app();
        let _ = app.submit("15/06/2000");
        let _ = app.acknowledge();

        let text = rendered(&app, &InputState::new());
        assert!(text.contains("Access granted"));
    }
}
