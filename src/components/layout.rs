// ABOUTME: Main layout component: content pane, bottom menu bar, and the overlays drawn on top

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
    style::{Color, Modifier, Style},
};

use crate::app::AppState;
use super::{HelpComponent, SnackbarComponent};

pub struct LayoutComponent {
    help: HelpComponent,
    snackbar: SnackbarComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            help: HelpComponent::new(),
            snackbar: SnackbarComponent::new(),
        }
    }

    pub fn snackbar(&self) -> &SnackbarComponent {
        &self.snackbar
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),     // Main content
                Constraint::Length(3),  // Bottom menu bar
            ])
            .split(frame.size());

        self.render_content(frame, main_chunks[0], state);
        self.render_menu_bar(frame, main_chunks[1]);

        // Snackbar sits just above the menu bar
        self.snackbar.render(frame, main_chunks[0], state);

        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    fn render_content(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let status = match state.current_notification() {
            Some(notification) => format!("Showing {} notification {}", notification.kind, notification.id()),
            None => "No notification showing".to_string(),
        };

        let text = vec![
            Line::from(Span::styled(
                "Snackbar notifications",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Post a notification and it clears itself after the display time."),
            Line::from("Posting again, or repeating the same message, restarts the timer."),
            Line::from(""),
            Line::from(Span::styled(status, Style::default().fg(Color::Gray))),
        ];

        let content = Paragraph::new(text)
            .block(
                Block::default()
                    .title("Snackbar")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(content, area);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let menu_text = "[s]uccess [e]rror [i]nfo [r]epeat [x]dismiss [?]help [q]uit";

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
