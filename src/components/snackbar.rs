// ABOUTME: Snackbar overlay rendering the current notification with kind-specific color and icon
// Presentation is keyed by notification id so a repeated message replays its entrance highlight

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    style::{Color, Modifier, Style},
};
use std::time::{Duration, Instant};

use crate::app::AppState;
use crate::models::{NotificationId, NotificationKind};

/// How long a freshly shown snackbar stays highlighted.
const ENTRANCE: Duration = Duration::from_millis(400);
const MAX_WIDTH: u16 = 60;
const HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    Positive,
    Negative,
    Neutral,
}

impl From<NotificationKind> for Treatment {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Success => Treatment::Positive,
            NotificationKind::Error => Treatment::Negative,
            NotificationKind::Info => Treatment::Neutral,
        }
    }
}

impl Treatment {
    pub fn color(self) -> Color {
        match self {
            Treatment::Positive => Color::Green,
            Treatment::Negative => Color::Red,
            Treatment::Neutral => Color::Blue,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Treatment::Positive => "✓",
            Treatment::Negative => "✗",
            Treatment::Neutral => "ℹ",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Treatment::Positive => "Success",
            Treatment::Negative => "Error",
            Treatment::Neutral => "Info",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Presentation {
    id: NotificationId,
    shown_at: Instant,
}

pub struct SnackbarComponent {
    presented: Option<Presentation>,
}

impl SnackbarComponent {
    pub fn new() -> Self {
        Self { presented: None }
    }

    /// Id currently on screen, if any.
    pub fn presented_id(&self) -> Option<NotificationId> {
        self.presented.map(|p| p.id)
    }

    pub fn is_entering(&self) -> bool {
        self.presented.is_some_and(|p| p.shown_at.elapsed() < ENTRANCE)
    }

    /// Draws the snackbar along the bottom edge of `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(notification) = state.current_notification() else {
            self.presented = None;
            return;
        };

        if self.presented_id() != Some(notification.id()) {
            self.presented = Some(Presentation {
                id: notification.id(),
                shown_at: Instant::now(),
            });
        }

        let treatment = Treatment::from(notification.kind);
        let mut border_style = Style::default().fg(treatment.color());
        if self.is_entering() {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }

        let popup_area = Self::bottom_rect(area);
        frame.render_widget(Clear, popup_area);

        let text = Line::from(vec![
            Span::styled(
                format!("{} ", treatment.icon()),
                Style::default().fg(treatment.color()).add_modifier(Modifier::BOLD),
            ),
            Span::raw(notification.message),
        ]);

        let snackbar = Paragraph::new(text)
            .block(
                Block::default()
                    .title(format!("{} - [x] dismiss", treatment.title()))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White));

        frame.render_widget(snackbar, popup_area);
    }

    fn bottom_rect(area: Rect) -> Rect {
        let width = area.width.min(MAX_WIDTH);
        let height = area.height.min(HEIGHT);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + area.height - height,
            width,
            height,
        }
    }
}

impl Default for SnackbarComponent {
    fn default() -> Self {
        Self::new()
    }
}
