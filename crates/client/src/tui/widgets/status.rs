use hiscore_core::{rate_limit::RateLimitSnapshot, tracker::StatusMessage, validate::Severity};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Widget,
};

use crate::tui::THEME;

/// The submission feedback line: an active rate-limit countdown wins over
/// the last validation outcome, which auto-clears core-side.
pub struct StatusLine<'a> {
    pub status: Option<&'a StatusMessage>,
    pub rate_limit: &'a RateLimitSnapshot,
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.rate_limit.limited {
            let remaining_ms = self.rate_limit.time_until_reset.as_millis() as u64;
            let seconds = remaining_ms.div_ceil(1_000);
            let line = Line::styled(
                format!("Rate limited — next submission in {seconds}s"),
                Style::default().fg(THEME.palette.countdown),
            );
            line.render(area, buf);
            return;
        }

        let Some(status) = self.status else {
            return;
        };
        let color = match status.severity {
            Severity::Info => THEME.palette.success,
            Severity::Error => THEME.palette.danger,
        };
        Line::styled(status.message.clone(), Style::default().fg(color)).render(area, buf);
    }
}
