use hiscore_core::board::Score;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::THEME;

/// Ranked score rows for one game type, first rank highlighted.
pub struct ScoreTable<'a> {
    pub scores: &'a [Score],
}

impl Widget for ScoreTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.scores.is_empty() {
            Line::styled(
                "No scores yet",
                Style::default().fg(THEME.palette.ui_disabled),
            )
            .render(area, buf);
            return;
        }

        let max_lines = area.height as usize;
        for (i, score) in self.scores.iter().take(max_lines).enumerate() {
            let rank = i + 1;
            let rank_style = if rank == 1 {
                Style::default().fg(THEME.palette.rank_top).bold()
            } else {
                Style::default().fg(THEME.palette.ui_disabled)
            };

            let line = Line::from(vec![
                Span::styled(format!("{rank:>3}. "), rank_style),
                Span::styled(
                    format!("{:<16}", score.player),
                    Style::default().fg(THEME.palette.ui_text),
                ),
                Span::styled(
                    format!("{:>10}", score.value),
                    Style::default().fg(THEME.palette.ui_highlight),
                ),
            ]);

            let line_area = Rect {
                x: area.x,
                y: area.y + i as u16,
                width: area.width,
                height: 1,
            };
            line.render(line_area, buf);
        }
    }
}
