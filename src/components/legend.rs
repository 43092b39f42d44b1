//! Legend component
//!
//! Static status → label/color reference. The only state is which tooltip,
//! if any, is showing.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::contains;
use crate::model::SeatStatus;
use crate::theme;
use anyhow::Result;
use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const LEGEND_LABEL: &str = "凡例: ";
const BADGE_GAP: u16 = 2;

#[derive(Debug, Clone, Default)]
pub struct LegendComponent {
    tooltip: Option<SeatStatus>,
    /// Tooltip came from hovering, so leaving the badge hides it
    hovered: bool,
    badge_areas: Vec<(Rect, SeatStatus)>,
}

impl LegendComponent {
    #[cfg(test)]
    pub fn tooltip(&self) -> Option<SeatStatus> {
        self.tooltip
    }

    fn next_tooltip(&self) -> Option<SeatStatus> {
        let all = SeatStatus::all();
        match self.tooltip {
            None => Some(all[0]),
            Some(current) => all
                .iter()
                .position(|s| *s == current)
                .and_then(|i| all.get(i + 1))
                .copied(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.badge_areas.clear();

        let mut spans = vec![Span::styled(
            LEGEND_LABEL,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        let mut x = area.x + LEGEND_LABEL.width() as u16;
        for (index, status) in SeatStatus::all().into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" ".repeat(BADGE_GAP as usize)));
                x += BADGE_GAP;
            }
            let badge = format!(" {} ", status.label());
            let width = badge.width() as u16;
            let mut style = theme::badge_style(status);
            if self.tooltip == Some(status) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(badge, style));
            self.badge_areas.push((Rect::new(x, area.y, width, 1), status));
            x = x.saturating_add(width);
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(status) = self.tooltip {
            lines.push(Line::from(Span::styled(
                format!("  {}: {}", status.label(), status.description()),
                Style::default().fg(theme::MUTED),
            )));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Component for LegendComponent {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Moved {
            return Ok(None);
        }
        let hit = self
            .badge_areas
            .iter()
            .find(|(rect, _)| contains(*rect, mouse.column, mouse.row))
            .map(|(_, status)| *status);

        let action = match hit {
            Some(status) if self.tooltip != Some(status) => {
                self.hovered = true;
                Some(Action::ShowTooltip(Some(status)))
            }
            None if self.hovered => {
                self.hovered = false;
                Some(Action::ShowTooltip(None))
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ShowTooltip(status) => self.tooltip = status,
            Action::CycleTooltip => {
                self.hovered = false;
                self.tooltip = self.next_tooltip();
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.render(frame, area);
        Ok(())
    }
}
