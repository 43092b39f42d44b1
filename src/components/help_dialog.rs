//! Help dialog component
//!
//! Lists every keyboard and mouse shortcut.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all shortcuts
#[derive(Debug, Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let margin = 3;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin / 2,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin),
        );
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" 操作方法 ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(description.to_string()),
        ]));
    };

    add_section(&mut lines, "座席表");
    add_shortcut(&mut lines, "←↑↓→ / hjkl", "カーソル移動");
    add_shortcut(&mut lines, "Enter / Space", "座席を選択してポップオーバーを開く");
    add_shortcut(&mut lines, "i", "座席情報ダイアログを開く");
    add_shortcut(&mut lines, "左クリック", "座席を選択してポップオーバーを開く");
    add_shortcut(&mut lines, "右クリック", "座席情報ダイアログを開く");

    add_section(&mut lines, "ポップオーバー / ダイアログ");
    add_shortcut(&mut lines, "← → / Tab", "ボタンを移動");
    add_shortcut(&mut lines, "Enter", "ボタンを押す");
    add_shortcut(&mut lines, "1 / 2 / 3", "空席 / 予約 / 使用");
    add_shortcut(&mut lines, "i", "ポップオーバーから詳細を開く");
    add_shortcut(&mut lines, "Esc", "閉じる");

    add_section(&mut lines, "凡例");
    add_shortcut(&mut lines, "t", "説明を順に表示");
    add_shortcut(&mut lines, "マウスオーバー", "説明を表示");

    add_section(&mut lines, "その他");
    add_shortcut(&mut lines, "?", "このヘルプ");
    add_shortcut(&mut lines, "q", "終了");
    add_shortcut(&mut lines, "Ctrl+c", "すぐに終了");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  利用不可の座席は変更できません",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}
