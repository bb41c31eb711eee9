//! Presence panel: who else is studying, and the avatar picker

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Panel},
    domain::{
        glyphs,
        presence::{Avatar, SELF_ID},
    },
    presentation::components::ViewContext,
};

#[derive(Debug, Clone, Default)]
pub struct PresenceComponent;

impl PresenceComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, ctx: &ViewContext, frame: &mut Frame, area: Rect) {
        let roster = state.roster();
        let focused = state.presence.focused_count(state.user_status);
        let block = Block::bordered()
            .title(" In the room ")
            .title_bottom(Line::styled(
                format!(" {focused}/{} focusing ", roster.len()),
                ctx.palette.muted,
            ))
            .border_style(ctx.border_style(state, Panel::Presence));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let [picker_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        frame.render_widget(Paragraph::new(self.picker_line(state.avatar, ctx)), picker_area);

        let items: Vec<ListItem> = roster
            .iter()
            .map(|entry| {
                let name_style = if entry.id == SELF_ID {
                    ctx.palette.highlight
                } else {
                    ctx.palette.text
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", entry.avatar.glyph())),
                    Span::styled(entry.display_name.clone(), name_style),
                    Span::raw("  "),
                    Span::styled(
                        format!("{} {}", entry.status.glyph(), entry.status.label()),
                        ctx.palette.muted,
                    ),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items), list_area);
    }

    /// The row of avatars with the selected one marked
    fn picker_line(&self, selected: Avatar, ctx: &ViewContext) -> Line<'static> {
        let spans = Avatar::all()
            .into_iter()
            .flat_map(|avatar| {
                if avatar == selected {
                    vec![
                        Span::styled(glyphs::icon("selection"), ctx.palette.accent),
                        Span::styled(avatar.glyph(), ctx.palette.accent),
                        Span::raw(" "),
                    ]
                } else {
                    vec![Span::raw(" "), Span::raw(avatar.glyph()), Span::raw(" ")]
                }
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }
}
