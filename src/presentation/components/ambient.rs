//! Ambient sound panel. Display only, nothing here makes a sound.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Panel},
    domain::{ambient::AmbientSound, glyphs},
    presentation::components::ViewContext,
};

#[derive(Debug, Clone, Default)]
pub struct AmbientComponent;

impl AmbientComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, ctx: &ViewContext, frame: &mut Frame, area: Rect) {
        let ambient = &state.ambient;
        let block = Block::bordered()
            .title(" Ambience ")
            .border_style(ctx.border_style(state, Panel::Ambient));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let [sounds_area, volume_area, now_playing_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let items: Vec<ListItem> = AmbientSound::all()
            .into_iter()
            .map(|sound| {
                let line = format!("{} {}", sound.glyph(), sound.label());
                if ambient.sound != Some(sound) {
                    return ListItem::new(line).style(ctx.palette.text);
                }
                let marker = if ambient.playing {
                    glyphs::icon("ambient.playing")
                } else {
                    glyphs::icon("ambient.paused")
                };
                ListItem::new(format!("{line} {marker}")).style(ctx.palette.accent)
            })
            .collect();
        let selected = AmbientSound::all()
            .iter()
            .position(|sound| *sound == ambient.highlighted);
        let mut list_state = ListState::default().with_selected(selected);
        let list = List::new(items)
            .highlight_style(ctx.palette.highlight)
            .highlight_symbol(glyphs::icon("selection"));
        frame.render_stateful_widget(list, sounds_area, &mut list_state);

        let volume_icon = if ambient.muted {
            glyphs::icon("ambient.muted")
        } else {
            glyphs::icon("ambient.volume")
        };
        let gauge = LineGauge::default()
            .label(format!("{volume_icon} {:>3}", ambient.effective_volume()))
            .filled_style(ctx.palette.accent)
            .unfilled_style(ctx.palette.muted)
            .ratio(f64::from(ambient.effective_volume()) / 100.0);
        frame.render_widget(gauge, volume_area);

        if let Some(name) = ambient.now_playing() {
            let line = Line::from(vec![
                Span::styled("Now playing: ", ctx.palette.muted),
                Span::styled(name, ctx.palette.text),
            ]);
            frame.render_widget(Paragraph::new(line), now_playing_area);
        }
    }
}
