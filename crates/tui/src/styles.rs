use ratatui::{
    prelude::Text,
    style::{Color, Modifier, Style},
};

pub fn error_text(t: impl Into<Text<'static>>) -> Text<'static> {
    let mut t = t.into();
    t.patch_style(Style::default().fg(Color::Red));
    t
}

pub fn card_title(t: impl Into<Text<'static>>) -> Text<'static> {
    let mut t = t.into();
    t.patch_style(Style::default().add_modifier(Modifier::BOLD));
    t
}

/// Style for the cover line of a card.
pub fn card_media(t: impl Into<Text<'static>>) -> Text<'static> {
    let mut t = t.into();
    t.patch_style(Style::default().fg(Color::DarkGray));
    t
}
