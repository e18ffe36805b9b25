use ratatui::style::{Color, Modifier, Style};

pub mod global {
    use super::*;

    pub const SELECTED_ITEM_STYLE: Style =
        Style::new().bg(Color::Blue).add_modifier(Modifier::BOLD);
    pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(Color::Green);
    pub const NORMAL_BORDER_STYLE: Style = Style::new().fg(Color::Reset);
}

pub mod root {
    use super::*;

    pub const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
    pub const VERSION_STYLE: Style = Style::new()
        .add_modifier(Modifier::ITALIC)
        .fg(Color::DarkGray);
}

pub mod line_edit {
    use super::*;

    pub const TEXT_STYLE: Style = Style::new().fg(Color::Reset);
    pub const TEXT_CURSOR_STYLE: Style = Style::new().fg(Color::Black).bg(Color::White);
}

pub mod wave_viewer {
    use super::*;

    pub const WAVEFORM_STYLE: Style = Style::new().fg(Color::LightCyan);
    pub const ZERO_LINE_STYLE: Style = Style::new().fg(Color::DarkGray);
    pub const LEVEL_LABEL_STYLE: Style = Style::new().fg(Color::DarkGray);
    pub const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
    pub const REVEALED_BIT_STYLE: Style = Style::new()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);
    pub const PENDING_BIT_STYLE: Style = Style::new().fg(Color::DarkGray);
    pub const PLACEHOLDER_STYLE: Style = Style::new()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
}

pub mod key_maps_help_bar {
    use super::*;

    pub const KEY_ID_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);
    pub const DESCRIPTION_STYLE: Style =
        Style::new().fg(Color::Green).add_modifier(Modifier::ITALIC);
}

pub mod dropdown {
    use super::*;

    pub const ITEM_DEFAULT_STYLE: Style = Style::new().fg(Color::White);
}

pub mod info_window {
    use super::*;

    pub const HEADING_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
    pub const SCHEME_STYLE: Style = Style::new()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);
    pub const RULE_STYLE: Style = Style::new().fg(Color::Reset);
}

pub mod error_box {
    use super::*;

    pub const BORDER_STYLE: Style = Style::new().fg(Color::Red);
    pub const TITLE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
    pub const BUTTON_STYLE: Style = Style::new().fg(Color::White).bg(Color::Red);
}
