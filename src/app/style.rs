use iced::widget::{button, container, text_editor};
use iced::{Background, Border, Color, Theme};

// Color palette
pub(super) const COL_BG: Color = Color::from_rgb8(11, 16, 32);
pub(super) const COL_PANEL: Color = Color::from_rgb8(18, 26, 50);
pub(super) const COL_EDITOR_BG: Color = Color::from_rgb8(15, 23, 48);
pub(super) const COL_TEXT: Color = Color::from_rgb8(232, 236, 255);
pub(super) const COL_MUTED: Color = Color::from_rgb8(169, 178, 211);
pub(super) const COL_ACCENT: Color = Color::from_rgb8(110, 168, 254);
pub(super) const COL_SUCCESS: Color = Color::from_rgb8(126, 231, 135);
pub(super) const COL_DANGER: Color = Color::from_rgb8(255, 107, 107);

const BORDER: Color = Color::from_rgba8(255, 255, 255, 0.12);

pub(super) fn glass_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(COL_PANEL)),
        text_color: Some(COL_TEXT),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Dims everything behind the confirmation dialog.
pub(super) fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.6, ..COL_BG })),
        ..Default::default()
    }
}

pub(super) fn editor_style(theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let mut style = text_editor::default(theme, status);
    style.background = Background::Color(COL_EDITOR_BG);
    style.value = COL_TEXT;
    style.placeholder = COL_MUTED;
    style.selection = Color { a: 0.45, ..COL_ACCENT };
    style.border = Border {
        color: match status {
            text_editor::Status::Focused { .. } => COL_ACCENT,
            _ => BORDER,
        },
        width: 1.0,
        radius: 8.0.into(),
    };
    style
}

/// The dot next to the status message; lit while the saved notice shows.
pub(super) fn saved_indicator(saved: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(if saved { COL_SUCCESS } else { COL_MUTED })),
        border: Border {
            radius: 5.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn filled(base: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color { a: 0.85, ..base },
        button::Status::Disabled => Color { a: 0.4, ..base },
        button::Status::Active => base,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: COL_BG,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub(super) fn btn_danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled(COL_DANGER, status)
}

pub(super) fn btn_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.08,
        _ => 0.0,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..Color::WHITE })),
        text_color: COL_TEXT,
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
