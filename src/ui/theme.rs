/// Colors and widget styles for the feed
use iced::theme::Palette;
use iced::widget::{button, container, text_editor, text_input};
use iced::{Background, Border, Color, Theme};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

// ========== Palette ==========

pub const PRIMARY: Color = rgb(0x34, 0x34, 0x34);
pub const PRIMARY_90: Color = rgb(0x2b, 0x2b, 0x2b);
pub const PRIMARY_80: Color = rgb(0x31, 0x31, 0x31);
pub const PRIMARY_70: Color = rgb(0x3b, 0x3b, 0x3b);
pub const PRIMARY_60: Color = rgb(0x49, 0x49, 0x49);
pub const PRIMARY_50: Color = rgb(0x71, 0xbb, 0x00);
pub const PRIMARY_40: Color = rgb(0x7a, 0x7a, 0x7a);
pub const PRIMARY_30: Color = rgb(0x9f, 0x9f, 0x9f);
pub const GREEN: Color = rgb(0x71, 0xbb, 0x00);
pub const DANGER: Color = rgb(0xd6, 0x45, 0x45);

pub fn theme() -> Theme {
    Theme::custom(
        "Photo Feed".to_string(),
        Palette {
            background: PRIMARY,
            text: Color::WHITE,
            primary: PRIMARY_50,
            success: GREEN,
            danger: DANGER,
        },
    )
}

// ========== Containers ==========

pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PRIMARY)),
        ..container::Style::default()
    }
}

pub fn nav(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PRIMARY_90)),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// The form box and the feed cards
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PRIMARY_80)),
        border: Border {
            color: PRIMARY_70,
            width: 1.0,
            radius: 3.0.into(),
        },
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// Round slot shown before a photo is picked
pub fn photo_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PRIMARY_60)),
        border: Border {
            color: PRIMARY_40,
            width: 1.0,
            radius: 44.0.into(),
        },
        text_color: Some(PRIMARY_30),
        ..container::Style::default()
    }
}

// ========== Inputs ==========

pub fn input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let mut style = text_input::default(theme, status);
    style.background = Background::Color(PRIMARY_60);
    style.placeholder = PRIMARY_30;
    style.value = Color::WHITE;
    style.border = Border {
        color: match status {
            text_input::Status::Focused | text_input::Status::Hovered => PRIMARY_50,
            _ => Color::TRANSPARENT,
        },
        width: 2.0,
        radius: 8.0.into(),
    };
    style
}

pub fn editor(theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let mut style = text_editor::default(theme, status);
    style.background = Background::Color(PRIMARY_60);
    style.placeholder = PRIMARY_30;
    style.value = Color::WHITE;
    style.border = Border {
        color: match status {
            text_editor::Status::Focused | text_editor::Status::Hovered => PRIMARY_50,
            _ => Color::TRANSPARENT,
        },
        width: 2.0,
        radius: 8.0.into(),
    };
    style
}

// ========== Buttons ==========

/// Publish button: green once the draft can be submitted
pub fn publish(ready: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = if ready { GREEN } else { PRIMARY_60 };
        let ring = match status {
            button::Status::Hovered if ready => PRIMARY_50,
            _ => Color::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: PRIMARY_80,
            border: Border {
                color: ring,
                width: 2.0,
                radius: 8.0.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Underlined-looking text action ("Descartar")
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color::WHITE,
        _ => PRIMARY_50,
    };

    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}
