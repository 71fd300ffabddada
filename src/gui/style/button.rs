use crate::gui::style::theme::color::mix;
use crate::gui::style::theme::csx::StyleType;
use crate::gui::style::{BORDER_RADIUS, BORDER_WIDTH};
use iced::widget::button::{Catalog, Status, Style};
use iced::{Background, Border, Color};

#[derive(Clone, Copy, Debug, Default)]
pub enum ButtonType {
    #[default]
    Standard,
    Alert,
}

impl Catalog for StyleType {
    type Class<'a> = ButtonType;

    fn default<'a>() -> Self::Class<'a> {
        ButtonType::Standard
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        let colors = self.get_palette();

        let base_color = match class {
            ButtonType::Standard => colors.primary_darker,
            ButtonType::Alert => colors.danger,
        };

        let active = Style {
            background: Some(Background::Color(base_color)),
            border: Border {
                radius: BORDER_RADIUS.into(),
                width: BORDER_WIDTH,
                color: mix(base_color, colors.secondary),
            },
            text_color: match class {
                ButtonType::Alert => colors.text_inv,
                ButtonType::Standard => colors.text,
            },
            ..Style::default()
        };

        match status {
            Status::Active => active,
            Status::Hovered | Status::Pressed => Style {
                background: Some(Background::Color(colors.active(base_color))),
                ..active
            },
            Status::Disabled => Style {
                background: Some(Background::Color(colors.disabled(base_color))),
                text_color: Color {
                    a: 0.4,
                    ..active.text_color
                },
                ..active
            },
        }
    }
}
