use crate::gui::style::theme::palette::Palette;
use crate::rgba8;
use iced::Color;
use iced::theme::{Base, Mode, Style};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum StyleType {
    Dark,
    #[default]
    Light,
}

impl StyleType {
    pub fn get_palette(&self) -> Palette {
        match self {
            StyleType::Dark => Palette {
                background: rgba8!(34.0, 52.0, 74.0, 1.0),
                primary: rgba8!(44.0, 62.0, 84.0, 1.0),
                primary_darker: rgba8!(24.0, 42.0, 64.0, 1.0),
                secondary: rgba8!(159.0, 106.0, 65.0, 1.0),
                danger: rgba8!(225.0, 100.0, 100.0, 1.0),
                text: Color::WHITE,
                text_inv: Color::BLACK,
            },
            StyleType::Light => Palette {
                background: rgba8!(220.0, 220.0, 220.0, 1.0),
                primary: rgba8!(210.0, 210.0, 210.0, 1.0),
                primary_darker: rgba8!(180.0, 180.0, 180.0, 1.0),
                secondary: rgba8!(160.0, 160.0, 160.0, 1.0),
                danger: rgba8!(225.0, 80.0, 80.0, 1.0),
                text: Color::BLACK,
                text_inv: Color::WHITE,
            },
        }
    }
}

impl Base for StyleType {
    fn default(preference: Mode) -> Self {
        match preference {
            Mode::Dark => StyleType::Dark,
            Mode::Light | Mode::None => StyleType::Light,
        }
    }

    fn mode(&self) -> Mode {
        match self {
            StyleType::Dark => Mode::Dark,
            StyleType::Light => Mode::Light,
        }
    }

    fn name(&self) -> &str {
        match self {
            StyleType::Dark => "Dark",
            StyleType::Light => "Light",
        }
    }

    fn base(&self) -> Style {
        let colors = self.get_palette();
        Style {
            background_color: colors.background,
            text_color: colors.text,
        }
    }

    fn palette(&self) -> Option<iced::theme::Palette> {
        None
    }
}
