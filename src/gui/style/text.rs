use crate::gui::style::theme::csx::StyleType;
use iced::widget::text::{Catalog, Style};

#[derive(Clone, Copy, Debug, Default)]
pub enum TextType {
    #[default]
    Standard,
    Subtitle,
}

impl Catalog for StyleType {
    type Class<'a> = TextType;

    fn default<'a>() -> Self::Class<'a> {
        TextType::Standard
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        let colors = self.get_palette();
        Style {
            color: Some(match class {
                TextType::Standard => colors.text,
                TextType::Subtitle => colors.subtitle_text(),
            }),
        }
    }
}
