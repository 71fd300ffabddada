use crate::gui::style::theme::csx::StyleType;
use crate::gui::style::{BORDER_RADIUS, BORDER_WIDTH};
use iced::widget::container::{Catalog, Style};
use iced::{Background, Border, Color};

#[derive(Clone, Copy, Debug, Default)]
pub enum ContainerType {
    #[default]
    Standard,
    /// The monitor preview pane: a recessed surface with a thin border.
    Pane,
}

impl Catalog for StyleType {
    type Class<'a> = ContainerType;

    fn default<'a>() -> Self::Class<'a> {
        ContainerType::Standard
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        let colors = self.get_palette();

        match class {
            ContainerType::Standard => Style {
                background: Some(Background::Color(Color::TRANSPARENT)),
                ..Style::default()
            },
            ContainerType::Pane => Style {
                background: Some(Background::Color(colors.primary)),
                border: Border {
                    radius: BORDER_RADIUS.into(),
                    width: BORDER_WIDTH,
                    color: colors.secondary,
                },
                text_color: Some(colors.text),
                ..Style::default()
            },
        }
    }
}
