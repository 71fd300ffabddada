//! Widget aliases pinned to the crate's custom theme, so views never spell
//! out the theme and renderer parameters.

use crate::gui::style::theme::csx::StyleType;
use iced::Renderer;
use iced::widget;

pub type Element<'a, Message> = iced::Element<'a, Message, StyleType, Renderer>;

pub type Button<'a, Message> = widget::Button<'a, Message, StyleType, Renderer>;
pub type Canvas<P, Message> = widget::Canvas<P, Message, StyleType, Renderer>;
pub type Column<'a, Message> = widget::Column<'a, Message, StyleType, Renderer>;
pub type Container<'a, Message> = widget::Container<'a, Message, StyleType, Renderer>;
pub type Row<'a, Message> = widget::Row<'a, Message, StyleType, Renderer>;
pub type Text<'a> = iced::advanced::widget::Text<'a, StyleType, Renderer>;

/// Fill-width spacer, matching the `horizontal_space` helper that newer iced
/// releases replaced with the bare `space()`.
pub fn horizontal_space() -> widget::Space {
    widget::space().width(iced::Length::Fill)
}

/// Conditionally wires the press handler; without one the button renders as
/// disabled.
pub trait IcedButtonExt<'a, Message> {
    fn on_press_if(self, condition: bool, msg: impl FnOnce() -> Message) -> Self;
}

impl<'a, Message> IcedButtonExt<'a, Message> for Button<'a, Message> {
    fn on_press_if(self, condition: bool, msg: impl FnOnce() -> Message) -> Self {
        if condition {
            self.on_press(msg())
        } else {
            self
        }
    }
}
