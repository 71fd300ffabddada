use crate::gui::style::theme::csx::StyleType;
use crate::layout;
use crate::monitor::{DisplayId, Monitor};
use iced::Renderer;
use iced::keyboard::key::Named;
use iced::keyboard::{Event, Key};
use iced::mouse::{Cursor, Interaction};
use iced::widget::Action;
use iced::widget::canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Size, mouse};

const MONITOR_FILL: Color = Color {
    r: 0.3215686,
    g: 0.5411765,
    b: 0.8,
    a: 1.0,
};

/// Height of the strip drawn along the primary display's top edge.
const MENUBAR_HEIGHT: f32 = 6.0;

/// Canvas program that renders the scaled monitor map and reports clicks.
///
/// Each display is a flat rectangle; the primary display carries a light strip
/// along its top edge and the selected display is outlined with a thicker
/// stroke than the others.
pub struct MonitorMap<'a, Message> {
    monitors: &'a [Monitor],
    previews: &'a [Rectangle],
    selected: Option<DisplayId>,
    on_click: Option<Box<dyn Fn(Point) -> Message + 'a>>,
    on_confirm: Option<Message>,
    on_esc: Option<Message>,
}

impl<'a, Message> MonitorMap<'a, Message> {
    pub fn new(
        monitors: &'a [Monitor],
        previews: &'a [Rectangle],
        selected: Option<DisplayId>,
    ) -> Self {
        Self {
            monitors,
            previews,
            selected,
            on_click: None,
            on_confirm: None,
            on_esc: None,
        }
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: 'a + Fn(Point) -> Message,
    {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn on_confirm(mut self, message: Message) -> Self {
        self.on_confirm = Some(message);
        self
    }

    pub fn on_esc(mut self, message: Message) -> Self {
        self.on_esc = Some(message);
        self
    }
}

impl<'a, Message: Clone> canvas::Program<Message, StyleType> for MonitorMap<'a, Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Keyboard(Event::KeyPressed { key, .. }) => {
                if *key == Key::Named(Named::Escape) {
                    self.on_esc
                        .clone()
                        .map(|m| Action::publish(m).and_capture())
                } else if *key == Key::Named(Named::Enter) {
                    self.on_confirm
                        .clone()
                        .map(|m| Action::publish(m).and_capture())
                } else {
                    None
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                self.on_click
                    .as_ref()
                    .map(|callback| Action::publish(callback(position)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &StyleType,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let outline = theme.get_palette().text;

        for (monitor, rect) in self.monitors.iter().zip(self.previews) {
            frame.fill_rectangle(rect.position(), rect.size(), MONITOR_FILL);

            if monitor.is_primary {
                let bar = inset(*rect, 1.0);
                let bar_size = Size::new(bar.width, MENUBAR_HEIGHT.min(bar.height));
                frame.fill_rectangle(bar.position(), bar_size, Color::WHITE);
                frame.stroke(
                    &Path::line(
                        Point::new(bar.x, bar.y + bar_size.height),
                        Point::new(bar.x + bar.width, bar.y + bar_size.height),
                    ),
                    Stroke::default().with_color(outline).with_width(1.0),
                );
            }

            if self.selected == Some(monitor.id) {
                let highlight = inset(*rect, 1.5);
                frame.stroke(
                    &Path::rectangle(highlight.position(), highlight.size()),
                    Stroke::default().with_color(outline).with_width(3.0),
                );
            } else {
                frame.stroke(
                    &Path::rectangle(rect.position(), rect.size()),
                    Stroke::default().with_color(outline).with_width(1.0),
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Interaction {
        let hovering = cursor
            .position_in(bounds)
            .and_then(|position| layout::hit_test(self.previews, position))
            .is_some();

        if hovering {
            Interaction::Pointer
        } else {
            Interaction::default()
        }
    }
}

fn inset(rect: Rectangle, amount: f32) -> Rectangle {
    Rectangle::new(
        Point::new(rect.x + amount, rect.y + amount),
        Size::new(rect.width - 2.0 * amount, rect.height - 2.0 * amount),
    )
}
