use crate::config::{self, PickContext};
use crate::gui::common::messages::AppEvent;
use crate::gui::components::MonitorMap;
use crate::gui::style::button::ButtonType;
use crate::gui::style::container::ContainerType;
use crate::gui::style::text::TextType;
use crate::gui::style::theme::csx::StyleType;
use crate::gui::widget::{
    Button, Canvas, Column, Container, Element, IcedButtonExt, Row, Text, horizontal_space,
};
use crate::session::PickSession;
use iced::Alignment::Center;
use iced::Length::Fill;
use iced::window::{Id, Position};
use iced::{Subscription, Task, theme::Style, window};

pub struct App {
    ctx: PickContext,
    session: PickSession,
    window: Option<Id>,
}

impl App {
    pub fn new(ctx: PickContext) -> (Self, Task<AppEvent>) {
        let mut session = PickSession::new(ctx.monitors.clone(), config::pane_size());

        let boot = match session.open(ctx.default_display) {
            Ok(()) => Task::done(AppEvent::OpenPickerWindow),
            Err(e) => {
                // Cannot happen after a successful enumeration; bail out as a
                // cancellation rather than showing an empty pane.
                log::error!("picker session failed to open: {e}");
                Task::done(AppEvent::Cancel)
            }
        };

        (
            Self {
                ctx,
                session,
                window: None,
            },
            boot,
        )
    }

    pub fn update(&mut self, message: AppEvent) -> Task<AppEvent> {
        match message {
            AppEvent::OpenPickerWindow => {
                if self.window.is_some() {
                    return Task::none();
                }

                let (id, open_task) = window::open(window::Settings {
                    size: config::window_size(),
                    position: Position::Centered,
                    resizable: false,
                    exit_on_close_request: false,
                    ..Default::default()
                });
                self.window = Some(id);

                open_task.discard().chain(window::gain_focus(id))
            }
            AppEvent::PaneClicked(point) => {
                self.session.pick_at(point);
                Task::none()
            }
            AppEvent::Confirm => {
                self.session.confirm();
                self.finish()
            }
            AppEvent::Cancel => {
                self.session.cancel();
                self.finish()
            }
            AppEvent::CloseRequested(id) => {
                if self.window == Some(id) {
                    self.session.cancel();
                    self.finish()
                } else {
                    Task::none()
                }
            }
        }
    }

    /// Tears the session down, publishes the outcome and stops the runtime.
    fn finish(&mut self) -> Task<AppEvent> {
        let outcome = self.session.close();
        *self.ctx.chosen.lock().unwrap() = outcome;

        match self.window.take() {
            Some(id) => window::close(id).chain(iced::exit()),
            None => iced::exit(),
        }
    }

    pub fn view(&self, _id: Id) -> Element<'_, AppEvent> {
        if self.window.is_none() {
            return horizontal_space().into();
        }

        let hint = match self.session.selected_monitor() {
            Some(monitor) if monitor.is_primary => format!("{} (primary)", monitor.name),
            Some(monitor) => monitor.name.clone(),
            None => String::from("Click a monitor to select it"),
        };

        let map = Canvas::new(
            MonitorMap::new(
                self.session.monitors(),
                self.session.previews(),
                self.session.selected(),
            )
            .on_click(AppEvent::PaneClicked)
            .on_confirm(AppEvent::Confirm)
            .on_esc(AppEvent::Cancel),
        )
        .width(config::PANE_WIDTH)
        .height(config::PANE_HEIGHT);

        let buttons = Row::new()
            .spacing(10)
            .push(
                Button::new(Text::new("Cancel").align_x(Center).width(Fill))
                    .width(110)
                    .class(ButtonType::Alert)
                    .on_press(AppEvent::Cancel),
            )
            .push(horizontal_space().width(Fill))
            .push(
                Button::new(Text::new("Use this monitor").align_x(Center).width(Fill))
                    .width(160)
                    .on_press_if(self.session.selected().is_some(), || AppEvent::Confirm),
            );

        Column::new()
            .padding(20)
            .spacing(12)
            .push(Container::new(map).class(ContainerType::Pane))
            .push(Text::new(hint).size(14).class(TextType::Subtitle))
            .push(buttons)
            .into()
    }

    pub fn title(&self, _id: Id) -> String {
        self.ctx.title.clone()
    }

    pub fn theme(&self, _id: Id) -> StyleType {
        self.ctx.theme
    }

    pub fn style(&self, theme: &StyleType) -> Style {
        Style {
            background_color: theme.get_palette().background,
            text_color: theme.get_palette().text,
        }
    }

    pub fn subscription(&self) -> Subscription<AppEvent> {
        window::close_requests().map(AppEvent::CloseRequested)
    }
}
