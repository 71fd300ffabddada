use crate::config::{PickContext, app_name};
use crate::error::PickError;

mod app;
mod common;
mod components;
mod style;
mod widget;

use self::app::App;

pub use self::style::theme::csx::StyleType;

/// Drives one modal picker session. Blocks until the dialog window closes;
/// the outcome is written to the context's shared slot before the runtime
/// exits.
pub fn run(ctx: PickContext) -> Result<(), PickError> {
    let daemon = iced::daemon(move || App::new(ctx.clone()), App::update, App::view)
        .settings(iced::Settings {
            id: Some(String::from(app_name())),
            ..Default::default()
        })
        .title(App::title)
        .style(App::style)
        .theme(App::theme)
        .antialiasing(true)
        .subscription(App::subscription);

    daemon
        .run()
        .map_err(|e| PickError::WindowFailed(e.to_string()))
}
