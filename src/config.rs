use crate::gui::StyleType;
use crate::monitor::{DisplayId, Monitor};
use iced::Size;
use std::sync::{Arc, Mutex};

/// Preview pane dimensions, in logical pixels.
pub const PANE_WIDTH: f32 = 400.0;
pub const PANE_HEIGHT: f32 = 300.0;

pub fn pane_size() -> Size {
    Size {
        width: PANE_WIDTH,
        height: PANE_HEIGHT,
    }
}

/// Dialog window size: the pane plus padding, hint text and the button row.
pub fn window_size() -> Size {
    Size {
        width: PANE_WIDTH + 40.0,
        height: PANE_HEIGHT + 130.0,
    }
}

/// Caller-supplied knobs for one picker invocation.
#[derive(Debug, Clone, Default)]
pub struct PickOptions {
    /// Display to preselect; the primary display when absent or unknown.
    pub default_display: Option<DisplayId>,
    /// Dialog window title; a stock title when absent.
    pub title: Option<String>,
    /// Color theme the dialog is drawn with.
    pub theme: StyleType,
}

/// Per-invocation context handed to the GUI runtime: the display snapshot,
/// the caller's options and the slot the confirmed display id is written to.
#[derive(Clone)]
pub struct PickContext {
    pub monitors: Vec<Monitor>,
    pub default_display: Option<DisplayId>,
    pub title: String,
    pub theme: StyleType,
    pub chosen: Arc<Mutex<Option<DisplayId>>>,
}

impl PickContext {
    pub fn new(monitors: Vec<Monitor>, options: PickOptions) -> Self {
        PickContext {
            monitors,
            default_display: options.default_display,
            title: options.title.unwrap_or_else(|| String::from("Pick a monitor")),
            theme: options.theme,
            chosen: Arc::new(Mutex::new(None)),
        }
    }
}

/// Returns a version as specified in Cargo.toml
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn app_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}
