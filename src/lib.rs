//! A modal "pick a monitor" dialog.
//!
//! The crate enumerates the attached displays, draws a scaled miniature map of
//! their physical arrangement inside a fixed pane, lets the user click a
//! rectangle to choose a display and hands the chosen display id back to the
//! caller. [`pick_monitor`] blocks the calling thread for the whole modal
//! session; [`can_pick_monitor`] tells callers whether the dialog is worth
//! showing at all.

use std::sync::Arc;

pub mod config;
pub mod error;
mod gui;
pub mod layout;
pub mod monitor;
pub mod session;

pub use config::{PickContext, PickOptions};
pub use error::PickError;
pub use gui::StyleType;
pub use monitor::{DisplayId, MAX_MONITORS, Monitor, can_pick_monitor, list_active_displays};

/// Runs one full modal picker session and returns the confirmed display id.
///
/// Blocks the calling thread until the dialog closes. `Err(Cancelled)` means
/// the user declined; enumeration and window failures are distinct variants
/// but mean the same thing to callers that only want a display or nothing.
pub fn pick_monitor(options: PickOptions) -> Result<DisplayId, PickError> {
    let monitors = monitor::list_active_displays(MAX_MONITORS)?;
    let ctx = PickContext::new(monitors, options);
    let chosen = Arc::clone(&ctx.chosen);

    gui::run(ctx)?;

    let picked = chosen.lock().unwrap().take();
    picked.ok_or(PickError::Cancelled)
}
