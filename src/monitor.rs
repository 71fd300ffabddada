use crate::error::PickError;
use display_info::DisplayInfo;
use iced::{Point, Rectangle, Size};

/// Opaque platform display identifier, stable for the session.
pub type DisplayId = u32;

/// Upper bound on the number of displays one snapshot will hold.
pub const MAX_MONITORS: usize = 16;

/// One physical monitor as reported by the platform at enumeration time.
#[derive(Debug, Clone, PartialEq)]
pub struct Monitor {
    pub id: DisplayId,
    pub name: String,
    pub is_primary: bool,
    /// Axis-aligned bounds in physical screen-pixel coordinates.
    pub bounds: Rectangle,
}

impl Monitor {
    fn from_info(info: &DisplayInfo) -> Self {
        Monitor {
            id: info.id,
            name: info.name.clone(),
            is_primary: info.is_primary,
            bounds: Rectangle::new(
                Point::new(info.x as f32, info.y as f32),
                Size::new(info.width as f32, info.height as f32),
            ),
        }
    }
}

/// Snapshots the active displays, capped at `max`.
///
/// A platform error and an empty list both map to `EnumerationFailed`; the
/// message tells them apart.
pub fn list_active_displays(max: usize) -> Result<Vec<Monitor>, PickError> {
    let displays = DisplayInfo::all().map_err(|e| PickError::EnumerationFailed(anyhow::Error::new(e)))?;

    if displays.is_empty() {
        return Err(PickError::EnumerationFailed(anyhow::anyhow!(
            "no active displays reported"
        )));
    }

    let monitors: Vec<Monitor> = displays.iter().take(max).map(Monitor::from_info).collect();
    log::debug!("enumerated {} display(s)", monitors.len());

    Ok(monitors)
}

/// True iff there is more than one display to choose from; a single-monitor
/// system has nothing to pick and callers can skip the dialog entirely.
pub fn can_pick_monitor() -> bool {
    DisplayInfo::all()
        .map(|displays| picking_is_meaningful(displays.len()))
        .unwrap_or(false)
}

fn picking_is_meaningful(display_count: usize) -> bool {
    display_count > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picking_needs_at_least_two_displays() {
        assert!(!picking_is_meaningful(0));
        assert!(!picking_is_meaningful(1));
        assert!(picking_is_meaningful(2));
        assert!(picking_is_meaningful(MAX_MONITORS));
    }
}
