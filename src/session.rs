use crate::layout::{self, LayoutError, PaneLayout};
use crate::monitor::{DisplayId, Monitor};
use iced::{Point, Rectangle, Size};

/// Lifecycle of one modal picker session.
///
/// `Idle → Open → (Confirmed | Cancelled) → Closed`. Both terminal sub-states
/// funnel to `Closed`, which releases the per-session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Open,
    Confirmed,
    Cancelled,
    Closed,
}

/// Session-scoped state of one picker invocation: the display snapshot, the
/// derived preview layout and the currently highlighted display.
///
/// The snapshot is captured once; if the physical configuration changes while
/// the session is open, the preview does not update.
pub struct PickSession {
    monitors: Vec<Monitor>,
    pane: Size,
    layout: Option<PaneLayout>,
    selected: Option<DisplayId>,
    phase: Phase,
}

impl PickSession {
    pub fn new(monitors: Vec<Monitor>, pane: Size) -> Self {
        PickSession {
            monitors,
            pane,
            layout: None,
            selected: None,
            phase: Phase::Idle,
        }
    }

    /// Runs the layout over the full snapshot and initializes the selection:
    /// the caller-supplied default if it names an enumerated display, else
    /// the primary display.
    pub fn open(&mut self, default: Option<DisplayId>) -> Result<(), LayoutError> {
        debug_assert_eq!(self.phase, Phase::Idle);

        let rects: Vec<Rectangle> = self.monitors.iter().map(|m| m.bounds).collect();
        self.layout = Some(layout::scale_to_pane(&rects, self.pane)?);

        self.selected = default
            .filter(|id| self.monitors.iter().any(|m| m.id == *id))
            .or_else(|| self.monitors.iter().find(|m| m.is_primary).map(|m| m.id))
            .or_else(|| self.monitors.first().map(|m| m.id));
        self.phase = Phase::Open;

        Ok(())
    }

    /// Hit-tests a pane-local click against the preview rectangles. A hit
    /// selects that display; a miss leaves the selection untouched.
    pub fn pick_at(&mut self, point: Point) -> Option<DisplayId> {
        if self.phase != Phase::Open {
            return None;
        }

        let layout = self.layout.as_ref()?;
        let index = layout::hit_test(&layout.previews, point)?;
        let id = self.monitors[index].id;

        if self.selected != Some(id) {
            log::debug!("selected display {id} ({})", self.monitors[index].name);
            self.selected = Some(id);
        }

        Some(id)
    }

    /// Selects a display by id without a click, for callers that already know
    /// which display they want highlighted. Unknown ids are ignored.
    pub fn select(&mut self, id: DisplayId) -> bool {
        if self.phase != Phase::Open || !self.monitors.iter().any(|m| m.id == id) {
            return false;
        }

        self.selected = Some(id);
        true
    }

    /// `Open → Confirmed`, preserving the current selection.
    pub fn confirm(&mut self) {
        if self.phase == Phase::Open {
            self.phase = Phase::Confirmed;
        }
    }

    /// `Open → Cancelled`, dropping any highlight the user had made. Also
    /// accepted from `Idle`, so a session that never opened can still report
    /// a cancellation.
    pub fn cancel(&mut self) {
        if matches!(self.phase, Phase::Idle | Phase::Open) {
            self.selected = None;
            self.phase = Phase::Cancelled;
        }
    }

    /// Tears the session down and reports the outcome: the selected display
    /// id iff the session was confirmed.
    pub fn close(&mut self) -> Option<DisplayId> {
        let outcome = if self.phase == Phase::Confirmed {
            self.selected
        } else {
            None
        };

        self.phase = Phase::Closed;
        self.selected = None;
        self.layout = None;

        outcome
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<DisplayId> {
        self.selected
    }

    pub fn selected_monitor(&self) -> Option<&Monitor> {
        let id = self.selected?;
        self.monitors.iter().find(|m| m.id == id)
    }

    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    /// Pane-local preview rectangles, parallel to `monitors()`. Empty before
    /// the session is opened.
    pub fn previews(&self) -> &[Rectangle] {
        self.layout
            .as_ref()
            .map(|l| l.previews.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(id: DisplayId, is_primary: bool, x: f32, width: f32, height: f32) -> Monitor {
        Monitor {
            id,
            name: format!("display-{id}"),
            is_primary,
            bounds: Rectangle::new(Point::new(x, 0.0), Size::new(width, height)),
        }
    }

    fn pane() -> Size {
        Size::new(400.0, 300.0)
    }

    fn two_monitors() -> Vec<Monitor> {
        vec![
            monitor(1, true, 0.0, 1920.0, 1080.0),
            monitor(2, false, 1920.0, 1280.0, 1024.0),
        ]
    }

    fn open_session(default: Option<DisplayId>) -> PickSession {
        let mut session = PickSession::new(two_monitors(), pane());
        session.open(default).unwrap();
        session
    }

    #[test]
    fn opening_computes_previews_for_every_monitor() {
        let session = open_session(None);
        assert_eq!(session.phase(), Phase::Open);
        assert_eq!(session.previews().len(), 2);
    }

    #[test]
    fn default_selection_falls_back_to_primary() {
        assert_eq!(open_session(None).selected(), Some(1));
    }

    #[test]
    fn matching_default_wins_over_primary() {
        assert_eq!(open_session(Some(2)).selected(), Some(2));
    }

    #[test]
    fn unknown_default_falls_back_to_primary() {
        assert_eq!(open_session(Some(99)).selected(), Some(1));
    }

    #[test]
    fn click_inside_a_preview_changes_the_selection() {
        let mut session = open_session(None);
        // Second preview sits at x >= 240 in a 400x300 pane.
        assert_eq!(session.pick_at(Point::new(300.0, 150.0)), Some(2));
        assert_eq!(session.selected(), Some(2));
    }

    #[test]
    fn click_outside_every_preview_is_ignored() {
        let mut session = open_session(None);
        assert_eq!(session.pick_at(Point::new(5.0, 5.0)), None);
        assert_eq!(session.selected(), Some(1));
    }

    #[test]
    fn select_accepts_only_enumerated_ids() {
        let mut session = open_session(None);
        assert!(session.select(2));
        assert_eq!(session.selected(), Some(2));

        assert!(!session.select(99));
        assert_eq!(session.selected(), Some(2));
    }

    #[test]
    fn confirm_preserves_the_selection() {
        let mut session = open_session(Some(2));
        session.confirm();
        assert_eq!(session.phase(), Phase::Confirmed);
        assert_eq!(session.close(), Some(2));
        assert_eq!(session.phase(), Phase::Closed);
    }

    #[test]
    fn cancel_discards_any_highlight() {
        let mut session = open_session(None);
        session.pick_at(Point::new(300.0, 150.0));
        session.cancel();
        assert_eq!(session.phase(), Phase::Cancelled);
        assert_eq!(session.selected(), None);
        assert_eq!(session.close(), None);
    }

    #[test]
    fn cancel_before_open_still_reports_cancelled() {
        let mut session = PickSession::new(two_monitors(), pane());
        session.cancel();
        assert_eq!(session.phase(), Phase::Cancelled);
        assert_eq!(session.close(), None);
    }

    #[test]
    fn closing_releases_session_state() {
        let mut session = open_session(None);
        session.confirm();
        session.close();
        assert!(session.previews().is_empty());
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn picks_are_ignored_outside_the_open_phase() {
        let mut session = PickSession::new(two_monitors(), pane());
        assert_eq!(session.pick_at(Point::new(300.0, 150.0)), None);

        let mut session = open_session(None);
        session.confirm();
        assert_eq!(session.pick_at(Point::new(300.0, 150.0)), None);
    }

    #[test]
    fn opening_an_empty_snapshot_fails() {
        let mut session = PickSession::new(Vec::new(), pane());
        assert!(session.open(None).is_err());
        assert_eq!(session.phase(), Phase::Idle);
    }
}
