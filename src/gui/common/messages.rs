use iced::Point;
use iced::window::Id;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Open the picker dialog window
    OpenPickerWindow,
    /// The preview pane was clicked at a pane-local position
    PaneClicked(Point),
    /// Keep the current selection and end the session
    Confirm,
    /// Discard the selection and end the session
    Cancel,
    /// The window manager asked to close the dialog
    CloseRequested(Id),
}
