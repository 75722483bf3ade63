use domain::result::{ImagePreview, RenderedResult};

/// The single UI-state value owned by the session controller. Updated only
/// through the controller's transitions: select-endpoint, submit,
/// receive-result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Currently active menu entry, mutually exclusive with all others.
    pub selected: Option<String>,
    /// The one live result; a new result invalidates the previous one.
    pub last_result: Option<RenderedResult>,
    /// The most recently probed preview; replaced on every new selection.
    pub last_preview: Option<ImagePreview>,
}
