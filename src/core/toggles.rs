//! View toggle state
//!
//! Which table panel is visible and whether the live-video overlay is
//! shown. The two table flags are mutually exclusive by construction: the
//! active table is a single enum, so showing one necessarily hides the
//! other. The video flag is fully independent of the table choice.

use serde::Serialize;

/// Which alert table panel is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTable {
    /// SOS alerts table (initial view)
    #[default]
    Sos,
    /// Emergency alerts table
    Emergency,
}

/// Toggle state for the view panels
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewToggles {
    active_table: ActiveTable,
    video_visible: bool,
}

impl ViewToggles {
    /// Initial state: SOS table visible, video hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the SOS table, hiding the emergency table
    pub fn show_sos_table(&mut self) {
        self.active_table = ActiveTable::Sos;
    }

    /// Show the emergency table, hiding the SOS table
    pub fn show_emergency_table(&mut self) {
        self.active_table = ActiveTable::Emergency;
    }

    /// Currently active table
    pub fn active_table(&self) -> ActiveTable {
        self.active_table
    }

    /// Whether the SOS table is visible
    pub fn sos_table_visible(&self) -> bool {
        self.active_table == ActiveTable::Sos
    }

    /// Whether the emergency table is visible
    pub fn emergency_table_visible(&self) -> bool {
        self.active_table == ActiveTable::Emergency
    }

    /// Set the video overlay visibility
    pub fn set_video_visible(&mut self, visible: bool) {
        self.video_visible = visible;
    }

    /// Flip the video overlay visibility
    pub fn toggle_video(&mut self) {
        self.video_visible = !self.video_visible;
    }

    /// Whether the video overlay is shown
    pub fn video_visible(&self) -> bool {
        self.video_visible
    }
}

/// Load state of the live video resource
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VideoStatus {
    /// Resource is (assumed) rendering
    #[default]
    Streaming,
    /// The render layer reported a load failure
    Failed {
        /// Failure description shown inline
        reason: String,
    },
}

/// The live video overlay: a resource URL plus its load state
///
/// The transport itself is an external capability; this only tracks what to
/// render and whether the render layer reported failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoOverlay {
    url: String,
    title: String,
    status: VideoStatus,
}

impl VideoOverlay {
    /// Overlay for the configured stream resource
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            status: VideoStatus::Streaming,
        }
    }

    /// Stream resource URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Overlay heading
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current load state
    pub fn status(&self) -> &VideoStatus {
        &self.status
    }

    /// Record a load failure signalled by the render layer
    pub fn report_failure(&mut self, reason: impl Into<String>) {
        self.status = VideoStatus::Failed {
            reason: reason.into(),
        };
    }

    /// Inline error text, if the stream failed to load
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            VideoStatus::Streaming => None,
            VideoStatus::Failed { reason } => Some(reason),
        }
    }
}
