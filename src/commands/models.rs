use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Trace file to load
    pub trace: PathBuf,

    /// Maximum number of groups listed in the summary
    pub max_groups: usize,
}

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Trace file to load
    pub trace: PathBuf,

    /// Output path for the JSON snapshot
    pub output: PathBuf,
}

/// Direction for a same-key jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameKeyJump {
    Next,
    Prev,
}

/// Arguments for the show command
#[derive(Debug, Clone, Default)]
pub struct ShowArgs {
    /// Trace file to load
    pub trace: PathBuf,

    /// Event index to place the cursor on
    pub index: Option<usize>,

    /// Scrubber position in [0, 1], used when no index is given
    pub position: Option<f64>,

    /// Jump to the neighbouring event with the same key after positioning
    pub jump: Option<SameKeyJump>,
}

/// Arguments for the history command
#[derive(Debug, Clone)]
pub struct HistoryArgs {
    /// Trace file to load
    pub trace: PathBuf,

    /// Qualified node name
    pub node: String,

    /// Last timeline position to consider (defaults to the end)
    pub at: Option<usize>,
}
