use super::entry::MediaEntry;

/// Lifecycle of one load attempt. A new load always replaces the previous
/// value wholesale, so a list and an error never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<MediaEntry>),
    Failed(String),
}

impl LoadState {
    /// True once a cycle has ended, whichever way it ended.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }
}
