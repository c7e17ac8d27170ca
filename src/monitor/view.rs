use serde::Serialize;

/// The satellite currently selected for monitoring. Exists only while the
/// view is in [`ViewState::Monitoring`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub id: u32,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ViewState {
    ListView,
    Monitoring { subject: Subject },
}

impl ViewState {
    pub fn is_monitoring(&self) -> bool {
        matches!(self, ViewState::Monitoring { .. })
    }

    pub fn subject(&self) -> Option<&Subject> {
        match self {
            ViewState::ListView => None,
            ViewState::Monitoring { subject } => Some(subject),
        }
    }
}
