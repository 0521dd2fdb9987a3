use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight command kinds, in the order the native layer registers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Initialize,
    CreateView,
    UpdateView,
    DeleteView,
    AttachView,
    SetChildren,
    AddEventListeners,
    RemoveEventListeners,
}

impl Operation {
    /// All operations in registration order.
    pub const ALL: [Self; 8] = [
        Self::Initialize,
        Self::CreateView,
        Self::UpdateView,
        Self::DeleteView,
        Self::AttachView,
        Self::SetChildren,
        Self::AddEventListeners,
        Self::RemoveEventListeners,
    ];

    /// Position of this operation in the registration call.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::CreateView => "create_view",
            Self::UpdateView => "update_view",
            Self::DeleteView => "delete_view",
            Self::AttachView => "attach_view",
            Self::SetChildren => "set_children",
            Self::AddEventListeners => "add_event_listeners",
            Self::RemoveEventListeners => "remove_event_listeners",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
