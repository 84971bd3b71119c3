//! What the list and detail views show for a given state. Views pattern-match
//! on these instead of inspecting fetch results or filtered slices directly.

use crate::models::{User, UserProfile};

/// Shown instead of the table when the filtered collection is empty.
pub const NO_USERS_MESSAGE: &str = "No users found.";

/// Shown by the detail view until a record arrives.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Body of the list view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListBody {
    Empty,
    Rows(Vec<User>),
}

impl From<Vec<User>> for ListBody {
    fn from(filtered: Vec<User>) -> Self {
        if filtered.is_empty() {
            Self::Empty
        } else {
            Self::Rows(filtered)
        }
    }
}

/// Body of the detail view.
///
/// A fetch that has not resolved and a fetch that failed look the same: the
/// view stays on the loading placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Loaded(UserProfile),
}

impl<E> From<Option<Result<UserProfile, E>>> for DetailState {
    fn from(fetch: Option<Result<UserProfile, E>>) -> Self {
        match fetch {
            Some(Ok(profile)) => Self::Loaded(profile),
            Some(Err(_)) | None => Self::Loading,
        }
    }
}
