//! Client helpers for the directory endpoints. Responses are mapped into the
//! session and detail shapes here, so views never see the wire format.
//! Failures are logged and returned; the views decide not to surface them.

use crate::app_lib::{AppError, get_json};
use tracing::warn;
use user_directory::{RemoteUser, UserProfile, paths};

/// Fetches the full directory listing.
pub async fn list_users() -> Result<Vec<RemoteUser>, AppError> {
    get_json(paths::USERS_ENDPOINT)
        .await
        .inspect_err(|err| warn!(error = %err, "directory listing failed"))
}

/// Fetches one directory record by its route id.
pub async fn get_user(id: &str) -> Result<UserProfile, AppError> {
    let remote: RemoteUser = get_json(&paths::user_endpoint(id))
        .await
        .inspect_err(|err| warn!(id, error = %err, "directory record fetch failed"))?;

    Ok(UserProfile::from(remote))
}
