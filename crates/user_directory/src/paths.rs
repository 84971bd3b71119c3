//! Route paths and directory endpoint paths.

/// List view route.
pub const ROOT: &str = "/";

/// Directory collection endpoint, relative to the API base URL.
pub const USERS_ENDPOINT: &str = "/users";

/// Route path for a user's detail view.
#[must_use]
pub fn user_detail(id: impl std::fmt::Display) -> String {
    format!("/users/{id}")
}

/// Directory single-record endpoint for `id`, relative to the API base URL.
#[must_use]
pub fn user_endpoint(id: &str) -> String {
    format!("{USERS_ENDPOINT}/{}", id.trim())
}

#[cfg(test)]
mod tests {
    use super::{ROOT, USERS_ENDPOINT, user_detail, user_endpoint};
    use crate::models::UserId;

    #[test]
    fn detail_route_uses_id() {
        assert_eq!(user_detail(UserId(3)), "/users/3");
        assert_eq!(user_detail("1700000000000"), "/users/1700000000000");
    }

    #[test]
    fn root_is_list_route() {
        assert_eq!(ROOT, "/");
        assert!(user_detail(1).starts_with(USERS_ENDPOINT));
    }

    #[test]
    fn user_endpoint_trims_id() {
        assert_eq!(user_endpoint(" 999 "), "/users/999");
    }
}
