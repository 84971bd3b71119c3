//! Search filtering over the session collection.

use crate::models::User;

/// Returns the users whose name or email contains `query`, ignoring case and
/// surrounding whitespace. Order of `users` is preserved. A blank query keeps
/// every user.
#[must_use]
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return users.to_vec();
    }

    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
