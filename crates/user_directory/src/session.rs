//! In-memory user collection owned by the list view for one page load.

use crate::form::NewUser;
use crate::models::{RemoteUser, User, UserId};
use tracing::debug;

/// Ordered session collection. Newest client-created entries come first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionUsers {
    users: Vec<User>,
}

impl SessionUsers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Replaces the whole collection with a freshly fetched directory listing.
    pub fn replace_with_remote(&mut self, remote: Vec<RemoteUser>) {
        self.users = remote.into_iter().map(User::from).collect();
        debug!(count = self.users.len(), "session collection replaced");
    }

    /// Prepends a client-created user and returns it.
    ///
    /// The id is `now_ms` unless that value is already taken, in which case the
    /// next free integer above it is used.
    pub fn add(&mut self, new_user: NewUser, now_ms: u64) -> &User {
        let id = self.next_free_id(now_ms);
        self.users.insert(0, User::from_new(id, new_user));
        debug!(%id, count = self.users.len(), "user added to session");
        &self.users[0]
    }

    fn next_free_id(&self, candidate: u64) -> UserId {
        let mut id = candidate;
        while self.users.iter().any(|user| user.id.0 == id) {
            id = id.saturating_add(1);
        }
        UserId(id)
    }
}

/// Header text for the running user count.
#[must_use]
pub fn user_count_label(count: usize) -> String {
    if count == 1 {
        "1 user".to_string()
    } else {
        format!("{count} users")
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionUsers, user_count_label};
    use crate::form::NewUser;
    use crate::models::{RemoteUser, UserId};

    fn remote(id: u64, name: &str) -> RemoteUser {
        RemoteUser {
            id: UserId(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            company: None,
            phone: None,
            website: None,
            address: None,
        }
    }

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            company: String::new(),
        }
    }

    #[test]
    fn replace_discards_previous_entries() {
        let mut session = SessionUsers::new();
        session.add(new_user("Local"), 42);
        session.replace_with_remote(vec![remote(1, "Leanne"), remote(2, "Ervin")]);

        let names: Vec<&str> = session.users().iter().map(|user| user.name.as_str()).collect();
        assert_eq!(names, ["Leanne", "Ervin"]);
    }

    #[test]
    fn add_prepends_with_timestamp_id() {
        let mut session = SessionUsers::new();
        session.replace_with_remote(vec![remote(1, "Leanne")]);

        let added = session.add(new_user("Ann"), 1_700_000_000_000);
        assert_eq!(added.id, UserId(1_700_000_000_000));
        assert_eq!(session.len(), 2);
        assert_eq!(session.users()[0].name, "Ann");
        assert_eq!(session.users()[1].name, "Leanne");
    }

    #[test]
    fn add_in_same_millisecond_gets_distinct_id() {
        let mut session = SessionUsers::new();
        session.add(new_user("Ann"), 500);
        session.add(new_user("Bob"), 500);
        session.add(new_user("Cy"), 501);

        let ids: Vec<u64> = session.users().iter().map(|user| user.id.0).collect();
        assert_eq!(ids, [502, 501, 500]);
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(user_count_label(0), "0 users");
        assert_eq!(user_count_label(1), "1 user");
        assert_eq!(user_count_label(10), "10 users");
    }
}
