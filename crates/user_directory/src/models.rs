//! Wire and display shapes for directory users.
//!
//! The remote directory returns loosely shaped JSON where most fields may be
//! missing. [`RemoteUser`] mirrors that shape with explicit `Option`s, and the
//! conversions into [`User`] and [`UserProfile`] resolve every optional field to
//! its display string exactly once. Views render the resolved strings as-is.

use crate::form::NewUser;
use serde::Deserialize;
use std::fmt;

/// Display value substituted for any missing optional field.
pub const PLACEHOLDER: &str = "-";

/// Opaque user identifier. Remote ids are small integers; client-created ids
/// are millisecond timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteCompany {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteAddress {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub suite: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

/// A user record as returned by the directory endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RemoteUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<RemoteCompany>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: Option<RemoteAddress>,
}

impl RemoteUser {
    fn company_name(&self) -> Option<&str> {
        self.company
            .as_ref()
            .and_then(|company| company.name.as_deref())
    }
}

/// Session collection entry shown in the list table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Company name, or [`PLACEHOLDER`] when none was provided.
    pub company: String,
}

impl User {
    /// Builds a client-created entry from a validated form submission.
    #[must_use]
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            company: or_placeholder(Some(new_user.company.as_str())),
        }
    }
}

impl From<RemoteUser> for User {
    fn from(remote: RemoteUser) -> Self {
        let company = or_placeholder(remote.company_name());
        Self {
            id: remote.id,
            name: remote.name,
            email: remote.email,
            company,
        }
    }
}

/// Detail view display shape with every field resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
}

impl From<RemoteUser> for UserProfile {
    fn from(remote: RemoteUser) -> Self {
        Self {
            id: remote.id,
            company: or_placeholder(remote.company_name()),
            email: or_placeholder(Some(remote.email.as_str())),
            phone: or_placeholder(remote.phone.as_deref()),
            website: or_placeholder(remote.website.as_deref()),
            address: compose_address(remote.address.as_ref()),
            name: remote.name,
        }
    }
}

/// Formats an address as `street, suite, city zipcode`.
///
/// A missing address yields [`PLACEHOLDER`]. Missing parts of a present
/// address contribute an empty string.
#[must_use]
pub fn compose_address(address: Option<&RemoteAddress>) -> String {
    let Some(address) = address else {
        return PLACEHOLDER.to_string();
    };
    let part = |value: &Option<String>| value.clone().unwrap_or_default();

    format!(
        "{}, {}, {} {}",
        part(&address.street),
        part(&address.suite),
        part(&address.city),
        part(&address.zipcode)
    )
}

fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{PLACEHOLDER, RemoteAddress, RemoteUser, User, UserId, UserProfile, compose_address};
    use crate::form::NewUser;
    use serde_json::json;

    fn leanne() -> serde_json::Value {
        json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net"
            }
        })
    }

    #[test]
    fn remote_user_ignores_unknown_fields() {
        let remote: RemoteUser = serde_json::from_value(leanne()).unwrap();
        assert_eq!(remote.id, UserId(1));
        assert_eq!(remote.phone.as_deref(), Some("1-770-736-8031 x56442"));
    }

    #[test]
    fn remote_user_into_user_keeps_company_name() {
        let remote: RemoteUser = serde_json::from_value(leanne()).unwrap();
        let user = User::from(remote);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.email, "Sincere@april.biz");
        assert_eq!(user.company, "Romaguera-Crona");
    }

    #[test]
    fn missing_company_defaults_to_placeholder() {
        let no_company: RemoteUser =
            serde_json::from_value(json!({ "id": 2, "name": "Ervin", "email": "e@x.io" }))
                .unwrap();
        assert_eq!(User::from(no_company).company, PLACEHOLDER);

        let nameless: RemoteUser = serde_json::from_value(
            json!({ "id": 3, "name": "Clementine", "email": "c@x.io", "company": {} }),
        )
        .unwrap();
        assert_eq!(User::from(nameless).company, PLACEHOLDER);

        let null_company: RemoteUser = serde_json::from_value(
            json!({ "id": 4, "name": "Patricia", "email": "p@x.io", "company": null }),
        )
        .unwrap();
        assert_eq!(User::from(null_company).company, PLACEHOLDER);
    }

    #[test]
    fn profile_resolves_all_fields() {
        let remote: RemoteUser = serde_json::from_value(leanne()).unwrap();
        let profile = UserProfile::from(remote);
        assert_eq!(profile.name, "Leanne Graham");
        assert_eq!(profile.company, "Romaguera-Crona");
        assert_eq!(profile.email, "Sincere@april.biz");
        assert_eq!(profile.phone, "1-770-736-8031 x56442");
        assert_eq!(profile.website, "hildegard.org");
        assert_eq!(profile.address, "Kulas Light, Apt. 556, Gwenborough 92998-3874");
    }

    #[test]
    fn profile_missing_optionals_render_placeholder_independently() {
        let remote: RemoteUser = serde_json::from_value(json!({
            "id": 7,
            "name": "Kurtis",
            "email": "k@x.io",
            "phone": "555-0100",
            "website": ""
        }))
        .unwrap();
        let profile = UserProfile::from(remote);
        assert_eq!(profile.company, PLACEHOLDER);
        assert_eq!(profile.phone, "555-0100");
        assert_eq!(profile.website, PLACEHOLDER);
        assert_eq!(profile.address, PLACEHOLDER);
    }

    #[test]
    fn compose_address_null_is_placeholder() {
        assert_eq!(compose_address(None), PLACEHOLDER);
    }

    #[test]
    fn compose_address_missing_parts_are_empty() {
        let address = RemoteAddress {
            street: Some("Victor Plains".to_string()),
            suite: None,
            city: Some("Wisokyburgh".to_string()),
            zipcode: None,
        };
        assert_eq!(compose_address(Some(&address)), "Victor Plains, , Wisokyburgh ");
    }

    #[test]
    fn client_user_blank_company_is_placeholder() {
        let user = User::from_new(
            UserId(1_700_000_000_000),
            NewUser {
                name: "Ann".to_string(),
                email: "ann@example.com".to_string(),
                company: String::new(),
            },
        );
        assert_eq!(user.company, PLACEHOLDER);
        assert_eq!(user.id.to_string(), "1700000000000");
    }
}
