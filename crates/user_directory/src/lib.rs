//! Domain logic for the user directory frontend.
//!
//! Everything here is plain Rust with no browser dependencies so it can be
//! tested on the host. The web app calls into these modules from its views:
//!
//! - [`models`] maps the remote directory's JSON into the session and detail
//!   display shapes, applying placeholder defaults once at ingestion.
//! - [`filter`] narrows the session collection by a search query.
//! - [`form`] holds the add-user draft and its validation rules.
//! - [`session`] owns the in-memory collection and client-side id assignment.
//! - [`paths`] keeps route paths in one place.
//! - [`view_state`] decides what the list and detail views render.

pub mod filter;
pub mod form;
pub mod models;
pub mod paths;
pub mod session;
pub mod view_state;

pub use filter::filter_users;
pub use form::{FieldErrors, NewUser, UserDraft, ValidationError};
pub use models::{
    PLACEHOLDER, RemoteAddress, RemoteCompany, RemoteUser, User, UserId, UserProfile,
    compose_address,
};
pub use session::{SessionUsers, user_count_label};
pub use view_state::{DetailState, LOADING_MESSAGE, ListBody, NO_USERS_MESSAGE};
