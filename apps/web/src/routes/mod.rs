mod not_found;
mod users;

pub(crate) use not_found::NotFoundPage;
pub(crate) use users::{UserDetailPage, UsersListPage};

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route table. `on_count` is forwarded to the list view, which reports the
/// session collection size through it.
#[component]
pub fn AppRoutes(on_count: Callback<usize>) -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=move || view! { <UsersListPage on_count=on_count /> } />
            <Route path=path!("/users/:id") view=UserDetailPage />
        </Routes>
    }
}
