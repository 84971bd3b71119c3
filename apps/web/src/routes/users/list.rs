//! Users list route. Owns the session collection for as long as it is mounted:
//! one directory fetch on mount, local prepends from the add-user form, and a
//! search box filtering what the table shows.

use super::form::UserForm;
use crate::{app_lib::theme::Theme, components::Button, features::users::client};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use user_directory::{ListBody, NO_USERS_MESSAGE, NewUser, SessionUsers, User, filter_users, paths};

/// Renders the users list view and fetches the directory on mount.
/// `on_count` receives the collection size after every change.
#[component]
pub fn UsersListPage(on_count: Callback<usize>) -> impl IntoView {
    let session = RwSignal::new(SessionUsers::new());
    let (search, set_search) = signal(String::new());
    let (form_open, set_form_open) = signal(false);

    let listing = LocalResource::new(move || async move { client::list_users().await });

    // A failed listing leaves the collection empty.
    Effect::new(move |_| {
        if let Some(Ok(remote)) = listing.get() {
            session.update(|users| users.replace_with_remote(remote));
        }
    });

    Effect::new(move |_| {
        on_count.run(session.with(SessionUsers::len));
    });

    let body = Memo::new(move |_| {
        let query = search.get();
        session.with(|users| ListBody::from(filter_users(users.users(), &query)))
    });

    let on_submit = Callback::new(move |new_user: NewUser| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now_ms = js_sys::Date::now() as u64;
        session.update(|users| {
            users.add(new_user, now_ms);
        });
    });
    let on_close = Callback::new(move |()| set_form_open.set(false));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Users"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Search the directory or add someone for this session."
                    </p>
                </div>
                <Button on_click=Callback::new(move |_| set_form_open.set(true))>
                    <div class="flex items-center gap-2">
                        <span class="material-symbols-outlined text-base">"person_add"</span>
                        "Add user"
                    </div>
                </Button>
            </div>

            <input
                type="search"
                class=Theme::INPUT
                placeholder="Search by name or email"
                aria-label="Search users"
                prop:value=move || search.get()
                on:input=move |event| set_search.set(event_target_value(&event))
            />

            <Show when=move || form_open.get()>
                <UserForm on_submit=on_submit on_close=on_close />
            </Show>

            {move || match body.get() {
                ListBody::Empty => {
                    view! {
                        <p class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                            {NO_USERS_MESSAGE}
                        </p>
                    }
                        .into_any()
                }
                ListBody::Rows(users) => view! { <UsersTable users=users /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn UsersTable(users: Vec<User>) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        <th scope="col" class=Theme::TH>"Name"</th>
                        <th scope="col" class=Theme::TH>"Email"</th>
                        <th scope="col" class=Theme::TH>"Company"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    <For
                        each=move || users.clone()
                        key=|user| user.id
                        children=move |user| {
                            let navigate = navigate.clone();
                            let detail_path = paths::user_detail(user.id);
                            view! {
                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                                        <button
                                            type="button"
                                            class=Theme::LINK
                                            on:click=move |_| navigate(&detail_path, Default::default())
                                        >
                                            {user.name}
                                        </button>
                                    </td>
                                    <td class=Theme::TD>{user.email}</td>
                                    <td class=Theme::TD>{user.company}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
