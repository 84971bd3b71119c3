use crate::{app_lib::theme::Theme, features::users::client};
use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::hooks::use_params;
use leptos_router::params::Params;
use user_directory::{DetailState, LOADING_MESSAGE, UserProfile};

#[derive(Params, PartialEq, Clone)]
struct UserParams {
    id: Option<String>,
}

/// Renders one directory record. The fetch re-runs whenever the `id` param
/// changes. Until a record arrives, including when the fetch fails, the view
/// shows the loading placeholder.
#[component]
pub fn UserDetailPage() -> impl IntoView {
    let params = use_params::<UserParams>();
    let user = LocalResource::new(move || {
        let id = params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        async move { client::get_user(&id).await }
    });

    let go_back = move |_: MouseEvent| {
        if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
            let _ = history.back();
        }
    };

    view! {
        <div class="block rounded-lg border border-neutral-200 bg-white p-6 dark:border-neutral-300 dark:bg-neutral-600 space-y-4">
            <button type="button" class=Theme::LINK on:click=go_back>
                <span class="material-symbols-outlined mr-1 text-base align-middle">"arrow_back"</span>
                "Back"
            </button>
            <Suspense fallback=|| view! { <Loading /> }>
                {move || match DetailState::from(user.get()) {
                    DetailState::Loaded(profile) => view! { <ProfileCard profile=profile /> }.into_any(),
                    DetailState::Loading => view! { <Loading /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! { <p class="text-sm text-gray-500 dark:text-gray-400">{LOADING_MESSAGE}</p> }
}

#[component]
fn ProfileCard(profile: UserProfile) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div>
                <h1 class="text-lg font-semibold text-gray-900 dark:text-white">{profile.name}</h1>
                <p class="text-sm text-gray-500 dark:text-gray-300">{profile.company}</p>
            </div>
            <DetailRow label="Email" value=profile.email />
            <DetailRow label="Phone" value=profile.phone />
            <DetailRow label="Website" value=profile.website />
            <DetailRow label="Address" value=profile.address />
        </div>
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <span class=Theme::DETAIL_LABEL>{label}</span>
            <div class=Theme::DETAIL_VALUE>{value}</div>
        </div>
    }
}
