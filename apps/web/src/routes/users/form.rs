//! Add-user modal. Validation runs on every edit; messages appear after the
//! first submit attempt.

use crate::{app_lib::theme::Theme, components::Button};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    prelude::*,
};
use user_directory::{NewUser, UserDraft};

#[component]
pub fn UserForm(on_submit: Callback<NewUser>, on_close: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(UserDraft::new());
    let errors = Memo::new(move |_| draft.with(UserDraft::visible_errors));

    let submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(Ok(new_user)) = draft.try_update(UserDraft::submit) {
            on_submit.run(new_user);
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm"
            on:click=move |_| on_close.run(())
        >
            <div
                class="bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 w-full max-w-md overflow-hidden"
                role="dialog"
                aria-modal="true"
                on:click=|event: MouseEvent| event.stop_propagation()
            >
                <div class="px-6 py-4 border-b border-gray-100 dark:border-gray-700">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Add user"</h2>
                </div>

                <form on:submit=submit class="p-6 space-y-4" novalidate>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="user-name">
                            "Name"
                        </label>
                        <input
                            id="user-name"
                            type="text"
                            class=Theme::INPUT
                            placeholder="Ann Example"
                            prop:value=move || draft.with(|draft| draft.name.clone())
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                draft.update(|draft| draft.name = value);
                            }
                        />
                        {move || {
                            errors
                                .get()
                                .name
                                .map(|err| view! { <p class=Theme::FIELD_ERROR>{err.to_string()}</p> })
                        }}
                    </div>

                    <div>
                        <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="user-email">
                            "Email"
                        </label>
                        <input
                            id="user-email"
                            type="email"
                            class=Theme::INPUT
                            placeholder="ann@example.com"
                            prop:value=move || draft.with(|draft| draft.email.clone())
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                draft.update(|draft| draft.email = value);
                            }
                        />
                        {move || {
                            errors
                                .get()
                                .email
                                .map(|err| view! { <p class=Theme::FIELD_ERROR>{err.to_string()}</p> })
                        }}
                    </div>

                    <div>
                        <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="user-company">
                            "Company (optional)"
                        </label>
                        <input
                            id="user-company"
                            type="text"
                            class=Theme::INPUT
                            prop:value=move || draft.with(|draft| draft.company.clone())
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                draft.update(|draft| draft.company = value);
                            }
                        />
                    </div>

                    <div class="pt-4 flex flex-col-reverse sm:flex-row gap-3 sm:justify-end">
                        <button
                            type="button"
                            on:click=move |_| on_close.run(())
                            class="px-5 py-2.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 focus:ring-4 focus:ring-gray-100 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700"
                        >
                            "Cancel"
                        </button>
                        <Button button_type="submit">"Save"</Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
