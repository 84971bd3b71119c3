//! Persistent page frame: header with the running user count, routed content,
//! and a build footer. The count is owned by the caller and only read here.

use crate::app_lib::build_info;
use leptos::prelude::*;
use leptos_router::components::A;
use user_directory::{paths, user_count_label};

/// Wraps routes with the header and main content container.
#[component]
pub fn AppShell(#[prop(into)] user_count: Signal<usize>, children: Children) -> impl IntoView {
    let commit = build_info::git_commit_hash();

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href={paths::ROOT} {..} class="flex items-center space-x-3 rtl:space-x-reverse">
                        <span class="material-symbols-outlined text-blue-600">"group"</span>
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "User Directory"
                        </span>
                    </A>
                    <span class="text-sm text-gray-500 dark:text-gray-400" aria-live="polite">
                        {move || user_count_label(user_count.get())}
                    </span>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="px-4 py-3 text-center text-xs text-gray-400 dark:text-gray-500">
                <pre>{commit}</pre>
            </footer>
        </div>
    }
}
