use crate::components::AppShell;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

/// Root component. Owns the header count; the list route reports into it.
#[component]
pub fn App() -> impl IntoView {
    let (user_count, set_user_count) = signal(0_usize);
    let on_count = Callback::new(move |count: usize| set_user_count.set(count));

    view! {
        <Router>
            <AppShell user_count=user_count>
                <AppRoutes on_count=on_count />
            </AppShell>
        </Router>
    }
}
