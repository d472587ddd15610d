use crate::store::use_store;
use leptos::prelude::*;
use storefront::ActiveDialog;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_store();
    let welcome = move || ctx.state.with(|s| s.welcome()).unwrap_or_default();
    let is_logged_in = move || ctx.state.with(|s| s.is_logged_in());

    view! {
        <nav class="navbar bg-base-100 shadow-lg sticky top-0 z-50 px-4 md:px-8">
            <div class="flex-1">
                <h1 class="text-xl font-bold">"Premium Subscriptions"</h1>
            </div>
            <div class="flex-none gap-4">
                <Show
                    when=is_logged_in
                    fallback=move || view! {
                        <button
                            class="btn btn-ghost text-primary"
                            on:click=move |_| ctx.run(|store| store.open_dialog(ActiveDialog::Login))
                        >
                            "Login"
                        </button>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| ctx.run(|store| store.open_dialog(ActiveDialog::Signup))
                        >
                            "Sign Up"
                        </button>
                    }
                >
                    <span class="text-base-content/70">{welcome}</span>
                    <button class="btn btn-error" on:click=move |_| ctx.run(|store| store.logout())>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
