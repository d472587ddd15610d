use crate::components::catalog::Catalog;
use crate::components::hero::Hero;
use crate::components::icons::Spinner;
use crate::components::login::LoginDialog;
use crate::components::nav::NavBar;
use crate::components::orders::OrdersSection;
use crate::components::signup::SignupDialog;
use crate::store::use_store;
use leptos::prelude::*;

#[component]
pub fn StorefrontPage() -> impl IntoView {
    let ctx = use_store();
    let is_loading = move || ctx.state.with(|s| s.loading);

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! {
                <div class="flex flex-col items-center justify-center min-h-screen bg-base-200">
                    <Spinner />
                    <p class="mt-4 text-base-content/70">"Loading..."</p>
                </div>
            }
        >
            <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
                <NavBar />
                <Hero />
                <Catalog />
                <OrdersSection />
                <LoginDialog />
                <SignupDialog />
            </div>
        </Show>
    }
}
