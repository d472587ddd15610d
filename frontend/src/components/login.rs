use crate::store::use_store;
use leptos::prelude::*;
use storefront::ActiveDialog;

#[component]
pub fn LoginDialog() -> impl IntoView {
    let ctx = use_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let is_open = move || ctx.state.with(|s| s.dialog == ActiveDialog::Login);

    // 字段校验交给浏览器原生的 required / type=email
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);

        let email = email.get_untracked();
        let password = password.get_untracked();
        ctx.spawn(move |store| async move {
            if store.login(&email, &password).await {
                set_password.set(String::new());
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Show when=is_open>
            <div class="modal modal-open">
                <div class="modal-box max-w-md">
                    <h3 class="text-2xl font-bold mb-6">"Login"</h3>
                    <form on:submit=on_submit>
                        <div class="form-control mb-4">
                            <label class="label" for="login-email">
                                <span class="label-text font-bold">"Email"</span>
                            </label>
                            <input
                                id="login-email"
                                type="email"
                                name="email"
                                required
                                class="input input-bordered w-full"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                            />
                        </div>
                        <div class="form-control mb-6">
                            <label class="label" for="login-password">
                                <span class="label-text font-bold">"Password"</span>
                            </label>
                            <input
                                id="login-password"
                                type="password"
                                name="password"
                                required
                                class="input input-bordered w-full"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                            />
                        </div>
                        <div class="modal-action justify-between">
                            <button
                                type="button"
                                class="btn btn-neutral"
                                on:click=move |_| ctx.run(|store| store.close_dialog())
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
