use crate::store::use_store;
use leptos::prelude::*;
use storefront::ActiveDialog;
use storefront::shared::protocol::SignupRequest;

#[component]
pub fn SignupDialog() -> impl IntoView {
    let ctx = use_store();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let is_open = move || ctx.state.with(|s| s.dialog == ActiveDialog::Signup);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);

        let form = SignupRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
        };
        ctx.spawn(move |store| async move {
            if store.signup(&form).await {
                set_password.set(String::new());
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Show when=is_open>
            <div class="modal modal-open">
                <div class="modal-box max-w-md">
                    <h3 class="text-2xl font-bold mb-6">"Sign Up"</h3>
                    <form on:submit=on_submit>
                        <div class="form-control mb-4">
                            <label class="label" for="signup-first-name">
                                <span class="label-text font-bold">"First Name"</span>
                            </label>
                            <input
                                id="signup-first-name"
                                type="text"
                                name="firstName"
                                required
                                class="input input-bordered w-full"
                                on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                prop:value=first_name
                            />
                        </div>
                        <div class="form-control mb-4">
                            <label class="label" for="signup-last-name">
                                <span class="label-text font-bold">"Last Name"</span>
                            </label>
                            <input
                                id="signup-last-name"
                                type="text"
                                name="lastName"
                                required
                                class="input input-bordered w-full"
                                on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                prop:value=last_name
                            />
                        </div>
                        <div class="form-control mb-4">
                            <label class="label" for="signup-email">
                                <span class="label-text font-bold">"Email"</span>
                            </label>
                            <input
                                id="signup-email"
                                type="email"
                                name="email"
                                required
                                class="input input-bordered w-full"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                            />
                        </div>
                        <div class="form-control mb-6">
                            <label class="label" for="signup-password">
                                <span class="label-text font-bold">"Password"</span>
                            </label>
                            <input
                                id="signup-password"
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
                                "Sign Up"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
