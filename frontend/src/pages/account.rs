use shared::{ChangePasswordRequest, UpdateProfileRequest};
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::users;
use crate::auth::AuthContext;
use crate::components::common::toast::{Toast, ToastContext};

/// Self-service account management: profile details and password change.
#[function_component(Account)]
pub fn account() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let firstname = use_state(String::new);
    let lastname = use_state(String::new);
    let email = use_state(String::new);
    let saving_profile = use_state(|| false);

    let old_password = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let changing_password = use_state(|| false);

    // Seed the form from the session user.
    {
        let firstname = firstname.clone();
        let lastname = lastname.clone();
        let email = email.clone();
        use_effect_with(auth.state.user.clone(), move |user| {
            if let Some(user) = user {
                firstname.set(user.firstname.clone());
                lastname.set(user.lastname.clone());
                email.set(user.email.clone());
            }
            || ()
        });
    }

    let bind = |handle: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_save_profile = {
        let firstname = firstname.clone();
        let lastname = lastname.clone();
        let email = email.clone();
        let saving_profile = saving_profile.clone();
        let toast_context = toast_context.clone();
        let refresh = auth.refresh.clone();

        Callback::from(move |_: MouseEvent| {
            let request = UpdateProfileRequest {
                firstname: firstname.trim().to_string(),
                lastname: lastname.trim().to_string(),
                email: email.trim().to_string(),
            };
            if let Err(errors) = request.validate() {
                toast_context
                    .add_toast
                    .emit(Toast::error(format!("Invalid profile: {}", errors)));
                return;
            }

            let saving_profile = saving_profile.clone();
            let toast_context = toast_context.clone();
            let refresh = refresh.clone();
            saving_profile.set(true);
            spawn_local(async move {
                match users::update_profile(&request).await {
                    Ok(_) => {
                        toast_context.add_toast.emit(Toast::success("Profile updated"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        toast_context
                            .add_toast
                            .emit(Toast::error(format!("Profile update failed: {}", e)));
                    }
                }
                saving_profile.set(false);
            });
        })
    };

    let on_change_password = {
        let old_password = old_password.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let changing_password = changing_password.clone();
        let toast_context = toast_context.clone();

        Callback::from(move |_: MouseEvent| {
            if *new_password != *confirm_password {
                toast_context
                    .add_toast
                    .emit(Toast::error("New passwords do not match"));
                return;
            }

            let request = ChangePasswordRequest {
                old_password: old_password.to_string(),
                new_password: new_password.to_string(),
            };
            if request.validate().is_err() {
                toast_context
                    .add_toast
                    .emit(Toast::error("New password must be at least 8 characters"));
                return;
            }

            let old_password = old_password.clone();
            let new_password = new_password.clone();
            let confirm_password = confirm_password.clone();
            let changing_password = changing_password.clone();
            let toast_context = toast_context.clone();
            changing_password.set(true);
            spawn_local(async move {
                match users::change_password(&request).await {
                    Ok(()) => {
                        toast_context.add_toast.emit(Toast::success("Password changed"));
                        old_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                    }
                    Err(e) => {
                        toast_context
                            .add_toast
                            .emit(Toast::error(format!("Password change failed: {}", e)));
                    }
                }
                changing_password.set(false);
            });
        })
    };

    let input_class = "block w-full px-3 py-2 rounded-md bg-gray-900 border border-gray-700 text-white focus:outline-none focus:border-amber-500";

    html! {
        <div class="min-h-screen bg-gray-950 text-white">
            <div class="max-w-2xl mx-auto px-4 py-10 space-y-10">
                <section>
                    <h1 class="text-2xl font-bold mb-4">{"Your account"}</h1>
                    <div class="space-y-3">
                        <input type="text" placeholder="First name" class={input_class}
                            value={(*firstname).clone()} oninput={bind(firstname.clone())} />
                        <input type="text" placeholder="Last name" class={input_class}
                            value={(*lastname).clone()} oninput={bind(lastname.clone())} />
                        <input type="email" placeholder="Email" class={input_class}
                            value={(*email).clone()} oninput={bind(email.clone())} />
                        <button
                            onclick={on_save_profile}
                            disabled={*saving_profile}
                            class="px-4 py-2 rounded-md bg-amber-600 hover:bg-amber-500 font-medium disabled:opacity-50"
                        >
                            if *saving_profile { {"Saving..."} } else { {"Save profile"} }
                        </button>
                    </div>
                </section>

                <section>
                    <h2 class="text-xl font-semibold mb-4">{"Change password"}</h2>
                    <div class="space-y-3">
                        <input type="password" placeholder="Current password" class={input_class}
                            value={(*old_password).clone()} oninput={bind(old_password.clone())} />
                        <input type="password" placeholder="New password" class={input_class}
                            value={(*new_password).clone()} oninput={bind(new_password.clone())} />
                        <input type="password" placeholder="Confirm new password" class={input_class}
                            value={(*confirm_password).clone()} oninput={bind(confirm_password.clone())} />
                        <button
                            onclick={on_change_password}
                            disabled={*changing_password}
                            class="px-4 py-2 rounded-md bg-gray-700 hover:bg-gray-600 font-medium disabled:opacity-50"
                        >
                            if *changing_password { {"Changing..."} } else { {"Change password"} }
                        </button>
                    </div>
                </section>
            </div>
        </div>
    }
}
