use shared::UserDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::users;
use crate::components::common::spinner::Spinner;

/// Staff listing of platform users: who they are, whether they are
/// blocked, what roles and groups they hold.
#[function_component(UsersPanel)]
pub fn users_panel() -> Html {
    let users = use_state(Vec::<UserDto>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let search = use_state(String::new);

    let load = {
        let users = users.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let users = users.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                loading.set(true);
                error.set(None);
                match users::fetch_users().await {
                    Ok(fetched) => users.set(fetched),
                    Err(e) => error.set(Some(format!("Failed to load users: {}", e))),
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_refresh = {
        let load = load.clone();
        Callback::from(move |_: MouseEvent| load.emit(()))
    };

    let needle = search.to_lowercase();
    let visible: Vec<&UserDto> = users
        .iter()
        .filter(|user| {
            needle.is_empty()
                || user.email.to_lowercase().contains(&needle)
                || user.lastname.to_lowercase().contains(&needle)
                || user.firstname.to_lowercase().contains(&needle)
        })
        .collect();

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <input
                    type="text"
                    placeholder="Search by name or email"
                    class="px-3 py-2 rounded-md bg-gray-900 border border-gray-700 text-white w-72"
                    oninput={on_search}
                />
                <button
                    onclick={on_refresh}
                    class="px-3 py-2 rounded-md bg-gray-700 hover:bg-gray-600 text-sm"
                >
                    {"Refresh"}
                </button>
            </div>

            if *loading {
                <Spinner label="Loading users..." />
            } else if let Some(message) = &*error {
                <p class="text-red-400">{message}</p>
            } else if visible.is_empty() {
                <p class="text-gray-400">{"No users match."}</p>
            } else {
                <table class="w-full text-left text-sm">
                    <thead>
                        <tr class="border-b border-gray-700 text-gray-400">
                            <th class="py-2">{"Name"}</th>
                            <th class="py-2">{"Email"}</th>
                            <th class="py-2">{"Roles"}</th>
                            <th class="py-2">{"Groups"}</th>
                            <th class="py-2">{"Status"}</th>
                            <th class="py-2">{"Last connected"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {visible.iter().map(|user| {
                            html! {
                                <tr key={user.id.clone()} class="border-b border-gray-800">
                                    <td class="py-2">{format!("{} {}", user.firstname, user.lastname)}</td>
                                    <td class="py-2 text-gray-300">{&user.email}</td>
                                    <td class="py-2">
                                        {user.roles.iter().map(|role| html! {
                                            <span class="inline-block px-2 py-0.5 mr-1 rounded bg-amber-900 text-amber-200 text-xs">
                                                {&role.name}
                                            </span>
                                        }).collect::<Html>()}
                                    </td>
                                    <td class="py-2 text-gray-300">{user.groups.len()}</td>
                                    <td class="py-2">
                                        if user.blocked {
                                            <span class="text-red-400">{"Blocked"}</span>
                                        } else {
                                            <span class="text-emerald-400">{"Active"}</span>
                                        }
                                    </td>
                                    <td class="py-2 text-gray-400">
                                        {user.last_connected
                                            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                                            .unwrap_or_else(|| "Never".to_string())}
                                    </td>
                                </tr>
                            }
                        }).collect::<Html>()}
                    </tbody>
                </table>
            }
        </div>
    }
}
