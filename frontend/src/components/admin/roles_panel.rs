use shared::permissions::Permission;
use shared::RoleDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::roles;
use crate::components::common::spinner::Spinner;

fn permission_label(permission: Permission) -> &'static str {
    match permission {
        Permission::Competitions => "Competitions",
        Permission::Groups => "Groups",
        Permission::Users => "Users",
        Permission::Roles => "Roles",
        Permission::Scopes => "Scopes",
        Permission::Catalogs => "Catalogs",
    }
}

#[function_component(RolesPanel)]
pub fn roles_panel() -> Html {
    let roles = use_state(Vec::<RoleDto>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let roles = roles.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match roles::fetch_roles().await {
                    Ok(fetched) => roles.set(fetched),
                    Err(e) => error.set(Some(format!("Failed to load roles: {}", e))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div>
            if *loading {
                <Spinner label="Loading roles..." />
            } else if let Some(message) = &*error {
                <p class="text-red-400">{message}</p>
            } else {
                <div class="grid gap-4 md:grid-cols-2">
                    {roles.iter().map(|role| {
                        html! {
                            <div key={role.id.clone()} class="p-4 rounded-lg bg-gray-800 border border-gray-700">
                                <div class="flex items-center justify-between">
                                    <h3 class="font-semibold">{&role.name}</h3>
                                    if role.is_owner() {
                                        <span class="px-2 py-0.5 rounded bg-amber-600 text-xs">{"Owner"}</span>
                                    }
                                </div>
                                <div class="mt-2">
                                    {Permission::ALL.iter().filter(|p| role.allows(**p)).map(|p| html! {
                                        <span class="inline-block px-2 py-0.5 mr-1 mb-1 rounded bg-gray-700 text-gray-200 text-xs">
                                            {permission_label(*p)}
                                        </span>
                                    }).collect::<Html>()}
                                </div>
                                <p class="mt-2 text-sm text-gray-400">
                                    {format!("{} scope(s)", role.scopes.len())}
                                </p>
                            </div>
                        }
                    }).collect::<Html>()}
                </div>
            }
        </div>
    }
}
