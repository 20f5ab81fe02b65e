use shared::{CompetitionDto, CompetitionStatsDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::competitions;
use crate::auth::AuthContext;
use crate::components::admin::catalogs_panel::CatalogsPanel;
use crate::components::admin::roles_panel::RolesPanel;
use crate::components::admin::scopes_panel::ScopesPanel;
use crate::components::admin::users_panel::UsersPanel;
use crate::components::common::spinner::Spinner;

#[derive(Clone, Copy, PartialEq, Debug)]
enum StaffTab {
    Dashboard,
    Users,
    Roles,
    Scopes,
    Catalogs,
}

impl StaffTab {
    const ALL: [StaffTab; 5] = [
        StaffTab::Dashboard,
        StaffTab::Users,
        StaffTab::Roles,
        StaffTab::Scopes,
        StaffTab::Catalogs,
    ];

    fn label(&self) -> &'static str {
        match self {
            StaffTab::Dashboard => "Dashboard",
            StaffTab::Users => "Users",
            StaffTab::Roles => "Roles",
            StaffTab::Scopes => "Scopes",
            StaffTab::Catalogs => "Catalogs",
        }
    }
}

/// Participation numbers per competition, for the dashboard tab.
#[function_component(CompetitionStats)]
fn competition_stats() -> Html {
    let stats = use_state(Vec::<CompetitionStatsDto>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let stats = stats.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let list: Vec<CompetitionDto> = match competitions::fetch_user_competitions().await
                {
                    Ok(list) => list,
                    Err(e) => {
                        error.set(Some(format!("Failed to load competitions: {}", e)));
                        loading.set(false);
                        return;
                    }
                };

                let mut collected = Vec::with_capacity(list.len());
                for competition in &list {
                    match competitions::fetch_competition_stats(&competition.id).await {
                        Ok(s) => collected.push(s),
                        Err(e) => {
                            log::warn!("No statistics for {}: {}", competition.id, e);
                        }
                    }
                }
                stats.set(collected);
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div>
            <h2 class="text-lg font-semibold mb-3">{"Competition activity"}</h2>
            if *loading {
                <Spinner label="Loading statistics..." />
            } else if let Some(message) = &*error {
                <p class="text-red-400">{message}</p>
            } else if stats.is_empty() {
                <p class="text-gray-400">{"No statistics available."}</p>
            } else {
                <table class="w-full text-left text-sm">
                    <thead>
                        <tr class="border-b border-gray-700 text-gray-400">
                            <th class="py-2">{"Competition"}</th>
                            <th class="py-2">{"Participants"}</th>
                            <th class="py-2">{"Active"}</th>
                            <th class="py-2">{"Completion"}</th>
                            <th class="py-2">{"Avg score"}</th>
                            <th class="py-2">{"Top score"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {stats.iter().map(|s| html! {
                            <tr key={s.competition_id.clone()} class="border-b border-gray-800">
                                <td class="py-2">{&s.title}</td>
                                <td class="py-2">{s.total_users}</td>
                                <td class="py-2">{s.active_users}</td>
                                <td class="py-2">{format!("{:.0}%", s.completion_rate * 100.0)}</td>
                                <td class="py-2">{format!("{:.1}", s.average_score)}</td>
                                <td class="py-2">{format!("{:.1}", s.highest_score)}</td>
                            </tr>
                        }).collect::<Html>()}
                    </tbody>
                </table>
            }
        </div>
    }
}

/// Staff area. Reachable only for users holding at least one role; the
/// capability predicates keep deciding what each tab may mutate.
#[function_component(StaffPortal)]
pub fn staff_portal() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let current_tab = use_state(|| StaffTab::Dashboard);

    if !auth.state.is_staff() {
        return html! {
            <div class="min-h-screen bg-gray-950 text-white flex flex-col items-center justify-center">
                <h1 class="text-2xl font-bold mb-2">{"Staff access required"}</h1>
                <p class="text-gray-400">{"Your account does not hold any staff role."}</p>
            </div>
        };
    }

    let on_tab_click = {
        let current_tab = current_tab.clone();
        Callback::from(move |tab: StaffTab| {
            current_tab.set(tab);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-950 text-white">
            <div class="max-w-6xl mx-auto px-4 py-10">
                <h1 class="text-2xl font-bold mb-6">{"Staff portal"}</h1>

                <div class="flex space-x-2 mb-8 border-b border-gray-800">
                    {StaffTab::ALL.iter().map(|tab| {
                        let is_active = *current_tab == *tab;
                        let tab = *tab;
                        let onclick = on_tab_click.clone().reform(move |_: MouseEvent| tab);
                        html! {
                            <button
                                key={tab.label()}
                                onclick={onclick}
                                class={classes!(
                                    "px-4", "py-2", "text-sm", "font-medium",
                                    if is_active {
                                        classes!("border-b-2", "border-amber-500", "text-white")
                                    } else {
                                        classes!("text-gray-400", "hover:text-white")
                                    }
                                )}
                            >
                                {tab.label()}
                            </button>
                        }
                    }).collect::<Html>()}
                </div>

                {match *current_tab {
                    StaffTab::Dashboard => html! {
                        <div class="space-y-8">
                            if let Some(user) = &auth.state.user {
                                <div class="p-4 rounded-lg bg-gray-800 border border-gray-700">
                                    <p class="font-medium">{format!("{} {}", user.firstname, user.lastname)}</p>
                                    <p class="text-sm text-gray-400">{&user.email}</p>
                                    <p class="text-sm text-gray-400">{format!("{} role(s)", user.roles.len())}</p>
                                </div>
                            }
                            <CompetitionStats />
                        </div>
                    },
                    StaffTab::Users => html! { <UsersPanel /> },
                    StaffTab::Roles => html! { <RolesPanel /> },
                    StaffTab::Scopes => html! { <ScopesPanel /> },
                    StaffTab::Catalogs => html! { <CatalogsPanel /> },
                }}
            </div>
        </div>
    }
}
