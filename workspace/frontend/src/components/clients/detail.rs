use common::UserDto;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::user::get_user;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::loading::Loading;
use crate::hooks::FetchState;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub client_id: i32,
}

#[function_component(BackToClients)]
fn back_to_clients() -> Html {
    html! {
        <Link<Route> to={Route::Clients} classes="btn btn-outline btn-sm mt-4">
            <i class="fas fa-arrow-left"></i>
            {" Back to Clients"}
        </Link<Route>>
    }
}

#[function_component(ClientDetail)]
pub fn client_detail(props: &Props) -> Html {
    let client_id = props.client_id;
    let (fetch_state, _refetch) = use_fetch_with_refetch(move || get_user(client_id));

    match &*fetch_state {
        FetchState::Success(Some(client)) => html! {
            <>
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-bold">{"Client Details"}</h2>
                    <BackToClients />
                </div>
                <ClientRecord client={client.clone()} />
            </>
        },
        FetchState::Success(None) => html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <p>{"Client not found"}</p>
                    <div><BackToClients /></div>
                </div>
            </div>
        },
        FetchState::Error(err) => html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <p class="text-error">{format!("Error: {}", err)}</p>
                    <div><BackToClients /></div>
                </div>
            </div>
        },
        _ => html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <Loading text={Some("Loading client details...".to_string())} />
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ClientRecordProps {
    client: UserDto,
}

#[function_component(ClientRecord)]
fn client_record(props: &ClientRecordProps) -> Html {
    let client = &props.client;
    let status_badge = if client.membership_status == "Active" {
        "badge-success"
    } else {
        "badge-warning"
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-4">
                <div class="flex justify-between items-center">
                    <h3 class="card-title">{client.full_name()}</h3>
                    <div class="flex gap-2">
                        <button class="btn btn-outline btn-sm">{"Edit"}</button>
                        <button class="btn btn-error btn-outline btn-sm">{"Delete"}</button>
                    </div>
                </div>

                <div>
                    <h4 class="text-sm font-medium text-gray-500">{"Email"}</h4>
                    <p>{&client.email}</p>
                </div>
                <div>
                    <h4 class="text-sm font-medium text-gray-500">{"Phone"}</h4>
                    <p>{&client.phone}</p>
                </div>
                <div>
                    <h4 class="text-sm font-medium text-gray-500">{"Membership Status"}</h4>
                    <span class={classes!("badge", status_badge, "badge-outline")}>
                        {&client.membership_status}
                    </span>
                </div>
                <div>
                    <h4 class="text-sm font-medium text-gray-500">{"Credits Balance"}</h4>
                    <p>{client.credits_balance}</p>
                </div>
                {if let Some(last_activity) = &client.last_activity {
                    html! {
                        <div>
                            <h4 class="text-sm font-medium text-gray-500">{"Last Activity"}</h4>
                            <p>{last_activity.format("%b %d, %Y").to_string()}</p>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
