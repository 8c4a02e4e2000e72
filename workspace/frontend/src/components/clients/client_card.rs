use common::UserDto;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub client: UserDto,
}

#[function_component(ClientCard)]
pub fn client_card(props: &Props) -> Html {
    let client = &props.client;
    let navigator = use_navigator();

    let on_view = {
        let id = client.id;
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::ClientDetail { id });
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow hover:shadow-md transition-shadow cursor-pointer" onclick={on_view}>
            <div class="card-body">
                <div class="flex justify-between items-start">
                    <div>
                        <h3 class="card-title text-base">{client.full_name()}</h3>
                        <p class="text-sm text-gray-500">{&client.email}</p>
                    </div>
                    <span class="btn btn-sm btn-ghost">{"View Details"}</span>
                </div>
                <p class="text-sm mt-2">
                    <i class="fas fa-phone w-5"></i>
                    {&client.phone}
                </p>
                <div class="flex justify-between text-sm mt-2">
                    <span>{format!("Status: {}", client.membership_status)}</span>
                    <span>{format!("Credits: {}", client.credits_balance)}</span>
                </div>
                {if let Some(last_activity) = &client.last_activity {
                    html! {
                        <div class="text-xs text-gray-500 mt-2">
                            {format!("Last activity: {}", last_activity.format("%b %d, %Y"))}
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

/// Placeholder card shown while the client list is loading.
#[function_component(ClientCardSkeleton)]
pub fn client_card_skeleton() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-3">
                <div class="flex justify-between items-start">
                    <div class="space-y-2">
                        <div class="skeleton h-6 w-48"></div>
                        <div class="skeleton h-4 w-32"></div>
                    </div>
                    <div class="skeleton h-4 w-16"></div>
                </div>
                <div class="skeleton h-4 w-full"></div>
                <div class="flex justify-between">
                    <div class="skeleton h-4 w-24"></div>
                    <div class="skeleton h-4 w-16"></div>
                </div>
                <div class="skeleton h-3 w-40 mt-2"></div>
            </div>
        </div>
    }
}
