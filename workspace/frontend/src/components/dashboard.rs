use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <>
            <div class="hero bg-base-100 rounded-lg shadow">
                <div class="hero-content text-center py-10">
                    <div>
                        <h2 class="text-3xl font-bold">{"Welcome to GymDash"}</h2>
                        <p class="py-4 text-gray-500">
                            {"Manage your studio's scheduled classes and clients from one place."}
                        </p>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-6">
                <Link<Route> to={Route::Activities}>
                    <div class="card bg-base-100 shadow hover:shadow-md transition-shadow cursor-pointer">
                        <div class="card-body">
                            <h3 class="card-title"><i class="fas fa-dumbbell"></i> {"Activities"}</h3>
                            <p class="text-sm text-gray-500">{"View scheduled classes and create new ones."}</p>
                        </div>
                    </div>
                </Link<Route>>
                <Link<Route> to={Route::Clients}>
                    <div class="card bg-base-100 shadow hover:shadow-md transition-shadow cursor-pointer">
                        <div class="card-body">
                            <h3 class="card-title"><i class="fas fa-users"></i> {"Clients"}</h3>
                            <p class="text-sm text-gray-500">{"Browse client records and register new members."}</p>
                        </div>
                    </div>
                </Link<Route>>
            </div>
        </>
    }
}
