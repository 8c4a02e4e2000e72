use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::layout::layout::Layout;
use crate::components::settings::Settings;
use crate::pages::activities::ActivitiesPage;
use crate::pages::client_detail::ClientDetailPage;
use crate::pages::clients::ClientsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/activities")]
    Activities,
    #[at("/clients")]
    Clients,
    #[at("/clients/:id")]
    ClientDetail { id: i32 },
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout title="Dashboard"><Dashboard /></Layout> }
        }
        Route::Activities => {
            log::trace!("Rendering Activities page");
            html! { <ActivitiesPage /> }
        }
        Route::Clients => {
            log::trace!("Rendering Clients page");
            html! { <ClientsPage /> }
        }
        Route::ClientDetail { id } => {
            log::trace!("Rendering Client Detail page for ID: {}", id);
            html! { <ClientDetailPage id={id} /> }
        }
        Route::Settings => {
            log::trace!("Rendering Settings page");
            html! { <Layout title="Settings"><Settings /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}
