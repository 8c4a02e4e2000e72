use yew::prelude::*;

use crate::components::clients::Clients;
use crate::components::layout::layout::Layout;

#[function_component(ClientsPage)]
pub fn clients_page() -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            log::debug!("Clients page refresh triggered");
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <Layout title="Clients" on_refresh={Some(on_refresh)}>
            <Clients key={*refresh_trigger} />
        </Layout>
    }
}
