use yew::prelude::*;

use crate::components::activities::Activities;
use crate::components::layout::layout::Layout;

#[function_component(ActivitiesPage)]
pub fn activities_page() -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            log::debug!("Activities page refresh triggered");
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <Layout title="Activities" on_refresh={Some(on_refresh)}>
            <Activities key={*refresh_trigger} />
        </Layout>
    }
}
