use yew::prelude::*;

use crate::components::clients::ClientDetail;
use crate::components::layout::layout::Layout;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i32,
}

#[function_component(ClientDetailPage)]
pub fn client_detail_page(props: &Props) -> Html {
    html! {
        <Layout title="Client Details">
            <ClientDetail client_id={props.id} />
        </Layout>
    }
}
