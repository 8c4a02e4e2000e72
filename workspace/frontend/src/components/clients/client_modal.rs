use common::CreateUserRequest;
use validator::Validate;
use yew::prelude::*;

use crate::api_client::user::create_user;
use crate::common::forms::validation_messages;

#[derive(Properties, PartialEq)]
pub struct ClientModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

#[function_component(ClientModal)]
pub fn client_modal(props: &ClientModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_messages = use_state(Vec::<String>::new);

    let on_submit = {
        let on_success = props.on_success.clone();
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let error_messages = error_messages.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() else {
                return;
            };
            let Ok(form_data) = web_sys::FormData::new_with_form(&form) else {
                return;
            };

            let request = CreateUserRequest {
                first_name: form_data.get("first_name").as_string().unwrap_or_default(),
                last_name: form_data.get("last_name").as_string().unwrap_or_default(),
                email: form_data.get("email").as_string().unwrap_or_default(),
                phone: form_data.get("phone").as_string().unwrap_or_default(),
            };

            // Validation failures never reach the network
            if let Err(errors) = request.validate() {
                log::debug!("Client form blocked by validation: {:?}", errors);
                error_messages.set(validation_messages(&errors));
                return;
            }

            let form = form.clone();
            let full_name = format!("{} {}", request.first_name, request.last_name);
            let is_submitting = is_submitting.clone();
            let error_messages = error_messages.clone();
            let on_success = on_success.clone();

            is_submitting.set(true);
            error_messages.set(Vec::new());

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Creating client: {}", full_name);
                match create_user(request).await {
                    Ok(user) => {
                        log::info!(
                            "Client created successfully: {} (ID: {})",
                            user.full_name(),
                            user.id
                        );
                        form.reset();
                        is_submitting.set(false);
                        on_success.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to create client: {}", e);
                        error_messages.set(vec![e]);
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        let is_submitting = *is_submitting;
        Callback::from(move |_| {
            if !is_submitting {
                on_close.emit(())
            }
        })
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="client_modal">
            <div class="modal-box w-11/12 max-w-xl">
                <h3 class="font-bold text-lg">{"Add New Client"}</h3>

                {if !error_messages.is_empty() {
                    html! {
                        <div class="alert alert-error mt-4">
                            <i class="fas fa-exclamation-circle"></i>
                            <div class="flex flex-col">
                                {for error_messages.iter().map(|message| html! {
                                    <span class="text-sm">{message}</span>
                                })}
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"First Name"}</span></label>
                            <input
                                type="text"
                                name="first_name"
                                class="input input-bordered w-full"
                                placeholder="Jane"
                                disabled={*is_submitting}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Last Name"}</span></label>
                            <input
                                type="text"
                                name="last_name"
                                class="input input-bordered w-full"
                                placeholder="Doe"
                                disabled={*is_submitting}
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Email"}</span></label>
                        <input
                            type="email"
                            name="email"
                            class="input input-bordered w-full"
                            placeholder="jane.doe@example.com"
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Phone"}</span></label>
                        <input
                            type="tel"
                            name="phone"
                            class="input input-bordered w-full"
                            placeholder="+1 555 123 4567"
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="modal-action">
                        <button
                            type="button"
                            class="btn"
                            onclick={on_close.clone()}
                            disabled={*is_submitting}
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={*is_submitting}
                        >
                            {if *is_submitting {
                                html! { <><span class="loading loading-spinner loading-sm"></span>{" Creating..."}</> }
                            } else {
                                html! { "Add Client" }
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close} disabled={*is_submitting}>{"close"}</button>
            </form>
        </dialog>
    }
}
