use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use common::CreateActivityRequest;
use validator::Validate;
use yew::prelude::*;

use crate::api_client::activity::create_activity;
use crate::api_client::user::get_coaches;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::forms::validation_messages;
use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct ActivityModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

/// Parse the value of a `datetime-local` input and convert the wall-clock
/// time to UTC for the wire.
fn parse_start_time(raw: &str) -> Option<chrono::DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").ok()?;
    Local
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

#[function_component(ActivityModal)]
pub fn activity_modal(props: &ActivityModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_messages = use_state(Vec::<String>::new);

    // The coach picklist resolves independently of the rest of the form
    let (coaches_state, _refetch_coaches) = use_fetch_with_refetch(get_coaches);

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

            let name = form_data.get("name").as_string().unwrap_or_default();
            let description = form_data.get("description").as_string().unwrap_or_default();
            let coach_id = form_data
                .get("coach_id")
                .as_string()
                .and_then(|v| v.parse::<i32>().ok())
                .unwrap_or(0);
            let start_time_raw = form_data.get("start_time").as_string().unwrap_or_default();
            let duration = form_data
                .get("duration")
                .as_string()
                .and_then(|v| v.parse::<i32>().ok())
                .unwrap_or(0);
            let credits_required = form_data
                .get("credits_required")
                .as_string()
                .and_then(|v| v.parse::<i32>().ok())
                .unwrap_or(-1);
            let max_capacity = form_data
                .get("max_capacity")
                .as_string()
                .and_then(|v| v.parse::<i32>().ok())
                .unwrap_or(0);

            let Some(start_time) = parse_start_time(&start_time_raw) else {
                error_messages.set(vec!["Please select a date and time".to_string()]);
                return;
            };

            let request = CreateActivityRequest {
                name: name.clone(),
                description,
                coach_id,
                start_time,
                duration,
                credits_required,
                max_capacity,
            };

            // Validation failures never reach the network
            if let Err(errors) = request.validate() {
                log::debug!("Activity form blocked by validation: {:?}", errors);
                error_messages.set(validation_messages(&errors));
                return;
            }

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let error_messages = error_messages.clone();
            let on_success = on_success.clone();

            is_submitting.set(true);
            error_messages.set(Vec::new());

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Creating activity: {}", name);
                match create_activity(request).await {
                    Ok(activity) => {
                        log::info!(
                            "Activity created successfully: {} (ID: {})",
                            activity.name,
                            activity.id
                        );
                        form.reset();
                        is_submitting.set(false);
                        on_success.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to create activity: {}", e);
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

    let default_start = Local::now().format("%Y-%m-%dT%H:%M").to_string();

    let coach_options = match &*coaches_state {
        FetchState::Success(coaches) => html! {
            <>
                <option value="" selected={true} disabled={true}>{"Select a coach"}</option>
                {for coaches.iter().map(|coach| {
                    html! {
                        <option value={coach.id.to_string()}>{coach.full_name()}</option>
                    }
                })}
            </>
        },
        FetchState::Error(_) => html! {
            <option value="" selected={true} disabled={true}>{"Error loading coaches"}</option>
        },
        _ => html! {
            <option value="" selected={true} disabled={true}>{"Loading coaches..."}</option>
        },
    };
    let coaches_unavailable = !coaches_state.is_success();

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="activity_modal">
            <div class="modal-box w-11/12 max-w-2xl">
                <h3 class="font-bold text-lg">{"Create New Class"}</h3>

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
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Class Name"}</span></label>
                        <input
                            type="text"
                            name="name"
                            class="input input-bordered w-full"
                            placeholder="Barbell Club"
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Description"}</span></label>
                        <textarea
                            name="description"
                            class="textarea textarea-bordered w-full"
                            placeholder="We will lift weights and..."
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Coach"}</span></label>
                        <select
                            name="coach_id"
                            class="select select-bordered w-full"
                            disabled={*is_submitting || coaches_unavailable}
                        >
                            {coach_options}
                        </select>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Start Date/Time"}</span></label>
                            <input
                                type="datetime-local"
                                name="start_time"
                                class="input input-bordered w-full"
                                value={default_start}
                                disabled={*is_submitting}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Duration (minutes)"}</span></label>
                            <input
                                type="number"
                                name="duration"
                                class="input input-bordered w-full"
                                value="60"
                                disabled={*is_submitting}
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Credits required"}</span></label>
                            <input
                                type="number"
                                name="credits_required"
                                class="input input-bordered w-full"
                                value="1"
                                disabled={*is_submitting}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Max attendees"}</span></label>
                            <input
                                type="number"
                                name="max_capacity"
                                class="input input-bordered w-full"
                                value="10"
                                disabled={*is_submitting}
                            />
                        </div>
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
                                html! { "Create Class" }
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
