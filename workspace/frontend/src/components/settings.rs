use log::Level;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::settings;

#[function_component(Settings)]
pub fn settings_view() -> Html {
    let current = settings::get_settings();
    let host_ref = use_node_ref();
    let port_ref = use_node_ref();
    let log_level_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>();

    let on_save = {
        let host_ref = host_ref.clone();
        let port_ref = port_ref.clone();
        let log_level_ref = log_level_ref.clone();

        Callback::from(move |_| {
            let host = host_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let port = port_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<u16>().ok());
            let log_level = log_level_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value());

            settings::update_settings(|s| {
                if !host.is_empty() {
                    s.api_host = host.clone();
                }
                if let Some(port) = port {
                    s.api_port = port;
                }
                if let Some(level) = &log_level {
                    s.log_level = match level.as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => s.log_level,
                    };
                }
            });

            let updated = settings::get_settings();
            match updated.save_to_storage() {
                Ok(()) => {
                    log::info!("Settings saved: {:?}", updated);
                    if let Some(toast_ctx) = &toast_ctx {
                        toast_ctx.show_success("Settings saved".to_string());
                    }
                }
                Err(e) => {
                    log::error!("Failed to persist settings: {:?}", e);
                    if let Some(toast_ctx) = &toast_ctx {
                        toast_ctx.show_error("Failed to save settings".to_string());
                    }
                }
            }
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Connection Settings"}</h2>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"API Host"}</span></label>
                        <input
                            ref={host_ref}
                            type="text"
                            class="input input-bordered w-full"
                            value={current.api_host.clone()}
                        />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"API Port"}</span></label>
                        <input
                            ref={port_ref}
                            type="number"
                            class="input input-bordered w-full"
                            value={current.api_port.to_string()}
                        />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Log Level"}</span></label>
                        <select ref={log_level_ref} class="select select-bordered w-full">
                            {for ["error", "warn", "info", "debug", "trace"].iter().map(|level| {
                                let selected = format!("{:?}", current.log_level).to_lowercase() == *level;
                                html! { <option value={*level} selected={selected}>{*level}</option> }
                            })}
                        </select>
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
