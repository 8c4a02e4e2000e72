use yew::prelude::*;

use super::activity_modal::ActivityModal;
use super::{ActivityCard, ActivityCardSkeleton};
use crate::api_client::activity::get_activities;
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::toast::ToastContext;
use crate::hooks::{placeholder_count, FetchState};

/// Number of placeholder cards rendered while the collection loads.
const SKELETON_COUNT: usize = 6;

#[function_component(Activities)]
pub fn activities() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(get_activities);
    let is_modal_open = use_state(|| false);
    let toast_ctx = use_context::<ToastContext>();

    let open_modal = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_| is_modal_open.set(true))
    };

    let close_modal = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_| is_modal_open.set(false))
    };

    let on_create_success = {
        let is_modal_open = is_modal_open.clone();
        let refetch = refetch.clone();
        Callback::from(move |_| {
            is_modal_open.set(false);
            refetch.emit(());
            if let Some(toast_ctx) = &toast_ctx {
                toast_ctx.show_success("Activity created successfully!".to_string());
            }
        })
    };

    let on_retry = {
        let refetch = refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    html! {
        <>
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"All Scheduled Classes"}</h2>
                <button class="btn btn-primary btn-sm" onclick={open_modal}>
                    <i class="fas fa-calendar-plus"></i>
                    {" Create New Class"}
                </button>
            </div>

            {match &*fetch_state {
                FetchState::Success(activities) => {
                    if activities.is_empty() {
                        html! {
                            <div class="alert alert-info">
                                <i class="fas fa-info-circle"></i>
                                <span>{"No classes scheduled yet. Create your first class to get started!"}</span>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {for activities.iter().map(|activity| html! {
                                    <ActivityCard key={activity.id} activity={activity.clone()} />
                                })}
                            </div>
                        }
                    }
                }
                FetchState::Error(err) => html! {
                    <ErrorDisplay message={err.clone()} on_retry={Some(on_retry)} />
                },
                pending => html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {for (0..placeholder_count(pending, SKELETON_COUNT)).map(|index| html! {
                            <ActivityCardSkeleton key={format!("skeleton-{}", index)} />
                        })}
                    </div>
                },
            }}

            <ActivityModal
                show={*is_modal_open}
                on_close={close_modal}
                on_success={on_create_success}
            />
        </>
    }
}
