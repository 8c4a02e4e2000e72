use common::ActivityDto;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub activity: ActivityDto,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &Props) -> Html {
    let activity = &props.activity;
    let schedule = format!(
        "{} · {} min",
        activity.start_time.format("%b %d, %Y %H:%M"),
        activity.duration
    );

    html! {
        <div class="card bg-base-100 shadow hover:shadow-md transition-shadow">
            <div class="card-body">
                <div class="flex justify-between items-start">
                    <div>
                        <h3 class="card-title text-base">{&activity.name}</h3>
                        <p class="text-sm text-gray-500">{&activity.description}</p>
                    </div>
                    <button class="btn btn-sm btn-ghost">{"Edit"}</button>
                </div>
                <div class="mt-2 text-sm">
                    <i class="fas fa-clock w-5"></i>
                    {schedule}
                </div>
                <div class="card-actions justify-between items-center mt-4 text-sm">
                    <span class="badge badge-ghost">
                        {format!("Credits Required: {}", activity.credits_required)}
                    </span>
                    <span class={classes!(
                        "badge",
                        if activity.spots_left == 0 { "badge-error" } else { "badge-success" },
                        "badge-outline"
                    )}>
                        {format!("Spots Left: {}/{}", activity.spots_left, activity.max_capacity)}
                    </span>
                </div>
            </div>
        </div>
    }
}

/// Placeholder card shown while the activity list is loading.
#[function_component(ActivityCardSkeleton)]
pub fn activity_card_skeleton() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-3">
                <div class="flex justify-between items-start">
                    <div class="space-y-2">
                        <div class="skeleton h-6 w-48"></div>
                        <div class="skeleton h-4 w-64"></div>
                    </div>
                    <div class="skeleton h-8 w-12"></div>
                </div>
                <div class="skeleton h-4 w-40"></div>
                <div class="flex justify-between mt-4">
                    <div class="skeleton h-5 w-32"></div>
                    <div class="skeleton h-5 w-24"></div>
                </div>
            </div>
        </div>
    }
}
