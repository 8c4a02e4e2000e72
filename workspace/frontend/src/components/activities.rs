mod activity_card;
mod activity_modal;
mod view;

pub use activity_card::{ActivityCard, ActivityCardSkeleton};
pub use view::Activities;
