mod client_card;
mod client_modal;
mod detail;
mod view;

pub use client_card::{ClientCard, ClientCardSkeleton};
pub use detail::ClientDetail;
pub use view::Clients;
