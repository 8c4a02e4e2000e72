pub mod error;
pub mod fetch_hook;
pub mod forms;
pub mod loading;
pub mod toast;
