pub mod app_bar;
pub mod application;
pub mod messages;
pub mod select_option;
pub mod start_screen;
pub mod summary_screen;

pub use app_bar::view_app_bar;
pub use application::{CupcakeApp, Screen};
pub use select_option::view_select_option_screen;
pub use start_screen::view_start_screen;
pub use summary_screen::view_order_summary;

// Include the logo SVG data
pub const LOGO_SVG: &[u8] = include_bytes!("assets/logo.svg");
