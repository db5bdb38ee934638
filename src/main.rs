use tracing::info;
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod order;
mod share;
mod style;
mod ui;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("starting cupcake shop v{}", env!("CARGO_PKG_VERSION"));

    iced::application(
        ui::application::CupcakeApp::title,
        ui::application::CupcakeApp::update,
        ui::application::CupcakeApp::view,
    )
    .window_size(iced::Size::new(460.0, 760.0))
    .theme(|_| style::custom_theme())
    .centered()
    .run_with(|| (ui::application::CupcakeApp::new(), iced::Task::none()))
}
