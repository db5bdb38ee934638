use iced::alignment::Horizontal;
use iced::widget::{button, column, container, svg, text};
use iced::{Alignment, Element, Length};

use crate::catalog::Catalog;
use crate::style;
use crate::ui::LOGO_SVG;
use crate::ui::messages::Message;

pub fn view_start_screen<'a>(catalog: &'a Catalog, selected_quantity: u32) -> Element<'a, Message> {
    // Create the logo widget from the included SVG data
    let logo = svg::Svg::new(svg::Handle::from_memory(LOGO_SVG))
        .width(140)
        .height(140);

    let title = text("Order Cupcakes")
        .size(34)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let description = text("Pick a batch size, then choose a flavor and a pickup date.")
        .size(15)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let options = column(catalog.quantity_options.iter().map(|option| {
        let is_selected = option.count == selected_quantity;

        button(
            container(text(&option.label).size(16)).center_x(Length::Fill),
        )
        .width(260)
        .padding(12)
        .style(if is_selected {
            style::option_button_selected
        } else {
            style::option_button
        })
        .on_press(Message::QuantitySelected(option.count))
        .into()
    }))
    .spacing(10)
    .align_x(Alignment::Center);

    // A quantity is always pre-selected, so Next is always enabled here.
    let next_button = button(container(text("Next")).center_x(Length::Fill))
        .width(260)
        .padding(12)
        .style(button::primary)
        .on_press(Message::StartOrder);

    let version_text = text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(12);

    let content = column![
        logo,
        title,
        container(description).padding([0, 20]),
        options,
        container(column![]).height(Length::Fill),
        next_button,
        version_text,
    ]
    .width(Length::Fill)
    .spacing(18)
    .align_x(Alignment::Center)
    .padding(30);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
