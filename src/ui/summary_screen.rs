use iced::alignment::Horizontal;
use iced::widget::{button, column, container, horizontal_rule, text};
use iced::{Element, Length};

use crate::order::OrderState;
use crate::style;
use crate::ui::messages::Message;

pub fn view_order_summary<'a>(state: &'a OrderState) -> Element<'a, Message> {
    let quantity_label = format!("{} cupcakes", state.quantity);

    let fields = column![
        summary_field("QUANTITY", quantity_label),
        summary_field("FLAVOR", state.flavor.as_deref().unwrap_or("-").to_string()),
        summary_field(
            "PICKUP DATE",
            state.pickup_date.as_deref().unwrap_or("-").to_string(),
        ),
    ]
    .spacing(14);

    let total = text(format!("Total {}", state.formatted_price()))
        .size(22)
        .width(Length::Fill)
        .align_x(Horizontal::Right);

    let cancel_button = button(container(text("Cancel")).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(12)
        .style(button::secondary)
        .on_press(Message::CancelOrder);

    let send_button = button(container(text("Send Order to Another App")).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(12)
        .style(button::primary)
        .on_press(Message::SendOrder);

    let content = column![
        container(fields)
            .width(Length::Fill)
            .padding(16)
            .style(style::bordered_box),
        total,
        container(column![]).height(Length::Fill),
        column![send_button, cancel_button].spacing(10),
    ]
    .spacing(16)
    .padding(20)
    .width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn summary_field<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    column![
        text(label).size(12),
        text(value).size(18),
        horizontal_rule(1),
    ]
    .spacing(4)
    .into()
}
