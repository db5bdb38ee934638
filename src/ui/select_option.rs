use iced::alignment::Horizontal;
use iced::widget::{button, column, container, horizontal_rule, row, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::ui::messages::Message;

/// Generic option-list screen, reused for both the flavor and the pickup
/// date steps. The caller decides what a selection means by supplying the
/// label list and the selection-to-message constructor.
pub fn view_select_option_screen<'a>(
    options: &'a [String],
    selected: Option<&'a str>,
    subtotal: String,
    on_select: fn(String) -> Message,
) -> Element<'a, Message> {
    let list = column(options.iter().map(|label| {
        let is_selected = selected == Some(label.as_str());

        let marker = if is_selected {
            text("\u{25C9}").size(16)
        } else {
            text("\u{25CB}").size(16)
        };

        button(
            row![marker, text(label.as_str()).size(16)]
                .spacing(12)
                .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(12)
        .style(if is_selected {
            style::option_button_selected
        } else {
            style::option_button
        })
        .on_press(on_select(label.clone()))
        .into()
    }))
    .spacing(8);

    let subtotal_text = text(format!("Subtotal {subtotal}"))
        .size(18)
        .width(Length::Fill)
        .align_x(Horizontal::Right);

    let cancel_button = button(container(text("Cancel")).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(12)
        .style(button::secondary)
        .on_press(Message::CancelOrder);

    // Next stays disabled until something is picked.
    let next_button = button(container(text("Next")).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(12)
        .style(button::primary)
        .on_press_maybe(selected.map(|_| Message::NextPressed));

    let content = column![
        list,
        horizontal_rule(1),
        subtotal_text,
        container(column![]).height(Length::Fill),
        row![cancel_button, next_button].spacing(12),
    ]
    .spacing(16)
    .padding(20)
    .width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
