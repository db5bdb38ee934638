use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::ui::Screen;
use crate::ui::messages::Message;

/// Title bar with a back affordance whenever back navigation is possible.
pub fn view_app_bar<'a>(screen: Screen, can_navigate_back: bool) -> Element<'a, Message> {
    let mut items: Vec<Element<'a, Message>> = Vec::new();

    if can_navigate_back {
        items.push(
            button(text("\u{2190}").size(20))
                .style(button::text)
                .padding([2, 10])
                .on_press(Message::NavigateBack)
                .into(),
        );
    }

    items.push(text(screen.title()).size(20).into());

    container(row(items).spacing(10).align_y(Alignment::Center))
        .width(Length::Fill)
        .padding(12)
        .style(style::app_bar)
        .into()
}
