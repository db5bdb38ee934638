use iced::widget::column;
use iced::{Element, Task};
use tracing::{debug, error, info};

use crate::catalog::Catalog;
use crate::order::OrderSession;
use crate::ui::messages::Message;
use crate::{config, share, ui};

/// Destinations of the wizard, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Flavor,
    Pickup,
    Summary,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Start => "Cupcake Shop",
            Screen::Flavor => "Choose Flavor",
            Screen::Pickup => "Choose Pickup Date",
            Screen::Summary => "Order Summary",
        }
    }
}

pub struct CupcakeApp {
    catalog: Catalog,
    session: OrderSession,
    /// Navigation stack; the bottom entry is always `Screen::Start`.
    stack: Vec<Screen>,
    /// Start-screen highlight; pre-selected so Next is always enabled there.
    selected_quantity: u32,
}

impl CupcakeApp {
    pub fn new() -> Self {
        Self::with_catalog(config::load_catalog())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let session = OrderSession::new(&catalog);
        let selected_quantity = catalog.min_quantity();
        Self {
            catalog,
            session,
            stack: vec![Screen::Start],
            selected_quantity,
        }
    }

    pub fn title(&self) -> String {
        String::from("Cupcake Shop")
    }

    pub fn current_screen(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Start)
    }

    pub fn can_navigate_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn order(&self) -> &crate::order::OrderState {
        self.session.state()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QuantitySelected(quantity) => {
                self.selected_quantity = quantity;
            }
            Message::StartOrder => {
                debug!("starting order for {} cupcakes", self.selected_quantity);
                self.session.set_quantity(self.selected_quantity);
                self.stack.push(Screen::Flavor);
            }
            Message::FlavorSelected(flavor) => {
                self.session.set_flavor(flavor);
            }
            Message::PickupDateSelected(date) => {
                self.session.set_date(date);
            }
            Message::NextPressed => match self.current_screen() {
                Screen::Flavor if self.session.state().flavor.is_some() => {
                    self.stack.push(Screen::Pickup);
                }
                Screen::Pickup if self.session.state().pickup_date.is_some() => {
                    self.stack.push(Screen::Summary);
                }
                screen => debug!("ignoring next on {:?} without a selection", screen),
            },
            Message::NavigateBack => {
                if self.can_navigate_back() {
                    self.stack.pop();
                }
            }
            Message::CancelOrder => {
                info!("order cancelled");
                self.cancel_order();
            }
            Message::SendOrder => {
                let subject = String::from("New cupcake order");
                let body = self.order_details();
                return Task::perform(share::share_order(subject, body), |result| {
                    match result {
                        Ok(()) => Message::OrderShared(true),
                        Err(err) => {
                            error!("failed to share order: {:#}", err);
                            Message::OrderShared(false)
                        }
                    }
                });
            }
            Message::OrderShared(success) => {
                // Sharing is fire-and-forget; the flow collapses either way.
                if success {
                    info!("order handed to the share mechanism");
                }
                self.cancel_order();
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let screen = self.current_screen();
        let state = self.session.state();

        let content = match screen {
            Screen::Start => ui::view_start_screen(&self.catalog, self.selected_quantity),
            Screen::Flavor => ui::view_select_option_screen(
                &self.catalog.flavors,
                state.flavor.as_deref(),
                state.formatted_price(),
                Message::FlavorSelected,
            ),
            Screen::Pickup => ui::view_select_option_screen(
                &state.pickup_options,
                state.pickup_date.as_deref(),
                state.formatted_price(),
                Message::PickupDateSelected,
            ),
            Screen::Summary => ui::view_order_summary(state),
        };

        column![ui::view_app_bar(screen, self.can_navigate_back()), content].into()
    }

    fn cancel_order(&mut self) {
        self.session.reset();
        self.selected_quantity = self.catalog.min_quantity();
        self.stack.truncate(1);
    }

    /// Plain-text summary handed to the share mechanism.
    fn order_details(&self) -> String {
        let state = self.session.state();
        format!(
            "Quantity: {} cupcakes\nFlavor: {}\nPickup date: {}\nTotal: {}\n\nThank you!",
            state.quantity,
            state.flavor.as_deref().unwrap_or("-"),
            state.pickup_date.as_deref().unwrap_or("-"),
            state.formatted_price(),
        )
    }
}

impl Default for CupcakeApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> CupcakeApp {
        CupcakeApp::with_catalog(Catalog::default())
    }

    fn advance_to_summary(app: &mut CupcakeApp) -> String {
        let _ = app.update(Message::StartOrder);
        let _ = app.update(Message::FlavorSelected("Vanilla".to_string()));
        let _ = app.update(Message::NextPressed);
        let first_date = app.order().pickup_options[0].clone();
        let _ = app.update(Message::PickupDateSelected(first_date.clone()));
        let _ = app.update(Message::NextPressed);
        first_date
    }

    #[test]
    fn starts_on_the_start_screen_with_back_disabled() {
        let app = app();
        assert_eq!(app.current_screen(), Screen::Start);
        assert!(!app.can_navigate_back());
        assert_eq!(app.order().quantity, 6);
    }

    #[test]
    fn start_next_records_quantity_and_opens_flavor() {
        let mut app = app();
        let _ = app.update(Message::QuantitySelected(12));
        let _ = app.update(Message::StartOrder);
        assert_eq!(app.current_screen(), Screen::Flavor);
        assert_eq!(app.order().quantity, 12);
        assert!(app.can_navigate_back());
    }

    #[test]
    fn next_is_gated_until_a_selection_exists() {
        let mut app = app();
        let _ = app.update(Message::StartOrder);

        let _ = app.update(Message::NextPressed);
        assert_eq!(app.current_screen(), Screen::Flavor);

        let _ = app.update(Message::FlavorSelected("Coffee".to_string()));
        let _ = app.update(Message::NextPressed);
        assert_eq!(app.current_screen(), Screen::Pickup);

        // No date picked yet, next stays put.
        let _ = app.update(Message::NextPressed);
        assert_eq!(app.current_screen(), Screen::Pickup);
    }

    #[test]
    fn reselecting_the_same_flavor_keeps_next_enabled() {
        let mut app = app();
        let _ = app.update(Message::StartOrder);
        let _ = app.update(Message::FlavorSelected("Vanilla".to_string()));
        let _ = app.update(Message::FlavorSelected("Vanilla".to_string()));
        let _ = app.update(Message::NextPressed);
        assert_eq!(app.current_screen(), Screen::Pickup);
    }

    #[test]
    fn back_pops_one_screen_and_keeps_the_order() {
        let mut app = app();
        let _ = app.update(Message::StartOrder);
        let _ = app.update(Message::FlavorSelected("Red Velvet".to_string()));
        let _ = app.update(Message::NextPressed);

        let _ = app.update(Message::NavigateBack);
        assert_eq!(app.current_screen(), Screen::Flavor);
        assert_eq!(app.order().flavor.as_deref(), Some("Red Velvet"));

        let _ = app.update(Message::NavigateBack);
        assert_eq!(app.current_screen(), Screen::Start);

        // Back on the start screen is a no-op.
        let _ = app.update(Message::NavigateBack);
        assert_eq!(app.current_screen(), Screen::Start);
    }

    #[test]
    fn cancel_collapses_to_start_and_resets() {
        let mut app = app();
        advance_to_summary(&mut app);

        let _ = app.update(Message::CancelOrder);
        assert_eq!(app.current_screen(), Screen::Start);
        assert!(!app.can_navigate_back());

        let state = app.order();
        assert_eq!(state.quantity, 6);
        assert_eq!(state.flavor, None);
        assert_eq!(state.pickup_date, None);
        assert_eq!(state.price_cents, 6 * 200);
    }

    #[test]
    fn cancel_works_from_every_non_start_screen() {
        for depth in 1..=3 {
            let mut app = app();
            let _ = app.update(Message::StartOrder);
            if depth >= 2 {
                let _ = app.update(Message::FlavorSelected("Vanilla".to_string()));
                let _ = app.update(Message::NextPressed);
            }
            if depth >= 3 {
                let date = app.order().pickup_options[1].clone();
                let _ = app.update(Message::PickupDateSelected(date));
                let _ = app.update(Message::NextPressed);
            }

            let _ = app.update(Message::CancelOrder);
            assert_eq!(app.current_screen(), Screen::Start);
            assert_eq!(app.order().flavor, None);
            assert_eq!(app.order().pickup_date, None);
        }
    }

    #[test]
    fn end_to_end_summary_shows_rush_priced_order() {
        let mut app = app();
        let first_date = advance_to_summary(&mut app);

        assert_eq!(app.current_screen(), Screen::Summary);
        let state = app.order();
        assert_eq!(state.quantity, 6);
        assert_eq!(state.flavor.as_deref(), Some("Vanilla"));
        assert_eq!(state.pickup_date.as_deref(), Some(first_date.as_str()));
        assert_eq!(state.price_cents, 6 * 200 + 300);
        assert_eq!(state.formatted_price(), "$15.00");
    }

    #[test]
    fn share_completion_resets_and_returns_to_start() {
        let mut app = app();
        advance_to_summary(&mut app);

        let _ = app.update(Message::OrderShared(true));
        assert_eq!(app.current_screen(), Screen::Start);
        assert_eq!(app.order().flavor, None);

        // A fresh traversal carries nothing over from the previous run.
        let _ = app.update(Message::StartOrder);
        assert_eq!(app.order().quantity, 6);
        assert_eq!(app.order().flavor, None);
        assert_eq!(app.order().pickup_date, None);
    }

    #[test]
    fn failed_share_still_collapses_the_flow() {
        let mut app = app();
        advance_to_summary(&mut app);
        let _ = app.update(Message::OrderShared(false));
        assert_eq!(app.current_screen(), Screen::Start);
    }

    #[test]
    fn order_details_lists_every_field() {
        let mut app = app();
        let first_date = advance_to_summary(&mut app);
        let details = app.order_details();
        assert!(details.contains("Quantity: 6 cupcakes"));
        assert!(details.contains("Flavor: Vanilla"));
        assert!(details.contains(&format!("Pickup date: {first_date}")));
        assert!(details.contains("Total: $15.00"));
    }

    #[test]
    fn screen_titles() {
        assert_eq!(Screen::Start.title(), "Cupcake Shop");
        assert_eq!(Screen::Flavor.title(), "Choose Flavor");
        assert_eq!(Screen::Pickup.title(), "Choose Pickup Date");
        assert_eq!(Screen::Summary.title(), "Order Summary");
    }
}
