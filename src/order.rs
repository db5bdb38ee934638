//! Order state holder for the wizard.
//!
//! `OrderSession` owns the in-progress order and is the only place that
//! mutates it. Consumers read `OrderState` snapshots; every setter replaces
//! the whole snapshot rather than handing out `&mut` to single fields, so a
//! snapshot taken at any point stays internally consistent.

use chrono::{Duration, Local, NaiveDate};

use crate::catalog::{Catalog, format_currency};

/// Immutable snapshot of the in-progress order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderState {
    pub quantity: u32,
    pub flavor: Option<String>,
    pub pickup_date: Option<String>,
    /// Derived from quantity and pickup date; never set directly.
    pub price_cents: u32,
    /// Offered pickup dates, regenerated wholesale on reset.
    pub pickup_options: Vec<String>,
}

impl OrderState {
    pub fn formatted_price(&self) -> String {
        format_currency(self.price_cents)
    }
}

/// Owns the current order and the pricing parameters it is derived from.
///
/// One session exists per flow; `reset` fully replaces prior selections.
#[derive(Debug, Clone)]
pub struct OrderSession {
    unit_price_cents: u32,
    same_day_surcharge_cents: u32,
    pickup_days: usize,
    min_quantity: u32,
    state: OrderState,
}

impl OrderSession {
    pub fn new(catalog: &Catalog) -> Self {
        Self::starting_on(catalog, Local::now().date_naive())
    }

    /// Like `new`, but with an explicit "today" so date generation is
    /// deterministic under test.
    pub fn starting_on(catalog: &Catalog, today: NaiveDate) -> Self {
        let mut session = Self {
            unit_price_cents: catalog.unit_price_cents,
            same_day_surcharge_cents: catalog.same_day_surcharge_cents,
            pickup_days: catalog.pickup_days,
            min_quantity: catalog.min_quantity(),
            state: OrderState {
                quantity: 0,
                flavor: None,
                pickup_date: None,
                price_cents: 0,
                pickup_options: Vec::new(),
            },
        };
        session.reset_from(today);
        session
    }

    pub fn state(&self) -> &OrderState {
        &self.state
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        let price_cents = self.price_for(quantity, self.state.pickup_date.as_deref());
        self.state = OrderState {
            quantity,
            price_cents,
            ..self.state.clone()
        };
    }

    pub fn set_flavor(&mut self, flavor: String) {
        self.state = OrderState {
            flavor: Some(flavor),
            ..self.state.clone()
        };
    }

    pub fn set_date(&mut self, label: String) {
        let price_cents = self.price_for(self.state.quantity, Some(&label));
        self.state = OrderState {
            pickup_date: Some(label),
            price_cents,
            ..self.state.clone()
        };
    }

    /// Clears selections and regenerates the pickup options from the real
    /// current date.
    pub fn reset(&mut self) {
        self.reset_from(Local::now().date_naive());
    }

    pub fn reset_from(&mut self, today: NaiveDate) {
        let quantity = self.min_quantity;
        self.state = OrderState {
            quantity,
            flavor: None,
            pickup_date: None,
            price_cents: quantity * self.unit_price_cents,
            pickup_options: pickup_options(today, self.pickup_days),
        };
    }

    /// Pricing rule: unit price times quantity, plus the same-day surcharge
    /// when the FIRST offered date is the one chosen. The rule is positional,
    /// not a calendar comparison.
    fn price_for(&self, quantity: u32, pickup_date: Option<&str>) -> u32 {
        let first_offered = self.state.pickup_options.first().map(String::as_str);
        let surcharge = match pickup_date {
            Some(chosen) if first_offered == Some(chosen) => self.same_day_surcharge_cents,
            _ => 0,
        };
        quantity * self.unit_price_cents + surcharge
    }
}

/// Today plus the following days, as display labels like "Wed Aug 26".
pub fn pickup_options(today: NaiveDate, days: usize) -> Vec<String> {
    (0..days)
        .map(|offset| {
            (today + Duration::days(offset as i64))
                .format("%a %b %-d")
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn a_wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    fn session() -> OrderSession {
        OrderSession::starting_on(&Catalog::default(), a_wednesday())
    }

    #[test]
    fn pickup_options_are_consecutive_days_from_today() {
        let options = pickup_options(a_wednesday(), 4);
        assert_eq!(
            options,
            vec!["Wed Aug 26", "Thu Aug 27", "Fri Aug 28", "Sat Aug 29"]
        );
    }

    #[test]
    fn starts_at_catalog_defaults() {
        let session = session();
        let state = session.state();
        assert_eq!(state.quantity, 6);
        assert_eq!(state.flavor, None);
        assert_eq!(state.pickup_date, None);
        assert_eq!(state.price_cents, 6 * 200);
        assert_eq!(state.pickup_options.len(), 4);
    }

    #[test]
    fn price_covers_every_quantity_and_offered_date() {
        let catalog = Catalog::default();
        let mut session = session();
        let options = session.state().pickup_options.clone();

        for option in &catalog.quantity_options {
            session.set_quantity(option.count);
            for (index, date) in options.iter().enumerate() {
                session.set_date(date.clone());
                let surcharge = if index == 0 { 300 } else { 0 };
                assert_eq!(
                    session.state().price_cents,
                    option.count * 200 + surcharge,
                    "quantity {} date {}",
                    option.count,
                    date
                );
            }
        }
    }

    #[test]
    fn quantity_change_before_any_date_uses_base_price() {
        let mut session = session();
        session.set_quantity(12);
        assert_eq!(session.state().price_cents, 12 * 200);
    }

    #[test]
    fn quantity_change_keeps_same_day_surcharge() {
        let mut session = session();
        let first = session.state().pickup_options[0].clone();
        session.set_date(first);
        session.set_quantity(24);
        assert_eq!(session.state().price_cents, 24 * 200 + 300);
    }

    #[test]
    fn flavor_has_no_price_effect() {
        let mut session = session();
        let before = session.state().price_cents;
        session.set_flavor("Coffee".to_string());
        assert_eq!(session.state().price_cents, before);
        assert_eq!(session.state().flavor.as_deref(), Some("Coffee"));
    }

    #[test]
    fn reselecting_the_same_date_is_idempotent() {
        let mut session = session();
        let first = session.state().pickup_options[0].clone();
        session.set_date(first.clone());
        let once = session.state().clone();
        session.set_date(first);
        assert_eq!(session.state(), &once);
    }

    #[test]
    fn reset_restores_defaults_and_regenerates_options() {
        let mut session = session();
        session.set_quantity(24);
        session.set_flavor("Chocolate".to_string());
        let first = session.state().pickup_options[0].clone();
        session.set_date(first);

        let next_day = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        session.reset_from(next_day);

        let state = session.state();
        assert_eq!(state.quantity, 6);
        assert_eq!(state.flavor, None);
        assert_eq!(state.pickup_date, None);
        assert_eq!(state.price_cents, 6 * 200);
        assert_eq!(state.pickup_options.len(), 4);
        // The window shifts with the new "today".
        assert_eq!(state.pickup_options[0], "Thu Aug 27");
    }

    #[test]
    fn snapshots_are_stable_values() {
        let mut session = session();
        let before = session.state().clone();
        session.set_flavor("Vanilla".to_string());
        // The previously taken snapshot is untouched by later mutation.
        assert_eq!(before.flavor, None);
        assert_eq!(session.state().flavor.as_deref(), Some("Vanilla"));
    }

    #[test]
    fn formatted_price_is_currency_text() {
        let mut session = session();
        let first = session.state().pickup_options[0].clone();
        session.set_date(first);
        assert_eq!(session.state().formatted_price(), "$15.00");
    }
}
