//! The shop's fixed offer: quantities, flavors, and pricing.
//!
//! Everything here is plain data. A deployment can override the defaults
//! through the optional config file (see `config`).

/// One selectable batch size on the start screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityOption {
    pub label: String,
    pub count: u32,
}

impl QuantityOption {
    pub fn new(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub quantity_options: Vec<QuantityOption>,
    pub flavors: Vec<String>,
    /// Price of a single cupcake, in cents.
    pub unit_price_cents: u32,
    /// Extra charge applied when the first offered pickup date is chosen.
    pub same_day_surcharge_cents: u32,
    /// How many pickup dates are offered, starting from today.
    pub pickup_days: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            quantity_options: vec![
                QuantityOption::new("Six cupcakes", 6),
                QuantityOption::new("Twelve cupcakes", 12),
                QuantityOption::new("Twenty four cupcakes", 24),
            ],
            flavors: vec![
                "Vanilla".to_string(),
                "Chocolate".to_string(),
                "Red Velvet".to_string(),
                "Salted Caramel".to_string(),
                "Coffee".to_string(),
            ],
            unit_price_cents: 200,
            same_day_surcharge_cents: 300,
            pickup_days: 4,
        }
    }
}

impl Catalog {
    /// Smallest offered batch size. Used as the pre-selected default.
    pub fn min_quantity(&self) -> u32 {
        self.quantity_options
            .iter()
            .map(|option| option.count)
            .min()
            .unwrap_or(1)
    }
}

pub fn format_currency(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
