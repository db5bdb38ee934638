/// Every user intent in the order flow.
#[derive(Debug, Clone)]
pub enum Message {
    /// Highlight a batch size on the start screen (no order mutation yet).
    QuantitySelected(u32),
    /// Next on the start screen: records the quantity and opens the flavor
    /// screen.
    StartOrder,
    FlavorSelected(String),
    PickupDateSelected(String),
    /// Next on the flavor/pickup screens; gated on a selection existing.
    NextPressed,
    /// Pops exactly one screen, keeping order data.
    NavigateBack,
    /// Resets the order and collapses the flow back to the start screen.
    CancelOrder,
    /// Hand the summary to the share mechanism.
    SendOrder,
    /// The share hand-off finished (successfully or not).
    OrderShared(bool),
}
