use crate::domain::menu::MenuItem;
use crate::domain::money::Price;
use crate::domain::partner::PartnerId;
use crate::domain::restaurant::RestaurantId;
use crate::error::{PlatformError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORD{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Open,
    Placed,
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderState::Open => write!(f, "open"),
            OrderState::Placed => write!(f, "placed"),
        }
    }
}

/// Capability contract for anything a payment can be made against.
pub trait Payable {
    fn process_payment(&self, amount: Decimal) -> Result<PaymentReceipt>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub order: OrderId,
    pub amount: Decimal,
}

/// A customer's purchase against one restaurant's menu.
///
/// The running total is grown incrementally on every `add_item`; items are
/// never removed, so the total always equals the sum of the item prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub restaurant: RestaurantId,
    items: Vec<MenuItem>,
    total: Price,
    pub state: OrderState,
    pub partner: Option<PartnerId>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: OrderId, customer: impl Into<String>, restaurant: RestaurantId) -> Self {
        Self {
            id,
            customer: customer.into(),
            restaurant,
            items: Vec::new(),
            total: Price::ZERO,
            state: OrderState::Open,
            partner: None,
            created_at: Utc::now(),
        }
    }

    /// Appends an item and grows the running total by its price.
    ///
    /// The item list is frozen once the order leaves `Open`.
    pub fn add_item(&mut self, item: MenuItem) -> Result<()> {
        if self.state != OrderState::Open {
            return Err(PlatformError::OrderAlreadyPlaced(self.id));
        }
        self.total += item.price();
        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn total(&self) -> Price {
        self.total
    }
}

impl Payable for Order {
    /// Validates the amount against the running total. There is no
    /// idempotence guard: a second sufficient payment succeeds again.
    fn process_payment(&self, amount: Decimal) -> Result<PaymentReceipt> {
        if amount < self.total.value() {
            return Err(PlatformError::PaymentFailed {
                offered: amount,
                total: self.total.value(),
            });
        }
        Ok(PaymentReceipt {
            order: self.id,
            amount,
        })
    }
}
