use crate::domain::order::OrderId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PartnerId(pub u32);

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPartner {
    pub name: String,
    available: bool,
    assigned: Vec<OrderId>,
}

impl DeliveryPartner {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: true,
            assigned: Vec::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Takes the partner off the market. There is no release path: a
    /// partner stays unavailable after their first assignment.
    pub fn assign(&mut self, order: OrderId) {
        self.assigned.push(order);
        self.available = false;
    }

    pub fn assigned(&self) -> &[OrderId] {
        &self.assigned
    }
}
