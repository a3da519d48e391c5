use crate::domain::order::{Order, OrderId};
use crate::domain::partner::{DeliveryPartner, PartnerId};
use crate::domain::restaurant::{Restaurant, RestaurantId};

/// Process-wide registry of restaurants, delivery partners and orders.
///
/// Constructed once at startup and injected wherever it is needed; there is
/// no global instance. Implementations hand out clones and accept the
/// mutated value back via the `store_*` methods.
pub trait Registry: Send + Sync {
    fn register_restaurant(&self, restaurant: Restaurant) -> RestaurantId;
    fn restaurant(&self, id: RestaurantId) -> Option<Restaurant>;
    fn store_restaurant(&self, id: RestaurantId, restaurant: Restaurant);

    fn register_partner(&self, partner: DeliveryPartner) -> PartnerId;
    fn partner(&self, id: PartnerId) -> Option<DeliveryPartner>;

    /// Claims the first available partner in registration order, marking
    /// them unavailable and recording the order against them. `None` when
    /// every partner is already taken.
    fn claim_available_partner(&self, order: OrderId) -> Option<PartnerId>;

    /// Allocates the next monotonically increasing order id.
    fn next_order_id(&self) -> OrderId;
    fn store_order(&self, order: Order);
    fn order(&self, id: OrderId) -> Option<Order>;

    /// Every order ever stored, in creation order.
    fn orders(&self) -> Vec<Order>;
}

pub type RegistryBox = Box<dyn Registry>;
