use crate::domain::menu::MenuItem;
use crate::domain::money::Price;
use crate::domain::order::{Order, OrderId, OrderState, Payable, PaymentReceipt};
use crate::domain::ports::{Registry, RegistryBox};
use crate::domain::restaurant::RestaurantId;
use crate::error::{PlatformError, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// Outcome of a successful placement.
///
/// `priority` is report-only: it does not influence partner selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementReceipt {
    pub order: OrderId,
    pub total: Price,
    pub partner: Option<String>,
    pub priority: bool,
}

/// The order lifecycle manager.
///
/// Owns the registry and drives an order from `Open` (accepting items)
/// through `Placed` (items frozen, partner assignment attempted) to a
/// validated payment. Every operation fetches the order, mutates it, and
/// stores it back.
pub struct OrderEngine {
    registry: RegistryBox,
}

impl OrderEngine {
    pub fn new(registry: RegistryBox) -> Self {
        Self { registry }
    }

    /// The injected registry, for registration and direct lookups.
    pub fn registry(&self) -> &dyn Registry {
        self.registry.as_ref()
    }

    pub fn create_order(&self, customer: &str, restaurant: RestaurantId) -> Result<OrderId> {
        if self.registry.restaurant(restaurant).is_none() {
            return Err(PlatformError::UnknownRestaurant(restaurant));
        }
        let id = self.registry.next_order_id();
        self.registry.store_order(Order::new(id, customer, restaurant));
        tracing::info!(order = %id, customer, "order opened");
        Ok(id)
    }

    pub fn add_item(&self, id: OrderId, item: MenuItem) -> Result<()> {
        let mut order = self.fetch(id)?;
        order.add_item(item)?;
        tracing::debug!(order = %id, total = %order.total(), "item added");
        self.registry.store_order(order);
        Ok(())
    }

    /// Places the order: rejects if the restaurant is closed, otherwise
    /// claims the first available partner (a missing partner is non-fatal)
    /// and freezes the item list.
    pub fn place_order(&self, id: OrderId, priority: bool) -> Result<PlacementReceipt> {
        let mut order = self.fetch(id)?;
        let restaurant = self
            .registry
            .restaurant(order.restaurant)
            .ok_or(PlatformError::UnknownRestaurant(order.restaurant))?;
        if !restaurant.is_open() {
            return Err(PlatformError::RestaurantClosed(restaurant.name));
        }

        let partner = self.registry.claim_available_partner(order.id);
        if partner.is_none() {
            tracing::warn!(order = %id, "no delivery partner available");
        }
        order.partner = partner;
        order.state = OrderState::Placed;

        let receipt = PlacementReceipt {
            order: order.id,
            total: order.total(),
            partner: partner
                .and_then(|p| self.registry.partner(p))
                .map(|p| p.name),
            priority,
        };
        tracing::info!(
            order = %id,
            total = %receipt.total,
            partner = ?receipt.partner,
            priority,
            "order placed"
        );
        self.registry.store_order(order);
        Ok(receipt)
    }

    pub fn process_payment(&self, id: OrderId, amount: Decimal) -> Result<PaymentReceipt> {
        let order = self.fetch(id)?;
        let receipt = order.process_payment(amount)?;
        tracing::info!(order = %id, %amount, "payment accepted");
        Ok(receipt)
    }

    pub fn order(&self, id: OrderId) -> Result<Order> {
        self.fetch(id)
    }

    /// Consumes the engine and returns every order the registry has seen.
    pub fn into_orders(self) -> Vec<Order> {
        self.registry.orders()
    }

    fn fetch(&self, id: OrderId) -> Result<Order> {
        self.registry.order(id).ok_or(PlatformError::UnknownOrder(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::Category;
    use crate::domain::partner::DeliveryPartner;
    use crate::domain::restaurant::Restaurant;
    use crate::infrastructure::in_memory::InMemoryRegistry;
    use rust_decimal_macros::dec;

    fn engine() -> OrderEngine {
        OrderEngine::new(Box::new(InMemoryRegistry::new()))
    }

    fn item(id: &str, price: Decimal) -> MenuItem {
        MenuItem::new(id, id, Price::new(price).unwrap(), Category::Veg)
    }

    fn open_restaurant(engine: &OrderEngine) -> RestaurantId {
        engine
            .registry()
            .register_restaurant(Restaurant::new("Spice Villa", "Andheri"))
    }

    #[test]
    fn test_create_order_requires_known_restaurant() {
        let engine = engine();
        let result = engine.create_order("Rahul", RestaurantId(42));
        assert!(matches!(result, Err(PlatformError::UnknownRestaurant(_))));
    }

    #[test]
    fn test_closed_restaurant_rejects_placement_and_leaves_order_open() {
        let engine = engine();
        let restaurant = open_restaurant(&engine);
        engine.registry().register_partner(DeliveryPartner::new("John"));

        let order = engine.create_order("Rahul", restaurant).unwrap();
        engine.add_item(order, item("V1", dec!(299))).unwrap();

        let mut closed = engine.registry().restaurant(restaurant).unwrap();
        closed.close();
        engine.registry().store_restaurant(restaurant, closed);

        let result = engine.place_order(order, false);
        assert!(matches!(result, Err(PlatformError::RestaurantClosed(_))));

        let order = engine.order(order).unwrap();
        assert_eq!(order.state, OrderState::Open);
        assert!(order.partner.is_none());
        // The rejection happens before the partner scan, so John stays free
        assert!(
            engine
                .registry()
                .partner(crate::domain::partner::PartnerId(0))
                .unwrap()
                .is_available()
        );
    }

    #[test]
    fn test_placement_without_partner_still_succeeds() {
        let engine = engine();
        let restaurant = open_restaurant(&engine);

        let order = engine.create_order("Rahul", restaurant).unwrap();
        engine.add_item(order, item("V1", dec!(299))).unwrap();

        let receipt = engine.place_order(order, false).unwrap();
        assert!(receipt.partner.is_none());
        assert_eq!(engine.order(order).unwrap().state, OrderState::Placed);
    }

    #[test]
    fn test_placement_claims_first_registered_partner() {
        let engine = engine();
        let restaurant = open_restaurant(&engine);
        engine.registry().register_partner(DeliveryPartner::new("John"));
        engine.registry().register_partner(DeliveryPartner::new("Mary"));

        let first = engine.create_order("Rahul", restaurant).unwrap();
        let receipt = engine.place_order(first, false).unwrap();
        assert_eq!(receipt.partner.as_deref(), Some("John"));

        let second = engine.create_order("Rahul", restaurant).unwrap();
        let receipt = engine.place_order(second, false).unwrap();
        assert_eq!(receipt.partner.as_deref(), Some("Mary"));

        let third = engine.create_order("Rahul", restaurant).unwrap();
        let receipt = engine.place_order(third, false).unwrap();
        assert!(receipt.partner.is_none());
    }

    #[test]
    fn test_priority_only_toggles_the_reported_flag() {
        let engine = engine();
        let restaurant = open_restaurant(&engine);
        engine.registry().register_partner(DeliveryPartner::new("John"));
        engine.registry().register_partner(DeliveryPartner::new("Mary"));

        let rushed = engine.create_order("Rahul", restaurant).unwrap();
        let receipt = engine.place_order(rushed, true).unwrap();
        assert!(receipt.priority);
        // Priority does not jump the partner queue
        assert_eq!(receipt.partner.as_deref(), Some("John"));
    }

    #[test]
    fn test_payment_succeeds_iff_amount_covers_total() {
        let engine = engine();
        let restaurant = open_restaurant(&engine);

        let order = engine.create_order("Rahul", restaurant).unwrap();
        engine.add_item(order, item("V1", dec!(299))).unwrap();
        engine.add_item(order, item("V2", dec!(199))).unwrap();

        assert!(matches!(
            engine.process_payment(order, dec!(100)),
            Err(PlatformError::PaymentFailed { .. })
        ));
        assert!(engine.process_payment(order, dec!(498)).is_ok());
        assert!(engine.process_payment(order, dec!(500)).is_ok());
    }

    #[test]
    fn test_add_item_after_placement_is_rejected() {
        let engine = engine();
        let restaurant = open_restaurant(&engine);

        let order = engine.create_order("Rahul", restaurant).unwrap();
        engine.add_item(order, item("V1", dec!(299))).unwrap();
        engine.place_order(order, false).unwrap();

        let result = engine.add_item(order, item("V2", dec!(199)));
        assert!(matches!(result, Err(PlatformError::OrderAlreadyPlaced(_))));
        assert_eq!(engine.order(order).unwrap().total().value(), dec!(299));
    }

    #[test]
    fn test_into_orders_returns_creation_order() {
        let engine = engine();
        let restaurant = open_restaurant(&engine);
        let first = engine.create_order("Rahul", restaurant).unwrap();
        let second = engine.create_order("Asha", restaurant).unwrap();

        let orders = engine.into_orders();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, first);
        assert_eq!(orders[1].id, second);
    }
}
