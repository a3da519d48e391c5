use crate::domain::order::{Order, OrderId};
use crate::domain::partner::{DeliveryPartner, PartnerId};
use crate::domain::ports::Registry;
use crate::domain::restaurant::{Restaurant, RestaurantId};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Order ids count up from here, so the first order is ORD1001.
const ORDER_ID_SEED: u64 = 1000;

struct RegistryState {
    restaurants: Vec<Restaurant>,
    partners: Vec<DeliveryPartner>,
    orders: BTreeMap<OrderId, Order>,
    order_counter: u64,
}

/// In-memory implementation of the [`Registry`] port.
///
/// One coarse `RwLock` over the whole state; every operation is a single
/// sequential critical section, which is all the workloads here require.
/// Restaurants and partners are `Vec`-indexed so that registration order is
/// preserved for the first-match partner scan.
#[derive(Clone)]
pub struct InMemoryRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(RegistryState {
                restaurants: Vec::new(),
                partners: Vec::new(),
                orders: BTreeMap::new(),
                order_counter: ORDER_ID_SEED,
            })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().expect("registry lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().expect("registry lock poisoned")
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry for InMemoryRegistry {
    fn register_restaurant(&self, restaurant: Restaurant) -> RestaurantId {
        let mut state = self.write();
        tracing::info!(name = %restaurant.name, "restaurant registered");
        state.restaurants.push(restaurant);
        RestaurantId((state.restaurants.len() - 1) as u32)
    }

    fn restaurant(&self, id: RestaurantId) -> Option<Restaurant> {
        self.read().restaurants.get(id.0 as usize).cloned()
    }

    fn store_restaurant(&self, id: RestaurantId, restaurant: Restaurant) {
        let mut state = self.write();
        if let Some(slot) = state.restaurants.get_mut(id.0 as usize) {
            *slot = restaurant;
        }
    }

    fn register_partner(&self, partner: DeliveryPartner) -> PartnerId {
        let mut state = self.write();
        tracing::info!(name = %partner.name, "delivery partner registered");
        state.partners.push(partner);
        PartnerId((state.partners.len() - 1) as u32)
    }

    fn partner(&self, id: PartnerId) -> Option<DeliveryPartner> {
        self.read().partners.get(id.0 as usize).cloned()
    }

    fn claim_available_partner(&self, order: OrderId) -> Option<PartnerId> {
        let mut state = self.write();
        let (idx, partner) = state
            .partners
            .iter_mut()
            .enumerate()
            .find(|(_, p)| p.is_available())?;
        partner.assign(order);
        Some(PartnerId(idx as u32))
    }

    fn next_order_id(&self) -> OrderId {
        let mut state = self.write();
        state.order_counter += 1;
        OrderId(state.order_counter)
    }

    fn store_order(&self, order: Order) {
        self.write().orders.insert(order.id, order);
    }

    fn order(&self, id: OrderId) -> Option<Order> {
        self.read().orders.get(&id).cloned()
    }

    fn orders(&self) -> Vec<Order> {
        self.read().orders.values().cloned().collect()
    }
}
