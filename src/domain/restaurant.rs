use crate::domain::menu::MenuItem;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RestaurantId(pub u32);

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub address: String,
    open: bool,
    menu: Vec<MenuItem>,
}

impl Restaurant {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            open: true,
            menu: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Closing is permanent; no reopen path exists.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn add_menu_item(&mut self, item: MenuItem) {
        self.menu.push(item);
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }
}
