//! Domain entities and value objects for the food-delivery workflow, plus
//! the `Registry` port they are stored behind.

pub mod menu;
pub mod money;
pub mod order;
pub mod partner;
pub mod ports;
pub mod restaurant;
