use crate::domain::money::Price;
use crate::error::{PlatformError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Veg,
    NonVeg,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Veg => write!(f, "Veg"),
            Category::NonVeg => write!(f, "Non-Veg"),
        }
    }
}

/// Capability contract for anything that accepts star ratings.
pub trait Rateable {
    fn add_rating(&mut self, stars: u8, review: &str) -> Result<()>;

    /// Arithmetic mean of all recorded stars, 0.0 when nothing has been
    /// rated yet.
    fn average_rating(&self) -> f64;
}

/// A dish on a restaurant's menu.
///
/// Identity fields are fixed at construction; only the rating list mutates,
/// and only through [`Rateable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    id: String,
    name: String,
    price: Price,
    category: Category,
    ratings: Vec<u8>,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Price,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            ratings: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// One-line description used by the demo output.
    pub fn details(&self) -> String {
        format!("{} - ₹{}", self.name, self.price)
    }
}

impl Rateable for MenuItem {
    fn add_rating(&mut self, stars: u8, review: &str) -> Result<()> {
        if !(1..=5).contains(&stars) {
            return Err(PlatformError::InvalidRating(stars));
        }
        tracing::debug!(item = %self.id, stars, review, "rating recorded");
        self.ratings.push(stars);
        Ok(())
    }

    fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let total: u32 = self.ratings.iter().map(|&s| u32::from(s)).sum();
        f64::from(total) / self.ratings.len() as f64
    }
}
