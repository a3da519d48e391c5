use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::order::OrderId;
use crate::domain::restaurant::RestaurantId;

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Coarse classification used by callers to decide whether a failure is
/// report-and-continue material or a bug in the calling code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Recoverable,
    ProgrammerError,
}

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("{0} is closed!")]
    RestaurantClosed(String),
    #[error("insufficient payment: offered {offered} against a total of {total}")]
    PaymentFailed { offered: Decimal, total: Decimal },
    #[error("{user} has reached the limit of {limit} posts")]
    TooManyPosts { user: String, limit: usize },
    #[error("rating must be 1-5, got {0}")]
    InvalidRating(u8),
    #[error("price cannot be negative: {0}")]
    NegativePrice(Decimal),
    #[error("order {0} is already placed")]
    OrderAlreadyPlaced(OrderId),
    #[error("unknown order {0}")]
    UnknownOrder(OrderId),
    #[error("unknown restaurant {0}")]
    UnknownRestaurant(RestaurantId),
}

impl PlatformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RestaurantClosed(_) | Self::PaymentFailed { .. } | Self::TooManyPosts { .. } => {
                ErrorKind::Recoverable
            }
            Self::InvalidRating(_)
            | Self::NegativePrice(_)
            | Self::OrderAlreadyPlaced(_)
            | Self::UnknownOrder(_)
            | Self::UnknownRestaurant(_) => ErrorKind::ProgrammerError,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.kind() == ErrorKind::Recoverable
    }
}
