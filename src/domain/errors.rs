use bigdecimal::BigDecimal;
use thiserror::Error;

/// Validation failures raised at the point of computation. None of these is
/// retryable: the same input always produces the same failure, and callers
/// must surface them rather than let a silently wrong number through.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("discount percent must be within [0, 100], got {0}")]
    InvalidDiscount(BigDecimal),
    #[error("unit price must not be negative, got {0}")]
    InvalidPrice(BigDecimal),
    #[error("quantity must be a positive integer, got {0}")]
    InvalidQuantity(i32),
    #[error("servings count must be at least 1")]
    InvalidServings,
    #[error("page size must be positive, got {0}")]
    InvalidPageSize(i64),
    #[error("Order not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}
