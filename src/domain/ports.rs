use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::errors::DomainError;
use super::order::{ListResult, OrderLineInput, OrderView};

/// Persistence port. The backing store is an opaque collaborator reached
/// through these primitives only; `total_sum` arrives precomputed from the
/// pricing engine and is stored as-is.
pub trait OrderRepository: Send + Sync + 'static {
    fn create(
        &self,
        customer_id: Uuid,
        lines: Vec<OrderLineInput>,
        total_sum: BigDecimal,
    ) -> Result<Uuid, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError>;
    fn list(&self, page: i64, limit: i64) -> Result<ListResult, DomainError>;
    fn update_status(&self, id: Uuid, status: &str) -> Result<(), DomainError>;
}
