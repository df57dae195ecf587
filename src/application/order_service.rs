use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{ListResult, OrderLineInput, OrderView};
use crate::domain::ports::OrderRepository;
use crate::domain::pricing;

#[derive(Clone)]
pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Accept an order. The persisted total is always recomputed here from
    /// the validated lines; `client_total` is a hint only and never stored,
    /// so a forged total cannot reach the repository.
    pub fn create_order(
        &self,
        customer_id: Uuid,
        lines: Vec<OrderLineInput>,
        client_total: Option<BigDecimal>,
    ) -> Result<Uuid, DomainError> {
        let total = pricing::order_total(lines.iter().map(|l| &l.pricing));
        if let Some(hint) = client_total {
            if hint != total {
                log::warn!(
                    "client-submitted total {} differs from recomputed total {}, persisting the recomputed value",
                    hint,
                    total
                );
            }
        }
        self.repo.create(customer_id, lines, total)
    }

    pub fn get_order(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        self.repo.find_by_id(id)
    }

    pub fn list_orders(&self, page: i64, limit: i64) -> Result<ListResult, DomainError> {
        self.repo.list(page, limit)
    }

    pub fn update_status(&self, id: Uuid, status: &str) -> Result<(), DomainError> {
        self.repo.update_status(id, status)
    }
}
