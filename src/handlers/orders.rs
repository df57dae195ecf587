use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::order_service::OrderService;
use crate::domain::order::{OrderLineInput, OrderView};
use crate::domain::paginate::{self, PageToken};
use crate::domain::pricing::LineItem;
use crate::errors::AppError;
use crate::infrastructure::order_repo::DieselOrderRepository;

pub type AppOrderService = OrderService<DieselOrderRepository>;

/// Pages shown around the current one in the pager window.
const PAGER_WINDOW: i64 = 5;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderLineRequest {
    pub dish_id: Uuid,
    pub quantity: i32,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub unit_price: String,
    /// Percentage in [0, 100], e.g. "25". Absent means no discount.
    pub discount_percent: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: Uuid,
    pub lines: Vec<CreateOrderLineRequest>,
    /// Client-side total, treated as a hint only. The persisted total is
    /// always recomputed server-side from the lines.
    pub total_sum: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineResponse {
    pub id: Uuid,
    pub dish_id: Uuid,
    pub quantity: i32,
    pub unit_price: String,
    pub discount_percent: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: String,
    pub total_sum: String,
    pub created_at: String,
    pub lines: Vec<OrderLineResponse>,
}

impl From<OrderView> for OrderResponse {
    fn from(order: OrderView) -> Self {
        OrderResponse {
            id: order.id,
            customer_id: order.customer_id,
            status: order.status,
            total_sum: order.total_sum.to_string(),
            created_at: order.created_at.to_rfc3339(),
            lines: order
                .lines
                .into_iter()
                .map(|l| OrderLineResponse {
                    id: l.id,
                    dish_id: l.dish_id,
                    quantity: l.quantity,
                    unit_price: l.unit_price.to_string(),
                    discount_percent: l.discount_percent.map(|d| d.to_string()),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// Opaque status label, e.g. "created" or "completed".
    pub status: String,
}

// ── Pagination ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListOrdersParams {
    /// Page number (1-based). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of items per page. Defaults to 20, maximum 100.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListOrdersResponse {
    pub items: Vec<OrderResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    /// Pager window: page numbers interleaved with "ellipsis" markers.
    #[schema(value_type = Vec<Object>)]
    pub pages: Vec<PageToken>,
    pub has_previous: bool,
    pub has_next: bool,
}

// ── Parsing helpers ──────────────────────────────────────────────────────────

fn parse_decimal(field: &str, raw: &str) -> Result<BigDecimal, AppError> {
    BigDecimal::from_str(raw)
        .map_err(|e| AppError::Validation(format!("Invalid {} '{}': {}", field, raw, e)))
}

fn parse_lines(lines: &[CreateOrderLineRequest]) -> Result<Vec<OrderLineInput>, AppError> {
    lines
        .iter()
        .map(|l| {
            let unit_price = parse_decimal("unit_price", &l.unit_price)?;
            let discount = l
                .discount_percent
                .as_deref()
                .map(|d| parse_decimal("discount_percent", d))
                .transpose()?;
            let pricing = LineItem::new(unit_price, discount, l.quantity)?;
            Ok(OrderLineInput {
                dish_id: l.dish_id,
                pricing,
            })
        })
        .collect()
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Accepts an order from an untrusted client. Every line is validated at
/// this boundary (discount range, positive quantity, non-negative price) and
/// the persisted total is recomputed from the validated lines; the optional
/// client-supplied `total_sum` is never stored.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = CreateOrderResponse),
        (status = 400, description = "Invalid line item"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppOrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let lines = parse_lines(&body.lines)?;
    let client_total = body
        .total_sum
        .as_deref()
        .map(|t| parse_decimal("total_sum", t))
        .transpose()?;

    let customer_id = body.customer_id;
    let order_id = web::block(move || {
        Ok::<_, AppError>(service.create_order(customer_id, lines, client_total)?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(json!({ "id": order_id })))
}

/// GET /orders/{id}
///
/// Returns the order together with its order lines.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppOrderService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let result = web::block(move || Ok::<_, AppError>(service.get_order(order_id)?))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match result {
        Some(order) => Ok(HttpResponse::Ok().json(OrderResponse::from(order))),
        None => Err(AppError::NotFound),
    }
}

/// GET /orders
///
/// Returns a paginated list of orders (without their lines), with the
/// total-page count and the compressed pager window for navigation controls.
#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (default 20, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of orders", body = ListOrdersResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    service: web::Data<AppOrderService>,
    query: web::Query<ListOrdersParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let page = params.page.max(1);
    let limit = params.limit.clamp(1, 100);

    let result = web::block(move || Ok::<_, AppError>(service.list_orders(page, limit)?))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let total_pages = paginate::compute_total_pages(result.total, limit)?;
    let pages = paginate::page_window(page, total_pages, PAGER_WINDOW)?;

    Ok(HttpResponse::Ok().json(ListOrdersResponse {
        items: result.items.into_iter().map(OrderResponse::from).collect(),
        total: result.total,
        page,
        limit,
        total_pages,
        pages,
        has_previous: page > 1,
        has_next: page < total_pages,
    }))
}

/// PATCH /orders/{id}/status
///
/// Sets the order's status label. The label is opaque: "created" and
/// "completed" are the values the rest of the system uses, but no transition
/// rules are enforced here.
#[utoipa::path(
    patch,
    path = "/orders/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn update_status(
    service: web::Data<AppOrderService>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let status = body.into_inner().status;

    web::block(move || Ok::<_, AppError>(service.update_status(order_id, &status)?))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(json!({ "id": order_id })))
}
