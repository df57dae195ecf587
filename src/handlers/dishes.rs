use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::portions::{self, Ingredient};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct ScalePortionsRequest {
    /// Serving count the recipe's listed quantities assume.
    pub standard_servings: i32,
    /// Serving count the consumer asked for.
    pub requested_servings: i32,
    #[serde(default)]
    pub important_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub optional_ingredients: Vec<Ingredient>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScalePortionsResponse {
    pub requested_servings: i32,
    pub important_ingredients: Vec<Ingredient>,
    pub optional_ingredients: Vec<Ingredient>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /dishes/portions
///
/// Rescales a dish's ingredient quantities for a requested serving count.
/// Stateless: the dish record travels in the request and the scaled lists
/// feed display-only rendering. Ingredients without a quantity ("to taste")
/// come back untouched.
#[utoipa::path(
    post,
    path = "/dishes/portions",
    request_body = ScalePortionsRequest,
    responses(
        (status = 200, description = "Scaled ingredient lists", body = ScalePortionsResponse),
        (status = 400, description = "Servings count below 1"),
    ),
    tag = "dishes"
)]
pub async fn scale_portions(
    body: web::Json<ScalePortionsRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let important = portions::scale_ingredients(
        &body.important_ingredients,
        body.standard_servings,
        body.requested_servings,
    )?;
    let optional = portions::scale_ingredients(
        &body.optional_ingredients,
        body.standard_servings,
        body.requested_servings,
    )?;

    Ok(HttpResponse::Ok().json(ScalePortionsResponse {
        requested_servings: body.requested_servings,
        important_ingredients: important,
        optional_ingredients: optional,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::json;

    use super::*;

    #[actix_web::test]
    async fn scales_both_ingredient_lists() {
        let app = test::init_service(
            App::new().route("/dishes/portions", web::post().to(scale_portions)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/dishes/portions")
            .set_json(json!({
                "standard_servings": 2,
                "requested_servings": 5,
                "important_ingredients": [
                    {"name": "eggs", "quantity": 4.0, "unit": "шт"}
                ],
                "optional_ingredients": [
                    {"name": "salt", "unit": "to taste"}
                ]
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["important_ingredients"][0]["quantity"], json!(10.0));
        assert_eq!(body["optional_ingredients"][0].get("quantity"), None);
    }

    #[actix_web::test]
    async fn zero_standard_servings_is_a_bad_request() {
        let app = test::init_service(
            App::new().route("/dishes/portions", web::post().to(scale_portions)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/dishes/portions")
            .set_json(json!({
                "standard_servings": 0,
                "requested_servings": 2,
                "important_ingredients": []
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
