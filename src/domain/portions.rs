use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;

/// One recipe ingredient. `quantity` is absent for "to taste" entries, which
/// never receive a numeric amount no matter the serving ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    pub unit: String,
}

/// Rescale ingredient quantities from a recipe's standard serving count to a
/// requested one.
///
/// Both counts must be at least 1; a dish record with zero standard servings
/// is illegal and fails with `InvalidServings` instead of dividing by zero.
/// Scaled quantities are rounded to two decimal places and the output keeps
/// the input ordering.
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    standard_servings: i32,
    requested_servings: i32,
) -> Result<Vec<Ingredient>, DomainError> {
    if standard_servings < 1 || requested_servings < 1 {
        return Err(DomainError::InvalidServings);
    }
    let factor = f64::from(requested_servings) / f64::from(standard_servings);
    Ok(ingredients
        .iter()
        .map(|ingredient| Ingredient {
            name: ingredient.name.clone(),
            quantity: ingredient.quantity.map(|q| round2(q * factor)),
            unit: ingredient.unit.clone(),
        })
        .collect())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
