use serde::{Deserialize, Serialize};

/// One ingredient on the computed shopping list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingListRow {
    #[serde(rename = "ingredientId")]
    pub ingredient_id: String,

    #[serde(rename = "ingredientName")]
    pub ingredient_name: String,

    /// Ingredient category code (spirit, juice, ...)
    pub category: String,

    /// Total required quantity in the dimension's base unit (ml, g or pc)
    #[serde(rename = "requiredQuantity")]
    pub required_quantity: f64,

    /// Base unit code the quantity is expressed in
    #[serde(rename = "baseUnit")]
    pub base_unit: String,

    /// Whole purchase packages to buy
    pub packages: i64,

    /// Human-readable package descriptor, e.g. "0.7 l"
    #[serde(rename = "packageLabel")]
    pub package_label: String,

    /// Packages times package price
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: f64,
}

/// Hard-coded style-based ice estimate appended to the list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IceEstimate {
    /// Total ice demand in grams
    #[serde(rename = "totalGrams")]
    pub total_grams: f64,

    /// Whole 2 kg bags to buy
    pub bags: i64,

    #[serde(rename = "estimatedCost")]
    pub estimated_cost: f64,
}

/// Computed shopping list for an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingListResponse {
    #[serde(rename = "guestCount")]
    pub guest_count: i32,

    /// Servings including the safety margin
    #[serde(rename = "totalServings")]
    pub total_servings: f64,

    #[serde(rename = "safetyMarginPercent")]
    pub safety_margin_percent: f64,

    pub rows: Vec<ShoppingListRow>,

    pub ice: IceEstimate,

    /// Sum of row costs plus ice
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
}
