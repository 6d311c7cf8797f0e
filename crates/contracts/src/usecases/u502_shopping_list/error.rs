use thiserror::Error;

/// Typed failures of the shopping-list usecase, from request resolution
/// through the calculator
#[derive(Debug, Error, PartialEq)]
pub enum ShoppingListError {
    #[error("invalid event ID: {0}")]
    InvalidEventId(String),

    #[error("event not found: {0}")]
    EventNotFound(String),

    #[error("guest count is required")]
    MissingGuestCount,

    #[error("guest count must be at least 1, got {0}")]
    InvalidGuestCount(i32),

    #[error("cocktail selection is empty")]
    EmptySelection,

    #[error("distribution percents must sum to 100, got {sum}")]
    InvalidDistribution { sum: f64 },

    #[error("unknown cocktail: {0}")]
    UnknownCocktail(String),

    #[error("unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("recipe unit {recipe_unit} is incompatible with package unit {package_unit} for ingredient {ingredient}")]
    DimensionMismatch {
        ingredient: String,
        recipe_unit: String,
        package_unit: String,
    },
}
