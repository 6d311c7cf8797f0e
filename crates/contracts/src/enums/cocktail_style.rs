use serde::{Deserialize, Serialize};

/// Preparation style of a cocktail. Drives the per-serving ice estimate
/// in the shopping-list calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CocktailStyle {
    Shaken,
    Stirred,
    Built,
    Blended,
    Mocktail,
}

impl CocktailStyle {
    pub fn code(&self) -> &'static str {
        match self {
            CocktailStyle::Shaken => "shaken",
            CocktailStyle::Stirred => "stirred",
            CocktailStyle::Built => "built",
            CocktailStyle::Blended => "blended",
            CocktailStyle::Mocktail => "mocktail",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "shaken" => Some(CocktailStyle::Shaken),
            "stirred" => Some(CocktailStyle::Stirred),
            "built" => Some(CocktailStyle::Built),
            "blended" => Some(CocktailStyle::Blended),
            "mocktail" => Some(CocktailStyle::Mocktail),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CocktailStyle::Shaken => "Shaken",
            CocktailStyle::Stirred => "Stirred",
            CocktailStyle::Built => "Built",
            CocktailStyle::Blended => "Blended",
            CocktailStyle::Mocktail => "Mocktail",
        }
    }

    /// Grams of ice a single serving consumes (shaking/serving combined)
    pub fn ice_grams_per_serving(&self) -> f64 {
        match self {
            CocktailStyle::Shaken => 120.0,
            CocktailStyle::Stirred => 90.0,
            CocktailStyle::Built => 180.0,
            CocktailStyle::Blended => 240.0,
            CocktailStyle::Mocktail => 150.0,
        }
    }
}

impl std::fmt::Display for CocktailStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
