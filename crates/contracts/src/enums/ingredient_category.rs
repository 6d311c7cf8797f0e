use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngredientCategory {
    Spirit,
    Liqueur,
    Wine,
    Juice,
    Syrup,
    Produce,
    Garnish,
    Other,
}

impl IngredientCategory {
    pub fn code(&self) -> &'static str {
        match self {
            IngredientCategory::Spirit => "spirit",
            IngredientCategory::Liqueur => "liqueur",
            IngredientCategory::Wine => "wine",
            IngredientCategory::Juice => "juice",
            IngredientCategory::Syrup => "syrup",
            IngredientCategory::Produce => "produce",
            IngredientCategory::Garnish => "garnish",
            IngredientCategory::Other => "other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "spirit" => Some(IngredientCategory::Spirit),
            "liqueur" => Some(IngredientCategory::Liqueur),
            "wine" => Some(IngredientCategory::Wine),
            "juice" => Some(IngredientCategory::Juice),
            "syrup" => Some(IngredientCategory::Syrup),
            "produce" => Some(IngredientCategory::Produce),
            "garnish" => Some(IngredientCategory::Garnish),
            "other" => Some(IngredientCategory::Other),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IngredientCategory::Spirit => "Spirit",
            IngredientCategory::Liqueur => "Liqueur",
            IngredientCategory::Wine => "Wine",
            IngredientCategory::Juice => "Juice",
            IngredientCategory::Syrup => "Syrup",
            IngredientCategory::Produce => "Produce",
            IngredientCategory::Garnish => "Garnish",
            IngredientCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
