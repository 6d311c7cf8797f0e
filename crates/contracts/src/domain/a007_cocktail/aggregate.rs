use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore};
use crate::enums::{CocktailStyle, Unit};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CocktailId(pub Uuid);

impl CocktailId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CocktailId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CocktailId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// One line of a cocktail recipe: quantity of an ingredient per serving
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeLine {
    /// UUID of the ingredient (a006_ingredient)
    #[serde(rename = "ingredientRef")]
    pub ingredient_ref: String,

    /// Quantity per single serving, in `unit`
    pub quantity: f64,

    pub unit: Unit,
}

/// Cocktail recipe. `base.description` holds the cocktail name; the recipe
/// lines are embedded as a JSON tabular part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cocktail {
    #[serde(flatten)]
    pub base: BaseAggregate<CocktailId>,

    pub style: CocktailStyle,

    #[serde(default)]
    pub glass: String,

    #[serde(default)]
    pub garnish: String,

    /// JSON array of recipe lines
    #[serde(rename = "linesJson")]
    pub lines_json: Option<String>,
}

impl Cocktail {
    pub fn new_for_insert(
        code: String,
        description: String,
        style: CocktailStyle,
        glass: String,
        garnish: String,
        lines: Vec<RecipeLine>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(CocktailId::new_v4(), code, description);
        base.comment = comment;

        let lines_json = if lines.is_empty() {
            None
        } else {
            serde_json::to_string(&lines).ok()
        };

        Self {
            base,
            style,
            glass,
            garnish,
            lines_json,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Deserialize the recipe lines
    pub fn parse_lines(&self) -> Vec<RecipeLine> {
        self.lines_json
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    pub fn set_lines(&mut self, lines: &[RecipeLine]) {
        self.lines_json = if lines.is_empty() {
            None
        } else {
            serde_json::to_string(lines).ok()
        };
    }

    pub fn update(&mut self, dto: &CocktailDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        if let Some(style) = dto.style {
            self.style = style;
        }
        self.glass = dto.glass.clone().unwrap_or_default();
        self.garnish = dto.garnish.clone().unwrap_or_default();
        if let Some(lines) = &dto.lines {
            self.set_lines(lines);
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Cocktail name cannot be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code cannot be empty".into());
        }
        let lines = self.parse_lines();
        if lines.is_empty() {
            return Err("Recipe must have at least one line".into());
        }
        for line in &lines {
            if line.ingredient_ref.trim().is_empty() {
                return Err("Recipe line is missing the ingredient".into());
            }
            if line.quantity <= 0.0 {
                return Err(format!(
                    "Recipe quantity must be positive: {}",
                    line.quantity
                ));
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Cocktail {
    type Id = CocktailId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "cocktail"
    }

    fn element_name() -> &'static str {
        "Cocktail"
    }

    fn list_name() -> &'static str {
        "Cocktails"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CocktailDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub style: Option<CocktailStyle>,
    pub glass: Option<String>,
    pub garnish: Option<String>,
    pub lines: Option<Vec<RecipeLine>>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daiquiri() -> Cocktail {
        Cocktail::new_for_insert(
            "CKT-001".into(),
            "Daiquiri".into(),
            CocktailStyle::Shaken,
            "coupe".into(),
            "lime wheel".into(),
            vec![
                RecipeLine {
                    ingredient_ref: Uuid::new_v4().to_string(),
                    quantity: 60.0,
                    unit: Unit::Ml,
                },
                RecipeLine {
                    ingredient_ref: Uuid::new_v4().to_string(),
                    quantity: 25.0,
                    unit: Unit::Ml,
                },
                RecipeLine {
                    ingredient_ref: Uuid::new_v4().to_string(),
                    quantity: 20.0,
                    unit: Unit::Ml,
                },
            ],
            None,
        )
    }

    #[test]
    fn recipe_lines_round_trip() {
        let cocktail = daiquiri();
        assert_eq!(cocktail.parse_lines().len(), 3);
        assert!(cocktail.validate().is_ok());
    }

    #[test]
    fn empty_recipe_rejected() {
        let mut cocktail = daiquiri();
        cocktail.lines_json = None;
        assert!(cocktail.validate().is_err());
    }

    #[test]
    fn zero_quantity_rejected() {
        let mut cocktail = daiquiri();
        let mut lines = cocktail.parse_lines();
        lines[0].quantity = 0.0;
        cocktail.set_lines(&lines);
        assert!(cocktail.validate().is_err());
    }
}
