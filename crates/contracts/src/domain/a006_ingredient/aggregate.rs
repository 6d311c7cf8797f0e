use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore};
use crate::enums::{IngredientCategory, Unit, UnitDimension};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientId(pub Uuid);

impl IngredientId {
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

impl AggregateId for IngredientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(IngredientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Purchasable stock item. `base.description` holds the ingredient name;
/// the package descriptor says how it is bought (e.g. 0.7 L bottle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(flatten)]
    pub base: BaseAggregate<IngredientId>,

    pub category: IngredientCategory,

    /// Size of one purchase package, in `package_unit`
    #[serde(rename = "packageSize")]
    pub package_size: f64,

    #[serde(rename = "packageUnit")]
    pub package_unit: Unit,

    /// Price of one purchase package
    #[serde(rename = "packagePrice")]
    pub package_price: f64,
}

impl Ingredient {
    pub fn new_for_insert(
        code: String,
        description: String,
        category: IngredientCategory,
        package_size: f64,
        package_unit: Unit,
        package_price: f64,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(IngredientId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            category,
            package_size,
            package_unit,
            package_price,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Package size expressed in the dimension's base unit (ml, g or pc)
    pub fn package_size_base(&self) -> f64 {
        self.package_unit.to_base(self.package_size)
    }

    pub fn purchase_dimension(&self) -> UnitDimension {
        self.package_unit.dimension()
    }

    pub fn update(&mut self, dto: &IngredientDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        if let Some(category) = dto.category {
            self.category = category;
        }
        self.package_size = dto.package_size;
        if let Some(unit) = dto.package_unit {
            self.package_unit = unit;
        }
        self.package_price = dto.package_price.unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Ingredient name cannot be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code cannot be empty".into());
        }
        if self.package_size <= 0.0 {
            return Err(format!(
                "Package size must be positive: {}",
                self.package_size
            ));
        }
        if self.package_price < 0.0 {
            return Err("Package price cannot be negative".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Ingredient {
    type Id = IngredientId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "ingredient"
    }

    fn element_name() -> &'static str {
        "Ingredient"
    }

    fn list_name() -> &'static str {
        "Ingredients"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IngredientDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub category: Option<IngredientCategory>,
    #[serde(rename = "packageSize")]
    pub package_size: f64,
    #[serde(rename = "packageUnit")]
    pub package_unit: Option<Unit>,
    #[serde(rename = "packagePrice")]
    pub package_price: Option<f64>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_size_converts_to_base() {
        let gin = Ingredient::new_for_insert(
            "ING-001".into(),
            "London dry gin".into(),
            IngredientCategory::Spirit,
            0.7,
            Unit::L,
            95.0,
            None,
        );
        assert_eq!(gin.package_size_base(), 700.0);
        assert_eq!(gin.purchase_dimension(), UnitDimension::Volume);
    }

    #[test]
    fn zero_package_size_rejected() {
        let mut item = Ingredient::new_for_insert(
            "ING-002".into(),
            "Limes".into(),
            IngredientCategory::Produce,
            0.0,
            Unit::Piece,
            0.8,
            None,
        );
        assert!(item.validate().is_err());
        item.package_size = 1.0;
        assert!(item.validate().is_ok());
    }
}
