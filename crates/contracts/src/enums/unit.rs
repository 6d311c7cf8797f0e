use serde::{Deserialize, Serialize};

/// Physical dimension of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitDimension {
    /// Base unit: millilitre
    Volume,
    /// Base unit: gram
    Mass,
    /// Base unit: piece
    Count,
}

impl UnitDimension {
    pub fn base_unit(&self) -> Unit {
        match self {
            UnitDimension::Volume => Unit::Ml,
            UnitDimension::Mass => Unit::G,
            UnitDimension::Count => Unit::Piece,
        }
    }
}

/// Measurement units used in recipes and package descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Ml,
    Cl,
    L,
    Oz,
    Dash,
    G,
    Kg,
    Piece,
}

impl Unit {
    /// Stable code used for storage and API payloads
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Ml => "ml",
            Unit::Cl => "cl",
            Unit::L => "l",
            Unit::Oz => "oz",
            Unit::Dash => "dash",
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Piece => "pc",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ml" => Some(Unit::Ml),
            "cl" => Some(Unit::Cl),
            "l" => Some(Unit::L),
            "oz" => Some(Unit::Oz),
            "dash" => Some(Unit::Dash),
            "g" => Some(Unit::G),
            "kg" => Some(Unit::Kg),
            "pc" => Some(Unit::Piece),
            _ => None,
        }
    }

    pub fn dimension(&self) -> UnitDimension {
        match self {
            Unit::Ml | Unit::Cl | Unit::L | Unit::Oz | Unit::Dash => UnitDimension::Volume,
            Unit::G | Unit::Kg => UnitDimension::Mass,
            Unit::Piece => UnitDimension::Count,
        }
    }

    /// Factor to the dimension's base unit (ml, g or pc)
    pub fn base_factor(&self) -> f64 {
        match self {
            Unit::Ml => 1.0,
            Unit::Cl => 10.0,
            Unit::L => 1000.0,
            // US fluid ounce, the jigger unit in the recipe catalog
            Unit::Oz => 29.5735,
            Unit::Dash => 0.92,
            Unit::G => 1.0,
            Unit::Kg => 1000.0,
            Unit::Piece => 1.0,
        }
    }

    /// Convert a quantity in this unit to the dimension's base unit
    pub fn to_base(&self, quantity: f64) -> f64 {
        quantity * self.base_factor()
    }

    pub fn all() -> Vec<Unit> {
        vec![
            Unit::Ml,
            Unit::Cl,
            Unit::L,
            Unit::Oz,
            Unit::Dash,
            Unit::G,
            Unit::Kg,
            Unit::Piece,
        ]
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for unit in Unit::all() {
            assert_eq!(Unit::from_code(unit.code()), Some(unit));
        }
    }

    #[test]
    fn volume_conversions_to_ml() {
        assert_eq!(Unit::L.to_base(0.7), 700.0);
        assert_eq!(Unit::Cl.to_base(5.0), 50.0);
        assert!((Unit::Oz.to_base(2.0) - 59.147).abs() < 0.001);
    }

    #[test]
    fn mass_conversions_to_g() {
        assert_eq!(Unit::Kg.to_base(2.5), 2500.0);
        assert_eq!(Unit::G.to_base(30.0), 30.0);
    }

    #[test]
    fn dimensions() {
        assert_eq!(Unit::Dash.dimension(), UnitDimension::Volume);
        assert_eq!(Unit::Kg.dimension(), UnitDimension::Mass);
        assert_eq!(Unit::Piece.dimension(), UnitDimension::Count);
        assert_eq!(UnitDimension::Volume.base_unit(), Unit::Ml);
    }
}
