use contracts::domain::a006_ingredient::aggregate::Ingredient;
use contracts::domain::a007_cocktail::aggregate::Cocktail;
use contracts::usecases::u502_shopping_list::{
    error::ShoppingListError,
    request::SelectionInput,
    response::{IceEstimate, ShoppingListResponse, ShoppingListRow},
};
use std::collections::HashMap;

/// Allowed deviation of the distribution sum from 100 percent
const DISTRIBUTION_TOLERANCE: f64 = 0.01;

/// Ice is bought in 2 kg bags
const ICE_BAG_GRAMS: f64 = 2000.0;

/// Flat per-bag price used for the ice estimate
const ICE_BAG_PRICE: f64 = 10.0;

/// Servings to plan for, including the safety margin
pub fn total_servings(guest_count: i32, drinks_per_guest: f64, safety_margin_percent: f64) -> f64 {
    guest_count as f64 * drinks_per_guest * (1.0 + safety_margin_percent / 100.0)
}

/// Whole packages to buy and their cost for one ingredient
pub fn calculate_purchase_requirement(
    required_base: f64,
    package_size_base: f64,
    package_price: f64,
) -> (i64, f64) {
    let packages = (required_base / package_size_base).ceil() as i64;
    (packages, packages as f64 * package_price)
}

/// Pure shopping-list computation over pre-loaded catalogs.
///
/// `cocktails` and `ingredients` are keyed by UUID string. Quantities are
/// accumulated in each ingredient's base unit (ml, g or pc), so recipe lines
/// in different units of the same dimension add up correctly.
pub fn calculate(
    guest_count: i32,
    drinks_per_guest: f64,
    safety_margin_percent: f64,
    selections: &[SelectionInput],
    cocktails: &HashMap<String, Cocktail>,
    ingredients: &HashMap<String, Ingredient>,
) -> Result<ShoppingListResponse, ShoppingListError> {
    if guest_count < 1 {
        return Err(ShoppingListError::InvalidGuestCount(guest_count));
    }
    if selections.is_empty() {
        return Err(ShoppingListError::EmptySelection);
    }
    let sum: f64 = selections.iter().map(|s| s.percent).sum();
    if (sum - 100.0).abs() > DISTRIBUTION_TOLERANCE {
        return Err(ShoppingListError::InvalidDistribution { sum });
    }

    let servings = total_servings(guest_count, drinks_per_guest, safety_margin_percent);

    // ingredient id -> required quantity in base units
    let mut required: HashMap<String, f64> = HashMap::new();
    let mut ice_grams = 0.0;

    for selection in selections {
        let cocktail = cocktails
            .get(&selection.cocktail_id)
            .ok_or_else(|| ShoppingListError::UnknownCocktail(selection.cocktail_id.clone()))?;

        let cocktail_servings = servings * selection.percent / 100.0;
        ice_grams += cocktail_servings * cocktail.style.ice_grams_per_serving();

        for line in cocktail.parse_lines() {
            let ingredient = ingredients
                .get(&line.ingredient_ref)
                .ok_or_else(|| ShoppingListError::UnknownIngredient(line.ingredient_ref.clone()))?;

            if line.unit.dimension() != ingredient.package_unit.dimension() {
                return Err(ShoppingListError::DimensionMismatch {
                    ingredient: ingredient.base.description.clone(),
                    recipe_unit: line.unit.code().to_string(),
                    package_unit: ingredient.package_unit.code().to_string(),
                });
            }

            *required.entry(line.ingredient_ref.clone()).or_default() +=
                line.quantity * line.unit.base_factor() * cocktail_servings;
        }
    }

    let mut rows: Vec<ShoppingListRow> = Vec::with_capacity(required.len());
    for (ingredient_id, required_quantity) in required {
        // Lookup cannot fail: the id was resolved above
        let ingredient = &ingredients[&ingredient_id];
        let (packages, estimated_cost) = calculate_purchase_requirement(
            required_quantity,
            ingredient.package_size_base(),
            ingredient.package_price,
        );
        rows.push(ShoppingListRow {
            ingredient_id,
            ingredient_name: ingredient.base.description.clone(),
            category: ingredient.category.code().to_string(),
            required_quantity,
            base_unit: ingredient.package_unit.dimension().base_unit().code().to_string(),
            packages,
            package_label: format!(
                "{} {}",
                ingredient.package_size,
                ingredient.package_unit.code()
            ),
            estimated_cost,
        });
    }
    rows.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.ingredient_name.cmp(&b.ingredient_name))
    });

    let bags = (ice_grams / ICE_BAG_GRAMS).ceil() as i64;
    let ice = IceEstimate {
        total_grams: ice_grams,
        bags,
        estimated_cost: bags as f64 * ICE_BAG_PRICE,
    };

    let total_cost = rows.iter().map(|r| r.estimated_cost).sum::<f64>() + ice.estimated_cost;

    Ok(ShoppingListResponse {
        guest_count,
        total_servings: servings,
        safety_margin_percent,
        rows,
        ice,
        total_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_cocktail::aggregate::RecipeLine;
    use contracts::enums::{CocktailStyle, IngredientCategory, Unit};

    fn ingredient(name: &str, size: f64, unit: Unit, price: f64) -> Ingredient {
        Ingredient::new_for_insert(
            format!("ING-{}", name),
            name.into(),
            IngredientCategory::Spirit,
            size,
            unit,
            price,
            None,
        )
    }

    fn cocktail(name: &str, style: CocktailStyle, lines: Vec<RecipeLine>) -> Cocktail {
        Cocktail::new_for_insert(
            format!("CKT-{}", name),
            name.into(),
            style,
            "coupe".into(),
            "".into(),
            lines,
            None,
        )
    }

    fn catalogs() -> (HashMap<String, Cocktail>, HashMap<String, Ingredient>) {
        let gin = ingredient("Gin", 0.7, Unit::L, 22.0);
        let lime = ingredient("Lime juice", 1.0, Unit::L, 4.5);
        let gin_id = gin.to_string_id();
        let lime_id = lime.to_string_id();

        let gimlet = cocktail(
            "Gimlet",
            CocktailStyle::Shaken,
            vec![
                RecipeLine {
                    ingredient_ref: gin_id.clone(),
                    quantity: 60.0,
                    unit: Unit::Ml,
                },
                RecipeLine {
                    ingredient_ref: lime_id.clone(),
                    quantity: 30.0,
                    unit: Unit::Ml,
                },
            ],
        );
        let martini = cocktail(
            "Martini",
            CocktailStyle::Stirred,
            vec![RecipeLine {
                ingredient_ref: gin_id.clone(),
                quantity: 75.0,
                unit: Unit::Ml,
            }],
        );

        let mut cocktails = HashMap::new();
        let mut ingredients = HashMap::new();
        let selection_ids = (gimlet.to_string_id(), martini.to_string_id());
        cocktails.insert(selection_ids.0, gimlet);
        cocktails.insert(selection_ids.1, martini);
        ingredients.insert(gin_id, gin);
        ingredients.insert(lime_id, lime);
        (cocktails, ingredients)
    }

    fn selections(cocktails: &HashMap<String, Cocktail>) -> Vec<SelectionInput> {
        let mut ids: Vec<&String> = cocktails.keys().collect();
        ids.sort();
        vec![
            SelectionInput {
                cocktail_id: ids[0].clone(),
                percent: 60.0,
            },
            SelectionInput {
                cocktail_id: ids[1].clone(),
                percent: 40.0,
            },
        ]
    }

    #[test]
    fn total_servings_applies_margin() {
        let servings = total_servings(40, 2.5, 10.0);
        assert!((servings - 110.0).abs() < 1e-9);
    }

    #[test]
    fn purchase_requirement_rounds_up() {
        let (packages, cost) = calculate_purchase_requirement(1500.0, 700.0, 22.0);
        assert_eq!(packages, 3);
        assert!((cost - 66.0).abs() < 1e-9);
    }

    #[test]
    fn exact_fit_needs_no_extra_package() {
        let (packages, _) = calculate_purchase_requirement(1400.0, 700.0, 22.0);
        assert_eq!(packages, 2);
    }

    #[test]
    fn zero_guests_rejected() {
        let (cocktails, ingredients) = catalogs();
        let sel = selections(&cocktails);
        let result = calculate(0, 2.5, 10.0, &sel, &cocktails, &ingredients);
        assert_eq!(result.unwrap_err(), ShoppingListError::InvalidGuestCount(0));
    }

    #[test]
    fn empty_selection_rejected() {
        let (cocktails, ingredients) = catalogs();
        let result = calculate(40, 2.5, 10.0, &[], &cocktails, &ingredients);
        assert_eq!(result.unwrap_err(), ShoppingListError::EmptySelection);
    }

    #[test]
    fn distribution_must_sum_to_100() {
        let (cocktails, ingredients) = catalogs();
        let mut sel = selections(&cocktails);
        sel[0].percent = 70.0;
        let result = calculate(40, 2.5, 10.0, &sel, &cocktails, &ingredients);
        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::InvalidDistribution { .. }
        ));
    }

    #[test]
    fn distribution_tolerance_accepts_rounding_noise() {
        let (cocktails, ingredients) = catalogs();
        let mut sel = selections(&cocktails);
        sel[0].percent = 60.004;
        sel[1].percent = 40.001;
        assert!(calculate(40, 2.5, 10.0, &sel, &cocktails, &ingredients).is_ok());
    }

    #[test]
    fn unknown_cocktail_rejected() {
        let (cocktails, ingredients) = catalogs();
        let sel = vec![SelectionInput {
            cocktail_id: "no-such-id".into(),
            percent: 100.0,
        }];
        let result = calculate(40, 2.5, 10.0, &sel, &cocktails, &ingredients);
        assert_eq!(
            result.unwrap_err(),
            ShoppingListError::UnknownCocktail("no-such-id".into())
        );
    }

    #[test]
    fn dimension_mismatch_rejected() {
        let sugar = ingredient("Sugar", 1.0, Unit::Kg, 2.0);
        let sugar_id = sugar.to_string_id();
        // Volume line against a mass-packaged ingredient
        let bad = cocktail(
            "Broken",
            CocktailStyle::Built,
            vec![RecipeLine {
                ingredient_ref: sugar_id.clone(),
                quantity: 10.0,
                unit: Unit::Ml,
            }],
        );
        let bad_id = bad.to_string_id();
        let cocktails = HashMap::from([(bad_id.clone(), bad)]);
        let ingredients = HashMap::from([(sugar_id, sugar)]);
        let sel = vec![SelectionInput {
            cocktail_id: bad_id,
            percent: 100.0,
        }];
        let result = calculate(40, 2.5, 10.0, &sel, &cocktails, &ingredients);
        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::DimensionMismatch { .. }
        ));
    }

    #[test]
    fn shared_ingredient_accumulates_across_cocktails() {
        let (cocktails, ingredients) = catalogs();
        let sel = selections(&cocktails);
        let response = calculate(40, 2.5, 10.0, &sel, &cocktails, &ingredients).unwrap();

        let servings = total_servings(40, 2.5, 10.0);
        let mut ids: Vec<&String> = cocktails.keys().collect();
        ids.sort();
        // Gin flows into both cocktails; per-cocktail contributions must add up
        let gimlet_gin = if cocktails[ids[0]].base.description == "Gimlet" {
            60.0 * servings * 0.6
        } else {
            60.0 * servings * 0.4
        };
        let martini_gin = if cocktails[ids[0]].base.description == "Gimlet" {
            75.0 * servings * 0.4
        } else {
            75.0 * servings * 0.6
        };
        let expected_gin = gimlet_gin + martini_gin;

        let gin_row = response
            .rows
            .iter()
            .find(|r| r.ingredient_name == "Gin")
            .unwrap();
        assert!((gin_row.required_quantity - expected_gin).abs() < 1e-6);
        assert_eq!(gin_row.base_unit, "ml");
    }

    #[test]
    fn ice_estimate_follows_styles() {
        let (cocktails, ingredients) = catalogs();
        let sel = selections(&cocktails);
        let response = calculate(40, 2.5, 10.0, &sel, &cocktails, &ingredients).unwrap();

        let servings = total_servings(40, 2.5, 10.0);
        let mut ids: Vec<&String> = cocktails.keys().collect();
        ids.sort();
        let (shaken_share, stirred_share) = if cocktails[ids[0]].base.description == "Gimlet" {
            (0.6, 0.4)
        } else {
            (0.4, 0.6)
        };
        let expected = servings * shaken_share * 120.0 + servings * stirred_share * 90.0;
        assert!((response.ice.total_grams - expected).abs() < 1e-6);
        assert_eq!(
            response.ice.bags,
            (expected / 2000.0).ceil() as i64
        );
    }

    #[test]
    fn total_cost_sums_rows_and_ice() {
        let (cocktails, ingredients) = catalogs();
        let sel = selections(&cocktails);
        let response = calculate(40, 2.5, 10.0, &sel, &cocktails, &ingredients).unwrap();
        let rows_cost: f64 = response.rows.iter().map(|r| r.estimated_cost).sum();
        assert!((response.total_cost - rows_cost - response.ice.estimated_cost).abs() < 1e-9);
    }
}
