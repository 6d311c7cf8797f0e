use super::calculator;
use crate::domain::{a003_event, a006_ingredient, a007_cocktail};
use anyhow::Result;
use contracts::usecases::u502_shopping_list::{
    error::ShoppingListError,
    request::{SelectionInput, ShoppingListRequest},
    response::ShoppingListResponse,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Resolve the request, load the catalogs and run the pure calculator.
///
/// When `event_id` is set, guest count and cocktail selections come from the
/// stored event; otherwise they must be supplied inline.
pub async fn execute(request: ShoppingListRequest) -> Result<ShoppingListResponse> {
    let drinks_per_guest = request.drinks_per_guest_or_default();
    let safety_margin = request.safety_margin_or_default();

    let (guest_count, selections) = match &request.event_id {
        Some(event_id) => {
            let id = Uuid::parse_str(event_id)
                .map_err(|_| ShoppingListError::InvalidEventId(event_id.clone()))?;
            let event = a003_event::repository::get_by_id(id)
                .await?
                .ok_or_else(|| ShoppingListError::EventNotFound(event_id.clone()))?;
            let selections: Vec<SelectionInput> = event
                .parse_selections()
                .into_iter()
                .map(|s| SelectionInput {
                    cocktail_id: s.cocktail_ref,
                    percent: s.distribution_percent,
                })
                .collect();
            (event.guest_count, selections)
        }
        None => (
            request
                .guest_count
                .ok_or(ShoppingListError::MissingGuestCount)?,
            request.selections.clone().unwrap_or_default(),
        ),
    };

    let cocktails: HashMap<String, _> = a007_cocktail::repository::list_all()
        .await?
        .into_iter()
        .map(|c| (c.to_string_id(), c))
        .collect();
    let ingredients: HashMap<String, _> = a006_ingredient::repository::list_all()
        .await?
        .into_iter()
        .map(|i| (i.to_string_id(), i))
        .collect();

    let response = calculator::calculate(
        guest_count,
        drinks_per_guest,
        safety_margin,
        &selections,
        &cocktails,
        &ingredients,
    )?;

    tracing::info!(
        "Shopping list computed: {} guests, {} rows, total cost {:.2}",
        response.guest_count,
        response.rows.len(),
        response.total_cost
    );

    Ok(response)
}

/// Render a computed shopping list as CSV for download
pub fn render_csv(response: &ShoppingListResponse) -> Result<Vec<u8>> {
    use crate::shared::format::{format_money, format_quantity};

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "category",
        "ingredient",
        "required_quantity",
        "base_unit",
        "packages",
        "package",
        "estimated_cost",
    ])?;
    for row in &response.rows {
        writer.write_record([
            row.category.as_str(),
            row.ingredient_name.as_str(),
            &format_quantity(row.required_quantity),
            row.base_unit.as_str(),
            &row.packages.to_string(),
            row.package_label.as_str(),
            &format_money(row.estimated_cost),
        ])?;
    }
    writer.write_record([
        "ice",
        "Ice (2 kg bags)",
        &format_quantity(response.ice.total_grams),
        "g",
        &response.ice.bags.to_string(),
        "2 kg",
        &format_money(response.ice.estimated_cost),
    ])?;
    Ok(writer.into_inner()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u502_shopping_list::response::{IceEstimate, ShoppingListRow};

    #[test]
    fn csv_has_header_rows_and_ice() {
        let response = ShoppingListResponse {
            guest_count: 40,
            total_servings: 110.0,
            safety_margin_percent: 10.0,
            rows: vec![ShoppingListRow {
                ingredient_id: "x".into(),
                ingredient_name: "Gin".into(),
                category: "spirit".into(),
                required_quantity: 4620.0,
                base_unit: "ml".into(),
                packages: 7,
                package_label: "0.7 l".into(),
                estimated_cost: 154.0,
            }],
            ice: IceEstimate {
                total_grams: 11880.0,
                bags: 6,
                estimated_cost: 60.0,
            },
            total_cost: 214.0,
        };
        let bytes = render_csv(&response).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("category,ingredient"));
        assert!(lines[1].contains("Gin"));
        assert!(lines[2].contains("Ice (2 kg bags)"));
    }
}
