pub mod error;
pub mod request;
pub mod response;

pub use error::ShoppingListError;
pub use request::{SelectionInput, ShoppingListRequest};
pub use response::{IceEstimate, ShoppingListResponse, ShoppingListRow};

use crate::usecases::common::UseCaseMetadata;

pub struct ShoppingList;

impl UseCaseMetadata for ShoppingList {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "shopping_list"
    }

    fn display_name() -> &'static str {
        "Shopping list calculator"
    }

    fn description() -> &'static str {
        "Scales cocktail recipes by guest count and converts recipe units into purchase packages"
    }
}
