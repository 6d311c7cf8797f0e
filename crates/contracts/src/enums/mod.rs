//! Shared enums used across aggregates and usecases

pub mod cocktail_style;
pub mod document_kind;
pub mod event_status;
pub mod expense_category;
pub mod ingredient_category;
pub mod payment_method;
pub mod quote_status;
pub mod unit;

pub use cocktail_style::CocktailStyle;
pub use document_kind::{DocumentKind, DocumentStatus};
pub use event_status::EventStatus;
pub use expense_category::ExpenseCategory;
pub use ingredient_category::IngredientCategory;
pub use payment_method::PaymentMethod;
pub use quote_status::QuoteStatus;
pub use unit::{Unit, UnitDimension};
