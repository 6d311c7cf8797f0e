pub mod a001_client;
pub mod a002_quote;
pub mod a003_event;
pub mod a004_payment;
pub mod a005_expense;
pub mod a006_ingredient;
pub mod a007_cocktail;
pub mod a008_task;
pub mod a009_document;
pub mod d400_finance_summary;
pub mod usecases;
