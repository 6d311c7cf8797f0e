pub mod dto;

pub use dto::{CategoryAmount, FinanceSummaryRequest, FinanceSummaryResponse};
