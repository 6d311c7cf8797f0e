pub mod error;
pub mod request;
pub mod response;

pub use error::ConvertQuoteError;
pub use request::ConvertQuoteRequest;
pub use response::{ConvertQuoteResponse, ConvertStatus};

use crate::usecases::common::UseCaseMetadata;

pub struct ConvertQuote;

impl UseCaseMetadata for ConvertQuote {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "convert_quote"
    }

    fn display_name() -> &'static str {
        "Convert quote to event"
    }

    fn description() -> &'static str {
        "Turns an accepted quote into a scheduled event, carrying over client, date, venue and price"
    }
}
