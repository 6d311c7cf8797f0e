/// UseCase identification and documentation metadata
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "convert_quote")
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name like "u501_convert_quote"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
