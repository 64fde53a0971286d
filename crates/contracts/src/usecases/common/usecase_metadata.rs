/// UseCase metadata used for UI labels
pub trait UseCaseMetadata {
    /// Name shown in the UI
    fn display_name() -> &'static str;

    /// Short description, also used as a section subtitle
    fn description() -> &'static str {
        ""
    }
}
