#[derive(Debug, Default, PartialEq, Clone)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
    /// Blocking notice; input is ignored until it is dismissed.
    Notice(String),
}
