pub mod mode;
pub mod navigation;
pub mod selection;
pub mod ui;

pub use mode::AppMode;
pub use navigation::{Level, NavigationState, Navigator};
pub use selection::SelectionState;
pub use ui::UIState;
