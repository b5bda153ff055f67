//! UI components

pub mod cards;
pub mod chip_input;
pub mod dashboard;
pub mod dialog;
pub mod history;
pub mod results;
pub mod sidebar_component;
pub mod status_bar;

pub use chip_input::ChipInput;
pub use dashboard::DashboardComponent;
pub use dialog::DialogComponent;
pub use history::HistoryComponent;
pub use results::ResultsComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::StatusBar;
