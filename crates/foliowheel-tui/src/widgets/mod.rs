mod dial;
mod help;
mod panel;
mod status_bar;

pub use dial::DialWidget;
pub use help::HelpWidget;
pub use panel::PanelWidget;
pub use status_bar::StatusBarWidget;
