//! UI Components

pub mod connect_widget;
pub mod navbar;
pub mod network_selector;

pub use connect_widget::ConnectWidget;
pub use navbar::Navbar;
pub use network_selector::NetworkSelector;
