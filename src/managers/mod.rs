// FoxBr state managers
// Managers handle stateful operations: tabs, the navigation toolbar, and the window chrome.

pub mod navigation_manager;
pub mod tab_manager;
pub mod window_manager;
