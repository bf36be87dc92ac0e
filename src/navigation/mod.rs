//! Navigation
//!
//! Static menu, route table and the shell state around the drawer.

pub mod menu;
pub mod routes;
pub mod shell;
pub mod viewport;

pub use menu::{MenuItem, MENU_ITEMS};
pub use routes::Route;
pub use shell::{NavigationShell, SidenavMode};
pub use viewport::{Viewport, ViewportClass};
