pub mod navbar;
pub mod theme_controller;
pub mod toast;

pub use navbar::{Navbar, NavbarProps};
pub use theme_controller::{ThemeController, ThemeControllerProps};
pub use toast::{Toast, ToastItem, ToastProps};
