pub mod menu;
pub mod restaurant;

pub use menu::{CartItem, MenuCategory, MenuItem, RestaurantHeader, RestaurantMenu};
pub use restaurant::{RestaurantSummary, Sla};
