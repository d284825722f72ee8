pub mod cart_viewmodel;
pub mod catalog_fetcher;
pub mod header_viewmodel;
pub mod restaurant_card;
pub mod restaurant_list_viewmodel;
pub mod restaurant_menu_viewmodel;
pub mod saved_text_viewmodel;

pub use cart_viewmodel::CartViewModel;
pub use catalog_fetcher::{CatalogFetcher, MenuRequest, RefetchPolicy};
pub use header_viewmodel::HeaderViewModel;
pub use restaurant_card::{
    with_veg_label, CardRenderer, CardView, RestaurantCard, RestaurantCardProps, WithVegLabel,
};
pub use restaurant_list_viewmodel::RestaurantListViewModel;
pub use restaurant_menu_viewmodel::{CategoryHeader, RestaurantMenuViewModel};
pub use saved_text_viewmodel::SavedTextViewModel;
