/// Endpoints por defecto (sobrescribibles via .env, ver `config.rs`)
pub const DEFAULT_LIST_API_URL: &str = "https://www.swiggy.com/dapi/restaurants/list/v5";
pub const DEFAULT_MENU_API_URL: &str = "https://www.swiggy.com/dapi/menu/pl?page-type=REGULAR_MENU&complete-menu=true&lat=19.0759837&lng=72.8776559&restaurantId=";
pub const DEFAULT_CDN_URL: &str =
    "https://media-assets.swiggy.com/swiggy/image/upload/fl_lossy,f_auto,q_auto,w_660/";

pub const DEFAULT_LAT: f64 = 19.0759837;
pub const DEFAULT_LNG: f64 = 72.8776559;

/// Nombre asignado por el lookup de identidad por defecto
pub const DEFAULT_USER_NAME: &str = "Amarnath Mishra";

/// Discriminador `@type` de los grupos de categorías del menú
pub const ITEM_CATEGORY_TYPE: &str =
    "type.googleapis.com/swiggy.presentation.food.v2.ItemCategory";

// Textos mostrados por las vistas
pub const OFFLINE_MESSAGE: &str =
    "Looks like you are offline! Please check your internet connection.";
pub const NO_MATCH_MESSAGE: &str = "No restaurant matches your filter";
pub const EMPTY_CART_MESSAGE: &str = "Cart is empty.Add items to the cart";
pub const VEG_LABEL: &str = "PureVeg💚";
pub const ONLINE_INDICATOR: &str = "🟢";
pub const OFFLINE_INDICATOR: &str = "🔴";

/// Clave del demo de localStorage
pub const SAVED_TEXT_KEY: &str = "myKey";
