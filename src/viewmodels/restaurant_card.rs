// ============================================================================
// RESTAURANT CARD - Card del listado + decorador de etiqueta veg
// ============================================================================

use serde::Serialize;

use crate::config::CONFIG;
use crate::models::RestaurantSummary;
use crate::utils::constants::VEG_LABEL;

/// Entrada de un card
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantCardProps {
    pub restaurant: RestaurantSummary,
    pub logged_in_user: Option<String>,
}

/// Datos listos para pintar
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CardView {
    pub label: Option<String>,
    pub image_url: String,
    pub name: String,
    pub cuisines: String,
    pub rating: String,
    pub distance: String,
    pub user_name: Option<String>,
    pub link: String,
}

/// Unidad que convierte props en un card
pub trait CardRenderer {
    fn render(&self, props: &RestaurantCardProps) -> CardView;
}

/// Card básico
#[derive(Debug, Clone)]
pub struct RestaurantCard {
    cdn_url: String,
}

impl RestaurantCard {
    pub fn new() -> Self {
        Self::with_cdn(&CONFIG.cdn_url)
    }

    pub fn with_cdn(cdn_url: &str) -> Self {
        Self {
            cdn_url: cdn_url.to_string(),
        }
    }
}

impl Default for RestaurantCard {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRenderer for RestaurantCard {
    fn render(&self, props: &RestaurantCardProps) -> CardView {
        let restaurant = &props.restaurant;
        let rating = restaurant
            .avg_rating
            .map(|r| r.to_string())
            .unwrap_or_default();
        let distance = restaurant
            .sla
            .last_mile_travel
            .map(|d| d.to_string())
            .unwrap_or_default();

        CardView {
            label: None,
            image_url: format!("{}{}", self.cdn_url, restaurant.cloudinary_image_id),
            name: restaurant.name.clone(),
            cuisines: restaurant.cuisines_label(),
            rating: format!("⭐ {} Star", rating),
            distance: format!("{} km away", distance),
            user_name: props.logged_in_user.clone(),
            link: restaurant.menu_path(),
        }
    }
}

/// Decorador: agrega la etiqueta veg y pasa las props intactas
#[derive(Debug, Clone)]
pub struct WithVegLabel<R> {
    inner: R,
}

impl<R: CardRenderer> CardRenderer for WithVegLabel<R> {
    fn render(&self, props: &RestaurantCardProps) -> CardView {
        let mut view = self.inner.render(props);
        view.label = Some(VEG_LABEL.to_string());
        view
    }
}

pub fn with_veg_label<R: CardRenderer>(inner: R) -> WithVegLabel<R> {
    WithVegLabel { inner }
}
