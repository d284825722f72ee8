use serde::{Deserialize, Serialize};

/// Restaurante del listado principal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub id: String,
    pub name: String,
    pub cloudinary_image_id: String,
    pub cuisines: Vec<String>,
    pub avg_rating: Option<f64>,
    pub area_name: String,
    pub cost_for_two: String,
    pub veg: bool,
    pub sla: Sla,
}

/// Tiempo y distancia de entrega
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sla {
    pub last_mile_travel: Option<f64>,
    pub delivery_time: Option<u32>,
}

impl RestaurantSummary {
    pub fn cuisines_label(&self) -> String {
        self.cuisines.join(", ")
    }

    /// Ruta de detalle
    pub fn menu_path(&self) -> String {
        format!("/restaurants/{}", self.id)
    }
}
