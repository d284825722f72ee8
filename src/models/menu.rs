// ============================================================================
// MENU - Representación tipada del menú de un restaurante
// ============================================================================
// Se construye una sola vez en services::catalog_decoder. Cabecera y
// categorías quedan tipadas; cada item conserva su `info` intacto.
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::json::{lenient_string, lenient_u64};

/// Línea del catálogo. Guarda el `info` del payload tal cual llegó y se
/// agrega al carrito sin transformar; los campos tipados se leen encima.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItem {
    raw: Map<String, Value>,
}

/// Un item del carrito es el item del catálogo sin transformar
pub type CartItem = MenuItem;

impl MenuItem {
    pub fn from_raw(raw: Map<String, Value>) -> Self {
        Self { raw }
    }

    /// Un valor que no es objeto produce un item vacío
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(raw) => Self { raw },
            _ => Self::default(),
        }
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// `id` como string (el proveedor lo manda como número o string)
    pub fn id(&self) -> String {
        self.string("id").unwrap_or_default()
    }

    pub fn name(&self) -> String {
        self.string("name").unwrap_or_default()
    }

    /// Precio en paise
    pub fn price(&self) -> Option<u64> {
        self.get("price").and_then(lenient_u64)
    }

    pub fn default_price(&self) -> Option<u64> {
        self.get("defaultPrice").and_then(lenient_u64)
    }

    pub fn description(&self) -> Option<String> {
        self.string("description")
    }

    pub fn image_id(&self) -> Option<String> {
        self.string("imageId")
    }

    /// `price`, o `defaultPrice` si no viene
    pub fn effective_price(&self) -> Option<u64> {
        self.price().or_else(|| self.default_price())
    }

    /// Precio en rupias con el formato de la vista (`₹249`, `₹249.5`)
    pub fn price_label(&self) -> String {
        match self.effective_price() {
            Some(paise) => format!("₹{}", paise as f64 / 100.0),
            None => "₹".to_string(),
        }
    }

    fn string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(lenient_string)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuCategory {
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    /// Cabecera del acordeón: `Recommended(15)`
    pub fn header_label(&self) -> String {
        format!("{}({})", self.title, self.items.len())
    }
}

/// Datos de cabecera del restaurante
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantHeader {
    pub name: String,
    pub cuisines: Vec<String>,
    pub cost_for_two_message: String,
    pub avg_rating_string: String,
    pub total_ratings_string: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RestaurantMenu {
    pub header: RestaurantHeader,
    pub categories: Vec<MenuCategory>,
}

impl RestaurantMenu {
    pub fn category(&self, index: usize) -> Option<&MenuCategory> {
        self.categories.get(index)
    }

    pub fn item(&self, category: usize, item: usize) -> Option<&MenuItem> {
        self.category(category)?.items.get(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn price_falls_back_to_default_price() {
        let item = MenuItem::from_value(json!({ "id": "1", "defaultPrice": 24950 }));
        assert_eq!(item.price(), None);
        assert_eq!(item.effective_price(), Some(24950));
        assert_eq!(item.price_label(), "₹249.5");
    }

    #[test]
    fn category_header_includes_item_count() {
        let category = MenuCategory {
            title: "Recommended".to_string(),
            items: vec![MenuItem::default(); 3],
        };
        assert_eq!(category.header_label(), "Recommended(3)");
    }

    #[test]
    fn accessors_tolerate_numbers_and_strings() {
        let item = MenuItem::from_value(json!({ "id": 101, "name": "Paneer Tikka", "price": "24900" }));
        assert_eq!(item.id(), "101");
        assert_eq!(item.name(), "Paneer Tikka");
        assert_eq!(item.price(), Some(24900));
        assert_eq!(item.description(), None);
        assert_eq!(item.image_id(), None);
    }

    #[test]
    fn serializes_exactly_the_payload_it_was_built_from() {
        let info = json!({ "id": 101, "name": "Paneer Tikka", "price": "24900", "isVeg": 1 });
        let item = MenuItem::from_value(info.clone());

        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(out, info);
        let back: MenuItem = serde_json::from_value(out).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn non_object_payload_gives_empty_item() {
        let item = MenuItem::from_value(json!("broken"));
        assert!(item.raw().is_empty());
        assert_eq!(item.id(), "");
    }
}
