// ============================================================================
// CATALOG DECODER - Decodificación defensiva de los payloads del catálogo
// ============================================================================
// La forma del JSON la controla el proveedor. Todo acceso es tolerante:
// un segmento ausente produce datos vacíos, nunca un error.
// ============================================================================

use serde_json::Value;

use crate::models::{MenuCategory, MenuItem, RestaurantHeader, RestaurantMenu, RestaurantSummary, Sla};
use crate::utils::constants::ITEM_CATEGORY_TYPE;
use crate::utils::json::{lenient_f64, lenient_string, lenient_u64, string_list};

const RESTAURANTS_PATH: &str = "/cards/1/card/card/gridElements/infoWithStyle/restaurants";
const HEADER_PATH: &str = "/cards/2/card/card/info";
const CATEGORY_CARDS_PATH: &str = "/cards/4/groupedCard/cardGroupMap/REGULAR/cards";

/// Nodo `data` de la respuesta (o la raíz si ya viene desenvuelta)
fn data_root(json: &Value) -> &Value {
    json.get("data").unwrap_or(json)
}

/// Listado de restaurantes del endpoint principal
pub fn decode_restaurant_list(json: &Value) -> Vec<RestaurantSummary> {
    let Some(restaurants) = data_root(json)
        .pointer(RESTAURANTS_PATH)
        .and_then(Value::as_array)
    else {
        log::warn!("⚠️ [DECODER] Payload sin listado de restaurantes");
        return Vec::new();
    };

    restaurants
        .iter()
        .filter_map(|entry| entry.get("info").filter(|info| info.is_object()))
        .map(decode_restaurant)
        .collect()
}

fn decode_restaurant(info: &Value) -> RestaurantSummary {
    RestaurantSummary {
        id: string_field(info, "id"),
        name: string_field(info, "name"),
        cloudinary_image_id: string_field(info, "cloudinaryImageId"),
        cuisines: string_list(info.get("cuisines")),
        avg_rating: f64_field(info, "avgRating"),
        area_name: string_field(info, "areaName"),
        cost_for_two: string_field(info, "costForTwo"),
        veg: info.get("veg").and_then(Value::as_bool).unwrap_or(false),
        sla: Sla {
            last_mile_travel: info.get("sla").and_then(|sla| f64_field(sla, "lastMileTravel")),
            delivery_time: info
                .get("sla")
                .and_then(|sla| u64_field(sla, "deliveryTime"))
                .and_then(|t| u32::try_from(t).ok()),
        },
    }
}

/// Menú completo: cabecera + categorías del acordeón
pub fn decode_menu(json: &Value) -> RestaurantMenu {
    let data = data_root(json);

    let header = data
        .pointer(HEADER_PATH)
        .map(decode_header)
        .unwrap_or_default();

    let categories = data
        .pointer(CATEGORY_CARDS_PATH)
        .and_then(Value::as_array)
        .map(|cards| {
            cards
                .iter()
                .filter_map(|card| card.pointer("/card/card"))
                .filter(|card| card.get("@type").and_then(Value::as_str) == Some(ITEM_CATEGORY_TYPE))
                .map(decode_category)
                .collect()
        })
        .unwrap_or_default();

    RestaurantMenu { header, categories }
}

fn decode_header(info: &Value) -> RestaurantHeader {
    RestaurantHeader {
        name: string_field(info, "name"),
        cuisines: string_list(info.get("cuisines")),
        cost_for_two_message: string_field(info, "costForTwoMessage"),
        avg_rating_string: string_field(info, "avgRatingString"),
        total_ratings_string: string_field(info, "totalRatingsString"),
    }
}

fn decode_category(card: &Value) -> MenuCategory {
    let items = card
        .get("itemCards")
        .and_then(Value::as_array)
        .map(|cards| {
            cards
                .iter()
                .filter_map(|item| item.pointer("/card/info"))
                .filter_map(Value::as_object)
                .map(|info| MenuItem::from_raw(info.clone()))
                .collect()
        })
        .unwrap_or_default();

    MenuCategory {
        title: string_field(card, "title"),
        items,
    }
}

// Helpers de acceso tolerante

fn string_field(value: &Value, key: &str) -> String {
    value.get(key).and_then(lenient_string).unwrap_or_default()
}

fn f64_field(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(lenient_f64)
}

fn u64_field(value: &Value, key: &str) -> Option<u64> {
    value.get(key).and_then(lenient_u64)
}
