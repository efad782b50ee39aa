use common::{format_population, popup_html, HeatPoint, RiskTier};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::settings::AppSettings;

// Leaflet is loaded as the global `L` by index.html.
#[wasm_bindgen]
extern "C" {
    type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn new_map(container: &HtmlElement) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    fn remove(this: &Map) -> Map;
}

#[wasm_bindgen]
extern "C" {
    type TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn new_tile_layer(url: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &Map) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    type LayerGroup;

    #[wasm_bindgen(catch, js_namespace = L, js_name = layerGroup)]
    fn new_layer_group() -> Result<LayerGroup, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &LayerGroup, map: &Map) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup) -> LayerGroup;
}

#[wasm_bindgen]
extern "C" {
    type Marker;
    type DivIcon;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn new_marker(lat_lng: &JsValue, options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, group: &LayerGroup) -> Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = divIcon)]
    fn new_div_icon(options: &JsValue) -> Result<DivIcon, JsValue>;
}

#[derive(Serialize)]
struct TileLayerOptions<'a> {
    attribution: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DivIconOptions {
    class_name: &'static str,
    html: String,
    icon_size: [u32; 2],
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn lat_lng(latitude: f64, longitude: f64) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(latitude), &JsValue::from_f64(longitude)).into()
}

fn icon_options(tier: RiskTier) -> DivIconOptions {
    DivIconOptions {
        class_name: tier.marker_class(),
        html: format!(
            "<div style=\"background:{};width:12px;height:12px;border-radius:50%;border:2px solid white;\"></div>",
            tier.color()
        ),
        icon_size: [14, 14],
    }
}

fn marker_icon(tier: RiskTier) -> Result<DivIcon, JsValue> {
    new_div_icon(&to_js(&icon_options(tier))?)
}

/// Locale-aware population text, e.g. `2.000` for a German browser.
fn localized_population(population: u64) -> String {
    let Some(window) = web_sys::window() else {
        return format_population(population);
    };
    let locale = window
        .navigator()
        .language()
        .unwrap_or_else(|| "en-US".to_string());
    js_sys::Number::from(population as f64)
        .to_locale_string(&locale)
        .into()
}

/// A Leaflet map with one tile layer and one layer of heat markers.
pub struct HeatLeafletMap {
    map: Map,
    markers: LayerGroup,
}

impl HeatLeafletMap {
    pub fn mount(container: &HtmlElement, settings: &AppSettings) -> Result<Self, JsValue> {
        let map = new_map(container)?;
        let (lat, lon) = settings.map_center;
        map.set_view(&lat_lng(lat, lon), f64::from(settings.map_zoom));

        let tile_options = TileLayerOptions {
            attribution: &settings.tile_attribution,
        };
        new_tile_layer(&settings.tile_url, &to_js(&tile_options)?)?.add_to(&map);

        let markers = new_layer_group()?;
        markers.add_to(&map);

        Ok(Self { map, markers })
    }

    /// Replaces every marker with one per point.
    pub fn show_points(&self, points: &[HeatPoint]) -> Result<(), JsValue> {
        self.markers.clear_layers();

        for point in points {
            let tier = RiskTier::for_point(point);
            let icon = marker_icon(tier)?;
            let options = js_sys::Object::new();
            js_sys::Reflect::set(&options, &JsValue::from_str("icon"), &icon)?;

            let popup = popup_html(point, &localized_population(point.population));
            new_marker(&lat_lng(point.latitude, point.longitude), &options)?
                .bind_popup(&popup)
                .add_to(&self.markers);
        }

        Ok(())
    }

    pub fn remove(&self) {
        self.map.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_options_follow_tier() {
        let high = icon_options(RiskTier::High);
        assert_eq!(high.class_name, "marker-red");
        assert!(high.html.contains("background:red"));
        assert_eq!(high.icon_size, [14, 14]);

        let mid = icon_options(RiskTier::Mid);
        assert_eq!(mid.class_name, "marker-orange");
        assert!(mid.html.contains("background:orange"));

        let low = icon_options(RiskTier::Low);
        assert_eq!(low.class_name, "marker-green");
        assert!(low.html.contains("border:2px solid white"));
    }
}
