use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Object, Reflect};
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

// 부산시청. Not derived from the agency address.
pub const DEFAULT_CENTER: MapCenter = MapCenter {
    lat: 35.1795543,
    lng: 129.0756416,
};
pub const DEFAULT_ZOOM: u8 = 16;

#[derive(Properties, PartialEq)]
pub struct NaverMapProps {
    #[prop_or_default]
    pub center: Option<MapCenter>,
}

/// Naver map with one marker. Renders an empty box when the maps script
/// is not on the page.
#[function_component]
pub fn NaverMap(props: &NaverMapProps) -> Html {
    let map_ref = use_node_ref();
    let center = props.center.unwrap_or(DEFAULT_CENTER);

    {
        let map_ref = map_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = map_ref.cast::<HtmlElement>() {
                    match render_map(&element, center, DEFAULT_ZOOM) {
                        Ok(true) => {}
                        Ok(false) => log::debug!("naver maps not loaded, skipping map"),
                        Err(e) => log::warn!("Failed to render naver map: {:?}", e),
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="map-section">
            <div ref={map_ref} class="map-container" style="min-height: 250px;" />
        </div>
    }
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
}

fn constructor(maps: &JsValue, name: &str) -> Result<Function, JsValue> {
    get(maps, name)?.dyn_into::<Function>()
}

/// `Ok(false)` when `window.naver.maps` is missing.
fn render_map(element: &HtmlElement, center: MapCenter, zoom: u8) -> Result<bool, JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(false);
    };
    let naver = get(&window, "naver")?;
    if naver.is_undefined() || naver.is_null() {
        return Ok(false);
    }
    let maps = get(&naver, "maps")?;
    if maps.is_undefined() || maps.is_null() {
        return Ok(false);
    }

    let location = Reflect::construct(
        &constructor(&maps, "LatLng")?,
        &Array::of2(&JsValue::from(center.lat), &JsValue::from(center.lng)),
    )?;

    let map_options = Object::new();
    Reflect::set(&map_options, &JsValue::from_str("center"), &location)?;
    Reflect::set(&map_options, &JsValue::from_str("zoom"), &JsValue::from(zoom))?;
    let map = Reflect::construct(
        &constructor(&maps, "Map")?,
        &Array::of2(element, &map_options),
    )?;

    let marker_options = Object::new();
    Reflect::set(&marker_options, &JsValue::from_str("position"), &location)?;
    Reflect::set(&marker_options, &JsValue::from_str("map"), &map)?;
    Reflect::construct(&constructor(&maps, "Marker")?, &Array::of1(&marker_options))?;
    Ok(true)
}
