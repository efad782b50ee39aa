use std::rc::Rc;

use common::HeatPoint;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::leaflet::HeatLeafletMap;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct HeatMapProps {
    pub points: Rc<Vec<HeatPoint>>,
}

/// Leaflet map owning one marker per heat point.
#[function_component(HeatMap)]
pub fn heat_map(props: &HeatMapProps) -> Html {
    let container_ref = use_node_ref();
    let leaflet = use_mut_ref(|| None::<HeatLeafletMap>);

    // Created once, removed on teardown.
    {
        let container_ref = container_ref.clone();
        let leaflet = leaflet.clone();
        use_effect_with((), move |_| {
            if let Some(container) = container_ref.cast::<HtmlElement>() {
                log::trace!("Mounting Leaflet map");
                match HeatLeafletMap::mount(&container, &settings::get_settings()) {
                    Ok(map) => *leaflet.borrow_mut() = Some(map),
                    Err(e) => log::error!("Failed to initialise map: {:?}", e),
                }
            }
            move || {
                if let Some(map) = leaflet.borrow_mut().take() {
                    log::trace!("Removing Leaflet map");
                    map.remove();
                }
            }
        });
    }

    {
        let leaflet = leaflet.clone();
        use_effect_with(props.points.clone(), move |points| {
            if let Some(map) = leaflet.borrow().as_ref() {
                log::debug!("Rendering {} heat markers", points.len());
                if let Err(e) = map.show_points(points) {
                    log::error!("Failed to render heat markers: {:?}", e);
                }
            }
            || ()
        });
    }

    html! {
        <div ref={container_ref} class="rounded-box shadow" style="height: 70vh; margin-top: 10px;"></div>
    }
}
