use std::rc::Rc;

use common::{GreenIncrease, HeatMapAction, HeatMapState, Transition};
use yew::prelude::*;

use super::controls::SimulationControls;
use super::map::HeatMap;
use super::summary::RiskSummary;
use crate::api_client::heat_data::{fetch_heat_data, fetch_simulation};

const NASA_LOGO_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/e/e5/NASA_logo.svg";

#[derive(Default, PartialEq)]
struct HeatMapStore(HeatMapState);

impl Reducible for HeatMapStore {
    type Action = HeatMapAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match state.apply(action) {
            Transition::Applied => {}
            Transition::Simulated(summary) => log::info!("{}", summary),
            Transition::Ignored(reason) => {
                log::debug!("Ignoring heat map update: {}", reason);
                return self;
            }
        }
        Rc::new(Self(state))
    }
}

/// Heat-risk map page: baseline on mount, simulations on demand.
#[function_component(HeatMapView)]
pub fn heat_map_view() -> Html {
    let store = use_reducer(HeatMapStore::default);
    let next_request = use_mut_ref(|| 0u64);

    {
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            log::debug!("Loading baseline heat data");
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_heat_data().await {
                    Ok(points) => dispatcher.dispatch(HeatMapAction::BaselineLoaded(points)),
                    Err(e) => log::error!("Fetch error: {}", e),
                }
            });
            || ()
        });
    }

    let on_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |value: GreenIncrease| {
            dispatcher.dispatch(HeatMapAction::SetGreenIncrease(value));
        })
    };

    let on_simulate = {
        let dispatcher = store.dispatcher();
        let green = store.0.green_increase();
        let next_request = next_request.clone();
        Callback::from(move |_: ()| {
            let id = {
                let mut counter = next_request.borrow_mut();
                *counter += 1;
                *counter
            };
            log::debug!("Starting simulation #{} with green increase {:?}", id, green.value());
            dispatcher.dispatch(HeatMapAction::SimulationRequested { id });

            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_simulation(green).await {
                    Ok(points) => dispatcher.dispatch(HeatMapAction::SimulationLoaded { id, points }),
                    Err(e) => {
                        log::error!("Sim error: {}", e);
                        dispatcher.dispatch(HeatMapAction::SimulationFailed { id });
                    }
                }
            });
        })
    };

    let state = &store.0;

    html! {
        <div class="relative p-3" style="min-height: 100vh;">
            <h1 class="text-2xl font-bold mb-2">{"UrbanVitality: Global Urban Heat Risks"}</h1>
            <div>
                <SimulationControls
                    green_increase={state.green_increase()}
                    {on_change}
                    {on_simulate}
                />
                <RiskSummary line={state.summary_line()} />
            </div>

            <img
                src={NASA_LOGO_URL}
                alt="NASA Logo"
                style="position: absolute; top: 10px; right: 10px; width: 100px; height: auto; z-index: 1000;"
            />

            <HeatMap points={state.points().clone()} />
            <p class="mt-2 text-sm text-gray-500">{"Data from NASA SEDAC (worldwide urban heat events)"}</p>
        </div>
    }
}
