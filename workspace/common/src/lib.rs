//! Common transport-layer types and view rules shared by the frontend.
//! Everything in here is platform independent so it can be tested natively,
//! while the frontend only wires it to the browser.

mod error;
mod format;
mod heat_point;
mod risk;
mod view_state;

pub use error::ApiError;
pub use format::{format_population, format_risk, popup_html, summary_line};
pub use heat_point::{HeatPoint, SimulationResponse};
pub use risk::{average_risk, reduction_percent, RiskTier};
pub use view_state::{
    GreenIncrease, HeatMapAction, HeatMapState, SimulationSummary, Transition,
};
