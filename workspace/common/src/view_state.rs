use std::fmt;
use std::rc::Rc;

use crate::format;
use crate::heat_point::HeatPoint;
use crate::risk::{average_risk, reduction_percent};

/// Green-cover increase entered by the user, in percent.
///
/// The value is kept exactly as typed; `None` is the transient state of an
/// empty input field. Range and step are left to the input control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GreenIncrease(Option<f64>);

impl GreenIncrease {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 50.0;
    pub const STEP: f64 = 5.0;

    pub fn new(percent: f64) -> Self {
        Self(Some(percent))
    }

    pub fn unset() -> Self {
        Self(None)
    }

    /// Parses the raw text of the number input. Blank or non-numeric text is unset.
    pub fn from_input(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Self(Some(value)),
            _ => Self(None),
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    /// Text to show in the input field.
    pub fn input_value(&self) -> String {
        self.0.map(|v| v.to_string()).unwrap_or_default()
    }

    /// Plain-number form for the `green` query parameter; unset is sent as 0.
    pub fn query_value(&self) -> String {
        self.0.unwrap_or(0.0).to_string()
    }
}

/// Reducer actions for the heat map view.
#[derive(Debug, Clone, PartialEq)]
pub enum HeatMapAction {
    SetGreenIncrease(GreenIncrease),
    BaselineLoaded(Vec<HeatPoint>),
    SimulationRequested { id: u64 },
    SimulationLoaded { id: u64, points: Vec<HeatPoint> },
    SimulationFailed { id: u64 },
}

/// Before/after averages of one applied simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSummary {
    pub baseline: f64,
    pub current: f64,
}

impl SimulationSummary {
    pub fn reduction_percent(&self) -> f64 {
        reduction_percent(self.baseline, self.current)
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Avg risk: {:.2} → {:.2} (reduced {:.1}%!)",
            self.baseline,
            self.current,
            self.reduction_percent()
        )
    }
}

/// What an action did to the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Applied,
    Simulated(SimulationSummary),
    Ignored(&'static str),
}

/// View state of the heat map page.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatMapState {
    points: Rc<Vec<HeatPoint>>,
    green_increase: GreenIncrease,
    baseline_average: Option<f64>,
    current_average: f64,
    latest_simulation: Option<u64>,
    // Issued ids still awaiting a response, oldest first.
    pending_simulations: Vec<u64>,
    simulation_applied: bool,
}

impl Default for HeatMapState {
    fn default() -> Self {
        Self {
            points: Rc::new(Vec::new()),
            green_increase: GreenIncrease::new(0.0),
            baseline_average: None,
            current_average: 0.0,
            latest_simulation: None,
            pending_simulations: Vec::new(),
            simulation_applied: false,
        }
    }
}

impl HeatMapState {
    pub fn points(&self) -> &Rc<Vec<HeatPoint>> {
        &self.points
    }

    pub fn green_increase(&self) -> GreenIncrease {
        self.green_increase
    }

    pub fn baseline_average(&self) -> Option<f64> {
        self.baseline_average
    }

    pub fn current_average(&self) -> f64 {
        self.current_average
    }

    /// The summary is only meaningful against a positive baseline.
    pub fn show_summary(&self) -> bool {
        self.baseline_average.is_some_and(|b| b > 0.0)
    }

    pub fn reduction_percent(&self) -> f64 {
        reduction_percent(self.baseline_average.unwrap_or(0.0), self.current_average)
    }

    pub fn summary_line(&self) -> Option<String> {
        self.show_summary().then(|| {
            format::summary_line(self.baseline_average.unwrap_or(0.0), self.current_average)
        })
    }

    pub fn apply(&mut self, action: HeatMapAction) -> Transition {
        match action {
            HeatMapAction::SetGreenIncrease(value) => {
                self.green_increase = value;
                Transition::Applied
            }
            HeatMapAction::BaselineLoaded(points) => {
                if self.baseline_average.is_some() {
                    return Transition::Ignored("baseline already loaded");
                }
                let average = average_risk(&points);
                self.baseline_average = Some(average);
                // A simulation that finished first keeps its points on screen.
                if !self.simulation_applied {
                    self.points = Rc::new(points);
                    self.current_average = average;
                }
                Transition::Applied
            }
            HeatMapAction::SimulationRequested { id } => {
                self.latest_simulation = Some(id);
                self.pending_simulations.push(id);
                Transition::Applied
            }
            HeatMapAction::SimulationLoaded { id, points } => {
                if self.latest_simulation != Some(id) {
                    self.pending_simulations.retain(|pending| *pending != id);
                    return Transition::Ignored("stale simulation response");
                }
                // Anything older can no longer win.
                self.pending_simulations.retain(|pending| *pending > id);
                self.current_average = average_risk(&points);
                self.points = Rc::new(points);
                self.simulation_applied = true;
                Transition::Simulated(SimulationSummary {
                    baseline: self.baseline_average.unwrap_or(0.0),
                    current: self.current_average,
                })
            }
            HeatMapAction::SimulationFailed { id } => {
                self.pending_simulations.retain(|pending| *pending != id);
                if self.latest_simulation != Some(id) {
                    return Transition::Ignored("failure of a superseded simulation");
                }
                // The newest request still in flight takes over.
                self.latest_simulation = self.pending_simulations.last().copied();
                Transition::Applied
            }
        }
    }
}
