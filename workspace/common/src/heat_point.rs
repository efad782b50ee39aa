use serde::{Deserialize, Deserializer, Serialize};

/// A single urban heat-risk sample as served by `/api/heat-data` and `/sim`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatPoint {
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "lon", alias = "longitude")]
    pub longitude: f64,
    /// Expected extreme-heat days per year, roughly on a 0.0–1.0 scale.
    pub heat_risk: f64,
    #[serde(deserialize_with = "deserialize_population")]
    pub population: u64,
}

impl HeatPoint {
    pub fn new(latitude: f64, longitude: f64, heat_risk: f64, population: u64) -> Self {
        Self {
            latitude,
            longitude,
            heat_risk,
            population,
        }
    }
}

/// Response body of `/sim`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationResponse {
    #[serde(default)]
    pub simulated_data: Option<Vec<HeatPoint>>,
}

impl SimulationResponse {
    /// The simulated points, empty when the server left the field out.
    pub fn into_points(self) -> Vec<HeatPoint> {
        self.simulated_data.unwrap_or_default()
    }
}

// Population counts often arrive as floats (`1000.0`) from dataframe exports.
fn deserialize_population<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom("population must be a finite number"));
    }
    Ok(value.round().max(0.0) as u64)
}
