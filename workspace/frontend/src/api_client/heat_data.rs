use crate::api_client;
use common::{ApiError, GreenIncrease, HeatPoint, SimulationResponse};

pub const HEAT_DATA_ENDPOINT: &str = "/api/heat-data";

pub fn simulation_endpoint(green: GreenIncrease) -> String {
    format!("/sim?green={}", green.query_value())
}

/// Baseline heat-risk points.
pub async fn fetch_heat_data() -> Result<Vec<HeatPoint>, ApiError> {
    log::trace!("Fetching baseline heat data");
    let result = api_client::get::<Vec<HeatPoint>>(HEAT_DATA_ENDPOINT).await;

    if let Ok(ref points) = result {
        log::info!("Fetched {} baseline heat points", points.len());
    }

    result
}

/// Points re-computed by the server for the given green-cover increase.
pub async fn fetch_simulation(green: GreenIncrease) -> Result<Vec<HeatPoint>, ApiError> {
    if green.is_unset() {
        log::warn!("Green increase is empty, simulating with 0%");
    }
    log::trace!("Requesting simulation for green increase {:?}", green.value());

    let response = api_client::get::<SimulationResponse>(&simulation_endpoint(green)).await?;
    let points = response.into_points();
    log::info!("Fetched {} simulated heat points", points.len());

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_endpoint_plain_number() {
        assert_eq!(simulation_endpoint(GreenIncrease::new(20.0)), "/sim?green=20");
        assert_eq!(simulation_endpoint(GreenIncrease::new(12.5)), "/sim?green=12.5");
    }

    #[test]
    fn test_simulation_endpoint_unset_sends_zero() {
        assert_eq!(simulation_endpoint(GreenIncrease::unset()), "/sim?green=0");
    }
}
