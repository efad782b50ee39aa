mod controls;
mod leaflet;
mod map;
mod summary;
mod view;

pub use view::HeatMapView;
