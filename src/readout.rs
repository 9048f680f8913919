use crate::constants::{LAT_CLASS, LON_CLASS};
use crate::dom;
use lunar_core::GeoCoordinate;
use web_sys as web;

pub fn latitude_text(c: &GeoCoordinate) -> String {
    format!("Latitude: {:.2}", c.latitude)
}

pub fn longitude_text(c: &GeoCoordinate) -> String {
    format!("Longitude: {:.2}", c.longitude)
}

/// Fill the readout block, or hide it when there is no coordinate.
pub fn render(readout: &web::Element, coordinate: Option<GeoCoordinate>) {
    let Some(c) = coordinate else {
        if !dom::is_hidden(readout) {
            dom::hide(readout);
        }
        return;
    };
    if let Ok(Some(lat)) = readout.query_selector(&format!(".{LAT_CLASS}")) {
        lat.set_text_content(Some(&latitude_text(&c)));
    }
    if let Ok(Some(lon)) = readout.query_selector(&format!(".{LON_CLASS}")) {
        lon.set_text_content(Some(&longitude_text(&c)));
    }
    if dom::is_hidden(readout) {
        dom::show(readout);
    }
}
