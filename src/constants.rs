// DOM hooks the page provides for the viewer.
//
// Each view lives in its own container carrying `data-view` with the
// route it is mounted at; only the active one is shown.

// View containers and surfaces
pub const VIEW_ATTR: &str = "data-view";
pub const GLOBE_CANVAS_ID: &str = "globe-canvas";
pub const PLANAR_IMAGE_ID: &str = "planar-image";
pub const SUBPIXEL_IMAGE_ID: &str = "subpixel-image";

// Controls
pub const OVERLAY_SELECT_CLASS: &str = "overlay-select";
pub const ZOOM_IN_CLASS: &str = "zoom-in";
pub const ZOOM_OUT_CLASS: &str = "zoom-out";
pub const NAV_ATTR: &str = "data-nav"; // route, or "back"

// Readout
pub const COORDS_CLASS: &str = "coordinates";
pub const LAT_CLASS: &str = "latitude";
pub const LON_CLASS: &str = "longitude";

// Attributes the external globe renderer reads each frame
pub const TEXTURE_ATTR: &str = "data-texture";
pub const SPIN_ATTR: &str = "data-spin";
// Set once on the globe canvas: Float32Array polylines, x y z per vertex
pub const GRATICULE_PROP: &str = "graticule";
// Dispatched on the globe canvas by the renderer when a texture fails to load
pub const TEXTURE_ERROR_EVENT: &str = "texture-error";

pub const HIDDEN_CLASS: &str = "hidden";
