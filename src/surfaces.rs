use crate::constants::{
    COORDS_CLASS, GLOBE_CANVAS_ID, OVERLAY_SELECT_CLASS, PLANAR_IMAGE_ID, SUBPIXEL_IMAGE_ID,
    VIEW_ATTR,
};
use crate::dom;
use anyhow::{anyhow, Context};
use lunar_core::ViewKind;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM nodes that make up one view.
#[derive(Clone)]
pub struct ViewDom {
    pub kind: ViewKind,
    pub root: web::HtmlElement,
    /// Element pointer positions are measured against.
    pub surface: web::Element,
    pub image: Option<web::HtmlImageElement>,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub readout: Option<web::Element>,
    pub select: Option<web::HtmlSelectElement>,
}

#[derive(Clone)]
pub struct Surfaces {
    views: Vec<ViewDom>,
}

fn by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{id} has unexpected type: {e:?}"))
}

fn first_by_class(root: &web::Element, class: &str) -> Option<web::Element> {
    root.query_selector(&format!(".{class}")).ok().flatten()
}

impl Surfaces {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        let body = document.body().ok_or_else(|| anyhow!("no body"))?;
        let mut views = Vec::new();
        for el in dom::query_all(&body, &format!("[{VIEW_ATTR}]")) {
            let route = el.get_attribute(VIEW_ATTR).unwrap_or_default();
            let kind = ViewKind::from_route(&route).context("view container")?;
            let root: web::HtmlElement = el
                .clone()
                .dyn_into()
                .map_err(|e| anyhow!("view {route} is not an HtmlElement: {e:?}"))?;
            let (surface, image, canvas): (web::Element, _, _) = match kind {
                ViewKind::Globe => {
                    let canvas: web::HtmlCanvasElement = by_id(document, GLOBE_CANVAS_ID)?;
                    (canvas.clone().into(), None, Some(canvas))
                }
                ViewKind::Planar | ViewKind::SubPixel => {
                    let id = if kind == ViewKind::Planar {
                        PLANAR_IMAGE_ID
                    } else {
                        SUBPIXEL_IMAGE_ID
                    };
                    let img: web::HtmlImageElement = by_id(document, id)?;
                    // the container stays untransformed; the image inside moves
                    let container = img.parent_element().unwrap_or_else(|| el.clone());
                    (container, Some(img), None)
                }
            };
            let select = first_by_class(&el, OVERLAY_SELECT_CLASS)
                .and_then(|s| s.dyn_into::<web::HtmlSelectElement>().ok());
            views.push(ViewDom {
                kind,
                root,
                surface,
                image,
                canvas,
                readout: first_by_class(&el, COORDS_CLASS),
                select,
            });
        }
        if views.is_empty() {
            return Err(anyhow!("no [{VIEW_ATTR}] containers on the page"));
        }
        Ok(Self { views })
    }

    pub fn get(&self, kind: ViewKind) -> Option<&ViewDom> {
        self.views.iter().find(|v| v.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewDom> {
        self.views.iter()
    }

    pub fn show_only(&self, kind: ViewKind) {
        for v in &self.views {
            if v.kind == kind {
                dom::show(&v.root);
            } else {
                dom::hide(&v.root);
            }
        }
    }
}
