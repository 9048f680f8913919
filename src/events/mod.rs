pub mod controls;
pub mod pointer;

use crate::listener::DragListeners;
use crate::surfaces::Surfaces;
use lunar_core::ViewSet;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared state every DOM handler closes over.
#[derive(Clone)]
pub struct Wiring {
    pub views: Rc<RefCell<ViewSet>>,
    pub surfaces: Rc<Surfaces>,
    pub drag: Rc<RefCell<DragListeners>>,
}

pub use controls::{resize_active, wire_controls};
pub use pointer::wire_pointer_handlers;
