//! The three views side by side plus a back-history.
//!
//! Only one view is active at a time. Leaving a view deactivates it, which
//! closes any drag and clears its hover coordinate.

use crate::constants::NAV_HISTORY_LIMIT;
use crate::controller::{NavRequest, ViewConfig, ViewController, ViewKind};
use glam::Vec2;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct ViewSet {
    globe: ViewController,
    planar: ViewController,
    subpixel: ViewController,
    active: ViewKind,
    history: VecDeque<ViewKind>,
}

impl ViewSet {
    pub fn new(initial: ViewKind) -> Self {
        let mut set = Self {
            globe: ViewController::new(ViewConfig::globe()),
            planar: ViewController::new(ViewConfig::planar()),
            subpixel: ViewController::new(ViewConfig::subpixel()),
            active: initial,
            history: VecDeque::new(),
        };
        for kind in ViewKind::ALL {
            if kind != initial {
                set.get_mut(kind).deactivate();
            }
        }
        set
    }

    pub fn active_kind(&self) -> ViewKind {
        self.active
    }

    pub fn active(&self) -> &ViewController {
        self.get(self.active)
    }

    pub fn active_mut(&mut self) -> &mut ViewController {
        self.get_mut(self.active)
    }

    pub fn get(&self, kind: ViewKind) -> &ViewController {
        match kind {
            ViewKind::Globe => &self.globe,
            ViewKind::Planar => &self.planar,
            ViewKind::SubPixel => &self.subpixel,
        }
    }

    pub fn get_mut(&mut self, kind: ViewKind) -> &mut ViewController {
        match kind {
            ViewKind::Globe => &mut self.globe,
            ViewKind::Planar => &mut self.planar,
            ViewKind::SubPixel => &mut self.subpixel,
        }
    }

    /// Viewport changes apply to every view so a switch lands on a sized surface.
    pub fn on_resize(&mut self, viewport: Vec2) {
        for kind in ViewKind::ALL {
            self.get_mut(kind).on_resize(viewport);
        }
    }

    /// Returns true when the active view changed.
    pub fn switch_to(&mut self, kind: ViewKind) -> bool {
        if kind == self.active {
            return false;
        }
        if self.history.len() == NAV_HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(self.active);
        self.enter(kind);
        true
    }

    /// Follow a browser back/forward step without recording it.
    ///
    /// The browser keeps its own history for these, so nothing is pushed.
    /// Stepping onto the most recent entry consumes it, keeping [`ViewSet::back`]
    /// in step with the browser.
    pub fn follow_route(&mut self, kind: ViewKind) -> bool {
        if kind == self.active {
            return false;
        }
        if self.history.back() == Some(&kind) {
            self.history.pop_back();
        }
        self.enter(kind);
        true
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Return to the previous view, or to the globe when there is none.
    pub fn back(&mut self) -> bool {
        let target = self.history.pop_back().unwrap_or(ViewKind::Globe);
        if target == self.active {
            return false;
        }
        self.enter(target);
        true
    }

    pub fn apply(&mut self, request: NavRequest) -> bool {
        match request {
            NavRequest::Goto(kind) => self.switch_to(kind),
            NavRequest::Back => self.back(),
        }
    }

    /// Apply whatever the active view asked for. Returns the new active view
    /// if it changed.
    pub fn pump_navigation(&mut self) -> Option<ViewKind> {
        let start = self.active;
        for request in self.active_mut().take_navigation_requests() {
            self.apply(request);
        }
        (self.active != start).then_some(self.active)
    }

    fn enter(&mut self, kind: ViewKind) {
        self.active_mut().deactivate();
        self.active = kind;
        self.active_mut().activate();
        log::info!("[view] -> {}", kind.route());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_initial_view_is_active() {
        let set = ViewSet::new(ViewKind::Planar);
        assert!(set.get(ViewKind::Planar).is_active());
        assert!(!set.get(ViewKind::Globe).is_active());
        assert!(!set.get(ViewKind::SubPixel).is_active());
    }

    #[test]
    fn back_follows_history_then_globe() {
        let mut set = ViewSet::new(ViewKind::Planar);
        set.switch_to(ViewKind::SubPixel);
        assert!(set.back());
        assert_eq!(set.active_kind(), ViewKind::Planar);
        assert!(set.back());
        assert_eq!(set.active_kind(), ViewKind::Globe);
        assert!(!set.back());
    }

    #[test]
    fn history_is_capped() {
        let mut set = ViewSet::new(ViewKind::Globe);
        for _ in 0..10_000 {
            set.switch_to(ViewKind::Planar);
            set.switch_to(ViewKind::Globe);
        }
        assert_eq!(set.history_len(), NAV_HISTORY_LIMIT);
        // the newest entries survive
        assert!(set.back());
        assert_eq!(set.active_kind(), ViewKind::Planar);
    }

    #[test]
    fn browser_round_trips_do_not_grow_history() {
        let mut set = ViewSet::new(ViewKind::Globe);
        set.switch_to(ViewKind::Planar);
        assert_eq!(set.history_len(), 1);
        for _ in 0..10_000 {
            // browser back then forward
            assert!(set.follow_route(ViewKind::Globe));
            assert!(set.follow_route(ViewKind::Planar));
        }
        assert!(set.history_len() <= 1);
        assert!(!set.follow_route(ViewKind::Planar));
    }

    #[test]
    fn pump_applies_queued_requests() {
        let mut set = ViewSet::new(ViewKind::Globe);
        set.active_mut()
            .request_navigation(NavRequest::Goto(ViewKind::SubPixel));
        assert_eq!(set.pump_navigation(), Some(ViewKind::SubPixel));
        assert_eq!(set.pump_navigation(), None);
    }
}
