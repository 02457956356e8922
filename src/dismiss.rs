//! Closing popovers when the user presses somewhere else.
//!
//! [`PointerListeners`] is the app-wide registry of pointer-press listeners. The
//! dismissal registers itself there only while at least one popover is open, and
//! the registration is a [`ListenerGuard`] that deregisters on drop. A closed
//! panel therefore costs nothing per frame, and tearing the panel down always
//! releases the listener.

use crate::state::{Popover, PopoverVisibility};
use egui::{Pos2, Rect};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Identifies one registration in [`PointerListeners`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    attached: Vec<ListenerId>,
}

/// Registry of pointer-press listeners shared by everything in the window
#[derive(Debug, Clone, Default)]
pub struct PointerListeners {
    inner: Rc<RefCell<Registry>>,
}

impl PointerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener; it stays attached until the guard is dropped
    pub fn attach(&self) -> ListenerGuard {
        let mut registry = self.inner.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.attached.push(id);
        log::trace!("Pointer listener {:?} attached", id);
        ListenerGuard {
            id,
            registry: Rc::clone(&self.inner),
        }
    }

    pub fn attached_count(&self) -> usize {
        self.inner.borrow().attached.len()
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.inner.borrow().attached.contains(&id)
    }
}

/// A live registration in [`PointerListeners`]
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    registry: Rc<RefCell<Registry>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.borrow_mut().attached.retain(|id| *id != self.id);
        log::trace!("Pointer listener {:?} detached", self.id);
    }
}

/// Screen area of a control, recorded while it is laid out.
///
/// An empty region has not been laid out yet and contains nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    pub fn add(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn is_laid_out(&self) -> bool {
        !self.rects.is_empty()
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.rects.iter().any(|rect| rect.contains(pos))
    }
}

/// Trigger and body regions of one popover
#[derive(Debug, Clone, Default)]
pub struct PopoverRegions {
    pub trigger: Region,
    pub popover: Region,
}

impl PopoverRegions {
    /// True when both regions are laid out and `pos` is in neither
    fn is_outside(&self, pos: Pos2) -> bool {
        self.trigger.is_laid_out()
            && self.popover.is_laid_out()
            && !self.trigger.contains(pos)
            && !self.popover.contains(pos)
    }
}

/// Closes open popovers on pointer presses outside them
#[derive(Debug)]
pub struct OutsideClickDismissal {
    listeners: PointerListeners,
    guard: Option<ListenerGuard>,
    regions: HashMap<Popover, PopoverRegions>,
}

impl OutsideClickDismissal {
    pub fn new(listeners: PointerListeners) -> Self {
        Self {
            listeners,
            guard: None,
            regions: HashMap::new(),
        }
    }

    /// Attaches or detaches the listener to match `popovers`. Safe to call any
    /// number of times; at most one registration is ever held.
    pub fn sync(&mut self, popovers: &PopoverVisibility) {
        match (popovers.any_open(), self.guard.is_some()) {
            (true, false) => self.guard = Some(self.listeners.attach()),
            (false, true) => self.guard = None,
            _ => {}
        }
    }

    pub fn is_listening(&self) -> bool {
        self.guard.is_some()
    }

    pub fn regions_mut(&mut self, popover: Popover) -> &mut PopoverRegions {
        self.regions.entry(popover).or_default()
    }

    /// Forgets every recorded region, ahead of the next layout pass
    pub fn reset_regions(&mut self) {
        for regions in self.regions.values_mut() {
            regions.trigger.clear();
            regions.popover.clear();
        }
    }

    /// Handles a pointer press at `pos`, closing each open popover the press
    /// landed outside of. Returns the popovers that were closed.
    ///
    /// Presses are ignored while no listener is attached.
    pub fn handle_pointer_down(
        &self,
        pos: Pos2,
        popovers: &mut PopoverVisibility,
    ) -> Vec<Popover> {
        if !self.is_listening() {
            return Vec::new();
        }

        let closed: Vec<Popover> = popovers
            .open_popovers()
            .filter(|popover| {
                self.regions
                    .get(popover)
                    .is_some_and(|regions| regions.is_outside(pos))
            })
            .collect();

        for popover in &closed {
            log::debug!("Dismissing {:?} after outside press at {:?}", popover, pos);
            popovers.set(*popover, false);
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_guard_detaches_on_drop() {
        let listeners = PointerListeners::new();
        let guard = listeners.attach();
        let id = guard.id();
        assert!(listeners.is_attached(id));
        drop(guard);
        assert!(!listeners.is_attached(id));
        assert_eq!(listeners.attached_count(), 0);
    }

    #[test]
    fn test_region_without_layout_contains_nothing() {
        let region = Region::default();
        assert!(!region.is_laid_out());
        assert!(!region.contains(pos2(0.0, 0.0)));
    }

    #[test]
    fn test_region_with_several_rects() {
        let mut region = Region::default();
        region.add(Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0)));
        region.add(Rect::from_min_max(pos2(100.0, 100.0), pos2(110.0, 110.0)));
        assert!(region.contains(pos2(5.0, 5.0)));
        assert!(region.contains(pos2(105.0, 105.0)));
        assert!(!region.contains(pos2(50.0, 50.0)));
    }
}
