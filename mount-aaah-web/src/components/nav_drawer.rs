use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use crate::consts::{
    NAV_BREAKPOINT, NAV_DRAWER_SELECTOR, NAV_LINKS_SELECTOR, NAV_OPEN_CLASS, NAV_OVERLAY_SELECTOR,
    NAV_SELECTOR, NAV_TOGGLE_SELECTOR,
};
use crate::utils::{
    document, has_class, query, query_all_in, query_in, set_attribute, set_class, window,
};
use crate::Error;

/// Everything that can open or close the drawer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawerEvent {
    Open,
    Close,
    Toggle,
    OverlayClick,
    LinkClick,
    Escape,
    /// The viewport was resized to the given width.
    Resize(f64),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    #[inline]
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Applies `event` and returns `true` if the drawer changed between open and closed.
    pub fn handle(&mut self, event: DrawerEvent) -> bool {
        let open = match event {
            DrawerEvent::Open => true,
            DrawerEvent::Toggle => !self.open,
            DrawerEvent::Close
            | DrawerEvent::OverlayClick
            | DrawerEvent::LinkClick
            | DrawerEvent::Escape => false,
            DrawerEvent::Resize(width) if width > NAV_BREAKPOINT => false,
            DrawerEvent::Resize(_) => self.open,
        };

        let changed = open != self.open;
        self.open = open;
        changed
    }
}

#[derive(Debug)]
struct Inner {
    nav: Element,
    toggle: Element,
    state: Cell<DrawerState>,
}

impl Inner {
    fn dispatch(&self, event: DrawerEvent) {
        let mut state = self.state.get();

        if state.handle(event) {
            log::debug!("Nav drawer {:?}: open = {}", event, state.is_open());

            self.state.set(state);
            self.sync();
        }
    }

    /// Writes the current state to the document.
    fn sync(&self) {
        let open = self.state.get().is_open();

        set_class(&self.nav, NAV_OPEN_CLASS, open);
        set_attribute(&self.toggle, "aria-expanded", if open { "true" } else { "false" });
    }
}

/// The mobile navigation drawer.
///
/// The listeners are removed when the `NavDrawer` is dropped.
pub struct NavDrawer {
    inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl NavDrawer {
    pub fn new() -> Result<Self, Error> {
        let nav = query(NAV_SELECTOR)?;
        let toggle = query_in(&nav, NAV_TOGGLE_SELECTOR)?;
        let drawer = query_in(&nav, NAV_DRAWER_SELECTOR)?;
        let overlay = query(NAV_OVERLAY_SELECTOR)?;

        let cloned = populate(&nav, &drawer);
        log::debug!("Copied {} links into the nav drawer", cloned);

        let inner = Rc::new(Inner {
            state: Cell::new(DrawerState::new(has_class(&nav, NAV_OPEN_CLASS))),
            nav,
            toggle,
        });
        inner.sync();

        let mut listeners = Vec::with_capacity(5);

        let state = inner.clone();
        listeners.push(EventListener::new(&inner.toggle, "click", move |_| {
            state.dispatch(DrawerEvent::Toggle);
        }));

        let state = inner.clone();
        listeners.push(EventListener::new(&overlay, "click", move |_| {
            state.dispatch(DrawerEvent::OverlayClick);
        }));

        let state = inner.clone();
        listeners.push(EventListener::new(&drawer, "click", move |event| {
            let on_link = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest("a").ok().flatten())
                .is_some();

            if on_link {
                state.dispatch(DrawerEvent::LinkClick);
            }
        }));

        let state = inner.clone();
        listeners.push(EventListener::new(&document(), "keydown", move |event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .map_or(false, |event| event.key() == "Escape");

            if escape {
                state.dispatch(DrawerEvent::Escape);
            }
        }));

        let state = inner.clone();
        listeners.push(EventListener::new(&window(), "resize", move |_| {
            if let Some(width) = window().inner_width().ok().and_then(|w| w.as_f64()) {
                state.dispatch(DrawerEvent::Resize(width));
            }
        }));

        Ok(Self {
            inner,
            _listeners: listeners,
        })
    }

    pub fn open(&self) {
        self.inner.dispatch(DrawerEvent::Open);
    }

    pub fn close(&self) {
        self.inner.dispatch(DrawerEvent::Close);
    }

    pub fn toggle(&self) {
        self.inner.dispatch(DrawerEvent::Toggle);
    }

    pub fn is_open(&self) -> bool {
        self.inner.state.get().is_open()
    }
}

/// Copies the desktop links into the drawer unless it already has content. Returns the number
/// of links copied.
fn populate(nav: &Element, drawer: &Element) -> usize {
    if drawer.child_element_count() != 0 {
        return 0;
    }

    let links = match query_in(nav, NAV_LINKS_SELECTOR) {
        Ok(links) => links,
        Err(_) => return 0,
    };

    let mut copied = 0;
    for link in query_all_in(&links, "a") {
        let clone = match link
            .clone_node_with_deep(true)
            .ok()
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            Some(clone) => clone,
            None => continue,
        };

        // The desktop styling does not fit the drawer.
        if let Err(err) = clone.remove_attribute("class") {
            log::debug!("Failed to remove class of drawer link: {:?}", err);
        }

        if drawer.append_child(&clone).is_ok() {
            copied += 1;
        }
    }

    copied
}

#[cfg(test)]
mod tests {
    use super::{DrawerEvent, DrawerState};

    #[test]
    fn test_drawer_open_close() {
        let mut state = DrawerState::default();
        assert!(!state.is_open());

        assert!(state.handle(DrawerEvent::Open));
        assert!(state.is_open());
        assert!(!state.handle(DrawerEvent::Open));

        assert!(state.handle(DrawerEvent::Close));
        assert!(!state.is_open());
        assert!(!state.handle(DrawerEvent::Close));
    }

    #[test]
    fn test_drawer_toggle() {
        let mut state = DrawerState::default();

        state.handle(DrawerEvent::Toggle);
        assert!(state.is_open());

        state.handle(DrawerEvent::Toggle);
        assert!(!state.is_open());
    }

    #[test]
    fn test_drawer_auto_close() {
        for event in [
            DrawerEvent::OverlayClick,
            DrawerEvent::LinkClick,
            DrawerEvent::Escape,
        ] {
            let mut state = DrawerState::new(true);

            assert!(state.handle(event), "{:?} did not close the drawer", event);
            assert!(!state.is_open());
        }
    }

    #[test]
    fn test_drawer_resize() {
        let mut state = DrawerState::new(true);

        assert!(!state.handle(DrawerEvent::Resize(600.0)));
        assert!(state.is_open());

        assert!(!state.handle(DrawerEvent::Resize(900.0)));
        assert!(state.is_open());

        assert!(state.handle(DrawerEvent::Resize(901.0)));
        assert!(!state.is_open());

        // Never opens on resize.
        assert!(!state.handle(DrawerEvent::Resize(400.0)));
        assert!(!state.is_open());
    }
}
