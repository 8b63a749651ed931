//! Binding of a [`Controller`] to live DOM elements.
//!
//! All state for one carousel lives in an `Inner` behind `Rc<RefCell<_>>`.
//! Event closures hold only a `Weak` to it, so dropping the [`Widget`] tears
//! everything down: listeners are detached, the speed timer is cleared and a
//! pending animation frame is cancelled.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, Window};
use roto_core::{ButtonState, Controller, Options, Step, LINK_RESTORE_DELAY_MS};
use crate::dom;
use crate::input::InputSource;
use crate::listeners::Listeners;

type Shared = Rc<RefCell<Inner>>;
type WeakShared = Weak<RefCell<Inner>>;

/// A carousel attached to a container element.
pub struct Widget {
    inner: Shared,
}

struct Inner {
    /// Container id, or a timestamp-derived one; used in log lines.
    id: String,
    input: InputSource,
    controller: Controller,
    container: HtmlElement,
    list: HtmlElement,
    items: Vec<HtmlElement>,
    prev: Vec<HtmlElement>,
    next: Vec<HtmlElement>,
    listeners: Listeners,
    on_frame: Option<Closure<dyn FnMut(f64)>>,
    on_tick: Option<Closure<dyn FnMut()>>,
    frame_request: Option<i32>,
    sampler_timer: Option<i32>,
    has_links: bool,
    /// Links inside the list swallow clicks until shortly after a mouse drag.
    links_inert: bool,
    gesture: u32,
    applied_buttons: Option<ButtonState>,
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Run `f` against the widget if it is still alive. Errors from DOM calls are
/// logged; no handler ever throws back into the page.
fn with_inner(weak: &WeakShared, f: impl FnOnce(&mut Inner, &WeakShared) -> Result<(), JsValue>) {
    let Some(rc) = weak.upgrade() else { return };
    let Ok(mut inner) = rc.try_borrow_mut() else {
        log::warn!("Carousel busy, event dropped");
        return;
    };
    if let Err(e) = f(&mut inner, weak) {
        log::error!("Carousel {}: {:?}", inner.id, e);
    }
}

impl Widget {
    /// Attach a carousel to `container`, which must hold a `ul` of `li` items.
    /// Returns `Ok(None)` when there is no list to drive.
    pub fn attach(container: HtmlElement, options: Options) -> Result<Option<Widget>, JsValue> {
        let Some(list) = container.query_selector("ul")? else {
            log::warn!("Carousel container has no list, skipping");
            return Ok(None);
        };
        let list: HtmlElement = list.dyn_into()?;
        let items = dom::html_elements(&list.query_selector_all("li")?);

        let own_id = container.id();
        let id = if own_id.is_empty() {
            format!("roto-{}", js_sys::Date::now() as u64)
        } else {
            own_id.clone()
        };
        let fallback = |suffix: &str, stock: bool| {
            (stock && !own_id.is_empty()).then(|| format!("{own_id}-{suffix}"))
        };
        let prev = dom::find_buttons(
            &container,
            options.btn_prev.as_deref(),
            fallback("prev", options.uses_default_prev()),
        );
        let next = dom::find_buttons(
            &container,
            options.btn_next.as_deref(),
            fallback("next", options.uses_default_next()),
        );

        let axis = options.axis();
        dom::apply_layout_styles(&container, &list, &items)?;
        let mut controller = Controller::new(options, &dom::measure(&container, &items, &axis));
        if axis.is_horizontal() {
            // Positions are only meaningful once the row can no longer wrap.
            dom::set_extent(&list, &axis, controller.geometry().pinned_list_extent())?;
            controller.remeasure(&dom::measure(&container, &items, &axis));
        }

        let input = InputSource::detect();
        let has_links = list.query_selector("a")?.is_some();
        let is_static = controller.is_static();
        let inner = Rc::new(RefCell::new(Inner {
            id,
            input,
            controller,
            container,
            list,
            items,
            prev,
            next,
            listeners: Listeners::default(),
            on_frame: None,
            on_tick: None,
            frame_request: None,
            sampler_timer: None,
            has_links,
            links_inert: false,
            gesture: 0,
            applied_buttons: None,
        }));

        if is_static {
            let inner_ref = inner.borrow();
            log::info!("Carousel {} content fits, controls hidden", inner_ref.id);
            dom::hide(&inner_ref.prev)?;
            dom::hide(&inner_ref.next)?;
        } else {
            wire(&inner)?;
            log::info!("Carousel {} attached ({:?} input)", inner.borrow().id, input);
        }
        Ok(Some(Widget { inner }))
    }

    /// Attach one independent carousel to every element matching `selector`.
    pub fn attach_all(selector: &str, options: &Options) -> Result<Vec<Widget>, JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let mut widgets = Vec::new();
        for container in dom::html_elements(&document.query_selector_all(selector)?) {
            match Widget::attach(container, options.clone()) {
                Ok(Some(widget)) => widgets.push(widget),
                Ok(None) => {}
                Err(e) => log::error!("Failed to attach carousel: {:?}", e),
            }
        }
        Ok(widgets)
    }

    pub fn id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    pub fn is_static(&self) -> bool {
        self.inner.borrow().controller.is_static()
    }

    /// Committed offset along the axis.
    pub fn offset(&self) -> f64 {
        self.inner.borrow().controller.current_offset()
    }

    pub fn buttons(&self) -> ButtonState {
        self.inner.borrow().controller.buttons()
    }

    pub fn options(&self) -> Options {
        self.inner.borrow().controller.options().clone()
    }

    /// Programmatic equivalent of clicking a control. Returns false when the
    /// step was dropped.
    pub fn step(&self, step: Step) -> bool {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            return false;
        };
        let started = inner.controller.shift(step, now_ms());
        if started {
            if let Err(e) = inner.request_frame() {
                log::error!("Carousel {}: {:?}", inner.id, e);
            }
        }
        started
    }
}

/// Bind start, control, resize and link handlers for a scrollable carousel.
fn wire(rc: &Shared) -> Result<(), JsValue> {
    let weak = Rc::downgrade(rc);
    let mut inner = rc.borrow_mut();
    let win = window()?;

    let w = weak.clone();
    inner.on_frame = Some(Closure::<dyn FnMut(f64)>::new(move |ts: f64| {
        with_inner(&w, |inner, _| inner.frame(ts))
    }));
    let w = weak.clone();
    inner.on_tick = Some(Closure::<dyn FnMut()>::new(move || {
        with_inner(&w, |inner, _| {
            inner.controller.sample_tick();
            Ok(())
        })
    }));

    let list = inner.list.clone();
    let start = inner.input.names().start;
    let w = weak.clone();
    inner.listeners.attach("start", &list, start, false, move |ev| {
        with_inner(&w, |inner, weak| inner.drag_start(weak, &ev))
    })?;

    for (name, step, buttons) in [
        ("prev", Step::Prev, inner.prev.clone()),
        ("next", Step::Next, inner.next.clone()),
    ] {
        for button in buttons {
            let w = weak.clone();
            inner.listeners.attach(name, &button, "click", false, move |_| {
                with_inner(&w, |inner, _| inner.shift(step))
            })?;
        }
    }

    let w = weak.clone();
    inner.listeners.attach("resize", &win, "resize", false, move |_| {
        with_inner(&w, |inner, _| inner.remeasure())
    })?;

    if inner.input == InputSource::Mouse && inner.has_links {
        let w = weak.clone();
        inner.listeners.attach("links", &list, "click", true, move |ev| {
            with_inner(&w, |inner, _| {
                if inner.links_inert && dom::targets_link(ev.target()) {
                    ev.prevent_default();
                    ev.stop_propagation();
                }
                Ok(())
            })
        })?;
    }

    inner.apply_offset()?;
    inner.sync_buttons()
}

impl Inner {
    fn apply_offset(&self) -> Result<(), JsValue> {
        dom::set_offset(&self.list, &self.controller.axis(), self.controller.rendered_offset())
    }

    fn sync_buttons(&mut self) -> Result<(), JsValue> {
        let state = self.controller.buttons();
        if self.applied_buttons == Some(state) {
            return Ok(());
        }
        dom::set_disabled(&self.prev, !state.prev)?;
        dom::set_disabled(&self.next, !state.next)?;
        self.applied_buttons = Some(state);
        Ok(())
    }

    // ── Animation frames ─────────────────────────────────────────────────────

    fn request_frame(&mut self) -> Result<(), JsValue> {
        if self.frame_request.is_some() || !self.controller.is_animating() {
            return Ok(());
        }
        let Some(cb) = self.on_frame.as_ref() else { return Ok(()) };
        self.frame_request = Some(window()?.request_animation_frame(cb.as_ref().unchecked_ref())?);
        Ok(())
    }

    fn cancel_frame(&mut self) {
        if let (Some(id), Some(win)) = (self.frame_request.take(), web_sys::window()) {
            let _ = win.cancel_animation_frame(id);
        }
    }

    fn frame(&mut self, ts: f64) -> Result<(), JsValue> {
        self.frame_request = None;
        let frame = self.controller.frame(ts);
        self.apply_offset()?;
        if frame.animating {
            self.request_frame()
        } else {
            log::debug!("Carousel {} settled at {}", self.id, frame.offset);
            self.sync_buttons()
        }
    }

    // ── Speed timer ──────────────────────────────────────────────────────────

    fn start_sampler(&mut self, win: &Window) -> Result<(), JsValue> {
        let Some(cb) = self.on_tick.as_ref() else { return Ok(()) };
        let interval = self.controller.options().timer_interval.round().max(1.0) as i32;
        self.sampler_timer = Some(
            win.set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), interval)?,
        );
        Ok(())
    }

    fn stop_sampler(&mut self) {
        if let (Some(id), Some(win)) = (self.sampler_timer.take(), web_sys::window()) {
            win.clear_interval_with_handle(id);
        }
    }

    // ── Gestures ─────────────────────────────────────────────────────────────

    fn drag_start(&mut self, weak: &WeakShared, ev: &Event) -> Result<(), JsValue> {
        let Some(coord) = self.input.coordinate(ev, &self.controller.axis()) else {
            return Ok(());
        };
        if self.input == InputSource::Mouse {
            // Stop the browser's native image/link drag.
            ev.prevent_default();
        }
        self.cancel_frame();
        self.stop_sampler();
        self.controller.drag_start(coord);
        self.apply_offset()?;
        self.sync_buttons()?;
        self.gesture = self.gesture.wrapping_add(1);

        let win = window()?;
        let names = self.input.names();
        self.listeners.detach("move");
        self.listeners.detach("end");
        let w = weak.clone();
        self.listeners.attach("move", &win, names.moved, false, move |ev| {
            with_inner(&w, |inner, _| inner.drag_move(&ev))
        })?;
        let w = weak.clone();
        self.listeners.attach("end", &win, names.end, false, move |_| {
            with_inner(&w, |inner, weak| inner.drag_end(weak))
        })?;
        self.start_sampler(&win)
    }

    fn drag_move(&mut self, ev: &Event) -> Result<(), JsValue> {
        ev.prevent_default();
        let Some(coord) = self.input.coordinate(ev, &self.controller.axis()) else {
            return Ok(());
        };
        if self.input == InputSource::Mouse && self.has_links {
            self.links_inert = true;
        }
        self.controller.drag_move(coord);
        self.apply_offset()
    }

    fn drag_end(&mut self, weak: &WeakShared) -> Result<(), JsValue> {
        self.stop_sampler();
        self.listeners.detach("move");
        self.listeners.detach("end");
        self.controller.drag_end(now_ms());
        self.sync_buttons()?;
        self.request_frame()?;
        if self.links_inert {
            self.schedule_link_restore(weak)?;
        }
        Ok(())
    }

    /// Re-enable link clicks after a short delay, unless another drag has
    /// started in the meantime.
    fn schedule_link_restore(&self, weak: &WeakShared) -> Result<(), JsValue> {
        let gesture = self.gesture;
        let w = weak.clone();
        let cb = Closure::once_into_js(move || {
            with_inner(&w, |inner, _| {
                if inner.gesture == gesture && !inner.controller.is_dragging() {
                    inner.links_inert = false;
                }
                Ok(())
            })
        });
        window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            LINK_RESTORE_DELAY_MS,
        )?;
        Ok(())
    }

    // ── Controls and resize ──────────────────────────────────────────────────

    fn shift(&mut self, step: Step) -> Result<(), JsValue> {
        if self.controller.shift(step, now_ms()) {
            self.request_frame()?;
        }
        Ok(())
    }

    fn remeasure(&mut self) -> Result<(), JsValue> {
        let axis = self.controller.axis();
        if self.controller.remeasure(&dom::measure(&self.container, &self.items, &axis)) {
            self.apply_offset()?;
        }
        if axis.is_horizontal() {
            dom::set_extent(&self.list, &axis, self.controller.geometry().pinned_list_extent())?;
        }
        self.sync_buttons()
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.stop_sampler();
        self.cancel_frame();
        log::debug!("Carousel {} detached", self.id);
    }
}
