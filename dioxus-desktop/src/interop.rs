use dioxus::prelude::{InteractionLocation, PointerEvent};
use dioxus_web::WebEventExt;
use shared_types::Point;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, HtmlCanvasElement};

/// Get the browser viewport dimensions
pub fn get_viewport_size() -> Option<(u32, u32)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width.max(0.0) as u32, height.max(0.0) as u32))
}

/// Get the desktop canvas size in CSS pixels.
pub fn get_desktop_canvas_size() -> Option<(i32, i32)> {
    let document = window()?.document()?;
    let canvas = document.query_selector(".desktop-canvas").ok()??;
    let width = canvas.client_width();
    let height = canvas.client_height();
    if width > 0 && height > 0 {
        Some((width, height))
    } else {
        None
    }
}

pub fn pointer_point(e: &PointerEvent) -> Point {
    if let Some((x, y)) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| (pointer.client_x(), pointer.client_y()))
    }) {
        return Point::new(x, y);
    }

    let point = e.data().client_coordinates();
    Point::new(point.x as i32, point.y as i32)
}

fn pointer_element(e: &PointerEvent, selector: &str) -> Option<web_sys::Element> {
    e.data()
        .try_as_web_event()?
        .current_target()?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// Route further events of `pointer_id` to the closest `selector` ancestor.
pub fn capture_pointer(e: &PointerEvent, selector: &str, pointer_id: i32) {
    if let Some(element) = pointer_element(e, selector) {
        let _ = element.set_pointer_capture(pointer_id);
    }
}

pub fn release_pointer(e: &PointerEvent, selector: &str, pointer_id: i32) {
    if let Some(element) = pointer_element(e, selector) {
        let _ = element.release_pointer_capture(pointer_id);
    }
}

pub fn canvas_by_id(id: &str) -> Option<HtmlCanvasElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

/// Append a `<script>` to `<body>` unless one with `id` already exists.
/// Returns true when a script was added.
pub fn inject_script_once(id: &str, src: &str) -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    if document.get_element_by_id(id).is_some() {
        return false;
    }
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(script) = document.create_element("script") else {
        return false;
    };
    script.set_id(id);
    let _ = script.set_attribute("src", src);
    let _ = script.set_attribute("async", "");
    body.append_child(&script).is_ok()
}

pub fn reload_page() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}

/// Milliseconds on the page's monotonic clock
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Window-level event listener that is removed when dropped.
pub struct WindowListener {
    events: &'static [&'static str],
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(events: &'static [&'static str], handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let registered = register_all(
            events,
            |event| {
                window
                    .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                    .is_ok()
            },
            |event| {
                let _ = window
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            },
        );
        if registered {
            Some(Self { events, callback })
        } else {
            None
        }
    }
}

/// Add every event, or none: on the first failure the ones already added are
/// removed again.
fn register_all<A, R>(events: &[&str], mut add: A, mut remove: R) -> bool
where
    A: FnMut(&str) -> bool,
    R: FnMut(&str),
{
    for (index, event) in events.iter().enumerate() {
        if !add(event) {
            for added in &events[..index] {
                remove(added);
            }
            return false;
        }
    }
    true
}

fn remove_listeners(
    window: &web_sys::Window,
    events: &[&str],
    callback: &Closure<dyn FnMut(Event)>,
) {
    for event in events {
        let _ = window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            remove_listeners(&window, self.events, &self.callback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_registration_unhooks_earlier_events() {
        let mut added = Vec::new();
        let mut removed = Vec::new();
        let ok = register_all(
            &["keydown", "click", "resize"],
            |event| {
                added.push(event.to_string());
                event != "click"
            },
            |event| removed.push(event.to_string()),
        );

        assert!(!ok);
        assert_eq!(added, ["keydown", "click"]);
        assert_eq!(removed, ["keydown"]);
    }

    #[test]
    fn successful_registration_removes_nothing() {
        let mut removed = 0;
        assert!(register_all(&["resize", "orientationchange"], |_| true, |_| removed += 1));
        assert_eq!(removed, 0);
    }
}
