use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaTarget {
    Audio,
    Video,
}

/// Identifies which play request a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayTicket {
    pub target: MediaTarget,
    /// Session generation the request was made in
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayOutcome {
    pub ticket: PlayTicket,
    pub result: Result<(), MediaError>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("Playback rejected ({name}): {message}")]
    Rejected { name: String, message: String },

    #[error("Media element not found: {0}")]
    ElementMissing(String),

    #[error("Media source failed to load: {0}")]
    SourceFailed(String),
}

impl MediaError {
    /// Autoplay policy refusals are expected until the user interacts.
    pub fn is_autoplay_block(&self) -> bool {
        matches!(self, MediaError::Rejected { name, .. } if name == "NotAllowedError")
    }
}

/// Playback engine seam used by the media controller.
///
/// `play` is fire-and-forget: the result is delivered later as a
/// [`PlayOutcome`] carrying the same ticket.
pub trait MediaElement {
    fn load(&mut self, src: &str);
    fn unload(&mut self);
    fn play(&mut self, ticket: PlayTicket);
    fn pause(&mut self);
    fn seek(&mut self, seconds: f64);
    fn has_source(&self) -> bool;
    fn current_time(&self) -> f64;
    fn duration(&self) -> f64;
}

/// Queue of settled play promises, drained by the shell's media pump.
pub type PlayOutbox = Rc<RefCell<VecDeque<PlayOutcome>>>;

/// `<audio>`/`<video>` element looked up by DOM id on every call, so the
/// controller can exist before the element is mounted.
pub struct WebMediaElement {
    element_id: &'static str,
    outbox: PlayOutbox,
}

impl WebMediaElement {
    pub fn new(element_id: &'static str, outbox: PlayOutbox) -> Self {
        Self { element_id, outbox }
    }

    pub fn element(&self) -> Option<HtmlMediaElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(self.element_id)?
            .dyn_into::<HtmlMediaElement>()
            .ok()
    }

    fn settle(&self, ticket: PlayTicket, result: Result<(), MediaError>) {
        self.outbox
            .borrow_mut()
            .push_back(PlayOutcome { ticket, result });
    }
}

impl MediaElement for WebMediaElement {
    fn load(&mut self, src: &str) {
        if let Some(element) = self.element() {
            element.set_src(src);
            element.load();
        }
    }

    fn unload(&mut self) {
        if let Some(element) = self.element() {
            // An empty src fires `error`; dropping the attribute resets quietly.
            let _ = element.remove_attribute("src");
            element.load();
        }
    }

    fn play(&mut self, ticket: PlayTicket) {
        let Some(element) = self.element() else {
            self.settle(
                ticket,
                Err(MediaError::ElementMissing(self.element_id.to_string())),
            );
            return;
        };

        match element.play() {
            Ok(promise) => {
                let outbox = self.outbox.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = JsFuture::from(promise)
                        .await
                        .map(|_| ())
                        .map_err(rejection_from_js);
                    outbox
                        .borrow_mut()
                        .push_back(PlayOutcome { ticket, result });
                });
            }
            Err(err) => self.settle(ticket, Err(rejection_from_js(err))),
        }
    }

    fn pause(&mut self) {
        if let Some(element) = self.element() {
            let _ = element.pause();
        }
    }

    fn seek(&mut self, seconds: f64) {
        if let Some(element) = self.element() {
            element.set_current_time(seconds);
        }
    }

    fn has_source(&self) -> bool {
        self.element()
            .and_then(|element| element.get_attribute("src"))
            .is_some_and(|src| !src.is_empty())
    }

    fn current_time(&self) -> f64 {
        self.element().map(|e| e.current_time()).unwrap_or(0.0)
    }

    fn duration(&self) -> f64 {
        self.element().map(|e| e.duration()).unwrap_or(0.0)
    }
}

fn rejection_from_js(value: JsValue) -> MediaError {
    match value.dyn_ref::<web_sys::DomException>() {
        Some(exception) => MediaError::Rejected {
            name: exception.name(),
            message: exception.message(),
        },
        None => MediaError::Rejected {
            name: "Error".to_string(),
            message: format!("{value:?}"),
        },
    }
}
