use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use shared_types::PlaybackState;
use web_sys::HtmlCanvasElement;

use crate::content::Track;
use crate::interop::now_ms;
use crate::media::controller::MediaController;
use crate::media::element::{PlayOutbox, WebMediaElement};
use crate::media::retry::RetryPolicy;
use crate::media::visualizer::{self, AudioGraph};

pub const AUDIO_ELEMENT_ID: &str = "yurios-audio";
pub const VIDEO_ELEMENT_ID: &str = "yurios-video";

/// Shared handle to the page's single media controller.
///
/// Every mutation goes through [`update`](Self::update), which republishes the
/// playback snapshot so components reading [`playback`](Self::playback)
/// re-render.
#[derive(Clone)]
pub struct MediaSession {
    controller: Rc<RefCell<MediaController<WebMediaElement>>>,
    outbox: PlayOutbox,
    graph: Rc<RefCell<Option<AudioGraph>>>,
    playback: Signal<PlaybackState>,
    cooling_down: Signal<bool>,
}

impl MediaSession {
    pub fn new(
        tracks: Vec<Track>,
        playback: Signal<PlaybackState>,
        cooling_down: Signal<bool>,
    ) -> Self {
        let outbox: PlayOutbox = Rc::new(RefCell::new(VecDeque::new()));
        let controller = MediaController::new(
            WebMediaElement::new(AUDIO_ELEMENT_ID, outbox.clone()),
            WebMediaElement::new(VIDEO_ELEMENT_ID, outbox.clone()),
            tracks,
            RetryPolicy::default(),
        );
        Self {
            controller: Rc::new(RefCell::new(controller)),
            outbox,
            graph: Rc::new(RefCell::new(None)),
            playback,
            cooling_down,
        }
    }

    pub fn playback(&self) -> Signal<PlaybackState> {
        self.playback
    }

    pub fn cooling_down(&self) -> Signal<bool> {
        self.cooling_down
    }

    pub fn update<R>(
        &self,
        f: impl FnOnce(&mut MediaController<WebMediaElement>, f64) -> R,
    ) -> R {
        let now = now_ms();
        let (result, snapshot, cooling) = {
            let mut controller = self.controller.borrow_mut();
            let result = f(&mut controller, now);
            (
                result,
                controller.state().clone(),
                controller.is_cooling_down(now),
            )
        };
        self.publish(snapshot, cooling);
        result
    }

    /// Feed settled play promises back and fire due deadlines.
    pub fn pump(&self) {
        let outcomes: Vec<_> = self.outbox.borrow_mut().drain(..).collect();
        self.update(|controller, now| {
            for outcome in outcomes {
                controller.on_play_outcome(outcome, now);
            }
            controller.poll(now);
        });
    }

    /// Play or pause from the player controls, waking the audio graph first.
    pub fn toggle_play(&self) {
        self.ensure_graph();
        self.update(|controller, _| controller.toggle_play());
    }

    /// Clicks and key presses may lift a browser autoplay block.
    pub fn on_user_gesture(&self) {
        if !self.playback.peek().is_active() {
            return;
        }
        self.ensure_graph();
        self.update(|controller, _| controller.on_user_gesture());
    }

    pub fn play_item(&self, id: &str) -> bool {
        self.ensure_graph();
        self.update(|controller, _| controller.play_item(id))
    }

    pub fn ensure_graph(&self) {
        let mut graph = self.graph.borrow_mut();
        if graph.is_none() {
            let element = self.controller.borrow().audio().element();
            let Some(element) = element else {
                return;
            };
            match AudioGraph::attach(&element) {
                Ok(attached) => *graph = Some(attached),
                Err(err) => {
                    warn!("visualizer unavailable: {err:?}");
                    return;
                }
            }
        }
        if let Some(graph) = graph.as_ref() {
            graph.resume();
        }
    }

    pub fn draw(&self, canvas: &HtmlCanvasElement) {
        match self.graph.borrow_mut().as_mut() {
            Some(graph) => graph.draw(canvas),
            None => visualizer::clear(canvas),
        }
    }

    fn publish(&self, snapshot: PlaybackState, cooling: bool) {
        let mut playback = self.playback;
        if *playback.peek() != snapshot {
            playback.set(snapshot);
        }
        let mut cooling_down = self.cooling_down;
        if *cooling_down.peek() != cooling {
            cooling_down.set(cooling);
        }
    }
}
