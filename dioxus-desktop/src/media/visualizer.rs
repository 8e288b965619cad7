//! Frequency bar visualizer for the music player.

use dioxus_logger::tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AnalyserNode, AudioContext, AudioContextState, CanvasRenderingContext2d, HtmlCanvasElement,
    HtmlMediaElement, MediaElementAudioSourceNode,
};

pub const FFT_SIZE: u32 = 256;
pub const SMOOTHING: f64 = 0.5;
pub const CANVAS_WIDTH: u32 = 380;
pub const CANVAS_HEIGHT: u32 = 40;
/// Share of the frequency bins drawn; the top end is mostly empty
const DRAWN_BIN_PERCENT: usize = 70;
const BAR_COLOR: &str = "#000";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars for one frame of byte frequency data, bottom-aligned in the canvas.
pub fn bar_layout(data: &[u8], width: f64, height: f64) -> Vec<Bar> {
    let count = data.len() * DRAWN_BIN_PERCENT / 100;
    if count == 0 || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let slot = width / count as f64;
    let bar_width = (slot - 1.0).max(1.0);
    data[..count]
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let bar_height = f64::from(*value) / 255.0 * height;
            Bar {
                x: index as f64 * slot,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

/// Web Audio graph: source -> analyser -> destination.
///
/// A media element can only be attached to one source node, so the graph is
/// built once and kept for the lifetime of the page.
pub struct AudioGraph {
    context: AudioContext,
    analyser: AnalyserNode,
    _source: MediaElementAudioSourceNode,
    buffer: Vec<u8>,
}

impl AudioGraph {
    pub fn attach(element: &HtmlMediaElement) -> Result<Self, JsValue> {
        let context = AudioContext::new()?;
        let analyser = context.create_analyser()?;
        analyser.set_fft_size(FFT_SIZE);
        analyser.set_smoothing_time_constant(SMOOTHING);

        let source = context.create_media_element_source(element)?;
        source.connect_with_audio_node(&analyser)?;
        analyser.connect_with_audio_node(&context.destination())?;

        let bins = analyser.frequency_bin_count() as usize;
        debug!("audio graph attached with {bins} bins");
        Ok(Self {
            context,
            analyser,
            _source: source,
            buffer: vec![0; bins],
        })
    }

    /// Browsers start contexts suspended until a gesture.
    pub fn resume(&self) {
        if self.context.state() != AudioContextState::Suspended {
            return;
        }
        if let Err(err) = self.context.resume() {
            warn!("failed to resume audio context: {err:?}");
        }
    }

    pub fn draw(&mut self, canvas: &HtmlCanvasElement) {
        let Some(ctx) = canvas_context(canvas) else {
            return;
        };
        self.analyser.get_byte_frequency_data(&mut self.buffer);

        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_fill_style_str(BAR_COLOR);
        for bar in bar_layout(&self.buffer, width, height) {
            ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
        }
    }
}

pub fn clear(canvas: &HtmlCanvasElement) {
    if let Some(ctx) = canvas_context(canvas) {
        ctx.clear_rect(
            0.0,
            0.0,
            f64::from(canvas.width()),
            f64::from(canvas.height()),
        );
    }
}

fn canvas_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_seventy_percent_of_bins() {
        let data = vec![0u8; 128];
        let bars = bar_layout(&data, 380.0, 40.0);
        assert_eq!(bars.len(), 89);
    }

    #[test]
    fn bars_are_bottom_aligned_and_scaled() {
        let data = [255u8, 0, 51, 102, 204, 255, 10, 20, 30, 40];
        let bars = bar_layout(&data, 70.0, 40.0);
        assert_eq!(bars.len(), 7);

        assert_eq!(bars[0].height, 40.0);
        assert_eq!(bars[0].y, 0.0);
        assert_eq!(bars[1].height, 0.0);
        assert_eq!(bars[1].y, 40.0);
        assert!((bars[2].height - 8.0).abs() < 1e-9);

        for (index, bar) in bars.iter().enumerate() {
            assert_eq!(bar.x, index as f64 * 10.0);
            assert_eq!(bar.width, 9.0);
            assert!((bar.y + bar.height - 40.0).abs() < 1e-9);
        }
    }

    #[test]
    fn narrow_canvas_keeps_visible_bars() {
        let data = [128u8; 100];
        let bars = bar_layout(&data, 35.0, 40.0);
        assert!(bars.iter().all(|b| b.width >= 1.0));
        let last = bars.last().unwrap();
        assert!(last.x < 35.0);
    }

    #[test]
    fn empty_input_draws_nothing() {
        assert!(bar_layout(&[], 380.0, 40.0).is_empty());
        assert!(bar_layout(&[1], 380.0, 40.0).is_empty());
        assert!(bar_layout(&[9; 10], 0.0, 40.0).is_empty());
    }
}
