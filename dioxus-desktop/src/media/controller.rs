//! Media session controller.
//!
//! Owns the audio and background-video elements of the single active session.
//! Every write to either element goes through here. Time is passed in as
//! milliseconds so deadlines (autoplay delay, retries, navigation cool-down)
//! are driven by the caller's clock.

use dioxus_logger::tracing::{debug, info, warn};
use shared_types::PlaybackState;

use crate::content::Track;
use crate::media::element::{MediaElement, MediaError, MediaTarget, PlayOutcome, PlayTicket};
use crate::media::retry::RetryPolicy;

/// Wait after `canplaythrough` so the paired video has a head start
pub const AUTOPLAY_DELAY_MS: f64 = 800.0;
/// Absorbs repeated prev/next input while the video transition plays
pub const NAVIGATION_COOLDOWN_MS: f64 = 2_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct RetryState {
    failures: u32,
    due_at: Option<f64>,
}

impl RetryState {
    fn take_due(&mut self, now_ms: f64) -> bool {
        match self.due_at {
            Some(at) if now_ms >= at => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}

pub struct MediaController<M: MediaElement> {
    audio: M,
    video: M,
    tracks: Vec<Track>,
    policy: RetryPolicy,
    state: PlaybackState,
    generation: u64,
    /// The session should be playing (autoplay pending or user pressed play)
    wants_play: bool,
    autoplay_at: Option<f64>,
    cooldown_until: Option<f64>,
    audio_retry: RetryState,
    video_retry: RetryState,
}

impl<M: MediaElement> MediaController<M> {
    pub fn new(audio: M, video: M, tracks: Vec<Track>, policy: RetryPolicy) -> Self {
        Self {
            audio,
            video,
            tracks,
            policy,
            state: PlaybackState::default(),
            generation: 0,
            wants_play: false,
            autoplay_at: None,
            cooldown_until: None,
            audio_retry: RetryState::default(),
            video_retry: RetryState::default(),
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn audio(&self) -> &M {
        &self.audio
    }

    pub fn video(&self) -> &M {
        &self.video
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_cooling_down(&self, now_ms: f64) -> bool {
        self.cooldown_until.is_some_and(|until| now_ms < until)
    }

    /// Make `id` the active track. Unknown ids are ignored.
    pub fn play_item(&mut self, id: &str) -> bool {
        if self.state.active.as_deref() == Some(id) {
            return true;
        }
        let Some(track) = self.tracks.iter().find(|t| t.id == id).cloned() else {
            debug!("ignoring unknown track id {id}");
            return false;
        };
        self.begin_session(track);
        true
    }

    /// End the session and halt both elements.
    pub fn stop(&mut self) {
        self.generation += 1;
        self.clear_pending();
        self.wants_play = false;
        self.cooldown_until = None;

        self.audio.pause();
        self.audio.seek(0.0);
        self.audio.unload();
        self.reset_video();

        self.state = PlaybackState::default();
    }

    pub fn pause(&mut self) {
        self.wants_play = false;
        self.clear_pending();
        self.audio.pause();
        self.video.pause();
        self.state.playing = false;
    }

    pub fn resume(&mut self) {
        if !self.state.is_active() {
            return;
        }
        self.wants_play = true;
        self.audio_retry = RetryState::default();
        self.request_audio_play();
    }

    pub fn toggle_play(&mut self) {
        if self.state.playing {
            self.pause();
        } else {
            self.resume();
        }
    }

    pub fn next(&mut self, now_ms: f64) -> bool {
        self.navigate(Direction::Next, now_ms)
    }

    pub fn previous(&mut self, now_ms: f64) -> bool {
        self.navigate(Direction::Previous, now_ms)
    }

    pub fn current_index(&self) -> Option<usize> {
        let active = self.state.active.as_deref()?;
        self.tracks.iter().position(|t| t.id == active)
    }

    pub fn on_audio_can_play_through(&mut self, now_ms: f64) {
        if self.state.is_active() && self.wants_play && !self.state.playing {
            self.autoplay_at = Some(now_ms + AUTOPLAY_DELAY_MS);
        }
    }

    pub fn on_audio_ended(&mut self) {
        self.wants_play = false;
        self.state.playing = false;
        self.video.pause();
    }

    /// Missing or broken source: nothing left to play.
    pub fn on_audio_error(&mut self) -> Option<MediaError> {
        let active = self.state.active.clone()?;
        let src = self
            .tracks
            .iter()
            .find(|track| track.id == active)
            .map(|track| track.src.clone())
            .unwrap_or(active);
        let err = MediaError::SourceFailed(src);
        warn!("{err}, ending session");
        self.stop();
        Some(err)
    }

    pub fn on_progress(&mut self) {
        self.state.current_time = finite_or_zero(self.audio.current_time());
        self.state.duration = finite_or_zero(self.audio.duration());
    }

    /// `canplay` / `loadeddata` / `loadedmetadata` on the video.
    pub fn on_video_ready(&mut self) {
        if !self.video.has_source() {
            return;
        }
        if self.state.playing {
            self.video_retry = RetryState::default();
            self.request_video_play();
        } else {
            self.video.pause();
        }
    }

    pub fn on_video_ended(&mut self) {
        if self.state.playing && self.video.has_source() {
            self.video.seek(0.0);
            self.request_video_play();
        }
    }

    /// Any click or key press counts as a gesture that may lift autoplay blocks.
    /// Only attempts the browser already refused are retried; a pending
    /// autoplay keeps waiting for readiness.
    pub fn on_user_gesture(&mut self) {
        if !self.state.is_active() {
            return;
        }
        if self.wants_play && !self.state.playing {
            if self.audio_retry.failures > 0 {
                self.request_audio_play();
            }
        } else if self.state.playing && self.video_retry.failures > 0 && self.video.has_source() {
            self.request_video_play();
        }
    }

    pub fn on_play_outcome(&mut self, outcome: PlayOutcome, now_ms: f64) {
        if outcome.ticket.generation != self.generation {
            debug!("dropping play result from a previous session");
            return;
        }

        match (outcome.ticket.target, outcome.result) {
            (MediaTarget::Audio, Ok(())) => {
                if !self.wants_play {
                    self.audio.pause();
                    return;
                }
                self.audio_retry = RetryState::default();
                self.state.playing = true;
                self.video_retry = RetryState::default();
                self.request_video_play();
            }
            (MediaTarget::Audio, Err(err)) => {
                self.state.playing = false;
                self.video.pause();
                if err.is_autoplay_block() {
                    info!("autoplay prevented by browser: {err}");
                } else {
                    info!("audio play failed: {err}");
                }
                if self.wants_play {
                    Self::schedule_retry(&self.policy, &mut self.audio_retry, now_ms);
                }
            }
            (MediaTarget::Video, Ok(())) => {
                self.video_retry = RetryState::default();
            }
            (MediaTarget::Video, Err(err)) => {
                info!("video play failed: {err}");
                if self.state.playing {
                    Self::schedule_retry(&self.policy, &mut self.video_retry, now_ms);
                }
            }
        }
    }

    /// Fire deadlines that have passed. Returns true when anything changed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let mut fired = false;

        if let Some(at) = self.autoplay_at {
            if now_ms >= at {
                self.autoplay_at = None;
                fired = true;
                if self.wants_play && !self.state.playing {
                    self.request_audio_play();
                }
            }
        }

        if self.audio_retry.take_due(now_ms) {
            fired = true;
            if self.wants_play && !self.state.playing {
                debug!("retrying audio play");
                self.request_audio_play();
            }
        }

        if self.video_retry.take_due(now_ms) {
            fired = true;
            if self.state.playing && self.video.has_source() {
                debug!("retrying video play");
                self.request_video_play();
            }
        }

        if let Some(until) = self.cooldown_until {
            if now_ms >= until {
                self.cooldown_until = None;
                fired = true;
            }
        }

        fired
    }

    fn navigate(&mut self, direction: Direction, now_ms: f64) -> bool {
        let len = self.tracks.len();
        if len == 0 || self.is_cooling_down(now_ms) {
            return false;
        }

        self.pause();
        let index = match (direction, self.current_index()) {
            (Direction::Next, Some(i)) => (i + 1) % len,
            (Direction::Next, None) => 0,
            (Direction::Previous, Some(i)) => (i + len - 1) % len,
            (Direction::Previous, None) => len - 1,
        };
        let track = self.tracks[index].clone();
        self.begin_session(track);
        self.cooldown_until = Some(now_ms + NAVIGATION_COOLDOWN_MS);
        true
    }

    fn begin_session(&mut self, track: Track) {
        self.generation += 1;
        self.clear_pending();

        self.audio.pause();
        self.audio.seek(0.0);
        self.audio.load(&track.src);
        match track.video_src.as_deref() {
            Some(video) => self.video.load(video),
            None => self.reset_video(),
        }

        self.state = PlaybackState {
            active: Some(track.id),
            title: Some(track.title),
            video_src: track.video_src,
            playing: false,
            current_time: 0.0,
            duration: 0.0,
        };
        self.wants_play = true;
    }

    fn reset_video(&mut self) {
        self.video.pause();
        self.video.seek(0.0);
        self.video.unload();
    }

    fn clear_pending(&mut self) {
        self.autoplay_at = None;
        self.audio_retry = RetryState::default();
        self.video_retry = RetryState::default();
    }

    fn ticket(&self, target: MediaTarget) -> PlayTicket {
        PlayTicket {
            target,
            generation: self.generation,
        }
    }

    fn request_audio_play(&mut self) {
        let ticket = self.ticket(MediaTarget::Audio);
        self.audio.play(ticket);
    }

    fn request_video_play(&mut self) {
        if self.state.video_src.is_none() || !self.video.has_source() {
            return;
        }
        let ticket = self.ticket(MediaTarget::Video);
        self.video.play(ticket);
    }

    fn schedule_retry(policy: &RetryPolicy, retry: &mut RetryState, now_ms: f64) {
        retry.failures += 1;
        match policy.delay_after(retry.failures) {
            Some(delay) => retry.due_at = Some(now_ms + f64::from(delay)),
            None => {
                retry.due_at = None;
                debug!("play retries exhausted after {} attempts", retry.failures);
            }
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// `mm:ss`, with `00:00` for unknown or zero durations.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Title line of the player: dashes become spaces, uppercased.
pub fn display_title(title: &str) -> String {
    title.replace('-', " ").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Load(String),
        Unload,
        Play(PlayTicket),
        Pause,
        Seek(f64),
    }

    #[derive(Debug, Default)]
    struct FakeMedia {
        calls: Vec<Call>,
        src: Option<String>,
        time: f64,
        duration: f64,
    }

    impl FakeMedia {
        fn plays(&self) -> Vec<PlayTicket> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Play(t) => Some(*t),
                    _ => None,
                })
                .collect()
        }

        fn last_play(&self) -> PlayTicket {
            *self.plays().last().expect("a play request")
        }
    }

    impl MediaElement for FakeMedia {
        fn load(&mut self, src: &str) {
            self.src = Some(src.to_string());
            self.calls.push(Call::Load(src.to_string()));
        }
        fn unload(&mut self) {
            self.src = None;
            self.calls.push(Call::Unload);
        }
        fn play(&mut self, ticket: PlayTicket) {
            self.calls.push(Call::Play(ticket));
        }
        fn pause(&mut self) {
            self.calls.push(Call::Pause);
        }
        fn seek(&mut self, seconds: f64) {
            self.time = seconds;
            self.calls.push(Call::Seek(seconds));
        }
        fn has_source(&self) -> bool {
            self.src.is_some()
        }
        fn current_time(&self) -> f64 {
            self.time
        }
        fn duration(&self) -> f64 {
            self.duration
        }
    }

    fn track(id: &str, video: Option<&str>) -> Track {
        Track {
            id: id.to_string(),
            title: format!("{id}.mp3"),
            src: format!("/media/{id}.mp3"),
            video_src: video.map(str::to_string),
        }
    }

    fn controller() -> MediaController<FakeMedia> {
        MediaController::new(
            FakeMedia::default(),
            FakeMedia::default(),
            vec![
                track("ec2a-test", Some("/media/ec2avideo.mp4")),
                track("whisper", Some("/media/whisper.mp4")),
                track("silent", None),
            ],
            RetryPolicy::default(),
        )
    }

    fn ok(ticket: PlayTicket) -> PlayOutcome {
        PlayOutcome {
            ticket,
            result: Ok(()),
        }
    }

    fn blocked(ticket: PlayTicket) -> PlayOutcome {
        PlayOutcome {
            ticket,
            result: Err(MediaError::Rejected {
                name: "NotAllowedError".to_string(),
                message: "play() requires a user gesture".to_string(),
            }),
        }
    }

    /// Drive a freshly activated track to the playing state.
    fn start_playing(media: &mut MediaController<FakeMedia>, now: f64) {
        media.on_audio_can_play_through(now);
        assert!(media.poll(now + AUTOPLAY_DELAY_MS));
        let ticket = media.audio().last_play();
        media.on_play_outcome(ok(ticket), now + AUTOPLAY_DELAY_MS);
        assert!(media.state().playing);
    }

    #[test]
    fn play_item_records_session_and_pairs_video() {
        let mut media = controller();
        assert!(media.play_item("whisper"));

        let state = media.state();
        assert_eq!(state.active.as_deref(), Some("whisper"));
        assert_eq!(state.video_src.as_deref(), Some("/media/whisper.mp4"));
        assert!(!state.playing);
        assert_eq!(media.audio().src.as_deref(), Some("/media/whisper.mp3"));
        assert_eq!(media.video().src.as_deref(), Some("/media/whisper.mp4"));
    }

    #[test]
    fn unknown_item_is_ignored() {
        let mut media = controller();
        assert!(!media.play_item("nope"));
        assert!(!media.state().is_active());
        assert!(media.audio().calls.is_empty());
    }

    #[test]
    fn track_without_video_clears_previous_video() {
        let mut media = controller();
        media.play_item("whisper");
        media.play_item("silent");
        assert_eq!(media.state().video_src, None);
        assert!(!media.video().has_source());
    }

    #[test]
    fn autoplay_waits_for_readiness_delay() {
        let mut media = controller();
        media.play_item("whisper");
        media.on_audio_can_play_through(1_000.0);

        assert!(!media.poll(1_500.0));
        assert!(media.audio().plays().is_empty());

        assert!(media.poll(1_800.0));
        assert_eq!(media.audio().plays().len(), 1);

        let ticket = media.audio().last_play();
        media.on_play_outcome(ok(ticket), 1_810.0);
        assert!(media.state().playing);
        // Video follows the music.
        assert_eq!(media.video().plays().len(), 1);
    }

    #[test]
    fn blocked_autoplay_is_retried_within_budget() {
        let mut media = controller();
        media.play_item("whisper");
        media.on_audio_can_play_through(0.0);
        media.poll(AUTOPLAY_DELAY_MS);

        let mut now = AUTOPLAY_DELAY_MS;
        let mut attempts = 1;
        loop {
            let ticket = media.audio().last_play();
            media.on_play_outcome(blocked(ticket), now);
            assert!(!media.state().playing);
            now += 10_000.0;
            media.poll(now);
            if media.audio().plays().len() == attempts {
                break;
            }
            attempts += 1;
        }
        assert_eq!(attempts, RetryPolicy::default().max_attempts as usize);

        // A later gesture still gets through.
        media.on_user_gesture();
        let ticket = media.audio().last_play();
        media.on_play_outcome(ok(ticket), now);
        assert!(media.state().playing);
    }

    #[test]
    fn gesture_before_autoplay_attempt_does_not_play() {
        let mut media = controller();
        media.play_item("whisper");
        media.on_user_gesture();
        assert!(media.audio().plays().is_empty());

        media.on_audio_can_play_through(0.0);
        media.on_user_gesture();
        assert!(media.audio().plays().is_empty());

        assert!(media.poll(AUTOPLAY_DELAY_MS));
        assert_eq!(media.audio().plays().len(), 1);
    }

    #[test]
    fn gesture_while_playing_leaves_video_alone() {
        let mut media = controller();
        media.play_item("whisper");
        start_playing(&mut media, 0.0);
        let before = media.video().plays().len();

        media.on_user_gesture();
        assert_eq!(media.video().plays().len(), before);

        let ticket = media.video().last_play();
        media.on_play_outcome(blocked(ticket), 1_000.0);
        media.on_user_gesture();
        assert_eq!(media.video().plays().len(), before + 1);
    }

    #[test]
    fn video_rejections_follow_retry_policy() {
        let mut media = controller();
        media.play_item("whisper");
        start_playing(&mut media, 0.0);

        let first = media.video().last_play();
        media.on_play_outcome(blocked(first), 1_000.0);
        assert!(!media.poll(1_050.0));
        assert!(media.poll(1_100.0));
        assert_eq!(media.video().plays().len(), 2);
    }

    #[test]
    fn stale_outcomes_are_dropped() {
        let mut media = controller();
        media.play_item("whisper");
        media.resume();
        let stale = media.audio().last_play();

        media.play_item("ec2a-test");
        media.on_play_outcome(ok(stale), 0.0);
        assert!(!media.state().playing);
        assert_eq!(media.state().active.as_deref(), Some("ec2a-test"));
    }

    #[test]
    fn stop_always_clears_playing_and_video() {
        let scenarios: Vec<fn(&mut MediaController<FakeMedia>)> = vec![
            |_| {},
            |m| {
                m.play_item("whisper");
            },
            |m| {
                m.play_item("whisper");
                start_playing(m, 0.0);
            },
            |m| {
                m.play_item("silent");
                m.resume();
            },
            |m| {
                m.play_item("ec2a-test");
                start_playing(m, 0.0);
                m.pause();
            },
        ];

        for prepare in scenarios {
            let mut media = controller();
            prepare(&mut media);
            media.stop();

            assert!(!media.state().playing);
            assert_eq!(media.state().video_src, None);
            assert!(!media.state().is_active());
            assert!(!media.video().has_source());
            assert!(!media.audio().has_source());
            assert_eq!(media.video().time, 0.0);
        }
    }

    #[test]
    fn next_and_previous_are_cyclic() {
        let mut media = controller();
        let n = media.tracks().len();

        for start in 0..n {
            let id = media.tracks()[start].id.clone();
            media.play_item(&id);
            let mut now = 0.0;
            for _ in 0..n {
                now += NAVIGATION_COOLDOWN_MS;
                assert!(media.next(now));
            }
            assert_eq!(media.current_index(), Some(start));
            for _ in 0..n {
                now += NAVIGATION_COOLDOWN_MS;
                assert!(media.previous(now));
            }
            assert_eq!(media.current_index(), Some(start));
            media.stop();
        }
    }

    #[test]
    fn navigation_without_session_starts_at_ends() {
        let mut media = controller();
        assert!(media.next(0.0));
        assert_eq!(media.current_index(), Some(0));

        media.stop();
        assert!(media.previous(0.0));
        assert_eq!(media.current_index(), Some(2));
    }

    #[test]
    fn navigation_pauses_first_and_cools_down() {
        let mut media = controller();
        media.play_item("ec2a-test");
        start_playing(&mut media, 0.0);
        let audio_calls = media.audio().calls.len();

        assert!(media.next(5_000.0));
        assert!(!media.state().playing);
        assert_eq!(media.audio().calls[audio_calls], Call::Pause);
        assert_eq!(media.state().active.as_deref(), Some("whisper"));

        assert!(media.is_cooling_down(6_000.0));
        assert!(!media.next(6_000.0));
        assert!(!media.previous(6_999.0));
        assert_eq!(media.state().active.as_deref(), Some("whisper"));

        assert!(media.poll(7_000.0));
        assert!(media.next(7_000.0));
        assert_eq!(media.state().active.as_deref(), Some("silent"));
    }

    #[test]
    fn pause_during_pending_play_wins() {
        let mut media = controller();
        media.play_item("whisper");
        media.resume();
        let ticket = media.audio().last_play();
        media.pause();

        media.on_play_outcome(ok(ticket), 0.0);
        assert!(!media.state().playing);
        assert_eq!(media.audio().calls.last(), Some(&Call::Pause));
    }

    #[test]
    fn audio_error_ends_session() {
        let mut media = controller();
        media.play_item("whisper");
        assert_eq!(
            media.on_audio_error(),
            Some(MediaError::SourceFailed("/media/whisper.mp3".to_string()))
        );
        assert!(!media.state().is_active());
        assert!(!media.video().has_source());

        // Errors from an already idle element report nothing.
        assert_eq!(media.on_audio_error(), None);
    }

    #[test]
    fn ended_audio_stops_video_and_ended_video_loops() {
        let mut media = controller();
        media.play_item("whisper");
        start_playing(&mut media, 0.0);

        let video_plays = media.video().plays().len();
        media.on_video_ended();
        assert_eq!(media.video().plays().len(), video_plays + 1);
        assert_eq!(media.video().time, 0.0);

        media.on_audio_ended();
        assert!(!media.state().playing);
        assert_eq!(media.video().calls.last(), Some(&Call::Pause));

        media.on_video_ended();
        assert_eq!(media.video().plays().len(), video_plays + 1);
    }

    #[test]
    fn video_readiness_syncs_with_music() {
        let mut media = controller();
        media.play_item("whisper");
        media.on_video_ready();
        assert!(media.video().plays().is_empty());
        assert_eq!(media.video().calls.last(), Some(&Call::Pause));

        start_playing(&mut media, 0.0);
        let before = media.video().plays().len();
        media.on_video_ready();
        assert_eq!(media.video().plays().len(), before + 1);
    }

    #[test]
    fn progress_ignores_unknown_duration() {
        let mut media = controller();
        media.play_item("whisper");
        media.audio.time = 65.4;
        media.audio.duration = f64::NAN;
        media.on_progress();
        assert_eq!(media.state().current_time, 65.4);
        assert_eq!(media.state().duration, 0.0);
    }

    #[test]
    fn formats_time_and_title() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(65.9), "01:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(display_title("ec2a-test.mp3"), "EC2A TEST.MP3");
    }
}
