//! Completion cues: generated tones through rodio plus a desktop notification.
//! Desktop notifications are currently macOS only.

use crate::domain::Mode;
use rodio::source::{SineWave, Source, Zero};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use std::io::{self, Write};
#[cfg(target_os = "macos")]
use std::process::Command;
use std::time::Duration;
use thiserror::Error;

const REST_SAMPLE_RATE: u32 = 44_100;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Failed to initialize audio output: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("Failed to play audio: {0}")]
    Play(#[from] rodio::PlayError),
}

/// Receives one call per finished countdown. Implementations must not fail
/// the caller; anything that goes wrong stays inside the notifier.
pub trait Notifier {
    fn timer_completed(&mut self, mode: Mode);

    /// Stop a cue that is still playing
    fn silence(&mut self) {}
}

/// One tone of a cue followed by silence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beat {
    pub frequency: f32,
    pub tone: Duration,
    pub rest: Duration,
    pub volume: f32,
}

impl Beat {
    fn new(frequency: f32, tone_ms: u64, rest_ms: u64, volume: f32) -> Self {
        Self {
            frequency,
            tone: Duration::from_millis(tone_ms),
            rest: Duration::from_millis(rest_ms),
            volume,
        }
    }

    fn tone_source(&self) -> impl Source<Item = f32> + Send + 'static {
        SineWave::new(self.frequency)
            .take_duration(self.tone)
            .amplify(self.volume)
    }

    fn rest_source(&self) -> impl Source<Item = f32> + Send + 'static {
        Zero::<f32>::new(1, REST_SAMPLE_RATE).take_duration(self.rest)
    }
}

/// Beats for a completion cue.
/// Focus gets a short low drum roll, breaks a steady 800 Hz pulse for five seconds.
pub fn cue_pattern(completed: Mode) -> Vec<Beat> {
    if completed.is_break() {
        return vec![Beat::new(800.0, 300, 200, 0.3); 10];
    }
    [(100.0, 100), (150.0, 100), (100.0, 100), (200.0, 200), (100.0, 100), (150.0, 100), (250.0, 300)]
        .iter()
        .map(|&(frequency, ms)| Beat::new(frequency, ms, 100, 0.4))
        .collect()
}

/// Total playing time of a cue
pub fn cue_duration(beats: &[Beat]) -> Duration {
    beats.iter().map(|b| b.tone + b.rest).sum()
}

fn notification_text(completed: Mode) -> (&'static str, &'static str) {
    match completed {
        Mode::Focus => ("Pomodoro complete! 🍅", "Great work. Time for a break."),
        Mode::ShortBreak | Mode::LongBreak => ("Break over! ☕", "Ready to start another pomodoro?"),
    }
}

/// Open audio output and the sink of the cue currently playing
pub struct AudioCue {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    playing: Option<Sink>,
}

impl AudioCue {
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            playing: None,
        })
    }

    /// Queue a cue on a fresh sink, replacing any cue still playing
    pub fn play(&mut self, beats: &[Beat]) -> Result<(), AudioError> {
        self.stop();

        let sink = Sink::try_new(&self.handle)?;
        for beat in beats {
            sink.append(beat.tone_source());
            sink.append(beat.rest_source());
        }
        self.playing = Some(sink);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(sink) = self.playing.take() {
            sink.stop();
        }
    }
}

/// Plays completion cues through the default audio device. Without one it
/// rings the terminal bell once instead.
pub struct SoundNotifier {
    audio: Option<AudioCue>,
}

impl SoundNotifier {
    pub fn new() -> Self {
        let audio = match AudioCue::new() {
            Ok(audio) => Some(audio),
            Err(e) => {
                tracing::warn!(error = %e, "no audio output, falling back to the terminal bell");
                None
            }
        };
        Self { audio }
    }
}

impl Notifier for SoundNotifier {
    fn timer_completed(&mut self, mode: Mode) {
        send_desktop_notification(mode);

        let beats = cue_pattern(mode);
        let played = match &mut self.audio {
            Some(audio) => match audio.play(&beats) {
                Ok(()) => {
                    tracing::debug!(?mode, length = ?cue_duration(&beats), "playing completion cue");
                    true
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to play completion cue");
                    false
                }
            },
            None => false,
        };

        // Called from the event loop between frames, so the bell never
        // lands inside a frame's escape sequences
        if !played {
            if let Err(e) = ring_bell(&mut io::stdout().lock()) {
                tracing::warn!(error = %e, "failed to ring terminal bell");
            }
        }
    }

    fn silence(&mut self) {
        if let Some(audio) = &mut self.audio {
            audio.stop();
        }
    }
}

fn ring_bell<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(b"\x07")?;
    out.flush()
}

/// Post a desktop notification for a finished countdown
fn send_desktop_notification(completed: Mode) {
    let (title, body) = notification_text(completed);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "{}""#,
            body.replace('"', "\\\""),
            title.replace('"', "\\\"")
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).spawn() {
            tracing::warn!(error = %e, "failed to post desktop notification");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = (title, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_count(source: impl Source<Item = f32>) -> (usize, usize) {
        let per_sec = source.sample_rate() as usize * source.channels() as usize;
        (source.count(), per_sec)
    }

    #[test]
    fn test_focus_cue_is_short_drum_roll() {
        let focus = cue_pattern(Mode::Focus);
        let rest = cue_pattern(Mode::ShortBreak);

        assert_eq!(focus.len(), 7);
        assert!(focus.iter().all(|b| (100.0..=250.0).contains(&b.frequency)));
        assert_eq!(cue_duration(&focus), Duration::from_millis(1700));
        assert!(cue_duration(&focus) < cue_duration(&rest));
    }

    #[test]
    fn test_break_cue_pulses_for_five_seconds() {
        let beats = cue_pattern(Mode::LongBreak);

        assert_eq!(beats, cue_pattern(Mode::ShortBreak));
        assert_eq!(beats.len(), 10);
        assert!(beats.iter().all(|b| b.frequency == 800.0));
        assert!(beats.iter().all(|b| b.tone + b.rest == Duration::from_millis(500)));
        assert_eq!(cue_duration(&beats), Duration::from_secs(5));
    }

    #[test]
    fn test_beat_sources_match_their_durations() {
        let beat = Beat::new(200.0, 200, 100, 0.4);

        let (tone, per_sec) = sample_count(beat.tone_source());
        assert!(tone.abs_diff(per_sec / 5) <= 2, "tone samples {}", tone);

        let (rest, per_sec) = sample_count(beat.rest_source());
        assert!(rest.abs_diff(per_sec / 10) <= 2, "rest samples {}", rest);
    }

    #[test]
    fn test_notification_text_differs_per_mode() {
        assert_ne!(notification_text(Mode::Focus), notification_text(Mode::ShortBreak));
        assert_eq!(notification_text(Mode::ShortBreak), notification_text(Mode::LongBreak));
    }

    #[test]
    fn test_bell_fallback_writes_single_bel() {
        let mut out = Vec::new();
        ring_bell(&mut out).unwrap();
        assert_eq!(out, b"\x07");
    }

    #[test]
    fn test_silence_without_audio_is_harmless() {
        let mut notifier = SoundNotifier { audio: None };
        notifier.silence();
        assert!(notifier.audio.is_none());
    }
}
