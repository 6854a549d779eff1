//! # Voice State Module
//!
//! Drives the scripted voice conversation while the voice screen is open.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Voice Runner Architecture                         │
//! │                                                                         │
//! │  navigate(voice) ──► VoiceState::start() ──► tokio::spawn(run)         │
//! │  navigate(home)  ──► VoiceState::stop()  ──► shutdown signal           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  VoiceRunner (background task, owns the VoiceSession)           │   │
//! │  │                                                                 │   │
//! │  │  loop {                                                         │   │
//! │  │    next_action()                                                │   │
//! │  │      Record ──► select! { sleep(delay) | Mic | shutdown }       │   │
//! │  │      Speak  ──► emit voice://speak                              │   │
//! │  │                 select! { UtteranceFinished(i) | shutdown }     │   │
//! │  │      Done   ──► exit                                            │   │
//! │  │    emit voice://progress                                        │   │
//! │  │  }                                                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Control channel (from commands):                                       │
//! │  • voice_mic_pressed         ──► VoiceControl::Mic                     │
//! │  • voice_utterance_finished  ──► VoiceControl::UtteranceFinished(i)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! At most one runner exists. Starting a new one shuts the previous one down,
//! and dropping a handle has the same effect as stopping it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use krave_core::voice::{VoiceAction, VoiceProgress, VoiceSession};
use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

pub const PROGRESS_EVENT: &str = "voice://progress";
pub const SPEAK_EVENT: &str = "voice://speak";

// =============================================================================
// Events
// =============================================================================

/// Payload of `voice://speak`. The WebView feeds it to `speechSynthesis` and
/// answers with `voice_utterance_finished(index)` when the utterance ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakRequest {
    pub index: usize,
    pub text: String,
    /// BCP 47 tag, `en-US` or `ur-PK`.
    pub lang: String,
}

/// Where the runner reports to.
pub trait VoiceEvents: Send + Sync {
    fn emit_progress(&self, progress: &VoiceProgress);
    fn emit_speak(&self, request: &SpeakRequest);
}

/// Emits runner events to the WebView.
pub struct TauriVoiceEvents {
    app_handle: AppHandle,
}

impl TauriVoiceEvents {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl VoiceEvents for TauriVoiceEvents {
    fn emit_progress(&self, progress: &VoiceProgress) {
        if let Err(e) = self.app_handle.emit(PROGRESS_EVENT, progress) {
            error!(?e, "Failed to emit voice://progress event");
        }
    }

    fn emit_speak(&self, request: &SpeakRequest) {
        if let Err(e) = self.app_handle.emit(SPEAK_EVENT, request) {
            error!(?e, "Failed to emit voice://speak event");
        }
        debug!(index = request.index, lang = %request.lang, "Emitted voice://speak");
    }
}

// =============================================================================
// Runner
// =============================================================================

/// Input from the UI while a runner is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceControl {
    Mic,
    UtteranceFinished(usize),
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Stop,
}

struct VoiceRunner {
    session: VoiceSession,
    events: Arc<dyn VoiceEvents>,
    control_rx: mpsc::UnboundedReceiver<VoiceControl>,
    shutdown_rx: mpsc::Receiver<()>,
    progress_tx: watch::Sender<VoiceProgress>,
}

impl VoiceRunner {
    async fn run(mut self) {
        info!(language = ?self.session.language(), "Voice runner started");

        loop {
            let action = self.session.next_action();
            self.publish();

            let step = match action {
                VoiceAction::Done => {
                    info!("Voice script finished");
                    return;
                }
                VoiceAction::Record { index, delay_ms } => self.record(index, delay_ms).await,
                VoiceAction::Speak { index, text, lang } => {
                    self.events.emit_speak(&SpeakRequest {
                        index,
                        text,
                        lang: lang.to_string(),
                    });
                    self.speak(index).await
                }
            };

            if step == Step::Stop {
                info!("Voice runner cancelled");
                return;
            }
        }
    }

    /// Waits out the recording animation for a user line.
    async fn record(&mut self, index: usize, delay_ms: u64) -> Step {
        let delay = tokio::time::sleep(Duration::from_millis(delay_ms));
        tokio::pin!(delay);

        loop {
            tokio::select! {
                biased;

                _ = self.shutdown_rx.recv() => return Step::Stop,

                _ = &mut delay => {
                    self.session.complete_current();
                    return Step::Continue;
                }

                control = self.control_rx.recv() => match control {
                    Some(VoiceControl::Mic) => {
                        if self.session.start_from_mic() {
                            debug!(index, "Mic pressed, first line revealed");
                            return Step::Continue;
                        }
                    }
                    Some(other) => debug!(?other, index, "Ignoring voice control while recording"),
                    None => return Step::Stop,
                },
            }
        }
    }

    /// Waits for the UI to report that line `index` has been spoken.
    async fn speak(&mut self, index: usize) -> Step {
        loop {
            tokio::select! {
                biased;

                _ = self.shutdown_rx.recv() => return Step::Stop,

                control = self.control_rx.recv() => match control {
                    Some(VoiceControl::UtteranceFinished(done)) if done == index => {
                        self.session.complete_current();
                        return Step::Continue;
                    }
                    Some(other) => debug!(?other, index, "Ignoring voice control while speaking"),
                    None => return Step::Stop,
                },
            }
        }
    }

    fn publish(&self) {
        let progress = self.session.progress();
        self.events.emit_progress(&progress);
        self.progress_tx.send_replace(progress);
    }
}

/// Handle to a running voice script.
#[derive(Debug)]
pub struct VoiceRunnerHandle {
    control_tx: mpsc::UnboundedSender<VoiceControl>,
    shutdown_tx: mpsc::Sender<()>,
    progress_rx: watch::Receiver<VoiceProgress>,
    task: JoinHandle<()>,
}

impl VoiceRunnerHandle {
    /// Spawns a runner for `session`. Must be called inside a tokio runtime.
    pub fn spawn(session: VoiceSession, events: Arc<dyn VoiceEvents>) -> Self {
        let (control_tx, control_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let (progress_tx, progress_rx) = watch::channel(session.progress());

        let runner = VoiceRunner {
            session,
            events,
            control_rx,
            shutdown_rx,
            progress_tx,
        };
        let task = tokio::spawn(runner.run());

        VoiceRunnerHandle {
            control_tx,
            shutdown_tx,
            progress_rx,
            task,
        }
    }

    /// Forwards UI input. Returns false once the runner has exited.
    pub fn send(&self, control: VoiceControl) -> bool {
        self.control_tx.send(control).is_ok()
    }

    /// Latest published progress.
    pub fn progress(&self) -> VoiceProgress {
        self.progress_rx.borrow().clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signals the runner to stop at its next await point.
    pub fn stop(self) {
        // Fails only if the runner already exited.
        let _ = self.shutdown_tx.try_send(());
    }
}

// =============================================================================
// Managed State
// =============================================================================

/// Voice state managed by Tauri.
#[derive(Debug, Default)]
pub struct VoiceState {
    runner: Arc<Mutex<Option<VoiceRunnerHandle>>>,
}

impl VoiceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts playing `session`, cancelling any previous runner.
    pub fn start(&self, session: VoiceSession, events: Arc<dyn VoiceEvents>) {
        let handle = VoiceRunnerHandle::spawn(session, events);
        let previous = self
            .runner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);

        if let Some(previous) = previous {
            debug!("Replacing running voice script");
            previous.stop();
        }
    }

    /// Stops the runner. Returns true if one was active.
    pub fn stop(&self) -> bool {
        let handle = self
            .runner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match handle {
            Some(handle) => {
                handle.stop();
                true
            }
            None => false,
        }
    }

    /// Forwards UI input to the active runner. Returns false if there is none.
    pub fn send(&self, control: VoiceControl) -> bool {
        self.runner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| handle.send(control))
    }

    pub fn progress(&self) -> Option<VoiceProgress> {
        self.runner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(VoiceRunnerHandle::progress)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use krave_core::Language;
    use tokio::time::sleep;

    #[derive(Default)]
    struct RecordingEvents {
        progress: Mutex<Vec<VoiceProgress>>,
        spoken: Mutex<Vec<SpeakRequest>>,
    }

    impl RecordingEvents {
        fn spoken_indices(&self) -> Vec<usize> {
            self.spoken.lock().unwrap().iter().map(|r| r.index).collect()
        }

        fn last_progress(&self) -> VoiceProgress {
            self.progress.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl VoiceEvents for RecordingEvents {
        fn emit_progress(&self, progress: &VoiceProgress) {
            self.progress.lock().unwrap().push(progress.clone());
        }

        fn emit_speak(&self, request: &SpeakRequest) {
            self.spoken.lock().unwrap().push(request.clone());
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_line_waits_for_record_delay() {
        let events = Arc::new(RecordingEvents::default());
        let handle = VoiceRunnerHandle::spawn(VoiceSession::new(Language::English, 2000), events.clone());

        sleep(ms(1999)).await;
        assert!(events.spoken_indices().is_empty());
        assert!(handle.progress().recording);
        assert_eq!(handle.progress().visible, 0);

        sleep(ms(2)).await;
        assert_eq!(events.spoken_indices(), vec![1]);
        let progress = handle.progress();
        assert_eq!(progress.visible, 1);
        assert_eq!(progress.speaking_index, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_script_plays_to_the_end() {
        let events = Arc::new(RecordingEvents::default());
        let handle = VoiceRunnerHandle::spawn(VoiceSession::new(Language::Urdu, 2000), events.clone());

        for bot_line in [1, 3, 5] {
            sleep(ms(2001)).await;
            assert_eq!(events.spoken_indices().last(), Some(&bot_line));
            assert!(handle.send(VoiceControl::UtteranceFinished(bot_line)));
        }
        sleep(ms(1)).await;

        assert_eq!(events.last_progress().visible, 6);
        assert!(handle.is_finished());
        let spoken = events.spoken.lock().unwrap();
        assert!(spoken.iter().all(|r| r.lang == "ur-PK"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_utterance_index_is_ignored() {
        let events = Arc::new(RecordingEvents::default());
        let handle = VoiceRunnerHandle::spawn(VoiceSession::new(Language::English, 2000), events.clone());

        sleep(ms(2001)).await;
        handle.send(VoiceControl::UtteranceFinished(3));
        sleep(ms(10)).await;
        assert_eq!(handle.progress().visible, 1);
        assert!(handle.progress().speaking);

        handle.send(VoiceControl::UtteranceFinished(1));
        sleep(ms(1)).await;
        assert_eq!(handle.progress().visible, 2);
        assert!(handle.progress().recording);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mic_reveals_first_line_immediately() {
        let events = Arc::new(RecordingEvents::default());
        let handle = VoiceRunnerHandle::spawn(VoiceSession::new(Language::English, 2000), events.clone());

        sleep(ms(100)).await;
        handle.send(VoiceControl::Mic);
        sleep(ms(1)).await;

        assert_eq!(events.spoken_indices(), vec![1]);
        assert_eq!(handle.progress().visible, 1);

        // A second press changes nothing.
        handle.send(VoiceControl::Mic);
        sleep(ms(1)).await;
        assert_eq!(events.spoken_indices(), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_pending_delay() {
        let events = Arc::new(RecordingEvents::default());
        let handle = VoiceRunnerHandle::spawn(VoiceSession::new(Language::English, 2000), events.clone());

        sleep(ms(500)).await;
        handle.stop();
        sleep(ms(5000)).await;

        assert!(events.spoken_indices().is_empty());
        assert_eq!(events.last_progress().visible, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_start_replaces_previous_runner() {
        let state = VoiceState::new();
        let first = Arc::new(RecordingEvents::default());
        let second = Arc::new(RecordingEvents::default());

        state.start(VoiceSession::new(Language::English, 2000), first.clone());
        sleep(ms(1000)).await;
        state.start(VoiceSession::new(Language::English, 2000), second.clone());
        sleep(ms(2001)).await;

        assert!(first.spoken_indices().is_empty());
        assert_eq!(second.spoken_indices(), vec![1]);
        assert!(state.send(VoiceControl::UtteranceFinished(1)));
        sleep(ms(1)).await;
        assert_eq!(state.progress().map(|p| p.visible), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_stop() {
        let state = VoiceState::new();
        assert!(!state.stop());
        assert!(!state.send(VoiceControl::Mic));

        state.start(
            VoiceSession::new(Language::English, 2000),
            Arc::new(RecordingEvents::default()),
        );
        assert!(state.stop());
        assert_eq!(state.progress(), None);
    }
}
