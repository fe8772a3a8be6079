// SPDX-License-Identifier: MPL-2.0
//! Focus tour component.
//!
//! Coordinates the three viewer behaviors: the progress timer advances the
//! focus point selector on every completion, and each newly selected focus
//! point is fed into the zoom controller. Hosts drive the tour with
//! [`Message`]s and react to the returned [`Effect`].

use crate::config::Config;
use crate::domain::{FocusPoint, ProgressDuration, TimerState, ZoomTransform};
use crate::error::Result;
use crate::scheduler::{ManualScheduler, TickScheduler};
use crate::ui::state::{
    FocusPointSelector, ProgressTimer, Viewport, ViewportHandle, ZoomController, TICK_INTERVAL,
};
use iced::{Size, Subscription};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Start auto-advancing and zoom to the current focus point.
    Start,
    Stop,
    Next,
    Previous,
    Select(usize),
    TogglePause,
    Restart,
    ResetZoom,
    /// The layout layer measured a new container size.
    ContainerResized(Size),
    /// The container was unmounted or hidden.
    ContainerDetached,
    /// Periodic host tick; drains pending completions.
    Tick,
}

/// Effects produced by the tour that the host may act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// A different focus point is now current.
    FocusChanged { index: usize, point: FocusPoint },
    /// A selection request named an index outside the focus point list.
    SelectionRejected { index: usize, len: usize },
}

/// Read-only snapshot of the tour for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourInfo {
    pub current_index: usize,
    pub total_count: usize,
    pub focus_point: FocusPoint,
    pub progress: f32,
    pub timer_state: TimerState,
    pub zoom: ZoomTransform,
    pub is_zoomed_in: bool,
}

/// Auto-advancing, zooming tour over a fixed list of focus points.
pub struct FocusTour<S: TickScheduler> {
    selector: FocusPointSelector,
    timer: ProgressTimer<S>,
    zoom: ZoomController<ViewportHandle>,
    viewport: Viewport,
    completions: mpsc::UnboundedReceiver<()>,
}

impl<S: TickScheduler> FocusTour<S> {
    /// Creates a stopped, unzoomed tour positioned on the first focus point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFocusPoints`](crate::error::Error::EmptyFocusPoints)
    /// if `points` is empty.
    pub fn new(
        points: impl Into<Arc<[FocusPoint]>>,
        duration: ProgressDuration,
        scheduler: S,
    ) -> Result<Self> {
        let selector = FocusPointSelector::new(points)?;
        let (completed, completions) = mpsc::unbounded_channel();
        let timer = ProgressTimer::new(
            duration,
            move || {
                // The receiver lives as long as the tour, which owns the timer.
                let _ = completed.send(());
            },
            scheduler,
        );
        let viewport = Viewport::new();
        let zoom = ZoomController::new(viewport.handle());

        Ok(Self {
            selector,
            timer,
            zoom,
            viewport,
            completions,
        })
    }

    /// Creates a tour from persisted settings.
    ///
    /// # Errors
    ///
    /// Never fails for configs produced by this crate: an empty focus point
    /// list falls back to the default tour.
    pub fn from_config(config: &Config, scheduler: S) -> Result<Self> {
        Self::new(config.focus_points(), config.duration(), scheduler)
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Start => {
                self.timer.start_progress();
                self.zoom_to_current();
                Effect::None
            }
            Message::Stop => {
                self.timer.stop_progress();
                Effect::None
            }
            Message::Next => self.navigate(FocusPointSelector::next_focus_point),
            Message::Previous => self.navigate(FocusPointSelector::previous_focus_point),
            Message::Select(index) => match self.selector.set_focus_point(index) {
                Ok(()) => {
                    self.timer.reset_progress();
                    self.zoom_to_current();
                    self.focus_changed()
                }
                Err(_) => Effect::SelectionRejected {
                    index,
                    len: self.selector.len(),
                },
            },
            Message::TogglePause => {
                self.timer.toggle_pause();
                Effect::None
            }
            Message::Restart => {
                self.timer.restart_progress();
                Effect::None
            }
            Message::ResetZoom => {
                self.zoom.reset_zoom();
                Effect::None
            }
            Message::ContainerResized(size) => {
                if self.viewport.update(size) && self.zoom.is_zoomed_in() {
                    self.zoom_to_current();
                }
                Effect::None
            }
            Message::ContainerDetached => {
                self.viewport.detach();
                Effect::None
            }
            Message::Tick => self.process_completions(),
        }
    }

    /// Applies every completion signalled since the last call.
    ///
    /// Each completion advances to the next focus point and zooms to it.
    /// Returns the effect of the last advance, or [`Effect::None`].
    pub fn process_completions(&mut self) -> Effect {
        let mut effect = Effect::None;
        while self.completions.try_recv().is_ok() {
            effect = self.advance();
        }
        effect
    }

    /// Waits for the next progress completion and advances the tour.
    ///
    /// Returns `None` only if the completion channel closed.
    pub async fn next_completion(&mut self) -> Option<Effect> {
        self.completions.recv().await?;
        Some(self.advance())
    }

    #[must_use]
    pub fn info(&self) -> TourInfo {
        TourInfo {
            current_index: self.selector.current_index(),
            total_count: self.selector.len(),
            focus_point: self.selector.current_focus_point(),
            progress: self.timer.progress(),
            timer_state: self.timer.state(),
            zoom: self.zoom.transform(),
            is_zoomed_in: self.zoom.is_zoomed_in(),
        }
    }

    #[must_use]
    pub fn selector(&self) -> &FocusPointSelector {
        &self.selector
    }

    #[must_use]
    pub fn timer(&self) -> &ProgressTimer<S> {
        &self.timer
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomController<ViewportHandle> {
        &self.zoom
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn advance(&mut self) -> Effect {
        self.selector.next_focus_point();
        self.zoom_to_current();
        tracing::info!(
            index = self.selector.current_index(),
            "Tour advanced to next focus point"
        );
        self.focus_changed()
    }

    fn navigate(&mut self, step: fn(&mut FocusPointSelector)) -> Effect {
        step(&mut self.selector);
        self.timer.reset_progress();
        self.zoom_to_current();
        self.focus_changed()
    }

    fn zoom_to_current(&mut self) {
        self.zoom
            .zoom_to_focus_point(self.selector.current_focus_point());
    }

    fn focus_changed(&self) -> Effect {
        Effect::FocusChanged {
            index: self.selector.current_index(),
            point: self.selector.current_focus_point(),
        }
    }
}

impl FocusTour<ManualScheduler> {
    /// Creates a tour whose timer is driven by [`Message::Tick`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFocusPoints`](crate::error::Error::EmptyFocusPoints)
    /// if `points` is empty.
    pub fn manual(points: impl Into<Arc<[FocusPoint]>>, duration: ProgressDuration) -> Result<Self> {
        Self::new(points, duration, ManualScheduler::new())
    }

    /// Handles a message, moving virtual time forward by one tick interval on
    /// every [`Message::Tick`].
    pub fn update(&mut self, message: Message) -> Effect {
        if message == Message::Tick {
            self.timer.scheduler().advance(TICK_INTERVAL);
        }
        self.handle_message(message)
    }

    /// Ticks every 100 ms while progress is running.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.timer.scheduler().has_active() {
            iced::time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

impl<S: TickScheduler> std::fmt::Debug for FocusTour<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusTour")
            .field("info", &self.info())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Vector;

    fn tour() -> FocusTour<ManualScheduler> {
        let points = vec![
            FocusPoint::new(50.0, 50.0),
            FocusPoint::new(0.0, 0.0),
            FocusPoint::new(100.0, 100.0),
        ];
        let mut tour =
            FocusTour::manual(points, ProgressDuration::from_millis(1_000)).expect("non-empty");
        tour.handle_message(Message::ContainerResized(Size::new(200.0, 100.0)));
        tour
    }

    fn ticks(tour: &mut FocusTour<ManualScheduler>, count: usize) -> Vec<Effect> {
        (0..count).map(|_| tour.update(Message::Tick)).collect()
    }

    #[test]
    fn empty_tour_is_rejected() {
        let result = FocusTour::manual(Vec::<FocusPoint>::new(), ProgressDuration::default());
        assert!(matches!(result, Err(Error::EmptyFocusPoints)));
    }

    #[test]
    fn new_tour_is_stopped_and_unzoomed() {
        let tour = tour();
        let info = tour.info();
        assert_eq!(info.current_index, 0);
        assert_eq!(info.total_count, 3);
        assert_eq!(info.timer_state, TimerState::Stopped);
        assert!(!info.is_zoomed_in);
        assert_eq!(info.zoom, ZoomTransform::IDENTITY);
    }

    #[test]
    fn start_zooms_to_current_point() {
        let mut tour = tour();
        tour.update(Message::Start);
        assert_eq!(tour.timer().state(), TimerState::Running);
        assert!(tour.zoom().is_zoomed_in());
        assert_eq!(tour.zoom().translate(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn completion_advances_and_zooms_to_next_point() {
        let mut tour = tour();
        tour.update(Message::Start);

        let effects = ticks(&mut tour, 10);

        assert_eq!(
            effects.last(),
            Some(&Effect::FocusChanged {
                index: 1,
                point: FocusPoint::new(0.0, 0.0)
            })
        );
        assert_eq!(tour.zoom().translate(), Vector::new(100.0, 50.0));
        assert_abs_diff_eq!(tour.timer().progress(), 0.0);
    }

    #[test]
    fn tour_wraps_around_after_last_point() {
        let mut tour = tour();
        tour.update(Message::Start);
        ticks(&mut tour, 30);
        assert_eq!(tour.selector().current_index(), 0);
    }

    #[test]
    fn manual_navigation_resets_progress() {
        let mut tour = tour();
        tour.update(Message::Start);
        ticks(&mut tour, 5);

        let effect = tour.update(Message::Previous);

        assert_eq!(
            effect,
            Effect::FocusChanged {
                index: 2,
                point: FocusPoint::new(100.0, 100.0)
            }
        );
        assert_abs_diff_eq!(tour.timer().progress(), 0.0);
        assert_eq!(tour.zoom().translate(), Vector::new(-100.0, -50.0));
        assert_eq!(tour.timer().state(), TimerState::Running);
    }

    #[test]
    fn select_rejects_invalid_index() {
        let mut tour = tour();
        tour.update(Message::Select(1));

        let effect = tour.update(Message::Select(9));

        assert_eq!(effect, Effect::SelectionRejected { index: 9, len: 3 });
        assert_eq!(tour.selector().current_index(), 1);
    }

    #[test]
    fn pause_holds_progress_and_focus() {
        let mut tour = tour();
        tour.update(Message::Start);
        ticks(&mut tour, 4);

        tour.update(Message::TogglePause);
        assert!(tour.subscription_is_idle());
        ticks(&mut tour, 20);

        assert_eq!(tour.selector().current_index(), 0);
        assert_abs_diff_eq!(tour.timer().progress(), 40.0, epsilon = 1e-4);

        tour.update(Message::TogglePause);
        ticks(&mut tour, 6);
        assert_eq!(tour.selector().current_index(), 1);
    }

    #[test]
    fn restart_resumes_from_zero() {
        let mut tour = tour();
        tour.update(Message::Start);
        ticks(&mut tour, 7);
        tour.update(Message::TogglePause);

        tour.update(Message::Restart);

        assert_eq!(tour.timer().state(), TimerState::Running);
        assert_abs_diff_eq!(tour.timer().progress(), 0.0);
    }

    #[test]
    fn reset_zoom_keeps_focus() {
        let mut tour = tour();
        tour.update(Message::Next);
        tour.update(Message::ResetZoom);

        let info = tour.info();
        assert_eq!(info.current_index, 1);
        assert_eq!(info.zoom, ZoomTransform::IDENTITY);
        assert!(!info.is_zoomed_in);
    }

    #[test]
    fn resize_rezooms_when_zoomed_in() {
        let mut tour = tour();
        tour.update(Message::Next);
        assert_eq!(tour.zoom().translate(), Vector::new(100.0, 50.0));

        tour.update(Message::ContainerResized(Size::new(400.0, 300.0)));

        assert_eq!(tour.zoom().translate(), Vector::new(200.0, 150.0));
    }

    #[test]
    fn resize_does_not_zoom_when_unzoomed() {
        let mut tour = tour();
        tour.update(Message::ContainerResized(Size::new(400.0, 300.0)));
        assert!(!tour.zoom().is_zoomed_in());
    }

    #[test]
    fn navigation_without_container_keeps_identity() {
        let mut tour =
            FocusTour::manual(vec![FocusPoint::CENTER, FocusPoint::new(0.0, 0.0)], ProgressDuration::default())
                .expect("non-empty");
        tour.update(Message::ContainerDetached);

        let effect = tour.update(Message::Next);

        assert!(matches!(effect, Effect::FocusChanged { index: 1, .. }));
        assert_eq!(tour.zoom().transform(), ZoomTransform::IDENTITY);
    }

    #[test]
    fn stop_ends_subscription() {
        let mut tour = tour();
        tour.update(Message::Start);
        assert!(!tour.subscription_is_idle());
        tour.update(Message::Stop);
        assert!(tour.subscription_is_idle());
    }

    #[test]
    fn from_config_uses_configured_points() {
        let config = Config {
            duration_ms: Some(300),
            auto_start: Some(false),
            focus_points: Some(vec![crate::config::FocusPointEntry { x: 10.0, y: 20.0 }]),
        };
        let tour = FocusTour::from_config(&config, ManualScheduler::new()).expect("non-empty");
        assert_eq!(tour.selector().len(), 1);
        assert_eq!(tour.timer().duration().as_millis(), 300);
    }

    impl FocusTour<ManualScheduler> {
        fn subscription_is_idle(&self) -> bool {
            !self.timer.scheduler().has_active()
        }
    }
}
