//! Presentation state machine and slide/fade animation.
//!
//! State machine: Hidden → Appearing → Presented → Dismissing → Hidden
//!
//! Appearing and Dismissing can reverse into each other mid-flight; progress
//! carries over so the card turns around where it is.

use std::time::Duration;

/// Where the card is in its show/hide cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationPhase {
    /// Off-screen, nothing rendered
    #[default]
    Hidden,
    /// Sliding up, overlay fading in
    Appearing,
    /// Resting, fully visible
    Presented,
    /// Sliding down, overlay fading out
    Dismissing,
}

impl PresentationPhase {
    /// Whether anything should be drawn
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, Self::Appearing | Self::Dismissing)
    }
}

/// A phase transition, reported so callers can react or log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: PresentationPhase,
    pub to: PresentationPhase,
}

/// Animation timing for the slide and the overlay fade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTiming {
    /// Card slide duration (ease-in-out)
    pub slide: Duration,
    /// Overlay waits this long into the slide before fading in (ease-in)
    pub overlay_delay: Duration,
    /// Overlay opacity once fully faded in, when dimming
    pub dim_opacity: f64,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            slide: Duration::from_millis(350),
            overlay_delay: Duration::from_millis(150),
            dim_opacity: 0.5,
        }
    }
}

impl AnimationTiming {
    /// No animation at all: every transition completes on the next tick
    pub fn instant() -> Self {
        Self {
            slide: Duration::ZERO,
            overlay_delay: Duration::ZERO,
            ..Default::default()
        }
    }
}

/// Presentation phase plus linear animation progress in `[0, 1]`
/// (0 = off-screen, 1 = resting).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    phase: PresentationPhase,
    progress: f64,
    timing: AnimationTiming,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new(AnimationTiming::default())
    }
}

impl Presentation {
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            phase: PresentationPhase::Hidden,
            progress: 0.0,
            timing,
        }
    }

    pub fn phase(&self) -> PresentationPhase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn timing(&self) -> &AnimationTiming {
        &self.timing
    }

    pub fn set_timing(&mut self, timing: AnimationTiming) {
        self.timing = timing;
    }

    /// Start appearing. No-op while already appearing or presented.
    pub fn show(&mut self) -> Option<PhaseChange> {
        match self.phase {
            PresentationPhase::Hidden | PresentationPhase::Dismissing => {
                Some(self.transition(PresentationPhase::Appearing))
            }
            _ => None,
        }
    }

    /// Start dismissing. No-op while already dismissing or hidden.
    pub fn hide(&mut self) -> Option<PhaseChange> {
        match self.phase {
            PresentationPhase::Appearing | PresentationPhase::Presented => {
                Some(self.transition(PresentationPhase::Dismissing))
            }
            _ => None,
        }
    }

    /// Advance the running animation by `dt`
    pub fn advance(&mut self, dt: Duration) -> Option<PhaseChange> {
        let step = self.step(dt);
        match self.phase {
            PresentationPhase::Appearing => {
                self.progress = (self.progress + step).min(1.0);
                (self.progress >= 1.0).then(|| self.transition(PresentationPhase::Presented))
            }
            PresentationPhase::Dismissing => {
                self.progress = (self.progress - step).max(0.0);
                (self.progress <= 0.0).then(|| self.transition(PresentationPhase::Hidden))
            }
            PresentationPhase::Hidden | PresentationPhase::Presented => None,
        }
    }

    /// Vertical offset of the card from its resting row, in rows.
    /// `screen_height` when hidden, 0 when presented.
    pub fn card_offset(&self, screen_height: u16) -> u16 {
        let eased = ease_in_out(self.progress);
        ((1.0 - eased) * screen_height as f64).round() as u16
    }

    /// How far the overlay has faded in, `[0, 1]`
    pub fn overlay_fraction(&self) -> f64 {
        if !self.phase.is_visible() {
            return 0.0;
        }
        let slide = self.timing.slide.as_secs_f64();
        if slide <= 0.0 {
            return self.progress;
        }
        let delay = (self.timing.overlay_delay.as_secs_f64() / slide).clamp(0.0, 0.95);
        let t = ((self.progress - delay) / (1.0 - delay)).clamp(0.0, 1.0);
        ease_in(t)
    }

    fn step(&self, dt: Duration) -> f64 {
        let slide = self.timing.slide.as_secs_f64();
        if slide <= 0.0 {
            1.0
        } else {
            dt.as_secs_f64() / slide
        }
    }

    fn transition(&mut self, to: PresentationPhase) -> PhaseChange {
        let change = PhaseChange {
            from: self.phase,
            to,
        };
        self.phase = to;
        tracing::debug!("card phase {:?} -> {:?}", change.from, change.to);
        change
    }
}

/// Cubic ease-in-out
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Quadratic ease-in
pub fn ease_in(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t
}
