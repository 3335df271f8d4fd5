//! # Screen Transition Animation
//!
//! Plays the visual side of a `core::navigation::Transition`. The core only
//! reports `from`/`to`; this module turns the direction into motion:
//!
//! - **Forward**: new screen slides in from the right, old one leaves left
//! - **Backward**: mirror image
//! - **CrossFade**: no motion, the new screen fades in
//!
//! The incoming screen is dimmed during the first half of any transition.
//! Both screens are rendered into off-screen buffers and blitted with a
//! horizontal offset, so widgets never see a shifted or narrowed area.
//!
//! Animation is time-based and purely cosmetic: the event loop keeps handling
//! input while it runs, and a new transition simply replaces the old one.

use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::core::config::AnimationSettings;
use crate::core::navigation::{Transition, TransitionDirection};

#[derive(Debug, Clone, Copy)]
pub struct TransitionAnimation {
    pub transition: Transition,
    started: Instant,
    duration: Duration,
}

impl TransitionAnimation {
    /// Returns `None` when animations are disabled or would take no time.
    pub fn start(transition: Transition, settings: &AnimationSettings, now: Instant) -> Option<Self> {
        if !settings.enabled {
            return None;
        }
        let duration = match transition.direction() {
            TransitionDirection::CrossFade => settings.fade,
            _ => settings.slide,
        };
        if duration.is_zero() {
            return None;
        }
        Some(Self {
            transition,
            started: now,
            duration,
        })
    }

    /// 0.0 at start, 1.0 once finished.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Horizontal offsets (incoming, outgoing) in columns for a content area `width` wide.
    pub fn offsets(&self, width: u16, now: Instant) -> (i32, i32) {
        let sign = i32::from(self.transition.direction().sign());
        let remaining = 1.0 - self.progress(now);
        let incoming = (f32::from(width) * remaining).round() as i32 * sign;
        let outgoing = incoming - i32::from(width) * sign;
        (incoming, outgoing)
    }

    /// Whether the incoming screen should still be drawn dimmed.
    pub fn is_fading(&self, now: Instant) -> bool {
        self.progress(now) < 0.5
    }
}

/// Copy `src` into `dst` shifted right by `dx` columns, clipped to `area`.
pub fn blit(src: &Buffer, dst: &mut Buffer, area: Rect, dx: i32) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let target = i32::from(x) + dx;
            if target < i32::from(area.left()) || target >= i32::from(area.right()) {
                continue;
            }
            if let (Some(cell), Some(slot)) = (src.cell((x, y)), dst.cell_mut((target as u16, y))) {
                *slot = cell.clone();
            }
        }
    }
}

/// Dim every cell of `buf` inside `area`.
pub fn dim(buf: &mut Buffer, area: Rect) {
    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::Screen;

    fn settings() -> AnimationSettings {
        AnimationSettings {
            enabled: true,
            slide: Duration::from_millis(300),
            fade: Duration::from_millis(250),
        }
    }

    #[test]
    fn test_disabled_or_zero_duration() {
        let t = Transition::new(Screen::Home, Screen::Profile);
        let now = Instant::now();
        let off = AnimationSettings {
            enabled: false,
            ..settings()
        };
        assert!(TransitionAnimation::start(t, &off, now).is_none());
        let instant = AnimationSettings {
            slide: Duration::ZERO,
            ..settings()
        };
        assert!(TransitionAnimation::start(t, &instant, now).is_none());
    }

    #[test]
    fn test_forward_offsets() {
        let t = Transition::new(Screen::Home, Screen::Profile);
        let now = Instant::now();
        let anim = TransitionAnimation::start(t, &settings(), now).unwrap();
        assert_eq!(anim.offsets(80, now), (80, 0));
        assert_eq!(anim.offsets(80, now + Duration::from_millis(150)), (40, -40));
        assert_eq!(anim.offsets(80, now + Duration::from_millis(300)), (0, -80));
        assert!(anim.is_finished(now + Duration::from_millis(300)));
    }

    #[test]
    fn test_backward_offsets() {
        let t = Transition::new(Screen::Settings, Screen::Home);
        let now = Instant::now();
        let anim = TransitionAnimation::start(t, &settings(), now).unwrap();
        assert_eq!(anim.offsets(80, now), (-80, 0));
        assert_eq!(anim.offsets(80, now + Duration::from_millis(150)), (-40, 40));
    }

    #[test]
    fn test_cross_fade_uses_fade_duration() {
        let t = Transition::new(Screen::Home, Screen::Home);
        let now = Instant::now();
        let anim = TransitionAnimation::start(t, &settings(), now).unwrap();
        assert_eq!(anim.offsets(80, now), (0, 0));
        assert!(anim.is_fading(now + Duration::from_millis(100)));
        assert!(!anim.is_fading(now + Duration::from_millis(130)));
        assert!(anim.is_finished(now + Duration::from_millis(250)));
    }

    #[test]
    fn test_blit_shifts_and_clips() {
        let area = Rect::new(0, 0, 4, 1);
        let src = Buffer::with_lines(["abcd"]);
        let mut dst = Buffer::empty(area);
        blit(&src, &mut dst, area, 2);
        assert_eq!(dst, Buffer::with_lines(["  ab"]));

        let mut dst = Buffer::empty(area);
        blit(&src, &mut dst, area, -1);
        assert_eq!(dst, Buffer::with_lines(["bcd "]));
    }

    #[test]
    fn test_dim_marks_cells() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::with_lines(["ok"]);
        dim(&mut buf, area);
        assert!(buf.cell((1, 0)).unwrap().modifier.contains(Modifier::DIM));
    }
}
