//! Entrance animations.
//!
//! Each animated element carries `reveal reveal-<kind>`; the stylesheet holds the hidden
//! offsets and `is-revealed` resets them, so the CSS transition does the work. Timing is
//! inline so that staggered lists need no per-index CSS.

/// Initial offset an element animates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// 30px below.
    FadeUp,
    /// 20px below.
    FadeUpSmall,
    FadeIn,
    /// 30px to the left.
    SlideFromLeft,
    /// 30px to the right.
    SlideFromRight,
    /// 20px to the left, used for table rows.
    SlideRowIn,
    /// Scaled to 0.9.
    ScaleIn,
    /// Scaled to 0.95.
    ScaleInSoft,
}

impl Motion {
    pub fn class_name(self) -> &'static str {
        match self {
            Motion::FadeUp => "reveal-fade-up",
            Motion::FadeUpSmall => "reveal-fade-up-sm",
            Motion::FadeIn => "reveal-fade-in",
            Motion::SlideFromLeft => "reveal-slide-left",
            Motion::SlideFromRight => "reveal-slide-right",
            Motion::SlideRowIn => "reveal-row",
            Motion::ScaleIn => "reveal-scale",
            Motion::ScaleInSoft => "reveal-scale-soft",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub motion: Motion,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Reveal {
    pub const fn new(motion: Motion, duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            motion,
            duration_ms,
            delay_ms,
        }
    }

    /// Delay grows by `step_ms` per list index.
    pub const fn staggered(
        motion: Motion,
        duration_ms: u32,
        base_ms: u32,
        step_ms: u32,
        index: usize,
    ) -> Self {
        // saturates instead of wrapping on absurd indices
        let index = if index > u32::MAX as usize {
            u32::MAX
        } else {
            index as u32
        };
        Self::new(
            motion,
            duration_ms,
            base_ms.saturating_add(step_ms.saturating_mul(index)),
        )
    }

    /// Classes for a trigger-driven element.
    pub fn class(&self, visible: bool) -> String {
        if visible {
            format!("reveal {} is-revealed", self.motion.class_name())
        } else {
            format!("reveal {}", self.motion.class_name())
        }
    }

    /// Classes for an element that animates as soon as it is mounted (hero).
    pub fn on_load_class(&self) -> String {
        format!("play-on-load {}", self.motion.class_name())
    }

    /// Inline timing. Works for both transitions and on-load keyframes.
    pub fn style(&self) -> String {
        format!(
            "transition-duration: {d}ms; transition-delay: {w}ms; animation-duration: {d}ms; animation-delay: {w}ms;",
            d = self.duration_ms,
            w = self.delay_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn class_toggles_revealed() {
        let reveal = Reveal::new(Motion::FadeUp, 800, 0);
        assert_eq!(reveal.class(false), "reveal reveal-fade-up");
        assert_eq!(reveal.class(true), "reveal reveal-fade-up is-revealed");
    }

    #[test]
    fn stagger_is_linear() {
        let delays: Vec<u32> = (0..4)
            .map(|i| Reveal::staggered(Motion::SlideRowIn, 500, 300, 100, i).delay_ms)
            .collect();
        assert_eq!(delays, vec![300, 400, 500, 600]);
    }

    #[test]
    fn stagger_delay_saturates() {
        let far = Reveal::staggered(Motion::FadeIn, 500, 300, 100, usize::MAX);
        assert_eq!(far.delay_ms, u32::MAX);

        let wide = Reveal::staggered(Motion::FadeIn, 500, u32::MAX - 10, 100, 1);
        assert_eq!(wide.delay_ms, u32::MAX);

        let step = Reveal::staggered(Motion::FadeIn, 500, 0, u32::MAX, 3);
        assert_eq!(step.delay_ms, u32::MAX);
    }

    #[test]
    fn style_carries_timing() {
        let style = Reveal::new(Motion::ScaleIn, 500, 250).style();
        assert!(style.contains("transition-duration: 500ms"));
        assert!(style.contains("transition-delay: 250ms"));
    }

    #[test]
    fn on_load_class_skips_reveal_state() {
        let reveal = Reveal::new(Motion::FadeUpSmall, 800, 200);
        assert_eq!(reveal.on_load_class(), "play-on-load reveal-fade-up-sm");
    }
}
