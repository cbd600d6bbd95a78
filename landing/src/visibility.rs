//! One-shot "has this section scrolled into view" trigger.
//!
//! The state machine is platform independent: samples are plain intersection ratios and the
//! platform resource is anything implementing [`ObserverRegistration`]. The browser wiring
//! lives in [`crate::hooks`].

use crate::error::{Result, SiteError};

/// Fraction of the element's area that must be visible before it counts as "in view".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    /// 10% of the element visible.
    pub const DEFAULT: Threshold = Threshold(0.1);

    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SiteError::InvalidThreshold(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    #[default]
    NotVisible,
    /// Terminal for the lifetime of the trigger.
    Visible,
}

/// Two-state machine: `NotVisible -> Visible`, never back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTrigger {
    threshold: Threshold,
    state: VisibilityState,
}

impl VisibilityTrigger {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: VisibilityState::NotVisible,
        }
    }

    /// Feed one intersection sample. Returns `true` only on the sample that flips the flag.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.state == VisibilityState::Visible {
            return false;
        }
        // NaN fails both comparisons; zero visible area never qualifies, even at threshold 0.
        if ratio > 0.0 && ratio >= self.threshold.0 {
            self.state = VisibilityState::Visible;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.state == VisibilityState::Visible
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new(Threshold::DEFAULT)
    }
}

/// A platform observation that must be released when the owning section goes away.
pub trait ObserverRegistration {
    fn unobserve(&mut self);
}

/// A trigger bound to the registration that feeds it.
///
/// Acquired on mount, released on teardown or drop, whichever comes first. Release happens
/// at most once.
pub struct TriggerBinding<R: ObserverRegistration> {
    trigger: VisibilityTrigger,
    registration: Option<R>,
    torn_down: bool,
}

impl<R: ObserverRegistration> TriggerBinding<R> {
    /// `registration` is `None` when the target element never existed; the flag then stays
    /// `false` for good.
    pub fn bind(trigger: VisibilityTrigger, registration: Option<R>) -> Self {
        Self {
            trigger,
            registration,
            torn_down: false,
        }
    }

    /// Forward a sample to the trigger. Ignored once torn down or when nothing is observed.
    pub fn deliver(&mut self, ratio: f64) -> bool {
        if self.torn_down || self.registration.is_none() {
            return false;
        }
        let fired = self.trigger.observe(ratio);
        if fired {
            tracing::debug!(ratio, threshold = self.trigger.threshold.0, "section revealed");
        }
        fired
    }

    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if let Some(mut registration) = self.registration.take() {
            registration.unobserve();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.trigger.is_visible()
    }

    pub fn is_bound(&self) -> bool {
        !self.torn_down && self.registration.is_some()
    }

    pub fn trigger(&self) -> &VisibilityTrigger {
        &self.trigger
    }
}

impl<R: ObserverRegistration> Drop for TriggerBinding<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts `unobserve` calls.
    struct SpyRegistration {
        released: Rc<Cell<usize>>,
    }

    impl ObserverRegistration for SpyRegistration {
        fn unobserve(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn spy_binding(threshold: f64) -> (TriggerBinding<SpyRegistration>, Rc<Cell<usize>>) {
        let released = Rc::new(Cell::new(0));
        let registration = SpyRegistration {
            released: released.clone(),
        };
        let trigger = VisibilityTrigger::new(Threshold::new(threshold).unwrap());
        (TriggerBinding::bind(trigger, Some(registration)), released)
    }

    #[test]
    fn starts_not_visible_for_every_threshold() {
        for t in [0.0, 0.1, 0.25, 0.5, 0.99, 1.0] {
            let trigger = VisibilityTrigger::new(Threshold::new(t).unwrap());
            assert!(!trigger.is_visible(), "threshold {t}");
            assert_eq!(trigger.state(), VisibilityState::NotVisible);
        }
    }

    #[test]
    fn ratios_below_threshold_keep_flag_down() {
        let mut trigger = VisibilityTrigger::default();
        for ratio in [0.0, 0.01, 0.05, 0.099] {
            assert!(!trigger.observe(ratio));
        }
        assert!(!trigger.is_visible());
    }

    #[test]
    fn first_qualifying_sample_flips_and_latches() {
        let mut trigger = VisibilityTrigger::default();
        assert!(trigger.observe(0.5));
        assert!(trigger.is_visible());

        // leaving the viewport does not reset
        assert!(!trigger.observe(0.0));
        assert!(!trigger.observe(0.05));
        assert!(!trigger.observe(1.0));
        assert!(trigger.is_visible());
    }

    #[test]
    fn exact_threshold_counts() {
        let mut trigger = VisibilityTrigger::default();
        assert!(trigger.observe(0.1));
    }

    #[test]
    fn zero_threshold_still_needs_some_area() {
        let mut trigger = VisibilityTrigger::new(Threshold::new(0.0).unwrap());
        assert!(!trigger.observe(0.0));
        assert!(trigger.observe(0.001));
    }

    #[test]
    fn nan_ratio_is_ignored() {
        let mut trigger = VisibilityTrigger::default();
        assert!(!trigger.observe(f64::NAN));
        assert!(!trigger.is_visible());
    }

    #[test]
    fn threshold_validation() {
        for ok in [0.0, 0.1, 1.0] {
            assert!(Threshold::new(ok).is_ok(), "{ok}");
        }
        for bad in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                Threshold::new(bad),
                Err(SiteError::InvalidThreshold(_))
            ));
        }
        assert_eq!(Threshold::default().value(), 0.1);
    }

    #[test]
    fn ratio_sequence_produces_expected_flags() {
        let (mut binding, _released) = spy_binding(0.1);
        let flags: Vec<bool> = [0.0, 0.05, 0.12, 0.0]
            .into_iter()
            .map(|ratio| {
                binding.deliver(ratio);
                binding.is_visible()
            })
            .collect();
        assert_eq!(flags, vec![false, false, true, true]);
    }

    #[test]
    fn teardown_before_reveal_releases_once_and_ignores_samples() {
        let (mut binding, released) = spy_binding(0.1);
        binding.deliver(0.05);
        binding.teardown();
        assert_eq!(released.get(), 1);

        assert!(!binding.deliver(0.9));
        assert!(!binding.is_visible());
        assert!(!binding.is_bound());

        binding.teardown();
        drop(binding);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn reveal_does_not_release_observer() {
        let (mut binding, released) = spy_binding(0.1);
        assert!(binding.deliver(0.5));
        assert_eq!(released.get(), 0);
        assert!(binding.is_bound());
    }

    #[test]
    fn drop_releases_registration() {
        let (binding, released) = spy_binding(0.1);
        drop(binding);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn missing_element_never_reveals() {
        let mut binding: TriggerBinding<SpyRegistration> =
            TriggerBinding::bind(VisibilityTrigger::default(), None);
        assert!(!binding.deliver(1.0));
        assert!(!binding.is_visible());
        binding.teardown();
    }
}
