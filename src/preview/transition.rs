// SPDX-License-Identifier: MPL-2.0
//! Navigation transitions.
//!
//! Whether a file change fades in or swaps instantly is decided once, from
//! what the environment supports, and then applied uniformly by
//! [`Transition`]. The state change itself always happens synchronously;
//! only the presentation is animated.

use crate::config::Config;
use std::time::{Duration, Instant};

/// Setting this variable to anything but `0` or an empty string disables
/// animated transitions.
pub const REDUCED_MOTION_ENV: &str = "ICED_PREVIEW_REDUCED_MOTION";

/// Reports whether smooth transitions may be used.
pub trait TransitionCapability {
    fn supports_smooth_transitions(&self) -> bool;
}

/// Capabilities derived from the process environment and user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentCapabilities {
    pub animations_enabled: bool,
    pub reduced_motion: bool,
}

impl EnvironmentCapabilities {
    #[must_use]
    pub fn detect(animations_enabled: bool) -> Self {
        let reduced_motion = std::env::var_os(REDUCED_MOTION_ENV)
            .is_some_and(|value| !value.is_empty() && value != "0");
        Self {
            animations_enabled,
            reduced_motion,
        }
    }
}

impl TransitionCapability for EnvironmentCapabilities {
    fn supports_smooth_transitions(&self) -> bool {
        self.animations_enabled && !self.reduced_motion
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStrategy {
    Crossfade { duration: Duration },
    Immediate,
}

impl TransitionStrategy {
    #[must_use]
    pub fn select(capability: &impl TransitionCapability, duration: Duration) -> Self {
        if capability.supports_smooth_transitions() && !duration.is_zero() {
            TransitionStrategy::Crossfade { duration }
        } else {
            TransitionStrategy::Immediate
        }
    }

    /// Strategy for the running environment and the user's settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let animations = config.general.animations.unwrap_or(true);
        let capabilities = EnvironmentCapabilities::detect(animations);
        Self::select(
            &capabilities,
            Duration::from_millis(config.preview.transition_ms()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Transition {
    strategy: TransitionStrategy,
    started_at: Option<Instant>,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(TransitionStrategy::Immediate)
    }
}

impl Transition {
    #[must_use]
    pub fn new(strategy: TransitionStrategy) -> Self {
        Self {
            strategy,
            started_at: None,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> TransitionStrategy {
        self.strategy
    }

    /// Runs `change` and, if it reports a change, starts the transition.
    pub fn begin(&mut self, now: Instant, change: impl FnOnce() -> bool) -> Phase {
        if !change() {
            return self.phase(now);
        }
        match self.strategy {
            TransitionStrategy::Immediate => {
                self.started_at = None;
                Phase::Completed
            }
            TransitionStrategy::Crossfade { .. } => {
                self.started_at = Some(now);
                Phase::Running
            }
        }
    }

    /// Advances the transition, finishing it once its duration elapsed.
    pub fn tick(&mut self, now: Instant) -> Phase {
        let phase = self.phase(now);
        if phase == Phase::Completed {
            self.started_at = None;
        }
        phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Opacity of the incoming content, from 0.0 to 1.0.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match (self.strategy, self.started_at) {
            (TransitionStrategy::Crossfade { duration }, Some(started)) => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    fn phase(&self, now: Instant) -> Phase {
        match (self.strategy, self.started_at) {
            (TransitionStrategy::Crossfade { duration }, Some(started))
                if now.saturating_duration_since(started) < duration =>
            {
                Phase::Running
            }
            _ => Phase::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    struct Fixed(bool);

    impl TransitionCapability for Fixed {
        fn supports_smooth_transitions(&self) -> bool {
            self.0
        }
    }

    const DURATION: Duration = Duration::from_millis(200);

    #[test]
    fn strategy_follows_capability() {
        assert_eq!(
            TransitionStrategy::select(&Fixed(true), DURATION),
            TransitionStrategy::Crossfade { duration: DURATION }
        );
        assert_eq!(
            TransitionStrategy::select(&Fixed(false), DURATION),
            TransitionStrategy::Immediate
        );
        assert_eq!(
            TransitionStrategy::select(&Fixed(true), Duration::ZERO),
            TransitionStrategy::Immediate
        );
    }

    #[test]
    fn disabled_animations_select_immediate() {
        let mut config = Config::default();
        config.general.animations = Some(false);
        assert_eq!(
            TransitionStrategy::from_config(&config),
            TransitionStrategy::Immediate
        );
    }

    #[test]
    fn environment_capability_combines_flags() {
        let caps = EnvironmentCapabilities {
            animations_enabled: true,
            reduced_motion: false,
        };
        assert!(caps.supports_smooth_transitions());

        let reduced = EnvironmentCapabilities {
            reduced_motion: true,
            ..caps
        };
        assert!(!reduced.supports_smooth_transitions());

        let disabled = EnvironmentCapabilities {
            animations_enabled: false,
            ..caps
        };
        assert!(!disabled.supports_smooth_transitions());
    }

    #[test]
    fn immediate_completes_synchronously() {
        let mut transition = Transition::default();
        let mut applied = false;

        let phase = transition.begin(Instant::now(), || {
            applied = true;
            true
        });

        assert!(applied);
        assert_eq!(phase, Phase::Completed);
        assert!(!transition.is_running());
        assert_abs_diff_eq!(transition.opacity(Instant::now()), 1.0);
    }

    #[test]
    fn crossfade_runs_for_its_duration() {
        let mut transition = Transition::new(TransitionStrategy::Crossfade { duration: DURATION });
        let t0 = Instant::now();

        assert_eq!(transition.begin(t0, || true), Phase::Running);
        assert_abs_diff_eq!(transition.opacity(t0), 0.0);
        assert_abs_diff_eq!(transition.opacity(t0 + DURATION / 2), 0.5, epsilon = 1e-3);
        assert_eq!(transition.tick(t0 + DURATION / 2), Phase::Running);

        assert_eq!(transition.tick(t0 + DURATION), Phase::Completed);
        assert!(!transition.is_running());
        assert_abs_diff_eq!(transition.opacity(t0 + DURATION), 1.0);
    }

    #[test]
    fn unchanged_state_does_not_start() {
        let mut transition = Transition::new(TransitionStrategy::Crossfade { duration: DURATION });
        assert_eq!(transition.begin(Instant::now(), || false), Phase::Completed);
        assert!(!transition.is_running());
    }
}
