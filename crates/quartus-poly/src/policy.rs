//! Near-integer snapping of floating point results.
//!
//! Repeated multiplication and the closed-form root formulas accumulate
//! round-off, so results that land within a small epsilon of an integer
//! are replaced by that integer. The rule is configured once per process:
//!
//! 1. [`SnapPolicy::install`] at startup, or
//! 2. the `QUARTUS_SNAP_EPSILON` environment variable, or
//! 3. [`DEFAULT_SNAP_EPSILON`].
//!
//! An epsilon of `0` disables snapping entirely.

use std::sync::OnceLock;

use crate::error::{PolyError, Result};

/// Default snapping distance.
pub const DEFAULT_SNAP_EPSILON: f64 = 1e-4;

/// Environment variable consulted when no policy has been installed.
pub const SNAP_EPSILON_ENV: &str = "QUARTUS_SNAP_EPSILON";

static POLICY: OnceLock<SnapPolicy> = OnceLock::new();

/// The near-integer rounding rule shared by multiplication and the solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPolicy {
    epsilon: f64,
}

impl SnapPolicy {
    /// Creates a policy with the given epsilon.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidPolicy`] if `epsilon` is negative or not
    /// finite.
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(PolyError::InvalidPolicy(format!(
                "epsilon must be finite and non-negative, got {epsilon}"
            )));
        }
        Ok(Self { epsilon })
    }

    /// A policy that never snaps.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { epsilon: 0.0 }
    }

    /// Returns the snapping distance.
    #[must_use]
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Installs `self` as the process-wide policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidPolicy`] if a policy is already in effect,
    /// either from an earlier call or because [`SnapPolicy::current`] has
    /// already been read.
    pub fn install(self) -> Result<()> {
        POLICY.set(self).map_err(|_| {
            PolyError::InvalidPolicy("a snap policy is already in effect".to_string())
        })?;
        tracing::debug!(epsilon = self.epsilon, "installed snap policy");
        Ok(())
    }

    /// Returns the process-wide policy, initialising it on first use.
    #[must_use]
    pub fn current() -> Self {
        *POLICY.get_or_init(Self::from_env)
    }

    /// Reads the policy from `QUARTUS_SNAP_EPSILON`, falling back to the
    /// default when the variable is unset or invalid.
    #[must_use]
    pub fn from_env() -> Self {
        let Ok(raw) = std::env::var(SNAP_EPSILON_ENV) else {
            return Self::default();
        };
        let parsed = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| PolyError::InvalidPolicy(e.to_string()))
            .and_then(Self::new);
        parsed.unwrap_or_else(|err| {
            tracing::debug!(%err, "ignoring {}", SNAP_EPSILON_ENV);
            Self::default()
        })
    }

    /// Returns the nearest integer if `value` lies within epsilon of it,
    /// otherwise `value` unchanged.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        let nearest = value.round();
        if (nearest - value).abs() < self.epsilon {
            nearest
        } else {
            value
        }
    }

    /// Snaps every element in place.
    pub fn snap_all(&self, values: &mut [f64]) {
        for v in values.iter_mut() {
            *v = self.snap(*v);
        }
    }
}

impl Default for SnapPolicy {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_SNAP_EPSILON,
        }
    }
}
