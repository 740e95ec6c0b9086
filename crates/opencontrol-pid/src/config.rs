//! Controller configuration and loop-type derivation.
//!
//! The loop type is never stated directly: it is derived from which gains
//! the configuration carries. The gains form a chain, so an integral gain
//! without a proportional gain, or a derivative gain without an integral
//! gain, is rejected at build time.

use serde::{Deserialize, Serialize};

use crate::error::{PidError, PidResult};

/// Inclusive clamp range for the accumulated integral error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SumBounds {
    /// Lower clamp bound.
    pub lower: f64,
    /// Upper clamp bound.
    pub upper: f64,
}

impl SumBounds {
    /// Create a clamp range. Bounds are validated when the owning
    /// configuration is built.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Clamp `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.lower {
            self.lower
        } else if value > self.upper {
            self.upper
        } else {
            value
        }
    }
}

/// Which terms of the feedback law are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopType {
    /// Proportional only.
    P,
    /// Proportional plus integral.
    Pi,
    /// Proportional, integral, and derivative.
    Pid,
}

impl std::fmt::Display for LoopType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P => write!(f, "P"),
            Self::Pi => write!(f, "PI"),
            Self::Pid => write!(f, "PID"),
        }
    }
}

/// Feedback law with exactly the parameters its active terms require.
///
/// Built once at configuration time; the controller never re-inspects
/// optional fields while computing output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlLaw {
    /// Proportional control.
    P {
        /// Proportional gain.
        kc: f64,
    },
    /// Proportional-integral control.
    Pi {
        /// Proportional gain.
        kc: f64,
        /// Integral gain.
        ki: f64,
        /// Sampling interval in seconds.
        dt: f64,
        /// Anti-windup clamp range for the accumulated error.
        bounds: SumBounds,
    },
    /// Proportional-integral-derivative control.
    Pid {
        /// Proportional gain.
        kc: f64,
        /// Integral gain.
        ki: f64,
        /// Derivative gain. Selects derivative action; the derivative term
        /// applies the raw error slope `(error - prev_error) / dt`.
        kd: f64,
        /// Sampling interval in seconds.
        dt: f64,
        /// Anti-windup clamp range for the accumulated error.
        bounds: SumBounds,
    },
}

impl ControlLaw {
    /// The loop type this law implements.
    #[must_use]
    pub fn loop_type(&self) -> LoopType {
        match self {
            Self::P { .. } => LoopType::P,
            Self::Pi { .. } => LoopType::Pi,
            Self::Pid { .. } => LoopType::Pid,
        }
    }
}

/// PID controller configuration.
///
/// Optional gains determine the loop type: `kc` alone selects P, `kc` and
/// `ki` select PI, all three select PID. The integral term additionally
/// requires `dt` and the anti-windup bounds.
///
/// # Example
///
/// ```
/// use opencontrol_pid::{LoopType, PidConfig};
///
/// let config = PidConfig::builder()
///     .setpoint(100.0)
///     .bias(10.0)
///     .kc(0.5)
///     .build()?;
/// assert_eq!(config.control_law()?.loop_type(), LoopType::P);
/// # Ok::<(), opencontrol_pid::PidError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PidConfig {
    /// Target value the controller drives the reading toward.
    pub setpoint: f64,
    /// Constant offset added to every output.
    pub bias: f64,
    /// Proportional gain. Required; its absence is a configuration error.
    pub kc: Option<f64>,
    /// Integral gain. Requires `kc`, `dt`, and `sum_bounds`.
    pub ki: Option<f64>,
    /// Derivative gain. Requires `ki`.
    pub kd: Option<f64>,
    /// Sampling interval in seconds. Required once the integral term is
    /// active; must be positive.
    pub dt: Option<f64>,
    /// Anti-windup clamp range. Required once the integral term is active.
    pub sum_bounds: Option<SumBounds>,
}

impl PidConfig {
    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> PidConfigBuilder {
        PidConfigBuilder::default()
    }

    /// Derive the feedback law from the configured gains.
    ///
    /// # Errors
    ///
    /// Returns [`PidError::InvalidConfiguration`] if any present value is
    /// non-finite, the gain chain is broken (`ki` without `kc`, `kd`
    /// without `ki`), or the integral term is active without `dt > 0` and
    /// ordered sum bounds.
    pub fn control_law(&self) -> PidResult<ControlLaw> {
        require_finite("setpoint", self.setpoint)?;
        require_finite("bias", self.bias)?;

        let Some(kc) = self.kc else {
            return Err(PidError::invalid_configuration(
                "proportional gain kc is required",
            ));
        };
        require_finite("kc", kc)?;

        let law = match (self.ki, self.kd) {
            (None, None) => ControlLaw::P { kc },
            (None, Some(_)) => {
                return Err(PidError::invalid_configuration(
                    "derivative gain kd requires integral gain ki",
                ));
            }
            (Some(ki), kd) => {
                require_finite("ki", ki)?;
                let (dt, bounds) = self.integral_parameters()?;
                match kd {
                    None => ControlLaw::Pi { kc, ki, dt, bounds },
                    Some(kd) => {
                        require_finite("kd", kd)?;
                        ControlLaw::Pid {
                            kc,
                            ki,
                            kd,
                            dt,
                            bounds,
                        }
                    }
                }
            }
        };
        Ok(law)
    }

    /// Validate the configuration without building a law.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PidConfig::control_law`].
    pub fn validate(&self) -> PidResult<()> {
        self.control_law().map(|_| ())
    }

    fn integral_parameters(&self) -> PidResult<(f64, SumBounds)> {
        let Some(dt) = self.dt else {
            return Err(PidError::invalid_configuration(
                "integral term requires a sampling interval dt",
            ));
        };
        if !dt.is_finite() || dt <= 0.0 {
            return Err(PidError::invalid_configuration(
                "sampling interval dt must be finite and positive",
            ));
        }
        let Some(bounds) = self.sum_bounds else {
            return Err(PidError::invalid_configuration(
                "integral term requires anti-windup sum bounds",
            ));
        };
        require_finite("lower sum bound", bounds.lower)?;
        require_finite("upper sum bound", bounds.upper)?;
        if bounds.lower > bounds.upper {
            return Err(PidError::invalid_configuration(
                "lower sum bound exceeds upper sum bound",
            ));
        }
        Ok((dt, bounds))
    }
}

fn require_finite(name: &str, value: f64) -> PidResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PidError::invalid_configuration(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// Builder for [`PidConfig`].
#[derive(Debug, Default)]
pub struct PidConfigBuilder {
    config: PidConfig,
}

impl PidConfigBuilder {
    /// Set the setpoint.
    #[must_use]
    pub fn setpoint(mut self, setpoint: f64) -> Self {
        self.config.setpoint = setpoint;
        self
    }

    /// Set the constant output bias.
    #[must_use]
    pub fn bias(mut self, bias: f64) -> Self {
        self.config.bias = bias;
        self
    }

    /// Set the proportional gain.
    #[must_use]
    pub fn kc(mut self, kc: f64) -> Self {
        self.config.kc = Some(kc);
        self
    }

    /// Set the integral gain.
    #[must_use]
    pub fn ki(mut self, ki: f64) -> Self {
        self.config.ki = Some(ki);
        self
    }

    /// Set the derivative gain.
    #[must_use]
    pub fn kd(mut self, kd: f64) -> Self {
        self.config.kd = Some(kd);
        self
    }

    /// Set the sampling interval in seconds.
    #[must_use]
    pub fn dt(mut self, dt: f64) -> Self {
        self.config.dt = Some(dt);
        self
    }

    /// Set the anti-windup clamp range for the accumulated error.
    #[must_use]
    pub fn sum_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.config.sum_bounds = Some(SumBounds::new(lower, upper));
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PidError::InvalidConfiguration`] under the conditions
    /// listed for [`PidConfig::control_law`].
    pub fn build(self) -> PidResult<PidConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
