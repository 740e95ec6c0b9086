//! Feedback controller computing output from the configured law.

use crate::config::{ControlLaw, LoopType, PidConfig};
use crate::error::{PidError, PidResult};

/// P / PI / PID feedback controller with anti-windup clamping.
///
/// The controller holds the accumulated integral error and the previous
/// error sample; both persist across output computations and are zeroed by
/// [`PidController::clear`] without touching the configuration.
///
/// # Example
///
/// ```
/// use opencontrol_pid::{PidConfig, PidController};
///
/// let config = PidConfig::builder()
///     .setpoint(100.0)
///     .bias(10.0)
///     .kc(0.5)
///     .build()?;
/// let mut pid = PidController::new(config)?;
///
/// // Reading equals the setpoint, so the output is exactly the bias.
/// let output = pid.output(100.0)?;
/// assert!((output - 10.0).abs() < 1e-12);
/// # Ok::<(), opencontrol_pid::PidError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PidController {
    setpoint: f64,
    bias: f64,
    law: ControlLaw,
    prev_error: f64,
    error_sum: f64,
}

impl PidController {
    /// Build a controller from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PidError::InvalidConfiguration`] under the conditions
    /// listed for [`PidConfig::control_law`].
    pub fn new(config: PidConfig) -> PidResult<Self> {
        let law = config.control_law()?;
        Ok(Self {
            setpoint: config.setpoint,
            bias: config.bias,
            law,
            prev_error: 0.0,
            error_sum: 0.0,
        })
    }

    /// Compute the control output for a sensor reading.
    ///
    /// The output starts at the bias. The proportional term adds
    /// `kc * error`. When active, the integral term accumulates the error,
    /// clamps the sum into the anti-windup bounds, and adds
    /// `ki * error_sum * dt`. When active, the derivative term adds the raw
    /// error slope `(error - prev_error) / dt`. The previous-error sample
    /// is updated on every call.
    ///
    /// # Errors
    ///
    /// Returns [`PidError::NonFiniteReading`] if `reading` is NaN or
    /// infinite; the controller state is unchanged in that case.
    pub fn output(&mut self, reading: f64) -> PidResult<f64> {
        if !reading.is_finite() {
            return Err(PidError::non_finite_reading(reading));
        }

        let error = self.setpoint - reading;
        let mut output = self.bias;
        match self.law {
            ControlLaw::P { kc } => {
                output += kc * error;
            }
            ControlLaw::Pi { kc, ki, dt, bounds } => {
                output += kc * error;
                self.error_sum = bounds.clamp(self.error_sum + error);
                output += ki * self.error_sum * dt;
            }
            ControlLaw::Pid {
                kc,
                ki,
                kd: _,
                dt,
                bounds,
            } => {
                output += kc * error;
                self.error_sum = bounds.clamp(self.error_sum + error);
                output += ki * self.error_sum * dt;
                output += (error - self.prev_error) / dt;
            }
        }
        self.prev_error = error;
        Ok(output)
    }

    /// Zero the accumulated integral error and the previous error sample.
    ///
    /// The configuration is untouched, so control can resume without
    /// re-validating parameters.
    pub fn clear(&mut self) {
        self.prev_error = 0.0;
        self.error_sum = 0.0;
    }

    /// Replace the full configuration, equivalent to reconstruction.
    ///
    /// Accumulated state is zeroed. On error the previous configuration
    /// and state remain in effect.
    ///
    /// # Errors
    ///
    /// Returns [`PidError::InvalidConfiguration`] under the conditions
    /// listed for [`PidConfig::control_law`].
    pub fn reconfigure(&mut self, config: PidConfig) -> PidResult<()> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Move the target without clearing accumulated state.
    ///
    /// # Errors
    ///
    /// Returns [`PidError::NonFiniteSetpoint`] if `setpoint` is NaN or
    /// infinite.
    pub fn set_setpoint(&mut self, setpoint: f64) -> PidResult<()> {
        if !setpoint.is_finite() {
            return Err(PidError::non_finite_setpoint(setpoint));
        }
        self.setpoint = setpoint;
        Ok(())
    }

    /// Current setpoint.
    #[must_use]
    pub fn setpoint(&self) -> f64 {
        self.setpoint
    }

    /// Constant output bias.
    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Accumulated integral error, for monitoring.
    #[must_use]
    pub fn error_sum(&self) -> f64 {
        self.error_sum
    }

    /// Error sample from the previous output computation, for monitoring.
    #[must_use]
    pub fn prev_error(&self) -> f64 {
        self.prev_error
    }

    /// Which terms of the feedback law are active.
    #[must_use]
    pub fn loop_type(&self) -> LoopType {
        self.law.loop_type()
    }
}
