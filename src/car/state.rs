//! Tunable and observed state of the line-following car.
//!
//! Everything the control loops read or the console tunes lives in
//! [`CarState`]. The struct replaces the scattered globals of a typical
//! bare-metal controller: the registry table binds console names to these
//! fields in one place, and the sensor/control loops update them through
//! the same shared handle the command layer uses.

/// Steering servo calibration block.
///
/// Converts between a steering angle in degrees and the PWM pulse width
/// the servo driver outputs. All widths are in microseconds. The
/// conversion is the tunable part of the servo; pushing the pulse to the
/// hardware is the driver's job.
#[derive(Clone, Copy, Debug)]
pub struct ServoParams {
    /// Pulse width at zero degrees.
    pub center:        f64,
    /// Pulse width change per degree of steering.
    pub us_per_degree: f64,
    /// Largest pulse width the linkage tolerates.
    pub upper_limit:   f64,
    /// Smallest pulse width the linkage tolerates.
    pub lower_limit:   f64,
    /// Pulse width currently commanded.
    pub pulse_width:   f64,
}

impl ServoParams {
    /// Commands a steering angle in degrees.
    ///
    /// Runs the angle through the calibration and clamps the resulting
    /// pulse width to the limits, so reading the angle back reports what
    /// the servo was actually given.
    pub fn write(&mut self, degrees: f64) {
        // min/max rather than clamp: the limits are console-tunable and
        // may momentarily cross while being adjusted.
        let pulse = self.center + degrees * self.us_per_degree;
        self.pulse_width = pulse.min(self.upper_limit).max(self.lower_limit);
    }

    /// The currently commanded angle in degrees.
    pub fn read(&self) -> f64 { (self.pulse_width - self.center) / self.us_per_degree }
}

impl Default for ServoParams {
    fn default() -> Self {
        ServoParams {
            center:        1500.0,
            us_per_degree: 10.0,
            upper_limit:   2000.0,
            lower_limit:   1000.0,
            pulse_width:   1500.0,
        }
    }
}

/// All tunable and observed fields of the car.
///
/// Sensor fields hold the latest filtered values written by the sensing
/// loop; gain and limit fields are read by the control loop and tuned
/// over the console while the car drives.
#[derive(Clone, Debug)]
pub struct CarState {
    /// Right line-sensor voltage.
    pub vr:                 f64,
    /// Left line-sensor voltage.
    pub vl:                 f64,
    /// Lateral offset estimate from the right sensor.
    pub xr:                 f64,
    /// Lateral offset estimate from the left sensor.
    pub xl:                 f64,
    /// Fused lateral offset estimate.
    pub x:                  f64,
    /// Sensor height above the track wire, in meters.
    pub h:                  f64,
    /// Spacing between the two sensors, in meters.
    pub d:                  f64,
    /// Sensor calibration coefficient (scale).
    pub c1:                 f64,
    /// Sensor calibration coefficient (gain).
    pub c2:                 f64,
    /// Commanded drive speed.
    pub speed:              f64,
    /// Speed controller output.
    pub speed_ctrl:         f64,
    /// Speed reference the controller tracks.
    pub speed_ref:          f64,
    /// Steering controller output.
    pub controller_out:     f64,
    /// Whether the steering controller drives the servo.
    pub controller_enabled: bool,
    /// Clamp for the lateral offset estimate.
    pub xmax:               f64,
    /// Filtered minimum sensor score.
    pub min_score:          f64,
    /// Score threshold below which the track is considered lost.
    pub score_limit:        f64,
    /// Track angle.
    pub theta:              f64,
    /// Low-passed track angle.
    pub theta_lp:           f64,
    /// Track angle estimate.
    pub theta_est:          f64,
    /// Track curvature estimate.
    pub curvature:          f64,
    /// Measured velocity.
    pub velocity:           f64,
    /// Measured acceleration.
    pub accel:              f64,
    /// Wheel encoder counts.
    pub enc_counts:         f64,
    /// Push button state.
    pub button:             bool,
    /// DIP switch 1 state.
    pub switch1:            bool,
    /// DIP switch 2 state.
    pub switch2:            bool,
    /// Steering PID proportional gain.
    pub kp:                 f64,
    /// Steering PID integral gain.
    pub ki:                 f64,
    /// Steering PID derivative gain.
    pub kd:                 f64,
    /// Steering servo calibration.
    pub servo:              ServoParams,
}

impl Default for CarState {
    fn default() -> Self {
        CarState {
            vr:                 0.0,
            vl:                 0.0,
            xr:                 0.0,
            xl:                 0.0,
            x:                  0.0,
            h:                  0.06,
            d:                  0.13,
            c1:                 0.2,
            c2:                 4.4e3,
            speed:              0.45,
            speed_ctrl:         0.0,
            speed_ref:          0.0,
            controller_out:     0.0,
            controller_enabled: true,
            xmax:               0.5,
            min_score:          0.0,
            score_limit:        0.1,
            theta:              0.0,
            theta_lp:           0.0,
            theta_est:          0.0,
            curvature:          0.0,
            velocity:           0.0,
            accel:              0.0,
            enc_counts:         0.0,
            button:             false,
            switch1:            false,
            switch2:            false,
            kp:                 0.0,
            ki:                 0.0,
            kd:                 0.0,
            servo:              ServoParams::default(),
        }
    }
}
