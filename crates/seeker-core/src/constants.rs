//! Simulation constants and default tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Guidance tuning defaults ---

/// Default engine thrust magnitude (localized force units).
pub const DEFAULT_ENGINE_THRUST: f64 = 200.0;

/// Default tolerance on the solved intercept point (meters). The intercept
/// iteration stops once the point moves less than this between refinements.
pub const DEFAULT_TARGETING_TOLERANCE: f32 = 1.0;

/// Default iteration cap for the intercept solve. Low — the controller
/// accepts the best estimate at the cap, favouring speed over accuracy.
pub const DEFAULT_MAX_SOLVER_ITERATIONS: usize = 5;

/// Default proportional-navigation gain.
pub const DEFAULT_PN_GAIN: f64 = 4.0;

/// Default recompute throttle factor. After each intercept solve the seek
/// timer is decremented by `time_to_intercept * recompute_factor`, so values
/// near 1 recompute roughly once per estimated time-to-intercept and smaller
/// values recompute more often.
pub const DEFAULT_RECOMPUTE_FACTOR: f32 = 0.1;

/// Default missile body mass (localized mass units).
pub const DEFAULT_MISSILE_MASS: f64 = 1.0;
