//! Linear wave theory helpers used to localize open-water swell to a beach.
//!
//! Everything here is metric (m, s, m/s) and pure.
//! References: dispersion and group velocity per Dean & Dalrymple (1991);
//! breaker index per Weggel (1972); breaking height per Sunamura (1980).

use core::f64::consts::PI;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Breaker index on a flat bottom: waves break when H/d exceeds this.
pub const BREAKER_INDEX: f64 = 0.78;

/// Swells whose incident angle to the beach normal reaches this never arrive.
pub const SHADOW_CUTOFF_DEG: f64 = 90.0;

/// Shallowest depth used in any computation (m). Keeps shoaling finite.
pub const MIN_DEPTH: f64 = 0.5;

/// Upper bound on the shoaling coefficient.
pub const MAX_SHOALING: f64 = 2.5;

const MAX_NEWTON_STEPS: usize = 50;

/// Angle in `[0, 180]` degrees between a direction-from bearing and the
/// direction a beach faces.
pub fn incident_angle(direction: f64, beach_angle: f64) -> f64 {
    let diff = (direction - beach_angle).rem_euclid(360.0);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Deep-water wavelength `g T² / 2π`.
pub fn deep_water_wavelength(period: f64) -> f64 {
    GRAVITY * period * period / (2.0 * PI)
}

/// Wavenumber `k` satisfying `ω² = g k tanh(k d)`.
///
/// Newton iteration seeded with Eckart's explicit approximation, which is
/// within a few percent everywhere, so convergence takes a handful of steps.
pub fn wave_number(period: f64, depth: f64) -> f64 {
    let omega = 2.0 * PI / period;
    let omega_sq = omega * omega;
    let eckart = omega_sq / (GRAVITY * (omega_sq * depth / GRAVITY).tanh().sqrt());

    let mut k = eckart;
    for _ in 0..MAX_NEWTON_STEPS {
        let kd = k * depth;
        let tanh_kd = kd.tanh();
        let f = GRAVITY * k * tanh_kd - omega_sq;
        let df = GRAVITY * tanh_kd + GRAVITY * kd * (1.0 - tanh_kd * tanh_kd);
        let step = f / df;
        k -= step;
        if !k.is_finite() || k <= 0.0 {
            return eckart;
        }
        if step.abs() <= 1e-12 * k {
            break;
        }
    }
    k
}

/// Ratio of local phase speed to deep-water phase speed, `tanh(k d)`.
fn celerity_ratio(period: f64, depth: f64) -> f64 {
    (wave_number(period, depth) * depth).tanh()
}

/// Shoaling coefficient `sqrt(Cg₀ / Cg)` at `depth`, capped at [`MAX_SHOALING`].
pub fn shoaling_coefficient(period: f64, depth: f64) -> f64 {
    let depth = depth.max(MIN_DEPTH);
    let kd = wave_number(period, depth) * depth;
    let n = 0.5 * (1.0 + 2.0 * kd / (2.0 * kd).sinh());
    // Cg / Cg0 = (n C) / (C0 / 2) = 2 n tanh(kd)
    let group_ratio = 2.0 * n * kd.tanh();
    (1.0 / group_ratio).sqrt().min(MAX_SHOALING)
}

/// Refraction coefficient `sqrt(cos θ₀ / cos θ)` for straight parallel
/// contours, with the local angle θ from Snell's law.
///
/// Zero once the incident angle reaches [`SHADOW_CUTOFF_DEG`].
pub fn refraction_coefficient(period: f64, depth: f64, incident_deg: f64) -> f64 {
    if incident_deg >= SHADOW_CUTOFF_DEG {
        return 0.0;
    }
    let depth = depth.max(MIN_DEPTH);
    let theta0 = incident_deg.to_radians();
    let sin_theta = theta0.sin() * celerity_ratio(period, depth);
    let cos_theta = (1.0 - sin_theta * sin_theta).sqrt();
    (theta0.cos() / cos_theta).sqrt()
}

/// Slope-dependent breaker index (Weggel). Reduces to [`BREAKER_INDEX`] on a
/// flat bottom and grows on steeper beaches.
pub fn breaker_index(slope: f64, height: f64, period: f64) -> f64 {
    let a = 43.8 * (1.0 - (-19.0 * slope).exp());
    let b = 1.56 / (1.0 + (-19.5 * slope).exp());
    let gamma = b - a * height / (GRAVITY * period * period);
    gamma.clamp(0.5 * BREAKER_INDEX, 2.0 * BREAKER_INDEX)
}

/// Breaking height from the refracted deep-water height (Sunamura):
/// `Hb = H₀ m^0.2 (H₀ / L₀)^-0.25`.
pub fn breaking_height(deep_height: f64, period: f64, slope: f64) -> f64 {
    let steepness = deep_height / deep_water_wavelength(period);
    deep_height * slope.powf(0.2) * steepness.powf(-0.25)
}
