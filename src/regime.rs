//! Closed-form Damping Regimes
//!
//! Solutions of x'' + 2ξω₀x' + ω₀²x = 0 with x(0) = x₀ and x'(0) = v₀ for the
//! four regimes of the damping ratio ξ:
//!
//! | Regime            | ξ        | Solution                                               |
//! |-------------------|----------|--------------------------------------------------------|
//! | Undamped          | 0        | x₀·cos(ω₀t) + (v₀/ω₀)·sin(ω₀t)                          |
//! | Underdamped       | (0, 1)   | e^(−ξω₀t)·[x₀·cos(ω_d t) + B·sin(ω_d t)], ω_d = ω₀√(1−ξ²) |
//! | Critically damped | 1        | e^(−ω₀t)·[x₀(1 + ω₀t) + v₀t]                            |
//! | Overdamped        | (1, ∞)   | e^(−ξω₀t)·[x₀·cosh(ω_d t) + B·sinh(ω_d t)], ω_d = ω₀√(ξ²−1) |
//!
//! with B = (v₀ + x₀ξω₀)/ω_d. Constructors validate their inputs so that
//! ω_d is always real and non-zero once a regime value exists.

use crate::error::{Error, Result};

/// The four damping regimes, in plotting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// ξ = 0
    Undamped,
    /// 0 < ξ < 1
    Underdamped,
    /// ξ = 1
    CriticallyDamped,
    /// ξ > 1
    Overdamped,
}

impl Regime {
    /// All regimes, in plotting order.
    pub const ALL: [Regime; 4] = [
        Regime::Undamped,
        Regime::Underdamped,
        Regime::CriticallyDamped,
        Regime::Overdamped,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Regime::Undamped => "Undamped",
            Regime::Underdamped => "Underdamped",
            Regime::CriticallyDamped => "Critically damped",
            Regime::Overdamped => "Overdamped",
        }
    }
}

/// A closed-form displacement response x(t).
pub trait Response {
    /// Displacement at time `t`
    fn displacement(&self, t: f64) -> f64;

    /// Damping ratio ξ of this regime
    fn damping_ratio(&self) -> f64;
}

fn check_omega0(omega0: f64) -> Result<()> {
    if !omega0.is_finite() || omega0 <= 0.0 {
        return Err(Error::invalid("omega0", omega0, "must be > 0"));
    }
    Ok(())
}

/// ξ = 0: pure harmonic motion at ω₀.
#[derive(Debug, Clone, Copy)]
pub struct Undamped {
    omega0: f64,
    x0: f64,
    /// v₀/ω₀
    b: f64,
}

impl Undamped {
    /// Create the undamped response.
    pub fn new(omega0: f64, x0: f64, v0: f64) -> Result<Self> {
        check_omega0(omega0)?;
        Ok(Self {
            omega0,
            x0,
            b: v0 / omega0,
        })
    }
}

impl Response for Undamped {
    fn displacement(&self, t: f64) -> f64 {
        let wt = self.omega0 * t;
        self.x0 * wt.cos() + self.b * wt.sin()
    }

    fn damping_ratio(&self) -> f64 {
        0.0
    }
}

/// 0 < ξ < 1: decaying oscillation at the damped frequency ω_d.
#[derive(Debug, Clone, Copy)]
pub struct Underdamped {
    xi: f64,
    omega0: f64,
    omega_d: f64,
    x0: f64,
    b: f64,
}

impl Underdamped {
    /// Create the underdamped response. Rejects ξ outside (0, 1).
    pub fn new(omega0: f64, xi: f64, x0: f64, v0: f64) -> Result<Self> {
        check_omega0(omega0)?;
        if xi.is_nan() || xi <= 0.0 || xi >= 1.0 {
            return Err(Error::invalid(
                "xi_under",
                xi,
                "must lie strictly inside (0, 1)",
            ));
        }
        let omega_d = omega0 * (1.0 - xi * xi).sqrt();
        Ok(Self {
            xi,
            omega0,
            omega_d,
            x0,
            b: (v0 + x0 * xi * omega0) / omega_d,
        })
    }

    /// Damped natural frequency ω_d = ω₀√(1 − ξ²)
    pub fn damped_frequency(&self) -> f64 {
        self.omega_d
    }

    /// Oscillation period 2π/ω_d
    pub fn period(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.omega_d
    }

    /// Envelope magnitude A(t) = e^(−ξω₀t)·√(x₀² + B²).
    ///
    /// The response satisfies −A(t) ≤ x(t) ≤ A(t).
    pub fn envelope(&self, t: f64) -> f64 {
        (-self.xi * self.omega0 * t).exp() * self.x0.hypot(self.b)
    }
}

impl Response for Underdamped {
    fn displacement(&self, t: f64) -> f64 {
        let wt = self.omega_d * t;
        (-self.xi * self.omega0 * t).exp() * (self.x0 * wt.cos() + self.b * wt.sin())
    }

    fn damping_ratio(&self) -> f64 {
        self.xi
    }
}

/// ξ = 1: fastest non-oscillatory return, polynomial times exponential.
#[derive(Debug, Clone, Copy)]
pub struct CriticallyDamped {
    omega0: f64,
    x0: f64,
    v0: f64,
}

impl CriticallyDamped {
    /// Create the critically damped response.
    pub fn new(omega0: f64, x0: f64, v0: f64) -> Result<Self> {
        check_omega0(omega0)?;
        Ok(Self { omega0, x0, v0 })
    }

    /// Exponential decay rate, equal to ω₀
    pub fn decay_rate(&self) -> f64 {
        self.omega0
    }
}

impl Response for CriticallyDamped {
    fn displacement(&self, t: f64) -> f64 {
        (-self.omega0 * t).exp() * (self.x0 * (1.0 + self.omega0 * t) + self.v0 * t)
    }

    fn damping_ratio(&self) -> f64 {
        1.0
    }
}

/// ξ > 1: non-oscillatory decay, hyperbolic functions replace trigonometric ones.
#[derive(Debug, Clone, Copy)]
pub struct Overdamped {
    xi: f64,
    omega0: f64,
    omega_d: f64,
    x0: f64,
    b: f64,
}

impl Overdamped {
    /// Create the overdamped response. Rejects ξ ≤ 1.
    pub fn new(omega0: f64, xi: f64, x0: f64, v0: f64) -> Result<Self> {
        check_omega0(omega0)?;
        if !xi.is_finite() || xi <= 1.0 {
            return Err(Error::invalid("xi_over", xi, "must be > 1"));
        }
        let omega_d = omega0 * (xi * xi - 1.0).sqrt();
        Ok(Self {
            xi,
            omega0,
            omega_d,
            x0,
            b: (v0 + x0 * xi * omega0) / omega_d,
        })
    }

    /// Hyperbolic rate ω_d = ω₀√(ξ² − 1)
    pub fn damped_frequency(&self) -> f64 {
        self.omega_d
    }
}

impl Response for Overdamped {
    fn displacement(&self, t: f64) -> f64 {
        // e^(−ξω₀t)·cosh(ω_d t) and e^(−ξω₀t)·sinh(ω_d t) expanded into two
        // decaying exponentials; cosh alone overflows for large ω_d·t.
        let decay = self.xi * self.omega0;
        let slow = ((self.omega_d - decay) * t).exp();
        let fast = ((-self.omega_d - decay) * t).exp();
        self.x0 * 0.5 * (slow + fast) + self.b * 0.5 * (slow - fast)
    }

    fn damping_ratio(&self) -> f64 {
        self.xi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 1e-4;

    /// Residual of x'' + 2ξω₀x' + ω₀²x by central differences.
    fn residual<R: Response>(r: &R, omega0: f64, t: f64) -> f64 {
        let xm = r.displacement(t - H);
        let x = r.displacement(t);
        let xp = r.displacement(t + H);
        let dx = (xp - xm) / (2.0 * H);
        let ddx = (xp - 2.0 * x + xm) / (H * H);
        ddx + 2.0 * r.damping_ratio() * omega0 * dx + omega0 * omega0 * x
    }

    fn initial_velocity<R: Response>(r: &R) -> f64 {
        (r.displacement(H) - r.displacement(-H)) / (2.0 * H)
    }

    fn assert_solves_equation<R: Response>(name: &str, r: &R, omega0: f64) {
        for i in 1..40 {
            let t = i as f64 * 0.2;
            let value = residual(r, omega0, t);
            assert!(value.abs() < 1e-4, "{name}: residual {value} at t = {t}");
        }
    }

    #[test]
    fn test_all_regimes_satisfy_equation_of_motion() {
        let (omega0, x0, v0) = (2.0, 1.0, 0.5);

        let u = Undamped::new(omega0, x0, v0).unwrap();
        assert_solves_equation("undamped", &u, omega0);

        let ud = Underdamped::new(omega0, 0.2, x0, v0).unwrap();
        assert_solves_equation("underdamped", &ud, omega0);

        let c = CriticallyDamped::new(omega0, x0, v0).unwrap();
        assert_solves_equation("critical", &c, omega0);

        let o = Overdamped::new(omega0, 1.5, x0, v0).unwrap();
        assert_solves_equation("overdamped", &o, omega0);
    }

    #[test]
    fn test_initial_conditions() {
        let (omega0, x0, v0) = (3.0, -0.7, 1.3);
        let u = Undamped::new(omega0, x0, v0).unwrap();
        let ud = Underdamped::new(omega0, 0.35, x0, v0).unwrap();
        let c = CriticallyDamped::new(omega0, x0, v0).unwrap();
        let o = Overdamped::new(omega0, 2.2, x0, v0).unwrap();

        assert_eq!(u.displacement(0.0), x0);
        assert_eq!(ud.displacement(0.0), x0);
        assert_eq!(c.displacement(0.0), x0);
        assert_eq!(o.displacement(0.0), x0);

        for (name, v) in [
            ("undamped", initial_velocity(&u)),
            ("underdamped", initial_velocity(&ud)),
            ("critical", initial_velocity(&c)),
            ("overdamped", initial_velocity(&o)),
        ] {
            assert!((v - v0).abs() < 1e-6, "{name}: x'(0) = {v}, expected {v0}");
        }
    }

    #[test]
    fn test_envelope_bounds_response() {
        let r = Underdamped::new(2.0, 0.2, 1.0, 0.5).unwrap();
        for i in 0..=800 {
            let t = i as f64 * 0.01;
            let x = r.displacement(t);
            let a = r.envelope(t);
            assert!(x.abs() <= a * (1.0 + 1e-12), "|x({t})| = {} > A = {a}", x.abs());
        }
    }

    #[test]
    fn test_period_and_frequencies() {
        let ud = Underdamped::new(2.0, 0.2, 1.0, 0.5).unwrap();
        assert!((ud.damped_frequency() - 1.959_591_794).abs() < 1e-8);
        assert!((ud.period() - 3.206_374_5).abs() < 1e-6);

        let o = Overdamped::new(2.0, 1.5, 1.0, 0.5).unwrap();
        assert!((o.damped_frequency() - 2.236_067_977).abs() < 1e-8);

        let c = CriticallyDamped::new(2.0, 1.0, 0.5).unwrap();
        assert_eq!(c.decay_rate(), 2.0);
    }

    #[test]
    fn test_overdamped_matches_hyperbolic_form() {
        let (omega0, xi, x0, v0) = (2.0_f64, 1.5_f64, 1.0_f64, 0.5_f64);
        let o = Overdamped::new(omega0, xi, x0, v0).unwrap();
        let wd = o.damped_frequency();
        let b = (v0 + x0 * xi * omega0) / wd;
        for i in 0..=40 {
            let t = i as f64 * 0.2;
            let expected =
                (-xi * omega0 * t).exp() * (x0 * (wd * t).cosh() + b * (wd * t).sinh());
            assert!(
                (o.displacement(t) - expected).abs() < 1e-12,
                "t = {t}: {} vs {expected}",
                o.displacement(t)
            );
        }
    }

    #[test]
    fn test_overdamped_long_horizon_stays_finite() {
        // ω_d·t ≈ 2800, far beyond where cosh overflows
        let o = Overdamped::new(10.0, 3.0, 10.0, 5.0).unwrap();
        let x = o.displacement(100.0);
        assert!(x.is_finite());
        assert!(x >= 0.0 && x < 1e-10);
    }

    #[test]
    fn test_constructors_reject_undefined_frequencies() {
        assert!(Undamped::new(0.0, 1.0, 0.0).is_err());
        assert!(Underdamped::new(2.0, 1.0, 1.0, 0.0).is_err());
        assert!(Underdamped::new(2.0, 0.0, 1.0, 0.0).is_err());
        assert!(Underdamped::new(2.0, f64::NAN, 1.0, 0.0).is_err());
        assert!(Overdamped::new(2.0, 1.0, 1.0, 0.0).is_err());
        assert!(Overdamped::new(2.0, 0.5, 1.0, 0.0).is_err());
        assert!(CriticallyDamped::new(-1.0, 1.0, 0.0).is_err());
    }
}
