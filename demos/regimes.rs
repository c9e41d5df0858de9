//! Basic usage: evaluate the four damping regimes and print a few samples.
//!
//! Uses ω₀ = 2 rad/s, x₀ = 1 m, v₀ = 0.5 m/s, ξ_u = 0.2, ξ_o = 1.5 over 8 s.
//!
//! Run with:
//!   cargo run --example regimes

use damped_oscillator::{evaluate, DerivedMetrics, OscillatorParameters, Regime};

fn main() {
    let params = OscillatorParameters::default();
    let traj = evaluate(&params).unwrap();

    println!(
        "Damped oscillator (ω₀ = {}, x₀ = {}, v₀ = {})",
        params.omega0, params.x0, params.v0
    );
    println!("  Samples:     {}", traj.len());
    println!("  Horizon:     {} s", params.t_max);
    println!();

    print!("  {:>6}", "t [s]");
    for regime in Regime::ALL {
        print!("  {:>18}", regime.name());
    }
    println!("  {:>12}", "envelope");

    let step = traj.len() / 10;
    for i in (0..traj.len()).step_by(step) {
        print!("  {:>6.3}", traj.time[i]);
        for regime in Regime::ALL {
            print!("  {:>18.6}", traj.displacement(regime)[i]);
        }
        println!("  {:>12.6}", traj.envelope_upper[i]);
    }
    println!();

    println!("{}", DerivedMetrics::new(&params, &traj));
}
