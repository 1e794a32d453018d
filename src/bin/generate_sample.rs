use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Conductance of the mixture after adding `v` ml of NaOH.
///
/// Three straight branches meeting at the two equivalence points:
/// falling while H⁺ is replaced by Na⁺, gently rising while acetate forms,
/// then steep once free OH⁻ accumulates.
fn conductance(v: f64, v_hcl: f64, v_total: f64) -> f64 {
    const START_MS: f64 = 6.0;
    const HCL_SLOPE: f64 = -1.6;
    const ACETATE_SLOPE: f64 = 0.35;
    const EXCESS_SLOPE: f64 = 1.9;

    let at_hcl = START_MS + HCL_SLOPE * v_hcl;
    let at_total = at_hcl + ACETATE_SLOPE * (v_total - v_hcl);

    if v <= v_hcl {
        START_MS + HCL_SLOPE * v
    } else if v <= v_total {
        at_hcl + ACETATE_SLOPE * (v - v_hcl)
    } else {
        at_total + EXCESS_SLOPE * (v - v_total)
    }
}

/// What the meter shows: the true value plus a small jitter, to 0.01 mS.
fn meter_reading(true_ms: f64, jitter_ms: f64, rng: &mut impl Rng) -> f64 {
    let shown = true_ms + rng.gen_range(-jitter_ms..=jitter_ms);
    (shown * 100.0).round() / 100.0
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_titration.csv".to_string());

    // Fixed seed so the file is reproducible.
    let mut rng = StdRng::seed_from_u64(42);

    // Breakpoints the user should read off the plot.
    let v_hcl = 2.0;
    let v_total = 5.0;
    let jitter_ms = 0.05;

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["volume_ml", "conductance_ms"])?;

    // 0.0 → 8.0 ml in 0.2 ml burette steps
    let n_steps = 41;
    for i in 0..n_steps {
        let v = i as f64 * 0.2;
        let c = meter_reading(conductance(v, v_hcl, v_total), jitter_ms, &mut rng);
        writer.write_record([format!("{v:.1}"), format!("{c:.2}")])?;
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {n_steps} readings to {output_path} (breakpoints at {v_hcl} and {v_total} ml)"
    );
    Ok(())
}
