//! # StrucVision CLI Application
//!
//! Terminal front end for the BNBC 2020 lateral design calculators.
//!
//! ## Status
//!
//! Simple prompt-driven demo over `bnbc_core`; a richer interface can
//! layer on top of the same JSON-first API.

use std::io::{self, BufRead, Write};

use bnbc_core::calculations::base_shear::{self, BaseShearInput};
use bnbc_core::calculations::drift::{self, DriftInput, DriftStory};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("StrucVision CLI - BNBC 2020 Lateral Design Calculator");
    println!("=====================================================");
    println!();

    let height_m = prompt_f64("Enter building height (m) [30.0]: ", 30.0);
    let weight_kn = prompt_f64("Enter seismic weight W (kN) [50000.0]: ", 50000.0);

    println!();
    println!("Calculating base shear for a special steel moment frame in Dhaka...");
    println!();

    let input = BaseShearInput {
        building_id: "CLI-Demo".to_string(),
        height_m,
        weight_kn,
        ..BaseShearInput::default()
    };

    let result = match base_shear::calculate(&input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return;
        }
    };

    println!("═══════════════════════════════════════");
    println!("  SEISMIC BASE SHEAR RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Location:   {}", input.town);
    println!("  Occupancy:  {}", input.occupancy);
    println!("  Site class: {}", input.site_class);
    println!("  System:     {}", input.system);
    println!("  Height:     {:.1} m", input.height_m);
    println!("  Weight:     {:.0} kN", input.weight_kn);
    println!();
    println!("Code Parameters:");
    println!("  Z = {:.2}   I = {:.2}   S = {:.2}", result.zone_coefficient, result.importance_factor, result.soil_factor);
    println!("  R = {:.1}   Ω0 = {:.1}   Cd = {:.1}", result.r, result.omega0, result.cd);
    println!("  SDC: {}   Height limit: {}", result.sdc, result.height_limit_display);
    println!();
    println!("Period & Spectrum:");
    println!("  T  = {:.3} s (Ct = {:.4}, m = {:.2})", result.fundamental_period_s, result.ct, result.m);
    println!("  TB = {:.2} s, TC = {:.2} s, TD = {:.2} s", result.tb_s, result.tc_s, result.td_s);
    println!("  SDS = {:.3}   SD1 = {:.3}", result.sds, result.sd1);
    println!("  Cs = {:.3} (bounds: {:.3} .. {:.3})", result.cs, result.cs_min, result.cs_max);
    println!();
    println!("═══════════════════════════════════════");
    println!("  Sa = {:.4} g    V = {:.1} kN", result.design_spectral_acceleration, result.base_shear_kn);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }

    // Feed the computed period into a drift demo for a short stack
    println!();
    println!("Story drift demo (using T = {:.3} s):", result.fundamental_period_s);
    println!();

    let drift_input = DriftInput {
        stories: vec![
            DriftStory { story: "Roof".to_string(), elevation_ft: 35.0, displacement_in: 1.14 },
            DriftStory { story: "3rd".to_string(), elevation_ft: 25.0, displacement_in: 0.73 },
            DriftStory { story: "2nd".to_string(), elevation_ft: 15.0, displacement_in: 0.40 },
            DriftStory { story: "GF".to_string(), elevation_ft: 0.0, displacement_in: 0.0 },
        ],
        fundamental_period_s: result.fundamental_period_s,
    };

    match drift::calculate(&drift_input) {
        Ok(drift_result) => {
            println!("  {:<6} {:>9} {:>9} {:>9} {:>10}  Remark", "Story", "Elev(ft)", "Ht(ft)", "Drift(in)", "Allow(in)");
            for row in &drift_result.rows {
                println!(
                    "  {:<6} {:>9.1} {:>9.1} {:>9.3} {:>10.3}  {}",
                    row.story,
                    row.elevation_ft,
                    row.story_height_ft,
                    row.drift_in,
                    row.allowable_drift_in,
                    row.remark.as_remark()
                );
            }
            println!();
            println!(
                "  Overall: {} (max drift {:.3} in at {})",
                drift_result.summary.overall,
                drift_result.summary.max_drift_in,
                drift_result.summary.max_drift_story
            );
        }
        Err(e) => eprintln!("Drift error: {}", e),
    }
}
