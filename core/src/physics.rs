// core/src/physics.rs
use log::debug;
use serde::Serialize;

use crate::error::{ensure_finite, AnalysisError, AnalysisResult};
use crate::models::SwingKinematics;
use crate::sequencing::x_factor;
use crate::types::{EnergyAnalysis, ForceKind, ForceVector, PhysicsMetrics};

pub const G: f64 = 9.81;                   // gravitasjon (m/s²)
pub const CLUB_MASS_KG: f64 = 0.46;        // køllehode
pub const BALL_MASS_KG: f64 = 0.0459;      // golfball
pub const MPH_TO_MS: f64 = 0.44704;
pub const IMPACT_CONTACT_TIME_S: f64 = 0.0005;
pub const AIR_RESISTANCE_FACTOR: f64 = 0.7; // derating av vakuum-kastebanen
pub const M_TO_YD: f64 = 1.09361;
pub const BALL_SPEED_ESTIMATE_FACTOR: f64 = 1.4; // ballfart ≈ 1.4 × køllefart uten måling
pub const GENERATION_LOSS_FACTOR: f64 = 1.15;   // tap før energien når køllehodet

// --- RoundTo trait (offentlig, brukt av cli.rs) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Andel av kraftproduksjonen per kroppssegment (prosent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerSource {
    pub segment: &'static str,
    pub share_pct: f64,
}

/// Referansetabell (domenekunnskap, ikke utledet fra input). Summerer til 100.
pub const POWER_GENERATION: [PowerSource; 5] = [
    PowerSource { segment: "Legs", share_pct: 35.0 },
    PowerSource { segment: "Hips", share_pct: 25.0 },
    PowerSource { segment: "Torso", share_pct: 20.0 },
    PowerSource { segment: "Arms", share_pct: 15.0 },
    PowerSource { segment: "Wrists", share_pct: 5.0 },
];

#[inline]
pub fn mph_to_ms(mph: f64) -> f64 {
    mph * MPH_TO_MS
}

/// ----- Input-vakter -----

fn checked_club_speed(mph: f64) -> AnalysisResult<f64> {
    if mph.is_finite() && mph > 0.0 {
        Ok(mph)
    } else {
        Err(AnalysisError::out_of_range("club_head_speed_mph", mph, "(0, inf)"))
    }
}

fn checked_ball_speed(mph: Option<f64>) -> AnalysisResult<Option<f64>> {
    match mph {
        Some(b) if !(b.is_finite() && b >= 0.0) => {
            Err(AnalysisError::out_of_range("ball_speed_mph", b, "[0, inf)"))
        }
        other => Ok(other),
    }
}

fn checked_launch_angle(deg: f64) -> AnalysisResult<f64> {
    if deg.is_finite() && (-90.0..=90.0).contains(&deg) {
        Ok(deg)
    } else {
        Err(AnalysisError::out_of_range("launch_angle_deg", deg, "[-90, 90]"))
    }
}

/// Ballfart i m/s: målt verdi hvis den finnes, ellers estimat fra køllefart.
#[inline]
pub fn ball_speed_ms(club_head_speed_ms: f64, measured_ball_mph: Option<f64>) -> f64 {
    match measured_ball_mph {
        Some(b) => mph_to_ms(b),
        None => club_head_speed_ms * BALL_SPEED_ESTIMATE_FACTOR,
    }
}

/// Energiregnskap fra køllefart og (valgfri) målt ballfart.
pub fn analyze_energy(
    club_head_speed_mph: f64,
    ball_speed_mph: Option<f64>,
) -> AnalysisResult<EnergyAnalysis> {
    let v = mph_to_ms(checked_club_speed(club_head_speed_mph)?);
    let ball_v = ball_speed_ms(v, checked_ball_speed(ball_speed_mph)?);

    let energy_to_club_head = 0.5 * CLUB_MASS_KG * v * v;
    let ball_ke = 0.5 * BALL_MASS_KG * ball_v * ball_v;
    let total = energy_to_club_head * GENERATION_LOSS_FACTOR;

    Ok(EnergyAnalysis {
        total_energy_generated_j: total,
        energy_to_club_head_j: energy_to_club_head,
        ball_kinetic_energy_j: ball_ke,
        transfer_efficiency_pct: 100.0 * ball_ke / total,
        energy_loss_j: total - ball_ke,
    })
}

/// F = m·v / kontakttid
#[inline]
pub fn impact_force(club_head_speed_ms: f64) -> f64 {
    CLUB_MASS_KG * club_head_speed_ms / IMPACT_CONTACT_TIME_S
}

const VERTICAL: [f64; 3] = [0.0, 1.0, 0.0];
const DEPTH: [f64; 3] = [0.0, 0.0, 1.0];
const LATERAL: [f64; 3] = [1.0, 0.0, 0.0];

/// Én kraftvektor per type. Retningene er illustrative akser, ikke målt.
pub fn force_vectors(club_head_speed_ms: f64) -> Vec<ForceVector> {
    let v = club_head_speed_ms;
    vec![
        ForceVector { magnitude_n: 1200.0 + 10.0 * v, direction: VERTICAL, kind: ForceKind::GroundReaction },
        ForceVector { magnitude_n: 300.0 + 3.0 * v, direction: DEPTH, kind: ForceKind::Grip },
        ForceVector { magnitude_n: 500.0 + 5.0 * v, direction: LATERAL, kind: ForceKind::Centrifugal },
        ForceVector { magnitude_n: impact_force(v), direction: DEPTH, kind: ForceKind::Impact },
    ]
}

/// Smash factor = ballfart / køllefart (begge mph).
pub fn smash_factor(ball_speed_mph: f64, club_head_speed_mph: f64) -> AnalysisResult<f64> {
    let club = checked_club_speed(club_head_speed_mph)?;
    let ball = ensure_finite("ball_speed_mph", ball_speed_mph)?;
    Ok(ball / club)
}

/// Carry (yards) fra vakuum-kastebane, derated for luftmotstand.
pub fn carry_distance_yards(club_head_speed_ms: f64, launch_angle_deg: f64) -> f64 {
    let theta = launch_angle_deg.to_radians();
    let range_m = club_head_speed_ms.powi(2) * (2.0 * theta).sin() / G;
    range_m * AIR_RESISTANCE_FACTOR * M_TO_YD
}

/// Alle skalare fysikkverdier for én sving. Ren funksjon av input.
pub fn compute_physics(kin: &SwingKinematics) -> AnalysisResult<PhysicsMetrics> {
    let club_mph = checked_club_speed(kin.club_head_speed_mph)?;
    let launch = checked_launch_angle(kin.launch_angle_deg)?;
    let measured_ball = checked_ball_speed(kin.ball_speed_mph)?;
    for (field, value) in [
        ("swing_plane_angle_deg", kin.swing_plane_angle_deg),
        ("hip_rotation_deg", kin.hip_rotation_deg),
        ("shoulder_rotation_deg", kin.shoulder_rotation_deg),
        ("wrist_cock_deg", kin.wrist_cock_deg),
        ("club_path_deg", kin.club_path_deg),
        ("swing_efficiency", kin.swing_efficiency),
    ] {
        ensure_finite(field, value)?;
    }
    if let Some(spin) = kin.spin_rate_rpm {
        ensure_finite("spin_rate_rpm", spin)?;
    }

    let v = mph_to_ms(club_mph);
    let ball_mph = measured_ball.unwrap_or(club_mph * BALL_SPEED_ESTIMATE_FACTOR);

    let metrics = PhysicsMetrics {
        club_head_speed_mph: club_mph,
        club_head_speed_ms: v,
        launch_angle_deg: launch,
        ball_speed_mph: ball_mph,
        ball_speed_estimated: measured_ball.is_none(),
        spin_rate_rpm: kin.spin_rate_rpm,
        impact_force_n: impact_force(v),
        swing_plane_angle_deg: kin.swing_plane_angle_deg,
        hip_rotation_deg: kin.hip_rotation_deg,
        shoulder_rotation_deg: kin.shoulder_rotation_deg,
        x_factor_deg: x_factor(kin.shoulder_rotation_deg, kin.hip_rotation_deg),
        wrist_cock_deg: kin.wrist_cock_deg,
        club_path_deg: kin.club_path_deg,
        swing_efficiency: kin.swing_efficiency,
        smash_factor: ball_mph / club_mph,
        carry_distance_yards: carry_distance_yards(v, launch),
    };

    debug!(
        "physics: v={:.2} m/s smash={:.2} carry={:.1} yd",
        metrics.club_head_speed_ms, metrics.smash_factor, metrics.carry_distance_yards
    );
    Ok(metrics)
}
