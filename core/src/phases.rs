use log::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{PhaseBoundaries, TrackingSample, Vec3};
use crate::smoothing::median3;
use crate::types::{PhaseDurations, SwingPhase, SwingPhases};

/// Forflytning fra adresse som markerer takeaway (capture-enheter).
pub const TAKEAWAY_THRESHOLD: f64 = 0.05;
/// Ideelt tempo backswing:downswing.
pub const IDEAL_TEMPO_RATIO: f64 = 3.0;

impl SwingPhases {
    /// Valider grensene. Ikke-monotone grenser eller frame rate <= 0 avvises.
    pub fn new(
        boundaries: PhaseBoundaries,
        total_frames: usize,
        frame_rate: f64,
    ) -> AnalysisResult<Self> {
        if !(frame_rate.is_finite() && frame_rate > 0.0) {
            return Err(AnalysisError::InvalidCapture(format!(
                "frame rate must be positive, got {frame_rate}"
            )));
        }
        let ordered = boundaries.ordered();
        if let Some(w) = ordered.windows(2).find(|w| w[1] < w[0]) {
            return Err(AnalysisError::InvalidCapture(format!(
                "phase boundaries are not monotonic ({} after {})",
                w[1], w[0]
            )));
        }
        Ok(Self { boundaries, total_frames, frame_rate })
    }

    #[inline]
    fn secs(&self, from: u32, to: u32) -> f64 {
        // feltene er pub; en struct-literal kan omgå `new`
        f64::from(to.saturating_sub(from)) / self.frame_rate
    }

    pub fn setup_duration(&self) -> f64 {
        self.secs(self.boundaries.setup, self.boundaries.takeaway)
    }

    pub fn backswing_duration(&self) -> f64 {
        self.secs(self.boundaries.takeaway, self.boundaries.top)
    }

    pub fn downswing_duration(&self) -> f64 {
        self.secs(self.boundaries.top, self.boundaries.impact)
    }

    pub fn follow_through_duration(&self) -> f64 {
        let end = self.boundaries.finish.unwrap_or(self.boundaries.follow_through);
        self.secs(self.boundaries.impact, end)
    }

    /// Backswing / downswing. None når downswing har null varighet.
    pub fn tempo_ratio(&self) -> Option<f64> {
        let down = self.downswing_duration();
        if down > 0.0 { Some(self.backswing_duration() / down) } else { None }
    }

    pub fn durations(&self) -> PhaseDurations {
        let setup_s = self.setup_duration();
        let backswing_s = self.backswing_duration();
        let downswing_s = self.downswing_duration();
        let follow_through_s = self.follow_through_duration();
        PhaseDurations {
            setup_s,
            backswing_s,
            downswing_s,
            follow_through_s,
            total_s: setup_s + backswing_s + downswing_s + follow_through_s,
            tempo_ratio: self.tempo_ratio(),
        }
    }

    /// Fase for en absolutt frame-indeks (halvåpne intervaller).
    /// Frames før setup havner i Setup, frames etter siste grense i Follow Through.
    pub fn phase_at_frame(&self, frame: u32) -> SwingPhase {
        let b = &self.boundaries;
        let table = [
            (b.takeaway, SwingPhase::Setup),
            (b.mid_backswing, SwingPhase::Takeaway),
            (b.top, SwingPhase::Backswing),
            (b.transition, SwingPhase::Transition),
            (b.mid_downswing, SwingPhase::EarlyDownswing),
            (b.impact, SwingPhase::LateDownswing),
            (b.follow_through, SwingPhase::ImpactZone),
        ];
        table
            .iter()
            .find(|(upper, _)| frame < *upper)
            .map(|(_, phase)| *phase)
            .unwrap_or(SwingPhase::FollowThrough)
    }
}

/// Tempo-delscore (0..100) fra backswing:downswing; 0 hvis udefinert.
pub fn tempo_score(tempo_ratio: Option<f64>) -> f64 {
    match tempo_ratio {
        Some(r) if r.is_finite() => (100.0 - (r - IDEAL_TEMPO_RATIO).abs() * 25.0).clamp(0.0, 100.0),
        _ => 0.0,
    }
}

/// Utled fasegrenser fra køllehodets bane når trackeren ikke leverte dem.
pub fn detect_boundaries(samples: &[TrackingSample]) -> AnalysisResult<PhaseBoundaries> {
    if samples.len() < 3 {
        return Err(AnalysisError::InvalidCapture(format!(
            "need at least 3 frames to detect phases, got {}",
            samples.len()
        )));
    }
    let positions: Vec<Vec3> = samples
        .iter()
        .map(|s| {
            s.club_head.ok_or_else(|| {
                AnalysisError::InvalidCapture(format!(
                    "frame {} has no club-head position and no phase boundaries were supplied",
                    s.frame
                ))
            })
        })
        .collect::<AnalysisResult<_>>()?;

    let heights = median3(&positions.iter().map(|p| p.y).collect::<Vec<_>>());
    let address = positions[0];
    let last = samples.len() - 1;

    // 1) takeaway: første frame som har forlatt adresseposisjonen
    let takeaway = positions
        .iter()
        .position(|p| p.distance_to(&address) > TAKEAWAY_THRESHOLD)
        .unwrap_or(1);

    // 2) top: høyeste punkt etter takeaway (første ved likhet)
    let top = (takeaway..=last).fold(takeaway, |best, i| if heights[i] > heights[best] { i } else { best });

    // 3) impact: nærmest adresse etter top
    let impact = ((top + 1).min(last)..=last).fold((top + 1).min(last), |best, i| {
        if positions[i].distance_to(&address) < positions[best].distance_to(&address) { i } else { best }
    });

    let mid_backswing = takeaway + (top - takeaway) / 2;
    let mid_downswing = top + (impact - top) / 2;
    let transition = (top + 1).min(mid_downswing.max(top));
    let follow_through = impact + (last - impact) / 2;

    let frame = |i: usize| samples[i].frame;
    let boundaries = PhaseBoundaries {
        setup: frame(0),
        takeaway: frame(takeaway),
        mid_backswing: frame(mid_backswing),
        top: frame(top),
        transition: frame(transition),
        mid_downswing: frame(mid_downswing),
        impact: frame(impact),
        follow_through: frame(follow_through),
        finish: Some(frame(last)),
    };
    debug!("detected phase boundaries: {:?}", boundaries);
    Ok(boundaries)
}
