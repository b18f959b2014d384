use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use swinggraph_core::report::validate_capture;
use swinggraph_core::{
    AnalysisConfig, AnalysisError, AnalysisMetrics, CaptureMeta, ClassificationResult, Environment,
    PhaseBoundaries, ReportKey, SubAnalysis, SwingAnalyzer, SwingCapture, SwingKinematics,
    SwingReport, TrackingSample, Vec3,
};

const FPS: f64 = 60.0;
const FRAMES: u32 = 30;

fn club_head(i: u32) -> Vec3 {
    let f = f64::from(i);
    match i {
        0..=2 => Vec3::new(0.0, 0.0, 0.0),
        3..=17 => Vec3::new(-(f - 2.0) * 0.05, (f - 2.0) * 0.1, 0.0),
        18..=22 => Vec3::new(-0.75 + (f - 17.0) * 0.15, 1.5 - (f - 17.0) * 0.3, 0.0),
        _ => Vec3::new((f - 22.0) * 0.1, (f - 22.0) * 0.1, 0.0),
    }
}

fn capture() -> SwingCapture {
    let samples = (0..FRAMES)
        .map(|i| TrackingSample {
            t: f64::from(i) / FPS,
            frame: i,
            joints: BTreeMap::from([("hip".to_string(), Vec3::new(0.0, 1.0, 0.0))]),
            joint_confidence: BTreeMap::from([
                ("hip".to_string(), 0.9),
                ("shoulder".to_string(), 0.85),
                ("wrist".to_string(), 0.8),
            ]),
            club_head: Some(club_head(i)),
            club_confidence: 0.9,
        })
        .collect();

    SwingCapture {
        samples,
        meta: CaptureMeta {
            frame_count: FRAMES as usize,
            frame_rate: FPS,
            duration_s: f64::from(FRAMES) / FPS,
            recorded_at: None,
            environment: Environment { lighting: 0.8, camera_stability: 0.9, resolution: 0.8 },
        },
        kinematics: SwingKinematics {
            club_head_speed_mph: 100.0,
            launch_angle_deg: 12.0,
            ball_speed_mph: Some(148.0),
            spin_rate_rpm: None,
            swing_plane_angle_deg: 60.0,
            hip_rotation_deg: 45.0,
            shoulder_rotation_deg: 90.0,
            wrist_cock_deg: 85.0,
            club_path_deg: 1.0,
            swing_efficiency: 0.85,
            hip_start_s: 0.0,
            shoulder_start_s: 0.05,
            arm_start_s: 0.10,
            club_start_s: 0.15,
        },
        phases: Some(PhaseBoundaries {
            setup: 0,
            takeaway: 3,
            mid_backswing: 10,
            top: 17,
            transition: 18,
            mid_downswing: 20,
            impact: 22,
            follow_through: 26,
            finish: Some(29),
        }),
    }
}

fn on_plane() -> ClassificationResult {
    ClassificationResult::new("on_plane", 0.9, 0.2)
}

#[test]
fn assembles_full_report() {
    let report = SwingReport::assemble(&capture(), Some(&on_plane()), &AnalysisConfig::default()).unwrap();

    // tempo 14:5 = 2.8 → 95
    assert!((report.scores.scores.tempo - 95.0).abs() < 1e-9);
    assert!((report.scores.scores.plane - 97.0).abs() < 1e-9);
    assert!((report.scores.scores.kinematics - 100.0).abs() < 1e-9);
    assert!((report.scores.scores.impact - 1.48 / 1.5 * 100.0).abs() < 1e-9);
    assert!((report.scores.scores.consistency - 80.0).abs() < 1e-9);
    assert_eq!(report.grade(), "A+");
    assert!(report.suggestions.is_empty());

    assert_eq!(report.forces.len(), 4);
    assert_eq!(report.phases.total_frames, 30);
    assert!(report.durations.backswing_s > report.durations.downswing_s);
    assert_eq!(report.classification, on_plane());

    let expected = report.scores.overall_score * report.tracking.overall_score * 0.9;
    assert!((report.overall_quality_score - expected).abs() < 1e-12);
    assert!((0.0..=100.0).contains(&report.overall_quality_score));
}

#[test]
fn assembling_twice_is_bit_identical() {
    let cfg = AnalysisConfig::default();
    let a = SwingReport::assemble(&capture(), Some(&on_plane()), &cfg).unwrap();
    let b = SwingReport::assemble(&capture(), Some(&on_plane()), &cfg).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.scores.overall_score.to_bits(), b.scores.overall_score.to_bits());
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}

#[test]
fn phases_are_detected_when_not_supplied() {
    let cap = SwingCapture { phases: None, ..capture() };
    let report = SwingReport::assemble(&cap, Some(&on_plane()), &AnalysisConfig::default()).unwrap();
    assert_eq!(report.phases.boundaries.impact, 22);
    assert_eq!(report.phases.boundaries.finish, Some(29));
}

#[test]
fn steep_classification_leads_suggestions_with_plane_drill() {
    let steep = ClassificationResult::new("too_steep", 0.9, 0.2);
    let report = SwingReport::assemble(&capture(), Some(&steep), &AnalysisConfig::default()).unwrap();
    // 70 - 40 × 0.9 = 34
    assert!((report.scores.scores.plane - 34.0).abs() < 1e-9);
    assert_eq!(report.suggestions[0].area, "Swing Plane");
    assert!(report.suggestions[0].issue.contains("steep"));
}

#[test]
fn classifier_sub_analyses_override_derived_scores() {
    let mut cls = on_plane();
    cls.tempo = Some(SubAnalysis { score: 42.0, note: Some("rushed transition".into()) });
    cls.impact = Some(SubAnalysis { score: 61.0, note: None });
    let report = SwingReport::assemble(&capture(), Some(&cls), &AnalysisConfig::default()).unwrap();
    assert_eq!(report.scores.scores.tempo, 42.0);
    assert_eq!(report.scores.scores.impact, 61.0);
    assert_eq!(report.suggestions[0].area, "Tempo");
}

#[test]
fn missing_classification_is_reported() {
    let err = SwingReport::assemble(&capture(), None, &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingUpstreamResult(_)));
}

#[test]
fn out_of_range_classification_is_rejected() {
    let cls = ClassificationResult::new("on_plane", 1.3, 0.2);
    let err = SwingReport::assemble(&capture(), Some(&cls), &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::OutOfRangeInput { field: "classification.confidence", .. }));
}

#[test]
fn partial_capture_fails_fast() {
    let mut cap = capture();
    cap.meta.frame_count = 45; // trackeren er ikke ferdig
    let err = SwingReport::assemble(&cap, Some(&on_plane()), &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidCapture(ref m) if m.contains("partial")), "{err}");
}

#[test]
fn too_few_frames_is_invalid() {
    let mut cap = capture();
    cap.samples.truncate(5);
    cap.meta.frame_count = 5;
    let err = validate_capture(&cap, &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidCapture(_)));
}

#[test]
fn invalid_capture_variants() {
    let cfg = AnalysisConfig::default();

    let mut zero_fps = capture();
    zero_fps.meta.frame_rate = 0.0;
    assert!(matches!(validate_capture(&zero_fps, &cfg), Err(AnalysisError::InvalidCapture(_))));

    let mut shuffled = capture();
    shuffled.samples.swap(4, 5);
    assert!(matches!(validate_capture(&shuffled, &cfg), Err(AnalysisError::InvalidCapture(_))));

    let mut bad_phases = capture();
    bad_phases.phases = Some(PhaseBoundaries { impact: 12, ..bad_phases.phases.unwrap() });
    let err = SwingReport::assemble(&bad_phases, Some(&on_plane()), &cfg).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidCapture(_)));

    let mut bad_conf = capture();
    bad_conf.samples[3].club_confidence = 1.5;
    assert!(matches!(
        validate_capture(&bad_conf, &cfg),
        Err(AnalysisError::OutOfRangeInput { field: "club_confidence", .. })
    ));
}

#[test]
fn custom_weights_flow_into_breakdown() {
    let cfg = AnalysisConfig {
        score_weights: Some(swinggraph_core::SubScores {
            tempo: 0.0,
            plane: 0.0,
            kinematics: 0.0,
            impact: 0.0,
            consistency: 1.0,
        }),
        ..AnalysisConfig::default()
    };
    let report = SwingReport::assemble(&capture(), Some(&on_plane()), &cfg).unwrap();
    assert!((report.scores.overall_score - 80.0).abs() < 1e-9);
    assert_eq!(report.grade(), "A-");
}

#[test]
fn cache_key_is_content_derived() {
    let cfg = AnalysisConfig::default();
    let k1 = ReportKey::from_inputs(&capture(), &on_plane(), &cfg);
    let k2 = ReportKey::from_inputs(&capture(), &on_plane(), &cfg);
    assert_eq!(k1, k2);

    let steep = ClassificationResult::new("too_steep", 0.9, 0.2);
    let k3 = ReportKey::from_inputs(&capture(), &steep, &cfg);
    assert_ne!(k1, k3);

    let mut moved = capture();
    moved.samples[10].club_confidence = 0.4;
    let k4 = ReportKey::from_inputs(&moved, &on_plane(), &cfg);
    assert_ne!(k1, k4);

    // anbefalinger og notater kopieres inn i rapporten
    let mut advised = on_plane();
    advised.recommendations.push("Keep the lead arm straighter at the top.".into());
    let k5 = ReportKey::from_inputs(&capture(), &advised, &cfg);
    assert_ne!(k1, k5);

    let mut noted = on_plane();
    noted.tempo = Some(SubAnalysis { score: 90.0, note: Some("quick transition".into()) });
    let mut renoted = noted.clone();
    renoted.tempo = Some(SubAnalysis { score: 90.0, note: Some("smooth transition".into()) });
    let k6 = ReportKey::from_inputs(&capture(), &noted, &cfg);
    let k7 = ReportKey::from_inputs(&capture(), &renoted, &cfg);
    assert_ne!(k6, k7);

    let set: HashSet<ReportKey> = [k1, k2, k3, k4, k5, k6, k7].into_iter().collect();
    assert_eq!(set.len(), 6);
}

#[test]
fn different_reports_get_different_keys() {
    let cfg = AnalysisConfig::default();
    let mut a = on_plane();
    a.recommendations.push("Shorten the backswing.".into());
    let b = on_plane();

    let ra = SwingReport::assemble(&capture(), Some(&a), &cfg).unwrap();
    let rb = SwingReport::assemble(&capture(), Some(&b), &cfg).unwrap();
    assert_ne!(ra, rb);
    assert_ne!(
        ReportKey::from_inputs(&capture(), &a, &cfg),
        ReportKey::from_inputs(&capture(), &b, &cfg)
    );
}

#[test]
fn serialize_error_is_its_own_variant() {
    let err = AnalysisError::Serialize("key must be a string".into());
    assert_eq!(err.to_string(), "serialization error: key must be a string");
    assert!(!matches!(err, AnalysisError::Parse { .. }));
}

#[test]
fn analyzer_records_metrics() {
    let metrics = AnalysisMetrics::new().unwrap();
    let analyzer = SwingAnalyzer::new(AnalysisConfig::default()).unwrap().with_metrics(metrics.clone());

    assert!(analyzer.analyze(&capture(), Some(&on_plane())).is_ok());
    assert!(analyzer.analyze(&capture(), None).is_err());

    assert_eq!(metrics.snapshot(), (1, 1));
    let text = metrics.render();
    assert!(text.contains("swing_reports_total 1"), "{text}");
    assert!(text.contains("swing_reports_rejected_total 1"), "{text}");
}

#[test]
fn analyzer_rejects_invalid_config() {
    let cfg = AnalysisConfig { min_frames: 1, ..AnalysisConfig::default() };
    assert!(SwingAnalyzer::new(cfg).is_err());
}

#[test]
fn report_can_be_shared_across_threads() {
    let report = Arc::new(
        SwingReport::assemble(&capture(), Some(&on_plane()), &AnalysisConfig::default()).unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let r = Arc::clone(&report);
            std::thread::spawn(move || r.scores.overall_score)
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), report.scores.overall_score);
    }
}
