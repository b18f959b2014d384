use serde_json::json;
use swinggraph_core::*;

fn capture_json(frame_count: usize) -> serde_json::Value {
    // 20 frames @ 60 Hz, fasegrenser levert av trackeren
    let samples: Vec<_> = (0..20).map(|i| json!({
        "t": i as f64 / 60.0,
        "frame": i,
        "joint_confidence": {"hip": 0.9, "shoulder": 0.9},
        "club_head": {"x": 0.0, "y": 0.0, "z": 0.0},
        "club_confidence": 0.95
    })).collect();

    json!({
        "samples": samples,
        "meta": {
            "frame_count": frame_count,
            "frame_rate": 60.0,
            "duration_s": 20.0 / 60.0,
            "environment": {"lighting": 0.9, "camera_stability": 0.9, "resolution": 0.9}
        },
        "kinematics": {
            "club_head_speed_mph": 95.0,
            "launch_angle_deg": 11.0,
            "swing_plane_angle_deg": 58.0,
            "hip_rotation_deg": 45.0,
            "shoulder_rotation_deg": 88.0,
            "wrist_cock_deg": 80.0,
            "club_path_deg": -2.0,
            "swing_efficiency": 0.8,
            "hip_start_s": 0.0,
            "shoulder_start_s": 0.06,
            "arm_start_s": 0.11,
            "club_start_s": 0.15
        },
        "phases": {
            "setup": 0, "takeaway": 2, "mid_backswing": 6, "top": 11, "transition": 12,
            "mid_downswing": 13, "impact": 14, "follow_through": 17, "finish": 19
        }
    })
}

#[test]
fn smoke_json_round_trip() {
    let classification = json!({
        "label": "too_flat",
        "confidence": 0.8,
        "confidence_gap": 0.35,
        "recommendations": ["Feel the club more upright at the top"]
    });

    let out = analyze_swing_json(
        &capture_json(20).to_string(),
        &classification.to_string(),
        Some(r#"{"min_frames": 10}"#),
    ).unwrap();

    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["classification"]["label"], "too_flat");
    assert_eq!(v["physics"]["ball_speed_estimated"], true);
    assert_eq!(v["forces"].as_array().unwrap().len(), 4);
    assert_eq!(v["suggestions"][0]["area"], "Swing Plane");
    assert_eq!(v["tracking"]["label"], "Excellent");

    // rapporten kan leses tilbake som typet verdi
    let report: SwingReport = serde_json::from_str(&out).unwrap();
    assert_eq!(report.phases.boundaries.top, 11);
    assert!((report.scores.scores.consistency - 65.0).abs() < 1e-9);
}

#[test]
fn null_classification_is_missing_upstream_result() {
    let err = analyze_swing_json(&capture_json(20).to_string(), "null", None).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingUpstreamResult(_)));
}

#[test]
fn parse_errors_carry_the_json_path() {
    let mut cap = capture_json(20);
    cap["samples"][3]["frame"] = json!("three");
    let cls = json!({"label": "on_plane", "confidence": 0.9, "confidence_gap": 0.1});

    let err = analyze_swing_json(&cap.to_string(), &cls.to_string(), None).unwrap_err();
    match err {
        AnalysisError::Parse { path, .. } => assert_eq!(path, "capture:samples[3].frame"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn partial_capture_is_rejected_through_json() {
    let cls = json!({"label": "on_plane", "confidence": 0.9, "confidence_gap": 0.1});
    let err = analyze_swing_json(&capture_json(25).to_string(), &cls.to_string(), None).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidCapture(_)));
}
