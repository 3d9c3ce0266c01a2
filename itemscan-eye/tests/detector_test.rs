//! Detector collaborators driven without an async test runtime

use itemscan_core::{Bitmap, Rgb};
use itemscan_eye::models::coco;
use itemscan_eye::{DetectionPipeline, Detector, FixedDetector, MemoryFrameSource};

#[test]
fn test_household_demo_uses_coco_labels() {
    let detector = FixedDetector::household_demo(640, 480);
    for detection in detector.detections() {
        assert!(coco::is_known_label(&detection.label), "{}", detection.label);
    }
}

#[test]
fn test_fixed_detector_from_json_file_contents() {
    let json = r#"[
        {"label": "cup", "confidence": 0.4, "bbox": {"x": 0, "y": 0, "width": 10, "height": 10}},
        {"label": "mouse", "confidence": 0.2, "bbox": {"x": 5, "y": 5, "width": 10, "height": 10}}
    ]"#;
    let detector = FixedDetector::from_json(json).unwrap();
    let frame = Bitmap::filled(20, 20, Rgb::new(0, 0, 0)).unwrap();

    let live = tokio_test::block_on(detector.detect(&frame, 10, 0.15)).unwrap();
    assert_eq!(live.len(), 2);

    let still = tokio_test::block_on(detector.detect(&frame, 10, 0.25)).unwrap();
    assert_eq!(still.len(), 1);
    assert_eq!(still[0].label, "cup");
}

#[test]
fn test_demo_scene_picks_bottle() {
    let frame = Bitmap::filled(320, 240, Rgb::new(200, 30, 30)).unwrap();
    let detector = FixedDetector::household_demo(320, 240);
    let source = MemoryFrameSource::new(frame, false);

    let result =
        tokio_test::block_on(DetectionPipeline::new().process_frame(&detector, &source)).unwrap();
    assert_eq!(result.item_label, "bottle");
    assert_eq!(result.confidence, 0.95);
}

#[test]
fn test_coco_lookup() {
    assert_eq!(coco::class_name(0), Some("person"));
    assert_eq!(coco::class_name(80), None);
    assert!(!coco::is_known_label("spaceship"));
}
