// End-to-end: frame source -> detector -> pipeline -> catalog

use async_trait::async_trait;
use itemscan_catalog::{
    normalize_spoken_query, CatalogStore, InMemoryCatalog, JsonFileCatalog, RecordDraft,
};
use itemscan_core::{Bitmap, BoundingBox, DetectionResult, NamedColor, RawDetection};
use itemscan_eye::{
    DetectionPipeline, Detector, FixedDetector, FrameSource, ImageFileSource, MemoryFrameSource,
    VisionError,
};
use mockall::mock;

mock! {
    pub Model {}

    #[async_trait]
    impl Detector for Model {
        async fn detect(
            &self,
            bitmap: &Bitmap,
            max_results: usize,
            confidence_threshold: f32,
        ) -> Result<Vec<RawDetection>, VisionError>;
    }
}

/// Blue book on the left half, yellow banana on the right, white background
fn write_scene(path: &std::path::Path) {
    let img = image::RgbImage::from_fn(200, 100, |x, y| {
        let in_band = (20..80).contains(&y);
        if in_band && (10..90).contains(&x) {
            image::Rgb([30, 60, 150])
        } else if in_band && (110..190).contains(&x) {
            image::Rgb([240, 200, 20])
        } else {
            image::Rgb([250, 250, 250])
        }
    });
    img.save(path).unwrap();
}

fn scene_detections() -> Vec<RawDetection> {
    vec![
        RawDetection::new("book", 0.64, BoundingBox::new(10.0, 20.0, 80.0, 60.0)),
        RawDetection::new("banana", 0.81, BoundingBox::new(110.0, 20.0, 80.0, 60.0)),
    ]
}

#[tokio::test]
async fn test_photo_to_saved_item() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("scene.png");
    write_scene(&image_path);

    let source = ImageFileSource::new(&image_path);
    let detector = FixedDetector::new(scene_detections());
    let result = DetectionPipeline::new()
        .process_frame(&detector, &source)
        .await
        .unwrap();
    assert_eq!(result, DetectionResult::new("banana", NamedColor::Yellow, 0.81));

    let catalog = JsonFileCatalog::open(dir.path().join("catalog.json")).unwrap();
    let draft = RecordDraft::from_detection(&result, "foodBeverages", "snack").unwrap();
    let saved = catalog.save(draft).unwrap();

    let found = catalog.search(&normalize_spoken_query("Find a banana")).unwrap();
    assert_eq!(found, vec![saved]);
}

#[tokio::test]
async fn test_detector_receives_static_threshold() {
    let bitmap = Bitmap::filled(100, 100, itemscan_core::Rgb::new(200, 30, 30)).unwrap();
    let source = MemoryFrameSource::new(bitmap, false);

    let mut model = MockModel::new();
    model
        .expect_detect()
        .withf(|bitmap, max_results, threshold| {
            bitmap.width() == 100 && *max_results == 10 && *threshold == 0.25
        })
        .times(1)
        .returning(|_, _, _| {
            Ok(vec![RawDetection::new(
                "cup",
                0.3,
                BoundingBox::new(10.0, 10.0, 80.0, 80.0),
            )])
        });

    let result = DetectionPipeline::new()
        .process_frame(&model, &source)
        .await
        .unwrap();
    assert_eq!(result.color_name, NamedColor::Red);
    assert!(result.needs_recapture(0.5));
}

#[tokio::test]
async fn test_nothing_detected_is_not_saved() {
    let bitmap = Bitmap::filled(64, 64, itemscan_core::Rgb::new(128, 128, 128)).unwrap();
    let source = MemoryFrameSource::new(bitmap, true);

    let mut model = MockModel::new();
    model.expect_detect().returning(|_, _, _| Ok(vec![]));

    let result = DetectionPipeline::new()
        .process_frame(&model, &source)
        .await
        .unwrap();
    assert!(!result.is_detected());

    let catalog = InMemoryCatalog::new();
    assert!(RecordDraft::from_detection(&result, "other", "").is_err());
    assert!(catalog.is_empty().unwrap());
}

#[tokio::test]
async fn test_missing_image_reports_frame_source_error() {
    let source = ImageFileSource::new("/no/such/photo.jpg").as_live_capture();
    let err = DetectionPipeline::new()
        .process_frame(&FixedDetector::default(), &source)
        .await
        .unwrap_err();
    assert!(matches!(err, VisionError::FrameSource(_)));
    assert!(source.is_live());
}
