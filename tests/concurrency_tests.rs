use itemscan_catalog::{CatalogStore, JsonFileCatalog, RecordDraft};
use itemscan_core::{Bitmap, BoundingBox, NamedColor, RawDetection, Rgb};
use itemscan_eye::{DetectionPipeline, FixedDetector};
use std::sync::Arc;

fn frame(color: Rgb) -> Bitmap {
    Bitmap::filled(96, 96, color).unwrap()
}

#[tokio::test]
async fn test_shared_pipeline_across_tasks() {
    let pipeline = Arc::new(DetectionPipeline::new());
    let cases = [
        (Rgb::new(200, 30, 30), NamedColor::Red),
        (Rgb::new(30, 60, 150), NamedColor::Blue),
        (Rgb::new(128, 128, 128), NamedColor::Gray),
        (Rgb::new(240, 200, 20), NamedColor::Yellow),
    ];

    let mut handles = vec![];
    for i in 0..32 {
        let pipeline = pipeline.clone();
        let (color, expected) = cases[i % cases.len()];
        let handle = tokio::spawn(async move {
            let detector = FixedDetector::new(vec![RawDetection::new(
                format!("item{}", i),
                0.9,
                BoundingBox::new(8.0, 8.0, 80.0, 80.0),
            )]);
            let result = pipeline
                .detect_and_classify(&detector, &frame(color), i % 2 == 0)
                .await
                .unwrap();
            (i, result, expected)
        });
        handles.push(handle);
    }

    for handle in handles {
        let (i, result, expected) = handle.await.unwrap();
        assert_eq!(result.item_label, format!("item{}", i));
        assert_eq!(result.color_name, expected);
    }
}

#[test]
fn test_pipeline_on_os_threads() {
    let pipeline = Arc::new(DetectionPipeline::new());
    let detections = Arc::new(vec![
        RawDetection::new("cup", 0.5, BoundingBox::new(0.0, 0.0, 96.0, 96.0)),
        RawDetection::new("bowl", 0.5, BoundingBox::new(0.0, 0.0, 96.0, 96.0)),
    ]);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            let detections = Arc::clone(&detections);
            std::thread::spawn(move || {
                pipeline
                    .classify_frame(&frame(Rgb::new(200, 30, 30)), &detections, true)
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.item_label, "cup");
    }
}

#[tokio::test]
async fn test_concurrent_catalog_writes() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Arc::new(JsonFileCatalog::open(dir.path().join("catalog.json")).unwrap());

    let mut handles = vec![];
    for i in 0..16 {
        let catalog = catalog.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            catalog.save(RecordDraft::new(format!("thing {}", i), "Red", "other", ""))
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    assert_eq!(catalog.len().unwrap(), 16);
    let reopened = JsonFileCatalog::open(dir.path().join("catalog.json")).unwrap();
    assert_eq!(reopened.len().unwrap(), 16);
}
