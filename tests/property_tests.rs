use itemscan_catalog::normalize_spoken_query;
use itemscan_core::{Bitmap, BoundingBox, RawDetection, Rgb};
use itemscan_eye::processing::{ColorClassifier, ColorSampler, DetectionRanker, Hsv};
use proptest::prelude::*;

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn noisy_bitmap(width: u32, height: u32, seed: u8) -> Bitmap {
    let data = (0..width * height * 3)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect();
    Bitmap::new(width, height, data).unwrap()
}

proptest! {
    #[test]
    fn test_ranker_picks_first_maximum(
        confidences in prop::collection::vec(0.0f32..=1.0, 0..30),
        is_live in any::<bool>(),
    ) {
        let ranker = DetectionRanker::new();
        let detections: Vec<RawDetection> = confidences
            .iter()
            .enumerate()
            .map(|(i, &c)| RawDetection::new(format!("obj{}", i), c, BoundingBox::new(0.0, 0.0, 1.0, 1.0)))
            .collect();

        let threshold = ranker.threshold(is_live);
        let mut expected: Option<usize> = None;
        for (i, &c) in confidences.iter().enumerate() {
            if c >= threshold && expected.map_or(true, |best| c > confidences[best]) {
                expected = Some(i);
            }
        }

        let ranked = ranker.rank(&detections, is_live);
        prop_assert_eq!(ranked.as_ref().map(|r| r.input_index()), expected);
        if let Some(ranked) = ranked {
            prop_assert!(ranked.confidence() >= threshold);
        }
    }

    #[test]
    fn test_classification_ignores_sample_order(
        samples in prop::collection::vec(rgb_strategy(), 1..64),
    ) {
        let classifier = ColorClassifier::new();
        let mut reversed = samples.clone();
        reversed.reverse();
        prop_assert_eq!(classifier.classify(&samples), classifier.classify(&reversed));
        prop_assert_eq!(classifier.classify(&samples), classifier.classify(&samples));
    }

    #[test]
    fn test_hsv_ranges(px in rgb_strategy()) {
        let hsv = Hsv::from_rgb(px.r as f32, px.g as f32, px.b as f32);
        prop_assert!((0.0..360.0).contains(&hsv.hue));
        prop_assert!((0.0..=1.0).contains(&hsv.saturation));
        prop_assert_eq!(hsv.value, px.r.max(px.g).max(px.b) as f32);
    }

    #[test]
    fn test_sampler_stays_in_bounds(
        width in 1u32..120,
        height in 1u32..120,
        x in -200.0f32..300.0,
        y in -200.0f32..300.0,
        w in -50.0f32..400.0,
        h in -50.0f32..400.0,
        seed in any::<u8>(),
    ) {
        let bitmap = noisy_bitmap(width, height, seed);
        let sampler = ColorSampler::new();
        let bbox = BoundingBox::new(x, y, w, h);

        let region = sampler.resolve_region(&bitmap, Some(&bbox));
        prop_assert!(region.width > 0 && region.height > 0);
        prop_assert!(region.right() <= width && region.bottom() <= height);

        for px in sampler.sample(&bitmap, Some(&bbox)) {
            let brightness = px.brightness();
            prop_assert!(brightness > 20.0 && brightness < 240.0);
        }
    }

    #[test]
    fn test_clamped_box_fits_image(
        width in 1u32..500,
        height in 1u32..500,
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
        w in 0.0f32..1000.0,
        h in 0.0f32..1000.0,
    ) {
        if let Some(region) = BoundingBox::new(x, y, w, h).clamp_to(width, height) {
            prop_assert!(region.area() > 0);
            prop_assert!(region.right() <= width);
            prop_assert!(region.bottom() <= height);
        }
    }

    #[test]
    fn test_normalized_query_is_trimmed_lowercase(text in "[a-zA-Z ]{0,40}") {
        let query = normalize_spoken_query(&text);
        prop_assert_eq!(query.trim(), query.as_str());
        prop_assert!(!query.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert!(query.len() <= text.len());
    }
}
