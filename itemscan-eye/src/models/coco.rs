//! COCO label vocabulary

/// COCO class names (80 classes), the canonical object labels
pub const COCO_CLASSES: &[&str] = &[
    "person", "bicycle", "car", "motorcycle", "airplane", "bus", "train", "truck", "boat",
    "traffic light", "fire hydrant", "stop sign", "parking meter", "bench", "bird", "cat",
    "dog", "horse", "sheep", "cow", "elephant", "bear", "zebra", "giraffe", "backpack",
    "umbrella", "handbag", "tie", "suitcase", "frisbee", "skis", "snowboard", "sports ball",
    "kite", "baseball bat", "baseball glove", "skateboard", "surfboard", "tennis racket",
    "bottle", "wine glass", "cup", "fork", "knife", "spoon", "bowl", "banana", "apple",
    "sandwich", "orange", "broccoli", "carrot", "hot dog", "pizza", "donut", "cake", "chair",
    "couch", "potted plant", "bed", "dining table", "toilet", "tv", "laptop", "mouse",
    "remote", "keyboard", "cell phone", "microwave", "oven", "toaster", "sink", "refrigerator",
    "book", "clock", "vase", "scissors", "teddy bear", "hair drier", "toothbrush",
];

/// Class name for a model output index
pub fn class_name(class_id: usize) -> Option<&'static str> {
    COCO_CLASSES.get(class_id).copied()
}

/// Whether `label` is one of the COCO classes (case-insensitive)
pub fn is_known_label(label: &str) -> bool {
    COCO_CLASSES.iter().any(|c| c.eq_ignore_ascii_case(label.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_count() {
        assert_eq!(COCO_CLASSES.len(), 80);
    }

    #[test]
    fn test_class_name_lookup() {
        assert_eq!(class_name(0), Some("person"));
        assert_eq!(class_name(41), Some("cup"));
        assert_eq!(class_name(79), Some("toothbrush"));
        assert_eq!(class_name(80), None);
    }

    #[test]
    fn test_is_known_label() {
        assert!(is_known_label("Cell Phone"));
        assert!(is_known_label(" cup "));
        assert!(!is_known_label("spaceship"));
    }
}
