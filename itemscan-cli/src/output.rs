// Terminal rendering of results and catalog records

use itemscan_catalog::CatalogRecord;
use itemscan_core::{DetectionResult, Localizer};

pub fn print_result(result: &DetectionResult, localizer: &dyn Localizer, low_confidence: f32) {
    if !result.is_detected() {
        println!("❌ No object recognised");
        println!("   Try again with the object closer to the camera");
        return;
    }

    println!("✅ Detected: {}", localizer.object_label(&result.item_label));
    println!("   Color:      {}", localizer.color_name(result.color_name));
    println!("   Confidence: {:.1}%", result.confidence * 100.0);

    if result.needs_recapture(low_confidence) {
        println!();
        println!("⚠️  Low confidence, consider capturing again:");
        println!("   - move closer to the object");
        println!("   - improve the lighting");
        println!("   - use a simpler background");
    }
}

pub fn print_records(records: &[CatalogRecord]) {
    if records.is_empty() {
        println!("No items found");
        return;
    }

    for record in records {
        println!(
            "{}  {:<12} {:<11} {:<12} {}",
            record.id,
            record.item_label,
            record.color_name,
            record.category,
            record.date_added.format("%Y-%m-%d")
        );
        if !record.description.is_empty() {
            println!("    {}", record.description);
        }
    }
    println!(
        "\n{} item{}",
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );
}
