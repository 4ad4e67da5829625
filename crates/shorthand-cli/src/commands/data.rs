//! `shorthand data` -- inspect exported profile and history files.

use std::path::Path;

use shorthand_core::import_shorthand_data;

/// Read an export file and summarize it.
pub fn import(file: &Path, json: bool) -> anyhow::Result<()> {
    let export = import_shorthand_data(file)?;

    if json {
        println!("{}", export.to_json_pretty()?);
        return Ok(());
    }

    let profile = &export.profile;
    println!("Export {} (version {})", export.file_name(), export.version);
    println!("  Exported:       {}", export.export_date.to_rfc3339());
    println!("  System:         {}", profile.system.info().name);
    println!("  Accuracy:       {:.1}%", profile.accuracy);
    println!("  Samples:        {}", profile.samples_count);
    println!("  Total decoded:  {}", profile.total_decoded);
    println!("  Avg time:       {:.2} s", profile.avg_processing_time);
    println!("  History:        {} records", export.decoding_history.len());
    Ok(())
}
