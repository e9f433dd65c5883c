use shared_types::*;
use std::fs;
use std::path::{Path, PathBuf};
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Report types
    types.push(clean_type(ResumeRecord::export_to_string()?));
    types.push(clean_type(EntryStatus::export_to_string()?));
    types.push(clean_type(EntryOutcome::export_to_string()?));
    types.push(clean_type(BatchSummary::export_to_string()?));

    // Record store types
    types.push(clean_type(StoredResume::export_to_string()?));
    types.push(clean_type(ResumesResponse::export_to_string()?));

    // Common responses
    types.push(clean_type(ErrorResponse::export_to_string()?));
    types.push(clean_type(HealthResponse::export_to_string()?));

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("bindings").to_path_buf());
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

/// Strip the ts-rs banner and cross-file imports; every type lands in one file.
fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
