use crate::catalog::{self, PatternCategory, PatternEntry};
use crate::config::{Config, ValidateArgs};
use crate::parser_api::ParserApiClient;
use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ValidationReport {
    timestamp: String,
    summary: ValidationSummary,
    results: Vec<ValidationRecord>,
    #[serde(rename = "failedPatterns")]
    failed_patterns: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ValidationSummary {
    total: usize,
    successful: usize,
    failed: usize,
    #[serde(rename = "successRate")]
    success_rate: String,
}

#[derive(Debug, Serialize)]
struct ValidationRecord {
    id: String,
    name: String,
    category: String,
    success: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<String>,
    #[serde(rename = "parsedTime", skip_serializing_if = "Option::is_none")]
    parsed_time: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn run(config: &Config, args: &ValidateArgs) -> Result<()> {
    let selected: Vec<&PatternCategory> = match &args.category {
        Some(id) => match catalog::category(id) {
            Some(category) => vec![category],
            None => anyhow::bail!("Unknown category id: {}", id),
        },
        None => catalog::categories().iter().collect(),
    };

    let total: usize = selected
        .iter()
        .map(|category| category.patterns.len())
        .sum();
    println!("Validating {} patterns against {}", total, config.api_url);

    let client = ParserApiClient::new(&config.api_url, Duration::from_millis(config.timeout_ms))?;
    let delay = Duration::from_millis(args.delay_ms.unwrap_or(config.request_delay_ms));

    let mut records = Vec::with_capacity(total);
    for category in &selected {
        println!();
        println!("{}", category.name);
        println!("{}", "-".repeat(60));

        for entry in category.patterns {
            let record = check_pattern(&client, category, entry).await;
            print_record(&record);
            records.push(record);
            tokio::time::sleep(delay).await;
        }
    }

    let successful = records.iter().filter(|record| record.success).count();
    let failed = records.len() - successful;
    let success_rate = success_rate(successful, records.len());

    println!();
    println!("{}", "=".repeat(60));
    println!("Validation summary");
    println!("Total patterns: {}", records.len());
    println!("Successful: {}", successful);
    println!("Failed: {}", failed);
    println!("Success rate: {}%", success_rate);

    if failed > 0 {
        print_failure_analysis(&records);
    } else {
        println!("All patterns passed.");
    }

    let report = ValidationReport {
        timestamp: Utc::now().to_rfc3339(),
        summary: ValidationSummary {
            total: records.len(),
            successful,
            failed,
            success_rate,
        },
        failed_patterns: records
            .iter()
            .filter(|record| !record.success)
            .map(|record| record.id.clone())
            .collect(),
        results: records,
    };

    let report_path = args
        .report
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.report_path));
    let json = serde_json::to_string_pretty(&report)
        .context("Failed to serialize validation report")?;
    fs::write(&report_path, json)
        .with_context(|| format!("Failed to write report to {:?}", report_path))?;
    println!();
    println!("Report saved to: {}", report_path.display());

    if report.summary.failed > 0 {
        anyhow::bail!(
            "{} of {} patterns failed validation",
            report.summary.failed,
            report.summary.total
        );
    }

    Ok(())
}

async fn check_pattern(
    client: &ParserApiClient,
    category: &PatternCategory,
    entry: &PatternEntry,
) -> ValidationRecord {
    info!("Testing {}", entry.name);

    let mut record = ValidationRecord {
        id: entry.id.to_string(),
        name: entry.name.to_string(),
        category: category.id.to_string(),
        success: false,
        fields: Vec::new(),
        parsed_time: None,
        warnings: Vec::new(),
        error: None,
    };

    match client.submit(&entry.to_request()).await {
        Ok(outcome) => {
            record.warnings = outcome.field_errors;
            if outcome.extracted_fields.is_empty() {
                record.error = Some("No fields extracted".to_string());
            } else {
                record.success = true;
                record.fields = outcome.extracted_fields.keys().cloned().collect();
                record.parsed_time = outcome.parsed_timestamp;
            }
        }
        Err(err) => {
            record.error = Some(err.to_string());
        }
    }

    record
}

fn print_record(record: &ValidationRecord) {
    if record.success {
        println!(
            "  ✓ {}: {} fields extracted",
            record.name,
            record.fields.len()
        );
        println!("    fields: {}", record.fields.join(", "));
        if let Some(ref parsed_time) = record.parsed_time {
            println!("    parsed time: {}", parsed_time);
        }
    } else {
        println!(
            "  ✗ {}: {}",
            record.name,
            record.error.as_deref().unwrap_or("unknown failure")
        );
    }

    for warning in &record.warnings {
        println!("    ! {}", warning);
    }
}

fn print_failure_analysis(records: &[ValidationRecord]) {
    println!();
    println!("Failed patterns:");
    println!("{}", "-".repeat(60));

    for (index, record) in records
        .iter()
        .filter(|record| !record.success)
        .enumerate()
    {
        let error = record.error.as_deref().unwrap_or("unknown failure");
        println!("{}. {} ({})", index + 1, record.name, record.id);
        println!("   Error: {}", error);
        if let Some((_, entry)) = catalog::find(&record.id) {
            println!("   Pattern: {}", entry.pattern);
            if entry.time_format.is_empty() {
                println!("   Time format: None");
            } else {
                println!("   Time format: {}", entry.time_format);
            }
            println!("   Sample: {}", preview(entry.sample));
        }
        if let Some(suggestion) = suggest_fix(error) {
            println!("   Suggested fix: {}", suggestion);
        }
        println!();
    }
}

fn success_rate(successful: usize, total: usize) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", successful as f64 * 100.0 / total as f64)
}

fn suggest_fix(error: &str) -> Option<&'static str> {
    if error.contains("500") {
        Some("Simplify the regex pattern, it may be too complex for the API")
    } else if error.contains("time format") {
        Some("Remove or correct the time format specification")
    } else if error.contains("No fields extracted") {
        Some("Check that the regex pattern matches the test string")
    } else if error.contains("timeout") || error.contains("timed out") {
        Some("Simplify the regex pattern to reduce processing time")
    } else {
        None
    }
}

// Samples can be very long; keep the analysis readable.
fn preview(sample: &str) -> String {
    if sample.chars().count() <= 100 {
        return sample.to_string();
    }
    let truncated: String = sample.chars().take(100).collect();
    format!("{}...", truncated)
}
