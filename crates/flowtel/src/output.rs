use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use flowtel_analytics::FlowStats;
use flowtel_frame::FlowRecord;
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_records(records: &[FlowRecord], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    "FLOW (E6)",
                    "STATUS",
                    "TEMP (°C)",
                    "SAMPLES",
                    "DECLARED",
                    "VOLUME",
                ]);
            for record in records {
                table.add_row(vec![
                    record.flow_e6.to_string(),
                    format!("{:#06x}", record.status_wm),
                    format!("{:.1}", record.temperature_celsius()),
                    record.samples.len().to_string(),
                    record.array_length.to_string(),
                    format!("{:.4}", record.volume),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for record in records {
                println!("{record}");
            }
        }
    }
}

/// Aggregate view of one ingest run, as printed by `flowtel stats`.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub records: usize,
    pub accepted: u64,
    pub rejected: u64,
    pub flow: FlowStats,
    pub status_changes: Vec<usize>,
    pub total_samples: usize,
    pub volume_mean: f64,
    pub volume_std_dev: f64,
}

pub fn print_stats_report(report: &StatsReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["METRIC", "VALUE"]);
            table.add_row(vec!["records".to_string(), report.records.to_string()]);
            table.add_row(vec!["accepted".to_string(), report.accepted.to_string()]);
            table.add_row(vec!["rejected".to_string(), report.rejected.to_string()]);
            table.add_row(vec!["flow min (e-6)".to_string(), report.flow.min.to_string()]);
            table.add_row(vec!["flow max (e-6)".to_string(), report.flow.max.to_string()]);
            table.add_row(vec!["flow avg (e-6)".to_string(), report.flow.avg.to_string()]);
            table.add_row(vec![
                "status changes".to_string(),
                format_indices(&report.status_changes),
            ]);
            table.add_row(vec![
                "total samples".to_string(),
                report.total_samples.to_string(),
            ]);
            table.add_row(vec![
                "volume mean".to_string(),
                format!("{:.4}", report.volume_mean),
            ]);
            table.add_row(vec![
                "volume std dev".to_string(),
                format!("{:.4}", report.volume_std_dev),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "records={} accepted={} rejected={}",
                report.records, report.accepted, report.rejected
            );
            println!(
                "flow min={} max={} avg={}",
                report.flow.min, report.flow.max, report.flow.avg
            );
            println!("status changes: {}", format_indices(&report.status_changes));
            println!(
                "samples={} volume mean={:.4} std dev={:.4}",
                report.total_samples, report.volume_mean, report.volume_std_dev
            );
        }
    }
}

/// Summary of one export run, as printed by `flowtel export`.
#[derive(Debug, Serialize)]
pub struct ExportSummary {
    pub records: usize,
    pub samples: usize,
    pub path: String,
}

pub fn print_export_summary(summary: &ExportSummary, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(summary).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            println!(
                "exported {} samples from {} records to {}",
                summary.samples, summary.records, summary.path
            );
        }
    }
}

fn format_indices(indices: &[usize]) -> String {
    if indices.is_empty() {
        return "none".to_string();
    }
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
