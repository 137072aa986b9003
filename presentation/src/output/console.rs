//! Console output formatter for ROI reports

use colored::Colorize;
use roi_application::{SectorSummary, SimulationReport};
use serde::Serialize;

/// Formats simulation reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &SimulationReport) -> String {
        let inputs = &report.inputs;
        let results = &report.results;
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("ROI Simulation"));
        output.push('\n');

        // Inputs
        output.push_str(&Self::section_header("Company profile"));
        output.push_str(&Self::row(
            "Sector",
            &format!("{} ({})", inputs.sector_name, inputs.sector),
        ));
        output.push_str(&Self::row(
            "Employees",
            &format!(
                "{} ({}, {} maturity)",
                inputs.employees, report.metadata.size_category, inputs.maturity
            ),
        ));
        output.push_str(&Self::row(
            "Processes",
            &format!("{} x {} h per task", inputs.processes, inputs.time_per_task),
        ));
        output.push_str(&Self::row("Hourly cost", &format!("{} €", inputs.hourly_cost)));
        output.push_str(&Self::row(
            "Automation",
            &format!(
                "{}% -> {}%",
                inputs.current_automation, inputs.target_automation
            ),
        ));

        // Time
        output.push_str(&Self::section_header("Time saved"));
        output.push_str(&Self::row("Automation gain", &format!("{} pts", results.automation_gain)));
        output.push_str(&Self::row("Per day", &format!("{} h", results.daily_hours)));
        output.push_str(&Self::row("Per month", &format!("{} h", results.time_saved)));

        // Money
        output.push_str(&Self::section_header("Financials"));
        output.push_str(&Self::row("Monthly savings", &format!("{} €", results.monthly_savings)));
        output.push_str(&Self::row("Yearly savings", &format!("{} €", results.yearly_savings)));
        output.push_str(&Self::row("Investment", &format!("{} €", results.investment)));
        output.push_str(&Self::row("Net gains", &Self::signed(results.net_gains, " €")));
        output.push_str(&Self::row("ROI", &Self::signed(results.roi_percentage, "%")));
        output.push_str(&Self::row(
            "Payback",
            &format!("{} weeks", results.payback_weeks),
        ));

        // Sector benchmarks
        output.push_str(&Self::section_header("Sector benchmarks"));
        output.push_str(&Self::row("Error reduction", &format!("{}%", results.error_reduction)));
        output.push_str(&Self::row(
            "Productivity gain",
            &format!("{}%", results.productivity_gain),
        ));

        output.push_str(&format!(
            "\n{} {}\n",
            "Calculated at".dimmed(),
            report.metadata.calculated_at.dimmed()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format any serializable value as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the sector list as a table
    pub fn format_sectors(sectors: &[SectorSummary]) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<12} {:<36} {:>10} {:>13}\n",
            "ID".bold(),
            "Name".bold(),
            "Potential".bold(),
            "Productivity".bold()
        ));
        for sector in sectors {
            output.push_str(&format!(
                "{:<12} {:<36} {:>9}% {:>12}%\n",
                sector.id.as_str().cyan(),
                sector.name,
                sector.automation_potential * 100.0,
                sector.productivity_gain * 100.0
            ));
        }
        output
    }

    fn signed(value: i64, unit: &str) -> String {
        let text = format!("{value}{unit}");
        if value < 0 {
            text.red().bold().to_string()
        } else {
            text.green().bold().to_string()
        }
    }

    fn row(label: &str, value: &str) -> String {
        format!("  {:<20}{}\n", format!("{label}:").cyan(), value)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
