//! Human-readable rendering of pipeline output.

use colored::{ColoredString, Colorize};
use document_processing::{EvaluationReport, Priority, ProcessingResult, RiskLevel};

pub fn print_result(result: &ProcessingResult) {
    println!();
    println!(
        "✅ Document Type: {}",
        result.metadata.doc_type.to_string().bright_green().bold()
    );
    println!("📊 Confidence: {:.1}%", result.metadata.confidence * 100.0);
    println!("⏱️  Processing Time: {}ms", result.processing_time_ms);

    println!();
    println!("{}", "📝 Summary:".bold());
    println!("{}", result.summary);

    println!();
    println!("✓ Action Items: {}", result.action_items.len());
    for action in &result.action_items {
        println!(
            "  • [{}] {} → {}",
            priority_label(action.priority),
            action.action,
            action.assignee
        );
    }

    println!();
    println!("⚠️  Risks: {}", result.risks.len());
    for risk in &result.risks {
        println!("  • [{}] {}", risk_label(risk.level), risk.description);
    }
}

pub fn print_report(report: &EvaluationReport) {
    println!("{}", "📈 EVALUATION REPORT".bright_cyan().bold());
    println!("{}", "=".repeat(80));
    println!("total_documents: {}", report.total_documents);
    println!("avg_processing_time_ms: {}", report.avg_processing_time_ms);
    println!(
        "avg_extraction_completeness: {}",
        report.avg_extraction_completeness
    );
}

fn priority_label(priority: Priority) -> ColoredString {
    let label = priority.to_string();
    match priority {
        Priority::High => label.bright_red(),
        Priority::Medium => label.bright_yellow(),
        Priority::Low => label.normal(),
    }
}

fn risk_label(level: RiskLevel) -> ColoredString {
    let label = level.to_string();
    match level {
        RiskLevel::High => label.bright_red().bold(),
        RiskLevel::Medium => label.bright_yellow(),
        RiskLevel::Low => label.bright_green(),
    }
}
