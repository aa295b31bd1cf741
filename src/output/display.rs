//! Display functions for command results

use crate::commands::{CheckReport, PopulateReport};
use colored::Colorize;

/// Print the result of a populate run
pub fn print_populate_report(report: &PopulateReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCHEDULE WRITTEN".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📅 {} games scheduled",
        report.scheduled.to_string().bright_yellow().bold()
    );
    println!("   First game:  {}", report.first_date.to_string().green());
    println!("   Last game:   {}", report.last_date.to_string().green());
}

/// Print the result of a dictionary check
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Dictionary:".bright_cyan().bold());
    println!("   Words loaded:     {}", report.word_count);
    println!(
        "   Build time:       {:.2}s",
        report.build_time.as_secs_f64()
    );
    println!(
        "   Verify time:      {:.2}s",
        report.verify_time.as_secs_f64()
    );
    println!("   Lookups/second:   {:.0}", report.lookups_per_second);

    if report.missing.is_empty() {
        println!("\n{}", "✅ Every word was found again".green().bold());
    } else {
        println!(
            "\n{}",
            format!("❌ {} words went missing", report.missing.len())
                .red()
                .bold()
        );
        for word in report.missing.iter().take(10) {
            println!("   {word}");
        }
    }
}
