//! Pretty terminal output with colors and badges.

use colored::Colorize;

// === Service startup ===

pub fn print_startup(addr: &str) {
    println!();
    println!("{} {}", "✓".green().bold(), "nodetron ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}  {}", "GET ".green(), "/health".white(), "Health snapshot".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/api/inventory".white(), "List inventory".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/api/inventory/:id".white(), "Inventory item".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/api/validateMessage".white(), "Validate a message".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/api/behaviors".white(), "Fault-injection headers".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/api/database/health".white(), "Database ping".dimmed());
    println!();
}

// === Acceptance run ===

fn badge(text: &str, fg: colored::Color, bg: colored::Color) -> colored::ColoredString {
    format!(" {} ", text).color(fg).on_color(bg).bold()
}

pub fn print_suite_banner(service_url: &str, max_wait: std::time::Duration) {
    println!();
    println!("{}", "Database User Acceptance Tests".white().bold());
    println!("  {} {}", "target:".dimmed(), service_url.cyan());
    println!("  {} {}", "max wait:".dimmed(), format!("{}s", max_wait.as_secs()).white());
    println!();
}

pub fn log_waiting(url: &str, attempt: usize, max_attempts: usize) {
    println!(
        "{} {} {}",
        badge("WAIT", colored::Color::Black, colored::Color::Yellow),
        url.white(),
        format!("attempt {}/{}", attempt, max_attempts).dimmed()
    );
}

pub fn log_pass(name: &str) {
    println!(
        "{} {}",
        badge("PASS", colored::Color::Black, colored::Color::Green),
        name.white()
    );
}

pub fn log_fail(name: &str, reason: &str) {
    println!(
        "{} {} {}",
        badge("FAIL", colored::Color::White, colored::Color::Red),
        name.white(),
        reason.red()
    );
}

pub fn log_not_ready(reason: &str) {
    println!(
        "{} {}",
        badge("DOWN", colored::Color::White, colored::Color::Red),
        reason.red()
    );
}

pub fn print_summary(passed: usize, failed: usize) {
    println!();
    let line = format!("{} passed, {} failed", passed, failed);
    if failed == 0 {
        println!("{} {}", "✓".green().bold(), line.green());
    } else {
        println!("{} {}", "✗".red().bold(), line.red());
    }
}

pub fn print_missing_service_url(test_input: &str) {
    println!("Test input does not contain a url for testing");
    println!("Test input: \n{}", test_input);
}
