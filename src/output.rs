use owo_colors::OwoColorize;
use std::path::Path;

use crate::fs_ops::RenameReport;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Use this for primary outputs
/// such as "Rename X as Y" which users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Entry-count line printed before and after a run.
pub fn print_count(dir: &Path, count: usize) {
    print_user(&format!(
        "Number of files and folders in {} = {}",
        dir.display(),
        count
    ));
}

/// One rename line; dry-run wording makes clear nothing changed.
pub fn print_rename(from: &Path, to: &Path, dry_run: bool) {
    let verb = if dry_run { "Would rename" } else { "Rename" };
    print_user(&format!("{} {} as {}", verb, from.display(), to.display()));
}

/// Closing lines: lost-file count and completion message.
pub fn print_summary(report: &RenameReport) {
    print_user(&format!("Lost files = {}", report.lost()));
    if report.lost() != 0 {
        print_warn(&format!(
            "Entry count changed from {} to {} in {}",
            report.starting_count,
            report.ending_count,
            report.directory.display()
        ));
    }
    if report.dry_run {
        print_success(&format!(
            "Dry-run complete: {} would be renamed, {} skipped",
            report.renamed, report.skipped
        ));
    } else {
        print_success(&format!(
            "Completed renaming files: {} renamed, {} skipped",
            report.renamed, report.skipped
        ));
    }
}
