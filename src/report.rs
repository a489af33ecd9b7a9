//! Terminal summaries printed after a run or seed.

use colored::*;

use crate::observe::SwallowedKind;
use crate::seed::SeedSummary;

/// Render the swallowed-error ledger. Scenarios recover from these
/// failures silently, so this is the only place they surface.
pub fn format_swallowed(swallowed: &[(SwallowedKind, u64)]) -> String {
    let total: u64 = swallowed.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return format!("{} no swallowed errors\n", "OK".green().bold());
    }

    let mut out = format!(
        "{} {} errors swallowed during the run:\n",
        "WARNING".yellow().bold(),
        total
    );
    for (kind, count) in swallowed {
        if *count > 0 {
            out.push_str(&format!("  {:<16} {}\n", kind.as_str(), count));
        }
    }
    out.push_str("  (degraded data: downstream steps saw empty id lists or missing ids)\n");
    out
}

/// Render seeding totals per phase.
pub fn format_seed_summary(summary: &SeedSummary) -> String {
    let mut out = format!("{}\n", "Seed results".bold());
    for (label, created, failed) in [
        ("users", summary.users, summary.user_failures),
        ("lego sets", summary.lego_sets, summary.lego_set_failures),
        ("comments", summary.comments, summary.comment_failures),
        ("listings", summary.listings, summary.listing_failures),
        ("bids", summary.bids, summary.bid_failures),
    ] {
        let status = if failed == 0 {
            format!("{}", "ok".green())
        } else {
            format!("{} failed", failed.to_string().red())
        };
        out.push_str(&format!(
            "  {:<10} {:>6} created  {}\n",
            label, created, status
        ));
    }
    out
}

/// Print the post-attack summary.
pub fn print_run_summary(swallowed: &[(SwallowedKind, u64)]) {
    print!("{}", format_swallowed(swallowed));
}

/// Print the post-seed summary.
pub fn print_seed_summary(summary: &SeedSummary) {
    print!("{}", format_seed_summary(summary));
}
