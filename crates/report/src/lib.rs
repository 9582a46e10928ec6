//! # stheno-report
//!
//! Renders campaign snapshots into deterministic, human-readable text
//! reports: per-test status with call-sequence reproductions, worst-case gas
//! per function, coverage and corpus summaries, and the seed the campaign ran
//! with. Pure projection from data to text; performs no I/O and mutates
//! nothing.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use std::fmt::Write;
use stheno_fuzz::{AddressNamer, Campaign, CampaignConfig};

mod gas;
pub use gas::render_gas_info;

mod sequence;
pub use sequence::{render_tx, sequence_lines};

mod status;
pub use status::{optimization_status, progress, render_events, standard_status};

mod summary;
pub use summary::{render_corpus, render_coverage};

/// Read-only context threaded through every renderer.
#[derive(Clone, Copy)]
pub struct ReportContext<'a> {
    /// Campaign limits and the default transaction gas.
    pub config: &'a CampaignConfig,
    /// Naming policy for the addresses taking part in a call.
    pub names: &'a dyn AddressNamer,
}

/// Renders the full campaign report.
///
/// One line per reportable test, then the gas table, the coverage and corpus
/// summaries, and the seed.
pub fn render_campaign(campaign: &Campaign, ctx: ReportContext<'_>) -> String {
    trace!(target: "stheno::report", tests = campaign.tests.len(), seed = campaign.seed, "rendering campaign");

    let mut report = String::new();
    for test in &campaign.tests {
        let Some(name) = test.kind.display_name() else { continue };
        report.push_str(&name);
        report.push_str(": ");
        if test.kind.is_optimization() {
            let _ = writeln!(report, "max value: {}", test.best_value);
            report.push_str(&status::optimization_status(test, ctx));
        } else {
            report.push_str(&status::standard_status(test, ctx));
        }
        report.push('\n');
    }

    report.push_str(&gas::render_gas_info(&campaign.gas_info, ctx));
    report.push_str(&summary::render_coverage(&campaign.coverage));
    report.push('\n');
    report.push_str(&summary::render_corpus(&campaign.corpus));
    let _ = write!(report, "\nSeed: {}", campaign.seed);
    report
}
