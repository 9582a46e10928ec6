use crate::{sequence, ReportContext};
use std::{collections::BTreeMap, fmt::Write};
use stheno_fuzz::GasInfo;

/// Renders the worst-case gas observed per function, ascending by name.
///
/// The empty function name collects calls that never decoded; it contributes
/// no output. Each entry ends with its own newline so entries and whatever
/// follows never run together.
pub fn render_gas_info(gas_info: &BTreeMap<String, GasInfo>, ctx: ReportContext<'_>) -> String {
    let mut out = String::new();
    for (func, info) in gas_info {
        if func.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{func} used a maximum of {} gas\n  Call sequence:", info.gas);
        for line in sequence::sequence_lines(&info.tx_seq, ctx) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}
