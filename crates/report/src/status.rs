use crate::{sequence, ReportContext};
use stheno_fuzz::{FuzzTest, TestState};

/// Formats a progress fraction.
pub fn progress(current: u32, total: u32) -> String {
    format!("({current}/{total})")
}

/// Renders emitted events as one line; empty when nothing was emitted.
pub fn render_events(events: &[String]) -> String {
    if events.is_empty() {
        String::new()
    } else {
        format!("Event sequence: {}", events.join(", "))
    }
}

/// Status text for property, call and assertion tests.
pub fn standard_status(test: &FuzzTest, ctx: ReportContext<'_>) -> String {
    match &test.state {
        TestState::Failed(e) => format!("could not evaluate ☣\n  {e}"),
        TestState::Solved => render_failure(None, test, ctx),
        TestState::Passed => " passed! 🎉".into(),
        TestState::Open(runs) if test.reproducer.is_empty() => {
            if *runs >= ctx.config.test_limit {
                " passed! 🎉".into()
            } else {
                format!(" fuzzing {}", progress(*runs, ctx.config.test_limit))
            }
        }
        // open with a reproducer: found but not confirmed shrunk yet
        TestState::Open(_) => render_failure(None, test, ctx),
        TestState::Large(attempts) => {
            render_failure(shrink_progress(*attempts, ctx), test, ctx)
        }
    }
}

/// Status text for optimization tests.
///
/// Framed as "current best", never pass/fail: every state with a sequence
/// shows it, including a still-open test.
pub fn optimization_status(test: &FuzzTest, ctx: ReportContext<'_>) -> String {
    match &test.state {
        TestState::Failed(e) => format!("could not evaluate ☣\n  {e}"),
        TestState::Passed => " passed! 🎉".into(),
        TestState::Solved | TestState::Open(_) => render_best(None, test, ctx),
        TestState::Large(attempts) => render_best(shrink_progress(*attempts, ctx), test, ctx),
    }
}

/// Shrink progress worth annotating, `None` once the attempt limit is spent.
fn shrink_progress(attempts: u32, ctx: ReportContext<'_>) -> Option<(u32, u32)> {
    let limit = ctx.config.shrink_limit;
    (attempts < limit).then_some((attempts, limit))
}

fn shrink_annotation(shrinking: Option<(u32, u32)>) -> String {
    match shrinking {
        Some((attempts, limit)) => format!(", shrinking {}", progress(attempts, limit)),
        None => String::new(),
    }
}

fn render_failure(shrinking: Option<(u32, u32)>, test: &FuzzTest, ctx: ReportContext<'_>) -> String {
    if test.reproducer.is_empty() {
        return "failed with no transactions made ⁉️  ".into();
    }
    format!(
        "failed!💥  \n  Call sequence{}:\n{}\n{}",
        shrink_annotation(shrinking),
        sequence::sequence_lines(&test.reproducer, ctx).join("\n"),
        render_events(&test.events),
    )
}

fn render_best(shrinking: Option<(u32, u32)>, test: &FuzzTest, ctx: ReportContext<'_>) -> String {
    if test.reproducer.is_empty() {
        return "Call sequence:\n(no transactions)".into();
    }
    format!(
        "\n  Call sequence{}:\n{}\n{}",
        shrink_annotation(shrinking),
        sequence::sequence_lines(&test.reproducer, ctx).join("\n"),
        render_events(&test.events),
    )
}
