//! Table-driven reuse: one procedure, many rows, fully independent cases.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::step;

/// One row of the addition table.
#[derive(Debug, Clone)]
struct Case {
    a: u32,
    b: u32,
    expected: u32,
}

fn addition_table() -> Vec<Case> {
    vec![
        Case {
            a: 1,
            b: 2,
            expected: 3,
        },
        Case {
            a: 0,
            b: 0,
            expected: 0,
        },
        Case {
            a: 40,
            b: 2,
            expected: 42,
        },
    ]
}

/// Per-case data flows into arrange, and each row is verified against its
/// own expectation.
#[tokio::test]
async fn rows_flow_through_arrange() {
    let procedure = step()
        .arrange_with(|case: Case| (case, 1_u32))
        .act(|ctx: &(Case, u32)| (ctx.0.a + ctx.0.b) * ctx.1)
        .assert(|result, ctx: &(Case, u32)| assert_eq!(result, ctx.0.expected));

    for case in addition_table() {
        procedure.run_with(case).await;
    }
}

/// Without an arrange phase the data flows straight into act.
#[tokio::test]
async fn rows_flow_through_act() {
    let procedure = step()
        .act_with(|case: &Case| (case.a + case.b, case.expected))
        .assert(|(result, expected)| assert_eq!(result, expected));

    procedure.run_each(addition_table()).await;
}

/// Re-invoking one procedure never leaks state between cases: each run gets
/// a context built from scratch.
#[tokio::test]
async fn no_leakage_between_invocations() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let counter = invocations.clone();

    let procedure = step()
        .arrange_with(move |seed: u32| {
            counter.fetch_add(1, Ordering::SeqCst);
            vec![seed]
        })
        .act(|log: &Vec<u32>| log.len())
        .assert(|len, _log: &Vec<u32>| assert_eq!(len, 1, "context must start fresh"));

    for seed in 0..3 {
        procedure.run_with(seed).await;
    }
    assert_eq!(invocations.load(Ordering::SeqCst), 3);
}

/// A pending arrange participates in table-driven runs like any other.
#[tokio::test]
async fn rows_flow_through_pending_arrange() {
    async fn load(case: Case) -> (u32, u32) {
        tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        (case.a + case.b, case.expected)
    }

    let procedure = step()
        .arrange_with_async(load)
        .act(|ctx: &(u32, u32)| ctx.0)
        .assert(|result, ctx: &(u32, u32)| assert_eq!(result, ctx.1));

    procedure.run_each(addition_table()).await;
}
