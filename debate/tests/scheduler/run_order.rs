//! Turn order and per-turn snapshots of a successful run.

use std::sync::Arc;

use debate::{Role, Step};
use futures::StreamExt;

use crate::common::{initial, role_stub, scheduler, AFF, JUDGE, NEG};

#[tokio::test]
async fn four_turns_in_fixed_order() {
    let llm = Arc::new(role_stub());
    let turns: Vec<_> = scheduler(llm.clone())
        .run(initial("Cats vs dogs"))
        .map(|t| t.unwrap())
        .collect()
        .await;

    let roles: Vec<Role> = turns.iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![Role::Judge, Role::Affirmative, Role::Negative, Role::Judge]
    );
    let steps: Vec<Step> = turns.iter().map(|t| t.state.step).collect();
    assert_eq!(
        steps,
        vec![
            Step::AffirmativeOpen,
            Step::NegativeOpen,
            Step::Judgement,
            Step::Terminal
        ]
    );
    // the Judge's first turn makes no generator call
    assert_eq!(llm.call_count(), 3);
}

#[tokio::test]
async fn snapshots_fill_fields_progressively() {
    let turns: Vec<_> = scheduler(Arc::new(role_stub()))
        .run(initial("Cats vs dogs"))
        .map(|t| t.unwrap().state)
        .collect()
        .await;

    assert_eq!(turns[0].display_text.as_deref(), Some("Topic is Cats vs dogs"));
    assert!(turns[0].affirmative_case.is_none());
    assert!(turns[0].negative_case.is_none());
    assert!(turns[0].verdict.is_none());

    assert_eq!(
        turns[1].affirmative_case.as_deref(),
        Some("Affirmative text for: AFF_INSTR")
    );
    assert!(turns[1].negative_case.is_none());
    assert!(turns[1].verdict.is_none());

    assert_eq!(
        turns[2].negative_case.as_deref(),
        Some("Negative text for: NEG_INSTR")
    );
    assert!(turns[2].verdict.is_none());

    assert_eq!(turns[3].verdict.as_deref(), Some("Judge text for: JUDGE_INSTR"));
    assert_eq!(turns[3].display_text, turns[0].display_text);
    assert_eq!(turns[3].affirmative_case, turns[1].affirmative_case);
}

#[tokio::test]
async fn each_role_receives_its_own_instruction() {
    let llm = Arc::new(role_stub());
    scheduler(llm.clone())
        .invoke(initial("Cats vs dogs"))
        .await
        .unwrap();

    let calls = llm.calls();
    let instructions: Vec<&str> = calls.iter().map(|c| c.system_instruction.as_str()).collect();
    assert_eq!(instructions, vec![AFF, NEG, JUDGE]);
    assert_eq!(calls[0].user_turns, vec!["Cats vs dogs".to_string()]);
    assert_eq!(calls[1].user_turns, vec!["Cats vs dogs".to_string()]);
    assert_eq!(calls[2].user_turns.len(), 3);
}

#[tokio::test]
async fn invoke_returns_terminal_state() {
    let state = scheduler(Arc::new(role_stub()))
        .invoke(initial("Cats vs dogs"))
        .await
        .unwrap();
    assert_eq!(state.step, Step::Terminal);
    assert!(state.verdict.is_some());
}

#[tokio::test]
async fn independent_runs_share_one_scheduler() {
    let s = scheduler(Arc::new(role_stub()));
    let (a, b) = tokio::join!(s.invoke(initial("first")), s.invoke(initial("second")));
    assert_eq!(a.unwrap().display_text.as_deref(), Some("Topic is first"));
    assert_eq!(b.unwrap().display_text.as_deref(), Some("Topic is second"));
}
