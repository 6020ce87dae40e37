//! Fail-fast behavior: a generator error ends the run at the failing role.

use std::sync::Arc;

use debate::{DebateError, GenerationError, Role, Step};
use futures::StreamExt;

use crate::common::{initial, role_stub, scheduler};

async fn collect_until_error(fail_on: usize) -> (Vec<Role>, DebateError) {
    let llm = Arc::new(role_stub().failing_on_call(fail_on));
    let mut stream = scheduler(llm).run(initial("Cats vs dogs"));
    let mut roles = Vec::new();
    while let Some(item) = stream.next().await {
        match item {
            Ok(turn) => roles.push(turn.role),
            Err(e) => {
                assert!(stream.next().await.is_none(), "stream must end after an error");
                return (roles, e);
            }
        }
    }
    panic!("run finished without an error");
}

#[tokio::test]
async fn affirmative_failure_stops_after_first_judge_turn() {
    let (roles, err) = collect_until_error(1).await;
    assert_eq!(roles, vec![Role::Judge]);
    assert!(matches!(err, DebateError::Generation(GenerationError::Provider(_))));
}

#[tokio::test]
async fn negative_failure_yields_no_negative_snapshot() {
    let (roles, _) = collect_until_error(2).await;
    assert_eq!(roles, vec![Role::Judge, Role::Affirmative]);
}

#[tokio::test]
async fn verdict_failure_yields_no_final_judge_snapshot() {
    let (roles, _) = collect_until_error(3).await;
    assert_eq!(roles, vec![Role::Judge, Role::Affirmative, Role::Negative]);
}

#[tokio::test]
async fn invoke_propagates_error() {
    let llm = Arc::new(role_stub().failing_on_call(2));
    let err = scheduler(llm).invoke(initial("Cats vs dogs")).await.unwrap_err();
    assert!(matches!(err, DebateError::Generation(_)));
}

#[tokio::test]
async fn terminal_initial_state_fails_at_entry() {
    let mut state = initial("Cats vs dogs");
    state.step = Step::Terminal;
    let items: Vec<_> = scheduler(Arc::new(role_stub())).run(state).collect().await;
    assert_eq!(items.len(), 1);
    assert!(matches!(
        items[0],
        Err(DebateError::InvalidStep { role: Role::Judge, step: Step::Terminal })
    ));
}
