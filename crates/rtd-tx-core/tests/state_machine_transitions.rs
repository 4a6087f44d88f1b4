use rtd_tx_core::{transition, ConfirmationAction, ConfirmationState};

#[test]
fn confirmation_happy_path_transitions() {
    let (s1, _) =
        transition(ConfirmationState::Idle, ConfirmationAction::Sign).expect("idle -> signing");
    assert_eq!(s1, ConfirmationState::Signing);
    let (s2, _) = transition(s1, ConfirmationAction::SignSucceeded).expect("signing -> signed");
    assert_eq!(s2, ConfirmationState::Signed);
    let (s3, _) = transition(s2, ConfirmationAction::Submit).expect("signed -> submitting");
    assert_eq!(s3, ConfirmationState::Submitting);
    let (s4, record) =
        transition(s3, ConfirmationAction::ExecutionSucceeded).expect("submitting -> completed");
    assert_eq!(s4, ConfirmationState::Completed);
    assert_eq!(record.from, ConfirmationState::Submitting);
    assert!(s4.is_terminal());
}

#[test]
fn every_failure_edge_lands_in_failed() {
    let cases = [
        (ConfirmationState::Signing, ConfirmationAction::SignFailed),
        (ConfirmationState::Submitting, ConfirmationAction::SubmitFailed),
        (ConfirmationState::Submitting, ConfirmationAction::ExecutionFailed),
    ];
    for (from, action) in cases {
        let (to, _) = transition(from, action).expect("failure edge");
        assert_eq!(to, ConfirmationState::Failed);
        assert!(to.is_terminal());
    }
}

#[test]
fn illegal_transition_is_rejected() {
    let err = transition(ConfirmationState::Idle, ConfirmationAction::Submit)
        .expect_err("must fail");
    assert!(err.to_string().contains("illegal confirmation transition"));
}

#[test]
fn terminal_states_have_no_exits() {
    let actions = [
        ConfirmationAction::Sign,
        ConfirmationAction::SignSucceeded,
        ConfirmationAction::SignFailed,
        ConfirmationAction::Submit,
        ConfirmationAction::SubmitFailed,
        ConfirmationAction::ExecutionSucceeded,
        ConfirmationAction::ExecutionFailed,
    ];
    for state in [ConfirmationState::Completed, ConfirmationState::Failed] {
        for action in actions {
            assert!(transition(state, action).is_err(), "{state:?} --{action:?}");
        }
    }
}

#[test]
fn signed_artifact_cannot_be_signed_again() {
    let err = transition(ConfirmationState::Signed, ConfirmationAction::Sign)
        .expect_err("re-sign must fail");
    assert_eq!(err.from, ConfirmationState::Signed);
}
