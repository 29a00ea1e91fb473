use super::*;
use crate::state::toast::ToastKind;

// =============================================================
// Create outcome
// =============================================================

#[test]
fn create_success_requests_refetch_and_raises_success_toast() {
    let mut toasts = ToastState::default();
    let stale = record_create_outcome(&mut toasts, &Ok(()));
    assert!(stale);
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts.toasts[0].title, CREATE_SUCCESS_TITLE);
    assert_eq!(toasts.toasts[0].message, CREATE_SUCCESS_MESSAGE);
}

#[test]
fn create_failure_skips_refetch_and_carries_the_message() {
    let mut toasts = ToastState::default();
    let outcome = Err("New voyage could not be created.".to_owned());
    let stale = record_create_outcome(&mut toasts, &outcome);
    assert!(!stale);
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts.toasts[0].title, FAILURE_TITLE);
    assert_eq!(toasts.toasts[0].message, "New voyage could not be created.");
}

// =============================================================
// Delete outcome
// =============================================================

#[test]
fn delete_success_requests_refetch_without_a_toast() {
    let mut toasts = ToastState::default();
    let stale = record_delete_outcome(&mut toasts, &Ok(()));
    assert!(stale);
    assert!(toasts.toasts.is_empty());
}

#[test]
fn delete_failure_skips_refetch_and_raises_error_toast() {
    let mut toasts = ToastState::default();
    let outcome = Err("Failed to delete the voyage".to_owned());
    let stale = record_delete_outcome(&mut toasts, &outcome);
    assert!(!stale);
    assert_eq!(toasts.toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts.toasts[0].message, "Failed to delete the voyage");
}
