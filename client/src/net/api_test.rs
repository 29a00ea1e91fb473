use super::*;

#[test]
fn voyage_delete_endpoint_carries_id_as_query_param() {
    assert_eq!(voyage_delete_endpoint("voy-1"), "/api/voyage/delete?id=voy-1");
}

#[test]
fn fetch_failed_message_formats_subject_and_status() {
    assert_eq!(fetch_failed_message("vessel", 503), "vessel request failed: 503");
}

#[test]
fn mutation_failure_messages_are_user_facing() {
    assert_eq!(CREATE_FAILED, "New voyage could not be created.");
    assert_eq!(DELETE_FAILED, "Failed to delete the voyage");
}
