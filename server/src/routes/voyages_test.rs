use super::*;

#[test]
fn not_found_maps_to_404() {
    let err = VoyageError::NotFound("voy-1".to_owned());
    assert_eq!(voyage_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn candidate_problems_map_to_400() {
    for err in [
        VoyageError::UnknownVessel("v".to_owned()),
        VoyageError::UnknownUnitType("u".to_owned()),
        VoyageError::TooFewUnitTypes,
        VoyageError::InvalidSchedule,
    ] {
        assert_eq!(voyage_error_to_status(err), StatusCode::BAD_REQUEST);
    }
}

#[test]
fn delete_params_decode_the_id_query() {
    let params: DeleteParams = serde_json::from_str(r#"{"id":"voy-1"}"#).unwrap();
    assert_eq!(params.id, "voy-1");
}
