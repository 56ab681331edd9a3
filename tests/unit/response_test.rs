// Response normalization contract: option wrapping, tolerant params access,
// and the CVV/AVS fallback rules.

use paygate::responses::{AvsParams, AvsResult, CvvResult, Response, ResponseOptions};
use serde_json::{json, Map};

#[test]
fn test_cvv_blank_code_falls_back_to_x() {
    let result = CvvResult::new("");
    assert_eq!(result.code(), "X");
    assert_eq!(result.message(), "Card does not support verification");

    let map = result.to_map();
    assert_eq!(map["code"], "X");
    assert_eq!(map["message"], "Card does not support verification");
}

#[test]
fn test_cvv_unknown_code_keeps_code_with_unknown_message() {
    let result = CvvResult::new("Z");
    assert_eq!(result.code(), "Z");
    assert_eq!(result.message(), "Unknown");
}

#[test]
fn test_cvv_match_codes() {
    assert_eq!(CvvResult::new("M").message(), "Match");
    assert_eq!(CvvResult::new("N").message(), "No Match");
}

#[test]
fn test_avs_missing_code_falls_back_to_u() {
    let result = AvsResult::new(None);
    assert_eq!(result.code(), "U");
    assert_eq!(result.message(), "Address information unavailable");
}

#[test]
fn test_avs_known_and_unknown_codes() {
    assert_eq!(
        AvsResult::new(Some("Y")).message(),
        "Street address and 5-digit postal code match"
    );

    let unknown = AvsResult::new(Some("9"));
    assert_eq!(unknown.code(), "9");
    assert_eq!(unknown.message(), "Unknown");
}

#[test]
fn test_response_wraps_results_only_when_present() {
    let bare = Response::new(true, "ok", Map::new(), ResponseOptions::default());
    assert!(bare.avs_result().is_none());
    assert!(bare.cvv_result().is_none());

    let wrapped = Response::new(
        true,
        "ok",
        Map::new(),
        ResponseOptions {
            avs_result: Some(AvsParams {
                code: Some("Y".to_string()),
            }),
            cvv_result: Some("M".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(wrapped.avs_result().unwrap().code(), "Y");
    assert_eq!(wrapped.cvv_result().unwrap().code(), "M");
}

#[test]
fn test_params_keep_gateway_specific_keys() {
    let mut params = Map::new();
    params.insert("x_trans_id".to_string(), json!("9942"));
    params.insert("x_response_reason".to_string(), json!("This transaction has been approved"));

    let response = Response::new(true, "Approved", params, ResponseOptions::default());

    assert_eq!(response.param("x_trans_id"), Some(&json!("9942")));
    assert_eq!(response.param("pasref"), None);
    assert_eq!(response.params().len(), 2);
}

#[test]
fn test_authorization_defaults_to_none() {
    let response = Response::new(false, "Declined", Map::new(), ResponseOptions::default());
    assert_eq!(response.authorization(), None);
    assert!(!response.is_test());
    assert_eq!(response.fraud_review(), None);
}

#[test]
fn test_fraud_review_flag_passes_through() {
    let response = Response::new(
        true,
        "Approved, held for review",
        Map::new(),
        ResponseOptions {
            fraud_review: Some(true),
            authorization: Some("a1".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(response.fraud_review(), Some(true));
    assert!(response.success());
}
