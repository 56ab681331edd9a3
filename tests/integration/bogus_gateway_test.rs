// End-to-end flow through the bogus gateway: validate a card, run the money
// operations, and check the normalized response every adapter must produce.

use paygate::cards::{CardClassifier, CreditCard};
use paygate::gateways::{BogusGateway, Gateway, TransactionOptions};
use paygate::{AppError, GatewayMode};
use rust_decimal_macros::dec;
use serde_json::json;

fn sentinel_card(number: &str) -> CreditCard {
    CreditCard {
        first_name: "Jim".to_string(),
        last_name: "Smith".to_string(),
        month: 12,
        year: 2030,
        number: number.to_string(),
        ..Default::default()
    }
}

fn gateway() -> BogusGateway {
    BogusGateway::new(GatewayMode::Test).unwrap()
}

#[tokio::test]
async fn test_purchase_then_capture_flow() -> anyhow::Result<()> {
    let classifier = CardClassifier::new(GatewayMode::Test);
    let card = sentinel_card("1");
    assert!(card.is_valid(&classifier));

    let gateway = gateway();
    let options = TransactionOptions::default();

    let response = gateway.purchase(dec!(100.00), &card, &options).await?;
    assert!(response.success());
    assert!(response.is_test());
    assert_eq!(response.message(), "Bogus Gateway: Forced success");
    assert_eq!(response.authorization(), Some("53433"));
    assert_eq!(response.param("amount"), Some(&json!("100.00")));
    assert_eq!(response.avs_result().unwrap().code(), "Y");
    assert_eq!(response.cvv_result().unwrap().message(), "Match");

    let authorization = response.authorization().unwrap().to_string();
    let capture = gateway.capture(dec!(100.00), &authorization, &options).await?;
    assert!(capture.success());
    assert_eq!(capture.param("action"), Some(&json!("capture")));

    Ok(())
}

#[tokio::test]
async fn test_authorize_then_void_flow() {
    let gateway = gateway();
    let options = TransactionOptions::default();
    let card = sentinel_card("success");

    let auth = gateway.authorize(dec!(25.50), &card, &options).await.unwrap();
    assert!(auth.success());

    let void = gateway
        .void(auth.authorization().unwrap(), &options)
        .await
        .unwrap();
    assert!(void.success());
    assert_eq!(void.param("amount"), None);
}

#[tokio::test]
async fn test_credit_against_captured_transaction() {
    let gateway = gateway();
    let options = TransactionOptions::default();

    let credit = gateway.credit(dec!(10.00), "53433", &options).await.unwrap();
    assert!(credit.success());
    assert_eq!(credit.param("authorization"), Some(&json!("53433")));
}

#[tokio::test]
async fn test_recurring_charge() {
    let gateway = gateway();
    let response = gateway
        .recurring(dec!(9.99), &sentinel_card("1"), &TransactionOptions::default())
        .await
        .unwrap();
    assert!(response.success());
    assert_eq!(response.param("action"), Some(&json!("recurring")));
}

#[tokio::test]
async fn test_forced_failure_is_a_declined_response_not_an_error() {
    let gateway = gateway();
    let response = gateway
        .purchase(dec!(100.00), &sentinel_card("2"), &TransactionOptions::default())
        .await
        .unwrap();

    assert!(!response.success());
    assert_eq!(response.message(), "Bogus Gateway: Forced failure");
    assert_eq!(response.authorization(), None);
    assert_eq!(response.avs_result().unwrap().code(), "N");
    assert_eq!(response.cvv_result().unwrap().message(), "No Match");
}

#[tokio::test]
async fn test_forced_error_surfaces_as_gateway_error() {
    let gateway = gateway();
    let err = gateway
        .purchase(dec!(100.00), &sentinel_card("3"), &TransactionOptions::default())
        .await
        .err()
        .unwrap();

    assert!(matches!(err, AppError::Gateway(_)));
}

#[tokio::test]
async fn test_unknown_authorization_is_declined() {
    let gateway = gateway();
    let response = gateway
        .capture(dec!(5.00), "nope", &TransactionOptions::default())
        .await
        .unwrap();

    assert!(!response.success());
    assert_eq!(response.message(), "Bogus Gateway: Unknown authorization");
}

#[test]
fn test_live_mode_construction_fails() {
    let err = BogusGateway::new(GatewayMode::Live).err().unwrap();
    assert!(matches!(err, AppError::Configuration(_)));
}
