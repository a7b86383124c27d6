#![cfg(test)]

use super::{address_at, i128_at, SaleTest, PRICE, STARTING_BALANCE};
use common::sale::types::SaleError;
use soroban_sdk::testutils::{Address as _, IssuerFlags};
use soroban_sdk::Address;

#[test]
fn test_purchase_pays_seller_and_latches_sold() {
    let test: SaleTest = SaleTest::setup();
    test.pass_inspection();

    test.sale_client.purchase(&test.buyer, &PRICE);

    // Checked before any other call so the purchase is the latest invocation.
    let sold_events = test.sale_events("CarSold");
    assert_eq!(sold_events.len(), 1);
    let data = &sold_events[0];
    assert_eq!(address_at(&test.env, data, 0), test.seller);
    assert_eq!(address_at(&test.env, data, 1), test.buyer);
    assert_eq!(i128_at(&test.env, data, 2), PRICE);

    assert!(test.sale_client.is_sold());
    assert_eq!(test.sale_client.buyer(), Some(test.buyer.clone()));
    assert_eq!(test.token_client.balance(&test.seller), PRICE);
    assert_eq!(test.token_client.balance(&test.buyer), STARTING_BALANCE - PRICE);
    assert_eq!(test.sale_client.escrowed_balance(), 0);
}

#[test]
fn test_sale_scenario() {
    let test: SaleTest = SaleTest::setup();
    assert!(!test.sale_client.inspection_passed());
    test.assert_unsold();

    test.sale_client.update_inspection(&test.seller, &true);
    assert!(test.sale_client.inspection_passed());

    test.sale_client.purchase(&test.buyer, &PRICE);
    assert_eq!(test.sale_client.buyer(), Some(test.buyer.clone()));
    assert!(test.sale_client.is_sold());
    assert_eq!(test.token_client.balance(&test.seller), PRICE);

    let result = test.sale_client.try_purchase(&test.stranger, &PRICE);
    assert_eq!(result, Err(Ok(SaleError::AlreadySold)));

    let result = test.sale_client.try_withdraw_funds(&test.buyer);
    assert_eq!(result, Err(Ok(SaleError::Unauthorized)));

    assert_eq!(test.sale_client.withdraw_funds(&test.seller), 0);
    assert_eq!(test.token_client.balance(&test.seller), PRICE);
}

#[test]
fn test_payment_mismatch_is_checked_first() {
    let test: SaleTest = SaleTest::setup();

    let result = test.sale_client.try_purchase(&test.buyer, &(PRICE - 1));
    assert_eq!(result, Err(Ok(SaleError::PaymentMismatch)));

    let result = test.sale_client.try_purchase(&test.buyer, &(PRICE + 1));
    assert_eq!(result, Err(Ok(SaleError::PaymentMismatch)));

    test.assert_unsold();
    assert!(!test.sale_client.inspection_passed());
    assert_eq!(test.token_client.balance(&test.buyer), STARTING_BALANCE);
}

#[test]
fn test_purchase_requires_passed_inspection() {
    let test: SaleTest = SaleTest::setup();

    let result = test.sale_client.try_purchase(&test.buyer, &PRICE);
    assert_eq!(result, Err(Ok(SaleError::InspectionNotPassed)));

    // Revoked inspection blocks again.
    test.sale_client.update_inspection(&test.seller, &true);
    test.sale_client.update_inspection(&test.seller, &false);
    let result = test.sale_client.try_purchase(&test.buyer, &PRICE);
    assert_eq!(result, Err(Ok(SaleError::InspectionNotPassed)));

    test.assert_unsold();
    assert_eq!(test.token_client.balance(&test.buyer), STARTING_BALANCE);
}

#[test]
fn test_second_purchase_always_fails() {
    let test: SaleTest = SaleTest::setup();
    test.sell_to_buyer();

    for caller in [test.buyer.clone(), test.stranger.clone(), test.seller.clone()] {
        let result = test.sale_client.try_purchase(&caller, &PRICE);
        assert_eq!(result, Err(Ok(SaleError::AlreadySold)));
    }

    // A wrong amount still reports the mismatch first.
    let result = test.sale_client.try_purchase(&test.stranger, &1);
    assert_eq!(result, Err(Ok(SaleError::PaymentMismatch)));

    assert_eq!(test.sale_client.buyer(), Some(test.buyer.clone()));
    assert_eq!(test.token_client.balance(&test.stranger), STARTING_BALANCE);
    assert_eq!(test.token_client.balance(&test.seller), PRICE);
}

#[test]
fn test_purchase_without_funds_leaves_sale_open() {
    let test: SaleTest = SaleTest::setup();
    test.pass_inspection();
    let broke: Address = Address::generate(&test.env);

    let result = test.sale_client.try_purchase(&broke, &PRICE);
    assert_eq!(result, Err(Ok(SaleError::InsufficientBalance)));

    test.assert_unsold();
    assert_eq!(test.token_client.balance(&test.seller), 0);

    test.sale_client.purchase(&test.buyer, &PRICE);
    assert_eq!(test.sale_client.buyer(), Some(test.buyer.clone()));
}

#[test]
fn test_failed_payment_rolls_back_purchase() {
    let test: SaleTest = SaleTest::setup();
    test.pass_inspection();

    // Seller's trustline can no longer receive the token.
    test.token_contract
        .issuer()
        .set_flag(IssuerFlags::RevocableFlag);
    test.token_admin_client.set_authorized(&test.seller, &false);

    let result = test.sale_client.try_purchase(&test.buyer, &PRICE);
    assert!(result.is_err());

    test.assert_unsold();
    assert_eq!(test.token_client.balance(&test.buyer), STARTING_BALANCE);
    assert_eq!(test.token_client.balance(&test.seller), 0);
}
