//! Smoke tests against the real Paystack API.
//!
//! Read-only calls only; nothing is created on the account.
//! Requires:
//! 1. A Paystack **test** secret key
//! 2. PAYSTACK_SECRET_KEY in the environment or a .env file
//!
//! Run: cargo test --test live_api -- --nocapture --ignored

use paystack_sdk::prelude::*;
use std::env;

// ============================================================================
// Test Helpers
// ============================================================================

fn live_client() -> Option<PaystackClient> {
    dotenvy::dotenv().ok();
    let key = env::var("PAYSTACK_SECRET_KEY").ok()?;
    if !key.starts_with("sk_test_") {
        println!("Refusing to run live tests with a non-test key");
        return None;
    }
    PaystackClient::new(&key).ok()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
#[ignore]
async fn test_live_reference_data() {
    let Some(client) = live_client() else {
        println!("PAYSTACK_SECRET_KEY not set, skipping");
        return;
    };

    let countries = client.miscellaneous().list_countries().await.unwrap();
    println!("{} countries", countries.len());
    assert!(countries.iter().any(|c| c.iso_code == "NG"));

    let banks = client
        .miscellaneous()
        .list_banks(&ListBanksQuery::default().with_per_page(5))
        .await
        .unwrap();
    println!("first banks: {:?}", banks.data.iter().map(|b| &b.name).collect::<Vec<_>>());
    assert!(!banks.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_live_balance_and_lists() {
    let Some(client) = live_client() else {
        println!("PAYSTACK_SECRET_KEY not set, skipping");
        return;
    };

    let balances = client.transfer_control().fetch_balance().await.unwrap();
    for b in &balances {
        println!("{} {}", b.currency, b.balance);
    }

    let page = client
        .transactions()
        .list(&ListTransactionsQuery::default())
        .await
        .unwrap();
    println!("{} transactions on first page", page.len());

    let plans = client.plans().list(&ListPlansQuery::default()).await.unwrap();
    println!("{} plans on first page", plans.len());
}

#[tokio::test]
#[ignore]
async fn test_live_unknown_plan_is_api_error() {
    let Some(client) = live_client() else {
        println!("PAYSTACK_SECRET_KEY not set, skipping");
        return;
    };

    let err = client.plans().fetch("PLN_does_not_exist").await.unwrap_err();
    println!("{}", err);
    assert!(err.is_api());
}
