//! Integration tests for the Paystack REST client.
//!
//! Every test runs against a local `wiremock` server; no network access is
//! needed. See `live_api.rs` for the opt-in test against the real API.

use paystack_sdk::domain::bulk_charge::BulkChargeItem;
use paystack_sdk::domain::charge::ChargeStatus;
use paystack_sdk::domain::dedicated_account::{RemoveSplitRequest, RequeryDedicatedAccountQuery};
use paystack_sdk::domain::direct_debit::{
    ActivationChargeBatchRequest, MandateAuthorizationsQuery, MandateStatus,
};
use paystack_sdk::domain::dispute::ResolveDisputeRequest;
use paystack_sdk::domain::page::{AddProductsRequest, CreatePageRequest};
use paystack_sdk::domain::plan::UpdatePlanRequest;
use paystack_sdk::domain::product::CreateProductRequest;
use paystack_sdk::domain::split::{BearerType, CreateSplitRequest, SplitShare, SplitType};
use paystack_sdk::domain::subaccount::UpdateSubaccountRequest;
use paystack_sdk::domain::subscription::SubscriptionToggleRequest;
use paystack_sdk::domain::terminal::{
    SendTerminalEventRequest, TerminalEventAction, TerminalEventType,
};
use paystack_sdk::domain::transfer_control::{ResendOtpReason, ResendOtpRequest};
use paystack_sdk::domain::verification::ResolveAccountQuery;
use paystack_sdk::domain::virtual_terminal::{CreateVirtualTerminalRequest, Destination};
use paystack_sdk::network::TIMEOUT_ERROR_MESSAGE;
use paystack_sdk::prelude::*;

use serde_json::{json, Value};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "sk_test_x";

// =============================================================================
// Helpers
// =============================================================================

async fn setup() -> (MockServer, PaystackClient) {
    let server = MockServer::start().await;
    let client = PaystackClient::builder(KEY)
        .base_url(&server.uri())
        .build()
        .unwrap();
    (server, client)
}

fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": true,
        "message": "OK",
        "data": data
    }))
}

fn ok_page(data: Value, meta: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": true,
        "message": "OK",
        "data": data,
        "meta": meta
    }))
}

fn ack(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"status": true, "message": message}))
}

fn plan_json() -> Value {
    json!({
        "id": 28,
        "name": "Monthly retainer",
        "plan_code": "PLN_x",
        "amount": 500000,
        "interval": "monthly",
        "currency": "NGN"
    })
}

// =============================================================================
// Envelope contract
// =============================================================================

mod envelope {
    use super::*;

    #[tokio::test]
    async fn test_success_unwraps_data() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/plan/PLN_x"))
            .respond_with(ok(plan_json()))
            .expect(1)
            .mount(&server)
            .await;

        let plan = assert_ok!(client.plans().fetch("PLN_x").await);
        assert_eq!(plan.plan_code, "PLN_x");
        assert_eq!(plan.amount, 500000);
        assert_eq!(plan.interval, Interval::Monthly);
    }

    #[tokio::test]
    async fn test_status_false_surfaces_remote_message() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/plan/PLN_x"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": false, "message": "not found"})),
            )
            .mount(&server)
            .await;

        let err = assert_err!(client.plans().fetch("PLN_x").await);
        assert!(err.is_api());
        assert_eq!(err.status_code(), 502);
        assert!(err.to_string().contains("not found"));
        assert_eq!(err.to_string(), "Paystack API Error: not found");
    }

    #[tokio::test]
    async fn test_status_false_without_message_uses_fallback() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/plan/PLN_x"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": false})))
            .mount(&server)
            .await;

        let err = assert_err!(client.plans().fetch("PLN_x").await);
        assert_eq!(err.message(), "Failed to fetch plan");
    }

    #[tokio::test]
    async fn test_non_2xx_carries_body_message() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/customer"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "bad"})))
            .mount(&server)
            .await;

        let err = assert_err!(
            client
                .customers()
                .create(&CreateCustomerRequest::new("a@b.co"))
                .await
        );
        assert!(err.to_string().contains("bad"));
    }

    #[tokio::test]
    async fn test_non_2xx_without_body_uses_transport_message() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/balance"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = assert_err!(client.transfer_control().fetch_balance().await);
        assert_eq!(err.message(), "Request failed with status code 503");
    }

    #[tokio::test]
    async fn test_missing_resource_reports_fallback_not_success_text() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/plan/PLN_x"))
            .respond_with(ack("Plan retrieved"))
            .mount(&server)
            .await;

        let err = assert_err!(client.plans().fetch("PLN_x").await);
        assert_eq!(err.message(), "Failed to fetch plan");
        assert!(!err.to_string().contains("Plan retrieved"));
    }

    #[tokio::test]
    async fn test_undecodable_data_is_api_error() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/plan/PLN_x"))
            .respond_with(ok(json!({"unexpected": true})))
            .mount(&server)
            .await;

        let err = assert_err!(client.plans().fetch("PLN_x").await);
        assert!(err.is_api());
        assert!(err.message().starts_with("Failed to decode response"));
    }

    #[tokio::test]
    async fn test_timeout_message() {
        let server = MockServer::start().await;
        let client = PaystackClient::builder(KEY)
            .base_url(&server.uri())
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        Mock::given(method("GET"))
            .and(path("/country"))
            .respond_with(ok(json!([])).set_delay(Duration::from_millis(1000)))
            .mount(&server)
            .await;

        let err = assert_err!(client.miscellaneous().list_countries().await);
        assert_eq!(err.message(), TIMEOUT_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_connection_refused_is_api_error() {
        let client = PaystackClient::builder(KEY)
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        let err = assert_err!(client.miscellaneous().list_countries().await);
        assert!(err.is_api());
        assert!(!err.message().is_empty());
    }
}

// =============================================================================
// Transport headers
// =============================================================================

mod headers {
    use super::*;

    #[tokio::test]
    async fn test_bearer_and_json_headers_are_sent() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/balance"))
            .and(header("authorization", "Bearer sk_test_x"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .respond_with(ok(json!([{"currency": "NGN", "balance": 1700}])))
            .expect(1)
            .mount(&server)
            .await;

        let balances = assert_ok!(client.transfer_control().fetch_balance().await);
        assert_eq!(balances[0].balance, 1700);
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_stripped_from_key() {
        let server = MockServer::start().await;
        let client = PaystackClient::builder("  sk_test_x \n")
            .base_url(&server.uri())
            .build()
            .unwrap();
        Mock::given(method("GET"))
            .and(path("/country"))
            .and(header("authorization", "Bearer sk_test_x"))
            .respond_with(ok(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        assert_ok!(client.miscellaneous().list_countries().await);
    }
}

// =============================================================================
// Customers and transactions
// =============================================================================

mod payments {
    use super::*;

    #[tokio::test]
    async fn test_create_customer_returns_inner_data() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/customer"))
            .and(body_json(json!({"email": "a@b.co"})))
            .respond_with(ok(json!({
                "id": 1,
                "email": "a@b.co",
                "customer_code": "CUS_1",
                "integration": 100032,
                "domain": "test"
            })))
            .mount(&server)
            .await;

        let customer = assert_ok!(
            client
                .customers()
                .create(&CreateCustomerRequest::new("a@b.co"))
                .await
        );
        assert_eq!(customer.customer_code, "CUS_1");
    }

    #[tokio::test]
    async fn test_verify_returns_envelope_unchanged() {
        let (server, client) = setup().await;
        let body = json!({
            "status": true,
            "message": "Verification successful",
            "data": {
                "id": 4099260516u64,
                "reference": "ref123",
                "amount": 40333,
                "status": "success"
            }
        });
        Mock::given(method("GET"))
            .and(path("/transaction/verify/ref123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let envelope = assert_ok!(client.transactions().verify("ref123").await);
        assert!(envelope.status);
        assert_eq!(envelope.message, "Verification successful");
        let tx = envelope.data.as_ref().unwrap();
        assert_eq!(tx.reference, "ref123");
        assert!(tx.is_successful());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "status": true,
                "message": "Verification successful",
                "data": {
                    "id": 4099260516u64,
                    "reference": "ref123",
                    "amount": 40333,
                    "status": "success",
                    "currency": null,
                    "domain": null,
                    "channel": null,
                    "gateway_response": null,
                    "message": null,
                    "fees": null,
                    "ip_address": null,
                    "metadata": null,
                    "customer": null,
                    "authorization": null,
                    "paidAt": null,
                    "createdAt": null
                }
            })
        );
    }

    #[tokio::test]
    async fn test_path_parameters_are_encoded() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/transaction/verify/ref%2F1"))
            .respond_with(ok(json!({"id": 1, "reference": "ref/1", "amount": 100})))
            .expect(1)
            .mount(&server)
            .await;

        let envelope = assert_ok!(client.transactions().verify("ref/1").await);
        assert_eq!(envelope.data.unwrap().reference, "ref/1");
    }

    #[tokio::test]
    async fn test_initialize_transaction() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/transaction/initialize"))
            .and(body_json(json!({"email": "customer@email.com", "amount": 20000})))
            .respond_with(ok(json!({
                "authorization_url": "https://checkout.paystack.com/0peioxfhpn",
                "access_code": "0peioxfhpn",
                "reference": "7PVGX8MEk85tgeEpVDtD"
            })))
            .mount(&server)
            .await;

        let init = assert_ok!(
            client
                .transactions()
                .initialize(&InitializeTransactionRequest::new("customer@email.com", 20000))
                .await
        );
        assert_eq!(init.access_code, "0peioxfhpn");
    }

    #[tokio::test]
    async fn test_list_customers_forwards_query_and_meta() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/customer"))
            .and(query_param("perPage", "2"))
            .and(query_param("page", "1"))
            .respond_with(ok_page(
                json!([
                    {"id": 1, "email": "a@b.co", "customer_code": "CUS_1"},
                    {"id": 2, "email": "c@d.co", "customer_code": "CUS_2"}
                ]),
                json!({"total": 3, "skipped": 0, "perPage": 2, "page": 1, "pageCount": 2}),
            ))
            .mount(&server)
            .await;

        let page = assert_ok!(
            client
                .customers()
                .list(&Pagination::new().with_per_page(2).with_page(1))
                .await
        );
        assert_eq!(page.len(), 2);
        assert_eq!(page.meta.total, Some(3));
        assert!(page.has_more());
        let codes: Vec<String> = page.into_iter().map(|c| c.customer_code).collect();
        assert_eq!(codes, vec!["CUS_1", "CUS_2"]);
    }

    #[tokio::test]
    async fn test_identical_reads_are_equal() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/customer/CUS_1"))
            .respond_with(ok(json!({
                "id": 1,
                "email": "a@b.co",
                "customer_code": "CUS_1",
                "transactions": [],
                "subscriptions": [],
                "authorizations": []
            })))
            .expect(2)
            .mount(&server)
            .await;

        let first = assert_ok!(client.customers().fetch("CUS_1").await);
        let second = assert_ok!(client.customers().fetch("CUS_1").await);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_charge_flow_reports_pending_input() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/charge/submit_otp"))
            .and(body_json(json!({"otp": "123456", "reference": "5bwib5v6anhe9xa"})))
            .respond_with(ok(json!({
                "reference": "5bwib5v6anhe9xa",
                "status": "send_phone",
                "display_text": "Please enter your phone number"
            })))
            .mount(&server)
            .await;

        let charge = assert_ok!(
            client
                .charges()
                .submit_otp("123456", "5bwib5v6anhe9xa")
                .await
        );
        assert_eq!(charge.status, ChargeStatus::SendPhone);
        assert!(charge.status.needs_input());
    }

    #[tokio::test]
    async fn test_refund_create() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/refund"))
            .and(body_json(json!({"transaction": "1641", "amount": 5000})))
            .respond_with(ok(json!({
                "transaction": {"id": 1641, "reference": "T1"},
                "id": 3018284,
                "amount": 5000,
                "status": "pending",
                "currency": "NGN"
            })))
            .mount(&server)
            .await;

        let refund = assert_ok!(
            client
                .refunds()
                .create(&CreateRefundRequest::new("1641").with_amount(5000))
                .await
        );
        assert_eq!(refund.id, 3018284);
    }
}

// =============================================================================
// Acknowledgement endpoints
// =============================================================================

mod acknowledgements {
    use super::*;

    #[tokio::test]
    async fn test_subscription_disable() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/subscription/disable"))
            .and(body_json(json!({"code": "SUB_vsyqdmlzble3uii", "token": "d7gofp6yppn3qz7"})))
            .respond_with(ack("Subscription disabled successfully"))
            .mount(&server)
            .await;

        let request = SubscriptionToggleRequest {
            code: "SUB_vsyqdmlzble3uii".into(),
            token: "d7gofp6yppn3qz7".into(),
        };
        let done = assert_ok!(client.subscriptions().disable(&request).await);
        assert_eq!(done.message, "Subscription disabled successfully");
    }

    #[tokio::test]
    async fn test_bulk_charge_pause_is_get() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/bulkcharge/pause/BCH_180tl7oq7cayggh"))
            .respond_with(ack("Bulk charge batch has been paused"))
            .expect(1)
            .mount(&server)
            .await;

        let done = assert_ok!(client.bulk_charges().pause("BCH_180tl7oq7cayggh").await);
        assert_eq!(done.message, "Bulk charge batch has been paused");
    }

    #[tokio::test]
    async fn test_otp_toggles_post_without_body() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/transfer/enable_otp"))
            .respond_with(ack("OTP requirement for transfers has been enabled"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/transfer/resend_otp"))
            .and(body_json(json!({"transfer_code": "TRF_x", "reason": "transfer"})))
            .respond_with(ack("OTP has been resent"))
            .expect(1)
            .mount(&server)
            .await;

        assert_ok!(client.transfer_control().enable_otp().await);
        let request = ResendOtpRequest {
            transfer_code: "TRF_x".into(),
            reason: ResendOtpReason::Transfer,
        };
        assert_ok!(client.transfer_control().resend_otp(&request).await);
    }

    #[tokio::test]
    async fn test_recipient_delete() {
        let (server, client) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/transferrecipient/RCP_1"))
            .respond_with(ack("Transfer recipient set as inactive"))
            .mount(&server)
            .await;

        let done = assert_ok!(client.transfer_recipients().delete("RCP_1").await);
        assert_eq!(done.message, "Transfer recipient set as inactive");
    }

    #[tokio::test]
    async fn test_apple_pay_register_without_data_succeeds() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/apple-pay/domain"))
            .and(body_json(json!({"domainName": "example.com"})))
            .respond_with(ack("Domain successfully registered on Apple Pay"))
            .expect(1)
            .mount(&server)
            .await;

        let res = assert_ok!(client.apple_pay().register_domain("example.com").await);
        assert_eq!(res.message, "Domain successfully registered on Apple Pay");
    }

    #[tokio::test]
    async fn test_apple_pay_unregister_is_delete_with_body() {
        let (server, client) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/apple-pay/domain"))
            .and(body_json(json!({"domainName": "example.com"})))
            .respond_with(ack("Domain successfully unregistered from Apple Pay"))
            .expect(1)
            .mount(&server)
            .await;

        let res = assert_ok!(client.apple_pay().unregister_domain("example.com").await);
        assert!(res.message.contains("unregistered"));
    }

    #[tokio::test]
    async fn test_plan_update_without_data_succeeds() {
        let (server, client) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/plan/PLN_x"))
            .and(body_json(json!({"name": "Quarterly retainer"})))
            .respond_with(ack("Plan updated. 1 subscription(s) affected"))
            .expect(1)
            .mount(&server)
            .await;

        let request = UpdatePlanRequest {
            name: Some("Quarterly retainer".to_string()),
            ..UpdatePlanRequest::default()
        };
        let res = assert_ok!(client.plans().update("PLN_x", &request).await);
        assert_eq!(res.message, "Plan updated. 1 subscription(s) affected");
    }

    #[tokio::test]
    async fn test_ack_still_fails_on_status_false() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/paymentrequest/archive/PRQ_1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": false, "message": "Already archived"})),
            )
            .mount(&server)
            .await;

        let err = assert_err!(client.payment_requests().archive("PRQ_1").await);
        assert_eq!(err.message(), "Already archived");
    }
}

// =============================================================================
// Payouts, reference data and misc modules
// =============================================================================

mod modules {
    use super::*;

    #[tokio::test]
    async fn test_settlement_transactions_meta() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/settlement/3090024/transactions"))
            .respond_with(ok_page(
                json!([{"id": 1, "reference": "r1", "amount": 10000, "status": "success"}]),
                json!({
                    "total": 1,
                    "total_volume": 10000,
                    "perPage": 50,
                    "page": 1,
                    "pageCount": 1
                }),
            ))
            .mount(&server)
            .await;

        let page = assert_ok!(
            client
                .settlements()
                .transactions(3090024, &Pagination::new())
                .await
        );
        assert_eq!(page.meta.total_volume, Some(10000));
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn test_list_banks_cursor() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/bank"))
            .and(query_param("country", "nigeria"))
            .and(query_param("perPage", "1"))
            .respond_with(ok_page(
                json!([{"id": 174, "name": "Abbey Mortgage Bank", "code": "801", "active": true}]),
                json!({"next": "YmFuazoxNjk=", "previous": null, "perPage": 1}),
            ))
            .mount(&server)
            .await;

        let page = assert_ok!(
            client
                .miscellaneous()
                .list_banks(&ListBanksQuery::country(
                    paystack_sdk::domain::miscellaneous::BankCountry::Nigeria
                )
                .with_per_page(1))
                .await
        );
        assert_eq!(page.next_cursor(), Some("YmFuazoxNjk="));
        assert!(page.has_more());
        assert_eq!(page.data[0].code, "801");
    }

    #[tokio::test]
    async fn test_resolve_account_query() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/bank/resolve"))
            .and(query_param("account_number", "0022728151"))
            .and(query_param("bank_code", "063"))
            .respond_with(ok(json!({
                "account_number": "0022728151",
                "account_name": "WES GIBBONS",
                "bank_id": 9
            })))
            .mount(&server)
            .await;

        let account = assert_ok!(
            client
                .verification()
                .resolve_account(&ResolveAccountQuery::new("0022728151", "063"))
                .await
        );
        assert_eq!(account.account_name, "WES GIBBONS");
    }

    #[tokio::test]
    async fn test_bulk_charge_initiate_posts_array() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/bulkcharge"))
            .and(body_json(json!([
                {"authorization": "AUTH_ncx8hews93", "amount": 2500, "reference": "dam1266638dhhd"}
            ])))
            .respond_with(ok(json!({
                "batch_code": "BCH_180tl7oq7cayggh",
                "reference": "bulkcharge-1663150565684-p08dspb9ze",
                "id": 62,
                "status": "active",
                "total_charges": 1,
                "pending_charges": 1
            })))
            .mount(&server)
            .await;

        let items = [BulkChargeItem::new("AUTH_ncx8hews93", 2500, "dam1266638dhhd")];
        let batch = assert_ok!(client.bulk_charges().initiate(&items).await);
        assert_eq!(batch.batch_code, "BCH_180tl7oq7cayggh");
    }

    #[tokio::test]
    async fn test_dispute_upload_url_query() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/dispute/2867/upload_url"))
            .and(query_param("upload_filename", "filename.ext"))
            .respond_with(ok(json!({
                "signedUrl": "https://files.paystack.co/disputes/x",
                "fileName": "filename.ext"
            })))
            .mount(&server)
            .await;

        let url = assert_ok!(client.disputes().upload_url(2867, "filename.ext").await);
        assert_eq!(url.file_name, "filename.ext");
    }

    #[tokio::test]
    async fn test_dispute_resolve_body() {
        let (server, client) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/dispute/2867/resolve"))
            .and(body_json(json!({
                "resolution": "merchant-accepted",
                "message": "Merchant accepted",
                "refund_amount": 1002
            })))
            .respond_with(ok(json!({"id": 2867, "status": "resolved"})))
            .mount(&server)
            .await;

        let dispute = assert_ok!(
            client
                .disputes()
                .resolve(2867, &ResolveDisputeRequest::accept("Merchant accepted", 1002))
                .await
        );
        assert_eq!(dispute.status, DisputeStatus::Resolved);
    }

    #[tokio::test]
    async fn test_payment_session_timeout_update() {
        let (server, client) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/integration/payment_session_timeout"))
            .and(body_json(json!({"timeout": 30})))
            .respond_with(ok(json!({"payment_session_timeout": 30})))
            .mount(&server)
            .await;

        let t = assert_ok!(client.integration().update_payment_session_timeout(30).await);
        assert_eq!(t.payment_session_timeout, 30);
    }

    #[tokio::test]
    async fn test_transfer_initiate() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/transfer"))
            .and(body_json(json!({
                "source": "balance",
                "amount": 3794800,
                "recipient": "RCP_gx2wn530m0i3w3m",
                "reference": "ref_1"
            })))
            .respond_with(ok(json!({
                "amount": 3794800,
                "currency": "NGN",
                "status": "otp",
                "transfer_code": "TRF_1ptvuv321ahaa7q",
                "id": 14,
                "recipient": 28
            })))
            .mount(&server)
            .await;

        let transfer = assert_ok!(
            client
                .transfers()
                .initiate(&InitiateTransferRequest::new(
                    3794800,
                    "RCP_gx2wn530m0i3w3m",
                    "ref_1"
                ))
                .await
        );
        assert_eq!(transfer.status, TransferStatus::Otp);
    }
}

// =============================================================================
// Splits, terminals, virtual accounts and the storefront
// =============================================================================

mod storefront {
    use super::*;

    fn split_json() -> Value {
        json!({
            "id": 143,
            "name": "Halfsies",
            "split_code": "SPL_e7jnRLtzla",
            "type": "percentage",
            "currency": "NGN",
            "bearer_type": "subaccount",
            "bearer_subaccount": 34,
            "subaccounts": [{
                "subaccount": {"id": 34, "subaccount_code": "ACCT_6uujpqtzmnufzkw"},
                "share": 50
            }]
        })
    }

    #[tokio::test]
    async fn test_split_create() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/split"))
            .and(body_json(json!({
                "name": "Halfsies",
                "type": "percentage",
                "currency": "NGN",
                "subaccounts": [{"subaccount": "ACCT_6uujpqtzmnufzkw", "share": 50}],
                "bearer_type": "subaccount",
                "bearer_subaccount": "ACCT_6uujpqtzmnufzkw"
            })))
            .respond_with(ok(split_json()))
            .expect(1)
            .mount(&server)
            .await;

        let request = CreateSplitRequest {
            name: "Halfsies".to_string(),
            split_type: SplitType::Percentage,
            currency: "NGN".to_string(),
            subaccounts: vec![SplitShare::new("ACCT_6uujpqtzmnufzkw", 50)],
            bearer_type: BearerType::Subaccount,
            bearer_subaccount: Some("ACCT_6uujpqtzmnufzkw".to_string()),
        };
        let split = assert_ok!(client.splits().create(&request).await);
        assert_eq!(split.split_code, "SPL_e7jnRLtzla");
        assert_eq!(split.bearer_subaccount.as_deref(), Some("34"));
        assert_eq!(split.subaccounts[0].share, 50);
    }

    #[tokio::test]
    async fn test_split_add_subaccount() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/split/143/subaccount/add"))
            .and(body_json(json!({"subaccount": "ACCT_eg4sob4590pq9vb", "share": 20})))
            .respond_with(ok(split_json()))
            .expect(1)
            .mount(&server)
            .await;

        let share = SplitShare::new("ACCT_eg4sob4590pq9vb", 20);
        assert_ok!(client.splits().add_subaccount(143, &share).await);
    }

    #[tokio::test]
    async fn test_terminal_send_event() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/terminal/30/event"))
            .and(body_json(json!({
                "type": "invoice",
                "action": "process",
                "data": {"id": 7895939, "reference": 4634337895939u64}
            })))
            .respond_with(ok(json!({"id": "616d721e8c5cd40a0cdd54a6"})))
            .expect(1)
            .mount(&server)
            .await;

        let request = SendTerminalEventRequest {
            event_type: TerminalEventType::Invoice,
            action: TerminalEventAction::Process,
            data: json!({"id": 7895939, "reference": 4634337895939u64}),
        };
        let event = assert_ok!(client.terminals().send_event("30", &request).await);
        assert_eq!(event.id, "616d721e8c5cd40a0cdd54a6");
    }

    #[tokio::test]
    async fn test_terminal_presence_and_commission() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/terminal/30/presence"))
            .respond_with(ok(json!({"online": true, "available": false})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/terminal/commission_device"))
            .and(body_json(json!({"serial_number": "1111150412230003899"})))
            .respond_with(ack("Device has been commissioned"))
            .expect(1)
            .mount(&server)
            .await;

        let presence = assert_ok!(client.terminals().fetch_presence("30").await);
        assert!(presence.online);
        assert!(!presence.available);

        let res = assert_ok!(client.terminals().commission("1111150412230003899").await);
        assert_eq!(res.message, "Device has been commissioned");
    }

    #[tokio::test]
    async fn test_virtual_terminal_create() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/virtual_terminal"))
            .and(body_json(json!({
                "name": "Sales Point #1",
                "destinations": [{"target": "+2349012345678", "name": "Phone"}]
            })))
            .respond_with(ok(json!({
                "id": 327,
                "code": "VT_L0D3YIJ0",
                "name": "Sales Point #1",
                "active": true,
                "destinations": [{"target": "+2349012345678", "name": "Phone"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = CreateVirtualTerminalRequest {
            name: "Sales Point #1".to_string(),
            destinations: vec![Destination::new("+2349012345678", "Phone")],
            metadata: None,
            currency: None,
            custom_fields: None,
        };
        let vt = assert_ok!(client.virtual_terminals().create(&request).await);
        assert_eq!(vt.code, "VT_L0D3YIJ0");
        assert_eq!(vt.destinations[0].target, "+2349012345678");
    }

    #[tokio::test]
    async fn test_virtual_terminal_remove_split_code_is_delete_with_body() {
        let (server, client) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/virtual_terminal/VT_L0D3YIJ0/split_code"))
            .and(body_json(json!({"split_code": "SPL_98WF13Zu8w5"})))
            .respond_with(ack("Split code removed"))
            .expect(1)
            .mount(&server)
            .await;

        let res = assert_ok!(
            client
                .virtual_terminals()
                .remove_split_code("VT_L0D3YIJ0", "SPL_98WF13Zu8w5")
                .await
        );
        assert_eq!(res.message, "Split code removed");
    }

    #[tokio::test]
    async fn test_direct_debit_activation_and_mandates() {
        let (server, client) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/directdebit/activation-charge"))
            .and(body_json(json!({"customer_ids": [28958104, 983697220]})))
            .respond_with(ack("Mandate is queued for retry"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/directdebit/mandate-authorizations"))
            .and(query_param("status", "active"))
            .and(query_param("per_page", "10"))
            .respond_with(ok_page(
                json!([{"id": 1, "mandate_code": "MND_1", "status": "active"}]),
                json!({"per_page": 10, "next": "MjM0", "previous": null}),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let request = ActivationChargeBatchRequest {
            customer_ids: vec![28958104, 983697220],
        };
        assert_ok!(client.direct_debit().trigger_activation_charge(&request).await);

        let query = MandateAuthorizationsQuery::default()
            .with_status(MandateStatus::Active)
            .with_per_page(10);
        let page = assert_ok!(client.direct_debit().list_mandate_authorizations(&query).await);
        assert_eq!(page.data[0].status, Some(MandateStatus::Active));
        assert_eq!(page.next_cursor(), Some("MjM0"));
    }

    #[tokio::test]
    async fn test_virtual_account_remove_split_is_delete_with_body() {
        let (server, client) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/dedicated_account/split"))
            .and(body_json(json!({
                "account_number": "0033322211",
                "provider_slug": "wema-bank"
            })))
            .respond_with(ok(json!({
                "id": 22495,
                "account_name": "KOLLECT/EMMANUEL",
                "account_number": "0033322211",
                "split_config": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = RemoveSplitRequest {
            account_number: "0033322211".to_string(),
            provider_slug: "wema-bank".to_string(),
        };
        let account = assert_ok!(client.virtual_accounts().remove_split(&request).await);
        assert_eq!(account.id, 22495);
    }

    #[tokio::test]
    async fn test_virtual_account_requery_is_get_ack() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/dedicated_account/requery"))
            .and(query_param("account_number", "1234567890"))
            .and(query_param("provider_slug", "titan-paystack"))
            .respond_with(ack("We are checking the status of your transfer."))
            .expect(1)
            .mount(&server)
            .await;

        let query = RequeryDedicatedAccountQuery {
            account_number: "1234567890".to_string(),
            provider_slug: Some("titan-paystack".to_string()),
            date: None,
        };
        let res = assert_ok!(client.virtual_accounts().requery(&query).await);
        assert!(res.message.starts_with("We are checking"));
    }

    #[tokio::test]
    async fn test_subaccount_update() {
        let (server, client) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/subaccount/ACCT_4hl4xenwpjy5wb"))
            .and(body_json(json!({"description": "Books and stationery"})))
            .respond_with(ok(json!({
                "id": 55,
                "subaccount_code": "ACCT_4hl4xenwpjy5wb",
                "business_name": "Sunshine Studios",
                "description": "Books and stationery",
                "percentage_charge": 18.9
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = UpdateSubaccountRequest {
            description: Some("Books and stationery".to_string()),
            ..UpdateSubaccountRequest::default()
        };
        let sub = assert_ok!(
            client
                .subaccounts()
                .update("ACCT_4hl4xenwpjy5wb", &request)
                .await
        );
        assert_eq!(sub.percentage_charge, Some(18.9));
    }

    #[tokio::test]
    async fn test_product_create() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/product"))
            .and(body_json(json!({
                "name": "Puff Puff",
                "description": "Crispy flour ball",
                "price": 5000,
                "currency": "NGN",
                "unlimited": true
            })))
            .respond_with(ok(json!({
                "id": 526,
                "name": "Puff Puff",
                "product_code": "PROD_ddot3upakgl3ejt",
                "price": 5000,
                "currency": "NGN",
                "files": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = CreateProductRequest {
            name: "Puff Puff".to_string(),
            description: "Crispy flour ball".to_string(),
            price: 5000,
            currency: "NGN".to_string(),
            unlimited: Some(true),
            quantity: None,
        };
        let product = assert_ok!(client.products().create(&request).await);
        assert_eq!(product.product_code, "PROD_ddot3upakgl3ejt");
    }

    #[tokio::test]
    async fn test_payment_page_create_and_add_products() {
        let (server, client) = setup().await;
        let page = json!({
            "id": 102859,
            "name": "Buttercup Brunch",
            "slug": "buttercup-brunch",
            "amount": 500000,
            "products": []
        });
        Mock::given(method("POST"))
            .and(path("/page"))
            .and(body_json(json!({
                "name": "Buttercup Brunch",
                "amount": 500000,
                "slug": "buttercup-brunch"
            })))
            .respond_with(ok(page.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/page/102859/product"))
            .and(body_json(json!({"product": [473, 292]})))
            .respond_with(ok(page))
            .expect(1)
            .mount(&server)
            .await;

        let request = CreatePageRequest::new("Buttercup Brunch")
            .with_amount(500000)
            .with_slug("buttercup-brunch");
        let created = assert_ok!(client.payment_pages().create(&request).await);
        assert_eq!(created.slug, "buttercup-brunch");

        let add = AddProductsRequest {
            product: vec![473, 292],
        };
        assert_ok!(client.payment_pages().add_products(created.id, &add).await);
    }

    #[tokio::test]
    async fn test_apple_pay_list_domains() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/apple-pay/domain"))
            .respond_with(ok(json!([{"domainName": "example.com"}])))
            .mount(&server)
            .await;

        let domains = assert_ok!(client.apple_pay().list_domains().await);
        assert_eq!(domains[0].domain_name, "example.com");
    }
}
