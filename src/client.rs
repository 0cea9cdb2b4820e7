//! High-level client: `PaystackClient` with nested sub-client accessors.
//!
//! Each resource family has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::apple_pay::client::ApplePay;
use crate::domain::bulk_charge::client::BulkCharges;
use crate::domain::charge::client::Charges;
use crate::domain::customer::client::Customers;
use crate::domain::dedicated_account::client::DedicatedAccounts;
use crate::domain::direct_debit::client::DirectDebit;
use crate::domain::dispute::client::Disputes;
use crate::domain::integration::client::Integration;
use crate::domain::miscellaneous::client::Miscellaneous;
use crate::domain::page::client::PaymentPages;
use crate::domain::payment_request::client::PaymentRequests;
use crate::domain::plan::client::Plans;
use crate::domain::product::client::Products;
use crate::domain::refund::client::Refunds;
use crate::domain::settlement::client::Settlements;
use crate::domain::split::client::Splits;
use crate::domain::subaccount::client::Subaccounts;
use crate::domain::subscription::client::Subscriptions;
use crate::domain::terminal::client::Terminals;
use crate::domain::transaction::client::Transactions;
use crate::domain::transfer::client::Transfers;
use crate::domain::transfer_control::client::TransferControl;
use crate::domain::transfer_recipient::client::TransferRecipients;
use crate::domain::verification::client::Verification;
use crate::domain::virtual_terminal::client::VirtualTerminals;
use crate::error::SdkResult;
use crate::http::PaystackHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::apple_pay::client::ApplePay as ApplePayClient;
pub use crate::domain::bulk_charge::client::BulkCharges as BulkChargesClient;
pub use crate::domain::charge::client::Charges as ChargesClient;
pub use crate::domain::customer::client::Customers as CustomersClient;
pub use crate::domain::dedicated_account::client::DedicatedAccounts as DedicatedAccountsClient;
pub use crate::domain::direct_debit::client::DirectDebit as DirectDebitClient;
pub use crate::domain::dispute::client::Disputes as DisputesClient;
pub use crate::domain::integration::client::Integration as IntegrationClient;
pub use crate::domain::miscellaneous::client::Miscellaneous as MiscellaneousClient;
pub use crate::domain::page::client::PaymentPages as PaymentPagesClient;
pub use crate::domain::payment_request::client::PaymentRequests as PaymentRequestsClient;
pub use crate::domain::plan::client::Plans as PlansClient;
pub use crate::domain::product::client::Products as ProductsClient;
pub use crate::domain::refund::client::Refunds as RefundsClient;
pub use crate::domain::settlement::client::Settlements as SettlementsClient;
pub use crate::domain::split::client::Splits as SplitsClient;
pub use crate::domain::subaccount::client::Subaccounts as SubaccountsClient;
pub use crate::domain::subscription::client::Subscriptions as SubscriptionsClient;
pub use crate::domain::terminal::client::Terminals as TerminalsClient;
pub use crate::domain::transaction::client::Transactions as TransactionsClient;
pub use crate::domain::transfer::client::Transfers as TransfersClient;
pub use crate::domain::transfer_control::client::TransferControl as TransferControlClient;
pub use crate::domain::transfer_recipient::client::TransferRecipients as TransferRecipientsClient;
pub use crate::domain::verification::client::Verification as VerificationClient;
pub use crate::domain::virtual_terminal::client::VirtualTerminals as VirtualTerminalsClient;

/// The primary entry point for the Paystack SDK.
///
/// Provides nested sub-client accessors for each resource family:
/// `client.customers()`, `client.transactions()`, etc. Sub-clients borrow the
/// client and hold no state of their own.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PaystackClient {
    pub(crate) http: PaystackHttp,
}

impl PaystackClient {
    /// Client against the live API with the default 30 s timeout.
    pub fn new(secret_key: &str) -> SdkResult<Self> {
        Self::builder(secret_key).build()
    }

    pub fn builder(secret_key: &str) -> PaystackClientBuilder {
        PaystackClientBuilder::new(secret_key)
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn customers(&self) -> Customers<'_> {
        Customers { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    pub fn splits(&self) -> Splits<'_> {
        Splits { client: self }
    }

    pub fn terminals(&self) -> Terminals<'_> {
        Terminals { client: self }
    }

    pub fn virtual_terminals(&self) -> VirtualTerminals<'_> {
        VirtualTerminals { client: self }
    }

    pub fn direct_debit(&self) -> DirectDebit<'_> {
        DirectDebit { client: self }
    }

    /// Dedicated virtual accounts.
    pub fn virtual_accounts(&self) -> DedicatedAccounts<'_> {
        DedicatedAccounts { client: self }
    }

    pub fn apple_pay(&self) -> ApplePay<'_> {
        ApplePay { client: self }
    }

    pub fn subaccounts(&self) -> Subaccounts<'_> {
        Subaccounts { client: self }
    }

    pub fn plans(&self) -> Plans<'_> {
        Plans { client: self }
    }

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions { client: self }
    }

    pub fn products(&self) -> Products<'_> {
        Products { client: self }
    }

    pub fn payment_pages(&self) -> PaymentPages<'_> {
        PaymentPages { client: self }
    }

    pub fn payment_requests(&self) -> PaymentRequests<'_> {
        PaymentRequests { client: self }
    }

    pub fn settlements(&self) -> Settlements<'_> {
        Settlements { client: self }
    }

    pub fn transfer_recipients(&self) -> TransferRecipients<'_> {
        TransferRecipients { client: self }
    }

    pub fn transfers(&self) -> Transfers<'_> {
        Transfers { client: self }
    }

    /// Balance, ledger and transfer OTP settings.
    pub fn transfer_control(&self) -> TransferControl<'_> {
        TransferControl { client: self }
    }

    pub fn bulk_charges(&self) -> BulkCharges<'_> {
        BulkCharges { client: self }
    }

    pub fn integration(&self) -> Integration<'_> {
        Integration { client: self }
    }

    pub fn charges(&self) -> Charges<'_> {
        Charges { client: self }
    }

    pub fn disputes(&self) -> Disputes<'_> {
        Disputes { client: self }
    }

    pub fn refunds(&self) -> Refunds<'_> {
        Refunds { client: self }
    }

    pub fn verification(&self) -> Verification<'_> {
        Verification { client: self }
    }

    pub fn miscellaneous(&self) -> Miscellaneous<'_> {
        Miscellaneous { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PaystackClientBuilder {
    secret_key: String,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for PaystackClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaystackClientBuilder")
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PaystackClientBuilder {
    pub fn new(secret_key: &str) -> Self {
        Self {
            secret_key: secret_key.to_string(),
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> SdkResult<PaystackClient> {
        Ok(PaystackClient {
            http: PaystackHttp::new(&self.secret_key, &self.base_url, self.timeout)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_live_base_url() {
        let client = PaystackClient::new("sk_test_123").unwrap();
        assert_eq!(client.base_url(), "https://api.paystack.co");
    }

    #[test]
    fn test_new_rejects_empty_key() {
        let err = PaystackClient::new("").unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_builder_overrides() {
        let client = PaystackClient::builder("sk_test_123")
            .base_url("http://127.0.0.1:8080")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_builder_debug_redacts_key() {
        let dbg = format!("{:?}", PaystackClient::builder("sk_live_secret"));
        assert!(!dbg.contains("sk_live_secret"));
    }

    #[test]
    fn test_client_is_send_sync_clone() {
        fn assert_traits<T: Send + Sync + Clone>() {}
        assert_traits::<PaystackClient>();
    }

    #[test]
    fn test_every_accessor_shares_one_client() {
        let client = PaystackClient::new("sk_test_123").unwrap();
        let ptr = &client as *const PaystackClient;
        assert_eq!(client.customers().client as *const _, ptr);
        assert_eq!(client.transactions().client as *const _, ptr);
        assert_eq!(client.splits().client as *const _, ptr);
        assert_eq!(client.terminals().client as *const _, ptr);
        assert_eq!(client.virtual_terminals().client as *const _, ptr);
        assert_eq!(client.direct_debit().client as *const _, ptr);
        assert_eq!(client.virtual_accounts().client as *const _, ptr);
        assert_eq!(client.apple_pay().client as *const _, ptr);
        assert_eq!(client.subaccounts().client as *const _, ptr);
        assert_eq!(client.plans().client as *const _, ptr);
        assert_eq!(client.subscriptions().client as *const _, ptr);
        assert_eq!(client.products().client as *const _, ptr);
        assert_eq!(client.payment_pages().client as *const _, ptr);
        assert_eq!(client.payment_requests().client as *const _, ptr);
        assert_eq!(client.settlements().client as *const _, ptr);
        assert_eq!(client.transfer_recipients().client as *const _, ptr);
        assert_eq!(client.transfers().client as *const _, ptr);
        assert_eq!(client.transfer_control().client as *const _, ptr);
        assert_eq!(client.bulk_charges().client as *const _, ptr);
        assert_eq!(client.integration().client as *const _, ptr);
        assert_eq!(client.charges().client as *const _, ptr);
        assert_eq!(client.disputes().client as *const _, ptr);
        assert_eq!(client.refunds().client as *const _, ptr);
        assert_eq!(client.verification().client as *const _, ptr);
        assert_eq!(client.miscellaneous().client as *const _, ptr);
    }
}
