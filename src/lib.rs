//! # Paystack SDK
//!
//! A typed async Rust client for the Paystack REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared query types, amount/reference helpers, domain models
//! 2. **HTTP API**: `PaystackHttp`, one configured `reqwest` client plus the
//!    envelope unwrapping every call goes through
//! 3. **High-Level Client**: `PaystackClient` with one sub-client per
//!    resource family
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paystack_sdk::prelude::*;
//!
//! let client = PaystackClient::new("sk_test_xxx")?;
//!
//! let init = client
//!     .transactions()
//!     .initialize(&InitializeTransactionRequest::new("customer@email.com", 500_000))
//!     .await?;
//! println!("{}", init.authorization_url);
//!
//! let plans = client.plans().list(&ListPlansQuery::default()).await?;
//! for plan in plans {
//!     println!("{} {}", plan.plan_code, plan.name);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Pagination queries and amount/reference helpers.
pub mod shared;

/// Domain modules (vertical slices): response types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// API URL and transport constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP transport and the response envelope.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `PaystackClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared queries + helpers
    pub use crate::shared::{
        from_subunit, generate_reference, to_subunit, CursorPagination, Pagination,
    };

    // Envelope types
    pub use crate::http::{Acknowledgement, Envelope, Meta, Paginated};

    // Errors
    pub use crate::error::{ApiError, SdkError, SdkResult};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

    // Client + sub-clients
    pub use crate::client::{
        ApplePayClient, BulkChargesClient, ChargesClient, CustomersClient,
        DedicatedAccountsClient, DirectDebitClient, DisputesClient, IntegrationClient,
        MiscellaneousClient, PaymentPagesClient, PaymentRequestsClient, PaystackClient,
        PaystackClientBuilder, PlansClient, ProductsClient, RefundsClient, SettlementsClient,
        SplitsClient, SubaccountsClient, SubscriptionsClient, TerminalsClient,
        TransactionsClient, TransferControlClient, TransferRecipientsClient, TransfersClient,
        VerificationClient, VirtualTerminalsClient,
    };

    // Domain types: customers and payments
    pub use crate::domain::customer::{
        Authorization, CreateCustomerRequest, Customer, CustomerDetails, RiskAction,
        UpdateCustomerRequest,
    };
    pub use crate::domain::transaction::{
        Channel, InitializeTransactionRequest, ListTransactionsQuery, Transaction,
        TransactionInitialization, TransactionStatus,
    };
    pub use crate::domain::charge::{Charge, ChargeStatus, CreateChargeRequest};
    pub use crate::domain::refund::{CreateRefundRequest, Refund};
    pub use crate::domain::dispute::{Dispute, DisputeStatus};

    // Domain types: recurring billing
    pub use crate::domain::plan::{CreatePlanRequest, Interval, ListPlansQuery, Plan};
    pub use crate::domain::subscription::{Subscription, SubscriptionStatus};

    // Domain types: payouts
    pub use crate::domain::settlement::Settlement;
    pub use crate::domain::transfer::{InitiateTransferRequest, Transfer, TransferStatus};
    pub use crate::domain::transfer_control::Balance;
    pub use crate::domain::transfer_recipient::{
        CreateTransferRecipientRequest, RecipientType, TransferRecipient,
    };

    // Domain types: reference data
    pub use crate::domain::miscellaneous::{Bank, Country, ListBanksQuery};
}
