//! Transactions sub-client.

use crate::client::PaystackClient;
use crate::domain::transaction::wire::{
    ChargeAuthorizationRequest, ExportTransactionsQuery, InitializeTransactionRequest,
    ListTransactionsQuery, PartialDebitRequest, TransactionTotalsQuery,
};
use crate::domain::transaction::{
    Transaction, TransactionExport, TransactionInitialization, TransactionTotals,
};
use crate::error::SdkResult;
use crate::http::{Envelope, Paginated};

/// Sub-client for transaction operations.
pub struct Transactions<'a> {
    pub(crate) client: &'a PaystackClient,
}

impl<'a> Transactions<'a> {
    /// Start a checkout and get the authorization URL to redirect to.
    pub async fn initialize(
        &self,
        request: &InitializeTransactionRequest,
    ) -> SdkResult<TransactionInitialization> {
        self.client
            .http
            .post(
                "/transaction/initialize",
                request,
                "Failed to initialize transaction",
            )
            .await
    }

    /// Verify a transaction by reference.
    ///
    /// Returns the whole envelope so callers can inspect `message` alongside
    /// the transaction.
    pub async fn verify(&self, reference: &str) -> SdkResult<Envelope<Transaction>> {
        let path = format!("/transaction/verify/{}", urlencoding::encode(reference));
        self.client
            .http
            .get_envelope(&path, "Failed to verify transaction")
            .await
    }

    pub async fn list(&self, query: &ListTransactionsQuery) -> SdkResult<Paginated<Transaction>> {
        self.client
            .http
            .list("/transaction", Some(query), "Failed to list transactions")
            .await
    }

    pub async fn fetch(&self, id: u64) -> SdkResult<Transaction> {
        let path = format!("/transaction/{}", id);
        self.client
            .http
            .get(&path, "Failed to fetch transaction")
            .await
    }

    pub async fn charge_authorization(
        &self,
        request: &ChargeAuthorizationRequest,
    ) -> SdkResult<Transaction> {
        self.client
            .http
            .post(
                "/transaction/charge_authorization",
                request,
                "Failed to charge authorization",
            )
            .await
    }

    pub async fn partial_debit(&self, request: &PartialDebitRequest) -> SdkResult<Transaction> {
        self.client
            .http
            .post(
                "/transaction/partial_debit",
                request,
                "Failed to perform partial debit",
            )
            .await
    }

    pub async fn totals(&self, query: &TransactionTotalsQuery) -> SdkResult<TransactionTotals> {
        self.client
            .http
            .get_with_query(
                "/transaction/totals",
                query,
                "Failed to fetch transaction totals",
            )
            .await
    }

    pub async fn export(&self, query: &ExportTransactionsQuery) -> SdkResult<TransactionExport> {
        self.client
            .http
            .get_with_query(
                "/transaction/export",
                query,
                "Failed to export transactions",
            )
            .await
    }
}
