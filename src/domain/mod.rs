//! Domain modules organized as vertical slices, one per Paystack resource.
//!
//! Each sub-module contains:
//! - `mod.rs`: Response types (what Paystack returns in `data`)
//! - `wire.rs`: Request bodies and query strings, where the endpoints take any
//! - `client.rs`: Sub-client with one async method per endpoint

pub mod apple_pay;
pub mod bulk_charge;
pub mod charge;
pub mod customer;
pub mod dedicated_account;
pub mod direct_debit;
pub mod dispute;
pub mod integration;
pub mod miscellaneous;
pub mod page;
pub mod payment_request;
pub mod plan;
pub mod product;
pub mod refund;
pub mod settlement;
pub mod split;
pub mod subaccount;
pub mod subscription;
pub mod terminal;
pub mod transaction;
pub mod transfer;
pub mod transfer_control;
pub mod transfer_recipient;
pub mod verification;
pub mod virtual_terminal;
