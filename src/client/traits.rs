//! Contracts implemented by concrete backing clients
//!
//! Transport, address encoding and consensus verification live behind these
//! traits; the adapter consumes them as-is and never inspects how a response
//! was produced. Addresses are passed in whatever textual form the backing
//! client accepts.

use async_trait::async_trait;

use crate::{
    types::{AccountAtBlock, ContractState, LastBlock, MasterchainInfo},
    Result,
};

/// Block-indexed (v4) client contract
///
/// Responses already match the canonical schema and pass through the adapter
/// untouched.
#[async_trait]
pub trait BlockIndexedApi: Send + Sync {
    /// Fetch the current chain head
    async fn last_block(&self) -> Result<LastBlock>;

    /// Fetch the state of `address` at masterchain block `seqno`
    async fn account(&self, seqno: u32, address: &str) -> Result<AccountAtBlock>;
}

/// Single-state (v2) client contract
///
/// Answers only against current chain state; there is no way to address a
/// historical block.
#[async_trait]
pub trait SingleStateApi: Send + Sync {
    /// Fetch the masterchain summary
    async fn masterchain_info(&self) -> Result<MasterchainInfo>;

    /// Fetch the current contract state of `address`
    async fn contract_state(&self, address: &str) -> Result<ContractState>;
}
