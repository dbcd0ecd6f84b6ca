//! Canonical response schema and raw v2 response shapes
//!
//! The canonical side serializes to the v4 wire shape (camelCase fields,
//! `type`-tagged status union) regardless of which backing client produced
//! the data. Balances cross the canonical boundary as decimal strings to
//! avoid precision loss.

use serde::{Deserialize, Serialize};

/// Fully qualified masterchain block reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockId {
    pub workchain: i32,
    pub shard: String,
    pub seqno: u32,
    pub root_hash: String,
    pub file_hash: String,
}

/// Hashes of the init (zero state) block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitBlock {
    pub root_hash: String,
    pub file_hash: String,
}

/// Chain head in the canonical schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastBlock {
    pub last: BlockId,
    pub init: InitBlock,
    pub state_root_hash: String,
    /// Unix timestamp in whole seconds
    pub now: u64,
}

/// Contract state descriptor
///
/// `Active` code/data are standard-base64 cell payloads when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccountStatus {
    Active {
        code: Option<String>,
        data: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Frozen { state_hash: String },
    Uninit,
}

/// Pointer to the account's most recent transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastTransaction {
    /// Logical time, as the wire APIs report it
    pub lt: String,
    pub hash: String,
}

/// Storage footprint of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUsed {
    pub cells: u64,
    pub bits: u64,
    pub public_cells: u64,
}

/// Storage payment statistics of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStat {
    pub due_payment: String,
    pub last_paid: u32,
    pub used: StorageUsed,
}

/// Account state in the canonical schema
///
/// `last` and `storage_stat` are `None` exactly when the status is
/// [`AccountStatus::Uninit`]; active and frozen accounts always carry both,
/// placeholder-filled when the source cannot supply real values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Balance in nanotons, decimal string
    pub balance: String,
    pub state: AccountStatus,
    pub last: Option<LastTransaction>,
    pub storage_stat: Option<StorageStat>,
}

/// Account state paired with the block it was read at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAtBlock {
    pub account: Account,
    pub block: BlockId,
}

/// Masterchain summary returned by the v2 API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterchainInfo {
    pub workchain: i32,
    pub latest_seqno: u32,
    pub shard: String,
}

/// Block reference as the v2 API reports it (no hash data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyBlockId {
    pub workchain: i32,
    pub seqno: u32,
    pub shard: String,
}

/// Last-transaction pointer as the v2 API reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyTransactionId {
    pub lt: String,
    pub hash: String,
}

/// Raw contract state from the v2 API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractState {
    /// Raw status tag; anything other than "active"/"frozen" is uninit
    pub state: String,
    pub code: Option<Vec<u8>>,
    pub data: Option<Vec<u8>>,
    /// Balance in nanotons
    pub balance: u128,
    pub block_id: LegacyBlockId,
    pub last_transaction: Option<LegacyTransactionId>,
}
