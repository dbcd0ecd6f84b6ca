//! Conversions from raw v2 responses into the canonical schema
//!
//! The v2 API cannot supply several fields the canonical schema requires:
//! block hashes, frozen state hashes, and storage statistics. Those gaps are
//! filled with the named placeholder values below, keeping synthesized
//! filler distinguishable from real data.

use chrono::Utc;

use crate::types::{
    Account, AccountAtBlock, AccountStatus, BlockId, ContractState, InitBlock, LastBlock,
    LastTransaction, LegacyBlockId, MasterchainInfo, StorageStat, StorageUsed,
};

/// Placeholder for hashes the v2 source does not expose
pub const EMPTY_HASH: &str = "";

/// Placeholder due payment for accounts read through the v2 API
pub const NO_DUE_PAYMENT: &str = "";

/// Placeholder last-paid timestamp (unix seconds)
pub const NEVER_PAID: u32 = 0;

/// Synthesize a canonical chain head from a v2 masterchain summary.
///
/// Hash fields are [`EMPTY_HASH`]; `now` is the local wall clock rounded
/// down to whole seconds.
pub fn last_block(info: &MasterchainInfo) -> LastBlock {
    LastBlock {
        last: BlockId {
            workchain: info.workchain,
            shard: info.shard.clone(),
            seqno: info.latest_seqno,
            root_hash: EMPTY_HASH.to_string(),
            file_hash: EMPTY_HASH.to_string(),
        },
        init: InitBlock {
            root_hash: EMPTY_HASH.to_string(),
            file_hash: EMPTY_HASH.to_string(),
        },
        state_root_hash: EMPTY_HASH.to_string(),
        now: Utc::now().timestamp() as u64,
    }
}

/// Convert the raw v2 status tag into the canonical descriptor.
///
/// Any tag other than `"active"`/`"frozen"` maps to [`AccountStatus::Uninit`].
/// The v2 source exposes no frozen state hash, so frozen accounts carry the
/// [`EMPTY_HASH`] placeholder.
pub fn account_status(state: &ContractState) -> AccountStatus {
    match state.state.as_str() {
        "active" => AccountStatus::Active {
            code: state.code.as_deref().map(base64::encode),
            data: state.data.as_deref().map(base64::encode),
        },
        "frozen" => AccountStatus::Frozen {
            state_hash: EMPTY_HASH.to_string(),
        },
        _ => AccountStatus::Uninit,
    }
}

/// Canonical block reference from a v2 block id, hash fields empty
pub fn block_id(id: &LegacyBlockId) -> BlockId {
    BlockId {
        workchain: id.workchain,
        shard: id.shard.clone(),
        seqno: id.seqno,
        root_hash: EMPTY_HASH.to_string(),
        file_hash: EMPTY_HASH.to_string(),
    }
}

/// Placeholder storage statistics; the v2 API exposes no usage data
pub fn storage_stat_placeholder() -> StorageStat {
    StorageStat {
        due_payment: NO_DUE_PAYMENT.to_string(),
        last_paid: NEVER_PAID,
        used: StorageUsed {
            cells: 0,
            bits: 0,
            public_cells: 0,
        },
    }
}

/// Assemble a canonical account response from a raw v2 contract state.
///
/// Uninit accounts carry no last-transaction pointer and no storage
/// statistics, whatever the raw state reports; active and frozen accounts
/// always carry both.
pub fn account_at_block(state: &ContractState) -> AccountAtBlock {
    let status = account_status(state);
    let block = block_id(&state.block_id);

    let last = state.last_transaction.as_ref().map(|tx| LastTransaction {
        lt: tx.lt.clone(),
        hash: tx.hash.clone(),
    });

    let populated = !matches!(status, AccountStatus::Uninit);
    let (last, storage_stat) = if populated {
        (last, Some(storage_stat_placeholder()))
    } else {
        (None, None)
    };

    AccountAtBlock {
        account: Account {
            balance: state.balance.to_string(),
            state: status,
            last,
            storage_stat,
        },
        block,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LegacyTransactionId;

    fn raw_state(tag: &str) -> ContractState {
        ContractState {
            state: tag.to_string(),
            code: None,
            data: None,
            balance: 1000,
            block_id: LegacyBlockId {
                workchain: 0,
                seqno: 5,
                shard: "0".to_string(),
            },
            last_transaction: None,
        }
    }

    #[test]
    fn active_state_encodes_code_and_data_as_base64() {
        let mut state = raw_state("active");
        state.code = Some(vec![0x01]);

        let status = account_status(&state);
        assert_eq!(
            status,
            AccountStatus::Active {
                code: Some("AQ==".to_string()),
                data: None,
            }
        );

        state.data = Some(vec![0x02]);
        assert_eq!(
            account_status(&state),
            AccountStatus::Active {
                code: Some("AQ==".to_string()),
                data: Some("Ag==".to_string()),
            }
        );
    }

    #[test]
    fn frozen_state_carries_placeholder_hash() {
        let status = account_status(&raw_state("frozen"));
        assert_eq!(
            status,
            AccountStatus::Frozen {
                state_hash: EMPTY_HASH.to_string(),
            }
        );
    }

    #[test]
    fn unknown_tags_map_to_uninit() {
        assert_eq!(account_status(&raw_state("uninitialized")), AccountStatus::Uninit);
        assert_eq!(account_status(&raw_state("uninit")), AccountStatus::Uninit);
        assert_eq!(account_status(&raw_state("nonexist")), AccountStatus::Uninit);
    }

    #[test]
    fn active_account_assembles_with_placeholder_storage() {
        let mut state = raw_state("active");
        state.code = Some(vec![0x01]);

        let result = account_at_block(&state);
        assert_eq!(result.account.balance, "1000");
        assert_eq!(result.account.last, None);
        assert_eq!(result.account.storage_stat, Some(storage_stat_placeholder()));
        assert_eq!(result.block.workchain, 0);
        assert_eq!(result.block.seqno, 5);
        assert_eq!(result.block.shard, "0");
        assert_eq!(result.block.root_hash, EMPTY_HASH);
        assert_eq!(result.block.file_hash, EMPTY_HASH);
    }

    #[test]
    fn uninit_account_drops_transaction_and_storage_data() {
        let mut state = raw_state("uninit");
        state.balance = 42;
        state.last_transaction = Some(LegacyTransactionId {
            lt: "30000001".to_string(),
            hash: "dGVzdA==".to_string(),
        });

        let result = account_at_block(&state);
        assert_eq!(result.account.state, AccountStatus::Uninit);
        assert_eq!(result.account.last, None);
        assert_eq!(result.account.storage_stat, None);
        assert_eq!(result.account.balance, "42");
    }

    #[test]
    fn frozen_account_keeps_reported_transaction() {
        let mut state = raw_state("frozen");
        state.last_transaction = Some(LegacyTransactionId {
            lt: "30000001".to_string(),
            hash: "dGVzdA==".to_string(),
        });

        let result = account_at_block(&state);
        assert_eq!(
            result.account.last,
            Some(LastTransaction {
                lt: "30000001".to_string(),
                hash: "dGVzdA==".to_string(),
            })
        );
        assert!(result.account.storage_stat.is_some());
    }

    #[test]
    fn synthesized_chain_head_has_empty_hashes_and_fresh_timestamp() {
        let info = MasterchainInfo {
            workchain: -1,
            latest_seqno: 1234567,
            shard: "-9223372036854775808".to_string(),
        };

        let before = Utc::now().timestamp() as u64;
        let head = last_block(&info);
        let after = Utc::now().timestamp() as u64;

        assert_eq!(head.last.workchain, -1);
        assert_eq!(head.last.seqno, 1234567);
        assert_eq!(head.last.shard, "-9223372036854775808");
        assert_eq!(head.last.root_hash, EMPTY_HASH);
        assert_eq!(head.last.file_hash, EMPTY_HASH);
        assert_eq!(head.init.root_hash, EMPTY_HASH);
        assert_eq!(head.init.file_hash, EMPTY_HASH);
        assert_eq!(head.state_root_hash, EMPTY_HASH);
        assert!(head.now >= before && head.now <= after);
    }
}
