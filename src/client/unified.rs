//! The unified adapter over the two backing-client generations

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    client::{convert, BlockIndexedApi, SingleStateApi},
    types::{AccountAtBlock, LastBlock},
    ApiGeneration, Result,
};

/// What the bound backing client can serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Whether account reads can target a specific masterchain block.
    /// Single-state (v2) backings always answer against current state.
    pub historical_reads: bool,
}

/// Unified client over exactly one backing handle.
///
/// The two API generations are mutually exclusive by construction and the
/// binding is fixed for the lifetime of the client. The client holds no
/// other state, so concurrent calls on a shared instance are safe.
#[derive(Clone)]
pub enum UnifiedClient {
    /// v4 backing; responses are already canonical and pass through untouched
    BlockIndexed(Arc<dyn BlockIndexedApi>),
    /// v2 backing; responses are converted into the canonical schema
    SingleState(Arc<dyn SingleStateApi>),
}

impl UnifiedClient {
    /// Create a client over a block-indexed (v4) backing
    pub fn block_indexed(client: Arc<dyn BlockIndexedApi>) -> Self {
        Self::BlockIndexed(client)
    }

    /// Create a client over a single-state (v2) backing
    pub fn single_state(client: Arc<dyn SingleStateApi>) -> Self {
        Self::SingleState(client)
    }

    /// API generation of the bound backing client
    pub fn generation(&self) -> ApiGeneration {
        match self {
            Self::BlockIndexed(_) => ApiGeneration::V4,
            Self::SingleState(_) => ApiGeneration::V2,
        }
    }

    /// What the bound backing client can serve
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            historical_reads: self.generation().supports_historical_reads(),
        }
    }

    /// Fetch the current chain head.
    ///
    /// Through a v2 backing the hash fields of the result are
    /// [`convert::EMPTY_HASH`] placeholders and `now` is stamped locally;
    /// workchain, seqno and shard come from the masterchain summary.
    pub async fn last_block(&self) -> Result<LastBlock> {
        match self {
            Self::BlockIndexed(client) => client.last_block().await,
            Self::SingleState(client) => {
                let info = client.masterchain_info().await?;
                debug!(
                    seqno = info.latest_seqno,
                    workchain = info.workchain,
                    "synthesized chain head from masterchain summary"
                );
                Ok(convert::last_block(&info))
            }
        }
    }

    /// Fetch the state of `address` at masterchain block `seqno`.
    ///
    /// A v2 backing cannot address a specific block: it answers with current
    /// state and `seqno` is accepted only for interface symmetry. Callers
    /// that need block-accurate reads should check
    /// [`Capabilities::historical_reads`] first.
    pub async fn account(&self, seqno: u32, address: &str) -> Result<AccountAtBlock> {
        match self {
            Self::BlockIndexed(client) => client.account(seqno, address).await,
            Self::SingleState(client) => {
                debug!(
                    seqno,
                    address,
                    "single-state backing serves current state only, seqno not used"
                );
                let state = client.contract_state(address).await?;
                Ok(convert::account_at_block(&state))
            }
        }
    }
}

impl std::fmt::Debug for UnifiedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnifiedClient")
            .field("generation", &self.generation())
            .finish()
    }
}
