use bitcoin::Amount;
use bitcoincore_rpc::jsonrpc;
use thiserror::Error;

/// Bitcoin Core's `RPC_WALLET_ERROR`; `createwallet` on an existing
/// wallet name reports it.
const RPC_WALLET_ERROR: i32 = -4;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no unspent outputs available")]
    NoUnspent,
    #[error("insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: Amount, required: Amount },
    #[error("transaction signing incomplete")]
    SigningIncomplete,
    #[error("address rejected: {0}")]
    Address(#[from] bitcoin::address::ParseError),
    #[error(transparent)]
    Rpc(#[from] bitcoincore_rpc::Error),
    #[error("request encoding: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether a `createwallet` failure means the wallet is already on disk.
///
/// Core lumps several wallet failures under code -4, so the message
/// fragment is still needed to disambiguate; the code check keeps
/// unrelated errors (connectivity, parse) from matching.
pub fn is_wallet_already_exists(err: &bitcoincore_rpc::Error) -> bool {
    match err {
        bitcoincore_rpc::Error::JsonRpc(jsonrpc::Error::Rpc(e)) => {
            e.code == RPC_WALLET_ERROR && e.message.contains("already exists")
        }
        _ => false,
    }
}
