//! Environment bootstrap: Disconnected -> Connected -> WalletReady ->
//! Funded. No retries; any failure aborts the run.

use bitcoin::{Address, Amount};
use log::info;

use crate::error::is_wallet_already_exists;
use crate::node::WalletNode;
use crate::Error;

/// Brings a funded wallet up on the node and returns the address the
/// coinbase rewards were mined to, plus the resulting balance.
pub fn bootstrap<N: WalletNode>(
    node: &N,
    wallet: &str,
    funding_blocks: u64,
) -> Result<(Address, Amount), Error> {
    let chain = node.chain_name()?;
    info!("connected to bitcoin node, chain: {chain}");

    ensure_wallet(node, wallet)?;
    info!("wallet ready: {wallet}");

    let address = node.new_address()?;
    info!("generated address: {address}");

    let mined = node.mine_to_address(funding_blocks, &address)?;
    info!("mined {mined} blocks");

    let balance = node.balance()?;
    info!("wallet balance: {balance}");

    Ok((address, balance))
}

/// Create-or-load. Creation failing because the wallet already exists is
/// the only recovered error; everything else propagates.
fn ensure_wallet<N: WalletNode>(node: &N, name: &str) -> Result<(), Error> {
    match node.create_wallet(name) {
        Ok(()) => Ok(()),
        Err(Error::Rpc(ref e)) if is_wallet_already_exists(e) => node.load_wallet(name),
        Err(e) => Err(e),
    }
}
