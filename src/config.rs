//! Fixed run configuration. There is no discovery; everything the run
//! needs is named here.

use bitcoin::{Amount, Network};

/// Connection descriptor for the Bitcoin Core node.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub network: Network,
    pub host: &'static str,
    pub port: u16,
    pub user: &'static str,
    pub password: &'static str,
    pub wallet: &'static str,
}

pub const NODE: NodeConfig = NodeConfig {
    network: Network::Regtest,
    host: "127.0.0.1",
    port: 18443,
    user: "alice",
    password: "password",
    wallet: "testwallet",
};

impl NodeConfig {
    /// Wallet-scoped RPC endpoint. Non-wallet calls route through it
    /// unchanged, so a single client serves the whole run.
    pub fn wallet_url(&self) -> String {
        format!("http://{}:{}/wallet/{}", self.host, self.port, self.wallet)
    }
}

/// Amount sent to the recipient output.
pub const PAYMENT_AMOUNT: Amount = Amount::from_int_btc(100);

/// Blocks mined to the fresh wallet address before sending. Coinbase
/// rewards need 100 confirmations to mature, hence well above that.
pub const FUNDING_BLOCKS: u64 = 200;

/// `fundrawtransaction` feeRate, in BTC/kvB.
pub const FEE_RATE: Amount = Amount::from_int_btc(21);

/// Fixed change output position passed to `fundrawtransaction`.
pub const CHANGE_POSITION: u32 = 1;

/// Message embedded in the OP_RETURN output.
pub const OP_RETURN_MESSAGE: &str = "We are all Satoshi!!";

pub const RECIPIENT: &str = "bcrt1qq2yshcmzdlznnpxx258xswqlmqcxjs4dssfxt2";

/// The broadcast txid is persisted here, overwritten each run.
pub const TXID_FILE: &str = "out.txt";
