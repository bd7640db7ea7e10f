//! The capability surface we consume from Bitcoin Core, plus its
//! `bitcoincore-rpc` implementation. The trait exists so the selection
//! and assembly logic can run against a deterministic in-memory fake.

use bitcoin::{Address, Amount, Network, Txid};
use bitcoincore_rpc::{json, Auth, Client, RpcApi};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::NodeConfig;
use crate::{EncodeHex, Error};

/// A spendable output as reported by `listunspent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unspent {
    pub txid: Txid,
    pub vout: u32,
    pub amount: Amount,
}

/// Input reference for `createrawtransaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxInput {
    pub txid: Txid,
    pub vout: u32,
}

/// Result of `signrawtransactionwithwallet`.
#[derive(Debug, Clone)]
pub struct SignedTx {
    pub hex: String,
    pub complete: bool,
}

/// `createrawtransaction` output object: address -> BTC amount, plus the
/// reserved `"data"` key carrying an OP_RETURN payload.
pub type OutputMap = Map<String, Value>;

/// Node operations this tool consumes, one request in flight at a time.
/// Raw transactions stay opaque hex from creation through broadcast.
pub trait WalletNode {
    fn chain_name(&self) -> Result<String, Error>;
    fn create_wallet(&self, name: &str) -> Result<(), Error>;
    fn load_wallet(&self, name: &str) -> Result<(), Error>;
    fn new_address(&self) -> Result<Address, Error>;
    /// Mines `blocks` blocks paying `address`; returns how many were mined.
    fn mine_to_address(&self, blocks: u64, address: &Address) -> Result<usize, Error>;
    fn balance(&self) -> Result<Amount, Error>;
    fn list_unspent(&self) -> Result<Vec<Unspent>, Error>;
    fn create_raw_transaction(
        &self,
        inputs: &[TxInput],
        outputs: &OutputMap,
    ) -> Result<String, Error>;
    fn fund_raw_transaction(
        &self,
        raw_hex: &str,
        fee_rate: Amount,
        change_position: u32,
    ) -> Result<String, Error>;
    fn sign_raw_transaction(&self, raw_hex: &str) -> Result<SignedTx, Error>;
    fn broadcast_raw_transaction(&self, raw_hex: &str) -> Result<Txid, Error>;
    fn decode_raw_transaction(&self, raw_hex: &str) -> Result<Value, Error>;
}

/// `WalletNode` backed by a Bitcoin Core JSON-RPC client.
pub struct RpcNode {
    client: Client,
    network: Network,
}

impl RpcNode {
    pub fn connect(conf: &NodeConfig) -> Result<Self, Error> {
        let client = Client::new(
            &conf.wallet_url(),
            Auth::UserPass(conf.user.to_string(), conf.password.to_string()),
        )?;
        Ok(Self {
            client,
            network: conf.network,
        })
    }
}

impl WalletNode for RpcNode {
    fn chain_name(&self) -> Result<String, Error> {
        Ok(self.client.get_blockchain_info()?.chain.to_string())
    }

    fn create_wallet(&self, name: &str) -> Result<(), Error> {
        self.client.create_wallet(name, None, None, None, None)?;
        Ok(())
    }

    fn load_wallet(&self, name: &str) -> Result<(), Error> {
        self.client.load_wallet(name)?;
        Ok(())
    }

    fn new_address(&self) -> Result<Address, Error> {
        Ok(self
            .client
            .get_new_address(None, None)?
            .require_network(self.network)?)
    }

    fn mine_to_address(&self, blocks: u64, address: &Address) -> Result<usize, Error> {
        Ok(self.client.generate_to_address(blocks, address)?.len())
    }

    fn balance(&self) -> Result<Amount, Error> {
        Ok(self.client.get_balance(None, None)?)
    }

    fn list_unspent(&self) -> Result<Vec<Unspent>, Error> {
        let entries = self.client.list_unspent(None, None, None, None, None)?;
        Ok(entries
            .into_iter()
            .map(|e| Unspent {
                txid: e.txid,
                vout: e.vout,
                amount: e.amount,
            })
            .collect())
    }

    fn create_raw_transaction(
        &self,
        inputs: &[TxInput],
        outputs: &OutputMap,
    ) -> Result<String, Error> {
        // The typed helper only takes address->Amount outputs and can't
        // express the "data" key, so this goes through the generic call.
        let args = [
            serde_json::to_value(inputs)?,
            Value::Object(outputs.clone()),
        ];
        Ok(self.client.call("createrawtransaction", &args)?)
    }

    fn fund_raw_transaction(
        &self,
        raw_hex: &str,
        fee_rate: Amount,
        change_position: u32,
    ) -> Result<String, Error> {
        let options = json::FundRawTransactionOptions {
            fee_rate: Some(fee_rate),
            change_position: Some(change_position),
            ..Default::default()
        };
        let funded = self
            .client
            .fund_raw_transaction(raw_hex, Some(&options), None)?;
        Ok(funded.hex.hex())
    }

    fn sign_raw_transaction(&self, raw_hex: &str) -> Result<SignedTx, Error> {
        let signed = self
            .client
            .sign_raw_transaction_with_wallet(raw_hex, None, None)?;
        Ok(SignedTx {
            hex: signed.hex.hex(),
            complete: signed.complete,
        })
    }

    fn broadcast_raw_transaction(&self, raw_hex: &str) -> Result<Txid, Error> {
        Ok(self.client.send_raw_transaction(raw_hex)?)
    }

    fn decode_raw_transaction(&self, raw_hex: &str) -> Result<Value, Error> {
        // Only logged as a post-broadcast sanity check; kept schemaless.
        let args = [Value::String(raw_hex.to_owned())];
        Ok(self.client.call("decoderawtransaction", &args)?)
    }
}
