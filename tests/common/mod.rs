//! Deterministic in-memory stand-in for the Bitcoin Core node. Records
//! every call so tests can assert what was (and was not) invoked.
#![allow(dead_code)]

use std::cell::RefCell;

use bitcoin::hashes::Hash;
use bitcoin::{Address, Amount, Txid};
use bitcoincore_rpc::jsonrpc;
use op_return_send::node::{OutputMap, SignedTx, TxInput, Unspent, WalletNode};
use op_return_send::Error;
use serde_json::json;

pub fn txid(tag: u8) -> Txid {
    Txid::from_byte_array([tag; 32])
}

pub fn utxo(tag: u8, vout: u32, btc: u64) -> Unspent {
    Unspent {
        txid: txid(tag),
        vout,
        amount: Amount::from_int_btc(btc),
    }
}

pub fn regtest_address() -> Address {
    "bcrt1qq2yshcmzdlznnpxx258xswqlmqcxjs4dssfxt2"
        .parse::<Address<_>>()
        .unwrap()
        .assume_checked()
}

pub fn rpc_error(code: i32, message: &str) -> Error {
    Error::Rpc(bitcoincore_rpc::Error::JsonRpc(jsonrpc::Error::Rpc(
        jsonrpc::error::RpcError {
            code,
            message: message.into(),
            data: None,
        },
    )))
}

pub struct MockNode {
    pub unspent: Vec<Unspent>,
    pub balance: Amount,
    pub signing_complete: bool,
    /// Returned (once) by the next `create_wallet` call.
    pub create_wallet_error: RefCell<Option<Error>>,
    pub calls: RefCell<Vec<String>>,
    pub inputs_seen: RefCell<Option<Vec<TxInput>>>,
    pub outputs_seen: RefCell<Option<OutputMap>>,
}

impl MockNode {
    pub fn new(unspent: Vec<Unspent>) -> Self {
        Self {
            unspent,
            balance: Amount::ZERO,
            signing_complete: true,
            create_wallet_error: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
            inputs_seen: RefCell::new(None),
            outputs_seen: RefCell::new(None),
        }
    }

    pub fn with_create_wallet_error(self, err: Error) -> Self {
        *self.create_wallet_error.borrow_mut() = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == name)
    }

    fn record(&self, name: &str) {
        self.calls.borrow_mut().push(name.to_owned());
    }
}

impl WalletNode for MockNode {
    fn chain_name(&self) -> Result<String, Error> {
        self.record("chain_name");
        Ok("regtest".to_owned())
    }

    fn create_wallet(&self, _name: &str) -> Result<(), Error> {
        self.record("create_wallet");
        match self.create_wallet_error.borrow_mut().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn load_wallet(&self, _name: &str) -> Result<(), Error> {
        self.record("load_wallet");
        Ok(())
    }

    fn new_address(&self) -> Result<Address, Error> {
        self.record("new_address");
        Ok(regtest_address())
    }

    fn mine_to_address(&self, blocks: u64, _address: &Address) -> Result<usize, Error> {
        self.record("mine_to_address");
        Ok(blocks as usize)
    }

    fn balance(&self) -> Result<Amount, Error> {
        self.record("balance");
        Ok(self.balance)
    }

    fn list_unspent(&self) -> Result<Vec<Unspent>, Error> {
        self.record("list_unspent");
        Ok(self.unspent.clone())
    }

    fn create_raw_transaction(
        &self,
        inputs: &[TxInput],
        outputs: &OutputMap,
    ) -> Result<String, Error> {
        self.record("create_raw_transaction");
        *self.inputs_seen.borrow_mut() = Some(inputs.to_vec());
        *self.outputs_seen.borrow_mut() = Some(outputs.clone());
        Ok("0200".to_owned())
    }

    fn fund_raw_transaction(
        &self,
        raw_hex: &str,
        _fee_rate: Amount,
        _change_position: u32,
    ) -> Result<String, Error> {
        self.record("fund_raw_transaction");
        Ok(format!("{raw_hex}ff"))
    }

    fn sign_raw_transaction(&self, raw_hex: &str) -> Result<SignedTx, Error> {
        self.record("sign_raw_transaction");
        Ok(SignedTx {
            hex: format!("{raw_hex}ee"),
            complete: self.signing_complete,
        })
    }

    fn broadcast_raw_transaction(&self, _raw_hex: &str) -> Result<Txid, Error> {
        self.record("broadcast_raw_transaction");
        Ok(txid(0xbc))
    }

    fn decode_raw_transaction(&self, raw_hex: &str) -> Result<serde_json::Value, Error> {
        self.record("decode_raw_transaction");
        Ok(json!({ "hex": raw_hex }))
    }
}
