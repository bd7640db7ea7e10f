//! Payment assembly: output-set construction plus the
//! create/fund/sign/broadcast round trip through the node.

use bitcoin::{Address, Amount, Txid};
use log::{debug, info};
use serde_json::json;

use crate::config::{CHANGE_POSITION, FEE_RATE, PAYMENT_AMOUNT};
use crate::node::{OutputMap, WalletNode};
use crate::selector::select_inputs;
use crate::{EncodeHex, Error};

/// Reserved `createrawtransaction` output key for an OP_RETURN payload.
pub const DATA_KEY: &str = "data";

/// Builds the two-entry output object: the payment and the data carrier.
pub fn payment_outputs(recipient: &Address, amount: Amount, message: &str) -> OutputMap {
    let mut outputs = OutputMap::new();
    outputs.insert(recipient.to_string(), json!(amount.to_btc()));
    outputs.insert(DATA_KEY.to_owned(), json!(message.as_bytes().hex()));
    outputs
}

/// Sends `PAYMENT_AMOUNT` to `recipient` with `message` embedded in an
/// OP_RETURN output. Fee funding, change, signing and broadcast are all
/// the node's work; exactly one broadcast happens per successful call,
/// and a rerun after a partial failure is not deduplicated.
pub fn send<N: WalletNode>(node: &N, recipient: &Address, message: &str) -> Result<Txid, Error> {
    let unspent = node.list_unspent()?;
    let selection = select_inputs(&unspent, PAYMENT_AMOUNT)?;
    info!(
        "selected {} inputs totalling {}",
        selection.inputs.len(),
        selection.total
    );

    let outputs = payment_outputs(recipient, PAYMENT_AMOUNT, message);
    let raw = node.create_raw_transaction(&selection.inputs, &outputs)?;
    let funded = node.fund_raw_transaction(&raw, FEE_RATE, CHANGE_POSITION)?;

    let signed = node.sign_raw_transaction(&funded)?;
    if !signed.complete {
        // never broadcast a partially-signed transaction
        return Err(Error::SigningIncomplete);
    }

    let txid = node.broadcast_raw_transaction(&signed.hex)?;
    info!("transaction sent: {txid}");

    let decoded = node.decode_raw_transaction(&signed.hex)?;
    debug!("decoded broadcast transaction: {decoded}");

    Ok(txid)
}
