//! Greedy first-fit UTXO selection. Inputs are taken in the order the
//! node reports them; no sorting, no fee awareness, no privacy games.

use bitcoin::Amount;

use crate::node::{TxInput, Unspent};
use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub inputs: Vec<TxInput>,
    /// Sum of the selected input amounts; >= the required amount.
    pub total: Amount,
}

/// Picks the shortest prefix of `unspent` whose amounts sum to at least
/// `required`. Fails fast if even the full set can't cover it.
pub fn select_inputs(unspent: &[Unspent], required: Amount) -> Result<Selection, Error> {
    if unspent.is_empty() {
        return Err(Error::NoUnspent);
    }

    let available: Amount = unspent.iter().map(|u| u.amount).sum();
    if available < required {
        return Err(Error::InsufficientFunds {
            available,
            required,
        });
    }

    let mut inputs = Vec::new();
    let mut total = Amount::ZERO;
    for utxo in unspent {
        inputs.push(TxInput {
            txid: utxo.txid,
            vout: utxo.vout,
        });
        total += utxo.amount;
        if total >= required {
            break;
        }
    }
    // the upfront balance check guarantees the loop reached `required`
    debug_assert!(total >= required);

    Ok(Selection { inputs, total })
}
