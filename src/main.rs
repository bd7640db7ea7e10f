//! Mines a funded regtest wallet into existence, then sends a payment
//! carrying an OP_RETURN message and records the txid in `out.txt`.

use std::fs;
use std::io;

use log::{error, info};
use op_return_send::bootstrap::bootstrap;
use op_return_send::config::{self, NODE};
use op_return_send::node::RpcNode;
use op_return_send::parse_address;
use op_return_send::send::send;

fn main() -> anyhow::Result<()> {
    set_up_logging()?;
    if let Err(e) = run() {
        error!("run failed: {e}");
        return Err(e);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    info!("node RPC endpoint: {}", NODE.wallet_url());
    info!("payment amount: {}", config::PAYMENT_AMOUNT);
    info!("message: {:?}", config::OP_RETURN_MESSAGE);

    let node = RpcNode::connect(&NODE)?;
    bootstrap(&node, NODE.wallet, config::FUNDING_BLOCKS)?;

    let recipient = parse_address(config::RECIPIENT, NODE.network)?;
    let txid = send(&node, &recipient, config::OP_RETURN_MESSAGE)?;

    fs::write(config::TXID_FILE, txid.to_string())?;
    info!("txid written to {}", config::TXID_FILE);
    Ok(())
}

fn set_up_logging() -> anyhow::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339(std::time::SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(io::stdout())
        .apply()?;
    Ok(())
}
