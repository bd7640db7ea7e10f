pub mod bootstrap;
pub mod config;
pub mod error;
pub mod node;
pub mod selector;
pub mod send;

pub use error::Error;

use bitcoin::{Address, Network};

pub trait EncodeHex {
    fn hex(&self) -> String;
}

impl<A> EncodeHex for A
where
    A: AsRef<[u8]>,
{
    fn hex(&self) -> String {
        hex::encode(self)
    }
}

pub fn parse_address(address: &str, network: Network) -> Result<Address, Error> {
    Ok(address.parse::<Address<_>>()?.require_network(network)?)
}
