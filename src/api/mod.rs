pub mod client;
pub mod models;
pub mod namecheap;

pub use client::DnsUpdateClient;
pub use models::UpdateResponse;
pub use namecheap::NamecheapClient;
