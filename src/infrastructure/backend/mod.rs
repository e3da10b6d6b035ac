//! Backend API adapters.

mod client;

pub use client::ReqwestTransport;
