//! Domain entity definitions.

mod account;
mod envelope;
mod message;
mod nullable;
mod settings;
mod token;

pub use account::{Balance, Profile, SessionGrant, SessionUser, TokenGrant};
pub use envelope::Envelope;
pub use message::{BalanceLog, BalanceLogPage, Message, MessagePage, UnreadCount};
pub use settings::{DEFAULT_PORT, Settings};
pub use token::BearerToken;
