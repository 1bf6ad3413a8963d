#![deny(missing_debug_implementations, rust_2018_idioms)]

//! A library for building DNS-over-HTTPS queries and parsing DNS responses.
//!
//! Implemented according to [RFC 1035](https://tools.ietf.org/rfc/rfc1035),
//! with the transport bindings of [RFC 8484](https://tools.ietf.org/rfc/rfc8484).

mod error;
pub use error::Error;

mod wire;

mod config;
pub use config::QueryConfig;

mod message;
pub use message::{Message, MessageBuilder};

mod header;
pub use header::{Flags, Header, HeaderBuilder, HeaderKind, ResponseCode, OpCode};

mod query_kind;
pub use query_kind::QueryKind;

mod query_class;
pub use query_class::QueryClass;

mod question;
pub use question::Question;

mod name;
pub use name::{Name, Strictness};

mod answer;
pub use answer::Answer;

mod rdata;
pub use rdata::{Render, Renderers};

pub mod doh;
