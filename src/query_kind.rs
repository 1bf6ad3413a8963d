use core::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a DNS query or resource record.
///
/// According to [RFC 1035 Section 3.2.2](https://tools.ietf.org/rfc/rfc1035#section-3.2.2)
/// and [RFC 1035 Section 3.2.3](https://tools.ietf.org/rfc/rfc1035#section-3.2.3).
/// Values without a variant are kept in `Other`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryKind {
  A,
  NS,
  MD,
  MF,
  CNAME,
  SOA,
  MB,
  MG,
  MR,
  NULL,
  WKS,
  PTR,
  HINFO,
  MINFO,
  MX,
  TXT,
  AAAA,
  SRV,
  OPT,
  HTTPS,
  AXFR,
  MAILB,
  MAILA,
  ALL,
  Other(u16),
}

impl From<u16> for QueryKind {
  fn from(n: u16) -> Self {
    match n {
      1 => Self::A,
      2 => Self::NS,
      3 => Self::MD,
      4 => Self::MF,
      5 => Self::CNAME,
      6 => Self::SOA,
      7 => Self::MB,
      8 => Self::MG,
      9 => Self::MR,
      10 => Self::NULL,
      11 => Self::WKS,
      12 => Self::PTR,
      13 => Self::HINFO,
      14 => Self::MINFO,
      15 => Self::MX,
      16 => Self::TXT,
      28 => Self::AAAA,
      33 => Self::SRV,
      41 => Self::OPT,
      65 => Self::HTTPS,
      252 => Self::AXFR,
      253 => Self::MAILB,
      254 => Self::MAILA,
      255 => Self::ALL,
      n => Self::Other(n),
    }
  }
}

impl From<QueryKind> for u16 {
  fn from(kind: QueryKind) -> Self {
    match kind {
      QueryKind::A => 1,
      QueryKind::NS => 2,
      QueryKind::MD => 3,
      QueryKind::MF => 4,
      QueryKind::CNAME => 5,
      QueryKind::SOA => 6,
      QueryKind::MB => 7,
      QueryKind::MG => 8,
      QueryKind::MR => 9,
      QueryKind::NULL => 10,
      QueryKind::WKS => 11,
      QueryKind::PTR => 12,
      QueryKind::HINFO => 13,
      QueryKind::MINFO => 14,
      QueryKind::MX => 15,
      QueryKind::TXT => 16,
      QueryKind::AAAA => 28,
      QueryKind::SRV => 33,
      QueryKind::OPT => 41,
      QueryKind::HTTPS => 65,
      QueryKind::AXFR => 252,
      QueryKind::MAILB => 253,
      QueryKind::MAILA => 254,
      QueryKind::ALL => 255,
      QueryKind::Other(n) => n,
    }
  }
}

impl fmt::Display for QueryKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      // Unknown types use the RFC 3597 presentation form.
      Self::Other(n) => write!(f, "TYPE{}", n),
      Self::ALL => f.write_str("*"),
      kind => fmt::Debug::fmt(kind, f),
    }
  }
}

impl QueryKind {
  #[inline]
  pub(crate) fn to_be_bytes(self) -> [u8; 2] {
    u16::from(self).to_be_bytes()
  }
}
