use core::fmt;

use serde::{Deserialize, Serialize};

/// The class of a DNS query.
///
/// According to [RFC 1035 Section 3.2.4](https://tools.ietf.org/rfc/rfc1035#section-3.2.4).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryClass {
  /// Internet
  IN,
  /// CSNET
  CS,
  /// CHAOS
  CH,
  /// Hesiod
  HS,
  /// Any class, only valid in questions.
  ANY,
  Other(u16),
}

impl QueryClass {
  #[inline]
  pub(crate) fn to_be_bytes(self) -> [u8; 2] {
    u16::from(self).to_be_bytes()
  }
}

impl From<u16> for QueryClass {
  fn from(n: u16) -> Self {
    match n {
      1 => Self::IN,
      2 => Self::CS,
      3 => Self::CH,
      4 => Self::HS,
      255 => Self::ANY,
      n => Self::Other(n),
    }
  }
}

impl From<QueryClass> for u16 {
  fn from(class: QueryClass) -> Self {
    match class {
      QueryClass::IN => 1,
      QueryClass::CS => 2,
      QueryClass::CH => 3,
      QueryClass::HS => 4,
      QueryClass::ANY => 255,
      QueryClass::Other(n) => n,
    }
  }
}

impl fmt::Display for QueryClass {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Other(n) => write!(f, "CLASS{}", n),
      class => fmt::Debug::fmt(class, f),
    }
  }
}
