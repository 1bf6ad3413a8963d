use serde::{Deserialize, Serialize};

use crate::{Error, Header, HeaderKind, Message, Name, QueryClass, QueryKind, Question, Strictness};

/// Settings for encoding a single-question query.
///
/// ```toml
/// id = 4660
/// kind = "AAAA"
/// strictness = "truncate"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
  /// Transaction id, echoed back by the server.
  pub id: u16,
  pub kind: QueryKind,
  pub class: QueryClass,
  pub recursion_desired: bool,
  /// Handling of domains over the RFC 1035 size limits.
  pub strictness: Strictness,
}

impl Default for QueryConfig {
  fn default() -> Self {
    Self {
      id: 0x1234,
      kind: QueryKind::A,
      class: QueryClass::IN,
      recursion_desired: true,
      strictness: Strictness::Strict,
    }
  }
}

impl QueryConfig {
  pub fn from_toml_str(s: &str) -> Result<Self, Error> {
    Ok(toml::from_str(s)?)
  }

  /// Encodes a standard query for `domain`.
  pub fn encode(&self, domain: &str) -> Result<Vec<u8>, Error> {
    let name = Name::from_domain(domain, self.strictness)?;

    let header = Header::builder()
      .id(self.id)
      .kind(HeaderKind::Query)
      .recursion_desired(self.recursion_desired)
      .build();

    Message::builder()
      .header(header)
      .question(Question::new(name, self.kind, self.class))
      .build()
  }
}
