use thiserror::Error;

/// A DNS encoding or decoding error.
#[derive(Debug, Error)]
pub enum Error {
  /// Message is shorter than the fixed header.
  #[error("message too short")]
  TooShort,
  /// Name compression pointers did not terminate.
  #[error("compression pointer loop at offset {0}")]
  CompressionLoop(usize),
  /// Domain name to encode is empty.
  #[error("empty domain name")]
  EmptyName,
  /// Domain name contains an empty label.
  #[error("empty label in domain name")]
  EmptyLabel,
  /// Label exceeds 63 bytes.
  #[error("label too long: {0} bytes")]
  LabelTooLong(usize),
  /// Encoded name exceeds 255 bytes.
  #[error("name too long: {0} bytes")]
  NameTooLong(usize),
  /// A section holds more than 65535 entries.
  #[error("too many entries in section: {0}")]
  TooManyEntries(usize),
  /// Resource data exceeds 65535 bytes.
  #[error("resource data too long: {0} bytes")]
  RDataTooLong(usize),
  /// Query configuration could not be parsed.
  #[error("invalid configuration: {0}")]
  Config(#[from] toml::de::Error),
}
