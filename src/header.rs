use core::fmt;

use serde::Serialize;

use crate::wire::{read_u16, HEADER_SIZE};
use crate::Error;

/// The kind of a DNS header.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum HeaderKind {
  Query,
  Response,
}

/// A DNS opcode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum OpCode {
  Query,
  InverseQuery,
  Status,
  Notify,
  Update,
  Reserved(u8)
}

impl From<u8> for OpCode {
  fn from(n: u8) -> Self {
    match n {
      0 => OpCode::Query,
      1 => OpCode::InverseQuery,
      2 => OpCode::Status,
      4 => OpCode::Notify,
      5 => OpCode::Update,
      n => OpCode::Reserved(n),
    }
  }
}

impl From<OpCode> for u8 {
  fn from(opcode: OpCode) -> Self {
    match opcode {
      OpCode::Query => 0,
      OpCode::InverseQuery => 1,
      OpCode::Status => 2,
      OpCode::Notify => 4,
      OpCode::Update => 5,
      OpCode::Reserved(n) => n,
    }
  }
}

/// A DNS response code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ResponseCode {
  NoError,
  FormatError,
  ServerFailure,
  NonExistentDomain,
  NotImplemented,
  Refused,
  ExistentDomain,
  ExistentRrSet,
  NonExistentRrSet,
  NotAuthoritative,
  NotZone,
  Reserved(u8),
}

impl From<ResponseCode> for u8 {
  fn from(r: ResponseCode) -> Self {
    match r {
      ResponseCode::NoError => 0,
      ResponseCode::FormatError => 1,
      ResponseCode::ServerFailure => 2,
      ResponseCode::NonExistentDomain => 3,
      ResponseCode::NotImplemented => 4,
      ResponseCode::Refused => 5,
      ResponseCode::ExistentDomain => 6,
      ResponseCode::ExistentRrSet => 7,
      ResponseCode::NonExistentRrSet => 8,
      ResponseCode::NotAuthoritative => 9,
      ResponseCode::NotZone => 10,
      ResponseCode::Reserved(n) => n,
    }
  }
}

impl From<u8> for ResponseCode {
  fn from(n: u8) -> Self {
    match n {
      0 => ResponseCode::NoError,
      1 => ResponseCode::FormatError,
      2 => ResponseCode::ServerFailure,
      3 => ResponseCode::NonExistentDomain,
      4 => ResponseCode::NotImplemented,
      5 => ResponseCode::Refused,
      6 => ResponseCode::ExistentDomain,
      7 => ResponseCode::ExistentRrSet,
      8 => ResponseCode::NonExistentRrSet,
      9 => ResponseCode::NotAuthoritative,
      10 => ResponseCode::NotZone,
      n => ResponseCode::Reserved(n),
    }
  }
}

impl fmt::Display for ResponseCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ResponseCode::NoError => f.write_str("NOERROR"),
      ResponseCode::FormatError => f.write_str("FORMERR"),
      ResponseCode::ServerFailure => f.write_str("SERVFAIL"),
      ResponseCode::NonExistentDomain => f.write_str("NXDOMAIN"),
      ResponseCode::NotImplemented => f.write_str("NOTIMP"),
      ResponseCode::Refused => f.write_str("REFUSED"),
      ResponseCode::ExistentDomain => f.write_str("YXDOMAIN"),
      ResponseCode::ExistentRrSet => f.write_str("YXRRSET"),
      ResponseCode::NonExistentRrSet => f.write_str("NXRRSET"),
      ResponseCode::NotAuthoritative => f.write_str("NOTAUTH"),
      ResponseCode::NotZone => f.write_str("NOTZONE"),
      ResponseCode::Reserved(n) => write!(f, "RCODE{}", n),
    }
  }
}

const QR_MASK: u16 = 0b1000_0000_0000_0000;
const OPCODE_MASK: u16 = 0b0111_1000_0000_0000;
const AA_MASK: u16 = 0b0000_0100_0000_0000;
const TC_MASK: u16 = 0b0000_0010_0000_0000;
const RD_MASK: u16 = 0b0000_0001_0000_0000;
const RA_MASK: u16 = 0b0000_0000_1000_0000;
const RCODE_MASK: u16 = 0b0000_0000_0000_1111;

/// The flag word of a DNS header, unpacked into its fields.
///
/// The three `Z` bits between `recursion_available` and `response_code` are
/// not kept and are written back as zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Flags {
  pub kind: HeaderKind,
  pub opcode: OpCode,
  pub authoritative_answer: bool,
  pub truncated: bool,
  pub recursion_desired: bool,
  pub recursion_available: bool,
  pub response_code: ResponseCode,
}

impl Default for Flags {
  fn default() -> Self {
    Flags::from(0u16)
  }
}

impl From<u16> for Flags {
  fn from(n: u16) -> Self {
    Flags {
      kind: if n & QR_MASK == 0 { HeaderKind::Query } else { HeaderKind::Response },
      opcode: OpCode::from(((n & OPCODE_MASK) >> 11) as u8),
      authoritative_answer: n & AA_MASK != 0,
      truncated: n & TC_MASK != 0,
      recursion_desired: n & RD_MASK != 0,
      recursion_available: n & RA_MASK != 0,
      response_code: ResponseCode::from((n & RCODE_MASK) as u8),
    }
  }
}

impl From<Flags> for u16 {
  fn from(flags: Flags) -> Self {
    let mut n = 0;

    if flags.kind == HeaderKind::Response {
      n |= QR_MASK;
    }

    n |= (u16::from(u8::from(flags.opcode)) << 11) & OPCODE_MASK;

    if flags.authoritative_answer {
      n |= AA_MASK;
    }

    if flags.truncated {
      n |= TC_MASK;
    }

    if flags.recursion_desired {
      n |= RD_MASK;
    }

    if flags.recursion_available {
      n |= RA_MASK;
    }

    n | (u16::from(u8::from(flags.response_code)) & RCODE_MASK)
  }
}

/// A DNS header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Header {
  id: u16,
  flags: Flags,
  question_count: u16,
  answer_count: u16,
  name_server_count: u16,
  additional_records_count: u16,
}

impl Header {
  /// Reads the fixed 12-byte header at the start of `buf`.
  pub(crate) fn read(buf: &[u8]) -> Result<Self, Error> {
    if buf.len() < HEADER_SIZE {
      return Err(Error::TooShort)
    }

    let field = |i| read_u16(buf, i).unwrap_or_default();

    let header = Header {
      id: field(0),
      flags: Flags::from(field(2)),
      question_count: field(4),
      answer_count: field(6),
      name_server_count: field(8),
      additional_records_count: field(10),
    };

    log::trace!("decoded header {:?}", header);

    Ok(header)
  }

  pub(crate) fn write(&self, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&self.id.to_be_bytes());
    buf.extend_from_slice(&u16::from(self.flags).to_be_bytes());
    buf.extend_from_slice(&self.question_count.to_be_bytes());
    buf.extend_from_slice(&self.answer_count.to_be_bytes());
    buf.extend_from_slice(&self.name_server_count.to_be_bytes());
    buf.extend_from_slice(&self.additional_records_count.to_be_bytes());
  }

  #[inline]
  pub fn id(&self) -> u16 {
    self.id
  }

  #[inline]
  pub fn set_id(&mut self, id: u16) {
    self.id = id
  }

  #[inline]
  pub fn flags(&self) -> &Flags {
    &self.flags
  }

  #[inline]
  pub fn flags_mut(&mut self) -> &mut Flags {
    &mut self.flags
  }

  #[inline]
  pub fn kind(&self) -> HeaderKind {
    self.flags.kind
  }

  #[inline]
  pub fn opcode(&self) -> OpCode {
    self.flags.opcode
  }

  #[inline]
  pub fn authoritative_answer(&self) -> bool {
    self.flags.authoritative_answer
  }

  #[inline]
  pub fn truncated(&self) -> bool {
    self.flags.truncated
  }

  #[inline]
  pub fn recursion_desired(&self) -> bool {
    self.flags.recursion_desired
  }

  #[inline]
  pub fn recursion_available(&self) -> bool {
    self.flags.recursion_available
  }

  #[inline]
  pub fn response_code(&self) -> ResponseCode {
    self.flags.response_code
  }

  /// Number of questions claimed by the header.
  #[inline]
  pub fn question_count(&self) -> u16 {
    self.question_count
  }

  /// Number of answers claimed by the header.
  #[inline]
  pub fn answer_count(&self) -> u16 {
    self.answer_count
  }

  #[inline]
  pub fn name_server_count(&self) -> u16 {
    self.name_server_count
  }

  #[inline]
  pub fn additional_records_count(&self) -> u16 {
    self.additional_records_count
  }

  pub(crate) fn set_counts(&mut self, questions: u16, answers: u16, name_servers: u16, additional_records: u16) {
    self.question_count = questions;
    self.answer_count = answers;
    self.name_server_count = name_servers;
    self.additional_records_count = additional_records;
  }

  #[inline]
  pub fn builder() -> HeaderBuilder {
    HeaderBuilder::new()
  }
}

/// Builder for [`Header`](struct.Header.html).
#[derive(Debug, Default)]
pub struct HeaderBuilder(Header);

impl HeaderBuilder {
  #[inline]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn id(mut self, id: u16) -> Self {
    self.0.id = id;
    self
  }

  pub fn kind(mut self, kind: HeaderKind) -> Self {
    self.0.flags.kind = kind;
    self
  }

  pub fn opcode(mut self, opcode: OpCode) -> Self {
    self.0.flags.opcode = opcode;
    self
  }

  pub fn recursion_desired(mut self, recursion_desired: bool) -> Self {
    self.0.flags.recursion_desired = recursion_desired;
    self
  }

  pub fn recursion_available(mut self, recursion_available: bool) -> Self {
    self.0.flags.recursion_available = recursion_available;
    self
  }

  pub fn response_code(mut self, response_code: ResponseCode) -> Self {
    self.0.flags.response_code = response_code;
    self
  }

  pub fn build(self) -> Header {
    self.0
  }
}
