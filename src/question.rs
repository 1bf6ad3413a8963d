use serde::Serialize;

use crate::wire::read_u16;
use crate::{Error, Name, QueryKind, QueryClass};

/// A DNS question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
  pub name: Name,
  pub kind: QueryKind,
  pub class: QueryClass,
}

impl Question {
  pub fn new(name: Name, kind: QueryKind, class: QueryClass) -> Self {
    Self { name, kind, class }
  }

  /// Reads a question at `*i`, returning `None` if the kind and class are cut off.
  pub(crate) fn read(buf: &[u8], i: &mut usize) -> Result<Option<Self>, Error> {
    let name = Name::read(buf, i)?;

    let (kind, class) = match (read_u16(buf, *i), read_u16(buf, *i + 2)) {
      (Some(kind), Some(class)) => (kind, class),
      _ => return Ok(None),
    };
    *i += 4;

    Ok(Some(Self { name, kind: kind.into(), class: class.into() }))
  }

  pub(crate) fn write(&self, buf: &mut Vec<u8>) {
    self.name.write(buf);
    buf.extend_from_slice(&self.kind.to_be_bytes());
    buf.extend_from_slice(&self.class.to_be_bytes());
  }

  pub fn name(&self) -> &Name {
    &self.name
  }

  pub fn kind(&self) -> &QueryKind {
    &self.kind
  }

  pub fn class(&self) -> &QueryClass {
    &self.class
  }
}
