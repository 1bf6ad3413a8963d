use core::convert::{TryFrom, TryInto};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::wire::{read_u16, read_u32};
use crate::{Error, Name, QueryKind, QueryClass, Renderers};

/// Type, class, TTL and data length following the name.
const FIXED_LEN: usize = 10;

/// A DNS resource record, as found in the answer, authority and additional sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
  pub name: Name,
  pub kind: QueryKind,
  pub class: QueryClass,
  pub ttl: u32,
  /// Raw resource data, `None` if the message ended before it.
  pub rdata: Option<Vec<u8>>,
}

impl Answer {
  /// Reads a record at `*i`, returning `None` if its fixed fields are cut off.
  ///
  /// `*i` is advanced past the declared data length even when the data itself is missing.
  pub(crate) fn read(buf: &[u8], i: &mut usize) -> Result<Option<Self>, Error> {
    let name = Name::read(buf, i)?;

    let fields = (read_u16(buf, *i), read_u16(buf, *i + 2), read_u32(buf, *i + 4), read_u16(buf, *i + 8));
    let (kind, class, ttl, rdata_len) = match fields {
      (Some(kind), Some(class), Some(ttl), Some(rdata_len)) => (kind, class, ttl, rdata_len as usize),
      _ => return Ok(None),
    };

    let rdata_i = *i + FIXED_LEN;
    let rdata = buf.get(rdata_i..(rdata_i + rdata_len)).map(<[u8]>::to_vec);
    if rdata.is_none() {
      log::debug!("record data at offset {} exceeds message by {} bytes", rdata_i, rdata_i + rdata_len - buf.len());
    }

    *i = rdata_i + rdata_len;

    Ok(Some(Self { name, kind: kind.into(), class: class.into(), ttl, rdata }))
  }

  pub(crate) fn write(&self, buf: &mut Vec<u8>) -> Result<(), Error> {
    let rdata = self.rdata();
    let rdata_len = u16::try_from(rdata.len()).map_err(|_| Error::RDataTooLong(rdata.len()))?;

    self.name.write(buf);
    buf.extend_from_slice(&self.kind.to_be_bytes());
    buf.extend_from_slice(&self.class.to_be_bytes());
    buf.extend_from_slice(&self.ttl.to_be_bytes());
    buf.extend_from_slice(&rdata_len.to_be_bytes());
    buf.extend_from_slice(rdata);

    Ok(())
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

  pub fn ttl(&self) -> u32 {
    self.ttl
  }

  /// Raw resource data, empty if it was missing from the message.
  pub fn rdata(&self) -> &[u8] {
    self.rdata.as_deref().unwrap_or_default()
  }

  /// The address carried by an A or AAAA record.
  pub fn ip_addr(&self) -> Option<IpAddr> {
    match self.kind {
      QueryKind::A => {
        let octets: [u8; 4] = self.rdata().try_into().ok()?;
        Some(Ipv4Addr::from(octets).into())
      },
      QueryKind::AAAA => {
        let octets: [u8; 16] = self.rdata().try_into().ok()?;
        Some(Ipv6Addr::from(octets).into())
      },
      _ => None,
    }
  }

  /// Renders the resource data with `renderers`, or an empty string if it is missing.
  pub fn render_with(&self, renderers: &Renderers) -> String {
    match &self.rdata {
      Some(rdata) => renderers.render(self.kind, rdata),
      None => String::new(),
    }
  }

  /// Renders the resource data with the [standard](struct.Renderers.html#method.standard) renderers.
  pub fn render(&self) -> String {
    self.render_with(Renderers::standard())
  }
}

impl Serialize for Answer {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Answer", 5)?;
    state.serialize_field("name", &self.name)?;
    state.serialize_field("kind", &self.kind)?;
    state.serialize_field("class", &self.class)?;
    state.serialize_field("ttl", &self.ttl)?;
    state.serialize_field("rdata", &self.render())?;
    state.end()
  }
}
