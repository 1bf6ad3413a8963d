use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::Error;

const PTR_MASK: u8 = 0b11000000;
const LEN_MASK: u8 = !PTR_MASK;

/// Maximum label length, see [RFC 1035 Section 2.3.4](https://tools.ietf.org/rfc/rfc1035#section-2.3.4).
pub(crate) const MAX_LABEL_LEN: usize = 63;
/// Maximum encoded name length, including length bytes and the root label.
pub(crate) const MAX_NAME_LEN: usize = 255;
/// Maximum number of compression pointers followed while reading a single name.
pub(crate) const MAX_POINTER_HOPS: usize = 128;

/// How [`Name::from_domain`](struct.Name.html#method.from_domain) treats
/// domains exceeding the RFC 1035 size limits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
  /// Reject empty names, empty labels, labels over 63 bytes and names over 255 bytes.
  Strict,
  /// Skip empty labels, cut long labels to 63 bytes and drop labels past 255 bytes.
  Truncate,
}

impl Default for Strictness {
  fn default() -> Self {
    Self::Strict
  }
}

/// A DNS name.
///
/// Names own their labels and do not borrow from the message they were read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Name {
  labels: Vec<Vec<u8>>,
}

impl Name {
  /// The root name, which has no labels.
  #[inline]
  pub fn root() -> Self {
    Self::default()
  }

  /// Splits `domain` on `.` into a name suitable for encoding.
  ///
  /// A single trailing dot is accepted. Size limits are handled according to `strictness`.
  pub fn from_domain(domain: &str, strictness: Strictness) -> Result<Self, Error> {
    if domain.is_empty() {
      return match strictness {
        Strictness::Strict => Err(Error::EmptyName),
        Strictness::Truncate => Ok(Self::root()),
      }
    }

    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.is_empty() {
      return Ok(Self::root())
    }

    let mut name = Self::root();
    // Root label.
    let mut len = 1;

    for label in domain.split('.') {
      let mut label = label.as_bytes();

      if label.is_empty() {
        match strictness {
          Strictness::Strict => return Err(Error::EmptyLabel),
          Strictness::Truncate => continue,
        }
      }

      if label.len() > MAX_LABEL_LEN {
        match strictness {
          Strictness::Strict => return Err(Error::LabelTooLong(label.len())),
          Strictness::Truncate => {
            log::warn!("truncating {}-byte label to {} bytes", label.len(), MAX_LABEL_LEN);
            label = &label[..MAX_LABEL_LEN];
          },
        }
      }

      if len + 1 + label.len() > MAX_NAME_LEN {
        match strictness {
          Strictness::Strict => return Err(Error::NameTooLong(1 + domain.len() + 1)),
          Strictness::Truncate => {
            log::warn!("dropping labels of {:?} past {} bytes", domain, MAX_NAME_LEN);
            break
          },
        }
      }

      len += 1 + label.len();
      name.labels.push(label.to_vec());
    }

    Ok(name)
  }

  /// Reads a possibly compressed name starting at `*i`.
  ///
  /// On return `*i` points at the field following the name: right after the first
  /// compression pointer if one was followed, otherwise right after the root label.
  /// Reads running past the end of `buf` stop early and keep the labels read so far.
  /// Labels past the 255-byte limit are skipped but still read up to the root label.
  ///
  /// A pointer to an offset already jumped to, or more than 128 pointers, is a loop.
  pub(crate) fn read(buf: &[u8], i: &mut usize) -> Result<Self, Error> {
    let mut name = Self::root();
    let mut j = *i;
    let mut next = None;
    let mut targets: Vec<u16> = Vec::new();
    let mut too_long = false;

    loop {
      let label_start = j;

      match LabelType::read(buf, &mut j) {
        None => {
          log::debug!("name at offset {} truncated at offset {}", *i, j);
          break
        },
        Some(LabelType::Pointer(ptr)) => {
          if targets.contains(&ptr) || targets.len() >= MAX_POINTER_HOPS {
            log::warn!("compression pointer loop at offset {}", label_start);
            return Err(Error::CompressionLoop(label_start))
          }
          targets.push(ptr);

          if next.is_none() {
            next = Some(j);
          }

          j = ptr as usize;
        },
        Some(LabelType::Part(0)) => break,
        Some(LabelType::Part(len)) => {
          if too_long || name.encoded_len() + 1 + len as usize > MAX_NAME_LEN {
            if !too_long {
              log::debug!("name at offset {} exceeds {} bytes", *i, MAX_NAME_LEN);
              too_long = true;
            }
            continue
          }

          name.labels.push(buf[(j - len as usize)..j].to_vec());
        },
      }
    }

    *i = next.unwrap_or(j);

    Ok(name)
  }

  pub(crate) fn write(&self, buf: &mut Vec<u8>) {
    for label in &self.labels {
      buf.push(label.len() as u8);
      buf.extend_from_slice(label);
    }

    buf.push(0);
  }

  /// Iterates over the raw labels, excluding the root label.
  pub fn labels(&self) -> impl Iterator<Item = &[u8]> + '_ {
    self.labels.iter().map(Vec::as_slice)
  }

  #[inline]
  pub fn is_root(&self) -> bool {
    self.labels.is_empty()
  }

  /// Length of the uncompressed wire form.
  pub fn encoded_len(&self) -> usize {
    self.labels.iter().map(|l| 1 + l.len()).sum::<usize>() + 1
  }
}

impl FromStr for Name {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_domain(s, Strictness::Strict)
  }
}

impl fmt::Display for Name {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut print_dot = false;

    for label in &self.labels {
      if print_dot {
        f.write_str(".")?;
      }

      f.write_str(&String::from_utf8_lossy(label))?;

      print_dot = true;
    }

    Ok(())
  }
}

impl Serialize for Name {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

/// Compares against dotted text, ignoring ASCII case.
impl PartialEq<str> for Name {
  fn eq(&self, other: &str) -> bool {
    let mut other_i = 0;

    let other = other.as_bytes();

    for label in &self.labels {
      if other_i != 0 {
        if other.get(other_i) != Some(&b'.') {
          return false
        } else {
          other_i += 1;
        }
      }

      if let Some(substring) = other.get(other_i..(other_i + label.len())) {
        if !label.eq_ignore_ascii_case(substring) {
          return false
        }
      } else {
        return false
      }

      other_i += label.len();
    }

    other_i == other.len()
  }
}

#[derive(Debug)]
pub(crate) enum LabelType {
  Pointer(u16),
  Part(u8),
}

impl LabelType {
  /// Return whether a label was read and whether it was a pointer or a normal name part.
  ///
  /// `*i` is only advanced if the whole label fits in `buf`.
  pub(crate) fn read(buf: &[u8], i: &mut usize) -> Option<Self> {
    let ptr_or_len = *buf.get(*i)?;

    // Check for pointer:
    // https://tools.ietf.org/rfc/rfc1035#section-4.1.4
    if ptr_or_len & PTR_MASK == PTR_MASK {
      let ptr = *buf.get(*i + 1)?;
      *i += 1 + 1;
      return Some(Self::Pointer(u16::from_be_bytes([ptr_or_len & LEN_MASK, ptr])))
    }

    let len = ptr_or_len;
    if *i + 1 + len as usize > buf.len() {
      return None
    }

    *i += 1 + len as usize;
    Some(Self::Part(len))
  }
}
