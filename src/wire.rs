//! Big-endian primitives shared by the readers.

pub(crate) const HEADER_SIZE: usize = 12;

#[inline]
pub(crate) fn read_u16(buf: &[u8], i: usize) -> Option<u16> {
  match buf.get(i..i.checked_add(2)?)? {
    &[a, b] => Some(u16::from_be_bytes([a, b])),
    _ => None,
  }
}

#[inline]
pub(crate) fn read_u32(buf: &[u8], i: usize) -> Option<u32> {
  match buf.get(i..i.checked_add(4)?)? {
    &[a, b, c, d] => Some(u32::from_be_bytes([a, b, c, d])),
    _ => None,
  }
}
