use core::convert::TryInto;
use core::fmt;
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

use crate::QueryKind;

/// Renders resource data of a given kind as text.
///
/// Returning `None` falls back to hex.
pub type Render = fn(&[u8]) -> Option<String>;

/// Text renderers for resource data, keyed by record kind.
///
/// Kinds without a renderer are shown as lowercase hex. The defaults render A and AAAA
/// records as addresses; to show everything but A records as hex, start from
/// [`empty`](#method.empty) and register only an A renderer.
#[derive(Clone)]
pub struct Renderers {
  by_kind: HashMap<u16, Render>,
}

impl fmt::Debug for Renderers {
  fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut kinds: Vec<_> = self.by_kind.keys().map(|&k| QueryKind::from(k)).collect();
    kinds.sort_by_key(|&k| u16::from(k));

    fmt.debug_struct("Renderers")
      .field("kinds", &kinds)
      .finish()
  }
}

fn render_a(rdata: &[u8]) -> Option<String> {
  let octets: [u8; 4] = rdata.try_into().ok()?;
  Some(Ipv4Addr::from(octets).to_string())
}

fn render_aaaa(rdata: &[u8]) -> Option<String> {
  let octets: [u8; 16] = rdata.try_into().ok()?;
  Some(Ipv6Addr::from(octets).to_string())
}

impl Default for Renderers {
  fn default() -> Self {
    let mut renderers = Self::empty();
    renderers.register(QueryKind::A, render_a);
    renderers.register(QueryKind::AAAA, render_aaaa);
    renderers
  }
}

impl Renderers {
  /// Renderers without any registered kinds; everything renders as hex.
  pub fn empty() -> Self {
    Self { by_kind: HashMap::new() }
  }

  /// The shared default renderers for A and AAAA records.
  pub fn standard() -> &'static Self {
    static STANDARD: OnceLock<Renderers> = OnceLock::new();
    STANDARD.get_or_init(Renderers::default)
  }

  /// Registers `render` for `kind`, returning the renderer it replaces.
  pub fn register(&mut self, kind: QueryKind, render: Render) -> Option<Render> {
    self.by_kind.insert(u16::from(kind), render)
  }

  pub fn render(&self, kind: QueryKind, rdata: &[u8]) -> String {
    self.by_kind.get(&u16::from(kind))
      .and_then(|render| render(rdata))
      .unwrap_or_else(|| hex::encode(rdata))
  }
}
