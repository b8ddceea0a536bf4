//! CSS property lookup seam.
//!
//! The engine never talks to a browser.  Whatever produced the element
//! snapshot also supplies a [`CssSource`] that answers "what is the computed
//! value of property X?"; an empty string means the property is absent.

use std::collections::HashMap;

/// Resolves computed CSS values for one element.
#[cfg_attr(test, mockall::automock)]
pub trait CssSource: Send + Sync {
    /// Returns the computed value of `property`, or an empty string if the
    /// element has no such property.
    fn css_value(&self, property: &str) -> String;
}

/// A source for synthetic elements (the page, numbered anonymous elements)
/// that have no styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCssSource;

impl CssSource for NoCssSource {
    fn css_value(&self, _property: &str) -> String {
        String::new()
    }
}

/// A source backed by a pre-captured property map.
#[derive(Debug, Clone, Default)]
pub struct MapCssSource {
    values: HashMap<String, String>,
}

impl MapCssSource {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl CssSource for MapCssSource {
    fn css_value(&self, property: &str) -> String {
        self.values.get(property).cloned().unwrap_or_default()
    }
}

impl FromIterator<(String, String)> for MapCssSource {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Converts a `#rgb` / `#rrggbb` colour into the `rgba(r, g, b, 1)` form
/// browsers report for computed colours.
///
/// Returns `None` for anything that is not a well-formed hex colour.
pub fn hex_to_rgba(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some(format!(
        "rgba({}, {}, {}, 1)",
        channel(0)?,
        channel(2)?,
        channel(4)?
    ))
}
