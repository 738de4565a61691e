use crate::color::table;
use crate::foundation::core::Rgb;
use crate::foundation::error::{BlendError, BlendResult};

/// A color as the user wrote it: a name/hex/gray string or an RGB triple.
///
/// Deserializes from a JSON string (`"r"`, `"navy"`, `"#ffb500"`, `"0.5"`) or a
/// three-element array (`[0.0, 1.0, 0.0]`).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color, hex string, or gray level.
    Name(String),
    /// RGB triple in `[0, 1]`.
    Rgb([f64; 3]),
}

impl ColorSpec {
    /// Build a named spec.
    pub fn name(s: impl Into<String>) -> Self {
        Self::Name(s.into())
    }
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::Name("black".to_owned())
    }
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        Self::Name(s.to_owned())
    }
}

impl From<String> for ColorSpec {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

impl From<[f64; 3]> for ColorSpec {
    fn from(v: [f64; 3]) -> Self {
        Self::Rgb(v)
    }
}

impl From<Rgb> for ColorSpec {
    fn from(c: Rgb) -> Self {
        Self::Rgb(c.channels())
    }
}

impl std::fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(s) => write!(f, "'{s}'"),
            Self::Rgb([r, g, b]) => write!(f, "({r}, {g}, {b})"),
        }
    }
}

/// Resolves color specifications to RGB triples.
///
/// Injected into layer construction so callers can swap the color table.
/// Closures of the right shape implement it too.
pub trait ColorResolver: Sync {
    /// Resolve `spec`, failing with [`BlendError::InvalidColor`].
    fn resolve(&self, spec: &ColorSpec) -> BlendResult<Rgb>;
}

impl<F> ColorResolver for F
where
    F: Fn(&ColorSpec) -> BlendResult<Rgb> + Sync,
{
    fn resolve(&self, spec: &ColorSpec) -> BlendResult<Rgb> {
        self(spec)
    }
}

/// Default resolver: base letters, CSS4 names, `tab:` palette, hex and gray strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct NamedColors;

impl ColorResolver for NamedColors {
    fn resolve(&self, spec: &ColorSpec) -> BlendResult<Rgb> {
        match spec {
            ColorSpec::Rgb([r, g, b]) => {
                let c = Rgb::new(*r, *g, *b);
                if !c.in_unit_range() {
                    return Err(BlendError::color(format!(
                        "rgb triple {spec} must have components within [0, 1]"
                    )));
                }
                Ok(c)
            }
            ColorSpec::Name(s) => resolve_str(s),
        }
    }
}

fn resolve_str(raw: &str) -> BlendResult<Rgb> {
    let key = raw.trim().to_ascii_lowercase();
    if key.is_empty() {
        return Err(BlendError::color("empty color specification"));
    }

    if let Some(hex) = key.strip_prefix('#') {
        return parse_hex(hex).map_err(|e| BlendError::color(format!("'{raw}': {e}")));
    }

    if let Some(name) = key.strip_prefix("tab:") {
        return lookup_hex(table::TABLEAU, name)
            .ok_or_else(|| BlendError::color(format!("unknown tableau color '{raw}'")));
    }

    if let Some((_, [r, g, b])) = table::BASE.iter().find(|(n, _)| *n == key) {
        return Ok(Rgb::new(*r, *g, *b));
    }

    if let Some(c) = lookup_hex(table::CSS4, &key) {
        return Ok(c);
    }

    // Gray levels are written as decimal strings, e.g. "0.75".
    if let Ok(level) = key.parse::<f64>() {
        if !level.is_finite() || !(0.0..=1.0).contains(&level) {
            return Err(BlendError::color(format!(
                "gray level '{raw}' must be within [0, 1]"
            )));
        }
        return Ok(Rgb::gray(level));
    }

    Err(BlendError::color(format!("unknown color '{raw}'")))
}

fn lookup_hex(table: &[(&str, u32)], name: &str) -> Option<Rgb> {
    table.iter().find(|(n, _)| *n == name).map(|(_, v)| {
        let [_, r, g, b] = v.to_be_bytes();
        Rgb::from_u8(r, g, b)
    })
}

/// `rgb`, `rgba`, `rrggbb` or `rrggbbaa` (alpha is accepted and dropped).
fn parse_hex(s: &str) -> Result<Rgb, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        // from_str_radix would also take a sign
        if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid hex byte \"{pair}\""));
        }
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        3 | 4 => {
            let mut ch = [0u8; 3];
            for (i, c) in ch.iter_mut().enumerate() {
                let nibble = &s[i..i + 1];
                *c = hex_byte(&format!("{nibble}{nibble}"))?;
            }
            if s.len() == 4 {
                hex_byte(&s[3..4])?;
            }
            Ok(Rgb::from_u8(ch[0], ch[1], ch[2]))
        }
        6 | 8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            if s.len() == 8 {
                hex_byte(&s[6..8])?;
            }
            Ok(Rgb::from_u8(r, g, b))
        }
        _ => Err("hex color must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/resolver.rs"]
mod tests;
