//! Edition resolution from image paths.
//!
//! Catalog images live under `<marker>/<NN>-<Edition-Name>/<file>`; the
//! folder name is the only place the edition is recorded, so it is
//! recovered from the path:
//!
//! ```
//! use myl_deck::cards::EditionResolver;
//!
//! let resolver = EditionResolver::new("PRIMER_BLOQUE", "Otras").unwrap();
//!
//! assert_eq!(
//!     resolver.resolve(Some("img/PRIMER_BLOQUE/07-Dominios-de-RA/x.png")),
//!     "Dominios De Ra"
//! );
//! assert_eq!(resolver.resolve(Some("img/promo/x.png")), "Otras");
//! assert_eq!(resolver.resolve(None), "Otras");
//! ```

use regex::Regex;

use crate::core::error::ConfigError;

/// Derives a grouping label from an image reference.
#[derive(Clone, Debug)]
pub struct EditionResolver {
    pattern: Regex,
    unclassified: String,
}

impl EditionResolver {
    /// Create a resolver looking for `<marker>/<folder>/`.
    ///
    /// `unclassified` is returned for absent or non-matching references.
    pub fn new(marker: &str, unclassified: impl Into<String>) -> Result<Self, ConfigError> {
        if marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        let pattern = Regex::new(&format!("{}/([^/]+)/", regex::escape(marker)))?;
        Ok(Self {
            pattern,
            unclassified: unclassified.into(),
        })
    }

    /// Label used when no edition can be derived.
    #[must_use]
    pub fn unclassified(&self) -> &str {
        &self.unclassified
    }

    /// Resolve the edition for an image reference. Never fails.
    #[must_use]
    pub fn resolve(&self, image: Option<&str>) -> String {
        let folder = image
            .and_then(|path| self.pattern.captures(path))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        match folder.map(folder_label) {
            Some(label) if !label.trim().is_empty() => label,
            _ => self.unclassified.clone(),
        }
    }
}

/// `07-Dominios-de-RA` -> `Dominios De Ra`.
fn folder_label(folder: &str) -> String {
    let name = strip_numeric_prefix(folder).replace(&['-', '_'][..], " ");
    title_case(&name)
}

/// Drops a leading `<digits>-` or `<digits>_`.
fn strip_numeric_prefix(folder: &str) -> &str {
    let digits = folder.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return folder;
    }
    match folder.as_bytes().get(digits) {
        Some(b'-' | b'_') => &folder[digits + 1..],
        _ => folder,
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> EditionResolver {
        EditionResolver::new("PRIMER_BLOQUE", "Otras").unwrap()
    }

    #[test]
    fn test_resolves_known_paths() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("https://cdn.example/PRIMER_BLOQUE/07-Dominios-de-RA/x.png")),
            "Dominios De Ra"
        );
        assert_eq!(r.resolve(Some("img/PRIMER_BLOQUE/03-Helenica/y.png")), "Helenica");
    }

    #[test]
    fn test_underscore_separators() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("PRIMER_BLOQUE/05_espada_sagrada/z.png")),
            "Espada Sagrada"
        );
    }

    #[test]
    fn test_folder_without_prefix() {
        let r = resolver();
        assert_eq!(r.resolve(Some("PRIMER_BLOQUE/mundo-gotico/z.png")), "Mundo Gotico");
        // Digits not followed by a separator stay part of the name.
        assert_eq!(r.resolve(Some("PRIMER_BLOQUE/2da-era/z.png")), "2da Era");
    }

    #[test]
    fn test_unmatched_paths_fall_back() {
        let r = resolver();
        assert_eq!(r.resolve(None), "Otras");
        assert_eq!(r.resolve(Some("")), "Otras");
        assert_eq!(r.resolve(Some("img/SEGUNDO_BLOQUE/01-Aguila/x.png")), "Otras");
        // Folder must be followed by a separator.
        assert_eq!(r.resolve(Some("PRIMER_BLOQUE/03-Helenica")), "Otras");
        assert_eq!(r.resolve(Some("PRIMER_BLOQUE//x.png")), "Otras");
    }

    #[test]
    fn test_prefix_only_folder_falls_back() {
        let r = resolver();
        assert_eq!(r.resolve(Some("PRIMER_BLOQUE/07-/x.png")), "Otras");
    }

    #[test]
    fn test_marker_is_escaped() {
        let r = EditionResolver::new("a.b", "none").unwrap();
        assert_eq!(r.resolve(Some("a.b/01-x/y")), "X");
        assert_eq!(r.resolve(Some("axb/01-x/y")), "none");
    }

    #[test]
    fn test_empty_marker_rejected() {
        assert!(matches!(
            EditionResolver::new("", "Otras"),
            Err(ConfigError::EmptyMarker)
        ));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("dominios de RA"), "Dominios De Ra");
        assert_eq!(title_case("  espada"), "  Espada");
        assert_eq!(title_case("ÉPICA"), "Épica");
    }
}
