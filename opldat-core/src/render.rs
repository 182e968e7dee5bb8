//! Rendering configuration: layout mode and indentation.

/// Indentation style for pretty-printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// The whitespace prefix for the given nesting level.
    pub fn prefix(&self, level: usize) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(*width as usize * level),
            Self::Tab => "\t".repeat(level),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

/// Per-document rendering configuration.
///
/// Every element of a document is rendered with the same options, so two
/// documents with different layouts can coexist in one process. The default
/// enables pretty printing with 4-space indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Insert newlines and indentation inside composite elements.
    pub pretty: bool,
    /// Indentation unit used when `pretty` is enabled.
    pub indent: Indent,
}

impl RenderOptions {
    /// Single-line output for every element.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            indent: Indent::default(),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: Indent::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_prefix() {
        assert_eq!(Indent::Spaces(4).prefix(0), "");
        assert_eq!(Indent::Spaces(4).prefix(1), "    ");
        assert_eq!(Indent::Spaces(2).prefix(3), "      ");
    }

    #[test]
    fn test_tab_prefix() {
        assert_eq!(Indent::Tab.prefix(2), "\t\t");
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.pretty);
        assert_eq!(options.indent, Indent::Spaces(4));

        assert!(!RenderOptions::compact().pretty);
    }
}
