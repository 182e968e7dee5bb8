//! Data file assembly: an ordered collection of named elements rendered
//! behind a generated header comment.

use opldat_core::{Element, Indent, NamedElement, RenderOptions};
use time::OffsetDateTime;

const BANNER_WIDTH: usize = 54;

/// A solver data file under construction.
///
/// Elements are appended one by one and rendered in insertion order, which
/// is the statement order of the output file. Rendering applies one
/// [`RenderOptions`] uniformly to every element and is idempotent as long
/// as the file is not mutated between calls (only the header timestamp
/// moves).
///
/// # Example
///
/// ```
/// use opldat::{DataFile, Set};
///
/// let mut file = DataFile::new();
/// file.set_pretty_printing(false);
/// file.add("timeHorizon", 4);
/// file.add("ids", Set::from_members(["a_0000", "a_0001"]));
///
/// let contents = file.render();
/// assert!(contents.contains("timeHorizon = 4;"));
/// assert!(contents.contains("ids = {a_0000,a_0001};"));
/// ```
#[derive(Debug, Clone)]
pub struct DataFile {
    elements: Vec<NamedElement>,
    prefix_text: Vec<String>,
    options: RenderOptions,
    banner: String,
}

impl DataFile {
    /// Create an empty data file with default options (pretty printing on,
    /// 4-space indentation).
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create an empty data file with the given rendering options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            elements: Vec::new(),
            prefix_text: Vec::new(),
            options,
            banner: "*".repeat(BANNER_WIDTH),
        }
    }

    /// Append a named element.
    ///
    /// Names must be unique across the file; a duplicate is not detected
    /// here and produces a data file the solver will reject.
    pub fn push(&mut self, element: NamedElement) {
        self.elements.push(element);
    }

    /// Append an element, naming it here.
    pub fn add(&mut self, name: impl Into<String>, element: impl Into<Element>) {
        self.elements.push(NamedElement::new(name, element));
    }

    pub fn elements(&self) -> &[NamedElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Set the additional comment lines spliced into the header.
    ///
    /// Each line lands on its own ` * ` comment line. Lines must not
    /// contain `*/`, which would close the header comment early and break
    /// the file; this is not validated.
    pub fn set_prefix_text<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix_text = lines.into_iter().map(Into::into).collect();
    }

    /// Set the header comment to a single additional line.
    pub fn set_prefix_line(&mut self, line: impl Into<String>) {
        self.prefix_text = vec![line.into()];
    }

    /// Remove any additional header comment lines.
    pub fn clear_prefix_text(&mut self) {
        self.prefix_text.clear();
    }

    pub fn prefix_text(&self) -> &[String] {
        &self.prefix_text
    }

    pub fn set_pretty_printing(&mut self, enabled: bool) {
        self.options.pretty = enabled;
    }

    pub fn pretty_printing(&self) -> bool {
        self.options.pretty
    }

    pub fn set_indent(&mut self, indent: Indent) {
        self.options.indent = indent;
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Replace the header banner (the `*` run framing the comment block).
    pub fn set_banner(&mut self, banner: impl Into<String>) {
        self.banner = banner.into();
    }

    /// Render the whole data file to a string.
    ///
    /// Emits the header comment block, then one `name = content;`
    /// statement per element in insertion order, each followed by a blank
    /// line. Top-level element content is rendered at nesting level 1 so
    /// pretty-printed children sit visually under the assignment. This
    /// path performs no I/O and cannot fail.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_header(&mut out);
        for element in &self.elements {
            out.push_str(element.name());
            out.push_str(" = ");
            out.push_str(&element.render(&self.options, 1));
            out.push_str(";\n\n");
        }
        out
    }

    fn write_header(&self, out: &mut String) {
        out.push('/');
        out.push_str(&self.banner);
        out.push('\n');
        out.push_str(" * Auto generated data file\n");
        for line in &self.prefix_text {
            out.push_str(" * ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(" * Creation Date: ");
        out.push_str(&creation_stamp());
        out.push('\n');
        out.push(' ');
        out.push_str(&self.banner);
        out.push_str("/\n\n");
    }
}

impl Default for DataFile {
    fn default() -> Self {
        Self::new()
    }
}

fn creation_stamp() -> String {
    let now = OffsetDateTime::now_utc();
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}
