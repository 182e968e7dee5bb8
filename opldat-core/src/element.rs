//! Data file elements and their rendering.
//!
//! An [`Element`] is the unit of the data model: a scalar constant or a
//! composite (set, tuple, indexed array). Elements render their *content*
//! only, the right-hand side of a `name = content;` statement; pairing a
//! content with a name is the job of [`NamedElement`].

use crate::render::RenderOptions;

/// A member of a set literal.
///
/// Members are written as bare tokens, so string members come out unquoted.
/// Membership sets usually hold generated identifiers that other statements
/// use as index keys, and those must not be quoted.
#[derive(Debug, Clone, PartialEq)]
pub enum SetItem {
    Str(String),
    Int(i64),
    Float(f64),
}

impl SetItem {
    /// The bare token form of this member.
    pub fn token(&self) -> String {
        match self {
            Self::Str(value) => value.clone(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => float_token(*value),
        }
    }
}

impl From<&str> for SetItem {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for SetItem {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for SetItem {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SetItem {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for SetItem {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// An unordered collection of scalar members, rendered with `{ }`.
///
/// Duplicate members are the caller's responsibility; the set stores and
/// renders exactly what it was given, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Set {
    members: Vec<SetItem>,
}

impl Set {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from any iterator of member values.
    pub fn from_members<I, M>(members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<SetItem>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a member.
    pub fn member(mut self, member: impl Into<SetItem>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Render the set literal.
    pub fn render(&self, options: &RenderOptions, level: usize) -> String {
        if self.members.is_empty() {
            return "{}".to_string();
        }

        if !options.pretty {
            let body = self
                .members
                .iter()
                .map(SetItem::token)
                .collect::<Vec<_>>()
                .join(",");
            return format!("{{{body}}}");
        }

        let inner = options.indent.prefix(level + 1);
        let mut out = String::from("{\n");
        for member in &self.members {
            out.push_str(&inner);
            out.push_str(&member.token());
            out.push_str(",\n");
        }
        out.push_str(&options.indent.prefix(level));
        out.push('}');
        out
    }
}

/// An ordered, fixed-arity sequence of elements, rendered with `< >`.
///
/// Values may be heterogeneous; whether a particular combination is
/// meaningful to the consuming model is not checked here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tuple {
    values: Vec<Element>,
}

impl Tuple {
    pub fn new(values: Vec<Element>) -> Self {
        Self { values }
    }

    /// Append a value.
    pub fn value(mut self, value: impl Into<Element>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render the tuple literal. Children are rendered one level deeper.
    pub fn render(&self, options: &RenderOptions, level: usize) -> String {
        if self.values.is_empty() {
            return "<>".to_string();
        }

        if !options.pretty {
            let body = self
                .values
                .iter()
                .map(|value| value.render(options, level + 1))
                .collect::<Vec<_>>()
                .join(",");
            return format!("<{body}>");
        }

        let inner = options.indent.prefix(level + 1);
        let mut out = String::from("<\n");
        for value in &self.values {
            out.push_str(&inner);
            out.push_str(&value.render(options, level + 1));
            out.push_str(",\n");
        }
        out.push_str(&options.indent.prefix(level));
        out.push('>');
        out
    }
}

/// An ordered sequence of named elements, each addressable by its own
/// identifier, rendered with `[ ]` and explicit index labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedArray {
    items: Vec<NamedElement>,
}

impl IndexedArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named item.
    pub fn push(&mut self, item: NamedElement) {
        self.items.push(item);
    }

    /// Append an item, naming it here.
    pub fn item(mut self, name: impl Into<String>, element: impl Into<Element>) -> Self {
        self.items.push(NamedElement::new(name, element));
        self
    }

    pub fn items(&self) -> &[NamedElement] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the array literal. Each item keeps its own name as index key.
    pub fn render(&self, options: &RenderOptions, level: usize) -> String {
        if self.items.is_empty() {
            return "[]".to_string();
        }

        if !options.pretty {
            let body = self
                .items
                .iter()
                .map(|item| format!("{}: {}", item.name(), item.render(options, level + 1)))
                .collect::<Vec<_>>()
                .join(",");
            return format!("[{body}]");
        }

        let inner = options.indent.prefix(level + 1);
        let mut out = String::from("[\n");
        for item in &self.items {
            out.push_str(&inner);
            out.push_str(item.name());
            out.push_str(": ");
            out.push_str(&item.render(options, level + 1));
            out.push_str(",\n");
        }
        out.push_str(&options.indent.prefix(level));
        out.push(']');
        out
    }
}

/// A unit of the data model.
///
/// Scalar variants render to a single token; composite variants render
/// recursively. `render` is pure: the same element with the same arguments
/// always produces the same output.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// String constant, quoted in output.
    Str(String),
    /// Integer constant.
    Int(i64),
    /// Float constant, always written with a decimal point.
    Float(f64),
    Set(Set),
    Tuple(Tuple),
    Array(IndexedArray),
}

impl Element {
    /// Render this element's content.
    ///
    /// `level` is the nesting depth of the caller; composites indent their
    /// children one level deeper than that. The output never includes a
    /// name or a trailing `;`.
    pub fn render(&self, options: &RenderOptions, level: usize) -> String {
        match self {
            Self::Str(value) => format!("\"{value}\""),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => float_token(*value),
            Self::Set(set) => set.render(options, level),
            Self::Tuple(tuple) => tuple.render(options, level),
            Self::Array(array) => array.render(options, level),
        }
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Set> for Element {
    fn from(value: Set) -> Self {
        Self::Set(value)
    }
}

impl From<Tuple> for Element {
    fn from(value: Tuple) -> Self {
        Self::Tuple(value)
    }
}

impl From<IndexedArray> for Element {
    fn from(value: IndexedArray) -> Self {
        Self::Array(value)
    }
}

/// An element paired with its identifier.
///
/// The name is fixed at construction. It must be a valid identifier in the
/// data file syntax (non-empty, no whitespace or reserved punctuation) and
/// unique within its container; neither property is checked here, and a
/// violation surfaces as malformed output.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedElement {
    name: String,
    element: Element,
}

impl NamedElement {
    pub fn new(name: impl Into<String>, element: impl Into<Element>) -> Self {
        Self {
            name: name.into(),
            element: element.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Render the element content. The name is the container's concern.
    pub fn render(&self, options: &RenderOptions, level: usize) -> String {
        self.element.render(options, level)
    }
}

/// Fixed-notation float token. Whole values keep a trailing `.0` so the
/// consumer reads them as floats.
fn float_token(value: f64) -> String {
    let mut text = value.to_string();
    if text.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        text.push_str(".0");
    }
    text
}
