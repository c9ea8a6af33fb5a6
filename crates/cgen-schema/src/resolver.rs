//! Type name resolution against a parsed source file
//!
//! Resolution never fails: a name either resolves to a list of fields or it
//! does not. Callers decide what an unresolved name means.

use std::collections::HashMap;

use tree_sitter::Node;

use crate::UNKNOWN_TYPE;

/// Recursion limit for alias chains (`type A = B; type B = A;` terminates)
const MAX_RESOLUTION_DEPTH: usize = 8;

/// One declared input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropField {
    /// Field name as written (quotes stripped)
    pub name: String,
    /// Textual rendering of the declared type
    pub type_display: String,
}

impl PropField {
    /// Create field
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, type_display: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_display: type_display.into(),
        }
    }
}

/// Outcome of resolving a type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeResolution {
    /// Name resolved to a record shape with these fields
    Resolved(Vec<PropField>),
    /// Name is not declared locally or is not a record shape
    Unresolved,
}

impl TypeResolution {
    /// Check if resolution succeeded
    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Fields if resolved, empty otherwise
    #[must_use]
    pub fn into_fields(self) -> Vec<PropField> {
        match self {
            Self::Resolved(fields) => fields,
            Self::Unresolved => Vec::new(),
        }
    }
}

/// Capability to turn a referenced type name into fields
pub trait TypeResolver {
    /// Resolve a type name
    fn resolve(&self, type_name: &str) -> TypeResolution;
}

#[derive(Debug, Clone, Copy)]
enum Declaration<'tree> {
    /// Right-hand side of `type X = ...`
    Alias(Node<'tree>),
    /// Whole `interface X ... { ... }` node
    Interface(Node<'tree>),
}

/// Resolves names against top-level aliases and interfaces of one file
///
/// Handles object literal types, interfaces (including local `extends`),
/// intersections of resolvable parts, parenthesized types and alias chains.
#[derive(Debug)]
pub struct LocalTypeResolver<'tree> {
    source: &'tree str,
    declarations: HashMap<String, Declaration<'tree>>,
}

impl<'tree> LocalTypeResolver<'tree> {
    /// Index the top-level type declarations under `root`
    #[must_use]
    pub fn new(root: Node<'tree>, source: &'tree str) -> Self {
        let mut declarations = HashMap::new();

        for child in named_children(root) {
            let decl = if child.kind() == "export_statement" {
                match child.child_by_field_name("declaration") {
                    Some(decl) => decl,
                    None => continue,
                }
            } else {
                child
            };

            let entry = match decl.kind() {
                "type_alias_declaration" => {
                    decl.child_by_field_name("value").map(Declaration::Alias)
                }
                "interface_declaration" => Some(Declaration::Interface(decl)),
                _ => None,
            };

            if let (Some(entry), Some(name)) = (entry, decl.child_by_field_name("name")) {
                // First declaration wins, matching how a reader scans the file
                declarations
                    .entry(node_text(name, source).to_string())
                    .or_insert(entry);
            }
        }

        Self { source, declarations }
    }

    fn resolve_named(&self, name: &str, depth: usize) -> Option<Vec<PropField>> {
        if depth > MAX_RESOLUTION_DEPTH {
            tracing::debug!(name, "type resolution depth exceeded");
            return None;
        }
        match *self.declarations.get(name)? {
            Declaration::Alias(value) => self.resolve_type(value, depth + 1),
            Declaration::Interface(decl) => Some(self.resolve_interface(decl, depth + 1)),
        }
    }

    fn resolve_type(&self, node: Node<'tree>, depth: usize) -> Option<Vec<PropField>> {
        match node.kind() {
            "object_type" => Some(collect_fields(node, self.source)),
            "parenthesized_type" => {
                first_named_child(node).and_then(|inner| self.resolve_type(inner, depth))
            }
            "type_identifier" => self.resolve_named(node_text(node, self.source), depth),
            "generic_type" => node
                .child_by_field_name("name")
                .and_then(|name| self.resolve_type(name, depth)),
            "intersection_type" => {
                let mut fields = Vec::new();
                let mut any_resolved = false;
                for part in named_children(node) {
                    if let Some(part_fields) = self.resolve_type(part, depth) {
                        any_resolved = true;
                        fields.extend(part_fields);
                    }
                }
                any_resolved.then_some(fields)
            }
            _ => None,
        }
    }

    fn resolve_interface(&self, decl: Node<'tree>, depth: usize) -> Vec<PropField> {
        let mut fields = Vec::new();

        for child in named_children(decl) {
            if child.kind() == "extends_type_clause" {
                for parent in named_children(child) {
                    if let Some(inherited) = self.resolve_type(parent, depth) {
                        fields.extend(inherited);
                    }
                }
            }
        }

        if let Some(body) = decl.child_by_field_name("body") {
            fields.extend(collect_fields(body, self.source));
        }

        fields
    }
}

impl TypeResolver for LocalTypeResolver<'_> {
    fn resolve(&self, type_name: &str) -> TypeResolution {
        match self.resolve_named(type_name, 0) {
            Some(fields) => TypeResolution::Resolved(fields),
            None => TypeResolution::Unresolved,
        }
    }
}

/// Collect property and method signatures of an object type or interface body
fn collect_fields(body: Node<'_>, source: &str) -> Vec<PropField> {
    named_children(body)
        .into_iter()
        .filter_map(|member| match member.kind() {
            "property_signature" => {
                let name = member_name(member, source)?;
                let type_display = member
                    .child_by_field_name("type")
                    .and_then(first_named_child)
                    .map_or_else(|| UNKNOWN_TYPE.to_string(), |ty| display_text(ty, source));
                Some(PropField::new(name, type_display))
            }
            "method_signature" => {
                let name = member_name(member, source)?;
                let params = member
                    .child_by_field_name("parameters")
                    .map_or_else(|| "()".to_string(), |p| display_text(p, source));
                let ret = member
                    .child_by_field_name("return_type")
                    .and_then(first_named_child)
                    .map_or_else(|| "void".to_string(), |ty| display_text(ty, source));
                Some(PropField::new(name, format!("{params} => {ret}")))
            }
            _ => None,
        })
        .collect()
}

fn member_name(member: Node<'_>, source: &str) -> Option<String> {
    let name = member.child_by_field_name("name")?;
    let text = node_text(name, source).trim_matches(|c| c == '"' || c == '\'');
    (!text.is_empty()).then(|| text.to_string())
}

pub(crate) fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

pub(crate) fn first_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let first = node.named_children(&mut cursor).next();
    first
}

pub(crate) fn node_text<'src>(node: Node<'_>, source: &'src str) -> &'src str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Node text with whitespace runs collapsed to single spaces
pub(crate) fn display_text(node: Node<'_>, source: &str) -> String {
    node_text(node, source)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
