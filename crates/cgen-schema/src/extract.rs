//! Component discovery and prop extraction

use std::path::Path;

use tree_sitter::Node;

use crate::error::SchemaError;
use crate::language::SourceLanguage;
use crate::resolver::{named_children, node_text, LocalTypeResolver, TypeResolution, TypeResolver};
use crate::schema::PropSchema;

/// Extract the prop schema of the component defined in `path`
///
/// # Errors
/// `SchemaError::Unreadable` if the file cannot be read. Every other failure
/// (syntax the grammar rejects, no component, unresolvable props type)
/// yields an empty schema.
pub fn extract_schema(path: impl AsRef<Path>) -> Result<PropSchema, SchemaError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| SchemaError::unreadable(path, e))?;
    Ok(extract_schema_from_source(&source, SourceLanguage::from_path(path)))
}

/// Extract the prop schema from in-memory source text
#[must_use]
pub fn extract_schema_from_source(source: &str, language: SourceLanguage) -> PropSchema {
    let mut parser = tree_sitter::Parser::new();
    if let Err(err) = parser.set_language(&language.tree_sitter_language()) {
        tracing::warn!(%err, %language, "grammar unavailable, skipping prop extraction");
        return PropSchema::new();
    }

    let Some(tree) = parser.parse(source, None) else {
        tracing::warn!(%language, "parser produced no tree, skipping prop extraction");
        return PropSchema::new();
    };
    let root = tree.root_node();

    let Some(component) = component_declaration(root) else {
        tracing::debug!("no component declaration found");
        return PropSchema::new();
    };

    let Some(type_name) = first_type_reference(component, source) else {
        tracing::debug!("component declares no props type");
        return PropSchema::new();
    };

    match LocalTypeResolver::new(root, source).resolve(type_name) {
        TypeResolution::Resolved(fields) => fields.into_iter().collect(),
        TypeResolution::Unresolved => {
            tracing::debug!(type_name, "props type not resolvable locally");
            PropSchema::new()
        }
    }
}

/// First exported value declaration, else the first top-level variable
fn component_declaration(root: Node<'_>) -> Option<Node<'_>> {
    let top_level = named_children(root);

    top_level
        .iter()
        .find_map(|node| exported_value(*node))
        .or_else(|| {
            top_level.iter().find_map(|node| match node.kind() {
                "lexical_declaration" | "variable_declaration" => first_declarator(*node),
                _ => None,
            })
        })
}

fn exported_value(node: Node<'_>) -> Option<Node<'_>> {
    if node.kind() != "export_statement" {
        return None;
    }

    if let Some(decl) = node.child_by_field_name("declaration") {
        return match decl.kind() {
            "lexical_declaration" | "variable_declaration" => first_declarator(decl),
            "function_declaration" | "generator_function_declaration" => Some(decl),
            // type, interface and enum exports are not values
            _ => None,
        };
    }

    node.child_by_field_name("value").filter(|value| {
        matches!(value.kind(), "arrow_function" | "function_expression" | "function")
    })
}

fn first_declarator(decl: Node<'_>) -> Option<Node<'_>> {
    named_children(decl)
        .into_iter()
        .find(|child| child.kind() == "variable_declarator")
}

/// First unqualified type name referenced in document order
///
/// Qualified names (`React.FC`) and generic parameter lists are skipped so
/// `React.FC<ButtonProps>` and `List<T extends Item>(props: ListProps<T>)`
/// both land on the props type.
fn first_type_reference<'src>(node: Node<'_>, source: &'src str) -> Option<&'src str> {
    match node.kind() {
        "type_identifier" => Some(node_text(node, source)),
        "nested_type_identifier" | "type_parameters" => None,
        _ => named_children(node)
            .into_iter()
            .find_map(|child| first_type_reference(child, source)),
    }
}
