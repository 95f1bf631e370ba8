use crate::ast;
use indexmap::IndexMap;
use std::collections::HashMap;

pub type FragmentTable<'doc> = HashMap<&'doc str, &'doc ast::query::FragmentDefinition>;
pub type OperationTable<'doc> = IndexMap<String, &'doc ast::query::OperationDefinition>;

/// Lookup tables for the top-level definitions of a single executable
/// document.
///
/// Built fresh for every validation pass and never mutated afterwards.
#[derive(Debug)]
pub struct DefinitionIndex<'doc> {
    fragments: FragmentTable<'doc>,
    operations: OperationTable<'doc>,
}
impl<'doc> DefinitionIndex<'doc> {
    /// Partition the document's definitions into a fragment table and an
    /// operation table in a single pass.
    ///
    /// Operations are keyed by name, or by `""` when anonymous. If two
    /// operations share a key the later one replaces the earlier one. The
    /// same applies to fragments sharing a name.
    pub fn from_document(document: &'doc ast::query::Document) -> Self {
        let mut fragments = FragmentTable::new();
        let mut operations = OperationTable::new();

        for def in &document.definitions {
            use ast::query::Definition as Def;
            match def {
                Def::Fragment(frag_def) => {
                    fragments.insert(frag_def.name.as_str(), frag_def);
                },

                Def::Operation(op_def) => {
                    let key = operation_key(op_def).to_string();
                    if let Some(shadowed) = operations.insert(key.clone(), op_def) {
                        log::warn!(
                            "Operation '{key}' at {:?} is shadowed by a later \
                            operation with the same key at {:?}; only the \
                            latter is measured.",
                            operation_position(shadowed),
                            operation_position(op_def),
                        );
                    }
                },
            }
        }

        log::trace!(
            "Indexed {} fragments and {} operations.",
            fragments.len(),
            operations.len(),
        );

        Self {
            fragments,
            operations,
        }
    }

    pub fn fragments(&self) -> &FragmentTable<'doc> {
        &self.fragments
    }

    pub fn operations(&self) -> &OperationTable<'doc> {
        &self.operations
    }
}

/// The key an operation is reported under: its name, or `""` when anonymous.
pub fn operation_key(op_def: &ast::query::OperationDefinition) -> &str {
    use ast::query::OperationDefinition as OpDef;
    let name = match op_def {
        OpDef::SelectionSet(_) => None,
        OpDef::Query(ast::query::Query { name, .. })
        | OpDef::Mutation(ast::query::Mutation { name, .. })
        | OpDef::Subscription(ast::query::Subscription { name, .. }) => name.as_deref(),
    };
    name.unwrap_or("")
}

pub(crate) fn operation_position(op_def: &ast::query::OperationDefinition) -> ast::Pos {
    use ast::query::OperationDefinition as OpDef;
    match op_def {
        OpDef::SelectionSet(ast::query::SelectionSet { span: (pos, _), .. }) => *pos,
        OpDef::Query(ast::query::Query { position, .. })
        | OpDef::Mutation(ast::query::Mutation { position, .. })
        | OpDef::Subscription(ast::query::Subscription { position, .. }) => *position,
    }
}

pub(crate) fn operation_selection_set(
    op_def: &ast::query::OperationDefinition,
) -> &ast::query::SelectionSet {
    use ast::query::OperationDefinition as OpDef;
    match op_def {
        OpDef::SelectionSet(selection_set) => selection_set,
        OpDef::Query(ast::query::Query { selection_set, .. })
        | OpDef::Mutation(ast::query::Mutation { selection_set, .. })
        | OpDef::Subscription(ast::query::Subscription { selection_set, .. }) => selection_set,
    }
}
