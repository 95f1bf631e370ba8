use crate::definition_index::operation_selection_set;
use crate::definition_index::FragmentTable;
use crate::ignore_policy::is_introspection_field;
use crate::ast;
use crate::loc;
use crate::DepthLimitError;
use crate::DepthNode;
use crate::IgnorePolicy;
use crate::ValidationContext;
use crate::ValidationError;
use std::collections::HashMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, DepthLimitError>;

/// Measures the depth of a single operation.
///
/// Depth grows by one for every field that has a sub-selection. Fragment
/// spreads, inline fragments, fragment definitions and operation definitions
/// are depth-neutral: they only take the max over their selections. Sibling
/// selections never add to each other.
///
/// The first time a path goes past `max_depth` a [`ValidationError`] is
/// reported to the context and that path stops descending. Later paths of the
/// same operation keep being measured but are not reported again.
///
/// A fragment's depth depends only on the depth it is spread at, so each
/// `(fragment, depth_so_far)` pair is measured once per evaluator. Before a
/// fragment is first measured, every fragment reachable from it (through
/// fields that are not ignored) is checked for spread cycles.
pub struct DepthEvaluator<'doc, 'a> {
    acyclic_fragments: HashSet<&'doc str>,
    context: &'a mut dyn ValidationContext<'doc>,
    fragment_depths: HashMap<(&'doc str, u32), u32>,
    fragments: &'a FragmentTable<'doc>,
    ignore: &'a IgnorePolicy,
    max_depth: u32,
    operation_name: &'a str,
    violation_reported: bool,
}
impl<'doc, 'a> DepthEvaluator<'doc, 'a> {
    pub fn new(
        context: &'a mut dyn ValidationContext<'doc>,
        fragments: &'a FragmentTable<'doc>,
        ignore: &'a IgnorePolicy,
        max_depth: u32,
        operation_name: &'a str,
    ) -> Self {
        Self {
            acyclic_fragments: HashSet::new(),
            context,
            fragment_depths: HashMap::new(),
            fragments,
            ignore,
            max_depth,
            operation_name,
            violation_reported: false,
        }
    }

    /// Compute the maximum depth reachable from `node`, given that `node`
    /// itself sits `depth_so_far` field levels below the operation root.
    pub fn determine_depth(
        &mut self,
        node: DepthNode<'doc>,
        depth_so_far: u32,
    ) -> Result<u32> {
        if depth_so_far > self.max_depth {
            self.report_max_depth_exceeded(&node);
            return Ok(0);
        }

        match node {
            DepthNode::Field(field) => {
                if self.is_ignored_field(field) {
                    log::trace!(
                        "Ignoring field `{}` in operation '{}'.",
                        field.name,
                        self.operation_name,
                    );
                    return Ok(0);
                }

                if field.selection_set.items.is_empty() {
                    return Ok(0);
                }

                let deepest = self.max_selection_depth(
                    &field.selection_set,
                    depth_so_far + 1,
                )?;
                Ok(1 + deepest)
            },

            DepthNode::FragmentSpread(spread) => {
                let fragment_name = spread.fragment_name.as_str();
                let Some(frag_def) = self.fragments.get(fragment_name).copied() else {
                    return Err(DepthLimitError::UndefinedFragment {
                        fragment_name: fragment_name.to_string(),
                        operation_name: self.operation_name.to_string(),
                        spread_location: self.location_of(&node),
                    });
                };

                let cache_key = (fragment_name, depth_so_far);
                if let Some(depth) = self.fragment_depths.get(&cache_key) {
                    return Ok(*depth);
                }

                self.check_fragment_cycles(fragment_name, spread.position, &mut vec![])?;
                let depth = self.determine_depth(
                    DepthNode::FragmentDefinition(frag_def),
                    depth_so_far,
                )?;
                self.fragment_depths.insert(cache_key, depth);
                Ok(depth)
            },

            DepthNode::InlineFragment(inline) =>
                self.max_selection_depth(&inline.selection_set, depth_so_far),

            DepthNode::FragmentDefinition(frag_def) =>
                self.max_selection_depth(&frag_def.selection_set, depth_so_far),

            DepthNode::OperationDefinition(op_def) =>
                self.max_selection_depth(operation_selection_set(op_def), depth_so_far),
        }
    }

    /// Whether a depth violation has been reported for this operation.
    pub fn violation_reported(&self) -> bool {
        self.violation_reported
    }

    /// Depth-first walk of the fragments reachable from `fragment_name`,
    /// failing on the first spread that re-enters a fragment on `path`.
    ///
    /// Fragments whose whole reachable graph was walked without finding a
    /// cycle are remembered and not walked again. Undefined fragments are
    /// skipped here and reported when measured.
    fn check_fragment_cycles(
        &mut self,
        fragment_name: &'doc str,
        spread_pos: ast::Pos,
        path: &mut Vec<&'doc str>,
    ) -> Result<()> {
        if self.acyclic_fragments.contains(fragment_name) {
            return Ok(());
        }

        if let Some(cycle_start) = path.iter().position(|name| *name == fragment_name) {
            let mut cycle_path: Vec<String> =
                path[cycle_start..]
                    .iter()
                    .map(|name| name.to_string())
                    .collect();
            cycle_path.push(fragment_name.to_string());
            return Err(DepthLimitError::FragmentCycle {
                cycle_path,
                operation_name: self.operation_name.to_string(),
                spread_location: loc::SourceLocation::from_pos(
                    self.context.file_path(),
                    spread_pos,
                ),
            });
        }

        let Some(frag_def) = self.fragments.get(fragment_name).copied() else {
            return Ok(());
        };

        path.push(fragment_name);
        self.check_selection_set_cycles(&frag_def.selection_set, path)?;
        path.pop();

        self.acyclic_fragments.insert(fragment_name);
        Ok(())
    }

    fn check_selection_set_cycles(
        &mut self,
        selection_set: &'doc ast::query::SelectionSet,
        path: &mut Vec<&'doc str>,
    ) -> Result<()> {
        for selection in &selection_set.items {
            use ast::query::Selection;
            match selection {
                Selection::Field(field) => {
                    if !self.is_ignored_field(field) {
                        self.check_selection_set_cycles(&field.selection_set, path)?;
                    }
                },

                Selection::FragmentSpread(spread) => {
                    self.check_fragment_cycles(
                        spread.fragment_name.as_str(),
                        spread.position,
                        path,
                    )?;
                },

                Selection::InlineFragment(inline) => {
                    self.check_selection_set_cycles(&inline.selection_set, path)?;
                },
            }
        }
        Ok(())
    }

    fn is_ignored_field(&self, field: &ast::query::Field) -> bool {
        is_introspection_field(&field.name) || self.ignore.is_ignored(&field.name)
    }

    fn max_selection_depth(
        &mut self,
        selection_set: &'doc ast::query::SelectionSet,
        depth_so_far: u32,
    ) -> Result<u32> {
        let mut deepest = 0;
        for selection in &selection_set.items {
            let depth = self.determine_depth(selection.into(), depth_so_far)?;
            deepest = deepest.max(depth);
        }
        Ok(deepest)
    }

    fn location_of(&self, node: &DepthNode<'doc>) -> loc::SourceLocation {
        loc::SourceLocation::from_pos(self.context.file_path(), node.position())
    }

    fn report_max_depth_exceeded(&mut self, node: &DepthNode<'doc>) {
        if self.violation_reported {
            return;
        }
        self.violation_reported = true;

        let location = self.location_of(node);
        log::debug!(
            "Operation '{}' exceeds maximum depth {} at {location}.",
            self.operation_name,
            self.max_depth,
        );
        self.context.report_error(ValidationError::new(
            format!(
                "'{}' exceeds maximum operation depth of {}",
                self.operation_name,
                self.max_depth,
            ),
            vec![location],
        ));
    }
}
