use crate::ast;
use crate::definition_index::operation_position;

/// A node of an executable document that contributes to (or passes through)
/// depth measurement.
#[derive(Clone, Copy, Debug)]
pub enum DepthNode<'doc> {
    Field(&'doc ast::query::Field),
    FragmentDefinition(&'doc ast::query::FragmentDefinition),
    FragmentSpread(&'doc ast::query::FragmentSpread),
    InlineFragment(&'doc ast::query::InlineFragment),
    OperationDefinition(&'doc ast::query::OperationDefinition),
}
impl<'doc> DepthNode<'doc> {
    pub fn position(&self) -> ast::Pos {
        match self {
            Self::Field(field) => field.position,
            Self::FragmentDefinition(frag_def) => frag_def.position,
            Self::FragmentSpread(spread) => spread.position,
            Self::InlineFragment(inline) => inline.position,
            Self::OperationDefinition(op_def) => operation_position(op_def),
        }
    }
}

impl<'doc> std::convert::From<&'doc ast::query::Selection> for DepthNode<'doc> {
    fn from(value: &'doc ast::query::Selection) -> Self {
        use ast::query::Selection;
        match value {
            Selection::Field(field) => Self::Field(field),
            Selection::FragmentSpread(spread) => Self::FragmentSpread(spread),
            Selection::InlineFragment(inline) => Self::InlineFragment(inline),
        }
    }
}
