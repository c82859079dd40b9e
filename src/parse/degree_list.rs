//! Degree-list sub-parser: the interior of `(1,b3,*5)`.

use crate::models::label::DegreeList;

/// Split a degree-list interior into included and omitted degrees.
///
/// The interior is comma-separated with an optional space after each comma.
/// A `*` prefix marks a degree to omit; the marker is stripped and the
/// remainder trimmed. Everything else is an include degree, trimmed. Order
/// and duplicates are preserved; an empty interior yields two empty lists.
pub fn parse_degree_list(interior: &str) -> DegreeList {
    let mut degrees = DegreeList::default();
    if interior.is_empty() {
        return degrees;
    }
    for raw in interior.split(',') {
        let token = raw.trim_matches(' ');
        match token.strip_prefix('*') {
            Some(rest) => degrees.omit.push(rest.trim_matches(' ').to_string()),
            None => degrees.include.push(token.to_string()),
        }
    }
    degrees
}
