use crate::error::{NavigationError, Result};
use crate::value::Value;

/// Outcome of resolving a member by name against a scope
///
/// Only the first element with the name is consulted.
#[derive(Debug, PartialEq)]
pub enum Member<'a, E> {
    /// A leaf, with its scalar (which may itself be absent)
    Leaf(Option<Value>),

    /// A composite; it has no scalar of its own
    Composite(&'a [E]),

    /// Nothing in scope has the name
    Unknown,
}

impl<'a, E> Member<'a, E> {
    /// Whether some element in scope carried the name
    pub fn is_known(&self) -> bool {
        !matches!(self, Member::Unknown)
    }

    /// The resolved scalar; composites and unknown members have none
    pub fn value(&self) -> Option<&Value> {
        match self {
            Member::Leaf(value) => value.as_ref(),
            Member::Composite(_) | Member::Unknown => None,
        }
    }

    /// Turn an unknown member into an error, keeping "known but no value"
    /// as `Ok(None)`
    pub fn into_result(self, name: &str) -> Result<Option<Value>> {
        match self {
            Member::Leaf(value) => Ok(value),
            Member::Composite(_) => Ok(None),
            Member::Unknown => Err(NavigationError::unknown_member(name)),
        }
    }
}

impl<'a, E> Clone for Member<'a, E> {
    fn clone(&self) -> Self {
        match self {
            Member::Leaf(value) => Member::Leaf(value.clone()),
            Member::Composite(children) => Member::Composite(children),
            Member::Unknown => Member::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_results() {
        let leaf: Member<'_, ()> = Member::Leaf(Some(Value::Int(101)));
        assert!(leaf.is_known());
        assert_eq!(leaf.value(), Some(&Value::Int(101)));
        assert_eq!(leaf.into_result("ELM1"), Ok(Some(Value::Int(101))));

        let composite: Member<'_, ()> = Member::Composite(&[]);
        assert!(composite.is_known());
        assert_eq!(composite.value(), None);
        assert_eq!(composite.into_result("ROOT"), Ok(None));

        let unknown: Member<'_, ()> = Member::Unknown;
        assert!(!unknown.is_known());
        assert_eq!(
            unknown.into_result("HOGE"),
            Err(NavigationError::UnknownMember {
                name: "HOGE".to_string()
            })
        );
    }
}
