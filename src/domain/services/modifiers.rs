//! Modifier filtering shared by the class and item parsers

use crate::domain::entities::{CharacterData, Modifier};

/// All modifiers the character's class levels grant
pub fn class_modifiers(character: &CharacterData) -> &[Modifier] {
    &character.modifiers.class_modifiers
}

/// Filter modifiers by type, subtype and restriction
///
/// A modifier passes only when its restriction is one of
/// `allowed_restrictions`; pass `[None, Some("")]` to keep unrestricted
/// modifiers and drop conditional ones.
pub fn filter<'a>(
    modifiers: &'a [Modifier],
    kind: &str,
    sub_type: &str,
    allowed_restrictions: &[Option<&str>],
) -> Vec<&'a Modifier> {
    modifiers
        .iter()
        .filter(|modifier| {
            modifier.kind == kind
                && modifier.sub_type.as_deref() == Some(sub_type)
                && allowed_restrictions.contains(&modifier.restriction.as_deref())
        })
        .collect()
}
