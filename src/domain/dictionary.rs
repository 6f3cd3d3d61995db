//! Static lookup tables joining builder-service vocabulary to host vocabulary
//!
//! Every table is a process-wide constant exposed through read-only
//! accessors; nothing here is mutated after compilation.

/// An ability score, keyed both by the builder's long name and the host's
/// three-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ability {
    pub long: &'static str,
    pub value: &'static str,
}

/// A skill, keyed both by the builder's display label and the host's
/// internal skill id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub label: &'static str,
    pub name: &'static str,
}

/// A limited-use reset schedule, keyed by the builder's numeric reset-type id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetType {
    pub id: i32,
    pub value: &'static str,
}

/// Spell-slot progression tier for a casting class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellProgression {
    pub name: &'static str,
    pub value: &'static str,
}

const ABILITIES: &[Ability] = &[
    Ability { long: "strength", value: "str" },
    Ability { long: "dexterity", value: "dex" },
    Ability { long: "constitution", value: "con" },
    Ability { long: "intelligence", value: "int" },
    Ability { long: "wisdom", value: "wis" },
    Ability { long: "charisma", value: "cha" },
];

const SKILLS: &[Skill] = &[
    Skill { label: "Acrobatics", name: "acr" },
    Skill { label: "Animal Handling", name: "ani" },
    Skill { label: "Arcana", name: "arc" },
    Skill { label: "Athletics", name: "ath" },
    Skill { label: "Deception", name: "dec" },
    Skill { label: "History", name: "his" },
    Skill { label: "Insight", name: "ins" },
    Skill { label: "Intimidation", name: "itm" },
    Skill { label: "Investigation", name: "inv" },
    Skill { label: "Medicine", name: "med" },
    Skill { label: "Nature", name: "nat" },
    Skill { label: "Perception", name: "prc" },
    Skill { label: "Performance", name: "prf" },
    Skill { label: "Persuasion", name: "per" },
    Skill { label: "Religion", name: "rel" },
    Skill { label: "Sleight of Hand", name: "slt" },
    Skill { label: "Stealth", name: "ste" },
    Skill { label: "Survival", name: "sur" },
];

const RESETS: &[ResetType] = &[
    ResetType { id: 1, value: "sr" },
    ResetType { id: 2, value: "lr" },
    ResetType { id: 3, value: "day" },
    ResetType { id: 4, value: "charges" },
];

const SPELL_PROGRESSION: &[SpellProgression] = &[
    SpellProgression { name: "Artificer", value: "artificer" },
    SpellProgression { name: "Bard", value: "full" },
    SpellProgression { name: "Cleric", value: "full" },
    SpellProgression { name: "Druid", value: "full" },
    SpellProgression { name: "Paladin", value: "half" },
    SpellProgression { name: "Ranger", value: "half" },
    SpellProgression { name: "Sorcerer", value: "full" },
    SpellProgression { name: "Warlock", value: "pact" },
    SpellProgression { name: "Wizard", value: "full" },
];

/// All ability scores, in the host's canonical order
pub fn abilities() -> &'static [Ability] {
    ABILITIES
}

/// Resolve a skill by the builder's display label (e.g. "Animal Handling")
pub fn skill_by_label(label: &str) -> Option<&'static Skill> {
    SKILLS.iter().find(|skill| skill.label == label)
}

/// Resolve a skill by the host's internal id (e.g. "ani")
pub fn skill_by_name(name: &str) -> Option<&'static Skill> {
    SKILLS.iter().find(|skill| skill.name == name)
}

/// Resolve a limited-use reset schedule by the builder's reset-type id
pub fn reset_type(id: i32) -> Option<&'static ResetType> {
    RESETS.iter().find(|reset| reset.id == id)
}

/// Resolve the spell-slot progression tier for a class name
pub fn spell_progression(class_name: &str) -> Option<&'static SpellProgression> {
    SPELL_PROGRESSION.iter().find(|cls| cls.name == class_name)
}
