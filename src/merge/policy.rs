//! Declarative merge policy.
//!
//! A [`MergeRule`] says how deep an override reaches into the base:
//!
//! ```text
//! root                 Shallow
//! ├── brand            Shallow
//! ├── theme            Shallow
//! ├── navigation       Shallow   (links: Replace)
//! ├── hero             Shallow
//! │   ├── title        Shallow
//! │   └── badge        Shallow
//! ├── features         Shallow
//! ├── howItWorks       Shallow
//! ├── cta              Shallow
//! │   └── form         Shallow
//! ├── footer           Shallow
//! ├── meta             Shallow
//! └── forms            Shallow
//! ```
//!
//! Keys without an entry are replaced wholesale, arrays included.

use serde_json::Value;

/// How an override value is combined with the base value at one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// Override value replaces the base value.
    Replace,
    /// Override keys replace base keys one by one; unspecified base keys
    /// survive. Listed keys recurse with their own rule.
    Shallow(&'static [(&'static str, MergeRule)]),
}

impl MergeRule {
    /// Shallow merge with no nested rules.
    pub const SHALLOW: MergeRule = MergeRule::Shallow(&[]);

    /// Rule for a child key. Unlisted keys are replaced.
    pub fn child(&self, key: &str) -> &MergeRule {
        match self {
            MergeRule::Replace => &MergeRule::Replace,
            MergeRule::Shallow(children) => children
                .iter()
                .find(|(name, _)| *name == key)
                .map_or(&MergeRule::Replace, |(_, rule)| rule),
        }
    }
}

/// Merge policy of a page configuration.
pub const PAGE_MERGE: MergeRule = MergeRule::Shallow(&[
    ("brand", MergeRule::SHALLOW),
    ("theme", MergeRule::SHALLOW),
    ("navigation", MergeRule::SHALLOW),
    (
        "hero",
        MergeRule::Shallow(&[("title", MergeRule::SHALLOW), ("badge", MergeRule::SHALLOW)]),
    ),
    ("features", MergeRule::SHALLOW),
    ("howItWorks", MergeRule::SHALLOW),
    ("cta", MergeRule::Shallow(&[("form", MergeRule::SHALLOW)])),
    ("footer", MergeRule::SHALLOW),
    ("meta", MergeRule::SHALLOW),
    ("forms", MergeRule::SHALLOW),
]);

/// Merge `overlay` into `base` following `rule`.
///
/// - `Shallow` with two objects: each overlay key is merged with the child
///   rule, missing base keys are inserted.
/// - `Shallow` with a `null` overlay: base is kept.
/// - anything else: overlay replaces base.
pub fn merge_value(base: &mut Value, overlay: Value, rule: &MergeRule) {
    match (rule, base, overlay) {
        (MergeRule::Shallow(_), _, Value::Null) => {}
        (MergeRule::Shallow(_), Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                let child = rule.child(&key);
                match base_map.get_mut(&key) {
                    Some(slot) => merge_value(slot, value, child),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (_, base, overlay) => *base = overlay,
    }
}
