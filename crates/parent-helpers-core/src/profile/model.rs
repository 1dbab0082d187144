//! Profile domain model.
//!
//! A profile is created once the wizard has a persona description and the
//! caregiver has filled in the family details. After creation only the
//! source type and source name are frozen; everything else is editable.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::catalog::{BOOKS, EXPERTS, STYLES};
use crate::error::{HelperError, Result};

/// Youngest supported child age.
pub const MIN_CHILD_AGE: i64 = 1;
/// Oldest supported child age.
pub const MAX_CHILD_AGE: i64 = 21;

/// Coerces an entered age into the supported range.
pub fn clamp_child_age(age: i64) -> u8 {
    // Range is 1..=21 so the cast cannot truncate.
    age.clamp(MIN_CHILD_AGE, MAX_CHILD_AGE) as u8
}

/// Who the coach speaks as when addressing the child.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum AgentType {
    #[default]
    Parent,
    Teacher,
    Other,
}

/// Kind of source a persona is derived from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum SourceType {
    Book,
    Expert,
    Style,
}

impl SourceType {
    /// Returns the built-in catalog for this source type.
    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            SourceType::Book => &BOOKS,
            SourceType::Expert => &EXPERTS,
            SourceType::Style => &STYLES,
        }
    }
}

/// A saved parenting agent profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// User-chosen label, not guaranteed unique
    pub profile_name: String,
    pub parent_name: String,
    pub child_name: String,
    /// Always within `MIN_CHILD_AGE..=MAX_CHILD_AGE`
    pub child_age: u8,
    #[serde(default)]
    pub agent_type: AgentType,
    pub source_type: SourceType,
    pub source_name: String,
    pub persona_description: String,
}

impl Profile {
    /// Whether every text field a profile requires is non-blank.
    pub fn is_complete(&self) -> bool {
        [
            &self.profile_name,
            &self.parent_name,
            &self.child_name,
            &self.source_name,
            &self.persona_description,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Values collected by the profile details form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDetails {
    pub profile_name: String,
    pub parent_name: String,
    pub child_name: String,
    pub child_age: i64,
}

impl ProfileDetails {
    /// Validates the form and builds a profile around the generated persona.
    ///
    /// # Errors
    ///
    /// Returns `HelperError::Validation` when any text field (including the
    /// persona description) is blank.
    pub fn into_profile(
        self,
        agent_type: AgentType,
        source_type: SourceType,
        source_name: &str,
        persona_description: &str,
    ) -> Result<Profile> {
        let profile_name = required(&self.profile_name)?;
        let parent_name = required(&self.parent_name)?;
        let child_name = required(&self.child_name)?;
        let source_name = required(source_name)?;
        let persona_description = required(persona_description)?;

        Ok(Profile {
            profile_name,
            parent_name,
            child_name,
            child_age: clamp_child_age(self.child_age),
            agent_type,
            source_type,
            source_name,
            persona_description,
        })
    }
}

/// Editable subset of a profile, used by the profile manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEdit {
    pub profile_name: String,
    pub parent_name: String,
    pub child_name: String,
    pub child_age: i64,
    pub agent_type: AgentType,
    pub persona_description: String,
}

impl ProfileEdit {
    /// Seeds an edit form with the current values of `profile`.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            profile_name: profile.profile_name.clone(),
            parent_name: profile.parent_name.clone(),
            child_name: profile.child_name.clone(),
            child_age: i64::from(profile.child_age),
            agent_type: profile.agent_type,
            persona_description: profile.persona_description.clone(),
        }
    }

    /// Produces the replacement record. Source type and name are carried
    /// over from `original` unchanged.
    pub fn apply_to(&self, original: &Profile) -> Result<Profile> {
        Ok(Profile {
            profile_name: required(&self.profile_name)?,
            parent_name: required(&self.parent_name)?,
            child_name: required(&self.child_name)?,
            child_age: clamp_child_age(self.child_age),
            agent_type: self.agent_type,
            source_type: original.source_type,
            source_name: original.source_name.clone(),
            persona_description: required(&self.persona_description)?,
        })
    }
}

fn required(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HelperError::validation("Please fill every field."));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn details() -> ProfileDetails {
        ProfileDetails {
            profile_name: "Alex".to_string(),
            parent_name: "Sam".to_string(),
            child_name: "Kim".to_string(),
            child_age: 7,
        }
    }

    #[test]
    fn test_into_profile_copies_every_field() {
        let profile = details()
            .into_profile(
                AgentType::Parent,
                SourceType::Book,
                "Positive Parenting: An Essential Guide",
                "Warm and firm.",
            )
            .unwrap();

        assert_eq!(profile.profile_name, "Alex");
        assert_eq!(profile.parent_name, "Sam");
        assert_eq!(profile.child_name, "Kim");
        assert_eq!(profile.child_age, 7);
        assert_eq!(profile.source_type, SourceType::Book);
        assert_eq!(profile.persona_description, "Warm and firm.");
    }

    #[test]
    fn test_into_profile_rejects_blank_fields() {
        for blank in ["profile", "parent", "child"] {
            let mut form = details();
            match blank {
                "profile" => form.profile_name = "  ".to_string(),
                "parent" => form.parent_name.clear(),
                _ => form.child_name.clear(),
            }
            let result = form.into_profile(AgentType::Parent, SourceType::Style, "Montessori", "x");
            assert!(result.unwrap_err().is_validation(), "blank {blank} accepted");
        }
    }

    #[test]
    fn test_into_profile_requires_persona() {
        let result = details().into_profile(AgentType::Parent, SourceType::Style, "Montessori", "");
        assert!(result.is_err());
    }

    #[test]
    fn test_child_age_is_clamped() {
        assert_eq!(clamp_child_age(0), 1);
        assert_eq!(clamp_child_age(-4), 1);
        assert_eq!(clamp_child_age(21), 21);
        assert_eq!(clamp_child_age(40), 21);
    }

    #[test]
    fn test_edit_keeps_source_fields() {
        let original = details()
            .into_profile(AgentType::Parent, SourceType::Expert, "Janet Lansbury", "Calm.")
            .unwrap();
        let mut edit = ProfileEdit::from_profile(&original);
        edit.profile_name = "Renamed".to_string();
        edit.agent_type = AgentType::Teacher;

        let updated = edit.apply_to(&original).unwrap();
        assert_eq!(updated.profile_name, "Renamed");
        assert_eq!(updated.agent_type, AgentType::Teacher);
        assert_eq!(updated.source_type, SourceType::Expert);
        assert_eq!(updated.source_name, "Janet Lansbury");
    }

    #[test]
    fn test_agent_type_defaults_when_missing() {
        let json = r#"{
            "profile_name": "Alex", "parent_name": "Sam", "child_name": "Kim",
            "child_age": 7, "source_type": "Book", "source_name": "Punished by Rewards",
            "persona_description": "..."
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.agent_type, AgentType::Parent);
    }

    #[test]
    fn test_source_type_parsing_and_catalog() {
        assert_eq!(SourceType::from_str("expert").unwrap(), SourceType::Expert);
        assert_eq!(SourceType::Book.catalog().len(), 6);
        assert!(SourceType::Style.catalog().contains(&"Montessori"));
    }

    #[test]
    fn test_blank_field_makes_profile_incomplete() {
        let profile = details()
            .into_profile(AgentType::Parent, SourceType::Book, "Punished by Rewards", "...")
            .unwrap();
        assert!(profile.is_complete());

        let blank = Profile {
            child_name: "  ".to_string(),
            ..profile
        };
        assert!(!blank.is_complete());
    }
}
