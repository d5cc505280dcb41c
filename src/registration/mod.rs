//! Registration data model and validation
//!
//! Holds everything the registration form collects and validates it the
//! same way the registration page does: sequentially, first failure wins.
//! The wire representation posted to the API keeps the endpoint's numeric
//! flag encoding (`type` 1/2, `joinTeam` and `termsConditions` 0/1).

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
            .expect("email regex is valid")
    })
}

/// Whether the attendee registers alone or with a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationKind {
    #[default]
    Individual,
    Team,
}

impl RegistrationKind {
    /// Numeric code used on the wire (1 = individual, 2 = team)
    pub fn code(self) -> u8 {
        match self {
            Self::Individual => 1,
            Self::Team => 2,
        }
    }
}

/// One team member row on the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
}

/// Everything the registration form collects
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub kind: RegistrationKind,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Individual registrations only: willing to join a team on site
    pub join_team: bool,
    pub team_name: String,
    pub members: Vec<TeamMember>,
    /// Chosen challenge, 1 through 3
    pub challenge: Option<u8>,
    pub terms_accepted: bool,
}

/// Validation failures, surfaced to the user as error toasts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please make sure all required fields are filled in.")]
    MissingRequiredFields,

    #[error("E-mail address is invalid. Please use a different one.")]
    InvalidEmail,

    #[error("Please make sure you provide a name for your team.")]
    MissingTeamName,

    #[error("You haven't added any team members. Please add at least a team member or switch to individual registration.")]
    NoTeamMembers,

    #[error("Team member name and e-mail address are mandatory.")]
    MemberFieldsMissing,

    #[error("Team member e-mail address for {0} is invalid. Please use a different one.")]
    InvalidMemberEmail(String),

    #[error("You haven't chosen the hackathon challenge.")]
    NoChallengeSelected,

    #[error("Terms and Conditions must be agreed in order to complete hackathon registration.")]
    TermsNotAccepted,
}

impl Registration {
    /// Validate the registration, stopping at the first failure.
    ///
    /// Order: required contact fields, e-mail format, then for team
    /// registrations the team name, member presence and member fields,
    /// then challenge choice and terms agreement.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone.trim().is_empty()
        {
            return Err(ValidationError::MissingRequiredFields);
        }

        if !email_regex().is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }

        if self.kind == RegistrationKind::Team {
            if self.team_name.trim().is_empty() {
                return Err(ValidationError::MissingTeamName);
            }

            if self.members.is_empty() {
                return Err(ValidationError::NoTeamMembers);
            }

            for member in &self.members {
                let name = member.name.trim();
                let email = member.email.trim();

                if name.is_empty() || email.is_empty() {
                    return Err(ValidationError::MemberFieldsMissing);
                }
                if !email_regex().is_match(email) {
                    return Err(ValidationError::InvalidMemberEmail(name.to_string()));
                }
            }
        }

        if self.challenge.is_none() {
            return Err(ValidationError::NoChallengeSelected);
        }

        if !self.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(())
    }

    /// Build the wire representation posted to the registration endpoint.
    pub fn to_wire(&self) -> WireRegistration {
        let members = self
            .members
            .iter()
            .map(|m| TeamMember {
                name: m.name.trim().to_string(),
                email: m.email.trim().to_string(),
            })
            .collect();

        WireRegistration {
            kind: self.kind.code(),
            name: WireName {
                first: self.first_name.trim().to_string(),
                last: self.last_name.trim().to_string(),
            },
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            join_team: u8::from(self.kind == RegistrationKind::Individual && self.join_team),
            team: WireTeam {
                name: match self.kind {
                    RegistrationKind::Team => Some(self.team_name.trim().to_string()),
                    RegistrationKind::Individual => None,
                },
                members,
            },
            challenge: self.challenge.unwrap_or(0),
            terms_conditions: u8::from(self.terms_accepted),
        }
    }
}

/// Wire shape of a registration, matching the endpoint contract
#[derive(Debug, Clone, Serialize)]
pub struct WireRegistration {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: WireName,
    pub email: String,
    pub phone: String,
    #[serde(rename = "joinTeam")]
    pub join_team: u8,
    pub team: WireTeam,
    pub challenge: u8,
    #[serde(rename = "termsConditions")]
    pub terms_conditions: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireTeam {
    pub name: Option<String>,
    pub members: Vec<TeamMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_individual() -> Registration {
        Registration {
            kind: RegistrationKind::Individual,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+40 700 000 000".to_string(),
            join_team: true,
            challenge: Some(2),
            terms_accepted: true,
            ..Default::default()
        }
    }

    fn valid_team() -> Registration {
        let mut reg = valid_individual();
        reg.kind = RegistrationKind::Team;
        reg.team_name = "Bit Benders".to_string();
        reg.members = vec![TeamMember {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
        }];
        reg
    }

    #[test]
    fn test_valid_registrations_pass() {
        assert_eq!(valid_individual().validate(), Ok(()));
        assert_eq!(valid_team().validate(), Ok(()));
    }

    #[test]
    fn test_required_fields_checked_first() {
        let mut reg = valid_individual();
        reg.first_name.clear();
        reg.email = "not-an-email".to_string();
        // Missing fields win over the invalid e-mail
        assert_eq!(reg.validate(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn test_email_format() {
        let mut reg = valid_individual();
        reg.email = "ada at example.com".to_string();
        assert_eq!(reg.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_team_name_required_for_teams() {
        let mut reg = valid_team();
        reg.team_name = "   ".to_string();
        assert_eq!(reg.validate(), Err(ValidationError::MissingTeamName));
    }

    #[test]
    fn test_team_needs_members() {
        let mut reg = valid_team();
        reg.members.clear();
        assert_eq!(reg.validate(), Err(ValidationError::NoTeamMembers));
    }

    #[test]
    fn test_member_fields_mandatory() {
        let mut reg = valid_team();
        reg.members[0].email.clear();
        assert_eq!(reg.validate(), Err(ValidationError::MemberFieldsMissing));
    }

    #[test]
    fn test_member_email_format_names_the_member() {
        let mut reg = valid_team();
        reg.members[0].email = "nope".to_string();
        assert_eq!(
            reg.validate(),
            Err(ValidationError::InvalidMemberEmail("Grace".to_string()))
        );
    }

    #[test]
    fn test_challenge_and_terms() {
        let mut reg = valid_individual();
        reg.challenge = None;
        assert_eq!(reg.validate(), Err(ValidationError::NoChallengeSelected));

        reg.challenge = Some(1);
        reg.terms_accepted = false;
        assert_eq!(reg.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_wire_shape() {
        let wire = valid_team().to_wire();
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(json["type"], 2);
        assert_eq!(json["name"]["first"], "Ada");
        assert_eq!(json["joinTeam"], 0);
        assert_eq!(json["team"]["name"], "Bit Benders");
        assert_eq!(json["team"]["members"][0]["email"], "grace@example.com");
        assert_eq!(json["termsConditions"], 1);
    }

    #[test]
    fn test_wire_individual_join_team_flag() {
        let json = serde_json::to_value(valid_individual().to_wire()).unwrap();
        assert_eq!(json["type"], 1);
        assert_eq!(json["joinTeam"], 1);
        assert_eq!(json["team"]["name"], serde_json::Value::Null);
    }
}
