use serde::{Deserialize, Serialize};

// ===== DOMAIN RECORDS =====
//
// Flat records as the coaching API returns them (camelCase wire names).
// Foreign keys like `approved_by_id` are opaque — resolved server-side.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryProtocol {
    pub id: u64,
    pub athlete_id: u64,
    pub athlete_name: String,
    pub title: String,
    pub status: ProtocolStatus,
    pub submitted_at: String,
    #[serde(default)]
    pub approved_by_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtocolStatus {
    Pending,
    Approved,
    Rejected,
}

impl ProtocolStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProtocolStatus::Pending => "Pending",
            ProtocolStatus::Approved => "Approved",
            ProtocolStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: u64,
    pub name: String,
    pub cycle: Cycle,
    pub weeks: u32,
    pub focus: String,
}

/// The athlete's currently assigned program plus phase progression.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveProgram {
    #[serde(flatten)]
    pub program: Program,
    pub phases: Vec<String>,
    pub current_phase: usize,
}

/// Readiness bucket used to group programs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cycle {
    Red,
    Amber,
    Green,
}

impl Cycle {
    pub const ALL: [Cycle; 3] = [Cycle::Red, Cycle::Amber, Cycle::Green];

    pub fn label(self) -> &'static str {
        match self {
            Cycle::Red => "Red",
            Cycle::Amber => "Amber",
            Cycle::Green => "Green",
        }
    }

    /// Query-parameter value for list endpoints.
    pub fn as_query(self) -> &'static str {
        match self {
            Cycle::Red => "RED",
            Cycle::Amber => "AMBER",
            Cycle::Green => "GREEN",
        }
    }
}

// ===== SESSION TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub role: UserRole,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Athlete,
    Coach,
    CoachHead,
    Admin,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Athlete => "Athlete",
            UserRole::Coach => "Coach",
            UserRole::CoachHead => "Head coach",
            UserRole::Admin => "Admin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recovery_protocol_decodes_camel_case_wire_names() {
        let protocol: RecoveryProtocol = serde_json::from_value(json!({
            "id": 7,
            "athleteId": 12,
            "athleteName": "Mia Kovac",
            "title": "Hamstring rehab week 2",
            "status": "PENDING",
            "submittedAt": "2025-11-03",
        }))
        .unwrap();
        assert_eq!(protocol.id, 7);
        assert_eq!(protocol.status, ProtocolStatus::Pending);
        assert_eq!(protocol.approved_by_id, None);
    }

    #[test]
    fn active_program_flattens_program_fields() {
        let active: ActiveProgram = serde_json::from_value(json!({
            "id": 3,
            "name": "Return to sprint",
            "cycle": "AMBER",
            "weeks": 6,
            "focus": "Tissue capacity",
            "phases": ["Base", "Build", "Peak"],
            "currentPhase": 1,
        }))
        .unwrap();
        assert_eq!(active.program.cycle, Cycle::Amber);
        assert_eq!(active.phases.len(), 3);
        assert_eq!(active.current_phase, 1);
    }

    #[test]
    fn cycle_query_values_match_wire_casing() {
        for cycle in Cycle::ALL {
            let wire = serde_json::to_value(cycle).unwrap();
            assert_eq!(wire, json!(cycle.as_query()));
        }
    }
}
