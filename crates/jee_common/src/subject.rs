//! Subjects and the per-subject topic enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SolveError;

/// Top-level subject of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Physics,
    Chemistry,
    Mathematics,
}

impl Subject {
    /// All subjects, in tie-break priority order
    pub const ALL: [Subject; 3] = [Subject::Physics, Subject::Chemistry, Subject::Mathematics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Mathematics => "mathematics",
        }
    }

    /// Capitalised name for display
    pub fn title(&self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Mathematics => "Mathematics",
        }
    }

    /// Topic returned when no rule of this subject matches
    pub fn fallback_topic(&self) -> Topic {
        match self {
            Subject::Physics => Topic::PhysicsGeneral,
            Subject::Chemistry => Topic::ChemistryGeneral,
            Subject::Mathematics => Topic::MathematicsGeneral,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Subject {
    type Err = SolveError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "physics" => Ok(Subject::Physics),
            "chemistry" => Ok(Subject::Chemistry),
            "mathematics" => Ok(Subject::Mathematics),
            other => Err(SolveError::InvalidSubject(other.to_string())),
        }
    }
}

/// Finer-grained classification within a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    // Physics
    Kinematics,
    Dynamics,
    EnergyWork,
    WavesOscillations,
    Electricity,
    Magnetism,
    Thermodynamics,
    PhysicsGeneral,
    // Chemistry
    Solutions,
    ChemicalReactions,
    AcidBase,
    OrganicChemistry,
    AtomicStructure,
    Thermochemistry,
    ChemicalKinetics,
    ChemistryGeneral,
    // Mathematics
    Calculus,
    Integration,
    Trigonometry,
    Algebra,
    Geometry,
    Probability,
    LinearAlgebra,
    MathematicsGeneral,
}

impl Topic {
    pub const ALL: [Topic; 24] = [
        Topic::Kinematics,
        Topic::Dynamics,
        Topic::EnergyWork,
        Topic::WavesOscillations,
        Topic::Electricity,
        Topic::Magnetism,
        Topic::Thermodynamics,
        Topic::PhysicsGeneral,
        Topic::Solutions,
        Topic::ChemicalReactions,
        Topic::AcidBase,
        Topic::OrganicChemistry,
        Topic::AtomicStructure,
        Topic::Thermochemistry,
        Topic::ChemicalKinetics,
        Topic::ChemistryGeneral,
        Topic::Calculus,
        Topic::Integration,
        Topic::Trigonometry,
        Topic::Algebra,
        Topic::Geometry,
        Topic::Probability,
        Topic::LinearAlgebra,
        Topic::MathematicsGeneral,
    ];

    /// Reverse of `label`
    pub fn from_label(label: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|t| t.label() == label)
    }

    pub fn subject(&self) -> Subject {
        match self {
            Topic::Kinematics
            | Topic::Dynamics
            | Topic::EnergyWork
            | Topic::WavesOscillations
            | Topic::Electricity
            | Topic::Magnetism
            | Topic::Thermodynamics
            | Topic::PhysicsGeneral => Subject::Physics,
            Topic::Solutions
            | Topic::ChemicalReactions
            | Topic::AcidBase
            | Topic::OrganicChemistry
            | Topic::AtomicStructure
            | Topic::Thermochemistry
            | Topic::ChemicalKinetics
            | Topic::ChemistryGeneral => Subject::Chemistry,
            Topic::Calculus
            | Topic::Integration
            | Topic::Trigonometry
            | Topic::Algebra
            | Topic::Geometry
            | Topic::Probability
            | Topic::LinearAlgebra
            | Topic::MathematicsGeneral => Subject::Mathematics,
        }
    }

    /// Label shown to users and returned in the `topic` field
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Kinematics => "Kinematics",
            Topic::Dynamics => "Dynamics",
            Topic::EnergyWork => "Energy & Work",
            Topic::WavesOscillations => "Waves & Oscillations",
            Topic::Electricity => "Electricity",
            Topic::Magnetism => "Magnetism",
            Topic::Thermodynamics => "Thermodynamics",
            Topic::PhysicsGeneral => "Physics Problem",
            Topic::Solutions => "Solutions",
            Topic::ChemicalReactions => "Chemical Reactions",
            Topic::AcidBase => "Acid-Base",
            Topic::OrganicChemistry => "Organic Chemistry",
            Topic::AtomicStructure => "Atomic Structure",
            Topic::Thermochemistry => "Thermochemistry",
            Topic::ChemicalKinetics => "Chemical Kinetics",
            Topic::ChemistryGeneral => "Chemistry Problem",
            Topic::Calculus => "Calculus",
            Topic::Integration => "Integration",
            Topic::Trigonometry => "Trigonometry",
            Topic::Algebra => "Algebra",
            Topic::Geometry => "Geometry",
            Topic::Probability => "Probability",
            Topic::LinearAlgebra => "Linear Algebra",
            Topic::MathematicsGeneral => "Mathematics Problem",
        }
    }

    /// True for the per-subject "no rule matched" topics
    pub fn is_general(&self) -> bool {
        matches!(
            self,
            Topic::PhysicsGeneral | Topic::ChemistryGeneral | Topic::MathematicsGeneral
        )
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subject() {
        assert_eq!("physics".parse::<Subject>().unwrap(), Subject::Physics);
        assert_eq!(" Chemistry ".parse::<Subject>().unwrap(), Subject::Chemistry);
        assert_eq!("MATHEMATICS".parse::<Subject>().unwrap(), Subject::Mathematics);
    }

    #[test]
    fn test_parse_invalid_subject() {
        let err = "biology".parse::<Subject>().unwrap_err();
        assert!(matches!(err, SolveError::InvalidSubject(ref s) if s == "biology"));
    }

    #[test]
    fn test_fallback_topics_belong_to_subject() {
        for subject in Subject::ALL {
            let topic = subject.fallback_topic();
            assert!(topic.is_general());
            assert_eq!(topic.subject(), subject);
            assert_eq!(topic.label(), format!("{} Problem", subject.title()));
        }
    }

    #[test]
    fn test_topic_labels_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_label(topic.label()), Some(topic));
        }
        assert_eq!(Topic::from_label("Astrology"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Subject::Mathematics).unwrap();
        assert_eq!(json, "\"mathematics\"");
    }
}
