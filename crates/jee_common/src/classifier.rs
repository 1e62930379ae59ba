//! Keyword classifier.
//!
//! Maps question text to a (subject, topic) pair. The topic comes from an
//! ordered rule list per subject, first match wins. When the caller gives no
//! subject, it is inferred by counting subject keywords in the question.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::subject::{Subject, Topic};

/// A pattern scoped to a subject, mapping to a topic
#[derive(Debug)]
pub struct KeywordRule {
    pub pattern: Regex,
    pub topic: Topic,
}

fn rule(pattern: &str, topic: Topic) -> KeywordRule {
    KeywordRule {
        pattern: Regex::new(&format!("(?i){}", pattern)).unwrap(),
        topic,
    }
}

static PHYSICS_RULES: LazyLock<Vec<KeywordRule>> = LazyLock::new(|| {
    vec![
        rule(r"velocity|speed|acceleration|motion|kinematic", Topic::Kinematics),
        rule(r"force|newton|friction|gravity|weight", Topic::Dynamics),
        rule(r"energy|work|power|potential|kinetic", Topic::EnergyWork),
        rule(r"wave|frequency|amplitude|oscillation", Topic::WavesOscillations),
        rule(r"electric|current|voltage|resistance|circuit", Topic::Electricity),
        rule(r"magnetic|field|flux|induction", Topic::Magnetism),
        rule(r"thermodynamic|heat|temperature|entropy", Topic::Thermodynamics),
    ]
});

static CHEMISTRY_RULES: LazyLock<Vec<KeywordRule>> = LazyLock::new(|| {
    vec![
        rule(r"molarity|molality|concentration|solution", Topic::Solutions),
        rule(r"reaction|equation|balance|stoichiometry", Topic::ChemicalReactions),
        rule(r"acid|base|ph|buffer|titration", Topic::AcidBase),
        rule(r"organic|hydrocarbon|functional group", Topic::OrganicChemistry),
        rule(r"periodic|element|electron|atomic", Topic::AtomicStructure),
        rule(r"thermochemistry|enthalpy|entropy|gibbs", Topic::Thermochemistry),
        rule(r"equilibrium|rate|catalyst|kinetics", Topic::ChemicalKinetics),
    ]
});

static MATHEMATICS_RULES: LazyLock<Vec<KeywordRule>> = LazyLock::new(|| {
    vec![
        rule(r"derivative|differentiat|calculus|limit", Topic::Calculus),
        rule(r"integral|integration|area|volume", Topic::Integration),
        rule(r"trigonometry|sine|cosine|tangent", Topic::Trigonometry),
        rule(r"algebra|equation|polynomial|quadratic", Topic::Algebra),
        rule(r"geometry|triangle|circle|coordinate", Topic::Geometry),
        rule(r"probability|statistics|permutation|combination", Topic::Probability),
        rule(r"matrix|determinant|vector|linear", Topic::LinearAlgebra),
    ]
});

const PHYSICS_KEYWORDS: &[&str] = &[
    "velocity",
    "acceleration",
    "force",
    "energy",
    "momentum",
    "electric",
    "magnetic",
    "wave",
    "optics",
    "thermodynamics",
];

const CHEMISTRY_KEYWORDS: &[&str] = &[
    "molecule", "reaction", "acid", "base", "molarity", "organic", "bond", "electron", "atom",
    "compound",
];

const MATHEMATICS_KEYWORDS: &[&str] = &[
    "derivative",
    "integral",
    "limit",
    "matrix",
    "probability",
    "equation",
    "function",
    "graph",
    "solve",
    "calculate",
];

/// Ordered topic rules for a subject
pub fn rules(subject: Subject) -> &'static [KeywordRule] {
    match subject {
        Subject::Physics => &PHYSICS_RULES,
        Subject::Chemistry => &CHEMISTRY_RULES,
        Subject::Mathematics => &MATHEMATICS_RULES,
    }
}

/// Keywords counted when inferring the subject
pub fn subject_keywords(subject: Subject) -> &'static [&'static str] {
    match subject {
        Subject::Physics => PHYSICS_KEYWORDS,
        Subject::Chemistry => CHEMISTRY_KEYWORDS,
        Subject::Mathematics => MATHEMATICS_KEYWORDS,
    }
}

/// Number of distinct subject keywords present in the question
pub fn score(question: &str, subject: Subject) -> usize {
    let q = question.to_lowercase();
    subject_keywords(subject)
        .iter()
        .filter(|kw| q.contains(*kw))
        .count()
}

/// Pick the subject with the most keyword hits.
///
/// Ties go to the earlier subject in `Subject::ALL`, so a question with no
/// keywords at all is treated as physics.
pub fn infer_subject(question: &str) -> Subject {
    let mut best = Subject::Physics;
    let mut best_score = 0;
    for subject in Subject::ALL {
        let s = score(question, subject);
        if s > best_score {
            best = subject;
            best_score = s;
        }
    }
    best
}

/// First matching topic within a subject, or the subject's fallback topic
pub fn identify_topic(question: &str, subject: Subject) -> Topic {
    let q = question.to_lowercase();
    rules(subject)
        .iter()
        .find(|r| r.pattern.is_match(&q))
        .map(|r| r.topic)
        .unwrap_or_else(|| subject.fallback_topic())
}

/// Classify a question. Never fails.
pub fn classify(question: &str, subject_hint: Option<Subject>) -> (Subject, Topic) {
    let subject = subject_hint.unwrap_or_else(|| infer_subject(question));
    let topic = identify_topic(question, subject);
    debug!(
        "Classified as {} / {} (hint: {:?})",
        subject,
        topic,
        subject_hint
    );
    (subject, topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic_of(question: &str, subject: Subject) -> Topic {
        classify(question, Some(subject)).1
    }

    #[test]
    fn test_physics_topics() {
        let p = Subject::Physics;
        assert_eq!(topic_of("A car's velocity doubles", p), Topic::Kinematics);
        assert_eq!(topic_of("Friction on a block", p), Topic::Dynamics);
        assert_eq!(topic_of("Find the kinetic energy", p), Topic::EnergyWork);
        assert_eq!(topic_of("Frequency of a wave", p), Topic::WavesOscillations);
        assert_eq!(topic_of("Current in the circuit", p), Topic::Electricity);
        assert_eq!(topic_of("Magnetic flux through a loop", p), Topic::Magnetism);
        assert_eq!(topic_of("Heat engine temperature", p), Topic::Thermodynamics);
    }

    #[test]
    fn test_chemistry_topics() {
        let c = Subject::Chemistry;
        assert_eq!(topic_of("Molarity of NaOH", c), Topic::Solutions);
        assert_eq!(topic_of("Balance the reaction", c), Topic::ChemicalReactions);
        assert_eq!(topic_of("pH of a buffer", c), Topic::AcidBase);
        assert_eq!(topic_of("Name the organic hydrocarbon", c), Topic::OrganicChemistry);
        assert_eq!(topic_of("Periodic table trends", c), Topic::AtomicStructure);
        assert_eq!(topic_of("Enthalpy change", c), Topic::Thermochemistry);
        assert_eq!(topic_of("Role of a catalyst", c), Topic::ChemicalKinetics);
    }

    #[test]
    fn test_mathematics_topics() {
        let m = Subject::Mathematics;
        assert_eq!(topic_of("Find the derivative of x^2", m), Topic::Calculus);
        assert_eq!(topic_of("Evaluate the integral of sin x", m), Topic::Integration);
        assert_eq!(topic_of("Value of cosine 60", m), Topic::Trigonometry);
        assert_eq!(topic_of("Solve the quadratic", m), Topic::Algebra);
        assert_eq!(topic_of("Circumcircle of a triangle", m), Topic::Geometry);
        assert_eq!(topic_of("Probability of two heads", m), Topic::Probability);
        assert_eq!(topic_of("Determinant of a matrix", m), Topic::LinearAlgebra);
    }

    #[test]
    fn test_first_match_wins() {
        // "integral" and "sine" both present; Integration is listed first
        assert_eq!(
            topic_of("integral of sine", Subject::Mathematics),
            Topic::Integration
        );
        // "velocity" beats "energy"
        assert_eq!(
            topic_of("energy at a given velocity", Subject::Physics),
            Topic::Kinematics
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(topic_of("DERIVATIVE", Subject::Mathematics), Topic::Calculus);
    }

    #[test]
    fn test_fallback_topic() {
        assert_eq!(topic_of("hello there", Subject::Physics), Topic::PhysicsGeneral);
        assert_eq!(topic_of("", Subject::Chemistry), Topic::ChemistryGeneral);
        assert_eq!(topic_of("xyz", Subject::Mathematics), Topic::MathematicsGeneral);
    }

    #[test]
    fn test_classify_is_total() {
        for q in ["", "   ", "???", "lorem ipsum", "123 456", "ünïcödé ✓"] {
            let (subject, topic) = classify(q, None);
            assert_eq!(topic.subject(), subject);
        }
    }

    #[test]
    fn test_infer_subject() {
        assert_eq!(
            infer_subject("A force acts on a body moving with velocity v"),
            Subject::Physics
        );
        assert_eq!(
            infer_subject("Which compound forms when the acid reacts with a base?"),
            Subject::Chemistry
        );
        assert_eq!(
            infer_subject("Find the derivative of the function"),
            Subject::Mathematics
        );
    }

    #[test]
    fn test_infer_subject_ties() {
        // No keywords: all zero, physics wins
        assert_eq!(infer_subject(""), Subject::Physics);
        // chemistry 1 ("acid") vs mathematics 1 ("equation")
        assert_eq!(infer_subject("acid equation"), Subject::Chemistry);
        // physics 1 ("force") vs mathematics 1 ("graph")
        assert_eq!(infer_subject("force graph"), Subject::Physics);
    }

    #[test]
    fn test_score_counts_distinct_keywords() {
        assert_eq!(score("velocity velocity velocity", Subject::Physics), 1);
        assert_eq!(score("Velocity and Acceleration", Subject::Physics), 2);
    }

    #[test]
    fn test_inferred_subject_drives_topic() {
        let (subject, topic) = classify("Find the derivative of the function", None);
        assert_eq!(subject, Subject::Mathematics);
        assert_eq!(topic, Topic::Calculus);
    }
}
