//! Static solution templates.
//!
//! One long-form template per topic that has a dedicated write-up, plus a
//! short generic template per subject. Templates are constants; nothing in
//! them is computed from the question.

use crate::subject::{Subject, Topic};

/// Template text for a (subject, topic) pair.
///
/// Falls back to the subject's generic template when the topic is a
/// fallback topic, has no dedicated entry, or belongs to another subject.
pub fn lookup(subject: Subject, topic: Topic) -> &'static str {
    if topic.subject() != subject {
        return generic(subject);
    }
    specific(topic).unwrap_or_else(|| generic(subject))
}

/// Dedicated template for a topic, if one exists
pub fn specific(topic: Topic) -> Option<&'static str> {
    let text = match topic {
        Topic::Kinematics => KINEMATICS,
        Topic::Dynamics => DYNAMICS,
        Topic::EnergyWork => ENERGY_WORK,
        Topic::Electricity => ELECTRICITY,
        Topic::Solutions => SOLUTIONS,
        Topic::ChemicalReactions => CHEMICAL_REACTIONS,
        Topic::AcidBase => ACID_BASE,
        Topic::Calculus => CALCULUS,
        Topic::Integration => INTEGRATION,
        Topic::Trigonometry => TRIGONOMETRY,
        Topic::Algebra => ALGEBRA,
        Topic::WavesOscillations
        | Topic::Magnetism
        | Topic::Thermodynamics
        | Topic::PhysicsGeneral
        | Topic::OrganicChemistry
        | Topic::AtomicStructure
        | Topic::Thermochemistry
        | Topic::ChemicalKinetics
        | Topic::ChemistryGeneral
        | Topic::Geometry
        | Topic::Probability
        | Topic::LinearAlgebra
        | Topic::MathematicsGeneral => return None,
    };
    Some(text)
}

/// Short per-subject template
pub fn generic(subject: Subject) -> &'static str {
    match subject {
        Subject::Physics => GENERAL_PHYSICS,
        Subject::Chemistry => GENERAL_CHEMISTRY,
        Subject::Mathematics => GENERAL_MATHEMATICS,
    }
}

/// Footer appended when study tips are enabled
pub const STUDY_TIPS: &str = r#"🎓 Study Tips:
• Practice similar problems daily
• Understand concepts before memorizing formulas
• Create your own problem-solving checklist
• Time yourself to improve speed
• Review mistakes to avoid repetition

💪 Keep practicing! Every problem makes you stronger! 🚀"#;

const GENERAL_PHYSICS: &str = "🔬 PHYSICS PROBLEM - Apply fundamental principles, identify forces/energy, use appropriate equations, and verify units.";

const GENERAL_CHEMISTRY: &str = "⚗️ CHEMISTRY PROBLEM - Balance equations, identify reaction type, apply mole concepts, and check stoichiometry.";

const GENERAL_MATHEMATICS: &str = "📊 MATHEMATICS PROBLEM - Identify the mathematical concept, apply relevant formulas, and solve step by step.";

const DYNAMICS: &str = r#"🏋️ DYNAMICS PROBLEM SOLUTION

📋 Problem Analysis:
This is a dynamics problem: the motion is explained through the forces acting on the body.

📐 Key Formulas:
• F = ma (Newton's second law)
• F = μN (Friction force)
• W = mg (Weight)
• W = F·s (Work done by a constant force)

🔍 Step-by-Step Solution:

Step 1: Draw the Free-Body Diagram
- Isolate the body of interest
- Mark every force: weight, normal reaction, tension, friction, applied forces

Step 2: Choose Axes
- Align one axis with the direction of acceleration
- Resolve inclined forces into components

Step 3: Apply Newton's Laws
- Write ΣF = ma along each axis
- Use ΣF = 0 along axes with no acceleration

Step 4: Solve and Check
- Solve the equations simultaneously
- Check that friction does not exceed μN for static cases

💡 JEE Tips:
• Static friction adjusts up to μₛN; kinetic friction is μₖN
• For connected bodies, treat the system first, then individual blocks
• Pseudo forces (−ma) are needed only in accelerating frames

🎓 Concept Review:
Newton's third law pairs act on different bodies and never cancel each other in a single free-body diagram."#;

const ALGEBRA: &str = r#"🔢 ALGEBRA PROBLEM SOLUTION

📋 Problem Analysis:
This is an equation-solving problem.

📐 Key Formulas:
• Quadratic formula: x = (-b ± √(b²-4ac)) / 2a
• Discriminant: D = b² - 4ac
• Sum of roots: α + β = -b/a
• Product of roots: αβ = c/a
• Difference of squares: a² - b² = (a+b)(a-b)

🔍 Step-by-Step Solution:

Step 1: Write the Equation in Standard Form
- Move all terms to one side
- Identify the coefficients a, b, c

Step 2: Examine the Discriminant
- D > 0: two distinct real roots
- D = 0: two equal real roots
- D < 0: complex conjugate roots

Step 3: Solve
- Factor when the roots are obvious
- Otherwise apply the quadratic formula

Step 4: Verify
- Substitute the roots back into the original equation

💡 JEE Tips:
• Use sum/product of roots to avoid solving explicitly
• Watch for extraneous roots after squaring both sides
• Symmetric expressions in α and β reduce to sums and products

🎓 Advanced Topics:
• Location of roots relative to a given number
• Common roots of two quadratics"#;

const KINEMATICS: &str = r#"🎯 KINEMATICS PROBLEM SOLUTION

📋 Problem Analysis:
This is a kinematics problem involving motion with constant acceleration.

📐 Relevant Formulas:
• v = u + at (velocity-time relation)
• s = ut + ½at² (displacement with time)
• v² = u² + 2as (velocity-displacement relation)
• s = (u + v)t/2 (average velocity method)

🔍 Step-by-Step Solution:

Step 1: Identify Given Values
- Extract the known quantities (initial velocity, acceleration, time, etc.)
- Identify what needs to be found

Step 2: Choose Appropriate Formula
- Select the kinematic equation that relates known and unknown quantities
- Ensure all quantities are in consistent units (SI preferred)

Step 3: Substitute and Solve
- Substitute the known values into the chosen formula
- Solve algebraically for the unknown quantity
- Check units in your final answer

Step 4: Verify Result
- Use an alternative method if possible
- Check if the answer makes physical sense

💡 JEE Tips:
• Always draw a diagram showing the motion
• Pay attention to the direction (+ or - signs)
• Common mistake: Forgetting that acceleration due to gravity is negative when upward is positive
• Practice with different initial conditions

🎓 Concept Review:
Kinematics deals with describing motion without considering the forces causing it. Focus on understanding the relationships between displacement, velocity, acceleration, and time."#;

const ENERGY_WORK: &str = r#"⚡ ENERGY & WORK PROBLEM SOLUTION

📋 Problem Analysis:
This involves energy conservation or work-energy theorem applications.

📐 Key Formulas:
• KE = ½mv² (Kinetic Energy)
• PE = mgh (Gravitational Potential Energy)
• W = F·s·cos(θ) (Work done by force)
• Work-Energy Theorem: W_net = ΔKE

🔍 Step-by-Step Solution:

Step 1: Identify Energy Types
- Kinetic energy (motion)
- Potential energy (position/height)
- Work done by external forces

Step 2: Apply Conservation Principles
- If no non-conservative forces: Total Energy = Constant
- E_initial = E_final
- KE₁ + PE₁ = KE₂ + PE₂

Step 3: Calculate Each Energy Component
- Substitute known values
- Be careful with reference points (especially for PE)

Step 4: Solve for Unknown
- Use algebraic manipulation
- Check dimensional consistency

💡 JEE Strategy:
• Choose reference level for potential energy wisely
• Draw energy bar charts for visualization
• Remember: Energy is always conserved (1st Law of Thermodynamics)
• Watch for friction - it converts mechanical energy to heat

🎓 Advanced Concepts:
Consider spring potential energy (½kx²) and rotational kinetic energy (½Iω²) for comprehensive problems."#;

const ELECTRICITY: &str = r#"🔌 ELECTRIC CIRCUITS SOLUTION

📋 Problem Analysis:
This is an electric circuits problem involving current, voltage, and resistance relationships.

📐 Fundamental Laws:
• Ohm's Law: V = IR
• Kirchhoff's Current Law (KCL): ΣI_in = ΣI_out
• Kirchhoff's Voltage Law (KVL): ΣV = 0 (around closed loop)
• Power: P = VI = I²R = V²/R

🔍 Step-by-Step Solution:

Step 1: Circuit Analysis
- Identify series and parallel combinations
- Redraw circuit if necessary for clarity
- Mark current directions and voltage polarities

Step 2: Apply Kirchhoff's Laws
- Use KCL at junctions/nodes
- Use KVL around closed loops
- Set up system of equations

Step 3: Solve for Unknowns
- Use substitution or elimination methods
- Calculate equivalent resistances for complex networks

Step 4: Find Required Quantities
- Calculate power dissipation if needed
- Verify using alternative methods

💡 JEE Tips:
• For resistors in series: R_eq = R₁ + R₂ + R₃...
• For resistors in parallel: 1/R_eq = 1/R₁ + 1/R₂ + 1/R₃...
• Current divider rule for parallel branches
• Voltage divider rule for series resistors

🎓 Advanced Topics:
Consider AC circuits, capacitors, inductors, and impedance for higher-level problems."#;

const SOLUTIONS: &str = r#"🧪 SOLUTION CHEMISTRY PROBLEM

📋 Problem Analysis:
This involves concentration calculations, molarity, molality, or solution preparation.

📐 Key Formulas:
• Molarity (M) = moles of solute / liters of solution
• Molality (m) = moles of solute / kg of solvent
• Normality (N) = gram equivalents / liters of solution
• Parts per million (ppm) = (mass of solute / mass of solution) × 10⁶

🔍 Step-by-Step Solution:

Step 1: Identify Given Information
- Mass or moles of solute
- Volume of solution or mass of solvent
- Molecular weight of compounds

Step 2: Convert Units if Necessary
- Grams to moles using molecular weight
- mL to L for volume
- Ensure consistent units throughout

Step 3: Apply Appropriate Formula
- Choose molarity, molality, or normality based on question
- Substitute values carefully

Step 4: Calculate and Verify
- Perform calculation with proper significant figures
- Check if answer is reasonable

💡 JEE Important Points:
• Molarity changes with temperature (volume changes)
• Molality is temperature independent
• For dilution: M₁V₁ = M₂V₂
• Density relationship: M = (% × density × 10) / Molecular weight

🎓 Common Mistakes to Avoid:
- Confusing molarity with molality
- Using mass of solution instead of mass of solvent for molality
- Not converting mL to L"#;

const CHEMICAL_REACTIONS: &str = r#"⚖️ STOICHIOMETRY PROBLEM SOLUTION

📋 Problem Analysis:
This involves quantitative relationships in chemical reactions.

📐 Key Concepts:
• Balanced chemical equation
• Mole ratios from coefficients
• Limiting reagent concept
• Theoretical vs actual yield

🔍 Step-by-Step Solution:

Step 1: Write Balanced Equation
- Balance the chemical equation properly
- Check that atoms are conserved

Step 2: Convert to Moles
- Convert given masses to moles using molecular weights
- Use: moles = mass(g) / molecular weight(g/mol)

Step 3: Use Mole Ratios
- Apply stoichiometric ratios from balanced equation
- Identify limiting reagent if multiple reactants given

Step 4: Calculate Product Amount
- Convert moles of product back to grams if needed
- Calculate percentage yield if actual yield is given

💡 JEE Strategy:
• Always start with a balanced equation
• Limiting reagent = reagent that produces least product
• % Yield = (Actual yield / Theoretical yield) × 100
• Use dimensional analysis for unit conversions

🎓 Advanced Applications:
Consider gas stoichiometry using STP conditions (22.4 L/mol) and solution stoichiometry with molarity."#;

const ACID_BASE: &str = r#"🔬 ACID-BASE CHEMISTRY SOLUTION

📋 Problem Analysis:
This involves pH, pOH, acid-base equilibrium, or titration calculations.

📐 Fundamental Equations:
• pH = -log[H⁺]
• pOH = -log[OH⁻]
• pH + pOH = 14 (at 25°C)
• Kw = [H⁺][OH⁻] = 1.0 × 10⁻¹⁴

🔍 Step-by-Step Solution:

Step 1: Identify Acid/Base Type
- Strong acid/base: Complete dissociation
- Weak acid/base: Use Ka or Kb values
- Buffer: Use Henderson-Hasselbalch equation

Step 2: Write Equilibrium Expression
- For weak acids: Ka = [H⁺][A⁻]/[HA]
- For weak bases: Kb = [OH⁻][BH⁺]/[B]

Step 3: Set Up ICE Table (if needed)
- Initial, Change, Equilibrium concentrations
- Apply equilibrium constant expressions

Step 4: Calculate pH/pOH
- Solve quadratic equations for weak acids/bases
- Use approximations when justified (5% rule)

💡 JEE Key Points:
• Strong acids: HCl, HNO₃, H₂SO₄, HClO₄, HBr, HI
• Strong bases: Group 1 hydroxides, Ca(OH)₂, Sr(OH)₂, Ba(OH)₂
• Henderson-Hasselbalch: pH = pKa + log([A⁻]/[HA])
• At equivalence point in titration: moles acid = moles base

🎓 Buffer Systems:
Buffers resist pH changes and are most effective when pH ≈ pKa ± 1."#;

const CALCULUS: &str = r#"📊 CALCULUS - DIFFERENTIATION SOLUTION

📋 Problem Analysis:
This involves finding derivatives using various differentiation rules.

📐 Key Differentiation Rules:
• Power Rule: d/dx(xⁿ) = nx^(n-1)
• Product Rule: d/dx(uv) = u'v + uv'
• Quotient Rule: d/dx(u/v) = (u'v - uv')/v²
• Chain Rule: d/dx[f(g(x))] = f'(g(x)) · g'(x)

🔍 Step-by-Step Solution:

Step 1: Identify Function Type
- Polynomial, exponential, logarithmic, trigonometric
- Composite functions requiring chain rule
- Products or quotients of functions

Step 2: Apply Appropriate Rule
- Use power rule for simple polynomials
- Apply product/quotient rule for combinations
- Use chain rule for composite functions

Step 3: Simplify Expression
- Combine like terms
- Factor if possible
- Express in simplest form

Step 4: Verify Result
- Check using alternative methods if possible
- Ensure dimensional consistency

💡 JEE Important Derivatives:
• d/dx(eˣ) = eˣ
• d/dx(ln x) = 1/x
• d/dx(sin x) = cos x
• d/dx(cos x) = -sin x
• d/dx(tan x) = sec²x

🎓 Applications:
• Rate of change problems
• Maxima and minima (set f'(x) = 0)
• Related rates in physics problems
• Tangent lines and normal lines"#;

const INTEGRATION: &str = r#"∫ INTEGRATION PROBLEM SOLUTION

📋 Problem Analysis:
This involves finding antiderivatives or evaluating definite integrals.

📐 Key Integration Rules:
• Power Rule: ∫xⁿ dx = x^(n+1)/(n+1) + C
• ∫eˣ dx = eˣ + C
• ∫(1/x) dx = ln|x| + C
• ∫sin x dx = -cos x + C
• ∫cos x dx = sin x + C

🔍 Step-by-Step Solution:

Step 1: Identify Integration Method
- Direct integration using standard formulas
- Substitution method (u-substitution)
- Integration by parts: ∫u dv = uv - ∫v du
- Partial fractions for rational functions

Step 2: Apply Method
- Make appropriate substitutions
- Use integration tables for complex functions
- Break complex expressions into simpler parts

Step 3: Evaluate (for definite integrals)
- Apply limits of integration
- Use Fundamental Theorem of Calculus

Step 4: Add Constant of Integration
- For indefinite integrals, always add + C
- For definite integrals, compute F(b) - F(a)

💡 JEE Integration Techniques:
• Substitution: Choose u such that du appears in integral
• Integration by parts: Choose u using LIATE rule
  (Logarithmic, Inverse trig, Algebraic, Trigonometric, Exponential)
• Partial fractions: For rational functions

🎓 Geometric Applications:
• Area under curves
• Volume of revolution
• Arc length calculations"#;

const TRIGONOMETRY: &str = r#"📐 TRIGONOMETRY PROBLEM SOLUTION

📋 Problem Analysis:
This involves trigonometric functions, identities, or equation solving.

📐 Fundamental Identities:
• sin²θ + cos²θ = 1
• 1 + tan²θ = sec²θ
• 1 + cot²θ = csc²θ
• sin(A ± B) = sin A cos B ± cos A sin B
• cos(A ± B) = cos A cos B ∓ sin A sin B

🔍 Step-by-Step Solution:

Step 1: Identify Problem Type
- Solving trigonometric equations
- Proving identities
- Finding values of trigonometric functions
- Applications in triangles

Step 2: Choose Strategy
- Use fundamental identities
- Apply sum/difference formulas
- Convert to single trigonometric function
- Use double angle or half angle formulas

Step 3: Algebraic Manipulation
- Substitute identities
- Factor expressions
- Use quadratic formula if needed

Step 4: Find Solutions
- Consider all possible angles in given range
- Use unit circle for standard angles
- Express answers in radians or degrees as required

💡 JEE Standard Values:
• sin 0° = 0, sin 30° = 1/2, sin 45° = √2/2, sin 60° = √3/2, sin 90° = 1
• cos 0° = 1, cos 30° = √3/2, cos 45° = √2/2, cos 60° = 1/2, cos 90° = 0
• tan 0° = 0, tan 30° = 1/√3, tan 45° = 1, tan 60° = √3

🎓 Advanced Topics:
• Inverse trigonometric functions
• Trigonometric equations with multiple angles
• Applications in vectors and complex numbers"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_specific() {
        assert!(lookup(Subject::Mathematics, Topic::Calculus).contains("d/dx"));
        assert!(lookup(Subject::Physics, Topic::Kinematics).contains("v = u + at"));
        assert!(lookup(Subject::Chemistry, Topic::AcidBase).contains("pH = -log[H⁺]"));
        assert!(lookup(Subject::Physics, Topic::Dynamics).contains("F = ma"));
        assert!(lookup(Subject::Mathematics, Topic::Algebra).contains("Quadratic formula"));
    }

    #[test]
    fn test_lookup_fallback() {
        assert_eq!(lookup(Subject::Physics, Topic::PhysicsGeneral), GENERAL_PHYSICS);
        assert_eq!(lookup(Subject::Physics, Topic::Magnetism), GENERAL_PHYSICS);
        assert_eq!(lookup(Subject::Chemistry, Topic::OrganicChemistry), GENERAL_CHEMISTRY);
        assert_eq!(lookup(Subject::Mathematics, Topic::Geometry), GENERAL_MATHEMATICS);
    }

    #[test]
    fn test_lookup_mismatched_subject() {
        // Calculus is not a chemistry topic
        assert_eq!(lookup(Subject::Chemistry, Topic::Calculus), GENERAL_CHEMISTRY);
    }

    #[test]
    fn test_lookup_idempotent() {
        let a = lookup(Subject::Chemistry, Topic::Solutions);
        let b = lookup(Subject::Chemistry, Topic::Solutions);
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_every_subject_has_generic() {
        for subject in Subject::ALL {
            assert!(!generic(subject).is_empty());
            assert_eq!(lookup(subject, subject.fallback_topic()), generic(subject));
        }
    }
}
