use std::sync::LazyLock;

use super::{checkbox, choice, scale, text};
use crate::AssessmentDefinition;

/// Symptom Checker: current symptoms, their course, and red flags.
/// 25 questions, ids 7–31. Heavily weighted items are the symptom
/// inventory, severity, fever, and the red-flag symptom groups.
pub fn definition() -> AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| AssessmentDefinition {
        assessment_id: "symptom_checker".to_string(),
        name: "Symptom Checker".to_string(),
        description: "Identify possible conditions based on your current symptoms".to_string(),
        version: "1.0".to_string(),
        questions: vec![
            checkbox(
                7,
                "Which symptoms are you currently experiencing?",
                &[
                    "Fever",
                    "Cough",
                    "Headache",
                    "Fatigue",
                    "Nausea",
                    "Dizziness",
                    "Shortness of breath",
                    "Chest pain",
                    "Abdominal pain",
                    "Muscle aches",
                ],
                true,
                3,
            ),
            choice(
                8,
                "When did your symptoms begin?",
                &[
                    "Within the last 24 hours",
                    "1-3 days ago",
                    "4-7 days ago",
                    "1-2 weeks ago",
                    "More than 2 weeks ago",
                ],
                2,
            ),
            scale(9, "How severe are your symptoms overall?", 1.0, 10.0, 3),
            choice(
                10,
                "How have your symptoms changed since they began?",
                &[
                    "Getting better",
                    "Staying the same",
                    "Getting worse",
                    "Coming and going",
                ],
                2,
            ),
            choice(
                11,
                "Have you had a fever in the last 48 hours?",
                &[
                    "No",
                    "Mild (below 38\u{b0}C / 100.4\u{b0}F)",
                    "Moderate (38-39\u{b0}C / 100.4-102.2\u{b0}F)",
                    "High (above 39\u{b0}C / 102.2\u{b0}F)",
                    "Not sure",
                ],
                3,
            ),
            checkbox(
                12,
                "Where is your pain located, if any?",
                &[
                    "No pain", "Head", "Chest", "Abdomen", "Back", "Joints", "Throat", "Other",
                ],
                false,
                2,
            ),
            choice(
                13,
                "How would you describe the pain?",
                &[
                    "No pain",
                    "Dull or aching",
                    "Sharp or stabbing",
                    "Burning",
                    "Throbbing",
                    "Cramping",
                ],
                2,
            ),
            checkbox(
                14,
                "Any breathing-related symptoms?",
                &[
                    "None",
                    "Shortness of breath at rest",
                    "Shortness of breath with activity",
                    "Wheezing",
                    "Persistent cough",
                    "Coughing up blood",
                ],
                false,
                3,
            ),
            checkbox(
                15,
                "Any digestive symptoms?",
                &[
                    "None",
                    "Nausea",
                    "Vomiting",
                    "Diarrhea",
                    "Constipation",
                    "Loss of appetite",
                ],
                false,
                2,
            ),
            checkbox(
                16,
                "Any neurological symptoms?",
                &[
                    "None",
                    "Severe headache",
                    "Confusion",
                    "Vision changes",
                    "Numbness or tingling",
                    "Fainting",
                ],
                false,
                3,
            ),
            choice(
                17,
                "Does anything seem to trigger or worsen your symptoms?",
                &[
                    "Physical activity",
                    "Eating",
                    "Stress",
                    "Weather or temperature",
                    "Nothing specific",
                    "Not sure",
                ],
                1,
            ),
            choice(
                18,
                "Have you tried anything that relieves the symptoms?",
                &[
                    "Rest",
                    "Over-the-counter medication",
                    "Prescription medication",
                    "Home remedies",
                    "Nothing has helped",
                    "Haven't tried anything",
                ],
                1,
            ),
            choice(
                19,
                "How much do the symptoms interfere with your daily activities?",
                &[
                    "Not at all",
                    "Slightly",
                    "Moderately",
                    "Severely",
                    "I cannot carry out normal activities",
                ],
                2,
            ),
            scale(20, "How would you rate your energy level right now?", 1.0, 10.0, 2),
            choice(
                21,
                "How is your appetite compared to normal?",
                &["Normal", "Reduced", "Increased", "No appetite"],
                1,
            ),
            choice(
                22,
                "How has your sleep been since symptoms started?",
                &[
                    "Unaffected",
                    "Somewhat disturbed",
                    "Very disturbed",
                    "Sleeping much more than usual",
                ],
                2,
            ),
            choice(
                23,
                "Have you experienced similar symptoms before?",
                &[
                    "Never",
                    "Once before",
                    "Several times",
                    "This is a recurring problem",
                ],
                2,
            ),
            checkbox(
                24,
                "Do you have any of these ongoing conditions?",
                &[
                    "None",
                    "Diabetes",
                    "High blood pressure",
                    "Heart disease",
                    "Asthma or COPD",
                    "Weakened immune system",
                    "Kidney disease",
                ],
                false,
                2,
            ),
            text(
                25,
                "List any medications you are currently taking",
                false,
                "e.g. Metformin 500mg twice daily",
            ),
            text(26, "List any allergies you have", false, "e.g. Penicillin, peanuts"),
            choice(
                27,
                "Have you traveled outside the country in the last month?",
                &["No", "Yes"],
                1,
            ),
            choice(
                28,
                "Have you been around anyone with similar symptoms?",
                &["No", "Yes", "Not sure"],
                2,
            ),
            choice(
                29,
                "Do you smoke or use tobacco products?",
                &["Never", "Former smoker", "Occasionally", "Daily"],
                1,
            ),
            choice(
                30,
                "Are your routine vaccinations up to date?",
                &["Yes", "Partially", "No", "Not sure"],
                1,
            ),
            text(
                31,
                "Anything else you would like to mention about your symptoms?",
                false,
                "Describe anything else that feels relevant",
            ),
        ],
    });
    DEFINITION.clone()
}
