use std::sync::LazyLock;

use super::{checkbox, choice, number, scale, text};
use crate::AssessmentDefinition;

/// Cardiovascular Health: blood pressure, symptoms, lifestyle, and family
/// history. 25 questions, ids 7–31.
pub fn definition() -> AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| AssessmentDefinition {
        assessment_id: "cardio_health".to_string(),
        name: "Cardiovascular Health".to_string(),
        description: "Assess your heart health and cardiovascular risk factors".to_string(),
        version: "1.0".to_string(),
        questions: vec![
            choice(
                7,
                "Have you been told you have high blood pressure?",
                &[
                    "No",
                    "Borderline",
                    "Yes - controlled with medication",
                    "Yes - not controlled",
                    "Not sure",
                ],
                3,
            ),
            text(
                8,
                "If you know your most recent blood pressure reading, enter it",
                false,
                "e.g. 120/80",
            ),
            number(
                9,
                "What is your typical resting heart rate (beats per minute)?",
                30.0,
                220.0,
                false,
                2,
                "e.g. 68",
            ),
            choice(
                10,
                "How often do you experience chest pain or discomfort?",
                &[
                    "Never",
                    "Only during intense exercise",
                    "During light activity",
                    "At rest",
                    "Daily",
                ],
                3,
            ),
            choice(
                11,
                "Do you ever notice your heart racing or skipping beats?",
                &["Never", "Rarely", "Sometimes", "Often"],
                2,
            ),
            choice(
                12,
                "Do you get short of breath climbing two flights of stairs?",
                &[
                    "Not at all",
                    "Slightly",
                    "Moderately",
                    "Severely",
                    "I avoid stairs",
                ],
                3,
            ),
            choice(
                13,
                "How many days per week do you do at least 30 minutes of moderate exercise?",
                &["0", "1-2", "3-4", "5 or more"],
                2,
            ),
            choice(
                14,
                "What kind of exercise do you usually do?",
                &[
                    "None",
                    "Walking",
                    "Running or cycling",
                    "Strength training",
                    "Team sports",
                    "Mixed",
                ],
                1,
            ),
            number(
                15,
                "How many hours per day do you typically spend sitting?",
                0.0,
                24.0,
                false,
                2,
                "e.g. 8",
            ),
            choice(
                16,
                "Do you smoke or use tobacco products?",
                &[
                    "Never",
                    "Former smoker - quit over a year ago",
                    "Former smoker - quit recently",
                    "Occasionally",
                    "Daily",
                ],
                3,
            ),
            choice(
                17,
                "How often do you drink alcohol?",
                &["Never", "Monthly or less", "Weekly", "Several times a week", "Daily"],
                2,
            ),
            checkbox(
                18,
                "How would you describe your typical diet?",
                &[
                    "High in fried food",
                    "High in salt",
                    "High in processed food",
                    "High in sugar",
                    "Mostly home-cooked",
                    "Mostly plant-based",
                ],
                false,
                2,
            ),
            choice(
                19,
                "How many servings of fruit and vegetables do you eat daily?",
                &["None", "1-2", "3-4", "5 or more"],
                1,
            ),
            checkbox(
                20,
                "Has a close family member had any of the following?",
                &[
                    "None",
                    "Heart attack before age 60",
                    "Stroke",
                    "High blood pressure",
                    "High cholesterol",
                    "Type 2 diabetes",
                ],
                false,
                3,
            ),
            choice(
                21,
                "Have you been told you have high cholesterol?",
                &["No", "Borderline", "Yes - managed", "Yes - unmanaged", "Never tested"],
                3,
            ),
            choice(
                22,
                "Have you been diagnosed with diabetes or prediabetes?",
                &[
                    "No",
                    "Prediabetes",
                    "Type 1 diabetes",
                    "Type 2 diabetes",
                    "Not sure",
                ],
                2,
            ),
            choice(
                23,
                "How would you describe your current weight?",
                &[
                    "Underweight",
                    "Normal",
                    "Slightly overweight",
                    "Significantly overweight",
                    "Not sure",
                ],
                2,
            ),
            choice(
                24,
                "Do your ankles or feet ever swell by the end of the day?",
                &["Never", "Occasionally", "Most days", "Every day"],
                2,
            ),
            choice(
                25,
                "Do you ever feel dizzy or lightheaded when standing up?",
                &["Never", "Occasionally", "Often", "Almost always"],
                2,
            ),
            choice(
                26,
                "Do you snore loudly, or has anyone observed you stop breathing during sleep?",
                &[
                    "No",
                    "I snore occasionally",
                    "I snore loudly most nights",
                    "I have been told I stop breathing",
                    "Diagnosed with sleep apnea",
                ],
                2,
            ),
            scale(27, "How would you rate your day-to-day stress level?", 1.0, 10.0, 2),
            number(
                28,
                "How many hours of sleep do you get on a typical night?",
                0.0,
                16.0,
                false,
                2,
                "e.g. 7",
            ),
            choice(
                29,
                "Are you currently taking any blood pressure or heart medication?",
                &["No", "Yes - one medication", "Yes - several medications", "Not sure"],
                2,
            ),
            choice(
                30,
                "Do you take aspirin or blood thinners regularly?",
                &["No", "Yes - on my own initiative", "Yes - prescribed", "Not sure"],
                1,
            ),
            text(
                31,
                "Anything else about your heart health you would like to mention?",
                false,
                "Family history details, symptoms, concerns",
            ),
        ],
    });
    DEFINITION.clone()
}
