use std::sync::LazyLock;

use super::{checkbox, choice, scale, text};
use crate::AssessmentDefinition;

const FREQUENCY: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

/// Mental Health Check: mood, anxiety, stress, and support. 25 questions,
/// ids 7–31. The screening-style frequency items carry the heavy weights.
pub fn definition() -> AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| AssessmentDefinition {
        assessment_id: "mental_health".to_string(),
        name: "Mental Health Check".to_string(),
        description: "Evaluate your mood, stress, and overall mental wellbeing".to_string(),
        version: "1.0".to_string(),
        questions: vec![
            scale(
                7,
                "How would you rate your overall mood over the past two weeks?",
                1.0,
                10.0,
                3,
            ),
            choice(
                8,
                "How often have you felt little interest or pleasure in doing things?",
                &FREQUENCY,
                3,
            ),
            choice(
                9,
                "How often have you felt down, depressed, or hopeless?",
                &FREQUENCY,
                3,
            ),
            choice(
                10,
                "How often have you had trouble falling or staying asleep?",
                &FREQUENCY,
                2,
            ),
            choice(
                11,
                "How often have you felt tired or had little energy?",
                &FREQUENCY,
                2,
            ),
            choice(
                12,
                "How often have you had a poor appetite or been overeating?",
                &FREQUENCY,
                2,
            ),
            choice(
                13,
                "How often have you had trouble concentrating on things?",
                &FREQUENCY,
                2,
            ),
            choice(
                14,
                "How often have you felt nervous, anxious, or on edge?",
                &FREQUENCY,
                3,
            ),
            choice(
                15,
                "How often have you been unable to stop or control worrying?",
                &FREQUENCY,
                3,
            ),
            scale(16, "How would you rate your current stress level?", 1.0, 10.0, 3),
            checkbox(
                17,
                "What are your main sources of stress?",
                &[
                    "Work or studies",
                    "Finances",
                    "Relationships",
                    "Health",
                    "Family responsibilities",
                    "World events",
                    "Other",
                ],
                false,
                2,
            ),
            checkbox(
                18,
                "Which coping strategies do you currently use?",
                &[
                    "Exercise",
                    "Talking to friends or family",
                    "Meditation or breathing exercises",
                    "Hobbies",
                    "Professional support",
                    "None of these",
                ],
                false,
                1,
            ),
            choice(
                19,
                "How supported do you feel by the people around you?",
                &[
                    "Very supported",
                    "Somewhat supported",
                    "Not very supported",
                    "Not supported at all",
                ],
                2,
            ),
            choice(
                20,
                "How often do you feel lonely?",
                &["Rarely or never", "Sometimes", "Often", "Almost always"],
                2,
            ),
            choice(
                21,
                "How satisfied are you with your work-life balance?",
                &[
                    "Very satisfied",
                    "Somewhat satisfied",
                    "Somewhat dissatisfied",
                    "Very dissatisfied",
                ],
                1,
            ),
            choice(
                22,
                "How many days per week do you get at least 30 minutes of physical activity?",
                &["0", "1-2", "3-4", "5 or more"],
                1,
            ),
            choice(
                23,
                "How often do you drink alcohol?",
                &[
                    "Never",
                    "Monthly or less",
                    "2-4 times a month",
                    "2-3 times a week",
                    "4 or more times a week",
                ],
                2,
            ),
            scale(24, "How would you rate your self-esteem lately?", 1.0, 10.0, 2),
            choice(
                25,
                "How often have you felt irritable or quick to anger?",
                &["Rarely", "Sometimes", "Often", "Almost always"],
                2,
            ),
            choice(
                26,
                "How hopeful do you feel about the future?",
                &[
                    "Very hopeful",
                    "Somewhat hopeful",
                    "Not very hopeful",
                    "Not hopeful at all",
                ],
                2,
            ),
            choice(
                27,
                "Have you previously received support for your mental health?",
                &[
                    "Never",
                    "In the past",
                    "Currently receiving support",
                    "Prefer not to say",
                ],
                1,
            ),
            choice(
                28,
                "How often do racing thoughts keep you awake at night?",
                &["Never", "Occasionally", "Most nights", "Every night"],
                3,
            ),
            choice(
                29,
                "How connected do you feel to activities that give your life meaning?",
                &[
                    "Very connected",
                    "Somewhat connected",
                    "Not very connected",
                    "Disconnected",
                ],
                1,
            ),
            checkbox(
                30,
                "Have you noticed any of these changes recently?",
                &[
                    "None",
                    "Withdrawing from friends",
                    "Crying more than usual",
                    "Changes in appetite",
                    "Difficulty getting out of bed",
                    "Loss of motivation",
                ],
                false,
                2,
            ),
            text(
                31,
                "Is there anything else about your mental wellbeing you would like to share?",
                false,
                "Anything that feels important",
            ),
        ],
    });
    DEFINITION.clone()
}
