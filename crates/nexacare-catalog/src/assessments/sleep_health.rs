use std::sync::LazyLock;

use super::{choice, number, scale, text};
use crate::AssessmentDefinition;

/// Sleep Health Check: schedule, quality, hygiene, and disorder screening.
/// 25 questions, ids 7–31.
pub fn definition() -> AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| AssessmentDefinition {
        assessment_id: "sleep_health".to_string(),
        name: "Sleep Health Check".to_string(),
        description: "Review your sleep quality and habits".to_string(),
        version: "1.0".to_string(),
        questions: vec![
            number(
                7,
                "How many hours of sleep do you get on a typical night?",
                0.0,
                16.0,
                true,
                3,
                "e.g. 6.5",
            ),
            text(8, "What time do you usually go to bed?", true, "e.g. 23:30"),
            text(9, "What time do you usually wake up?", true, "e.g. 07:00"),
            choice(
                10,
                "How long does it usually take you to fall asleep?",
                &["Under 15 minutes", "15-30 minutes", "30-60 minutes", "Over an hour"],
                3,
            ),
            choice(
                11,
                "How often do you wake up during the night?",
                &["Rarely or never", "Once", "Two or three times", "Four or more times"],
                3,
            ),
            choice(
                12,
                "Do you wake up earlier than intended and struggle to fall back asleep?",
                &["Never", "Occasionally", "A few times a week", "Most mornings"],
                2,
            ),
            scale(13, "How would you rate your overall sleep quality?", 1.0, 10.0, 3),
            choice(
                14,
                "How rested do you feel when you wake up?",
                &["Fully rested", "Mostly rested", "Somewhat tired", "Exhausted"],
                2,
            ),
            scale(
                15,
                "How sleepy do you feel during the day? (1 = wide awake, 10 = fighting sleep)",
                1.0,
                10.0,
                3,
            ),
            choice(
                16,
                "How often do you nap during the day?",
                &["Never", "Occasionally", "Most days", "Multiple times a day"],
                1,
            ),
            choice(
                17,
                "Do you snore?",
                &["No", "Occasionally", "Most nights", "Every night", "Not sure"],
                2,
            ),
            choice(
                18,
                "Has anyone observed you gasp or stop breathing during sleep?",
                &["No", "Once or twice", "Several times", "Regularly", "Not sure"],
                3,
            ),
            choice(
                19,
                "Do you get an irresistible urge to move your legs at night?",
                &["Never", "Occasionally", "Most nights", "Every night"],
                2,
            ),
            choice(
                20,
                "Do you consume caffeine after midday?",
                &["Never", "Occasionally", "Most days", "Multiple drinks daily"],
                2,
            ),
            choice(
                21,
                "Do you drink alcohol in the evening?",
                &["Never", "Occasionally", "Most evenings", "Every evening"],
                2,
            ),
            choice(
                22,
                "Do you use your phone or watch screens in bed before sleep?",
                &["Never", "Occasionally", "Most nights", "Every night"],
                2,
            ),
            choice(
                23,
                "Is your bedroom dark and quiet?",
                &["Yes, both", "Dark but noisy", "Quiet but bright", "Neither"],
                1,
            ),
            choice(
                24,
                "How is the temperature in your bedroom at night?",
                &["Comfortable", "Too warm", "Too cold", "It varies"],
                1,
            ),
            choice(
                25,
                "Do you go to bed and wake up at consistent times?",
                &["Very consistent", "Mostly consistent", "Somewhat irregular", "Very irregular"],
                2,
            ),
            choice(
                26,
                "How much later do you sleep in on weekends or days off?",
                &["No difference", "Up to an hour", "1-2 hours", "More than 2 hours"],
                1,
            ),
            choice(
                27,
                "When do you usually exercise?",
                &["I don't exercise", "Morning", "Afternoon", "Within 2 hours of bedtime"],
                1,
            ),
            choice(
                28,
                "Does stress or a racing mind keep you awake?",
                &["Never", "Occasionally", "Most nights", "Every night"],
                2,
            ),
            choice(
                29,
                "Do you take anything to help you sleep?",
                &[
                    "Nothing",
                    "Herbal remedies or melatonin",
                    "Over-the-counter sleep aids",
                    "Prescription sleep medication",
                ],
                2,
            ),
            choice(
                30,
                "Have you ever been diagnosed with a sleep disorder?",
                &["No", "Insomnia", "Sleep apnea", "Restless legs syndrome", "Other"],
                2,
            ),
            text(
                31,
                "Anything else about your sleep you would like to mention?",
                false,
                "Shift work, travel, recent changes",
            ),
        ],
    });
    DEFINITION.clone()
}
