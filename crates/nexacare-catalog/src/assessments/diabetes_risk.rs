use std::sync::LazyLock;

use super::{choice, number, text};
use crate::AssessmentDefinition;

/// Diabetes Risk Evaluation: anthropometrics, family history, diet, and the
/// classic warning signs. 25 questions, ids 7–31.
pub fn definition() -> AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| AssessmentDefinition {
        assessment_id: "diabetes_risk".to_string(),
        name: "Diabetes Risk Evaluation".to_string(),
        description: "Understand your risk of developing type 2 diabetes".to_string(),
        version: "1.0".to_string(),
        questions: vec![
            number(7, "What is your weight in kilograms?", 20.0, 300.0, true, 2, "e.g. 82"),
            number(8, "What is your height in centimetres?", 100.0, 250.0, true, 2, "e.g. 175"),
            choice(
                9,
                "How would you describe your waist circumference?",
                &[
                    "Below average",
                    "Average",
                    "Above average",
                    "Well above average",
                    "Not sure",
                ],
                3,
            ),
            choice(
                10,
                "Has anyone in your family been diagnosed with diabetes?",
                &[
                    "No",
                    "Grandparent or aunt/uncle",
                    "Parent or sibling",
                    "Both parents",
                    "Not sure",
                ],
                3,
            ),
            choice(
                11,
                "If you have been pregnant, were you diagnosed with gestational diabetes?",
                &["Not applicable", "No", "Yes", "Not sure"],
                2,
            ),
            choice(
                12,
                "Have you been told you have high blood pressure?",
                &["No", "Borderline", "Yes", "Not sure"],
                3,
            ),
            choice(
                13,
                "How many days per week are you physically active for at least 30 minutes?",
                &["0", "1-2", "3-4", "5 or more"],
                2,
            ),
            choice(
                14,
                "How often do you drink sugary drinks (soda, sweetened juice, energy drinks)?",
                &["Rarely or never", "A few times a week", "Once a day", "Several times a day"],
                3,
            ),
            choice(
                15,
                "How often do you eat sweets, pastries, or desserts?",
                &["Rarely", "A few times a week", "Once a day", "Several times a day"],
                2,
            ),
            choice(
                16,
                "How often do you eat whole grains (brown rice, oats, whole wheat)?",
                &["Daily", "A few times a week", "Rarely", "Never"],
                1,
            ),
            choice(
                17,
                "How many servings of fruit and vegetables do you eat daily?",
                &["None", "1-2", "3-4", "5 or more"],
                1,
            ),
            choice(
                18,
                "How much of your diet is processed or fast food?",
                &["Very little", "Some meals", "Most meals", "Nearly all meals"],
                2,
            ),
            choice(
                19,
                "Have you been unusually thirsty recently?",
                &["No", "Occasionally", "Frequently", "Constantly"],
                3,
            ),
            choice(
                20,
                "Are you urinating more often than usual, especially at night?",
                &["No", "Slightly more", "Noticeably more", "Much more"],
                3,
            ),
            choice(
                21,
                "Do you feel unusually tired after meals?",
                &["Never", "Occasionally", "Often", "After almost every meal"],
                2,
            ),
            choice(
                22,
                "Have you experienced episodes of blurred vision?",
                &["Never", "Occasionally", "Frequently"],
                2,
            ),
            choice(
                23,
                "Do cuts or bruises seem slow to heal?",
                &["No", "Sometimes", "Often", "Not sure"],
                2,
            ),
            choice(
                24,
                "Do you have tingling or numbness in your hands or feet?",
                &["Never", "Occasionally", "Often", "Constantly"],
                2,
            ),
            choice(
                25,
                "Have you noticed darkened patches of skin on your neck or armpits?",
                &["No", "Yes", "Not sure"],
                2,
            ),
            choice(
                26,
                "Has a doctor ever told you that you have prediabetes?",
                &["No", "Yes", "Not sure"],
                3,
            ),
            choice(
                27,
                "When was your blood glucose last tested?",
                &[
                    "Within the last year",
                    "1-3 years ago",
                    "More than 3 years ago",
                    "Never",
                    "Not sure",
                ],
                2,
            ),
            text(
                28,
                "If you know a recent glucose or HbA1c value, enter it",
                false,
                "e.g. 5.9 mmol/L or HbA1c 41",
            ),
            choice(
                29,
                "Do you smoke or use tobacco products?",
                &["Never", "Former smoker", "Occasionally", "Daily"],
                1,
            ),
            number(
                30,
                "How many hours of sleep do you get on a typical night?",
                0.0,
                16.0,
                false,
                1,
                "e.g. 7",
            ),
            text(
                31,
                "Anything else relevant to your diabetes risk you would like to mention?",
                false,
                "Medications, conditions, concerns",
            ),
        ],
    });
    DEFINITION.clone()
}
