//! Conditional blocks, one per study mode.

use screener_types::{AnswerOption, Mode, Question, QuestionKind};

use crate::sections;

/// The mode → block table. Every mode appears exactly once.
pub(crate) fn table() -> [(Mode, Vec<Question>); 3] {
    [
        (Mode::Online, online_tech_check()),
        (Mode::InPersonExternal, facility_arrival()),
        (Mode::InPersonShopperLab, shopperlab_met()),
    ]
}

fn online_tech_check() -> Vec<Question> {
    vec![
        Question::new(
            "tech_devices",
            sections::ONLINE_TECH,
            "Which devices do you own and use regularly? (Smartphone; Tablet; Laptop with webcam and mouse; Desktop with webcam and mouse; Smart Watch)",
            QuestionKind::Multi,
        )
        .with_label("O_TechDevices")
        .with_instructions("ALL RESPONDENTS MUST HAVE A LAPTOP OR DESKTOP WITH WEBCAM.")
        .with_tags(["online", "tech", "dq"]),
        Question::new(
            "tech_comfort",
            sections::ONLINE_TECH,
            "Which best describes your comfort using a computer or laptop?",
            QuestionKind::Single,
        )
        .with_label("O_TechComfort")
        .with_options([
            AnswerOption::plain("Very comfortable — typically use one daily"),
            AnswerOption::terminate("Somewhat comfortable — use a few times a week"),
            AnswerOption::terminate("Not comfortable — rarely use one"),
        ])
        .with_instructions("TERMINATE if not 'Very comfortable'.")
        .with_tags(["online", "tech", "dq"]),
        Question::new(
            "tech_rules",
            sections::ONLINE_TECH,
            "RECRUITER READ: You are required to join from your laptop or desktop computer (no phones/tablets). Join 15 minutes early for tech checks. Stay on camera; avoid multitasking.",
            QuestionKind::Open,
        )
        .with_label("O_TechRules")
        .with_instructions("RECRUITER READ ONLY.")
        .with_tags(["online", "tech"]),
    ]
}

// Vision is already covered by the universal list.
fn facility_arrival() -> Vec<Question> {
    vec![
        Question::new(
            "arrival_reminder",
            sections::FACILITY,
            "As a courtesy to other participants, please arrive 15 minutes early so we can begin on time.",
            QuestionKind::Open,
        )
        .with_label("F_ArrivalReminder")
        .with_instructions("RECRUITER READ ONLY.")
        .with_tags(["facility", "logistics"]),
    ]
}

/// Mobile eye-tracking checks.
fn shopperlab_met() -> Vec<Question> {
    vec![
        Question::new(
            "met_ok",
            sections::SHOPPERLAB_MET,
            "During the interview you will be asked to wear a set of non-prescription eyeglasses (mobile eye-tracking). Is this OK?",
            QuestionKind::Single,
        )
        .with_label("M_Wearability")
        .with_options([AnswerOption::plain("Yes"), AnswerOption::terminate("No")])
        .with_instructions("IF NO: TERMINATE.")
        .with_tags(["shopperlab", "met", "dq"])
        .required(),
        Question::new(
            "met_vision_devices",
            sections::SHOPPERLAB_MET,
            "Which of the following do you ever wear while shopping in a grocery store? (READ LIST.)",
            QuestionKind::Single,
        )
        .with_label("M_VisionDevices")
        .with_options([
            AnswerOption::terminate("Only glasses or reading glasses"),
            AnswerOption::plain("Only contact lenses"),
            AnswerOption::plain("Either glasses or contact lenses"),
            AnswerOption::plain("Neither glasses nor contact lenses"),
        ])
        .with_instructions(
            "IF 'Only glasses/reading glasses': TERMINATE. If 'Only contacts' or 'Either': ask respondent to wear NON-COLORED contacts on study day.",
        )
        .with_tags(["shopperlab", "met", "dq"]),
        Question::new(
            "met_four_feet",
            sections::SHOPPERLAB_MET,
            "Do you have issues seeing objects from 4 feet away?",
            QuestionKind::Single,
        )
        .with_label("M_FourFeet")
        .with_options([AnswerOption::terminate("Yes"), AnswerOption::plain("No")])
        .with_instructions("IF YES: TERMINATE.")
        .with_tags(["shopperlab", "met", "dq"]),
        Question::new(
            "met_eye_conditions",
            sections::SHOPPERLAB_MET,
            "Do you have any eyesight problems (e.g., current/reoccurring eye injuries, colorblindness, pink eye, astigmatism, strabismus, etc.)?",
            QuestionKind::Single,
        )
        .with_label("M_EyeConditions")
        .with_options([AnswerOption::terminate("Yes"), AnswerOption::plain("No")])
        .with_instructions("IF YES: TERMINATE.")
        .with_tags(["shopperlab", "met", "dq"]),
        Question::new(
            "met_mobility",
            sections::SHOPPERLAB_MET,
            "Do you currently use a wheelchair, motorized scooter, walker, or any other type of walking assistance device while shopping?",
            QuestionKind::Single,
        )
        .with_label("M_Mobility")
        .with_options([AnswerOption::terminate("Yes"), AnswerOption::plain("No")])
        .with_instructions("IF YES: TERMINATE.")
        .with_tags(["shopperlab", "met", "dq"]),
        Question::new(
            "met_rubber_allergy",
            sections::SHOPPERLAB_MET,
            "Are you allergic to rubber?",
            QuestionKind::Single,
        )
        .with_label("M_RubberAllergy")
        .with_options([AnswerOption::terminate("Yes"), AnswerOption::plain("No")])
        .with_instructions("IF YES: TERMINATE.")
        .with_tags(["shopperlab", "met", "dq"]),
        Question::new(
            "met_recruiter_read",
            sections::SHOPPERLAB_MET,
            "RECRUITER READ: Please refrain from eye makeup and colored contacts on the day of research (no tinted/colored contacts, eye shadow, liner, mascara, eyelash extensions).",
            QuestionKind::Open,
        )
        .with_label("M_RecruiterRead")
        .with_instructions("RECRUITER READ ONLY.")
        .with_tags(["shopperlab", "met"]),
    ]
}
