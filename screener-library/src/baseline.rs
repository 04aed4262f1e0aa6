//! Questions every screener starts from, in standard order.

use screener_types::{AnswerOption, Question, QuestionKind};

use crate::sections;

pub(crate) fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "intro_read",
            sections::INTRODUCTION,
            "Hello, my name is ___________ from ____________, a market research firm. We are conducting a survey today on various products. This is not an attempt to sell you anything. We are interested in your opinions. Would you spare a few minutes to answer some questions? All your answers will be kept confidential.",
            QuestionKind::Open,
        )
        .with_label("S_Intro")
        .with_instructions("RECRUITER READ ONLY.")
        .with_tags(["intro", "universal"])
        .required(),
        Question::new("gender", sections::DEMOGRAPHICS, "Record gender.", QuestionKind::Single)
            .with_label("S_Gender")
            .with_options([
                "Male",
                "Female",
                "Non-binary",
                "Gender non-conforming",
                "Gender fluid",
                "Prefer to self-identify",
                "Prefer not to answer",
            ])
            .with_tags(["demographics", "gender", "quota", "universal"])
            .required(),
        Question::new(
            "research_participation",
            sections::DISQUALIFICATION,
            "Have you ever participated in a market research discussion group or individual interview?",
            QuestionKind::Single,
        )
        .with_label("S_ResearchParticipation")
        .with_options(["Yes", "No"])
        .with_instructions(
            "IF YES: How long ago? (Within past 3 months = TERMINATE; >4 sessions in past year = TERMINATE)",
        )
        .with_tags(["experience", "dq", "universal"])
        .required(),
        Question::new(
            "industry_exclusions",
            sections::DISQUALIFICATION,
            "Do you or does anyone in your family currently work for or have ever worked for any of the following? (READ LIST)",
            QuestionKind::Multi,
        )
        .with_label("S_IndustryExclusions")
        .with_options([
            "Market research firm",
            "A marketing or research department of a company (including in-store sampling firms/promotional agencies, etc.)",
            "Advertising agency",
            "Public relations firm",
            "A media company such as radio, newspaper, TV, magazine, etc.",
            "A graphic or packaging design firm",
            "Art or design-related fields such as art teachers, interior designers, architects, commercial photography, printing, etc.",
            "A company involved in the manufacturing, distribution, or sale of any products in this category",
        ])
        .with_instructions("IF YES TO ANY: TERMINATE.")
        .with_tags(["dq", "industry", "universal"])
        .required(),
        Question::new(
            "age",
            sections::DEMOGRAPHICS,
            "What is your age? RECORD BELOW.",
            QuestionKind::Open,
        )
        .with_label("S_Age")
        .with_tags(["demographics", "age", "quota", "universal"])
        .required(),
        Question::new(
            "hh_shopping_role",
            sections::HOUSEHOLD,
            "How much of the household’s grocery shopping do you, yourself, do?",
            QuestionKind::Single,
        )
        .with_label("S_ShoppingRole")
        .with_options([
            AnswerOption::plain("All of it"),
            AnswerOption::plain("Half of it or more"),
            AnswerOption::terminate("Less than half of it"),
            AnswerOption::terminate("None of it"),
        ])
        .with_instructions("IF 'Less than half' or 'None': TERMINATE.")
        .with_tags(["household", "shopping", "universal"])
        .required(),
        Question::new(
            "brand_decider",
            sections::HOUSEHOLD,
            "Which is most accurate about who decides what brands of {{categoryName}} to buy in your household?",
            QuestionKind::Single,
        )
        .with_label("S_BrandDecider")
        .with_options([
            AnswerOption::plain("I am the primary decision maker"),
            AnswerOption::plain("I am a joint decision maker"),
            AnswerOption::terminate("I am not involved"),
        ])
        .with_instructions("IF 'Not involved': TERMINATE.")
        .with_tags(["household", "decision", "universal"]),
        Question::new(
            "category_usage",
            sections::CATEGORY,
            "Which, if any, of the following types of {{categoryName}} have you purchased and personally used in the past [timeframe]? (READ LIST.)",
            QuestionKind::Multi,
        )
        .with_label("S_CategoryUsage")
        .with_options(["[Study-specific category list]"])
        .with_instructions("IF 'None of the above': TERMINATE.")
        .with_tags(["category", "usage", "universal"]),
        Question::new(
            "brand_grid",
            sections::BRANDS,
            "Thinking about {{categoryName}} brands: Which are you AWARE of? Which have you PURCHASED in the past [timeframe]? Which ONE do you purchase MOST OFTEN? Which would you NOT CONSIDER in the future?",
            QuestionKind::Open,
        )
        .with_label("S_BrandGrid")
        .with_instructions("Use brand grid (Aware / P[timeframe] / Most Often / Would Not Consider).")
        .with_tags(["brands", "grid", "universal"]),
        Question::new(
            "articulation",
            sections::ARTICULATION,
            "Imagine it is the year 2050. What would grocery stores be like? How would they be different from the ones you see today? How might shopping be any different?",
            QuestionKind::Open,
        )
        .with_label("S_Articulation")
        .with_instructions(
            "SCREEN FOR QUALITY OF RESPONSE & INTEREST IN THE CATEGORY. RECRUIT THOSE WHO ARTICULATE FEELINGS AND OPINIONS; DO NOT RECRUIT THOSE WHO ARE RELUCTANT OR TIMID.",
        )
        .with_tags(["articulation", "universal"]),
        Question::new(
            "marital_status",
            sections::DEMOGRAPHICS,
            "What is your current marital status?",
            QuestionKind::Single,
        )
        .with_label("S_MaritalStatus")
        .with_options([
            "Married or living with someone",
            "Single",
            "Divorced or separated",
            "Widowed",
        ])
        .with_tags(["demographics", "marital", "universal"]),
        Question::new(
            "children_hh",
            sections::HOUSEHOLD,
            "Do you have any children under the age of 18 currently living in your household?",
            QuestionKind::Single,
        )
        .with_label("S_Children")
        .with_options(["Yes", "No"])
        .with_tags(["household", "children", "universal"]),
        Question::new(
            "ethnicity",
            sections::DEMOGRAPHICS,
            "Which of the following best describes your ethnicity?",
            QuestionKind::Single,
        )
        .with_label("S_Ethnicity")
        .with_options([
            "Caucasian/White",
            "African American / Black",
            "Asian/Pacific Islander",
            "Hispanic/Latino",
            "Other",
            "Prefer not to answer",
        ])
        .with_tags(["demographics", "ethnicity", "quota", "universal"]),
        Question::new(
            "education",
            sections::DEMOGRAPHICS,
            "What is the last level of education that you completed?",
            QuestionKind::Single,
        )
        .with_label("S_Education")
        .with_options([
            "Some High School or less",
            "Completed High School",
            "Some College or Technical School",
            "Completed College/Technical School",
            "Some Post-Graduate Study or more",
        ])
        .with_instructions(
            "Often: TERMINATE if 'Some High School or less' unless study specifies otherwise.",
        )
        .with_tags(["demographics", "education", "universal"]),
        Question::new(
            "employment_status",
            sections::DEMOGRAPHICS,
            "What is your current employment status?",
            QuestionKind::Multi,
        )
        .with_label("S_Employment")
        .with_options([
            "Employed Full-Time",
            "Employed Part-Time",
            "Full-Time Homemaker",
            "Part or Full-Time Student",
            "Retired",
            "Currently Seeking Employment",
        ])
        .with_instructions("Often: TERMINATE if Currently Seeking Employment.")
        .with_tags(["demographics", "employment", "universal"]),
        Question::new(
            "occupation_checks",
            sections::DEMOGRAPHICS,
            "ASK IF EMPLOYED: What is your occupation? In what kind of business? ASK IF MARRIED: Spouse’s occupation/business? ASK ALL: Previous occupation/business?",
            QuestionKind::Open,
        )
        .with_label("S_Occupation")
        .with_instructions(
            "CHECK AGAINST INDUSTRY EXCLUSIONS. TERMINATE if related to MR/Advertising/PR/Media/Design/etc.",
        )
        .with_tags(["demographics", "employment", "universal"]),
        Question::new(
            "income",
            sections::DEMOGRAPHICS,
            "What is your total annual household income?",
            QuestionKind::Single,
        )
        .with_label("S_Income")
        .with_options([
            "Less than $30,000",
            "$30,000 - $44,999",
            "$45,000 - $59,999",
            "$60,000 - $74,999",
            "$75,000 - $99,999",
            "$100,000 or more",
        ])
        .with_instructions("Threshold varies by study; apply study-specific termination.")
        .with_tags(["demographics", "income", "quota", "universal"]),
        Question::new(
            "vision_colorblind",
            sections::LOGISTICS,
            "During the discussion you will be asked to visually evaluate some concepts. Are you colorblind or do you have any eyesight or reading problems that would prevent you from being able to do this?",
            QuestionKind::Single,
        )
        .with_label("S_Vision")
        .with_options([AnswerOption::terminate("Yes"), AnswerOption::plain("No")])
        .with_instructions("IF YES: TERMINATE.")
        .with_tags(["logistics", "vision", "universal"]),
        Question::new(
            "invitation",
            sections::INVITATION,
            "IF QUALIFIED: You are eligible to participate in a market research discussion on consumer products. This is not an attempt to sell you anything. The discussion will last about [X] minutes and for your time you will receive $______. May we count on your attendance?",
            QuestionKind::Single,
        )
        .with_label("S_Invitation")
        .with_options(["Yes", "No"])
        .with_tags(["invitation", "universal"]),
        Question::new(
            "rcda",
            sections::CONSENT,
            "Respondent Confidentiality Disclosure Agreement (RCDA) — confidentiality, photo/video release, IP, data privacy, limitation of liability.",
            QuestionKind::Open,
        )
        .with_label("S_RCDA")
        .with_instructions(
            "Use standard RCDA text (in-person: onsite; online: emailed/e-signed).",
        )
        .with_tags(["consent", "rcda", "universal"]),
    ]
}
