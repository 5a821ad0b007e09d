use super::{Assessment, ToolKind};
use crate::assessments::questionnaire::{ChoiceOption, QuestionDefinition, Questionnaire};
use crate::assessments::scoring::{AnswerFlag, Band, BandTable, FlagKind, RuleBook, ScoreBounds};

const QUESTIONS: &[QuestionDefinition] = &[
    QuestionDefinition::choice(
        "audience_size",
        "How many people follow you or your product today?",
        &[
            ChoiceOption { value: "none", label: "Nobody yet", weight: 0 },
            ChoiceOption { value: "under_100", label: "Fewer than 100", weight: 1 },
            ChoiceOption { value: "under_1000", label: "100 to 1,000", weight: 2 },
            ChoiceOption { value: "over_1000", label: "More than 1,000", weight: 3 },
        ],
    ),
    QuestionDefinition::choice(
        "problem_validation",
        "How have you validated the problem?",
        &[
            ChoiceOption { value: "assumption", label: "It's my own assumption", weight: 0 },
            ChoiceOption { value: "friends", label: "Friends said they like it", weight: 1 },
            ChoiceOption { value: "interviews", label: "Interviews with target customers", weight: 2 },
            ChoiceOption { value: "preorders", label: "People pre-ordered or paid", weight: 3 },
        ],
    ),
    QuestionDefinition::choice(
        "waitlist",
        "How big is your waitlist?",
        &[
            ChoiceOption { value: "none", label: "No waitlist", weight: 0 },
            ChoiceOption { value: "small", label: "Under 50 sign-ups", weight: 1 },
            ChoiceOption { value: "medium", label: "50 to 500 sign-ups", weight: 2 },
            ChoiceOption { value: "large", label: "More than 500 sign-ups", weight: 3 },
        ],
    ),
    QuestionDefinition::choice(
        "pricing",
        "Where are you with pricing?",
        &[
            ChoiceOption { value: "undecided", label: "Haven't decided", weight: 0 },
            ChoiceOption { value: "free", label: "Launching free", weight: 1 },
            ChoiceOption { value: "tested", label: "Tested a price with a few people", weight: 2 },
            ChoiceOption { value: "validated", label: "Customers already pay this price", weight: 3 },
        ],
    ),
    QuestionDefinition::choice(
        "launch_channel",
        "Where will you announce the launch?",
        &[
            ChoiceOption { value: "none", label: "Not planned yet", weight: 0 },
            ChoiceOption { value: "social", label: "My social accounts", weight: 1 },
            ChoiceOption { value: "communities", label: "Communities where customers hang out", weight: 2 },
            ChoiceOption { value: "owned_list", label: "My own email list", weight: 3 },
        ],
    ),
    QuestionDefinition::choice(
        "mvp_status",
        "How far along is the product?",
        &[
            ChoiceOption { value: "idea", label: "Still an idea", weight: 0 },
            ChoiceOption { value: "building", label: "Being built", weight: 1 },
            ChoiceOption { value: "beta", label: "In private beta", weight: 2 },
            ChoiceOption { value: "live_users", label: "Live with active users", weight: 3 },
        ],
    ),
    QuestionDefinition::choice(
        "launch_timeline",
        "When is the launch date?",
        &[
            ChoiceOption { value: "no_date", label: "No date set", weight: 0 },
            ChoiceOption { value: "over_3_months", label: "More than three months out", weight: 1 },
            ChoiceOption { value: "within_3_months", label: "Within three months", weight: 2 },
            ChoiceOption { value: "within_month", label: "Within a month", weight: 3 },
        ],
    ),
];

static RULES: RuleBook = RuleBook {
    tool: ToolKind::LaunchDiagnostic,
    questionnaire: Questionnaire::new(QUESTIONS),
    bands: BandTable::new(&[
        Band {
            min_percentage: 80,
            label: "Very High (80–95%)",
            verdict: "Launch ready",
            insights: &[
                "You have an audience, validated demand, and a price people accept.",
            ],
            recommendations: &[
                "Set the launch date and tell your list today.",
                "Prepare a launch-day offer that rewards your earliest supporters.",
            ],
        },
        Band {
            min_percentage: 60,
            label: "Good (60–80%)",
            verdict: "Almost ready",
            insights: &[
                "Most launch foundations are in place; a few gaps could cost you momentum.",
            ],
            recommendations: &[
                "Close the weakest gap first, usually pricing or the launch channel.",
                "Grow the waitlist for two more weeks before announcing.",
            ],
        },
        Band {
            min_percentage: 40,
            label: "Moderate (40–60%)",
            verdict: "Needs work",
            insights: &[
                "The product may be ready, but the people who would buy it are not yet lined up.",
            ],
            recommendations: &[
                "Spend the next month building a waitlist instead of features.",
                "Interview five target customers and test a price with each.",
            ],
        },
        Band {
            min_percentage: 0,
            label: "Low (20–40%)",
            verdict: "Not ready",
            insights: &[
                "Launching now would mostly be announcing to an empty room.",
            ],
            recommendations: &[
                "Validate the problem with real conversations before setting a date.",
                "Start collecting email addresses from anyone who shows interest.",
            ],
        },
    ]),
    triggers: &[],
    answer_flags: &[
        AnswerFlag {
            question: "waitlist",
            value: "large",
            kind: FlagKind::Green,
            message: "A waitlist above 500 gives launch day real momentum.",
        },
        AnswerFlag {
            question: "problem_validation",
            value: "assumption",
            kind: FlagKind::Red,
            message: "The problem has only been validated in your own head.",
        },
        AnswerFlag {
            question: "pricing",
            value: "undecided",
            kind: FlagKind::Red,
            message: "Launching without a price leaves you unable to measure demand.",
        },
    ],
    bounds: ScoreBounds::new(1, 10),
};

/// Estimates launch success probability from seven readiness questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchDiagnostic;

impl Assessment for LaunchDiagnostic {
    fn rule_book(&self) -> &RuleBook {
        &RULES
    }
}
