use super::{Assessment, ToolKind};
use crate::assessments::questionnaire::{AnswerRecord, ChoiceOption, QuestionDefinition, Questionnaire};
use crate::assessments::scoring::{
    AnswerFlag, Band, BandTable, FlagKind, RuleBook, ScoreBounds, ScoreMetric, ScoringResult,
    TextTrigger,
};

const QUESTIONS: &[QuestionDefinition] = &[
    QuestionDefinition::free_text(
        "project_idea",
        "Describe your project in one sentence.",
        "A time tracker that turns client hours into invoices",
    ),
    QuestionDefinition::free_text(
        "target_customer",
        "Who exactly is your target customer?",
        "Freelance designers billing 3+ clients a month",
    ),
    QuestionDefinition::choice(
        "problem_frequency",
        "How often does your customer run into this problem?",
        &[
            ChoiceOption { value: "daily", label: "Every day", weight: 3 },
            ChoiceOption { value: "weekly", label: "Every week", weight: 2 },
            ChoiceOption { value: "monthly", label: "Every month", weight: 1 },
            ChoiceOption { value: "rarely", label: "Rarely", weight: 0 },
        ],
    ),
    QuestionDefinition::choice(
        "current_solution",
        "What do they use to solve it today?",
        &[
            ChoiceOption { value: "competitor", label: "A paid competitor", weight: 3 },
            ChoiceOption { value: "workaround", label: "Spreadsheets or manual workarounds", weight: 2 },
            ChoiceOption { value: "nothing", label: "Nothing, they live with it", weight: 0 },
        ],
    ),
    QuestionDefinition::choice(
        "willingness_to_pay",
        "Would they pay to make the problem go away?",
        &[
            ChoiceOption { value: "already_paying", label: "They already pay for something", weight: 3 },
            ChoiceOption { value: "would_pay", label: "They told me they would pay", weight: 2 },
            ChoiceOption { value: "unsure", label: "Not sure", weight: 1 },
            ChoiceOption { value: "free_only", label: "They only use free tools", weight: 0 },
        ],
    ),
    QuestionDefinition::choice(
        "reach",
        "How would you reach your first 100 customers?",
        &[
            ChoiceOption { value: "direct_access", label: "I already know many of them", weight: 3 },
            ChoiceOption { value: "community", label: "Through a community I belong to", weight: 2 },
            ChoiceOption { value: "paid_ads", label: "Paid ads", weight: 1 },
            ChoiceOption { value: "no_idea", label: "No idea yet", weight: 0 },
        ],
    ),
    QuestionDefinition::choice(
        "unfair_advantage",
        "What gives you an edge over others building this?",
        &[
            ChoiceOption { value: "distribution", label: "An audience or distribution channel", weight: 3 },
            ChoiceOption { value: "domain_expertise", label: "Years working in this field", weight: 2 },
            ChoiceOption { value: "technical_skill", label: "I can build it fast", weight: 1 },
            ChoiceOption { value: "none", label: "Nothing in particular", weight: 0 },
        ],
    ),
];

const VAGUE_CUSTOMER: TextTrigger = TextTrigger {
    key: "vague_customer",
    question: "target_customer",
    phrases: &["everyone", "anyone", "everybody", "all businesses", "all people"],
    kind: FlagKind::Red,
    adjustment: -3,
    message: "\"Everyone\" is not a customer. Name a segment you can reach this week.",
};

const SPECIFIC_CUSTOMER: TextTrigger = TextTrigger {
    key: "specific_customer",
    question: "target_customer",
    phrases: &[
        "freelance",
        "agencies",
        "founders",
        "owners",
        "managers",
        "developers",
        "consultants",
    ],
    kind: FlagKind::Green,
    adjustment: 1,
    message: "Your target customer is a specific, reachable segment.",
};

const SPRAWLING_IDEA: TextTrigger = TextTrigger {
    key: "sprawling_idea",
    question: "project_idea",
    phrases: &["all-in-one", "like uber", "like facebook", "for everything"],
    kind: FlagKind::Red,
    adjustment: -1,
    message: "All-in-one ideas spread a small team thin. Lead with one job done well.",
};

static RULES: RuleBook = RuleBook {
    tool: ToolKind::ProjectScorer,
    questionnaire: Questionnaire::new(QUESTIONS),
    bands: BandTable::new(&[
        Band {
            min_percentage: 80,
            label: "Strong Opportunity",
            verdict: "Build it",
            insights: &[
                "Customers feel this problem often and already spend money on it.",
                "You have a realistic path to your first hundred customers.",
            ],
            recommendations: &[
                "Pre-sell to five customers before writing more code.",
                "Ship the smallest version that solves the core job within four weeks.",
            ],
        },
        Band {
            min_percentage: 60,
            label: "Promising",
            verdict: "Validate pricing",
            insights: &[
                "There is real demand, but one or two signals are still soft.",
            ],
            recommendations: &[
                "Run ten customer calls focused on what they pay for today.",
                "Put a price on a landing page and measure sign-ups before building.",
            ],
        },
        Band {
            min_percentage: 40,
            label: "Needs Validation",
            verdict: "Talk to customers",
            insights: &[
                "The idea rests on assumptions you have not tested yet.",
            ],
            recommendations: &[
                "Find three people with this problem and watch how they handle it today.",
                "Narrow the target customer until you can list twenty of them by name.",
            ],
        },
        Band {
            min_percentage: 0,
            label: "High Risk",
            verdict: "Rethink the idea",
            insights: &[
                "Demand, willingness to pay, and reach all look weak right now.",
            ],
            recommendations: &[
                "Pick a problem you or people you know pay to solve today.",
                "Treat this idea as a learning project rather than a business.",
            ],
        },
    ]),
    triggers: &[VAGUE_CUSTOMER, SPECIFIC_CUSTOMER, SPRAWLING_IDEA],
    answer_flags: &[
        AnswerFlag {
            question: "current_solution",
            value: "nothing",
            kind: FlagKind::Red,
            message: "If they use nothing today, the pain may not be worth paying to solve.",
        },
        AnswerFlag {
            question: "current_solution",
            value: "competitor",
            kind: FlagKind::Green,
            message: "A paid competitor proves the market exists.",
        },
        AnswerFlag {
            question: "willingness_to_pay",
            value: "already_paying",
            kind: FlagKind::Green,
            message: "Customers already spend money on this problem.",
        },
        AnswerFlag {
            question: "reach",
            value: "no_idea",
            kind: FlagKind::Red,
            message: "Without a channel to your first customers, a good product still stalls.",
        },
    ],
    bounds: ScoreBounds::new(1, 10),
};

const ACQUISITION_BOUNDS: ScoreBounds = ScoreBounds::new(1, 10);

/// Scores a side-project idea and estimates how hard its customers are to acquire.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectScorer;

impl ProjectScorer {
    /// 1 (easy) to 10 (hard), driven by reach and the current solution, nudged by
    /// how specific the target customer is.
    pub fn acquisition_difficulty(&self, answers: &AnswerRecord) -> u8 {
        let questionnaire = &RULES.questionnaire;
        let channel_points: i32 = ["reach", "current_solution"]
            .iter()
            .filter_map(|id| questionnaire.question(id))
            .map(|question| question.weight_of(answers.get(question.id)))
            .sum();

        let mut difficulty = 10 - (channel_points * 9 + 3) / 6;
        if VAGUE_CUSTOMER.fires(answers) {
            difficulty += 2;
        }
        if SPECIFIC_CUSTOMER.fires(answers) {
            difficulty -= 1;
        }
        ACQUISITION_BOUNDS.clamp(difficulty)
    }
}

impl Assessment for ProjectScorer {
    fn rule_book(&self) -> &RuleBook {
        &RULES
    }

    fn evaluate(&self, answers: &AnswerRecord) -> ScoringResult {
        let mut result = RULES.evaluate(answers);
        result.metrics.push(ScoreMetric {
            key: "acquisition_difficulty".to_string(),
            label: "Customer acquisition difficulty".to_string(),
            value: self.acquisition_difficulty(answers),
            bounds: ACQUISITION_BOUNDS,
        });
        result
    }
}
