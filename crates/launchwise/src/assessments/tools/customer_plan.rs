use super::{Assessment, ToolKind};
use crate::assessments::questionnaire::{ChoiceOption, QuestionDefinition, Questionnaire};
use crate::assessments::scoring::{
    AnswerFlag, Band, BandTable, FlagKind, RuleBook, ScoreBounds, TextTrigger,
};

const QUESTIONS: &[QuestionDefinition] = &[
    QuestionDefinition::free_text(
        "offer",
        "What are you selling?",
        "A fixed-price accessibility audit for Shopify stores",
    ),
    QuestionDefinition::free_text(
        "ideal_customer",
        "Describe your ideal customer.",
        "Shopify store owners doing $10k+ a month",
    ),
    QuestionDefinition::free_text(
        "where_they_gather",
        "Where do they spend time online?",
        "The r/shopify subreddit and the Shopify Partners Slack",
    ),
    QuestionDefinition::choice(
        "existing_audience",
        "Who already knows about your work?",
        &[
            ChoiceOption { value: "none", label: "Nobody yet", weight: 0 },
            ChoiceOption { value: "friends_family", label: "Friends and family", weight: 1 },
            ChoiceOption { value: "small_following", label: "A small social following", weight: 2 },
            ChoiceOption { value: "engaged_list", label: "An engaged email list", weight: 3 },
        ],
    ),
    QuestionDefinition::choice(
        "weekly_hours",
        "How many hours a week can you spend finding customers?",
        &[
            ChoiceOption { value: "under_2", label: "Less than 2", weight: 0 },
            ChoiceOption { value: "two_to_5", label: "2 to 5", weight: 1 },
            ChoiceOption { value: "five_to_10", label: "5 to 10", weight: 2 },
            ChoiceOption { value: "over_10", label: "More than 10", weight: 3 },
        ],
    ),
    QuestionDefinition::choice(
        "budget",
        "What monthly budget do you have for acquisition?",
        &[
            ChoiceOption { value: "none", label: "Nothing", weight: 0 },
            ChoiceOption { value: "under_100", label: "Under $100", weight: 1 },
            ChoiceOption { value: "under_500", label: "$100 to $500", weight: 2 },
            ChoiceOption { value: "over_500", label: "More than $500", weight: 3 },
        ],
    ),
    QuestionDefinition::choice(
        "sales_comfort",
        "How do you feel about reaching out to strangers?",
        &[
            ChoiceOption { value: "avoid", label: "I avoid it", weight: 0 },
            ChoiceOption { value: "nervous", label: "Nervous but willing", weight: 1 },
            ChoiceOption { value: "comfortable", label: "Comfortable", weight: 2 },
            ChoiceOption { value: "enjoy", label: "I enjoy it", weight: 3 },
        ],
    ),
];

static RULES: RuleBook = RuleBook {
    tool: ToolKind::CustomerPlan,
    questionnaire: Questionnaire::new(QUESTIONS),
    bands: BandTable::new(&[
        Band {
            min_percentage: 80,
            label: "Ready to Sell",
            verdict: "Go get customers",
            insights: &[
                "You know who you serve, where they are, and have the time to reach them.",
            ],
            recommendations: &[
                "Send twenty personal messages this week with a direct offer.",
                "Ask every customer for one referral once the work is delivered.",
            ],
        },
        Band {
            min_percentage: 60,
            label: "Ready to Start",
            verdict: "Start outreach",
            insights: &[
                "Your plan is workable; consistency will matter more than tactics.",
            ],
            recommendations: &[
                "Block two fixed outreach sessions in your calendar every week.",
                "Share one useful post a week where your customers gather.",
            ],
        },
        Band {
            min_percentage: 40,
            label: "Build Foundations",
            verdict: "Build trust first",
            insights: &[
                "You will need visible proof of your work before strangers buy.",
            ],
            recommendations: &[
                "Do two discounted projects in exchange for testimonials.",
                "Start a simple email list and invite everyone you talk to.",
            ],
        },
        Band {
            min_percentage: 0,
            label: "Start Small",
            verdict: "Find one customer",
            insights: &[
                "Time, audience, and budget are all thin right now, so focus beats reach.",
            ],
            recommendations: &[
                "Aim for one paying customer from your existing network first.",
                "Spend an hour a week answering questions where your customers ask them.",
            ],
        },
    ]),
    triggers: &[
        TextTrigger {
            key: "vague_customer",
            question: "ideal_customer",
            phrases: &["everyone", "anyone", "everybody", "all businesses", "all people"],
            kind: FlagKind::Red,
            adjustment: -2,
            message: "\"Everyone\" is not a customer. Describe one person you could email today.",
        },
        TextTrigger {
            key: "unknown_gathering_place",
            question: "where_they_gather",
            phrases: &["not sure", "don't know", "dont know", "no idea", "everywhere"],
            kind: FlagKind::Red,
            adjustment: -1,
            message: "If you can't name where they gather, start with customer interviews.",
        },
        TextTrigger {
            key: "named_gathering_place",
            question: "where_they_gather",
            phrases: &[
                "subreddit",
                "slack",
                "discord",
                "forum",
                "linkedin group",
                "meetup",
                "newsletter",
            ],
            kind: FlagKind::Green,
            adjustment: 1,
            message: "You named a specific place where your customers already gather.",
        },
    ],
    answer_flags: &[
        AnswerFlag {
            question: "weekly_hours",
            value: "under_2",
            kind: FlagKind::Red,
            message: "Under two hours a week is rarely enough to land a first customer.",
        },
        AnswerFlag {
            question: "existing_audience",
            value: "engaged_list",
            kind: FlagKind::Green,
            message: "An engaged list is the fastest route to first sales.",
        },
        AnswerFlag {
            question: "sales_comfort",
            value: "avoid",
            kind: FlagKind::Red,
            message: "Avoiding outreach means leaning on content, which takes months to pay off.",
        },
    ],
    bounds: ScoreBounds::new(1, 10),
};

/// Gauges readiness to find the first paying customers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerPlan;

impl Assessment for CustomerPlan {
    fn rule_book(&self) -> &RuleBook {
        &RULES
    }
}
