//! Fixed built-in article sets, one per category.
//!
//! Served when every live source fails, so a cycle always ends with a
//! non-empty set. Publish timestamps are offsets from the current time;
//! everything else is fixed.

use chrono::{Duration, Utc};

use crate::models::{Article, Category};

struct StaticArticle {
    title: &'static str,
    summary: &'static str,
    source: &'static str,
    hours_ago: i64,
}

impl StaticArticle {
    fn materialize(&self) -> Article {
        Article {
            title: self.title.to_string(),
            summary: self.summary.to_string(),
            source: self.source.to_string(),
            published_at: (Utc::now() - Duration::hours(self.hours_ago)).to_rfc3339(),
            url: "#".to_string(),
            url_to_image: None,
        }
    }
}

const TECHNOLOGY: &[StaticArticle] = &[
    StaticArticle {
        title: "Breakthrough in Renewable Energy Storage Technology",
        summary: "Scientists develop new battery technology that could revolutionize clean energy storage, promising longer-lasting and more efficient solutions.",
        source: "Tech News",
        hours_ago: 0,
    },
    StaticArticle {
        title: "AI Breakthrough Promises Better Healthcare Outcomes",
        summary: "Machine learning algorithms achieve 95% accuracy in early disease detection, potentially saving millions of lives through preventive care.",
        source: "Health Tech",
        hours_ago: 3,
    },
    StaticArticle {
        title: "Tech Layoffs Continue as Companies Restructure",
        summary: "Major technology companies announce additional job cuts as they adjust to changing market conditions and economic pressures.",
        source: "Tech Industry",
        hours_ago: 4,
    },
    StaticArticle {
        title: "New Smartphone Innovation Revolutionizes Mobile Photography",
        summary: "Latest smartphone camera technology delivers professional-quality photos with advanced AI processing and enhanced low-light performance.",
        source: "Mobile Tech",
        hours_ago: 6,
    },
];

const BUSINESS: &[StaticArticle] = &[
    StaticArticle {
        title: "Global Economic Markets Show Mixed Signals",
        summary: "Financial markets experience volatility as investors react to changing economic indicators and policy announcements.",
        source: "Business Daily",
        hours_ago: 1,
    },
    StaticArticle {
        title: "Startup Secures Record-Breaking Investment Funding",
        summary: "Innovative fintech startup raises $500 million in Series C funding, marking the largest investment in the sector this year.",
        source: "Finance Today",
        hours_ago: 7,
    },
    StaticArticle {
        title: "Major Retail Chain Announces Store Closures",
        summary: "Popular retail chain announces plans to close 200 stores nationwide due to declining sales and increased online competition.",
        source: "Retail News",
        hours_ago: 8,
    },
];

const SCIENCE: &[StaticArticle] = &[
    StaticArticle {
        title: "Climate Change Report Warns of Accelerating Crisis",
        summary: "New research indicates that climate change impacts are occurring faster than previously predicted, with severe consequences for global ecosystems.",
        source: "Science Today",
        hours_ago: 2,
    },
    StaticArticle {
        title: "Space Exploration Mission Achieves Historic Milestone",
        summary: "International space mission successfully completes first phase of Mars exploration, opening new possibilities for interplanetary research.",
        source: "Space News",
        hours_ago: 5,
    },
    StaticArticle {
        title: "Revolutionary Cancer Treatment Shows Promising Results",
        summary: "New immunotherapy treatment achieves 80% success rate in clinical trials, offering hope for patients with previously untreatable cancers.",
        source: "Medical Research",
        hours_ago: 9,
    },
];

const HEALTH: &[StaticArticle] = &[
    StaticArticle {
        title: "Mental Health Awareness Campaign Reaches Millions",
        summary: "National mental health initiative successfully connects with over 10 million people, providing resources and support for those in need.",
        source: "Health Weekly",
        hours_ago: 10,
    },
    StaticArticle {
        title: "New Vaccine Development Faces Regulatory Challenges",
        summary: "Pharmaceutical company encounters unexpected delays in vaccine approval process, raising concerns about timeline for public distribution.",
        source: "Medical News",
        hours_ago: 11,
    },
];

const SPORTS: &[StaticArticle] = &[
    StaticArticle {
        title: "Olympic Athletes Break Multiple World Records",
        summary: "International sporting event concludes with athletes setting new world records in swimming, track, and gymnastics competitions.",
        source: "Sports Daily",
        hours_ago: 12,
    },
    StaticArticle {
        title: "Professional League Faces Player Safety Concerns",
        summary: "Recent studies reveal increased risk of long-term health issues among professional athletes, prompting calls for rule changes.",
        source: "Athletic News",
        hours_ago: 13,
    },
];

const ENTERTAINMENT: &[StaticArticle] = &[
    StaticArticle {
        title: "Blockbuster Movie Breaks Box Office Records",
        summary: "Latest superhero film surpasses all previous records, becoming the highest-grossing movie of all time with global success.",
        source: "Entertainment Weekly",
        hours_ago: 14,
    },
    StaticArticle {
        title: "Streaming Platform Faces Content Controversy",
        summary: "Popular streaming service receives criticism for content moderation policies, with creators and viewers expressing concerns about censorship.",
        source: "Media News",
        hours_ago: 15,
    },
];

/// The fixed set for a category. Non-empty for every category.
pub fn articles_for(category: Category) -> Vec<Article> {
    let table = match category {
        Category::Technology => TECHNOLOGY,
        Category::Business => BUSINESS,
        Category::Science => SCIENCE,
        Category::Health => HEALTH,
        Category::Sports => SPORTS,
        Category::Entertainment => ENTERTAINMENT,
    };
    table.iter().map(StaticArticle::materialize).collect()
}
