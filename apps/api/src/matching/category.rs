//! Category Classifier: coarse occupational grouping used to keep
//! cross-domain matches (marketing CV vs. construction job) out of results.
//!
//! Classification scans `CATEGORIES` in declared order and returns the first
//! category whose title phrases or keywords occur in the text. A text that fits
//! several categories therefore lands in the earliest one, not the best one.

use serde::Serialize;

use crate::matching::normalize::NormalizedText;
use crate::models::job::JobSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Marketing,
    Design,
    Technology,
    Finance,
    Sales,
    #[serde(rename = "hr")]
    HumanResources,
    Engineering,
    Content,
}

/// Keyword sets defining one category. All entries are lower case.
#[derive(Debug)]
pub struct CategoryDef {
    pub category: Category,
    /// Job-title phrases; also drive the exact-title ranking boost.
    pub titles: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

impl CategoryDef {
    fn matches(&self, text: &NormalizedText) -> bool {
        self.titles.iter().any(|t| text.contains(t))
            || self.keywords.iter().any(|k| text.contains(k))
    }
}

/// Scan order matters: first match wins.
pub static CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        category: Category::Marketing,
        titles: &[
            "marketing manager",
            "маркетингийн менежер",
            "digital marketing manager",
            "дижитал маркетингийн менежер",
            "marketing specialist",
            "маркетингийн мэргэжилтэн",
            "marketing coordinator",
            "маркетингийн зохицуулагч",
            "brand manager",
            "брэнд менежер",
        ],
        keywords: &[
            "marketing",
            "маркетинг",
            "digital marketing",
            "дижитал маркетинг",
            "brand marketing",
            "брэнд маркетинг",
            "marketing strategy",
            "маркетингийн стратеги",
        ],
    },
    CategoryDef {
        category: Category::Design,
        titles: &[
            "designer",
            "дизайнер",
            "senior designer",
            "ахлах дизайнер",
            "graphic designer",
            "график дизайнер",
            "ui designer",
            "ux designer",
            "product designer",
            "бүтээгдэхүүний дизайнер",
            "web designer",
            "веб дизайнер",
            "art director",
            "арт директор",
        ],
        keywords: &[
            "design",
            "дизайн",
            "graphic",
            "график",
            "ui/ux",
            "user interface",
            "user experience",
            "adobe",
            "figma",
            "sketch",
            "photoshop",
            "illustrator",
        ],
    },
    CategoryDef {
        category: Category::Technology,
        titles: &[
            "software engineer",
            "программист",
            "developer",
            "хөгжүүлэгч",
            "web developer",
            "веб хөгжүүлэгч",
            "frontend developer",
            "backend developer",
            "full stack developer",
        ],
        keywords: &[
            "programming",
            "програмчлал",
            "coding",
            "кодчлол",
            "software",
            "программ хангамж",
            "javascript",
            "python",
            "java",
            "react",
            "node.js",
        ],
    },
    CategoryDef {
        category: Category::Finance,
        titles: &[
            "accountant",
            "нягтлан",
            "financial analyst",
            "санхүүгийн шинжээч",
            "finance manager",
            "санхүүгийн менежер",
            "financial controller",
            "санхүүгийн хянагч",
        ],
        keywords: &[
            "finance",
            "санхүү",
            "accounting",
            "нягтлан бодох",
            "financial",
            "banking",
            "банк",
            "budget",
            "төсөв",
        ],
    },
    CategoryDef {
        category: Category::Sales,
        titles: &[
            "sales manager",
            "борлуулалтын менежер",
            "sales representative",
            "борлуулалтын төлөөлөгч",
            "business development manager",
        ],
        keywords: &[
            "sales",
            "борлуулалт",
            "selling",
            "худалдаа",
            "business development",
            "бизнес хөгжүүлэлт",
            "account management",
        ],
    },
    CategoryDef {
        category: Category::HumanResources,
        titles: &[
            "hr manager",
            "хүний нөөцийн менежер",
            "recruiter",
            "hr specialist",
            "хүний нөөцийн мэргэжилтэн",
        ],
        keywords: &[
            "human resources",
            "хүний нөөц",
            "recruitment",
            "ажилтан сонгон шалгаруулах",
            "hiring",
            "personnel",
            "боловсон хүчин",
        ],
    },
    CategoryDef {
        category: Category::Engineering,
        titles: &[
            "mechanical engineer",
            "механик инженер",
            "civil engineer",
            "иргэний инженер",
            "electrical engineer",
            "цахилгаан инженер",
            "construction manager",
            "барилгын инженер",
            "барилгын мастер",
            "engineer",
            "инженер",
        ],
        keywords: &[
            "engineering",
            "инженерчлэл",
            "mechanical",
            "механик",
            "electrical",
            "цахилгаан",
            "civil",
            "construction",
            "барилга",
        ],
    },
    CategoryDef {
        category: Category::Content,
        titles: &[
            "content writer",
            "контент зохиогч",
            "copywriter",
            "копирайтер",
            "content creator",
            "контент бүтээгч",
            "editor",
            "редактор",
        ],
        keywords: &[
            "content",
            "контент",
            "writing",
            "copywriting",
            "копирайтинг",
            "editing",
        ],
    },
];

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Marketing => "marketing",
            Category::Design => "design",
            Category::Technology => "technology",
            Category::Finance => "finance",
            Category::Sales => "sales",
            Category::HumanResources => "hr",
            Category::Engineering => "engineering",
            Category::Content => "content",
        }
    }

    pub fn definition(self) -> &'static CategoryDef {
        // Every variant has exactly one entry in CATEGORIES.
        CATEGORIES
            .iter()
            .find(|def| def.category == self)
            .unwrap_or(&CATEGORIES[0])
    }
}

/// First category (in declared order) whose titles or keywords occur in `text`.
pub fn classify(text: &NormalizedText) -> Option<Category> {
    CATEGORIES
        .iter()
        .find(|def| def.matches(text))
        .map(|def| def.category)
}

/// Classifies a job by its title and requirements together.
pub fn classify_job(job: &JobSummary) -> Option<Category> {
    classify(&NormalizedText::new(&format!(
        "{} {}",
        job.title, job.requirements
    )))
}

/// Whether the job title equals or contains one of `category`'s title phrases.
pub fn has_exact_title_match(job_title: &str, category: Category) -> bool {
    let title = NormalizedText::new(job_title.trim());
    category
        .definition()
        .titles
        .iter()
        .any(|phrase| title.as_str() == *phrase || title.contains(phrase))
}
