//! Term registry
//!
//! Maps a term slug ("term-1" .. "term-8") to the remote root folder holding
//! that term's materials, plus the static catalogue shown in the term pane.

use std::collections::HashMap;

/// Number of academic terms (2 per year, 4 years)
pub const TERM_COUNT: u8 = 8;

const TERM_NAMES: [&str; TERM_COUNT as usize] = [
    "First Term",
    "Second Term",
    "Third Term",
    "Fourth Term",
    "Fifth Term",
    "Sixth Term",
    "Seventh Term",
    "Eighth Term",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    pub slug: String,
    /// Empty when no folder is configured for the term
    pub remote_root_id: String,
    pub display_name: String,
    pub year: u8,
    pub term_number: u8,
}

impl TermEntry {
    pub fn is_configured(&self) -> bool {
        !self.remote_root_id.is_empty()
    }
}

/// Slug of the n-th term (1-based)
pub fn term_slug(n: u8) -> String {
    format!("term-{}", n)
}

#[derive(Debug, Clone)]
pub struct TermRegistry {
    entries: HashMap<String, TermEntry>,
}

impl TermRegistry {
    /// Build all eight entries, taking root ids from `folder_ids` (slug -> id)
    pub fn new(folder_ids: &HashMap<String, String>) -> Self {
        let entries = (1..=TERM_COUNT)
            .map(|n| {
                let slug = term_slug(n);
                let entry = TermEntry {
                    remote_root_id: folder_ids.get(&slug).cloned().unwrap_or_default(),
                    display_name: TERM_NAMES[usize::from(n - 1)].to_string(),
                    year: n.div_ceil(2),
                    term_number: if n % 2 == 1 { 1 } else { 2 },
                    slug: slug.clone(),
                };
                (slug, entry)
            })
            .collect();

        Self { entries }
    }

    pub fn lookup(&self, slug: &str) -> Option<&TermEntry> {
        self.entries.get(slug)
    }

    /// Entries in term order
    pub fn terms(&self) -> Vec<&TermEntry> {
        (1..=TERM_COUNT)
            .filter_map(|n| self.entries.get(&term_slug(n)))
            .collect()
    }
}

/// Catalogue card for one term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermOverview {
    pub slug: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub subjects: &'static [&'static str],
}

/// One year tab in the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub terms: [TermOverview; 2],
}

const YEARS: [YearGroup; 4] = [
    YearGroup {
        id: "year1",
        label: "Year 1",
        terms: [
            TermOverview {
                slug: "term-1",
                label: "Term 1",
                description: "Introduction to Programming, Mathematics",
                subjects: &[
                    "Programming Fundamentals",
                    "Data Science",
                    "Mathematics",
                    "and more..",
                ],
            },
            TermOverview {
                slug: "term-2",
                label: "Term 2",
                description: "Advanced Programming, Data Structures Basics",
                subjects: &["Object-Oriented Programming", "Data Structures", "Statistics"],
            },
        ],
    },
    YearGroup {
        id: "year2",
        label: "Year 2",
        terms: [
            TermOverview {
                slug: "term-3",
                label: "Term 3",
                description: "Algorithms, Database Systems, Computer Architecture",
                subjects: &["Algorithms", "Database Systems", "Computer Architecture"],
            },
            TermOverview {
                slug: "term-4",
                label: "Term 4",
                description: "Operating Systems, Software Engineering",
                subjects: &[
                    "Operating Systems",
                    "Software Engineering",
                    "Numerical Analysis",
                    "Machine Learning Basics",
                ],
            },
        ],
    },
    YearGroup {
        id: "year3",
        label: "Year 3",
        terms: [
            TermOverview {
                slug: "term-5",
                label: "Term 5",
                description: "AI Foundations, Networks, Compilers",
                subjects: &[
                    "Artificial Intelligence",
                    "Computer Networks",
                    "Compilers",
                    "Theory of Computation",
                ],
            },
            TermOverview {
                slug: "term-6",
                label: "Term 6",
                description: "Machine Learning, Security, Distributed Systems",
                subjects: &[
                    "Machine Learning",
                    "Information Security",
                    "Distributed Systems",
                    "Computer Graphics",
                ],
            },
        ],
    },
    YearGroup {
        id: "year4",
        label: "Year 4",
        terms: [
            TermOverview {
                slug: "term-7",
                label: "Term 7",
                description: "Deep Learning, Cloud Computing, Big Data",
                subjects: &[
                    "Deep Learning",
                    "Big Data Analytics",
                    "Natural Language Processing",
                ],
            },
            TermOverview {
                slug: "term-8",
                label: "Term 8",
                description: "Graduation Project, Advanced Topics",
                subjects: &[
                    "Graduation Project",
                    "Advanced Topics",
                    "Research Methods",
                    "Professional Ethics",
                ],
            },
        ],
    },
];

/// The year/term catalogue, in display order
pub fn overview() -> &'static [YearGroup] {
    &YEARS
}

/// Catalogue card for a slug
pub fn term_overview(slug: &str) -> Option<&'static TermOverview> {
    YEARS
        .iter()
        .flat_map(|year| year.terms.iter())
        .find(|term| term.slug == slug)
}
