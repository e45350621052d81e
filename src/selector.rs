//! Keyword-based dataset selection.
//!
//! A [`KeywordSelector`] holds an ordered list of rules. The input is
//! lowercased and each rule matches when any of its keywords occurs as a
//! substring. The first matching rule wins; when nothing matches the
//! fallback is returned, so selection always succeeds.

use crate::catalog::{CoursePlanTrack, RoadmapTrack};

/// Keywords that route an input to `target`. Keywords must be lowercase.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<K: 'static> {
    pub keywords: &'static [&'static str],
    pub target: K,
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordSelector<K: 'static> {
    rules: &'static [KeywordRule<K>],
    fallback: K,
}

impl<K: Copy> KeywordSelector<K> {
    pub const fn new(rules: &'static [KeywordRule<K>], fallback: K) -> Self {
        Self { rules, fallback }
    }

    pub fn select(&self, input: &str) -> K {
        let input = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| input.contains(kw)))
            .map(|rule| rule.target)
            .unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> K {
        self.fallback
    }
}

/// Picks a learning roadmap from preferred job titles.
pub const ROADMAP_SELECTOR: KeywordSelector<RoadmapTrack> = KeywordSelector::new(
    &[
        KeywordRule {
            keywords: &["machine learning", "ml engineer"],
            target: RoadmapTrack::MlEngineer,
        },
        KeywordRule {
            keywords: &["data scientist"],
            target: RoadmapTrack::DataScientist,
        },
    ],
    RoadmapTrack::MlEngineer,
);

/// Picks a course timeline from a preferred career path.
pub const COURSE_PLAN_SELECTOR: KeywordSelector<CoursePlanTrack> = KeywordSelector::new(
    &[
        KeywordRule {
            keywords: &["machine learning"],
            target: CoursePlanTrack::MlEngineer,
        },
        KeywordRule {
            keywords: &["software"],
            target: CoursePlanTrack::SoftwareDeveloper,
        },
    ],
    CoursePlanTrack::MlEngineer,
);

pub fn roadmap_track(job_titles: &str) -> RoadmapTrack {
    ROADMAP_SELECTOR.select(job_titles)
}

pub fn course_plan_track(career_path: &str) -> CoursePlanTrack {
    COURSE_PLAN_SELECTOR.select(career_path)
}
