//! Static association of each inbound route with its upstream query and
//! formatter. A descriptor without a formatter serves upstream `data` as-is.

use serde_json::Value;

use crate::api::format::{self, Formatter};
use crate::api::queries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    UserData,
    UserBadges,
    UserContest,
    UserContestHistory,
    SolvedProblem,
    Submission,
    AcSubmission,
    Calendar,
    DailyProblem,
    SelectProblem,
    Problems,
    TrendingCategoryTopics,
    LanguageStats,
    UserProfileToday,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub query: &'static str,
    pub formatter: Option<Formatter>,
}

fn unformatted(data: &Value) -> Value {
    data.clone()
}

impl RouteDescriptor {
    /// The route's formatter, or one that hands `data` back unchanged.
    pub fn formatter_or_identity(&self) -> Formatter {
        self.formatter.unwrap_or(unformatted)
    }
}

impl Route {
    pub const ALL: [Route; 14] = [
        Route::UserData,
        Route::UserBadges,
        Route::UserContest,
        Route::UserContestHistory,
        Route::SolvedProblem,
        Route::Submission,
        Route::AcSubmission,
        Route::Calendar,
        Route::DailyProblem,
        Route::SelectProblem,
        Route::Problems,
        Route::TrendingCategoryTopics,
        Route::LanguageStats,
        Route::UserProfileToday,
    ];

    pub fn descriptor(self) -> RouteDescriptor {
        fn formatted(
            name: &'static str,
            path: &'static str,
            query: &'static str,
            formatter: Formatter,
        ) -> RouteDescriptor {
            RouteDescriptor {
                name,
                path,
                query,
                formatter: Some(formatter),
            }
        }

        match self {
            Route::UserData => formatted(
                "userData",
                "/{username}",
                queries::USER_PROFILE_QUERY,
                format::format_user_data,
            ),
            Route::UserBadges => formatted(
                "userBadges",
                "/{username}/badges",
                queries::USER_PROFILE_QUERY,
                format::format_badges_data,
            ),
            Route::UserContest => formatted(
                "userContest",
                "/{username}/contest",
                queries::CONTEST_QUERY,
                format::format_contest_data,
            ),
            Route::UserContestHistory => formatted(
                "userContestHistory",
                "/{username}/contest/history",
                queries::CONTEST_QUERY,
                format::format_contest_history_data,
            ),
            Route::SolvedProblem => formatted(
                "solvedProblem",
                "/{username}/solved",
                queries::USER_PROFILE_QUERY,
                format::format_solved_problems_data,
            ),
            Route::Submission => formatted(
                "submission",
                "/{username}/submission",
                queries::SUBMISSION_QUERY,
                format::format_submission_data,
            ),
            Route::AcSubmission => formatted(
                "acSubmission",
                "/{username}/acSubmission",
                queries::AC_SUBMISSION_QUERY,
                format::format_ac_submission_data,
            ),
            Route::Calendar => formatted(
                "calendar",
                "/{username}/calendar",
                queries::USER_PROFILE_QUERY,
                format::format_submission_calendar_data,
            ),
            Route::DailyProblem => formatted(
                "dailyProblem",
                "/daily",
                queries::DAILY_PROBLEM_QUERY,
                format::format_daily_data,
            ),
            Route::SelectProblem => formatted(
                "selectProblem",
                "/select",
                queries::SELECT_PROBLEM_QUERY,
                format::format_question_data,
            ),
            Route::Problems => formatted(
                "problems",
                "/problems",
                queries::PROBLEM_LIST_QUERY,
                format::format_problems_data,
            ),
            Route::TrendingCategoryTopics => formatted(
                "trendingCategoryTopics",
                "/trendingDiscuss",
                queries::TRENDING_DISCUSS_QUERY,
                format::format_trending_category_topic_data,
            ),
            Route::LanguageStats => RouteDescriptor {
                name: "languageStats",
                path: "/languageStats",
                query: queries::LANGUAGE_STATS_QUERY,
                formatter: None,
            },
            // Computes its own body from the calendar.
            Route::UserProfileToday => RouteDescriptor {
                name: "userProfileToday",
                path: "/userProfile/{username}/today",
                query: queries::USER_PROFILE_QUERY,
                formatter: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_and_paths_are_unique() {
        let names: HashSet<_> = Route::ALL.iter().map(|r| r.descriptor().name).collect();
        let paths: HashSet<_> = Route::ALL.iter().map(|r| r.descriptor().path).collect();
        assert_eq!(names.len(), Route::ALL.len());
        assert_eq!(paths.len(), Route::ALL.len());
    }

    #[test]
    fn only_language_stats_and_today_skip_formatting() {
        let raw: Vec<_> = Route::ALL
            .into_iter()
            .filter(|r| r.descriptor().formatter.is_none())
            .collect();
        assert_eq!(raw, [Route::LanguageStats, Route::UserProfileToday]);
    }

    #[test]
    fn identity_fallback_keeps_data() {
        let data = serde_json::json!({ "matchedUser": { "languageProblemCount": [] } });
        let formatter = Route::LanguageStats.descriptor().formatter_or_identity();
        assert_eq!(formatter(&data), data);
    }
}
