//! Reshapes raw upstream `data` into the public response for one route.
//!
//! Every formatter is total. Indexing a `Value` with a missing key yields
//! `Null`, so an incomplete upstream payload produces `null` fields rather
//! than a failed request.

use serde_json::{Map, Value, json};

pub type Formatter = fn(&Value) -> Value;

const PROBLEM_BASE_URL: &str = "https://leetcode.com/problems/";
const SITE_BASE_URL: &str = "https://leetcode.com";

fn len(value: &Value) -> Value {
    value.as_array().map_or(Value::Null, |items| json!(items.len()))
}

fn prefixed(prefix: &str, value: &Value) -> Value {
    value
        .as_str()
        .map_or(Value::Null, |tail| json!(format!("{prefix}{tail}")))
}

pub fn format_user_data(data: &Value) -> Value {
    let user = &data["matchedUser"];
    let profile = &user["profile"];
    json!({
        "username": user["username"],
        "name": profile["realName"],
        "birthday": profile["birthday"],
        "avatar": profile["userAvatar"],
        "ranking": profile["ranking"],
        "reputation": profile["reputation"],
        "gitHub": user["githubUrl"],
        "twitter": user["twitterUrl"],
        "linkedIN": user["linkedinUrl"],
        "website": profile["websites"],
        "country": profile["countryName"],
        "company": profile["company"],
        "school": profile["school"],
        "skillTags": profile["skillTags"],
        "about": profile["aboutMe"],
    })
}

pub fn format_badges_data(data: &Value) -> Value {
    let user = &data["matchedUser"];
    json!({
        "badgesCount": len(&user["badges"]),
        "badges": user["badges"],
        "upcomingBadges": user["upcomingBadges"],
        "activeBadge": user["activeBadge"],
    })
}

pub fn format_contest_data(data: &Value) -> Value {
    let ranking = &data["userContestRanking"];
    let participation = data["userContestRankingHistory"]
        .as_array()
        .map_or(Value::Null, |history| {
            history
                .iter()
                .filter(|entry| entry["attended"].as_bool() == Some(true))
                .cloned()
                .collect()
        });

    json!({
        "contestAttend": ranking["attendedContestsCount"],
        "contestRating": ranking["rating"],
        "contestGlobalRanking": ranking["globalRanking"],
        "totalParticipants": ranking["totalParticipants"],
        "contestTopPercentage": ranking["topPercentage"],
        "contestBadges": ranking["badge"],
        "contestParticipation": participation,
    })
}

pub fn format_contest_history_data(data: &Value) -> Value {
    let history = &data["userContestRankingHistory"];
    json!({
        "count": len(history),
        "contestHistory": history,
    })
}

/// `acSubmissionNum` is ordered All, Easy, Medium, Hard.
pub fn format_solved_problems_data(data: &Value) -> Value {
    let stats = &data["matchedUser"]["submitStats"];
    let accepted = &stats["acSubmissionNum"];
    json!({
        "solvedProblem": accepted[0]["count"],
        "easySolved": accepted[1]["count"],
        "mediumSolved": accepted[2]["count"],
        "hardSolved": accepted[3]["count"],
        "totalSubmissionNum": stats["totalSubmissionNum"],
        "acSubmissionNum": accepted,
    })
}

pub fn format_submission_data(data: &Value) -> Value {
    let submissions = &data["recentSubmissionList"];
    json!({
        "count": len(submissions),
        "submission": submissions,
    })
}

pub fn format_ac_submission_data(data: &Value) -> Value {
    let submissions = &data["recentAcSubmissionList"];
    json!({
        "count": len(submissions),
        "submission": submissions,
    })
}

pub fn format_submission_calendar_data(data: &Value) -> Value {
    json!({
        "submissionCalendar": data["matchedUser"]["submissionCalendar"],
    })
}

// (output key, upstream key) shared by the daily and selected problem routes.
const QUESTION_FIELDS: [(&str, &str); 15] = [
    ("questionId", "questionId"),
    ("questionFrontendId", "questionFrontendId"),
    ("questionTitle", "title"),
    ("titleSlug", "titleSlug"),
    ("difficulty", "difficulty"),
    ("isPaidOnly", "isPaidOnly"),
    ("question", "content"),
    ("exampleTestcases", "exampleTestcases"),
    ("topicTags", "topicTags"),
    ("hints", "hints"),
    ("solution", "solution"),
    ("companyTagStats", "companyTagStats"),
    ("likes", "likes"),
    ("dislikes", "dislikes"),
    ("similarQuestions", "similarQuestions"),
];

fn question_fields(question: &Value) -> Map<String, Value> {
    QUESTION_FIELDS
        .iter()
        .map(|(out, src)| (out.to_string(), question[*src].clone()))
        .collect()
}

pub fn format_question_data(data: &Value) -> Value {
    let question = &data["question"];
    let mut out = Map::new();
    out.insert("link".into(), prefixed(PROBLEM_BASE_URL, &question["titleSlug"]));
    out.extend(question_fields(question));
    Value::Object(out)
}

pub fn format_daily_data(data: &Value) -> Value {
    let daily = &data["activeDailyCodingChallengeQuestion"];
    let mut out = Map::new();
    out.insert("questionLink".into(), prefixed(SITE_BASE_URL, &daily["link"]));
    out.insert("date".into(), daily["date"].clone());
    out.extend(question_fields(&daily["question"]));
    Value::Object(out)
}

pub fn format_problems_data(data: &Value) -> Value {
    let list = &data["problemsetQuestionList"];
    json!({
        "totalQuestions": list["total"],
        "count": len(&list["questions"]),
        "problemsetQuestionList": list["questions"],
    })
}

pub fn format_trending_category_topic_data(data: &Value) -> Value {
    json!({
        "data": data["cachedTrendingCategoryTopics"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FORMATTERS: &[Formatter] = &[
        format_user_data,
        format_badges_data,
        format_contest_data,
        format_contest_history_data,
        format_solved_problems_data,
        format_submission_data,
        format_ac_submission_data,
        format_submission_calendar_data,
        format_question_data,
        format_daily_data,
        format_problems_data,
        format_trending_category_topic_data,
    ];

    #[test]
    fn formatters_tolerate_missing_fields() {
        for formatter in ALL_FORMATTERS {
            for input in [Value::Null, json!({}), json!({ "matchedUser": null })] {
                let out = formatter(&input);
                assert!(out.is_object(), "formatter must always produce an object");
            }
        }
    }

    #[test]
    fn user_data_renames_profile_fields() {
        let data = json!({
            "matchedUser": {
                "username": "uwi",
                "githubUrl": "https://github.com/uwi",
                "twitterUrl": null,
                "linkedinUrl": null,
                "profile": {
                    "realName": "uwi",
                    "userAvatar": "https://assets.leetcode.com/a.png",
                    "birthday": "",
                    "ranking": 1,
                    "reputation": 10,
                    "websites": ["https://example.com"],
                    "countryName": "Japan",
                    "company": null,
                    "school": null,
                    "skillTags": ["math"],
                    "aboutMe": "hi",
                    "starRating": 5
                }
            }
        });

        assert_eq!(
            format_user_data(&data),
            json!({
                "username": "uwi",
                "name": "uwi",
                "birthday": "",
                "avatar": "https://assets.leetcode.com/a.png",
                "ranking": 1,
                "reputation": 10,
                "gitHub": "https://github.com/uwi",
                "twitter": null,
                "linkedIN": null,
                "website": ["https://example.com"],
                "country": "Japan",
                "company": null,
                "school": null,
                "skillTags": ["math"],
                "about": "hi"
            })
        );
    }

    #[test]
    fn badges_are_counted() {
        let data = json!({
            "matchedUser": {
                "badges": [{ "id": "1" }, { "id": "2" }],
                "upcomingBadges": [],
                "activeBadge": { "id": "2" }
            }
        });
        let out = format_badges_data(&data);
        assert_eq!(out["badgesCount"], 2);
        assert_eq!(out["activeBadge"]["id"], "2");
        assert_eq!(out["upcomingBadges"], json!([]));
    }

    #[test]
    fn contest_participation_keeps_only_attended() {
        let data = json!({
            "userContestRanking": {
                "attendedContestsCount": 2,
                "rating": 2100.5,
                "globalRanking": 900,
                "totalParticipants": 500000,
                "topPercentage": 1.2,
                "badge": { "name": "Knight" }
            },
            "userContestRankingHistory": [
                { "attended": true, "contest": { "title": "Weekly 1" } },
                { "attended": false, "contest": { "title": "Weekly 2" } },
                { "attended": true, "contest": { "title": "Weekly 3" } }
            ]
        });

        let out = format_contest_data(&data);
        assert_eq!(out["contestAttend"], 2);
        assert_eq!(out["contestBadges"], json!({ "name": "Knight" }));
        let titles: Vec<_> = out["contestParticipation"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["contest"]["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Weekly 1", "Weekly 3"]);

        let history = format_contest_history_data(&data);
        assert_eq!(history["count"], 3);
    }

    #[test]
    fn solved_counts_follow_difficulty_order() {
        let data = json!({
            "matchedUser": {
                "submitStats": {
                    "totalSubmissionNum": [{ "difficulty": "All", "count": 30, "submissions": 90 }],
                    "acSubmissionNum": [
                        { "difficulty": "All", "count": 10 },
                        { "difficulty": "Easy", "count": 5 },
                        { "difficulty": "Medium", "count": 4 },
                        { "difficulty": "Hard", "count": 1 }
                    ]
                }
            }
        });
        let out = format_solved_problems_data(&data);
        assert_eq!(out["solvedProblem"], 10);
        assert_eq!(out["easySolved"], 5);
        assert_eq!(out["mediumSolved"], 4);
        assert_eq!(out["hardSolved"], 1);
        assert_eq!(out["totalSubmissionNum"][0]["submissions"], 90);
    }

    #[test]
    fn submissions_are_counted() {
        let data = json!({
            "recentSubmissionList": [{ "title": "Two Sum" }],
            "recentAcSubmissionList": [{ "title": "Two Sum" }, { "title": "Add Two Numbers" }]
        });
        assert_eq!(format_submission_data(&data)["count"], 1);
        assert_eq!(format_ac_submission_data(&data)["count"], 2);
        assert_eq!(format_ac_submission_data(&data)["submission"][1]["title"], "Add Two Numbers");
    }

    #[test]
    fn calendar_is_passed_as_string() {
        let data = json!({ "matchedUser": { "submissionCalendar": "{\"1704067200\": 3}" } });
        assert_eq!(
            format_submission_calendar_data(&data),
            json!({ "submissionCalendar": "{\"1704067200\": 3}" })
        );
    }

    #[test]
    fn question_gets_a_link() {
        let data = json!({
            "question": {
                "questionId": "1",
                "questionFrontendId": "1",
                "title": "Two Sum",
                "titleSlug": "two-sum",
                "difficulty": "Easy",
                "isPaidOnly": false,
                "content": "<p>Given an array...</p>",
                "likes": 100,
                "dislikes": 3
            }
        });
        let out = format_question_data(&data);
        assert_eq!(out["link"], "https://leetcode.com/problems/two-sum");
        assert_eq!(out["questionTitle"], "Two Sum");
        assert_eq!(out["question"], "<p>Given an array...</p>");
        assert_eq!(out["hints"], Value::Null);
    }

    #[test]
    fn daily_uses_site_relative_link() {
        let data = json!({
            "activeDailyCodingChallengeQuestion": {
                "date": "2024-01-01",
                "link": "/problems/two-sum/",
                "question": { "title": "Two Sum", "titleSlug": "two-sum" }
            }
        });
        let out = format_daily_data(&data);
        assert_eq!(out["questionLink"], "https://leetcode.com/problems/two-sum/");
        assert_eq!(out["date"], "2024-01-01");
        assert_eq!(out["questionTitle"], "Two Sum");
    }

    #[test]
    fn missing_link_is_null_not_a_bad_url() {
        assert_eq!(format_daily_data(&json!({}))["questionLink"], Value::Null);
        assert_eq!(format_question_data(&json!({}))["link"], Value::Null);
    }

    #[test]
    fn problems_report_total_and_page_size() {
        let data = json!({
            "problemsetQuestionList": {
                "total": 3000,
                "questions": [{ "titleSlug": "two-sum" }, { "titleSlug": "add-two-numbers" }]
            }
        });
        let out = format_problems_data(&data);
        assert_eq!(out["totalQuestions"], 3000);
        assert_eq!(out["count"], 2);
        assert_eq!(out["problemsetQuestionList"][0]["titleSlug"], "two-sum");
    }

    #[test]
    fn trending_topics_are_wrapped() {
        let data = json!({ "cachedTrendingCategoryTopics": [{ "id": 1, "title": "DP" }] });
        assert_eq!(
            format_trending_category_topic_data(&data),
            json!({ "data": [{ "id": 1, "title": "DP" }] })
        );
    }
}
