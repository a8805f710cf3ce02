mod dispatcher;
mod error;
mod handlers;
mod routes;
mod today;

use axum::{Router, routing::get};

pub use dispatcher::Dispatcher;
pub use routes::Route;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
}

pub fn router(state: AppState) -> Router {
    let path = |route: Route| route.descriptor().path;

    Router::new()
        .route("/", get(handlers::index))
        .route(path(Route::UserData), get(handlers::user_data))
        .route(path(Route::UserBadges), get(handlers::user_badges))
        .route(path(Route::UserContest), get(handlers::user_contest))
        .route(
            path(Route::UserContestHistory),
            get(handlers::user_contest_history),
        )
        .route(path(Route::SolvedProblem), get(handlers::solved_problem))
        .route(path(Route::Submission), get(handlers::submission))
        .route(path(Route::AcSubmission), get(handlers::ac_submission))
        .route(path(Route::Calendar), get(handlers::calendar))
        .route(path(Route::DailyProblem), get(handlers::daily_problem))
        .route(path(Route::SelectProblem), get(handlers::select_problem))
        .route(path(Route::Problems), get(handlers::problems))
        .route(
            path(Route::TrendingCategoryTopics),
            get(handlers::trending_category_topics),
        )
        .route(path(Route::LanguageStats), get(handlers::language_stats))
        .route(
            path(Route::UserProfileToday),
            get(today::user_profile_today),
        )
        .with_state(state)
}
