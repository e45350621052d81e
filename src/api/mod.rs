mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::assistant::{ChatService, SimulatedAssistant};
use crate::config::Config;
use crate::db::Database;
use crate::recommender::CourseRecommender;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub assistant: SimulatedAssistant,
    pub chat: ChatService,
    pub recommender: Arc<CourseRecommender>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            assistant: SimulatedAssistant::default(),
            chat: ChatService::Unconfigured,
            recommender: Arc::new(CourseRecommender::default()),
        }
    }

    pub fn from_config(db: Database, config: &Config, recommender: CourseRecommender) -> Self {
        Self {
            db,
            assistant: SimulatedAssistant::from_config(config),
            chat: ChatService::from_config(config),
            recommender: Arc::new(recommender),
        }
    }

    pub fn with_assistant(mut self, assistant: SimulatedAssistant) -> Self {
        self.assistant = assistant;
        self
    }

    pub fn with_chat(mut self, chat: ChatService) -> Self {
        self.chat = chat;
        self
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Catalog
        .route("/courses", get(handlers::list_courses))
        .route("/courses/{id}", get(handlers::get_course))
        // Students
        .route("/students/{id}", get(handlers::get_student))
        .route("/students/{id}/courses", get(handlers::get_student_courses))
        .route("/recommendations", post(handlers::get_recommendations))
        // Pages
        .route("/career-goals/roadmap", post(handlers::generate_roadmap))
        .route("/course-planning", post(handlers::generate_course_plan))
        .route("/feedback", post(handlers::submit_feedback))
        .route("/faq", get(handlers::list_faq))
        .route("/search", post(handlers::search))
        .route("/chat", post(handlers::chat))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
