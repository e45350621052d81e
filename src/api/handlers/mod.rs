use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use super::AppState;
use crate::catalog;
use crate::models::*;
use crate::recommender::{recommend_for_student, RecommendationError};
use crate::views::{CareerGoalsView, CoursePlanningView, FeedbackForm, FormError, SearchBox};

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

/// Form validation failures are shown to the user as-is.
fn form_error(e: FormError) -> (StatusCode, String) {
    tracing::warn!("Validation error: {}", e);
    (StatusCode::BAD_REQUEST, e.to_string())
}

impl IntoResponse for RecommendationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NoData | Self::MissingStudentId => StatusCode::BAD_REQUEST,
            Self::StudentNotFound => StatusCode::NOT_FOUND,
            Self::Storage(e) => return internal_error(e).into_response(),
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

// ============================================================
// Courses
// ============================================================

pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, (StatusCode, String)> {
    state.db.get_all_courses().map(Json).map_err(internal_error)
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, (StatusCode, String)> {
    state
        .db
        .get_course(id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Course not found".to_string()))
}

// ============================================================
// Students
// ============================================================

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, (StatusCode, String)> {
    state
        .db
        .get_student(id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Student not found".to_string()))
}

pub async fn get_student_courses(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Enrollment>>, (StatusCode, String)> {
    state
        .db
        .get_student_enrollments(id)
        .map(Json)
        .map_err(internal_error)
}

/// Recommend catalog courses for a student.
///
/// The body is parsed by hand so that a missing, empty or non-object body
/// gets the same "No data provided" error as an empty object.
pub async fn get_recommendations(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Course>>, RecommendationError> {
    let data = serde_json::from_slice::<Value>(&body)
        .ok()
        .filter(|v| v.as_object().is_some_and(|o| !o.is_empty()))
        .ok_or(RecommendationError::NoData)?;

    let student_id = student_id_from(&data["student_id"])?;

    recommend_for_student(&state.db, &state.recommender, student_id).map(Json)
}

/// Accepts numeric ids and numeric strings. Null, zero and empty count as missing.
fn student_id_from(value: &Value) -> Result<i64, RecommendationError> {
    let id = match value {
        Value::Null => None,
        Value::Number(n) => Some(n.as_i64().ok_or(RecommendationError::StudentNotFound)?),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(
            s.trim()
                .parse::<i64>()
                .map_err(|_| RecommendationError::StudentNotFound)?,
        ),
        _ => return Err(RecommendationError::StudentNotFound),
    };

    match id {
        None | Some(0) => Err(RecommendationError::MissingStudentId),
        Some(id) => Ok(id),
    }
}

// ============================================================
// Career Goals
// ============================================================

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub job_titles: String,
}

pub async fn generate_roadmap(
    State(state): State<AppState>,
    Json(input): Json<RoadmapRequest>,
) -> Result<Json<CareerGoalsResults>, (StatusCode, String)> {
    let mut view = CareerGoalsView::new();
    view.set_job_titles(input.job_titles);
    view.submit(&state.assistant).await.map_err(form_error)?;

    match view {
        CareerGoalsView::Results(results) => Ok(Json(results)),
        CareerGoalsView::Input { .. } => Err(internal_error("roadmap was not generated")),
    }
}

// ============================================================
// Course Planning
// ============================================================

#[derive(Debug, Deserialize)]
pub struct CoursePlanRequest {
    #[serde(default)]
    pub program_url: String,
    #[serde(default)]
    pub career_path: String,
}

pub async fn generate_course_plan(
    State(state): State<AppState>,
    Json(input): Json<CoursePlanRequest>,
) -> Result<Json<CoursePlanResults>, (StatusCode, String)> {
    let mut view = CoursePlanningView::new();
    view.set_program_url(input.program_url);
    view.set_career_path(input.career_path);
    view.submit(&state.assistant).await.map_err(form_error)?;

    match view {
        CoursePlanningView::Results(results) => Ok(Json(results)),
        CoursePlanningView::Input { .. } => Err(internal_error("course plan was not generated")),
    }
}

// ============================================================
// Feedback
// ============================================================

#[derive(Debug, Serialize)]
pub struct FeedbackReceipt {
    pub status: &'static str,
    pub id: Uuid,
}

pub async fn submit_feedback(
    Json(input): Json<FeedbackSubmission>,
) -> Result<Json<FeedbackReceipt>, (StatusCode, String)> {
    let mut form = FeedbackForm::new();
    form.edit(|fields| *fields = input).map_err(form_error)?;
    let id = form.submit().map_err(form_error)?;

    Ok(Json(FeedbackReceipt {
        status: "received",
        id,
    }))
}

pub async fn list_faq() -> Json<Vec<Faq>> {
    Json(catalog::faq())
}

// ============================================================
// Search
// ============================================================

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

pub async fn search(Json(input): Json<SearchRequest>) -> impl IntoResponse {
    let mut search = SearchBox::default();
    search.set_query(input.query);
    search.submit();
    Json(json!({ "results": [] }))
}

// ============================================================
// Chat
// ============================================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    if input.message.trim().is_empty() {
        return Err(form_error(FormError::MissingField("Message")));
    }

    let reply = state.chat.reply(&input.message).await;
    Ok(Json(ChatResponse { reply }))
}
