use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{validation, AppState};
use crate::models::*;

// ============================================================
// Error Handling
// ============================================================

/// Log a store failure and return a sanitized response to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

/// Reject a request the editors would not have submitted.
fn invalid_input(msg: String) -> (StatusCode, String) {
    tracing::warn!("Validation error: {}", msg);
    (StatusCode::UNPROCESSABLE_ENTITY, msg)
}

type ApiResult<T> = Result<T, (StatusCode, String)>;

/// Body returned when an entity is added.
#[derive(Debug, Serialize, Deserialize)]
pub struct Created {
    pub id: String,
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn login_hint() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Sign in to manage the portfolio",
        "login": "/api/v1/session/login",
    }))
}

// ============================================================
// Portfolio (public)
// ============================================================

#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub featured: Option<bool>,
}

pub async fn get_portfolio(State(state): State<AppState>) -> Json<PortfolioData> {
    let content = state.content.lock().expect("content lock poisoned");
    Json(content.get().clone())
}

pub async fn get_personal_info(State(state): State<AppState>) -> Json<PersonalInfo> {
    let content = state.content.lock().expect("content lock poisoned");
    Json(content.get().personal_info.clone())
}

pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> Json<Vec<Project>> {
    let content = state.content.lock().expect("content lock poisoned");
    let data = content.get();
    let projects = match query.featured {
        Some(true) => data.featured_projects().into_iter().cloned().collect(),
        Some(false) => data.other_projects().into_iter().cloned().collect(),
        None => data.projects.clone(),
    };
    Json(projects)
}

pub async fn list_experience(State(state): State<AppState>) -> Json<Vec<Experience>> {
    let content = state.content.lock().expect("content lock poisoned");
    Json(content.get().experience.clone())
}

pub async fn list_skills(State(state): State<AppState>) -> Json<Vec<Skill>> {
    let content = state.content.lock().expect("content lock poisoned");
    Json(content.get().skills.clone())
}

pub async fn list_skill_groups(State(state): State<AppState>) -> Json<Vec<SkillGroup>> {
    let content = state.content.lock().expect("content lock poisoned");
    Json(content.get().skills_by_category())
}

// ============================================================
// Session
// ============================================================

pub async fn session_status(State(state): State<AppState>) -> Json<SessionStatus> {
    let session = state.session.lock().expect("session lock poisoned");
    Json(session.status())
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> ApiResult<Json<Identity>> {
    let mut session = state.session.lock().expect("session lock poisoned");
    if !session
        .login(&input.username, &input.password)
        .map_err(internal_error)?
    {
        return Err((
            StatusCode::UNAUTHORIZED,
            "Invalid username or password".to_string(),
        ));
    }

    session
        .identity()
        .cloned()
        .map(Json)
        .ok_or_else(|| internal_error("login succeeded without an identity"))
}

pub async fn logout(State(state): State<AppState>) -> ApiResult<StatusCode> {
    let mut session = state.session.lock().expect("session lock poisoned");
    session.logout().map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================
// Admin: personal info and résumé
// ============================================================

pub async fn admin_dashboard(State(state): State<AppState>) -> Json<PortfolioData> {
    let content = state.content.lock().expect("content lock poisoned");
    Json(content.get().clone())
}

pub async fn update_personal_info(
    State(state): State<AppState>,
    Json(info): Json<PersonalInfo>,
) -> ApiResult<StatusCode> {
    // Cosmetic pause kept from the editor; it never fails
    if !state.config.save_delay.is_zero() {
        tokio::time::sleep(state.config.save_delay).await;
    }

    let mut content = state.content.lock().expect("content lock poisoned");
    content.update_personal_info(info).map_err(internal_error)?;
    tracing::info!("Personal info saved");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_resume(
    State(state): State<AppState>,
    Json(input): Json<ResumeLinkInput>,
) -> ApiResult<StatusCode> {
    let mut content = state.content.lock().expect("content lock poisoned");
    content
        .set_resume_url(Some(input.url))
        .map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn upload_resume(
    State(state): State<AppState>,
    Json(input): Json<ResumeUploadInput>,
) -> ApiResult<Json<serde_json::Value>> {
    let mut content = state.content.lock().expect("content lock poisoned");
    let url = content
        .upload_resume(&input.file_name)
        .map_err(internal_error)?;
    Ok(Json(serde_json::json!({ "resumeUrl": url })))
}

pub async fn remove_resume(State(state): State<AppState>) -> ApiResult<StatusCode> {
    let mut content = state.content.lock().expect("content lock poisoned");
    content.set_resume_url(None).map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================
// Admin: projects
// ============================================================

pub async fn add_project(
    State(state): State<AppState>,
    Json(input): Json<NewProject>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    validation::new_project(&input).map_err(invalid_input)?;

    let mut content = state.content.lock().expect("content lock poisoned");
    let id = content.add_project(input).map_err(internal_error)?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// Unknown ids are accepted and change nothing.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProjectPatch>,
) -> ApiResult<StatusCode> {
    validation::project_patch(&patch).map_err(invalid_input)?;

    let mut content = state.content.lock().expect("content lock poisoned");
    content.update_project(&id, patch).map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let mut content = state.content.lock().expect("content lock poisoned");
    content.delete_project(&id).map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================
// Admin: experience
// ============================================================

pub async fn add_experience(
    State(state): State<AppState>,
    Json(input): Json<NewExperience>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    validation::new_experience(&input).map_err(invalid_input)?;

    let mut content = state.content.lock().expect("content lock poisoned");
    let id = content.add_experience(input).map_err(internal_error)?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn update_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ExperiencePatch>,
) -> ApiResult<StatusCode> {
    validation::experience_patch(&patch).map_err(invalid_input)?;

    let mut content = state.content.lock().expect("content lock poisoned");
    content
        .update_experience(&id, patch)
        .map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let mut content = state.content.lock().expect("content lock poisoned");
    content.delete_experience(&id).map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================
// Admin: skills
// ============================================================

pub async fn add_skill(
    State(state): State<AppState>,
    Json(input): Json<NewSkill>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    validation::new_skill(&input).map_err(invalid_input)?;

    let mut content = state.content.lock().expect("content lock poisoned");
    let id = content.add_skill(input).map_err(internal_error)?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<SkillPatch>,
) -> ApiResult<StatusCode> {
    validation::skill_patch(&patch).map_err(invalid_input)?;

    let mut content = state.content.lock().expect("content lock poisoned");
    content.update_skill(&id, patch).map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let mut content = state.content.lock().expect("content lock poisoned");
    content.delete_skill(&id).map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}
