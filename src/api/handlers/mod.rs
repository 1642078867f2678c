use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

use crate::api::{ApiError, AppState};
use crate::models::*;

const NOT_FOUND_MESSAGE: &str = "Student not found.";

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Students
// ============================================================

pub async fn list_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.store.list_all())
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(roll_number): Path<String>,
) -> Result<Json<Student>, ApiError> {
    state
        .store
        .find_by_roll_number(&roll_number)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))
}

pub async fn create_student(
    State(state): State<AppState>,
    Json(input): Json<CreateStudentInput>,
) -> Result<(StatusCode, Json<Confirmation>), ApiError> {
    if input.name.is_empty() || input.roll_number.is_empty() || input.course.is_empty() {
        return Err(ApiError::validation(
            "Please provide all fields (name, rollNumber, course).",
        ));
    }

    let inserted = state.store.insert_unique(Student {
        name: input.name,
        roll_number: input.roll_number,
        course: input.course,
    });
    if !inserted {
        return Err(ApiError::validation(
            "Student with this roll number already exists.",
        ));
    }

    Ok((
        StatusCode::CREATED,
        Json(Confirmation::new("Student added successfully.")),
    ))
}

pub async fn update_student(
    State(state): State<AppState>,
    Json(input): Json<UpdateStudentInput>,
) -> Result<Json<Confirmation>, ApiError> {
    if input.roll_number.is_empty() {
        return Err(ApiError::validation(
            "Roll number is required to update a student.",
        ));
    }

    let updated = state.store.update(
        &input.roll_number,
        input.name.as_deref(),
        input.course.as_deref(),
    );
    if !updated {
        return Err(ApiError::not_found(NOT_FOUND_MESSAGE));
    }

    Ok(Json(Confirmation::new("Student updated successfully.")))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Json(input): Json<DeleteStudentInput>,
) -> Result<Json<Confirmation>, ApiError> {
    let name = input.name.as_deref().filter(|n| !n.is_empty());
    let roll_number = input.roll_number.as_deref().filter(|r| !r.is_empty());

    if name.is_none() && roll_number.is_none() {
        return Err(ApiError::validation(
            "Please provide either name or roll number to delete.",
        ));
    }

    // Exactly one record is removed even if both criteria match.
    let deleted = state
        .store
        .remove_by_roll_or_name(roll_number, name)
        .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))?;

    Ok(Json(Confirmation::new(format!(
        "Deleted: {} ({}).",
        deleted.name, deleted.roll_number
    ))))
}

// ============================================================
// Not-found fallback
// ============================================================

/// Final fallback once routing and static file lookup have both missed.
/// Serves `404.html` from the assets directory, or an inline page if the
/// file is absent.
pub async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
    let page = match tokio::fs::read_to_string(state.assets_dir.join("404.html")).await {
        Ok(page) => page,
        Err(_) => "<!DOCTYPE html><html><head><title>404</title></head>\
                   <body><h1>404 - Page Not Found</h1></body></html>"
            .to_string(),
    };
    (StatusCode::NOT_FOUND, Html(page))
}
