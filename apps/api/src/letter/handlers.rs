//! Axum route handlers for the letter form and the generation endpoint.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::letter::prompts::{build_prompt, LetterType};
use crate::render::render_letter;
use crate::state::AppState;

/// Form fields for POST /generate. All fields are required; a missing field
/// is rejected by the Form extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct LetterForm {
    pub name: String,
    pub address: String,
    pub subject: String,
    pub letter_type: String,
    pub body: String,
}

/// GET /
///
/// Serves the static letter form.
pub async fn handle_form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// POST /generate
///
/// Builds the prompt for the requested letter type, asks the completion API
/// to draft the letter, renders the text to a single-page PDF, and returns
/// the bytes as a download named `government_letter.pdf`.
pub async fn handle_generate(
    State(state): State<AppState>,
    Form(form): Form<LetterForm>,
) -> Result<Response, AppError> {
    let letter_type = LetterType::parse(&form.letter_type);
    let prompt = build_prompt(
        letter_type,
        &form.name,
        &form.address,
        &form.subject,
        &form.body,
    );

    info!(
        "Drafting {:?} letter, subject {:?}",
        letter_type, form.subject
    );

    let letter_text = state.llm.complete(&prompt).await?;

    let pdf = render_letter(&letter_text)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"government_letter.pdf\"",
            ),
        ],
        pdf,
    )
        .into_response())
}

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Government Letter Generator</title>
</head>
<body>
  <h1>Government Letter Generator</h1>
  <form action="/generate" method="post">
    <p><label>Name<br><input type="text" name="name" required></label></p>
    <p><label>Address<br><input type="text" name="address" required></label></p>
    <p><label>Subject<br><input type="text" name="subject" required></label></p>
    <p><label>Letter Type<br>
      <select name="letter_type">
        <option value="RTI">RTI</option>
        <option value="Police Complaint">Police Complaint</option>
        <option value="Leave Application">Leave Application</option>
      </select>
    </label></p>
    <p><label>Details<br><textarea name="body" rows="6" cols="60" required></textarea></label></p>
    <p><button type="submit">Generate Letter</button></p>
  </form>
</body>
</html>
"#;
