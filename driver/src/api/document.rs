use error_stack::{Report, ResultExt};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use kernel::interface::update::DocumentRegistry;
use kernel::prelude::entity::{DocumentId, FileSource, RegisteredDocument, Session};
use kernel::prelude::failure::{ValidationIssue, ValidationIssues};
use kernel::prelude::wizard::{DocumentSubmission, SubmittedVolume};
use kernel::KernelError;

use crate::api::{created_id, rejection, LibraryApi, DOCUMENTS};
use crate::error::{ConvertError, DriverError};

#[async_trait::async_trait]
impl DocumentRegistry for LibraryApi {
    #[tracing::instrument(skip_all, fields(draft = %submission.draft()))]
    async fn register(
        &self,
        session: &Session,
        submission: &DocumentSubmission,
    ) -> error_stack::Result<RegisteredDocument, KernelError> {
        let form = submission_form(submission).await?;
        let response = self
            .client
            .post(self.config.endpoint(DOCUMENTS))
            .header(AUTHORIZATION, session.bearer())
            .multipart(form)
            .send()
            .await
            .convert_error()
            .attach_printable("No response to the document registration")?;

        let status = response.status();
        tracing::debug!(%status, "Registration answered");
        if status == StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            let id = created_id(&body).map(DocumentId::new);
            return Ok(RegisteredDocument::new(id, submission.code().clone()));
        }
        if status.is_success() {
            return Err(Report::new(KernelError::Unexpected)
                .attach_printable(format!("Expected 201 Created, got {status}")));
        }
        Err(rejection(response).await)
    }
}

/// Scalar fields first, then number and file of every volume. Field names go
/// out as raw UTF-8 (`año`), the way browsers send them.
async fn submission_form(
    submission: &DocumentSubmission,
) -> error_stack::Result<Form, KernelError> {
    let mut form = submission
        .fields()
        .into_iter()
        .fold(Form::new().percent_encode_noop(), |form, (name, value)| {
            form.text(name, value)
        });
    for volume in submission.volumes() {
        form = form
            .text(volume.number_field(), volume.number_value())
            .part(volume.file_field(), file_part(volume).await?);
    }
    Ok(form)
}

async fn file_part(volume: &SubmittedVolume) -> error_stack::Result<Part, KernelError> {
    let file = volume.file();
    let bytes = match file.source() {
        FileSource::Bytes(bytes) => bytes.clone(),
        FileSource::Path(path) => tokio::fs::read(path).await.map_err(|error| {
            let reason = format!("could not read {}: {error}", file.name());
            Report::new(DriverError::from(error))
                .change_context(KernelError::Invalid)
                .attach(ValidationIssues::from(vec![ValidationIssue::RejectedFile(
                    *volume.number(),
                    reason,
                )]))
        })?,
    };
    Part::bytes(bytes)
        .file_name(file.name().clone())
        .mime_str(file.mime())
        .convert_error()
}
