//! Create/edit form flow.
//!
//! The form has exactly two states: `Loading` (edit mode, before the
//! record has been fetched) and `Ready`. Submitting or deleting produces
//! an outcome: the form either closes with a confirmed result or stays
//! open with an error message.

use api_protocol::{requests::SubmitUserRequest, types::ApiUser};
use uuid::Uuid;

use crate::api_client::{ApiClient, ClientError};

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Uuid),
}

/// Form state machine: `Loading -> Ready` (edit only), then
/// `Ready -> (closed | error)` on submit or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Loading,
    Ready,
}

/// A confirmed, form-closing result.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult {
    Created(ApiUser),
    Updated(ApiUser),
    Deleted(Uuid),
}

/// What happened on submit or delete.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// The operation succeeded and the form closes.
    Closed(FormResult),
    /// The operation failed; the form stays open showing this message.
    Error(String),
}

/// Maps an operation result onto the form's two exits.
fn outcome_from(result: Result<FormResult, ClientError>) -> FormOutcome {
    match result {
        Ok(result) => FormOutcome::Closed(result),
        Err(e) => FormOutcome::Error(e.user_message()),
    }
}

/// One create/edit form session.
#[derive(Debug)]
pub struct FormFlow {
    mode: FormMode,
    state: FormState,
    initial: Option<ApiUser>,
}

impl FormFlow {
    /// Opens a create form, immediately ready.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            state: FormState::Ready,
            initial: None,
        }
    }

    /// Opens an edit form for the given record, loading until
    /// [`FormFlow::load`] completes.
    pub fn edit(id: Uuid) -> Self {
        Self {
            mode: FormMode::Edit(id),
            state: FormState::Loading,
            initial: None,
        }
    }

    /// The current form state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// The form mode.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// The fetched record prefilling an edit form.
    pub fn initial(&self) -> Option<&ApiUser> {
        self.initial.as_ref()
    }

    /// Fetches the record being edited and transitions to `Ready`.
    ///
    /// A no-op for a create form, which starts ready with no prefill.
    pub async fn load(&mut self, client: &ApiClient) -> Result<(), ClientError> {
        if let FormMode::Edit(id) = self.mode {
            let user = client.get_user(id).await?;
            self.initial = Some(user);
        }
        self.state = FormState::Ready;
        Ok(())
    }

    /// Submits the form, creating or updating depending on the mode.
    pub async fn submit(&self, client: &ApiClient, request: SubmitUserRequest) -> FormOutcome {
        let result = match self.mode {
            FormMode::Create => client.create_user(&request).await.map(FormResult::Created),
            FormMode::Edit(id) => client
                .update_user(id, &request)
                .await
                .map(FormResult::Updated),
        };
        outcome_from(result)
    }

    /// Deletes the record being edited. Only meaningful in edit mode.
    pub async fn delete(&self, client: &ApiClient) -> FormOutcome {
        match self.mode {
            FormMode::Edit(id) => {
                outcome_from(client.delete_user(id).await.map(|_| FormResult::Deleted(id)))
            }
            FormMode::Create => {
                FormOutcome::Error("Nothing to delete for a new record.".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> ApiUser {
        let now = Utc::now();
        ApiUser {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            phone_number: "123-456-7890".to_string(),
            email: "ada@example.com".to_string(),
            hobbies: "chess".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_create_form_starts_ready() {
        let form = FormFlow::create();
        assert_eq!(form.state(), FormState::Ready);
        assert!(form.initial().is_none());
    }

    #[test]
    fn test_edit_form_starts_loading() {
        let form = FormFlow::edit(Uuid::new_v4());
        assert_eq!(form.state(), FormState::Loading);
    }

    #[test]
    fn test_success_closes_the_form() {
        let user = sample_user();
        let outcome = outcome_from(Ok(FormResult::Created(user.clone())));
        assert_eq!(outcome, FormOutcome::Closed(FormResult::Created(user)));
    }

    #[test]
    fn test_server_message_surfaces_on_failure() {
        let outcome = outcome_from(Err(ClientError::Api {
            status: 400,
            message: "Email is not valid.".to_string(),
        }));
        assert_eq!(outcome, FormOutcome::Error("Email is not valid.".to_string()));
    }

    #[test]
    fn test_network_failure_surfaces_a_generic_message() {
        let outcome = outcome_from(Err(ClientError::Network("connection refused".to_string())));
        assert_eq!(
            outcome,
            FormOutcome::Error("Something went wrong, try again later.".to_string())
        );
    }
}
