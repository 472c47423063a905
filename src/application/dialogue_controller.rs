//! DialogueController - Drive one conversation turn by turn.
//!
//! Interprets each input line according to the current dialogue state,
//! delegates to the prediction gateway or the catalog navigator, and
//! hands the reply lines for the turn to the output sink.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::domain::catalog::{parse_selection, Catalog, CatalogNavigator};
use crate::domain::dialogue::messages;
use crate::domain::dialogue::{DialogueState, FormProgress, Session};
use crate::domain::encoding::FeatureEncoder;
use crate::domain::form::{CollectedValues, Field, FormKind};
use crate::domain::foundation::{ConversationId, ValidationError};
use crate::ports::{OutputSink, Predictor};

use super::{FlowError, PredictionGateway};

/// Collaborators loaded once at process start and shared read-only.
#[derive(Clone)]
pub struct DialogueDependencies {
    pub catalog: Arc<Catalog>,
    pub encoder: Arc<FeatureEncoder>,
    pub crop_predictor: Arc<dyn Predictor>,
    pub fertilizer_predictor: Arc<dyn Predictor>,
    /// Upper bound on a single predictor call.
    pub prediction_timeout: Duration,
}

/// One conversation. Not shared between users.
pub struct DialogueController {
    session: Session,
    navigator: CatalogNavigator,
    gateway: PredictionGateway,
    sink: Arc<dyn OutputSink>,
}

impl DialogueController {
    pub fn new(deps: DialogueDependencies, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            session: Session::new(),
            navigator: CatalogNavigator::new(deps.catalog),
            gateway: PredictionGateway::new(
                deps.encoder,
                deps.crop_predictor,
                deps.fertilizer_predictor,
                deps.prediction_timeout,
            ),
            sink,
        }
    }

    pub fn id(&self) -> ConversationId {
        self.session.id()
    }

    pub fn state(&self) -> DialogueState {
        self.session.state()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Emits the greeting and the main menu.
    pub fn start(&self) {
        let mut lines = vec![messages::GREETING.to_string()];
        lines.extend(messages::menu());
        self.sink.emit(&lines);
    }

    /// Processes one line of user input.
    ///
    /// Blank input is ignored. Every failure is turned into reply lines;
    /// nothing is returned to the caller.
    pub async fn handle_input(&mut self, raw: &str) {
        let input = raw.trim();
        if input.is_empty() {
            return;
        }

        let before = self.session.state();
        let lines = match before {
            DialogueState::MainMenu => self.on_menu_option(input),
            DialogueState::CropForm | DialogueState::FertilizerForm => {
                self.on_form_answer(input).await
            }
            DialogueState::SelectDepartment => self.on_department(input),
            DialogueState::SelectScheme => self.on_scheme(input),
        };

        debug!(
            conversation_id = %self.session.id(),
            from = ?before,
            to = ?self.session.state(),
            step = self.session.step_index(),
            "Processed input"
        );
        self.sink.emit(&lines);
    }

    fn on_menu_option(&mut self, input: &str) -> Vec<String> {
        match input {
            "1" => self.begin_form(FormKind::Crop),
            "2" => self.begin_form(FormKind::Fertilizer),
            "3" => vec![messages::DISEASE_DETECTION_UNAVAILABLE.to_string()],
            "4" => self.begin_browsing(),
            _ => vec![messages::INVALID_OPTION.to_string()],
        }
    }

    fn begin_form(&mut self, kind: FormKind) -> Vec<String> {
        match self.session.begin_form(kind) {
            Ok(first) => vec![messages::form_selected(kind), messages::prompt_for(first)],
            Err(err) => self.recover(err),
        }
    }

    async fn on_form_answer(&mut self, input: &str) -> Vec<String> {
        match self.session.record_answer(input) {
            Ok(FormProgress::Next(field)) => vec![messages::prompt_for(field)],
            Ok(FormProgress::Complete { kind, answers }) => {
                let mut lines = self.run_prediction(kind, &answers).await;
                lines.extend(messages::back_to_menu());
                lines
            }
            Err(err) => self.recover(err),
        }
    }

    async fn run_prediction(&self, kind: FormKind, answers: &CollectedValues) -> Vec<String> {
        let result = match kind {
            FormKind::Crop => self.gateway.recommend_crop(answers).await.map(|crop| {
                vec![
                    messages::predicted_crop(&crop),
                    messages::variety(answers.get(Field::Variety).unwrap_or_default()),
                ]
            }),
            FormKind::Fertilizer => self
                .gateway
                .recommend_fertilizer(answers)
                .await
                .map(|fertilizer| vec![messages::recommended_fertilizer(&fertilizer)]),
        };

        result.unwrap_or_else(|err| self.describe_failure(kind, err))
    }

    fn describe_failure(&self, kind: FormKind, err: FlowError) -> Vec<String> {
        warn!(conversation_id = %self.session.id(), form = ?kind, %err, "Prediction flow failed");
        let line = match &err {
            FlowError::UnknownCategory { field, value } => messages::unknown_category(*field, value),
            FlowError::PredictionFailure(cause) => messages::prediction_failed(kind, cause),
            FlowError::InvalidSelection(_) => messages::prediction_failed(kind, &err.to_string()),
        };
        vec![line]
    }

    fn begin_browsing(&mut self) -> Vec<String> {
        let departments = self.navigator.list_departments();
        // An empty catalog would leave no valid department number, so the
        // menu stays active instead of entering SelectDepartment.
        if departments.is_empty() {
            return vec![messages::NO_DEPARTMENTS.to_string()];
        }
        if let Err(err) = self.session.begin_browsing() {
            return self.recover(err);
        }

        let mut lines = vec![messages::DEPARTMENTS_HEADER.to_string()];
        lines.extend(
            departments
                .into_iter()
                .map(|(number, name)| messages::numbered_item(number, name)),
        );
        lines.push(messages::DEPARTMENT_PROMPT.to_string());
        lines
    }

    fn on_department(&mut self, input: &str) -> Vec<String> {
        let selected = match parse_selection(input) {
            Ok(n) => n,
            Err(err) => return self.reject_selection(err.into(), messages::NOT_A_NUMBER),
        };
        let department = match self.navigator.select_department(selected) {
            Ok(department) => department,
            Err(err) => return self.reject_selection(err.into(), messages::INVALID_DEPARTMENT),
        };

        // Same for a department without schemes: ask for another department
        // rather than entering SelectScheme with nothing to choose.
        let schemes = self.navigator.list_schemes(department);
        if schemes.is_empty() {
            return vec![
                messages::NO_SCHEMES.to_string(),
                messages::DEPARTMENT_PROMPT.to_string(),
            ];
        }

        let mut lines = vec![messages::schemes_header(&department.name)];
        lines.extend(
            schemes
                .into_iter()
                .map(|(number, name)| messages::numbered_item(number, name)),
        );
        lines.push(messages::SCHEME_PROMPT.to_string());

        match self.session.choose_department(selected) {
            Ok(()) => lines,
            Err(err) => self.recover(err),
        }
    }

    fn on_scheme(&mut self, input: &str) -> Vec<String> {
        let selected = match parse_selection(input) {
            Ok(n) => n,
            Err(err) => return self.reject_selection(err.into(), messages::NOT_A_NUMBER),
        };
        let department = match self
            .session
            .selected_department()
            .and_then(|n| self.navigator.select_department(n).ok())
        {
            Some(department) => department,
            None => return self.recover(ValidationError::empty_field("selected_department")),
        };
        let scheme = match self.navigator.select_scheme(department, selected) {
            Ok(scheme) => scheme,
            Err(err) => return self.reject_selection(err.into(), messages::INVALID_SCHEME),
        };

        let mut lines = self.navigator.render_detail(scheme);
        match self.session.finish_browsing() {
            Ok(()) => {
                lines.extend(messages::back_to_menu());
                lines
            }
            Err(err) => self.recover(err),
        }
    }

    fn reject_selection(&self, err: FlowError, notice: &str) -> Vec<String> {
        warn!(
            conversation_id = %self.session.id(),
            state = ?self.session.state(),
            %err,
            "Rejected selection"
        );
        vec![notice.to_string()]
    }

    /// Resets to the menu after an internal inconsistency.
    fn recover(&mut self, err: ValidationError) -> Vec<String> {
        error!(
            conversation_id = %self.session.id(),
            state = ?self.session.state(),
            %err,
            "Dialogue invariant violated; resetting to main menu"
        );
        self.session.reset();
        let mut lines = vec![messages::INTERNAL_ERROR.to_string()];
        lines.extend(messages::back_to_menu());
        lines
    }
}

impl std::fmt::Debug for DialogueController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueController")
            .field("session", &self.session)
            .field("gateway", &self.gateway)
            .finish()
    }
}
