//! End-to-end dialogue scenarios.
//!
//! Catalog and code tables are loaded from files through the adapters,
//! predictors are mocked, and every reply is captured by a recording sink.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use agro_aid::adapters::{
    load_catalog, load_code_tables, MockPredictor, MockResponse, RecordingSink,
};
use agro_aid::application::{DialogueController, DialogueDependencies};
use agro_aid::domain::dialogue::{messages, DialogueState};
use agro_aid::ports::{Prediction, PredictionError};

const CATALOG: &str = r#"{
  "departments": [
    {
      "deptName": "Agriculture",
      "schemes": [
        {
          "schemeName": "Pradhan Mantri Krishi Sinchai Yojana",
          "inputTypes": [
            {
              "inputTypeName": "Drip Irrigation",
              "details": {
                "schemeDescription": "Micro irrigation support",
                "subsidy": "55% for small farmers",
                "Eligibility": "All landholding farmers",
                "documentsRequired": ["Aadhaar card", "Land records"]
              }
            },
            { "inputTypeName": "Sprinkler" }
          ]
        }
      ]
    },
    { "deptName": "Horticulture", "schemes": [] }
  ]
}"#;

const CODE_TABLES: &str = r#"{
  "Soil_Type": ["Black", "Clayey", "Loamy", "Red", "Sandy"],
  "Variety": ["Basmati", "Hybrid", "Local"],
  "Crop": ["Cotton", "Maize", "Rice", "Wheat"]
}"#;

const CROP_ANSWERS: [&str; 10] = [
    "1", "40", "50", "30", "25.0", "70.0", "6.5", "120.0", "Loamy", "Basmati",
];

struct Scenario {
    controller: DialogueController,
    sink: RecordingSink,
    crop: MockPredictor,
    fertilizer: MockPredictor,
}

impl Scenario {
    async fn new(crop: MockPredictor, fertilizer: MockPredictor) -> Self {
        let catalog_file = write_temp(".json", CATALOG);
        let tables_file = write_temp(".json", CODE_TABLES);

        let deps = DialogueDependencies {
            catalog: Arc::new(load_catalog(catalog_file.path()).await.unwrap()),
            encoder: Arc::new(load_code_tables(tables_file.path()).await.unwrap()),
            crop_predictor: Arc::new(crop.clone()),
            fertilizer_predictor: Arc::new(fertilizer.clone()),
            prediction_timeout: Duration::from_millis(200),
        };
        let sink = RecordingSink::new();
        let controller = DialogueController::new(deps, Arc::new(sink.clone()));
        controller.start();

        Self {
            controller,
            sink,
            crop,
            fertilizer,
        }
    }

    async fn default() -> Self {
        Self::new(
            MockPredictor::new("crop").with_index(2),
            MockPredictor::new("fertilizer")
                .with_classes(vec!["10-26-26".into(), "DAP".into(), "Urea".into()])
                .with_index(2),
        )
        .await
    }

    async fn say(&mut self, inputs: &[&str]) -> Vec<String> {
        for input in inputs {
            self.controller.handle_input(input).await;
        }
        self.sink.last_turn()
    }
}

fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn greeting_precedes_menu() {
    let scenario = Scenario::default().await;
    let turns = scenario.sink.turns();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0][0], messages::GREETING);
    assert_eq!(turns[0][1], messages::MENU_HEADER);
}

#[tokio::test]
async fn crop_prediction_end_to_end() {
    let mut scenario = Scenario::default().await;
    let reply = scenario.say(&CROP_ANSWERS).await;

    let predicted: Vec<_> = reply
        .iter()
        .filter(|line| line.starts_with("Predicted Crop"))
        .collect();
    assert_eq!(predicted, vec!["Predicted Crop: Rice"]);
    assert!(reply.contains(&"Variety: Basmati".to_string()));
    assert_eq!(scenario.controller.state(), DialogueState::MainMenu);

    let calls = scenario.crop.get_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].values(),
        &[40.0, 50.0, 30.0, 25.0, 70.0, 6.5, 120.0, 2.0, 0.0]
    );
}

#[tokio::test]
async fn fertilizer_vector_truncates_measurements() {
    let mut scenario = Scenario::default().await;
    let reply = scenario
        .say(&["2", "26.9", "52", "38.7", "Sandy", "Maize", "37", "0", "4.99"])
        .await;

    assert_eq!(reply[0], "Recommended Fertilizer: Urea");
    assert_eq!(
        scenario.fertilizer.get_calls()[0].values(),
        &[26.0, 52.0, 38.0, 4.0, 1.0, 37.0, 0.0, 4.0]
    );
}

#[tokio::test]
async fn unknown_soil_never_reaches_predictor() {
    let mut scenario = Scenario::default().await;
    let reply = scenario
        .say(&["2", "26", "52", "38", "Peaty", "Maize", "37", "0", "0"])
        .await;

    assert!(reply[0].contains("Soil_Type"));
    assert!(reply[0].contains("Peaty"));
    assert_eq!(scenario.fertilizer.call_count(), 0);
    assert_eq!(scenario.controller.state(), DialogueState::MainMenu);
}

#[tokio::test]
async fn predictor_failure_returns_to_menu() {
    let mut scenario = Scenario::new(
        MockPredictor::new("crop").with_response(MockResponse::Error(
            PredictionError::unavailable("model server down"),
        )),
        MockPredictor::new("fertilizer"),
    )
    .await;

    let reply = scenario.say(&CROP_ANSWERS).await;
    assert!(reply[0].starts_with("Error during crop prediction:"));
    assert!(reply[0].contains("model server down"));
    assert_eq!(reply[1], messages::BACK_TO_MENU);
    assert_eq!(scenario.controller.state(), DialogueState::MainMenu);
}

#[tokio::test]
async fn slow_predictor_times_out() {
    let mut scenario = Scenario::new(
        MockPredictor::new("crop").with_delay(Duration::from_secs(2)),
        MockPredictor::new("fertilizer"),
    )
    .await;

    let reply = scenario.say(&CROP_ANSWERS).await;
    assert!(reply[0].starts_with("Error during crop prediction:"));
    assert_eq!(scenario.controller.state(), DialogueState::MainMenu);
}

#[tokio::test]
async fn predictor_may_answer_with_label() {
    let mut scenario = Scenario::new(
        MockPredictor::new("crop").with_response(MockResponse::Success(Prediction::Label(
            "Wheat".into(),
        ))),
        MockPredictor::new("fertilizer"),
    )
    .await;

    let reply = scenario.say(&CROP_ANSWERS).await;
    assert_eq!(reply[0], "Predicted Crop: Wheat");
}

#[tokio::test]
async fn scheme_detail_fills_missing_fields() {
    let mut scenario = Scenario::default().await;
    let reply = scenario.say(&["4", "1", "1"]).await;

    assert_eq!(reply[0], "Scheme: Pradhan Mantri Krishi Sinchai Yojana");
    assert!(reply.contains(&"  Subsidy: 55% for small farmers".to_string()));
    assert!(reply.contains(&"    - Land records".to_string()));
    assert!(reply.contains(&"* Sprinkler".to_string()));
    assert!(reply.contains(&"  Description: N/A".to_string()));
    assert_eq!(scenario.controller.state(), DialogueState::MainMenu);
}

#[tokio::test]
async fn department_zero_is_rejected() {
    let mut scenario = Scenario::default().await;
    let reply = scenario.say(&["4", "0"]).await;

    assert_eq!(reply, vec![messages::INVALID_DEPARTMENT]);
    assert_eq!(scenario.controller.state(), DialogueState::SelectDepartment);

    let reply = scenario.say(&["1"]).await;
    assert_eq!(reply[0], "Schemes under Agriculture:");
    assert_eq!(scenario.controller.state(), DialogueState::SelectScheme);
}

#[tokio::test]
async fn back_to_back_flows_share_no_answers() {
    let mut scenario = Scenario::default().await;
    scenario.say(&CROP_ANSWERS).await;
    scenario.say(&["4", "1", "1"]).await;
    let reply = scenario.say(&CROP_ANSWERS).await;

    assert_eq!(reply[0], "Predicted Crop: Rice");
    assert_eq!(scenario.crop.call_count(), 2);
    let calls = scenario.crop.get_calls();
    assert_eq!(calls[0], calls[1]);
}

#[tokio::test]
async fn empty_lines_produce_no_reply() {
    let mut scenario = Scenario::default().await;
    scenario.say(&["", "  ", "\t"]).await;
    assert_eq!(scenario.sink.turn_count(), 1);
}
