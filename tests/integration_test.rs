use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;
use tokio_test::assert_ok;
use worksheet_submit::error::{EndpointError, UploadCause};
use worksheet_submit::models::response::GeneratedSet;
use worksheet_submit::models::UploadReceipt;
use worksheet_submit::{
    Difficulty, DifficultyMode, FormSession, GenerationRequest, QuestionMixInput, RequestBuilder,
    SourceAsset, SubmissionOrchestrator, SubmissionOutcome, SubmitAttempt, ValidationError,
    WorksheetBackend, WorksheetError, WorksheetResponse,
};

/// 内存中的远端服务，记录所有调用
#[derive(Default)]
struct FakeBackend {
    uploads: Mutex<Vec<String>>,
    requests: Mutex<Vec<GenerationRequest>>,
    upload_failures: HashMap<String, EndpointError>,
    generate_failure: Option<EndpointError>,
    upload_gate: Option<Arc<Notify>>,
}

impl FakeBackend {
    fn failing_upload(name: &str, err: EndpointError) -> Self {
        Self {
            upload_failures: HashMap::from([(name.to_string(), err)]),
            ..Default::default()
        }
    }

    fn failing_generate(err: EndpointError) -> Self {
        Self {
            generate_failure: Some(err),
            ..Default::default()
        }
    }

    fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    fn generate_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl WorksheetBackend for FakeBackend {
    async fn upload(&self, asset: &SourceAsset) -> Result<UploadReceipt, EndpointError> {
        if let Some(gate) = &self.upload_gate {
            gate.notified().await;
        }
        self.uploads.lock().unwrap().push(asset.asset_id().to_string());
        if let Some(err) = self.upload_failures.get(asset.name()) {
            return Err(err.clone());
        }
        Ok(UploadReceipt {
            saved_as: Some(format!("/files/{}.pdf", asset.asset_id())),
        })
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<WorksheetResponse, EndpointError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(err) = &self.generate_failure {
            return Err(err.clone());
        }
        let sets = request
            .difficulty_levels()
            .iter()
            .enumerate()
            .map(|(idx, level)| GeneratedSet {
                set_no: idx as u32 + 1,
                difficulty: level.as_str().to_string(),
                printable_pdf_url: format!("/files/ws_test_set{}.pdf", idx + 1),
                items: Vec::new(),
            })
            .collect();
        Ok(WorksheetResponse {
            worksheet_id: "ws_test".to_string(),
            sets,
        })
    }
}

fn two_file_form() -> FormSession {
    let mut form = FormSession::default();
    form.select_files(vec![
        SourceAsset::new("a.pdf", b"%PDF-1.4".to_vec()),
        SourceAsset::new("b.png", vec![0x89, 0x50, 0x4e, 0x47]),
    ]);
    form
}

#[tokio::test]
async fn test_broadcast_submission_end_to_end() {
    let backend = FakeBackend::default();
    let orchestrator = SubmissionOrchestrator::new(&backend);

    let mut form = two_file_form();
    form.set_num_sets(3);
    form.difficulty.set_mode(DifficultyMode::Broadcast);
    form.difficulty.set_broadcast_level(Difficulty::Medium);
    form.question_mix = QuestionMixInput { mcq: 3, short: 2, diagram: 0 };

    let attempt = orchestrator.submit(&form).await;
    let SubmitAttempt::Settled(SubmissionOutcome::Succeeded(resp)) = attempt else {
        panic!("提交应该成功: {:?}", attempt);
    };
    assert_eq!(resp.sets.len(), 3);
    assert!(resp.sets.iter().all(|s| s.difficulty == "medium"));

    let uploads = backend.uploads.lock().unwrap().clone();
    let expected_ids: Vec<String> = form.assets.iter().map(|a| a.asset_id().to_string()).collect();
    assert_eq!(uploads, expected_ids);

    let requests = backend.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let payload = serde_json::to_value(&requests[0]).unwrap();
    assert_eq!(payload["file_ids"], serde_json::json!(expected_ids));
    assert_eq!(
        payload["difficulty_levels"],
        serde_json::json!(["medium", "medium", "medium"])
    );
    assert_eq!(payload["question_mix"], serde_json::json!({"mcq": 3, "short": 2}));
    assert!(payload["question_mix"].get("diagram").is_none());
}

#[tokio::test]
async fn test_second_upload_failure_aborts_before_generation() {
    let backend = FakeBackend::failing_upload(
        "b.png",
        EndpointError::Status {
            status: 415,
            body: "Unsupported file type".to_string(),
        },
    );
    let orchestrator = SubmissionOrchestrator::new(&backend);

    let attempt = orchestrator.submit(&two_file_form()).await;
    let SubmitAttempt::Settled(SubmissionOutcome::Failed(err)) = attempt else {
        panic!("提交应该失败: {:?}", attempt);
    };

    assert_eq!(err.kind(), "UploadFailed");
    assert_eq!(
        err,
        WorksheetError::UploadFailed {
            asset_name: "b.png".to_string(),
            cause: UploadCause::Status {
                status: 415,
                body: "Unsupported file type".to_string(),
            },
        }
    );
    assert_eq!(backend.upload_count(), 2);
    assert_eq!(backend.generate_count(), 0);
    assert_eq!(orchestrator.outcome(), SubmissionOutcome::Failed(err));
}

#[tokio::test]
async fn test_first_upload_transport_error_skips_rest() {
    let backend =
        FakeBackend::failing_upload("a.pdf", EndpointError::Transport("connection refused".into()));
    let orchestrator = SubmissionOrchestrator::new(&backend);

    let outcome = orchestrator.submit(&two_file_form()).await;
    let SubmitAttempt::Settled(SubmissionOutcome::Failed(err)) = outcome else {
        panic!("提交应该失败");
    };
    assert!(matches!(
        err,
        WorksheetError::UploadFailed { ref asset_name, cause: UploadCause::Transport(_) } if asset_name == "a.pdf"
    ));
    assert_eq!(backend.upload_count(), 1);
    assert_eq!(backend.generate_count(), 0);
}

#[tokio::test]
async fn test_no_files_fails_without_network() {
    let backend = FakeBackend::default();
    let orchestrator = SubmissionOrchestrator::new(&backend);

    let attempt = orchestrator.submit(&FormSession::default()).await;

    assert_eq!(
        attempt,
        SubmitAttempt::Settled(SubmissionOutcome::Failed(WorksheetError::Validation(
            ValidationError::Missing { missing: "files" }
        )))
    );
    assert_eq!(backend.upload_count(), 0);
    assert_eq!(backend.generate_count(), 0);
}

#[tokio::test]
async fn test_generation_rejection_surfaces_body() {
    let backend = FakeBackend::failing_generate(EndpointError::Status {
        status: 422,
        body: "num_sets too large".to_string(),
    });
    let orchestrator = SubmissionOrchestrator::new(&backend);

    let attempt = orchestrator.submit(&two_file_form()).await;
    let SubmitAttempt::Settled(SubmissionOutcome::Failed(err)) = attempt else {
        panic!("提交应该失败");
    };
    assert_eq!(err.kind(), "GenerationFailed");
    assert!(err.to_string().contains("num_sets too large"));
    // 上传已成功也不算部分成功
    assert_eq!(backend.upload_count(), 2);
    assert!(orchestrator.outcome().result().is_none());
}

#[tokio::test]
async fn test_generation_transport_error() {
    let backend = FakeBackend::failing_generate(EndpointError::Transport("timed out".into()));
    let orchestrator = SubmissionOrchestrator::new(&backend);

    let attempt = orchestrator.submit(&two_file_form()).await;
    let SubmitAttempt::Settled(outcome) = attempt else {
        panic!("提交不应被拒绝");
    };
    assert_eq!(outcome.error().map(|e| e.kind()), Some("TransportError"));
}

#[tokio::test]
async fn test_resubmit_while_in_flight_is_rejected() {
    let gate = Arc::new(Notify::new());
    let backend = FakeBackend {
        upload_gate: Some(gate.clone()),
        ..Default::default()
    };
    let orchestrator = SubmissionOrchestrator::new(&backend);
    let mut rx = orchestrator.subscribe();

    let mut form = FormSession::default();
    form.select_files(vec![SourceAsset::new("only.pdf", vec![1, 2, 3])]);

    let (first, second) = tokio::join!(orchestrator.submit(&form), async {
        rx.wait_for(|o| o.is_in_flight()).await.unwrap();
        let second = orchestrator.submit(&form).await;
        gate.notify_one();
        second
    });

    assert_eq!(second, SubmitAttempt::Rejected);
    assert!(matches!(
        first,
        SubmitAttempt::Settled(SubmissionOutcome::Succeeded(_))
    ));
    assert_eq!(backend.upload_count(), 1);
    assert_eq!(backend.generate_count(), 1);
}

#[tokio::test]
async fn test_dropped_submit_does_not_block_next_attempt() {
    // 闸门永不放行，上传一直挂起
    let backend = FakeBackend {
        upload_gate: Some(Arc::new(Notify::new())),
        ..Default::default()
    };
    let orchestrator = SubmissionOrchestrator::new(&backend);

    let mut form = FormSession::default();
    form.select_files(vec![SourceAsset::new("slow.pdf", vec![1])]);

    let timed_out =
        tokio::time::timeout(Duration::from_millis(20), orchestrator.submit(&form)).await;
    assert!(timed_out.is_err());
    assert_eq!(orchestrator.outcome(), SubmissionOutcome::Idle);

    let attempt = orchestrator.submit(&FormSession::default()).await;
    assert_eq!(
        attempt,
        SubmitAttempt::Settled(SubmissionOutcome::Failed(WorksheetError::Validation(
            ValidationError::Missing { missing: "files" }
        )))
    );
    assert_eq!(backend.generate_count(), 0);
}

#[tokio::test]
async fn test_new_attempt_replaces_previous_outcome() {
    let backend = FakeBackend::default();
    let orchestrator = SubmissionOrchestrator::new(&backend);
    assert_eq!(orchestrator.outcome(), SubmissionOutcome::Idle);

    let mut form = FormSession::default();
    orchestrator.submit(&form).await;
    assert!(orchestrator.outcome().error().is_some());

    form.select_files(vec![SourceAsset::new("a.pdf", vec![1])]);
    orchestrator.submit(&form).await;
    let outcome = orchestrator.outcome();
    assert!(outcome.error().is_none());
    assert_eq!(outcome.result().map(|r| r.sets.len()), Some(3));

    assert!(orchestrator.reset());
    assert_eq!(orchestrator.outcome(), SubmissionOutcome::Idle);
    assert!(!orchestrator.reset());
}

#[tokio::test]
async fn test_per_set_levels_reach_request() {
    let backend = FakeBackend::default();
    let orchestrator = SubmissionOrchestrator::new(&backend);

    let mut form = two_file_form();
    form.set_num_sets(4);
    assert_ok!(form.difficulty.set_level(3, Difficulty::Hard));

    orchestrator.submit(&form).await;

    let requests = backend.requests.lock().unwrap();
    assert_eq!(
        requests[0].difficulty_levels(),
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Hard]
    );
}

#[test]
fn test_request_builder_uses_selection_ids() {
    let form = two_file_form();
    let request = assert_ok!(RequestBuilder::build(&form));
    assert_eq!(request.file_ids().len(), 2);
    assert_ne!(request.file_ids()[0], request.file_ids()[1]);
    assert!(request.file_ids()[0].ends_with("-a"));
    assert!(request.file_ids()[1].ends_with("-b"));
}
