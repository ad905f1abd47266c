use super::*;
use crate::ports::agent_gateway::{AgentCapability, GatewayError};
use async_trait::async_trait;
use council_domain::{EvaluatorKind, Priority, SectionKind, SuggestionCategory};
use serde_json::Value;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// ==================== Test Infrastructure ====================

/// Agent answering from a script; the last entry repeats once exhausted
struct ScriptedAgent {
    responses: Vec<Result<String, GatewayError>>,
    calls: AtomicUsize,
    payloads: Mutex<Vec<Value>>,
}

impl ScriptedAgent {
    fn new(responses: Vec<Result<String, GatewayError>>) -> Arc<Self> {
        Arc::new(Self {
            responses,
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        })
    }

    fn replying(responses: &[String]) -> Arc<Self> {
        Self::new(responses.iter().cloned().map(Ok).collect())
    }

    fn failing() -> Arc<Self> {
        Self::new(vec![Err(GatewayError::ConnectionError(
            "connection refused".to_string(),
        ))])
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn payload(&self, call: usize) -> Value {
        self.payloads.lock().unwrap()[call].clone()
    }
}

#[async_trait]
impl AgentCapability for ScriptedAgent {
    async fn invoke(&self, payload: Value) -> Result<String, GatewayError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload);
        self.responses
            .get(call)
            .or(self.responses.last())
            .cloned()
            .unwrap_or_else(|| Err(GatewayError::Other("empty script".to_string())))
    }
}

struct Hanging;

#[async_trait]
impl AgentCapability for Hanging {
    async fn invoke(&self, _payload: Value) -> Result<String, GatewayError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(GatewayError::Timeout)
    }
}

#[derive(Default)]
struct RecordingTracker {
    events: Mutex<Vec<(String, Value)>>,
}

impl RecordingTracker {
    fn statuses(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(kind, _)| kind == "status")
            .filter_map(|(_, payload)| payload["status"].as_str().map(str::to_string))
            .collect()
    }
}

impl RunTracker for RecordingTracker {
    fn record(&self, event: RunEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type.to_string(), event.payload));
    }
}

#[derive(Default)]
struct RecordingProgress {
    completed: Mutex<Vec<(Stage, AgentRole, bool)>>,
    refinements: AtomicUsize,
}

impl ProgressNotifier for RecordingProgress {
    fn on_stage_start(&self, _stage: &Stage, _pass: u8, _total_agents: usize) {}

    fn on_agent_complete(&self, stage: &Stage, role: &AgentRole, degraded: bool) {
        self.completed.lock().unwrap().push((*stage, *role, degraded));
    }

    fn on_stage_complete(&self, _stage: &Stage) {}

    fn on_refinement(&self, _first_pass_score: u8, _threshold: u8) {
        self.refinements.fetch_add(1, Ordering::SeqCst);
    }
}

const URL: &str = "https://www.acme.test/pricing";

fn content() -> ContentModel {
    ContentModel::new("Acme Analytics")
        .with_headings(vec![
            "Know your numbers".to_string(),
            "Pricing".to_string(),
            "FAQ".to_string(),
            "Contact".to_string(),
        ])
        .with_cta_labels(vec!["Start free trial".to_string()])
        .with_colors(vec!["#0f766e".to_string()])
}

fn analyzer_response() -> String {
    r#"{"description": "SaaS pricing page", "keyElements": ["navigation", "pricing table"]}"#
        .to_string()
}

fn designer_response(hero_title: &str) -> String {
    format!(
        r##"Here is the layout:
```json
{{
  "sections": [
    {{"id": "nav", "type": "navigation", "title": "Acme", "content": "<nav></nav>"}},
    {{"id": "hero", "type": "hero", "title": "{}", "styles": {{"padding": "24px"}}}},
    {{"id": "plans", "type": "features", "title": "Plans"}}
  ],
  "palette": {{"primary": "#0f766e", "secondary": "#334155", "accent": "#f97316",
               "background": "#ffffff", "text": "#0f172a"}},
  "typography": {{"heading": "Inter", "body": "Inter"}}
}}
```"##,
        hero_title
    )
}

fn quality_response(score: u8, suggestion: &str) -> String {
    format!(
        r#"{{"responsiveScore": {score}, "readabilityScore": {score}, "overallScore": {score},
            "feedback": "scored {score}",
            "suggestions": [{{"category": "layout", "priority": "high", "title": "{suggestion}"}}]}}"#
    )
}

fn accessibility_response() -> String {
    r#"{"wcagScore": 88, "issues": [{"severity": "serious",
        "description": "Low contrast on call to action", "recommendation": "Darken the button"}]}"#
        .to_string()
}

fn performance_response() -> String {
    r#"{"score": 91, "suggestions": [{"category": "content", "priority": "low",
        "title": "Lazy-load hero image"}]}"#
        .to_string()
}

struct Council {
    analyzer: Arc<ScriptedAgent>,
    designer: Arc<ScriptedAgent>,
    critics: Vec<Arc<ScriptedAgent>>,
    registry: AgentRegistry,
}

/// Full panel where every quality evaluator answers `pass_scores[i]` on pass `i + 1`
fn council(pass_scores: &[u8]) -> Council {
    let analyzer = ScriptedAgent::replying(&[analyzer_response()]);
    let designer = ScriptedAgent::replying(&[designer_response("First"), designer_response("Second")]);
    let critics: Vec<_> = (0..3)
        .map(|i| {
            let responses: Vec<String> = pass_scores
                .iter()
                .map(|s| quality_response(*s, &format!("Stack columns {}", i % 2)))
                .collect();
            ScriptedAgent::replying(&responses)
        })
        .collect();

    let registry = AgentRegistry::new()
        .with_agent(AgentRole::Analyzer, analyzer.clone())
        .with_agent(AgentRole::Designer, designer.clone())
        .with_agent(AgentRole::DesignCritic, critics[0].clone())
        .with_agent(AgentRole::Evaluator(2), critics[1].clone())
        .with_agent(AgentRole::Evaluator(3), critics[2].clone())
        .with_agent(
            AgentRole::AccessibilityAuditor,
            ScriptedAgent::replying(&[accessibility_response()]),
        )
        .with_agent(
            AgentRole::PerformanceAuditor,
            ScriptedAgent::replying(&[performance_response()]),
        );

    Council {
        analyzer,
        designer,
        critics,
        registry,
    }
}

fn use_case(registry: AgentRegistry) -> RunConsensusUseCase {
    RunConsensusUseCase::new(Arc::new(registry), ConsensusParams::default())
}

// ==================== Single Pass ====================

#[tokio::test]
async fn test_high_first_pass_skips_refinement() {
    // 75 from every critic: 75 + full agreement bonus = 85
    let council = council(&[75]);
    let result = use_case(council.registry).execute(URL, &content()).await;

    assert_eq!(result.consensus_score, 85);
    assert_eq!(result.passes_run, 1);
    assert_eq!(result.winning_pass, 1);
    assert_eq!(council.designer.calls(), 1);
    assert_eq!(council.analyzer.calls(), 1);
    assert_eq!(result.evaluations.len(), 5);
    assert!(!result.is_degraded());
}

#[tokio::test]
async fn test_result_is_fully_populated() {
    let council = council(&[90]);
    let result = use_case(council.registry).execute(URL, &content()).await;

    assert_eq!(result.consensus_score, 100);
    assert_eq!(result.responsive_score, 90);
    assert_eq!(result.readability_score, 90);
    assert_eq!(result.accessibility_score, 88);
    assert_eq!(result.performance_score, 91);
    assert_eq!(result.mobile_layout.sections.len(), 3);
    assert_eq!(result.mobile_layout.sections[1].kind, SectionKind::Hero);
    assert_eq!(result.palette.accent, "#f97316");
    assert_eq!(result.typography.heading_font, "Inter");

    let kinds: Vec<_> = result.evaluations.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EvaluatorKind::Quality,
            EvaluatorKind::Quality,
            EvaluatorKind::Quality,
            EvaluatorKind::Accessibility,
            EvaluatorKind::Performance
        ]
    );

    // "Stack columns 0" appears twice and is merged; high first, low last
    let titles: Vec<_> = result.suggestions.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Stack columns 0",
            "Stack columns 1",
            "Low contrast on call to action",
            "Lazy-load hero image"
        ]
    );
    assert_eq!(result.suggestions[2].category, SuggestionCategory::Accessibility);
    assert_eq!(result.suggestions[3].priority, Priority::Low);
}

#[tokio::test]
async fn test_designer_receives_analyzer_output() {
    let council = council(&[90]);
    use_case(council.registry).execute(URL, &content()).await;

    let payload = council.designer.payload(0);
    assert_eq!(payload["task"], "design_layout");
    assert_eq!(payload["structure"]["description"], "SaaS pricing page");
    assert!(payload.get("feedback").is_none());

    let critic_payload = council.critics[1].payload(0);
    assert_eq!(critic_payload["task"], "evaluate_layout");
    assert_eq!(critic_payload["evaluator"], "evaluator-2");
    assert_eq!(critic_payload["layout"]["sections"][1]["title"], "First");
}

// ==================== Refinement ====================

#[tokio::test]
async fn test_refinement_keeps_better_second_pass() {
    // pass 1: 50 + 10 = 60, pass 2: 60 + 10 = 70
    let council = council(&[50, 60]);
    let progress = RecordingProgress::default();
    let result = use_case(council.registry)
        .execute_with_progress(URL, &content(), &progress)
        .await;

    assert_eq!(result.consensus_score, 70);
    assert_eq!(result.winning_pass, 2);
    assert_eq!(result.passes_run, 2);
    assert_eq!(result.mobile_layout.sections[1].title, "Second");
    assert_eq!(council.designer.calls(), 2);
    assert_eq!(council.analyzer.calls(), 1);
    assert_eq!(progress.refinements.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_refinement_sends_feedback_and_original_structure() {
    let council = council(&[50, 60]);
    use_case(council.registry).execute(URL, &content()).await;

    let second = council.designer.payload(1);
    let feedback = second["feedback"].as_str().unwrap();
    assert!(feedback.starts_with("design-critic: scored 50 | evaluator-2: scored 50"));
    assert!(!feedback.contains("accessibility-auditor"));
    assert_eq!(second["structure"], council.designer.payload(0)["structure"]);
}

#[tokio::test]
async fn test_refinement_keeps_first_pass_when_worse() {
    // pass 1: 60 + 10 = 70, pass 2: 55 + 10 = 65
    let council = council(&[60, 55]);
    let result = use_case(council.registry).execute(URL, &content()).await;

    assert_eq!(result.consensus_score, 70);
    assert_eq!(result.winning_pass, 1);
    assert_eq!(result.passes_run, 2);
    assert_eq!(result.mobile_layout.sections[1].title, "First");
    assert_eq!(council.designer.calls(), 2);
}

#[tokio::test]
async fn test_refinement_tie_keeps_first_pass() {
    let council = council(&[60, 60]);
    let result = use_case(council.registry).execute(URL, &content()).await;

    assert_eq!(result.consensus_score, 70);
    assert_eq!(result.winning_pass, 1);
    assert_eq!(result.mobile_layout.sections[1].title, "First");
}

#[tokio::test]
async fn test_refinement_disabled() {
    let council = council(&[50, 60]);
    let params = ConsensusParams::default().without_refinement();
    let result = RunConsensusUseCase::new(Arc::new(council.registry), params)
        .execute(URL, &content())
        .await;

    assert_eq!(result.passes_run, 1);
    assert_eq!(result.consensus_score, 60);
    assert_eq!(council.designer.calls(), 1);
}

#[tokio::test]
async fn test_never_more_than_two_passes() {
    let council = council(&[10, 10, 10, 10]);
    let result = use_case(council.registry).execute(URL, &content()).await;

    assert_eq!(result.passes_run, 2);
    assert_eq!(council.designer.calls(), 2);
    assert!(council.critics.iter().all(|c| c.calls() == 2));
}

// ==================== Degradation ====================

#[tokio::test]
async fn test_single_evaluator_failure() {
    let council = council(&[90]);
    let registry = council
        .registry
        .with_agent(AgentRole::Evaluator(2), ScriptedAgent::failing());
    let result = use_case(registry).execute(URL, &content()).await;

    assert_eq!(result.evaluations.len(), 5);
    assert_eq!(result.degraded_agents, vec!["evaluator-2".to_string()]);
    let fallback = &result.evaluations[1];
    assert_eq!(fallback.agent_id, "evaluator-2");
    assert_eq!(fallback.overall_score, 75);
    assert!(fallback.suggestions.is_empty());
}

#[tokio::test]
async fn test_total_backend_outage_still_produces_result() {
    let result = use_case(AgentRegistry::new()).execute(URL, &content()).await;

    // quality fallbacks agree perfectly at 75
    assert_eq!(result.consensus_score, 85);
    assert_eq!(result.responsive_score, 75);
    assert_eq!(result.accessibility_score, 70);
    assert_eq!(result.performance_score, 75);
    assert_eq!(result.passes_run, 1);
    assert_eq!(result.evaluations.len(), 5);
    assert_eq!(result.degraded_agents.len(), 7);
    assert_eq!(result.degraded_agents[0], "analyzer");
    assert_eq!(result.degraded_agents[1], "designer");

    let kinds: Vec<_> = result.mobile_layout.section_kinds();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Navigation,
            SectionKind::Hero,
            SectionKind::Content,
            SectionKind::Footer
        ]
    );
    assert_eq!(result.palette.primary, "#0f766e");
    assert_eq!(result.suggestions.len(), 2);
}

#[tokio::test]
async fn test_zero_scores_fall_back_to_baseline() {
    let council = council(&[0]);
    let result = use_case(council.registry).execute(URL, &content()).await;

    assert_eq!(result.consensus_score, 75);
    assert_eq!(result.responsive_score, 75);
    assert_eq!(result.readability_score, 75);
    // 75 is below the threshold, so a second (equal) pass ran and lost the tie
    assert_eq!(result.passes_run, 2);
    assert_eq!(result.winning_pass, 1);
}

#[tokio::test]
async fn test_out_of_range_scores_are_clamped() {
    let council = council(&[90]);
    let registry = council.registry.with_agent(
        AgentRole::PerformanceAuditor,
        ScriptedAgent::replying(&[r#"{"score": 250}"#.to_string()]),
    );
    let result = use_case(registry).execute(URL, &content()).await;

    assert_eq!(result.performance_score, 100);
}

#[tokio::test(start_paused = true)]
async fn test_hanging_designer_times_out_to_fallback() {
    let council = council(&[90]);
    let registry = council
        .registry
        .with_agent(AgentRole::Designer, Arc::new(Hanging));
    let params = ConsensusParams::default().with_agent_timeout(Duration::from_secs(5));
    let result = RunConsensusUseCase::new(Arc::new(registry), params)
        .execute(URL, &content())
        .await;

    assert_eq!(result.degraded_agents, vec!["designer".to_string()]);
    assert_eq!(result.mobile_layout.sections.len(), 4);
    assert_eq!(result.mobile_layout.sections[1].title, "Know your numbers");
    assert_eq!(result.consensus_score, 100);
}

// ==================== Reporting ====================

#[tokio::test]
async fn test_tracker_receives_status_transitions() {
    let council = council(&[50, 60]);
    let tracker = Arc::new(RecordingTracker::default());
    use_case(council.registry)
        .with_tracker(tracker.clone())
        .execute(URL, &content())
        .await;

    assert_eq!(
        tracker.statuses(),
        vec![
            "analyzing",
            "designing",
            "evaluating",
            "refining",
            "designing",
            "evaluating",
            "completed"
        ]
    );
    let events = tracker.events.lock().unwrap();
    assert_eq!(events.first().unwrap().0, "run_started");
    let (kind, payload) = events.last().unwrap();
    assert_eq!(kind, "run_completed");
    assert_eq!(payload["winning_pass"], 2);
}

#[tokio::test]
async fn test_progress_reports_every_agent() {
    let council = council(&[90]);
    let progress = RecordingProgress::default();
    use_case(council.registry)
        .execute_with_progress(URL, &content(), &progress)
        .await;

    let completed = progress.completed.lock().unwrap();
    assert_eq!(completed.len(), 7);
    assert_eq!(completed[0], (Stage::Analysis, AgentRole::Analyzer, false));
    assert_eq!(completed[1], (Stage::Design, AgentRole::Designer, false));
    assert!(
        completed[2..]
            .iter()
            .all(|(stage, _, degraded)| *stage == Stage::Evaluation && !degraded)
    );
    assert_eq!(progress.refinements.load(Ordering::SeqCst), 0);
}

// ==================== Determinism ====================

#[tokio::test]
async fn test_identical_inputs_give_identical_results() {
    let first = use_case(council(&[50, 60]).registry)
        .execute(URL, &content())
        .await;
    let second = use_case(council(&[50, 60]).registry)
        .execute(URL, &content())
        .await;

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
