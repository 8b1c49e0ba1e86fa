//! The `ask` command: one run, local or remote, rendered live

use anyhow::{Context, Result, bail};
use std::sync::Arc;
use std::time::Instant;
use swarm_application::{LlmGateway, RunSwarmUseCase, SuggestFollowUpsUseCase};
use swarm_domain::{AgentResult, FinalResponse, FollowUps, Model, Query, StreamEvent};
use swarm_infrastructure::{FileConfig, JsonHistoryStore};
use swarm_presentation::server::EVENT_BUFFER;
use swarm_presentation::{ConsoleFormatter, ProgressReporter, RemoteSwarmClient};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Where a run executes
pub enum Backend {
    Local {
        gateway: Arc<dyn LlmGateway>,
        followup_model: Model,
    },
    Remote(RemoteSwarmClient),
}

impl Backend {
    async fn analyze(&self, query: Query, events: mpsc::Sender<StreamEvent>) -> Result<()> {
        match self {
            Backend::Local { gateway, .. } => {
                // Failures reach the consumer as the terminal `error` event.
                if let Err(e) = RunSwarmUseCase::new(Arc::clone(gateway))
                    .execute(query, events)
                    .await
                {
                    debug!("Local run ended early: {}", e);
                }
                Ok(())
            }
            Backend::Remote(client) => Ok(client.analyze(query.content(), events).await?),
        }
    }

    async fn followups(&self, query: &str, recommendation: &str) -> Result<FollowUps> {
        match self {
            Backend::Local {
                gateway,
                followup_model,
            } => Ok(
                SuggestFollowUpsUseCase::new(Arc::clone(gateway), followup_model.clone())
                    .execute(query, recommendation)
                    .await,
            ),
            Backend::Remote(client) => Ok(client.followups(query, recommendation).await?),
        }
    }
}

/// What the consumer saw of a run
#[derive(Debug, Default)]
pub struct RunRecord {
    pub agent_results: Vec<AgentResult>,
    pub final_response: Option<FinalResponse>,
    pub error: Option<String>,
    pub completed: bool,
}

impl RunRecord {
    pub fn observe(&mut self, event: &StreamEvent) {
        match event {
            StreamEvent::AgentResponse { data } => self.agent_results.push(data.clone()),
            StreamEvent::FinalResponse { data } => self.final_response = Some(data.clone()),
            StreamEvent::Complete { .. } => self.completed = true,
            StreamEvent::Error { message } => self.error = Some(message.clone()),
            StreamEvent::Status { .. } => {}
        }
    }

    /// The final recommendation of a successful run
    pub fn into_success(self) -> Result<(Vec<AgentResult>, FinalResponse)> {
        if let Some(message) = self.error {
            bail!("analysis failed: {}", message);
        }
        if !self.completed {
            bail!("event stream ended before the analysis completed");
        }
        let final_response = self
            .final_response
            .context("run completed without a final recommendation")?;
        Ok((self.agent_results, final_response))
    }
}

pub struct AskOptions {
    pub followups: bool,
    pub json: bool,
    pub quiet: bool,
}

pub async fn run(
    backend: &Backend,
    config: &FileConfig,
    query: Query,
    options: AskOptions,
) -> Result<()> {
    let started = Instant::now();
    let query_text = query.content().to_string();
    let (tx, mut rx) = mpsc::channel(EVENT_BUFFER);

    let produce = backend.analyze(query, tx);
    let consume = async {
        let reporter = (!options.json).then(|| ProgressReporter::new(options.quiet));
        let mut record = RunRecord::default();
        while let Some(event) = rx.recv().await {
            match &reporter {
                Some(reporter) => reporter.on_event(&event),
                None => println!("{}", ConsoleFormatter::format_json_line(&event)),
            }
            record.observe(&event);
        }
        record
    };

    let (produced, record) = tokio::join!(produce, consume);
    produced?;
    let (agent_results, final_response) = record.into_success()?;
    info!("Analysis finished in {:?}", started.elapsed());

    save_history(
        config,
        JsonHistoryStore::entry(
            query_text.as_str(),
            agent_results,
            final_response.response.as_str(),
            Some(started.elapsed()),
        ),
    );

    if options.followups {
        let followups = backend
            .followups(&query_text, &final_response.response)
            .await?;
        if options.json {
            println!("{}", serde_json::json!({ "followUps": followups }));
        } else {
            println!("{}", ConsoleFormatter::format_followups(&followups));
        }
    }

    Ok(())
}

fn save_history(config: &FileConfig, entry: swarm_domain::HistoryEntry) {
    let Some(path) = config.history.resolve_path() else {
        warn!("No history location available; set history.path to keep analyses");
        return;
    };
    match JsonHistoryStore::new(path).record(entry) {
        Ok(true) => debug!("Saved analysis to history"),
        Ok(false) => debug!("Query already in history"),
        Err(e) => warn!("Could not save history: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_domain::{AGENTS, synthesizer};

    #[test]
    fn test_record_success() {
        let mut record = RunRecord::default();
        record.observe(&StreamEvent::status("🚀"));
        record.observe(&StreamEvent::AgentResponse {
            data: AgentResult::new(&AGENTS[0], "a"),
        });
        record.observe(&StreamEvent::FinalResponse {
            data: FinalResponse::new(synthesizer(), "Do it. 9/10"),
        });
        record.observe(&StreamEvent::complete());

        let (results, final_response) = record.into_success().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(final_response.response, "Do it. 9/10");
    }

    #[test]
    fn test_record_error() {
        let mut record = RunRecord::default();
        record.observe(&StreamEvent::error("AI request failed: 500"));
        let err = record.into_success().unwrap_err();
        assert!(err.to_string().contains("AI request failed: 500"));
    }

    #[test]
    fn test_record_truncated_stream() {
        let mut record = RunRecord::default();
        record.observe(&StreamEvent::status("🚀"));
        assert!(record.into_success().is_err());
    }
}
