//! Run Swarm use case
//!
//! Orchestrates the three-phase agent swarm for one query and streams
//! progress as [`StreamEvent`]s.

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use swarm_domain::{
    AGENTS, AgentResult, FinalResponse, IncompletePhase, Phase, PromptTemplate, Query,
    RequestContext, StreamEvent, synthesizer,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Errors that can occur during a swarm run
#[derive(Error, Debug)]
pub enum RunSwarmError {
    #[error("{agent} failed during {phase}: {source}")]
    AgentFailed {
        agent: &'static str,
        phase: Phase,
        #[source]
        source: GatewayError,
    },

    #[error("Agent task failed: {0}")]
    TaskFailed(String),

    #[error(transparent)]
    IncompletePhase(#[from] IncompletePhase),

    /// The event receiver was dropped (client went away).
    #[error("Event stream closed by client")]
    Cancelled,
}

impl RunSwarmError {
    /// Message carried by the terminal `error` event
    pub fn client_message(&self) -> String {
        match self {
            RunSwarmError::AgentFailed { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunSwarmError::Cancelled)
    }
}

/// Everything a successful run produced
#[derive(Debug, Clone)]
pub struct SwarmOutcome {
    pub query: Query,
    /// Analysis and verification results, in registry order
    pub agent_results: Vec<AgentResult>,
    pub final_response: FinalResponse,
}

/// Use case for running the agent swarm
pub struct RunSwarmUseCase<G: LlmGateway + ?Sized + 'static> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + ?Sized + 'static> Clone for RunSwarmUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: LlmGateway + ?Sized + 'static> RunSwarmUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the pipeline, streaming every event into `events`.
    ///
    /// The stream always ends with exactly one terminal event: `complete`
    /// after the final response, or `error` on the first agent failure.
    /// If the receiver is dropped mid-run, in-flight calls are aborted and
    /// no terminal event is sent.
    pub async fn execute(
        &self,
        query: Query,
        events: mpsc::Sender<StreamEvent>,
    ) -> Result<SwarmOutcome, RunSwarmError> {
        info!("Processing query: {}", query);

        let result = self.run(query, &events).await;
        match &result {
            Ok(_) => {}
            Err(RunSwarmError::Cancelled) => {
                warn!("Client disconnected, swarm run abandoned");
            }
            Err(e) => {
                error!("Error in analysis: {}", e);
                // The run is already over; a closed receiver changes nothing.
                let _ = events.send(StreamEvent::error(e.client_message())).await;
            }
        }
        result
    }

    async fn run(
        &self,
        query: Query,
        events: &mpsc::Sender<StreamEvent>,
    ) -> Result<SwarmOutcome, RunSwarmError> {
        let mut ctx = RequestContext::new(query);

        for phase in [Phase::Analysis, Phase::Verification] {
            let results = self.run_phase(phase, &ctx, events).await?;
            ctx.complete_phase(phase, results)?;
        }

        let mut synthesis = self.run_phase(Phase::Synthesis, &ctx, events).await?;
        let (_, result) = synthesis.pop().ok_or(IncompletePhase {
            phase: Phase::Synthesis,
            expected: 1,
            actual: 0,
        })?;
        let final_response = FinalResponse::new(synthesizer(), result.response);

        emit(
            events,
            StreamEvent::FinalResponse {
                data: final_response.clone(),
            },
        )
        .await?;
        emit(events, StreamEvent::complete()).await?;
        info!("Analysis complete");

        Ok(SwarmOutcome {
            agent_results: ctx.results().to_vec(),
            query: ctx.query().clone(),
            final_response,
        })
    }

    /// Run every agent of `phase` concurrently and wait for all of them.
    ///
    /// Returns `(registry index, result)` pairs in completion order. The first
    /// failure, or the receiver going away, aborts the remaining calls of the
    /// phase.
    async fn run_phase(
        &self,
        phase: Phase,
        ctx: &RequestContext,
        events: &mpsc::Sender<StreamEvent>,
    ) -> Result<Vec<(usize, AgentResult)>, RunSwarmError> {
        info!("Phase {}: {} agents", phase, phase.agents().len());
        emit(events, StreamEvent::status(phase.start_message())).await?;

        let context = if phase.uses_context() {
            ctx.context_block()
        } else {
            String::new()
        };
        let user_message = PromptTemplate::user_message(ctx.query().content(), &context);

        let mut join_set = JoinSet::new();
        for index in phase.agent_range() {
            let agent = &AGENTS[index];
            if phase == Phase::Analysis {
                emit(
                    events,
                    StreamEvent::status(format!("{} {} analyzing...", agent.icon, agent.name)),
                )
                .await?;
            }

            debug!("{} calling AI with model: {}", agent.name, agent.model);
            let gateway = Arc::clone(&self.gateway);
            let request = CompletionRequest::for_agent(agent, user_message.clone());
            join_set.spawn(async move {
                let outcome = gateway.complete(&request).await;
                (index, outcome)
            });
        }

        let mut results = Vec::with_capacity(join_set.len());
        loop {
            let joined = tokio::select! {
                joined = join_set.join_next() => joined,
                () = events.closed() => {
                    debug!("Receiver dropped during {}, aborting {} calls", phase, join_set.len());
                    join_set.abort_all();
                    return Err(RunSwarmError::Cancelled);
                }
            };
            let Some(joined) = joined else {
                break;
            };
            let (index, outcome) = joined.map_err(|e| RunSwarmError::TaskFailed(e.to_string()))?;
            let agent = &AGENTS[index];
            match outcome {
                Ok(text) => {
                    info!("{} responded", agent.name);
                    let result = AgentResult::new(agent, text);
                    if phase != Phase::Synthesis {
                        emit(
                            events,
                            StreamEvent::AgentResponse {
                                data: result.clone(),
                            },
                        )
                        .await?;
                    }
                    results.push((index, result));
                }
                Err(source) => {
                    warn!("{} AI error: {}", agent.name, source);
                    join_set.abort_all();
                    return Err(RunSwarmError::AgentFailed {
                        agent: agent.name,
                        phase,
                        source,
                    });
                }
            }
        }

        Ok(results)
    }
}

async fn emit(
    events: &mpsc::Sender<StreamEvent>,
    event: StreamEvent,
) -> Result<(), RunSwarmError> {
    events
        .send(event)
        .await
        .map_err(|_| RunSwarmError::Cancelled)
}
