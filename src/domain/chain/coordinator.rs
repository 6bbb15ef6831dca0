//! Chain coordinator - executes one hop of the cascading chain protocol

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, warn, Instrument};

use super::client::{ChainClient, HopRequest};
use super::entity::{
    ChainRequest, ChainResponse, FinalResult, HopOutcome, HopState, TraceId,
};
use super::error::ChainError;
use super::resolver::InstanceResolver;
use super::sequence::{AddressingDiscipline, HopPlan, InstanceId, Sequence, Slot, DEFAULT_SEQUENCE};

/// Default bounded wait for the next hop
pub const DEFAULT_HOP_TIMEOUT: Duration = Duration::from_secs(10);

/// Static settings a coordinator is built with
#[derive(Debug, Clone)]
pub struct ChainSettings {
    /// Identity of the instance this coordinator runs in
    pub instance_id: InstanceId,
    pub discipline: AddressingDiscipline,
    pub hop_timeout: Duration,
    pub default_sequence: String,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            instance_id: 0,
            discipline: AddressingDiscipline::default(),
            hop_timeout: DEFAULT_HOP_TIMEOUT,
            default_sequence: DEFAULT_SEQUENCE.to_string(),
        }
    }
}

impl ChainSettings {
    pub fn for_instance(instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            ..Self::default()
        }
    }

    pub fn with_discipline(mut self, discipline: AddressingDiscipline) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn with_hop_timeout(mut self, hop_timeout: Duration) -> Self {
        self.hop_timeout = hop_timeout;
        self
    }
}

/// Per-request chain logic for one instance
///
/// Holds no mutable state; every call to [`ChainCoordinator::handle`] is
/// independent and performs at most one outbound call.
#[derive(Debug)]
pub struct ChainCoordinator {
    settings: ChainSettings,
    resolver: Arc<dyn InstanceResolver>,
    client: Arc<dyn ChainClient>,
}

impl ChainCoordinator {
    pub fn new(
        settings: ChainSettings,
        resolver: Arc<dyn InstanceResolver>,
        client: Arc<dyn ChainClient>,
    ) -> Self {
        Self {
            settings,
            resolver,
            client,
        }
    }

    pub fn instance_id(&self) -> InstanceId {
        self.settings.instance_id
    }

    pub fn settings(&self) -> &ChainSettings {
        &self.settings
    }

    /// Run this instance's hop for an inbound chain request
    pub async fn handle(&self, request: ChainRequest) -> HopOutcome {
        let started = Instant::now();
        let raw = request
            .seq
            .filter(|seq| !seq.is_empty())
            .unwrap_or_else(|| self.settings.default_sequence.clone());
        let trace_id = request
            .trace_id
            .filter(|id| !id.is_empty())
            .map(TraceId::from)
            .unwrap_or_else(TraceId::generate);

        info!(
            instance = self.instance_id(),
            sequence = %raw,
            trace_id = %trace_id,
            discipline = %self.settings.discipline,
            "Received chain request"
        );

        let sequence = Sequence::parse(&raw);

        match self.settings.discipline.plan(&sequence, self.instance_id()) {
            HopPlan::Relay { target } => self.relay(target, &raw, trace_id).await,
            HopPlan::Process {
                position,
                remaining,
            } => {
                self.process(&raw, position, remaining, trace_id, started)
                    .await
            }
        }
    }

    async fn relay(&self, target: Slot, raw: &str, trace_id: TraceId) -> HopOutcome {
        let own = self.instance_id();
        info!(
            instance = own,
            target = %target,
            trace_id = %trace_id,
            "Request should go to instance {} first, forwarding", target
        );

        match self.call(target, raw.to_string(), &trace_id).await {
            Ok(response) => HopOutcome::new(HopState::Forwarding, response),
            Err(err) => match err.into_report() {
                Ok(report) => HopOutcome::new(HopState::Failed, *report),
                Err(err) => {
                    warn!(
                        instance = own,
                        target = %target,
                        trace_id = %trace_id,
                        error = %err,
                        "Error forwarding to first instance"
                    );

                    let mut response = ChainResponse::new(
                        own,
                        trace_id,
                        format!("Instance {} forwarding request to instance {}", own, target),
                        raw,
                    );
                    response.fail(
                        format!("Failed to forward to instance {}", target),
                        err.to_string(),
                    );
                    HopOutcome::new(HopState::Failed, response)
                }
            },
        }
    }

    async fn process(
        &self,
        raw: &str,
        position: Option<usize>,
        remaining: Sequence,
        trace_id: TraceId,
        started: Instant,
    ) -> HopOutcome {
        let own = self.instance_id();
        let processing_time = rand::thread_rng().gen_range(0..100);
        let mut response = ChainResponse::new(
            own,
            trace_id.clone(),
            format!("Instance {} processing request", own),
            raw,
        )
        .with_position(position, &remaining)
        .with_processing_time(processing_time);

        let Some(next) = remaining.first() else {
            info!(instance = own, trace_id = %trace_id, "End of chain reached");

            response.message = format!("Instance {} is the final node in the chain", own);
            response.final_result = Some(FinalResult::completed(raw));
            return HopOutcome::new(HopState::Terminal, response);
        };

        let remaining = remaining.to_string();
        debug!(
            instance = own,
            next = %next,
            remaining = %remaining,
            state = %HopState::Processing,
            "Calling next instance"
        );

        match self.call(next, remaining, &trace_id).await {
            Ok(child) => {
                response.child_responses.push(child);
                response.total_chain_time = Some(started.elapsed().as_millis() as u64);
                HopOutcome::new(HopState::Completed, response)
            }
            Err(err) => {
                match err.into_report() {
                    Ok(report) => {
                        response.error = report.error.clone();
                        response.error_message = report.error_message.clone();
                        response.child_responses.push(*report);
                    }
                    Err(err) => {
                        response.fail(format!("Failed to call instance {}", next), err.to_string());
                    }
                }

                warn!(
                    instance = own,
                    next = %next,
                    trace_id = %trace_id,
                    error = response.error.as_deref().unwrap_or_default(),
                    error_message = response.error_message.as_deref().unwrap_or_default(),
                    "Error calling next instance"
                );
                HopOutcome::new(HopState::Failed, response)
            }
        }
    }

    /// Forward `sequence` to the instance in `slot`
    ///
    /// The call runs on its own task bounded by the hop timeout. Dropping the
    /// awaiting request does not cancel it; the task finishes on its own.
    async fn call(
        &self,
        slot: Slot,
        sequence: String,
        trace_id: &TraceId,
    ) -> Result<ChainResponse, ChainError> {
        let instance = match slot {
            Slot::Instance(id) => id,
            Slot::Invalid(symbol) => return Err(ChainError::InvalidInstance { symbol }),
        };
        let request = HopRequest {
            address: self.resolver.resolve(instance)?,
            sequence,
            trace_id: trace_id.clone(),
        };
        let client = Arc::clone(&self.client);
        let hop_timeout = self.settings.hop_timeout;

        let task = tokio::spawn(
            async move {
                match tokio::time::timeout(hop_timeout, client.forward(&request)).await {
                    Ok(result) => result,
                    Err(_) => Err(ChainError::Timeout {
                        timeout_ms: hop_timeout.as_millis() as u64,
                    }),
                }
            }
            .in_current_span(),
        );

        task.await.map_err(|e| ChainError::Task {
            message: e.to_string(),
        })?
    }
}
