//! Instrumentation wrapper
//!
//! Wraps a single handler invocation: times it, maintains the in-flight
//! gauge for business calls, and dispatches to the technical and domain
//! recording paths. The wrapper is a transparent pass-through: it
//! returns exactly what the handler returns and is observable only
//! through its recorded side effects.
//!
//! The in-flight decrement is tied to a Drop guard, so a handler panic
//! or a caller dropping the instrumented future mid-call can never leave
//! the gauge durably incremented.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use calcmetrics_domain::{CalculationResult, StatusError};

use crate::classify::MethodDescriptor;
use crate::extract::ExtractorRegistry;
use crate::inflight::InFlightCounter;
use crate::ports::{CalculatorMetrics, RpcMetrics};
use crate::recorder::MetricsRecorder;
use crate::taxonomy;

/// Request-scoped metrics interceptor for calculator RPCs.
#[derive(Debug, Clone)]
pub struct MetricsInterceptor {
    recorder: MetricsRecorder,
    domain_metrics: Arc<dyn CalculatorMetrics>,
    rpc_metrics: Arc<dyn RpcMetrics>,
    in_flight: Arc<InFlightCounter>,
    extractors: ExtractorRegistry,
}

impl MetricsInterceptor {
    /// Create an interceptor with an empty extractor registry.
    ///
    /// The in-flight counter is owned by the service and injected here so
    /// every interceptor instance observing the same service shares one
    /// gauge.
    #[must_use]
    pub fn new(
        domain_metrics: Arc<dyn CalculatorMetrics>,
        rpc_metrics: Arc<dyn RpcMetrics>,
        in_flight: Arc<InFlightCounter>,
    ) -> Self {
        Self::with_extractors(domain_metrics, rpc_metrics, in_flight, ExtractorRegistry::new())
    }

    /// Create an interceptor with a pre-populated extractor registry.
    #[must_use]
    pub fn with_extractors(
        domain_metrics: Arc<dyn CalculatorMetrics>,
        rpc_metrics: Arc<dyn RpcMetrics>,
        in_flight: Arc<InFlightCounter>,
        extractors: ExtractorRegistry,
    ) -> Self {
        Self {
            recorder: MetricsRecorder::new(Arc::clone(&domain_metrics)),
            domain_metrics,
            rpc_metrics,
            in_flight,
            extractors,
        }
    }

    /// Instrument one unary call.
    ///
    /// Invokes `handler` exactly once with `request` and returns its
    /// outcome unmodified. Technical metrics (request counter keyed by
    /// method and status, duration histogram keyed by method) are
    /// recorded for every completed call; for business addresses the
    /// in-flight gauge is bumped for the duration of the handler and a
    /// [`CalculationResult`] snapshot is dispatched to the recorder.
    pub async fn instrument_unary<Req, Resp, E, F, Fut>(
        &self,
        full_method: &str,
        request: Req,
        handler: F,
    ) -> Result<Resp, E>
    where
        F: FnOnce(Req) -> Fut,
        Fut: Future<Output = Result<Resp, E>>,
        Resp: Any,
        E: StatusError,
    {
        let descriptor = MethodDescriptor::parse(full_method);
        let start = Instant::now();

        // Guard spans the await: Drop restores the gauge on every exit
        // path, including panic and a dropped (cancelled) future.
        let guard = if descriptor.is_business() {
            Some(InFlightGuard::engage(&self.in_flight, self.domain_metrics.as_ref()))
        } else {
            None
        };

        let outcome = handler(request).await;
        let elapsed = start.elapsed();

        self.rpc_metrics.increment_rpc_requests(
            descriptor.method_name(),
            taxonomy::outcome_status_label(&outcome),
        );
        self.rpc_metrics.record_rpc_duration(descriptor.method_name(), elapsed);

        drop(guard);

        if descriptor.is_business() {
            let result = self.snapshot(&descriptor, &outcome, elapsed);
            self.recorder.record(&result);
        }

        outcome
    }

    /// Instrument one streaming call.
    ///
    /// Technical-only by design: times the whole stream lifetime and
    /// records the request counter and duration histogram. Never
    /// classifies the call as business and never touches the in-flight
    /// gauge or domain series.
    pub async fn instrument_stream<T, E, F, Fut>(
        &self,
        full_method: &str,
        handler: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: StatusError,
    {
        let descriptor = MethodDescriptor::parse(full_method);
        let start = Instant::now();

        let outcome = handler().await;
        let elapsed = start.elapsed();

        self.rpc_metrics.increment_rpc_requests(
            descriptor.method_name(),
            taxonomy::outcome_status_label(&outcome),
        );
        self.rpc_metrics.record_rpc_duration(descriptor.method_name(), elapsed);

        outcome
    }

    /// Build the result snapshot for one completed business call.
    fn snapshot<Resp, E>(
        &self,
        descriptor: &MethodDescriptor<'_>,
        outcome: &Result<Resp, E>,
        elapsed: Duration,
    ) -> CalculationResult
    where
        Resp: Any,
        E: StatusError,
    {
        let mut result =
            CalculationResult::new(descriptor.calculation_type(), elapsed, outcome.is_ok());

        match outcome {
            Ok(response) => {
                if let Some(observation) =
                    self.extractors.extract(descriptor.calculation_type(), response)
                {
                    result.weight = observation.weight;
                    result.hydration = observation.hydration;
                    result.accuracy = observation.accuracy;
                    result.ingredients_used = observation.ingredients;
                    result.recipe_type = observation.recipe_type;
                }
            }
            Err(error) => {
                result.error_kind = Some(taxonomy::error_kind(error.status_code()));
            }
        }

        result
    }
}

/// RAII pairing of one in-flight increment with its decrement.
struct InFlightGuard<'a> {
    counter: &'a InFlightCounter,
    metrics: &'a dyn CalculatorMetrics,
}

impl<'a> InFlightGuard<'a> {
    fn engage(counter: &'a InFlightCounter, metrics: &'a dyn CalculatorMetrics) -> Self {
        let active = counter.increment();
        metrics.set_active_calculations(active);
        Self { counter, metrics }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let active = self.counter.decrement();
        self.metrics.set_active_calculations(active);
    }
}
