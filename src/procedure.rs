//! The composed pipeline and the runnable procedure handed to the test runner.

use async_trait::async_trait;

use crate::phase::{ActFn, ArrangeFn, AssertFn};

/// One fully composed arrange/act/assert sequence.
///
/// Both definition shapes funnel into this single pipeline: a definition
/// without an arrange phase carries an identity arrange that passes the
/// per-case data through as the context. Phases run strictly in order, each
/// awaited before the next starts, and every value they produce lives only
/// for the current invocation.
pub(crate) struct Pipeline<Data, Ctx, Out> {
    pub(crate) arrange: ArrangeFn<Data, Ctx>,
    pub(crate) act: ActFn<Ctx, Out>,
    pub(crate) assert: AssertFn<Ctx, Out>,
}

/// Erased execution contract so [`Procedure`] does not carry the context and
/// outcome type parameters.
#[async_trait]
pub(crate) trait Run<Data>: Send + Sync
where
    Data: Send + 'static,
{
    async fn run(&self, data: Data);
}

#[async_trait]
impl<Data, Ctx, Out> Run<Data> for Pipeline<Data, Ctx, Out>
where
    Data: Send + 'static,
    Ctx: Send + Sync + 'static,
    Out: Send + 'static,
{
    async fn run(&self, data: Data) {
        #[cfg(feature = "tracing")]
        tracing::debug!(phase = "arrange", "phase.start");
        let context = (self.arrange)(data).await;

        #[cfg(feature = "tracing")]
        tracing::debug!(phase = "act", "phase.start");
        let outcome = (self.act)(&context).await;

        #[cfg(feature = "tracing")]
        tracing::debug!(phase = "assert", "phase.start");
        (self.assert)(outcome, &context).await;

        #[cfg(feature = "tracing")]
        tracing::debug!("phase.end");
    }
}

/// An executable test procedure produced by the builder.
///
/// The procedure closes over the definition only and keeps no per-invocation
/// state, so it is reentrant: the same procedure may be run many times (for
/// example once per row of a table-driven test), each run producing fully
/// independent phase values. A failing phase panics through `run` unmodified;
/// the procedure installs no catch, no retries, and no timeout.
pub struct Procedure<Data = ()>
where
    Data: Send + 'static,
{
    pipeline: Box<dyn Run<Data>>,
}

impl<Data> Procedure<Data>
where
    Data: Send + 'static,
{
    pub(crate) fn new(pipeline: impl Run<Data> + 'static) -> Self {
        Self {
            pipeline: Box::new(pipeline),
        }
    }

    /// Run one case, feeding `data` into the first phase of the definition
    /// (arrange if present, act otherwise).
    pub async fn run_with(&self, data: Data) {
        self.pipeline.run(data).await;
    }

    /// Run one independent case per row, in order.
    ///
    /// A convenience for table-driven tests whose runner does not register
    /// rows individually; the first failing row panics and ends the run.
    pub async fn run_each<I>(&self, rows: I)
    where
        I: IntoIterator<Item = Data>,
    {
        for row in rows {
            self.run_with(row).await;
        }
    }
}

impl Procedure<()> {
    /// Run the single case of a definition that takes no per-case data.
    pub async fn run(&self) {
        self.run_with(()).await;
    }
}
