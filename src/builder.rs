//! Builder for declaring steps.
//!
//! The shape of a definition is decided by which entry point is taken from
//! [`StepBuilder`]: going through `arrange*` produces a definition whose
//! context is threaded into both act and assert, while going straight to
//! `act*` produces one where act runs against the per-case data itself.
//! Each capturing method has an `_async` twin for phases that return a
//! pending value; both twins store the phase in the same canonical form, so
//! the two kinds are interchangeable downstream.

use std::future::Future;

use crate::phase;
use crate::procedure::{Pipeline, Procedure};
use crate::Fixture;

/// Start declaring a step.
///
/// ```
/// # use triphase::step;
/// # #[tokio::main(flavor = "current_thread")] async fn main() {
/// step()
///     .arrange(|| (1, 2))
///     .act(|pair: &(i32, i32)| pair.0 + pair.1)
///     .assert(|sum, _pair| assert_eq!(sum, 3))
///     .run()
///     .await;
/// # }
/// ```
pub fn step() -> StepBuilder {
    StepBuilder
}

/// Empty builder: no phase captured yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepBuilder;

impl StepBuilder {
    /// Capture a synchronous arrange phase that needs no per-case data.
    pub fn arrange<Ctx, F>(self, arrange: F) -> Arranged<(), Ctx>
    where
        F: Fn() -> Ctx + Send + Sync + 'static,
        Ctx: Send + 'static,
    {
        Arranged {
            arrange: phase::arrange_direct_nullary(arrange),
        }
    }

    /// Capture an arrange phase producing a pending context.
    pub fn arrange_async<Ctx, F, Fut>(self, arrange: F) -> Arranged<(), Ctx>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Ctx> + Send + 'static,
        Ctx: Send + 'static,
    {
        Arranged {
            arrange: phase::arrange_pending_nullary(arrange),
        }
    }

    /// Capture a synchronous arrange phase fed by per-case data.
    pub fn arrange_with<Data, Ctx, F>(self, arrange: F) -> Arranged<Data, Ctx>
    where
        F: Fn(Data) -> Ctx + Send + Sync + 'static,
        Data: Send + 'static,
        Ctx: Send + 'static,
    {
        Arranged {
            arrange: phase::arrange_direct(arrange),
        }
    }

    /// Capture an arrange phase fed by per-case data and producing a pending
    /// context.
    pub fn arrange_with_async<Data, Ctx, F, Fut>(self, arrange: F) -> Arranged<Data, Ctx>
    where
        F: Fn(Data) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Ctx> + Send + 'static,
        Data: Send + 'static,
        Ctx: Send + 'static,
    {
        Arranged {
            arrange: phase::arrange_pending(arrange),
        }
    }

    /// Capture the arrange phase from a shared [`Fixture`].
    ///
    /// Several steps may hold clones of the same fixture; every invocation of
    /// every one of them still produces a fresh context.
    pub fn arrange_fixture<Ctx>(self, fixture: Fixture<Ctx>) -> Arranged<(), Ctx>
    where
        Ctx: Send + 'static,
    {
        Arranged {
            arrange: fixture.into_arrange(),
        }
    }

    /// Declare a definition without an arrange phase: a synchronous act that
    /// takes no input.
    pub fn act<Out, F>(self, act: F) -> Direct<(), Out>
    where
        F: Fn() -> Out + Send + Sync + 'static,
        Out: Send + 'static,
    {
        Direct {
            arrange: phase::arrange_identity(),
            act: phase::act_direct_nullary(act),
        }
    }

    /// Declare a definition without an arrange phase: an act producing a
    /// pending outcome.
    pub fn act_async<Out, F, Fut>(self, act: F) -> Direct<(), Out>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Out> + Send + 'static,
        Out: Send + 'static,
    {
        Direct {
            arrange: phase::arrange_identity(),
            act: phase::act_pending_nullary(act),
        }
    }

    /// Declare a definition without an arrange phase whose act reads the
    /// per-case data.
    pub fn act_with<Data, Out, F>(self, act: F) -> Direct<Data, Out>
    where
        F: Fn(&Data) -> Out + Send + Sync + 'static,
        Data: Send + Sync + 'static,
        Out: Send + 'static,
    {
        Direct {
            arrange: phase::arrange_identity(),
            act: phase::act_direct(act),
        }
    }

    /// Declare a definition without an arrange phase whose act reads the
    /// per-case data and produces a pending outcome.
    pub fn act_with_async<Data, Out, F, Fut>(self, act: F) -> Direct<Data, Out>
    where
        F: Fn(&Data) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Out> + Send + 'static,
        Data: Send + Sync + 'static,
        Out: Send + 'static,
    {
        Direct {
            arrange: phase::arrange_identity(),
            act: phase::act_pending(act),
        }
    }
}

/// A definition with its arrange phase captured; an act phase is required
/// next.
pub struct Arranged<Data, Ctx> {
    arrange: phase::ArrangeFn<Data, Ctx>,
}

impl<Data, Ctx> Arranged<Data, Ctx>
where
    Data: Send + 'static,
    Ctx: Send + Sync + 'static,
{
    /// Capture a synchronous act phase reading the arranged context.
    pub fn act<Out, F>(self, act: F) -> Acted<Data, Ctx, Out>
    where
        F: Fn(&Ctx) -> Out + Send + Sync + 'static,
        Out: Send + 'static,
    {
        Acted {
            arrange: self.arrange,
            act: phase::act_direct(act),
        }
    }

    /// Capture an act phase reading the arranged context and producing a
    /// pending outcome.
    pub fn act_async<Out, F, Fut>(self, act: F) -> Acted<Data, Ctx, Out>
    where
        F: Fn(&Ctx) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Out> + Send + 'static,
        Out: Send + 'static,
    {
        Acted {
            arrange: self.arrange,
            act: phase::act_pending(act),
        }
    }
}

/// An arranged definition with its act phase captured; the assert phase
/// completes it.
pub struct Acted<Data, Ctx, Out> {
    arrange: phase::ArrangeFn<Data, Ctx>,
    act: phase::ActFn<Ctx, Out>,
}

impl<Data, Ctx, Out> Acted<Data, Ctx, Out>
where
    Data: Send + 'static,
    Ctx: Send + Sync + 'static,
    Out: Send + 'static,
{
    /// Capture a synchronous assert phase and produce the runnable procedure.
    ///
    /// The assert receives the act outcome and the arranged context — the
    /// exact value arrange produced, never a copy.
    pub fn assert<F>(self, assert: F) -> Procedure<Data>
    where
        F: Fn(Out, &Ctx) + Send + Sync + 'static,
    {
        Procedure::new(Pipeline {
            arrange: self.arrange,
            act: self.act,
            assert: phase::assert_direct(assert),
        })
    }

    /// Capture an assert phase that itself awaits before finishing.
    pub fn assert_async<F, Fut>(self, assert: F) -> Procedure<Data>
    where
        F: Fn(Out, &Ctx) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Procedure::new(Pipeline {
            arrange: self.arrange,
            act: self.act,
            assert: phase::assert_pending(assert),
        })
    }
}

/// A definition without an arrange phase, act captured; the assert phase
/// completes it.
pub struct Direct<Data, Out> {
    arrange: phase::ArrangeFn<Data, Data>,
    act: phase::ActFn<Data, Out>,
}

impl<Data, Out> Direct<Data, Out>
where
    Data: Send + Sync + 'static,
    Out: Send + 'static,
{
    /// Capture a synchronous assert phase and produce the runnable procedure.
    ///
    /// With no arrange phase there is no context to hand over; the assert
    /// receives the act outcome only.
    pub fn assert<F>(self, assert: F) -> Procedure<Data>
    where
        F: Fn(Out) + Send + Sync + 'static,
    {
        Procedure::new(Pipeline {
            arrange: self.arrange,
            act: self.act,
            assert: phase::assert_outcome(assert),
        })
    }

    /// Capture an assert phase that itself awaits before finishing.
    pub fn assert_async<F, Fut>(self, assert: F) -> Procedure<Data>
    where
        F: Fn(Out) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Procedure::new(Pipeline {
            arrange: self.arrange,
            act: self.act,
            assert: phase::assert_outcome_pending(assert),
        })
    }
}
