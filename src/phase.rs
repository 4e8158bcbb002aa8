//! Phase storage and sync/async normalization.
//!
//! Every phase is held in one canonical form: a callable producing a boxed
//! future. A synchronous closure is wrapped so its value comes back through
//! the same awaited path as a genuinely pending one, which means the pipeline
//! never needs to know which kind of closure it was handed.

use std::future::{ready, Future};

use futures::future::BoxFuture;

/// First phase of a step: consumes the per-case data and produces the context.
pub(crate) type ArrangeFn<Data, Ctx> = Box<dyn Fn(Data) -> BoxFuture<'static, Ctx> + Send + Sync>;

/// Middle phase: reads the context and produces the outcome under test.
pub(crate) type ActFn<Ctx, Out> =
    Box<dyn for<'a> Fn(&'a Ctx) -> BoxFuture<'a, Out> + Send + Sync>;

/// Final phase: verifies the outcome against the context.
pub(crate) type AssertFn<Ctx, Out> =
    Box<dyn for<'a> Fn(Out, &'a Ctx) -> BoxFuture<'a, ()> + Send + Sync>;

// ============================================================================
// Arrange
// ============================================================================

pub(crate) fn arrange_direct<Data, Ctx, F>(arrange: F) -> ArrangeFn<Data, Ctx>
where
    F: Fn(Data) -> Ctx + Send + Sync + 'static,
    Data: Send + 'static,
    Ctx: Send + 'static,
{
    Box::new(move |data| Box::pin(ready(arrange(data))))
}

pub(crate) fn arrange_pending<Data, Ctx, F, Fut>(arrange: F) -> ArrangeFn<Data, Ctx>
where
    F: Fn(Data) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Ctx> + Send + 'static,
    Data: Send + 'static,
    Ctx: Send + 'static,
{
    Box::new(move |data| Box::pin(arrange(data)))
}

pub(crate) fn arrange_direct_nullary<Ctx, F>(arrange: F) -> ArrangeFn<(), Ctx>
where
    F: Fn() -> Ctx + Send + Sync + 'static,
    Ctx: Send + 'static,
{
    Box::new(move |()| Box::pin(ready(arrange())))
}

pub(crate) fn arrange_pending_nullary<Ctx, F, Fut>(arrange: F) -> ArrangeFn<(), Ctx>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Ctx> + Send + 'static,
    Ctx: Send + 'static,
{
    Box::new(move |()| Box::pin(arrange()))
}

/// Identity arrange used by the direct shape: the per-case data *is* the
/// context.
pub(crate) fn arrange_identity<Data>() -> ArrangeFn<Data, Data>
where
    Data: Send + 'static,
{
    Box::new(|data| Box::pin(ready(data)))
}

// ============================================================================
// Act
// ============================================================================

pub(crate) fn act_direct<Ctx, Out, F>(act: F) -> ActFn<Ctx, Out>
where
    F: Fn(&Ctx) -> Out + Send + Sync + 'static,
    Out: Send + 'static,
{
    Box::new(move |context| Box::pin(ready(act(context))))
}

pub(crate) fn act_pending<Ctx, Out, F, Fut>(act: F) -> ActFn<Ctx, Out>
where
    F: Fn(&Ctx) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Out> + Send + 'static,
    Out: Send + 'static,
{
    Box::new(move |context| Box::pin(act(context)))
}

pub(crate) fn act_direct_nullary<Ctx, Out, F>(act: F) -> ActFn<Ctx, Out>
where
    F: Fn() -> Out + Send + Sync + 'static,
    Out: Send + 'static,
{
    Box::new(move |_context| Box::pin(ready(act())))
}

pub(crate) fn act_pending_nullary<Ctx, Out, F, Fut>(act: F) -> ActFn<Ctx, Out>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Out> + Send + 'static,
    Out: Send + 'static,
{
    Box::new(move |_context| Box::pin(act()))
}

// ============================================================================
// Assert
// ============================================================================

pub(crate) fn assert_direct<Ctx, Out, F>(assert: F) -> AssertFn<Ctx, Out>
where
    F: Fn(Out, &Ctx) + Send + Sync + 'static,
    Out: Send + 'static,
{
    Box::new(move |outcome, context| Box::pin(ready(assert(outcome, context))))
}

pub(crate) fn assert_pending<Ctx, Out, F, Fut>(assert: F) -> AssertFn<Ctx, Out>
where
    F: Fn(Out, &Ctx) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
    Out: Send + 'static,
{
    Box::new(move |outcome, context| Box::pin(assert(outcome, context)))
}

pub(crate) fn assert_outcome<Ctx, Out, F>(assert: F) -> AssertFn<Ctx, Out>
where
    F: Fn(Out) + Send + Sync + 'static,
    Out: Send + 'static,
{
    Box::new(move |outcome, _context| Box::pin(ready(assert(outcome))))
}

pub(crate) fn assert_outcome_pending<Ctx, Out, F, Fut>(assert: F) -> AssertFn<Ctx, Out>
where
    F: Fn(Out) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
    Out: Send + 'static,
{
    Box::new(move |outcome, _context| Box::pin(assert(outcome)))
}
