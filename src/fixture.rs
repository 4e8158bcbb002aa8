//! Reusable arrange sources shared across step definitions.

use std::future::{ready, Future};
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::phase::ArrangeFn;

/// A reusable arrange phase that several steps can share.
///
/// A fixture wraps the arrange source once and hands out cheap clones; every
/// step holding a clone still invokes the source anew on every run, so
/// contexts are never cached or shared between invocations.
///
/// ```
/// # use triphase::{step, Fixture};
/// # #[tokio::main(flavor = "current_thread")] async fn main() {
/// let accounts = Fixture::new(|| vec![("alice", 120_u32), ("bob", 40)]);
///
/// step()
///     .arrange_fixture(accounts.clone())
///     .act(|book: &Vec<(&str, u32)>| book.iter().map(|(_, n)| n).sum::<u32>())
///     .assert(|total, _book| assert_eq!(total, 160))
///     .run()
///     .await;
/// # }
/// ```
pub struct Fixture<Ctx> {
    source: Arc<dyn Fn() -> BoxFuture<'static, Ctx> + Send + Sync>,
}

impl<Ctx> Clone for Fixture<Ctx> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<Ctx> Fixture<Ctx>
where
    Ctx: Send + 'static,
{
    /// Build a fixture from a synchronous source.
    pub fn new<F>(source: F) -> Self
    where
        F: Fn() -> Ctx + Send + Sync + 'static,
    {
        Self {
            source: Arc::new(move || Box::pin(ready(source()))),
        }
    }

    /// Build a fixture from a source producing a pending context.
    pub fn new_async<F, Fut>(source: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Ctx> + Send + 'static,
    {
        Self {
            source: Arc::new(move || Box::pin(source())),
        }
    }

    pub(crate) fn into_arrange(self) -> ArrangeFn<(), Ctx> {
        Box::new(move |()| (self.source)())
    }
}
