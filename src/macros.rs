//! Record-style macro for declaring steps.

/// Declare a step as a record of phases.
///
/// Which fields are present decides the shape of the definition: with an
/// `arrange` field, act and assert receive the arranged context; without
/// one, act runs directly and assert receives the outcome only. The fields
/// take synchronous closures; phases that await use the builder's `_async`
/// methods instead.
///
/// ```
/// # use triphase::step;
/// # #[tokio::main(flavor = "current_thread")] async fn main() {
/// step! {
///     arrange: || (1, 2),
///     act: |pair: &(i32, i32)| pair.0 + pair.1,
///     assert: |sum, _pair| assert_eq!(sum, 3),
/// }
/// .run()
/// .await;
///
/// step! {
///     act: || 1 + 2,
///     assert: |sum| assert_eq!(sum, 3),
/// }
/// .run()
/// .await;
/// # }
/// ```
#[macro_export]
macro_rules! step {
    (
        arrange: $arrange:expr,
        act: $act:expr,
        assert: $assert:expr $(,)?
    ) => {
        $crate::step().arrange($arrange).act($act).assert($assert)
    };

    (
        act: $act:expr,
        assert: $assert:expr $(,)?
    ) => {
        $crate::step().act($act).assert($assert)
    };
}
