//! [`Handler`] abstractions.

/// Executable handler.
///
/// Execution is synchronous: handlers only transform the provided arguments
/// and never suspend.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors if the provided arguments cannot be handled.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
