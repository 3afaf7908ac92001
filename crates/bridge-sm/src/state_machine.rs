//! Generic state machine infrastructure.
//!
//! Provides the trait that the bridge attempt machine implements. Keeping the trait separate
//! from the concrete machine leaves room for sibling machines (e.g. a follow-on mint
//! sequence) to plug into the same driver loop.

/// A synchronous, event-driven state machine that emits duties.
///
/// Processing an event either advances the machine and yields zero or more duties for an
/// external executor, or rejects the event with an error. An accepted event never leaves the
/// machine in its prior state unless the transition is an explicit no-op stage advance.
pub trait StateMachine {
    /// The type of duties this state machine can emit.
    type Duty;

    /// The type of events this state machine can process.
    type Event;

    /// The error type returned when event processing fails.
    type Error;

    /// Processes an event and returns the duties to execute, or an error.
    fn process_event(&mut self, event: Self::Event) -> Result<Vec<Self::Duty>, Self::Error>;
}
