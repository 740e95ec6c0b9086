//! Table-driven state machine engine.

use std::fmt;
use std::thread;
use std::time::Duration;

use crate::error::{StateMachineError, StateMachineResult};

/// A transition function bound to one state.
///
/// Receives the argument list produced by the previous step and returns the
/// next state together with the arguments for that state. A negative next
/// state is a terminal code: it is stored as the final state and never
/// executed as an index.
pub type Transition<A> = Box<dyn FnMut(Vec<A>) -> (i32, Vec<A>) + Send>;

/// State machine executing state-indexed transition functions.
///
/// States are indices into a binding table of `num_states` transitions.
/// The machine is ready once exactly `num_states` transitions have been
/// bound; the caller paces execution with [`StateMachine::run`] or hands
/// control to [`StateMachine::run_internal_loop`], which steps until a
/// transition yields a negative terminal code.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use opencontrol_state_machine::StateMachine;
///
/// let mut machine: StateMachine<u32> = StateMachine::new(2, Duration::ZERO);
/// machine.bind(|args| (1, args));
/// machine.bind(|_| (-1, Vec::new()));
///
/// let terminal = machine.run_internal_loop(Some(0))?;
/// assert_eq!(terminal, -1);
/// # Ok::<(), opencontrol_state_machine::StateMachineError>(())
/// ```
pub struct StateMachine<A> {
    num_states: usize,
    loop_delay: Duration,
    bindings: Vec<Transition<A>>,
    current_state: i32,
    args: Vec<A>,
}

impl<A> StateMachine<A> {
    /// Create a machine for `num_states` states with the given pacing delay
    /// for the internal loop.
    ///
    /// The machine starts in state 0 with an empty argument list and no
    /// bindings; it is not ready until every state has a transition bound.
    #[must_use]
    pub fn new(num_states: usize, loop_delay: Duration) -> Self {
        Self {
            num_states,
            loop_delay,
            bindings: Vec::with_capacity(num_states),
            current_state: 0,
            args: Vec::new(),
        }
    }

    /// Append a transition for the next unbound state.
    ///
    /// Bindings are positional: the first call binds state 0, the second
    /// state 1, and so on.
    pub fn bind(&mut self, transition: impl FnMut(Vec<A>) -> (i32, Vec<A>) + Send + 'static) {
        self.bindings.push(Box::new(transition));
    }

    /// Validate that the binding table is complete.
    ///
    /// # Errors
    ///
    /// Returns [`StateMachineError::NoStates`] if the machine was
    /// configured with zero states, or
    /// [`StateMachineError::BindingMismatch`] if the number of bound
    /// transitions does not equal the state count.
    pub fn check_bindings(&self) -> StateMachineResult<()> {
        if self.num_states == 0 {
            return Err(StateMachineError::NoStates);
        }
        if self.bindings.len() != self.num_states {
            return Err(StateMachineError::BindingMismatch {
                expected: self.num_states,
                found: self.bindings.len(),
            });
        }
        Ok(())
    }

    /// Whether the binding table is complete.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.check_bindings().is_ok()
    }

    /// Execute one transition step.
    ///
    /// Invokes the transition bound to the current state with the stored
    /// argument list, then stores the returned state and arguments. The
    /// returned state may be negative; it is stored as a terminal code and
    /// a subsequent `run` reports it as invalid.
    ///
    /// # Errors
    ///
    /// Returns a binding-table error from
    /// [`StateMachine::check_bindings`], or
    /// [`StateMachineError::InvalidState`] when the current state is not a
    /// valid index.
    pub fn run(&mut self) -> StateMachineResult<i32> {
        self.check_bindings()?;
        let index = usize::try_from(self.current_state)
            .ok()
            .filter(|&index| index < self.num_states)
            .ok_or(StateMachineError::InvalidState(self.current_state))?;

        let args = std::mem::take(&mut self.args);
        let (next_state, next_args) = (self.bindings[index])(args);
        self.current_state = next_state;
        self.args = next_args;
        Ok(next_state)
    }

    /// Step repeatedly until a transition yields a negative terminal code.
    ///
    /// If `start_state` is given it is validated and installed before the
    /// first step; a rejected start state leaves the machine unchanged.
    /// The pacing delay configured at construction is slept between steps.
    /// Returns the terminal code, which is also left in the current state.
    ///
    /// # Errors
    ///
    /// Returns [`StateMachineError::InvalidStartState`] for a start state
    /// outside `[0, num_states)`, or any error produced by
    /// [`StateMachine::run`].
    pub fn run_internal_loop(&mut self, start_state: Option<i32>) -> StateMachineResult<i32> {
        self.check_bindings()?;
        if let Some(start) = start_state {
            if !self.is_valid_index(start) {
                return Err(StateMachineError::InvalidStartState(start));
            }
            self.current_state = start;
        }
        loop {
            let next = self.run()?;
            if next < 0 {
                return Ok(next);
            }
            thread::sleep(self.loop_delay);
        }
    }

    /// Install a new current state.
    ///
    /// # Errors
    ///
    /// Returns [`StateMachineError::InvalidStartState`] if `state` is
    /// outside `[0, num_states)`.
    pub fn set_state(&mut self, state: i32) -> StateMachineResult<()> {
        if !self.is_valid_index(state) {
            return Err(StateMachineError::InvalidStartState(state));
        }
        self.current_state = state;
        Ok(())
    }

    /// Current state, which may hold a negative terminal code after the
    /// internal loop halts.
    #[must_use]
    pub fn current_state(&self) -> i32 {
        self.current_state
    }

    /// Argument list that will be passed to the next transition.
    #[must_use]
    pub fn args(&self) -> &[A] {
        &self.args
    }

    /// Configured state count.
    #[must_use]
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Pacing delay of the internal loop.
    #[must_use]
    pub fn loop_delay(&self) -> Duration {
        self.loop_delay
    }

    fn is_valid_index(&self, state: i32) -> bool {
        usize::try_from(state).is_ok_and(|index| index < self.num_states)
    }
}

impl<A> fmt::Debug for StateMachine<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("num_states", &self.num_states)
            .field("loop_delay", &self.loop_delay)
            .field("bound", &self.bindings.len())
            .field("current_state", &self.current_state)
            .field("args", &self.args.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_states_not_ready() {
        let machine: StateMachine<()> = StateMachine::new(0, Duration::ZERO);
        assert_eq!(machine.check_bindings(), Err(StateMachineError::NoStates));
        assert!(!machine.is_ready());
    }

    #[test]
    fn test_incomplete_bindings_reported_with_counts() {
        let mut machine: StateMachine<()> = StateMachine::new(3, Duration::ZERO);
        machine.bind(|args| (0, args));
        assert_eq!(
            machine.check_bindings(),
            Err(StateMachineError::BindingMismatch {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_excess_bindings_rejected() {
        let mut machine: StateMachine<()> = StateMachine::new(1, Duration::ZERO);
        machine.bind(|args| (0, args));
        machine.bind(|args| (0, args));
        assert!(!machine.is_ready());
    }

    #[test]
    fn test_run_steps_state_and_args() {
        let mut machine: StateMachine<i64> = StateMachine::new(2, Duration::ZERO);
        machine.bind(|mut args| {
            args.push(7);
            (1, args)
        });
        machine.bind(|mut args| {
            args.push(8);
            (0, args)
        });

        assert_eq!(machine.run(), Ok(1));
        assert_eq!(machine.args(), &[7]);
        assert_eq!(machine.run(), Ok(0));
        assert_eq!(machine.args(), &[7, 8]);
    }

    #[test]
    fn test_run_rejects_terminal_state_as_index() {
        let mut machine: StateMachine<()> = StateMachine::new(1, Duration::ZERO);
        machine.bind(|_| (-5, Vec::new()));

        assert_eq!(machine.run(), Ok(-5));
        assert_eq!(machine.run(), Err(StateMachineError::InvalidState(-5)));
        assert_eq!(machine.current_state(), -5);
    }

    #[test]
    fn test_run_not_ready_leaves_state_unchanged() {
        let mut machine: StateMachine<()> = StateMachine::new(2, Duration::ZERO);
        machine.bind(|args| (1, args));
        assert!(machine.run().is_err());
        assert_eq!(machine.current_state(), 0);
    }

    #[test]
    fn test_internal_loop_rejects_out_of_range_start() {
        let mut machine: StateMachine<()> = StateMachine::new(2, Duration::ZERO);
        machine.bind(|args| (1, args));
        machine.bind(|_| (-1, Vec::new()));

        assert_eq!(
            machine.run_internal_loop(Some(2)),
            Err(StateMachineError::InvalidStartState(2))
        );
        assert_eq!(
            machine.run_internal_loop(Some(-1)),
            Err(StateMachineError::InvalidStartState(-1))
        );
        // The rejected start left the machine runnable from state 0.
        assert_eq!(machine.current_state(), 0);
        assert_eq!(machine.run_internal_loop(None), Ok(-1));
    }

    #[test]
    fn test_set_state_validated() {
        let mut machine: StateMachine<()> = StateMachine::new(2, Duration::ZERO);
        assert!(machine.set_state(1).is_ok());
        assert_eq!(machine.current_state(), 1);
        assert_eq!(
            machine.set_state(5),
            Err(StateMachineError::InvalidStartState(5))
        );
        assert_eq!(machine.current_state(), 1);
    }

    #[test]
    fn test_debug_does_not_require_debug_args() {
        let machine: StateMachine<fn()> = StateMachine::new(1, Duration::ZERO);
        let rendered = format!("{machine:?}");
        assert!(rendered.contains("StateMachine"));
    }
}
