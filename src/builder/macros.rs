//! Macros for ergonomic state machine construction.

/// Declare a [`MachineConfig`](crate::MachineConfig) inline.
///
/// State and event names are written as identifiers. States are declared
/// in the order they are listed; a state with no transitions takes an
/// empty block.
///
/// # Example
///
/// ```
/// use waypoint::{machine_config, State, StateMachine};
///
/// let config = machine_config! {
///     initial: idle,
///     idle => { start => running },
///     running => { stop => idle, pause => paused },
///     paused => { resume => running },
///     halted => {},
/// };
///
/// let machine = StateMachine::new(config);
/// assert_eq!(machine.state(), &State::from("idle"));
/// assert_eq!(machine.states(None).len(), 4);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:ident
        $(,
            $state:ident => {
                $($event:ident => $target:ident),* $(,)?
            }
        )* $(,)?
    ) => {
        $crate::MachineConfig::new(stringify!($initial))
            $(
                .with_state(stringify!($state), {
                    let transitions: ::std::vec::Vec<(&str, &str)> =
                        ::std::vec![$((stringify!($event), stringify!($target))),*];
                    transitions
                })
            )*
    };
}
