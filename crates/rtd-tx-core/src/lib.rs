pub mod domain;
pub mod error;
pub mod executor;
pub mod ports;
pub mod state_machine;

pub use domain::{
    Effects, ExecuteRequestType, ExecutionOptions, ExecutionResult, ExecutionStatus,
    SignedTransaction, TransactionIntent, SUCCESS_STATUS,
};
pub use error::{ConfirmationError, ExecutionFailure};
pub use executor::{inspect_result, Confirmation, TransactionExecutor};
pub use ports::{ExecutorPort, PortError, SignerPort};
pub use state_machine::{
    transition, ConfirmationAction, ConfirmationState, StateTransition, TransitionError,
};
