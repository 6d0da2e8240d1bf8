//! Assertions for the caller-facing result shapes
//!
//! The query layer promises callers three distinguishable error
//! shapes: not-found, execution failure, and host error. These helpers
//! assert on the shape and give better messages than a bare `matches!`.

use std::fmt::Debug;

use gantry_query::{HostError, QueryError};

/// Assert the result is `PartitionSetNotFound` carrying exactly `expected_name`.
pub fn assert_partition_set_not_found<T: Debug>(
    result: gantry_query::Result<T>,
    expected_name: &str,
) {
    match result {
        Err(QueryError::PartitionSetNotFound { name }) => assert_eq!(
            name, expected_name,
            "not-found error names '{name}', expected '{expected_name}'"
        ),
        other => panic!("expected PartitionSetNotFound, got {other:?}"),
    }
}

/// Assert the result is an execution failure whose message equals
/// `expected_message` verbatim.
pub fn assert_execution_failure<T: Debug>(result: gantry_query::Result<T>, expected_message: &str) {
    match result {
        Err(QueryError::Execution(failure)) => assert_eq!(
            failure.message, expected_message,
            "execution failure message differs"
        ),
        other => panic!("expected Execution failure, got {other:?}"),
    }
}

/// Assert the result is a host error and return it for further matching.
pub fn assert_host_error<T: Debug>(result: gantry_query::Result<T>) -> HostError {
    match result {
        Err(QueryError::Host(error)) => error,
        other => panic!("expected Host error, got {other:?}"),
    }
}
