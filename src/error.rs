//! Error taxonomy for the terrahealth CLI
//!
//! Every failure is terminal for the current invocation; nothing is retried.
//! Adapters wrap their underlying causes with `anyhow` context and the
//! variants here render the whole chain on a single line.

use thiserror::Error;

/// Errors surfaced by the dispatcher and the AWS adapters.
#[derive(Debug, Error)]
pub enum Error {
    /// No command token was supplied.
    #[error("Usage: terrahealth <command>")]
    MissingCommand,

    /// A known command was invoked with the wrong number of arguments.
    #[error("Usage: terrahealth {usage}")]
    BadArguments { usage: &'static str },

    /// The command token matched nothing in the registered set.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The ambient credential/region chain could not produce a session.
    #[error("Error creating AWS session: {inner:#}")]
    Session { inner: anyhow::Error },

    /// EC2 rejected or failed to answer the DescribeInstances request.
    #[error("Error describing EC2 instances: {inner:#}")]
    DescribeInstances { inner: anyhow::Error },

    /// CloudWatch rejected or failed to answer the GetMetricData request.
    #[error("Error fetching CPU utilization: {inner:#}")]
    FetchCpuUtilization { inner: anyhow::Error },

    /// Writing command output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
