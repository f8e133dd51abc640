//! Command dispatch
//!
//! Maps a command token from the argument vector to an adapter invocation.
//! The adapters are injected at construction time so tests can substitute
//! doubles for the live AWS clients.

use crate::aws::{CloudWatchOperations, Ec2Operations};
use crate::error::Error;
use std::io::Write;
use tracing::debug;

/// Expected argument form for the fetchCpuUtilization command.
const FETCH_CPU_USAGE: &str = "fetchCpuUtilization <instanceId>";

/// The terrahealth application: a dispatcher over injected AWS service
/// capabilities.
pub struct App<E, C> {
    ec2: E,
    cloudwatch: C,
}

impl<E: Ec2Operations, C: CloudWatchOperations> App<E, C> {
    pub fn new(ec2: E, cloudwatch: C) -> Self {
        Self { ec2, cloudwatch }
    }

    /// Dispatch one command from the full argument vector.
    ///
    /// `args` is the process argument vector including the program name at
    /// index 0. Command output goes to `out`; diagnostics go through
    /// `tracing`. Every failure is returned to the caller, never swallowed.
    pub async fn run(&self, args: &[String], out: &mut impl Write) -> Result<(), Error> {
        let command = match args.get(1) {
            Some(command) => command.as_str(),
            None => return Err(Error::MissingCommand),
        };

        debug!(command, "Dispatching command");

        match command {
            // "getInstances" is the older name for the same listing.
            "check-aws" | "getInstances" => {
                let ids = self.ec2.list_instance_ids().await?;
                for id in ids {
                    writeln!(out, "Instance ID: {id}")?;
                }
                Ok(())
            }

            "fetchCpuUtilization" => {
                if args.len() != 3 {
                    return Err(Error::BadArguments {
                        usage: FETCH_CPU_USAGE,
                    });
                }

                let output = self.cloudwatch.fetch_cpu_utilization(&args[2]).await?;
                writeln!(out, "{output:?}")?;
                Ok(())
            }

            unknown => Err(Error::UnknownCommand(unknown.to_string())),
        }
    }
}
