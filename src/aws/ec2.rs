//! EC2 instance inventory

use crate::aws::context::AwsContext;
use crate::error::Error;
use anyhow::Context;
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesOutput;
use aws_sdk_ec2::Client;
use std::future::Future;
use tracing::debug;

/// EC2 operations the dispatcher depends on.
///
/// Abstracting the live client behind this trait lets the dispatcher run
/// against a test double instead of real AWS.
pub trait Ec2Operations: Send + Sync {
    /// List the ids of all instances visible to the session, in provider
    /// order.
    fn list_instance_ids(&self) -> impl Future<Output = Result<Vec<String>, Error>> + Send;
}

/// Live EC2 adapter. Opens a fresh session per operation and discards it
/// when the call returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ec2Adapter;

impl Ec2Adapter {
    pub fn new() -> Self {
        Self
    }
}

impl Ec2Operations for Ec2Adapter {
    async fn list_instance_ids(&self) -> Result<Vec<String>, Error> {
        let aws = AwsContext::load()
            .await
            .map_err(|inner| Error::Session { inner })?;

        let ids = describe_instance_ids(&aws.ec2_client())
            .await
            .map_err(|inner| Error::DescribeInstances { inner })?;

        debug!(count = ids.len(), "Listed EC2 instances");

        Ok(ids)
    }
}

/// Issue one unfiltered DescribeInstances request and return the instance
/// ids it yields. No pagination: a single request, a single response.
pub async fn describe_instance_ids(client: &Client) -> anyhow::Result<Vec<String>> {
    let response = client
        .describe_instances()
        .send()
        .await
        .context("DescribeInstances request failed")?;

    Ok(instance_ids(&response))
}

/// Flatten the reservation -> instance nesting into ids, preserving
/// provider order. Instances the provider returns without an id are
/// skipped.
fn instance_ids(output: &DescribeInstancesOutput) -> Vec<String> {
    output
        .reservations()
        .iter()
        .flat_map(|reservation| reservation.instances())
        .filter_map(|instance| instance.instance_id())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{Instance, Reservation};

    fn reservation(ids: &[Option<&str>]) -> Reservation {
        let mut builder = Reservation::builder();
        for id in ids {
            let mut instance = Instance::builder();
            if let Some(id) = id {
                instance = instance.instance_id(*id);
            }
            builder = builder.instances(instance.build());
        }
        builder.build()
    }

    #[test]
    fn flattens_reservations_in_provider_order() {
        let output = DescribeInstancesOutput::builder()
            .reservations(reservation(&[Some("i-aaa"), Some("i-bbb")]))
            .reservations(reservation(&[Some("i-ccc")]))
            .build();

        assert_eq!(instance_ids(&output), vec!["i-aaa", "i-bbb", "i-ccc"]);
    }

    #[test]
    fn empty_response_yields_no_ids() {
        let output = DescribeInstancesOutput::builder().build();
        assert!(instance_ids(&output).is_empty());
    }

    #[test]
    fn skips_instances_without_an_id() {
        let output = DescribeInstancesOutput::builder()
            .reservations(reservation(&[Some("i-aaa"), None, Some("i-bbb")]))
            .build();

        assert_eq!(instance_ids(&output), vec!["i-aaa", "i-bbb"]);
    }
}
