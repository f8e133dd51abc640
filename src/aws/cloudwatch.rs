//! CloudWatch CPU-utilization metrics

use crate::aws::context::AwsContext;
use crate::error::Error;
use anyhow::Context;
use aws_sdk_cloudwatch::operation::get_metric_data::GetMetricDataOutput;
use aws_sdk_cloudwatch::primitives::DateTime as AwsDateTime;
use aws_sdk_cloudwatch::types::{Dimension, Metric, MetricDataQuery, MetricStat, StandardUnit};
use aws_sdk_cloudwatch::Client;
use chrono::{Duration, Utc};
use std::future::Future;
use tracing::debug;

const NAMESPACE: &str = "AWS/EC2";
const METRIC_NAME: &str = "CPUUtilization";
const QUERY_ID: &str = "cpuUtilization";

/// Metric window: the last 24 hours, in 1-hour buckets.
const LOOKBACK_HOURS: i64 = 24;
const PERIOD_SECS: i32 = 3600;

/// CloudWatch operations the dispatcher depends on.
pub trait CloudWatchOperations: Send + Sync {
    /// Fetch the CPU-utilization metric data for one instance.
    fn fetch_cpu_utilization(
        &self,
        instance_id: &str,
    ) -> impl Future<Output = Result<GetMetricDataOutput, Error>> + Send;
}

/// Live CloudWatch adapter. Opens a fresh session per operation and
/// discards it when the call returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct CloudWatchAdapter;

impl CloudWatchAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl CloudWatchOperations for CloudWatchAdapter {
    async fn fetch_cpu_utilization(&self, instance_id: &str) -> Result<GetMetricDataOutput, Error> {
        let aws = AwsContext::load()
            .await
            .map_err(|inner| Error::Session { inner })?;

        get_cpu_utilization(&aws.cloudwatch_client(), instance_id)
            .await
            .map_err(|inner| Error::FetchCpuUtilization { inner })
    }
}

/// Issue one GetMetricData request for the instance's average CPU
/// utilization over the last 24 hours and return the raw output. No
/// retries, no pagination, no unit conversion.
pub async fn get_cpu_utilization(
    client: &Client,
    instance_id: &str,
) -> anyhow::Result<GetMetricDataOutput> {
    let end_time = Utc::now();
    let start_time = end_time - Duration::hours(LOOKBACK_HOURS);

    debug!(instance_id = %instance_id, "Fetching CPU utilization");

    client
        .get_metric_data()
        .start_time(AwsDateTime::from_secs(start_time.timestamp()))
        .end_time(AwsDateTime::from_secs(end_time.timestamp()))
        .metric_data_queries(cpu_utilization_query(instance_id))
        .send()
        .await
        .context("GetMetricData request failed")
}

/// Build the fixed CPU-utilization query for one instance. Constructed
/// fresh per call and never mutated afterwards.
fn cpu_utilization_query(instance_id: &str) -> MetricDataQuery {
    MetricDataQuery::builder()
        .id(QUERY_ID)
        .metric_stat(
            MetricStat::builder()
                .metric(
                    Metric::builder()
                        .namespace(NAMESPACE)
                        .metric_name(METRIC_NAME)
                        .dimensions(
                            Dimension::builder()
                                .name("InstanceId")
                                .value(instance_id)
                                .build(),
                        )
                        .build(),
                )
                .period(PERIOD_SECS)
                .stat("Average")
                .unit(StandardUnit::Percent)
                .build(),
        )
        .return_data(true)
        .build()
}
