//! Integration tests for the AWS adapters
//!
//! These tests require AWS credentials and a configured region. Run with:
//! AWS_PROFILE=<profile> AWS_REGION=<region> cargo test -- --ignored

use anyhow::Result;
use terrahealth::aws::{
    cloudwatch, ec2, AwsContext, CloudWatchAdapter, CloudWatchOperations, Ec2Adapter,
    Ec2Operations,
};

#[tokio::test]
#[ignore = "requires AWS credentials"]
async fn context_loads_from_ambient_chain() -> Result<()> {
    let ctx = AwsContext::load().await?;
    assert!(!ctx.region().is_empty());
    Ok(())
}

#[tokio::test]
#[ignore = "requires AWS credentials"]
async fn describe_instances_returns_well_formed_ids() -> Result<()> {
    let ctx = AwsContext::load().await?;
    let ids = ec2::describe_instance_ids(&ctx.ec2_client()).await?;

    // The account may be empty; every id that does come back is an i-xxx.
    for id in &ids {
        assert!(id.starts_with("i-"), "unexpected instance id: {id}");
    }
    Ok(())
}

#[tokio::test]
#[ignore = "requires AWS credentials"]
async fn cpu_utilization_query_round_trips() -> Result<()> {
    let ctx = AwsContext::load().await?;
    let output =
        cloudwatch::get_cpu_utilization(&ctx.cloudwatch_client(), "i-1234567890abcdef0").await?;

    // CloudWatch answers the query even for a nonexistent instance; the
    // result set echoes our query id back.
    let results = output.metric_data_results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), Some("cpuUtilization"));
    Ok(())
}

#[tokio::test]
#[ignore = "requires AWS credentials"]
async fn live_adapters_answer_through_the_capability_traits() -> Result<()> {
    let ids = Ec2Adapter::new().list_instance_ids().await?;
    for id in &ids {
        assert!(id.starts_with("i-"));
    }

    let output = CloudWatchAdapter::new()
        .fetch_cpu_utilization("i-1234567890abcdef0")
        .await?;
    assert_eq!(output.metric_data_results().len(), 1);
    Ok(())
}
