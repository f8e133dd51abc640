//! AWS service adapters

pub mod cloudwatch;
pub mod context;
pub mod ec2;

pub use cloudwatch::{CloudWatchAdapter, CloudWatchOperations};
pub use context::AwsContext;
pub use ec2::{Ec2Adapter, Ec2Operations};
