//! terrahealth - AWS resource health checks from the command line
//!
//! This crate provides a small CLI that lists EC2 instances and fetches
//! CloudWatch CPU-utilization metrics for a single instance.

pub mod app;
pub mod aws;
pub mod error;
