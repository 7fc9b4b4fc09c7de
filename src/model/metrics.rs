//! Purpose: Real-time and historical metric queries.
//! Exports: Filter, threshold, metric, dimension, and result records for both metric APIs.
//! Role: Typed shapes for GetCurrentMetricData, GetMetricData, and GetMetricDataV2.
//! Invariants: Interval bounds are timestamps (epoch seconds on the wire).

use crate::{operation, record};
use std::collections::BTreeMap;
use time::OffsetDateTime;

record! {
    /// Resources a metric query is restricted to.
    pub struct Filters {
        "Queues" => queues: Vec<String>,
        "Channels" => channels: Vec<String>,
        "RoutingProfiles" => routing_profiles: Vec<String>,
    }
}

record! {
    pub struct Threshold {
        "Comparison" => comparison: String,
        "ThresholdValue" => threshold_value: f64,
    }
}

record! {
    pub struct HistoricalMetric {
        "Name" => name: String,
        "Threshold" => threshold: Threshold,
        "Statistic" => statistic: String,
        "Unit" => unit: String,
    }
}

record! {
    pub struct CurrentMetric {
        "Name" => name: String,
        "Unit" => unit: String,
    }
}

record! {
    pub struct QueueReference {
        "Id" => id: String,
        "Arn" => arn: String,
    }
}

record! {
    /// Grouping keys of a metric result row.
    pub struct Dimensions {
        "Queue" => queue: QueueReference,
        "Channel" => channel: String,
    }
}

record! {
    pub struct HistoricalMetricData {
        "Metric" => metric: HistoricalMetric,
        "Value" => value: f64,
    }
}

record! {
    pub struct HistoricalMetricResult {
        "Dimensions" => dimensions: Dimensions,
        "Collections" => collections: Vec<HistoricalMetricData>,
    }
}

record! {
    pub struct CurrentMetricData {
        "Metric" => metric: CurrentMetric,
        "Value" => value: f64,
    }
}

record! {
    pub struct CurrentMetricResult {
        "Dimensions" => dimensions: Dimensions,
        "Collections" => collections: Vec<CurrentMetricData>,
    }
}

record! {
    pub struct GetCurrentMetricDataRequest {
        "InstanceId" in path => instance_id: String,
        "Filters" => filters: Filters,
        "Groupings" => groupings: Vec<String>,
        "CurrentMetrics" => current_metrics: Vec<CurrentMetric>,
        "NextToken" => next_token: String,
        "MaxResults" => max_results: i32,
    }
}

record! {
    pub struct GetCurrentMetricDataResult {
        "NextToken" => next_token: String,
        "MetricResults" => metric_results: Vec<CurrentMetricResult>,
        "DataSnapshotTime" => data_snapshot_time: OffsetDateTime,
    }
}

record! {
    pub struct GetMetricDataRequest {
        "InstanceId" in path => instance_id: String,
        "StartTime" => start_time: OffsetDateTime,
        "EndTime" => end_time: OffsetDateTime,
        "Filters" => filters: Filters,
        "Groupings" => groupings: Vec<String>,
        "HistoricalMetrics" => historical_metrics: Vec<HistoricalMetric>,
        "NextToken" => next_token: String,
        "MaxResults" => max_results: i32,
    }
}

record! {
    pub struct GetMetricDataResult {
        "NextToken" => next_token: String,
        "MetricResults" => metric_results: Vec<HistoricalMetricResult>,
    }
}

record! {
    pub struct FilterV2 {
        "FilterKey" => filter_key: String,
        "FilterValues" => filter_values: Vec<String>,
    }
}

record! {
    pub struct ThresholdV2 {
        "Comparison" => comparison: String,
        "ThresholdValue" => threshold_value: f64,
    }
}

record! {
    pub struct MetricFilterV2 {
        "MetricFilterKey" => metric_filter_key: String,
        "MetricFilterValues" => metric_filter_values: Vec<String>,
        "Negate" => negate: bool,
    }
}

record! {
    pub struct MetricV2 {
        "Name" => name: String,
        "Threshold" => threshold: Vec<ThresholdV2>,
        "MetricFilters" => metric_filters: Vec<MetricFilterV2>,
    }
}

record! {
    pub struct MetricDataV2 {
        "Metric" => metric: MetricV2,
        "Value" => value: f64,
    }
}

record! {
    pub struct MetricInterval {
        "Interval" => interval: String,
        "StartTime" => start_time: OffsetDateTime,
        "EndTime" => end_time: OffsetDateTime,
    }
}

record! {
    pub struct MetricResultV2 {
        "Dimensions" => dimensions: BTreeMap<String, String>,
        "MetricInterval" => metric_interval: MetricInterval,
        "Collections" => collections: Vec<MetricDataV2>,
    }
}

record! {
    /// Historical metrics addressed by resource ARN instead of instance id.
    pub struct GetMetricDataV2Request {
        "ResourceArn" => resource_arn: String,
        "StartTime" => start_time: OffsetDateTime,
        "EndTime" => end_time: OffsetDateTime,
        "Filters" => filters: Vec<FilterV2>,
        "Groupings" => groupings: Vec<String>,
        "Metrics" => metrics: Vec<MetricV2>,
        "NextToken" => next_token: String,
        "MaxResults" => max_results: i32,
    }
}

record! {
    pub struct GetMetricDataV2Result {
        "NextToken" => next_token: String,
        "MetricResults" => metric_results: Vec<MetricResultV2>,
    }
}

operation! {
    pub GetCurrentMetricData: Post "/metrics/current/{InstanceId}",
        GetCurrentMetricDataRequest => GetCurrentMetricDataResult
}

operation! {
    pub GetMetricData: Post "/metrics/historical/{InstanceId}",
        GetMetricDataRequest => GetMetricDataResult
}

operation! {
    pub GetMetricDataV2: Post "/metrics/data", GetMetricDataV2Request => GetMetricDataV2Result
}
