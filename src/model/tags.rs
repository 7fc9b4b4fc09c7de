//! Purpose: Resource tagging operations.
//! Exports: ListTagsForResource, TagResource, UntagResource and their records.
//! Invariants: These operations use lowercase wire names (`resourceArn`, `tags`, `tagKeys`).

use super::EmptyResult;
use crate::{operation, record};
use std::collections::BTreeMap;

record! {
    pub struct ListTagsForResourceRequest {
        "resourceArn" in path => resource_arn: String,
    }
}

record! {
    pub struct ListTagsForResourceResult {
        "tags" => tags: BTreeMap<String, String>,
    }
}

record! {
    pub struct TagResourceRequest {
        "resourceArn" in path => resource_arn: String,
        "tags" => tags: BTreeMap<String, String>,
    }
}

record! {
    pub struct UntagResourceRequest {
        "resourceArn" in path => resource_arn: String,
        "tagKeys" in query => tag_keys: Vec<String>,
    }
}

operation! {
    pub ListTagsForResource: Get "/tags/{resourceArn}",
        ListTagsForResourceRequest => ListTagsForResourceResult
}

operation! {
    pub TagResource: Post "/tags/{resourceArn}", TagResourceRequest => EmptyResult
}

operation! {
    pub UntagResource: Delete "/tags/{resourceArn}", UntagResourceRequest => EmptyResult
}
