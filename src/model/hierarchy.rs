//! Purpose: Agent hierarchy records and operations.
//! Exports: Hierarchy groups, levels, paths, structure, and their request/result records.
//! Role: Typed shapes for DescribeUserHierarchyGroup, DescribeUserHierarchyStructure, ListUserHierarchyGroups.

use crate::{operation, record};

record! {
    pub struct HierarchyGroupSummary {
        "Id" => id: String,
        "Arn" => arn: String,
        "Name" => name: String,
    }
}

record! {
    pub struct HierarchyLevel {
        "Id" => id: String,
        "Arn" => arn: String,
        "Name" => name: String,
    }
}

record! {
    /// Ancestors of a group, top level first.
    pub struct HierarchyPath {
        "LevelOne" => level_one: HierarchyGroupSummary,
        "LevelTwo" => level_two: HierarchyGroupSummary,
        "LevelThree" => level_three: HierarchyGroupSummary,
        "LevelFour" => level_four: HierarchyGroupSummary,
        "LevelFive" => level_five: HierarchyGroupSummary,
    }
}

record! {
    pub struct HierarchyGroup {
        "Id" => id: String,
        "Arn" => arn: String,
        "Name" => name: String,
        "LevelId" => level_id: String,
        "HierarchyPath" => hierarchy_path: HierarchyPath,
    }
}

record! {
    pub struct HierarchyStructure {
        "LevelOne" => level_one: HierarchyLevel,
        "LevelTwo" => level_two: HierarchyLevel,
        "LevelThree" => level_three: HierarchyLevel,
        "LevelFour" => level_four: HierarchyLevel,
        "LevelFive" => level_five: HierarchyLevel,
    }
}

record! {
    pub struct DescribeUserHierarchyGroupRequest {
        "HierarchyGroupId" in path => hierarchy_group_id: String,
        "InstanceId" in path => instance_id: String,
    }
}

record! {
    pub struct DescribeUserHierarchyGroupResult {
        "HierarchyGroup" => hierarchy_group: HierarchyGroup,
    }
}

record! {
    pub struct DescribeUserHierarchyStructureRequest {
        "InstanceId" in path => instance_id: String,
    }
}

record! {
    pub struct DescribeUserHierarchyStructureResult {
        "HierarchyStructure" => hierarchy_structure: HierarchyStructure,
    }
}

record! {
    pub struct ListUserHierarchyGroupsRequest {
        "InstanceId" in path => instance_id: String,
        "nextToken" in query => next_token: String,
        "maxResults" in query => max_results: i32,
    }
}

record! {
    pub struct ListUserHierarchyGroupsResult {
        "UserHierarchyGroupSummaryList" => user_hierarchy_group_summary_list: Vec<HierarchyGroupSummary>,
        "NextToken" => next_token: String,
    }
}

operation! {
    pub DescribeUserHierarchyGroup: Get "/user-hierarchy-groups/{InstanceId}/{HierarchyGroupId}",
        DescribeUserHierarchyGroupRequest => DescribeUserHierarchyGroupResult
}

operation! {
    pub DescribeUserHierarchyStructure: Get "/user-hierarchy-structure/{InstanceId}",
        DescribeUserHierarchyStructureRequest => DescribeUserHierarchyStructureResult
}

operation! {
    pub ListUserHierarchyGroups: Get "/user-hierarchy-groups-summary/{InstanceId}",
        ListUserHierarchyGroupsRequest => ListUserHierarchyGroupsResult
}
