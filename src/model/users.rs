//! Purpose: User records and the user-management operations.
//! Exports: `User`, `UserSummary`, `UserPhoneConfig`, `UserIdentityInfo`, request/result records.
//! Role: Typed shapes for CreateUser, DeleteUser, DescribeUser, ListUsers, and UpdateUser*.

use super::EmptyResult;
use crate::{operation, record};
use std::collections::BTreeMap;

record! {
    /// Phone settings for a user.
    pub struct UserPhoneConfig {
        "PhoneType" => phone_type: String,
        "AutoAccept" => auto_accept: bool,
        "AfterContactWorkTimeLimit" => after_contact_work_time_limit: i32,
        "DeskPhoneNumber" => desk_phone_number: String,
    }
}

record! {
    pub struct UserIdentityInfo {
        "FirstName" => first_name: String,
        "LastName" => last_name: String,
        "Email" => email: String,
    }
}

record! {
    pub struct User {
        "Id" => id: String,
        "Arn" => arn: String,
        "Username" => username: String,
        "IdentityInfo" => identity_info: UserIdentityInfo,
        "PhoneConfig" => phone_config: UserPhoneConfig,
        "DirectoryUserId" => directory_user_id: String,
        "SecurityProfileIds" => security_profile_ids: Vec<String>,
        "RoutingProfileId" => routing_profile_id: String,
        "HierarchyGroupId" => hierarchy_group_id: String,
        "Tags" => tags: BTreeMap<String, String>,
    }
}

record! {
    pub struct UserSummary {
        "Id" => id: String,
        "Arn" => arn: String,
        "Username" => username: String,
    }
}

record! {
    pub struct CreateUserRequest {
        "Username" => username: String,
        "Password" => password: String,
        "IdentityInfo" => identity_info: UserIdentityInfo,
        "PhoneConfig" => phone_config: UserPhoneConfig,
        "DirectoryUserId" => directory_user_id: String,
        "SecurityProfileIds" => security_profile_ids: Vec<String>,
        "RoutingProfileId" => routing_profile_id: String,
        "HierarchyGroupId" => hierarchy_group_id: String,
        "InstanceId" in path => instance_id: String,
        "Tags" => tags: BTreeMap<String, String>,
    }
}

record! {
    pub struct CreateUserResult {
        "UserId" => user_id: String,
        "UserArn" => user_arn: String,
    }
}

record! {
    pub struct DeleteUserRequest {
        "InstanceId" in path => instance_id: String,
        "UserId" in path => user_id: String,
    }
}

record! {
    pub struct DescribeUserRequest {
        "UserId" in path => user_id: String,
        "InstanceId" in path => instance_id: String,
    }
}

record! {
    pub struct DescribeUserResult {
        "User" => user: User,
    }
}

record! {
    pub struct ListUsersRequest {
        "InstanceId" in path => instance_id: String,
        "nextToken" in query => next_token: String,
        "maxResults" in query => max_results: i32,
    }
}

record! {
    pub struct ListUsersResult {
        "UserSummaryList" => user_summary_list: Vec<UserSummary>,
        "NextToken" => next_token: String,
    }
}

record! {
    pub struct UpdateUserHierarchyRequest {
        "HierarchyGroupId" => hierarchy_group_id: String,
        "UserId" in path => user_id: String,
        "InstanceId" in path => instance_id: String,
    }
}

record! {
    pub struct UpdateUserIdentityInfoRequest {
        "IdentityInfo" => identity_info: UserIdentityInfo,
        "UserId" in path => user_id: String,
        "InstanceId" in path => instance_id: String,
    }
}

record! {
    pub struct UpdateUserPhoneConfigRequest {
        "PhoneConfig" => phone_config: UserPhoneConfig,
        "UserId" in path => user_id: String,
        "InstanceId" in path => instance_id: String,
    }
}

record! {
    pub struct UpdateUserRoutingProfileRequest {
        "RoutingProfileId" => routing_profile_id: String,
        "UserId" in path => user_id: String,
        "InstanceId" in path => instance_id: String,
    }
}

record! {
    pub struct UpdateUserSecurityProfilesRequest {
        "SecurityProfileIds" => security_profile_ids: Vec<String>,
        "UserId" in path => user_id: String,
        "InstanceId" in path => instance_id: String,
    }
}

operation! {
    pub CreateUser: Put "/users/{InstanceId}", CreateUserRequest => CreateUserResult
}

operation! {
    pub DeleteUser: Delete "/users/{InstanceId}/{UserId}", DeleteUserRequest => EmptyResult
}

operation! {
    pub DescribeUser: Get "/users/{InstanceId}/{UserId}", DescribeUserRequest => DescribeUserResult
}

operation! {
    pub ListUsers: Get "/users-summary/{InstanceId}", ListUsersRequest => ListUsersResult
}

operation! {
    pub UpdateUserHierarchy: Post "/users/{InstanceId}/{UserId}/hierarchy",
        UpdateUserHierarchyRequest => EmptyResult
}

operation! {
    pub UpdateUserIdentityInfo: Post "/users/{InstanceId}/{UserId}/identity-info",
        UpdateUserIdentityInfoRequest => EmptyResult
}

operation! {
    pub UpdateUserPhoneConfig: Post "/users/{InstanceId}/{UserId}/phone-config",
        UpdateUserPhoneConfigRequest => EmptyResult
}

operation! {
    pub UpdateUserRoutingProfile: Post "/users/{InstanceId}/{UserId}/routing-profile",
        UpdateUserRoutingProfileRequest => EmptyResult
}

operation! {
    pub UpdateUserSecurityProfiles: Post "/users/{InstanceId}/{UserId}/security-profiles",
        UpdateUserSecurityProfilesRequest => EmptyResult
}
