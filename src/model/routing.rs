//! Purpose: Summary listings for routing resources.
//! Exports: Queue, contact flow, hours, phone number, routing and security profile summaries.
//! Role: Typed shapes for the List* summary operations.
//! Invariants: Pagination and filter fields travel as query parameters.

use crate::{operation, record};

record! {
    pub struct QueueSummary {
        "Id" => id: String,
        "Arn" => arn: String,
        "Name" => name: String,
        "QueueType" => queue_type: String,
    }
}

record! {
    pub struct ContactFlowSummary {
        "Id" => id: String,
        "Arn" => arn: String,
        "Name" => name: String,
        "ContactFlowType" => contact_flow_type: String,
    }
}

record! {
    pub struct HoursOfOperationSummary {
        "Id" => id: String,
        "Arn" => arn: String,
        "Name" => name: String,
    }
}

record! {
    pub struct PhoneNumberSummary {
        "Id" => id: String,
        "Arn" => arn: String,
        "PhoneNumber" => phone_number: String,
        "PhoneNumberType" => phone_number_type: String,
        "PhoneNumberCountryCode" => phone_number_country_code: String,
    }
}

record! {
    pub struct RoutingProfileSummary {
        "Id" => id: String,
        "Arn" => arn: String,
        "Name" => name: String,
    }
}

record! {
    pub struct SecurityProfileSummary {
        "Id" => id: String,
        "Arn" => arn: String,
        "Name" => name: String,
    }
}

record! {
    pub struct ListQueuesRequest {
        "InstanceId" in path => instance_id: String,
        /// STANDARD or AGENT; repeated in the query string.
        "queueTypes" in query => queue_types: Vec<String>,
        "nextToken" in query => next_token: String,
        "maxResults" in query => max_results: i32,
    }
}

record! {
    pub struct ListQueuesResult {
        "QueueSummaryList" => queue_summary_list: Vec<QueueSummary>,
        "NextToken" => next_token: String,
    }
}

record! {
    pub struct ListContactFlowsRequest {
        "InstanceId" in path => instance_id: String,
        "contactFlowTypes" in query => contact_flow_types: Vec<String>,
        "nextToken" in query => next_token: String,
        "maxResults" in query => max_results: i32,
    }
}

record! {
    pub struct ListContactFlowsResult {
        "ContactFlowSummaryList" => contact_flow_summary_list: Vec<ContactFlowSummary>,
        "NextToken" => next_token: String,
    }
}

record! {
    pub struct ListHoursOfOperationsRequest {
        "InstanceId" in path => instance_id: String,
        "nextToken" in query => next_token: String,
        "maxResults" in query => max_results: i32,
    }
}

record! {
    pub struct ListHoursOfOperationsResult {
        "HoursOfOperationSummaryList" => hours_of_operation_summary_list: Vec<HoursOfOperationSummary>,
        "NextToken" => next_token: String,
    }
}

record! {
    pub struct ListPhoneNumbersRequest {
        "InstanceId" in path => instance_id: String,
        "phoneNumberTypes" in query => phone_number_types: Vec<String>,
        "phoneNumberCountryCodes" in query => phone_number_country_codes: Vec<String>,
        "nextToken" in query => next_token: String,
        "maxResults" in query => max_results: i32,
    }
}

record! {
    pub struct ListPhoneNumbersResult {
        "PhoneNumberSummaryList" => phone_number_summary_list: Vec<PhoneNumberSummary>,
        "NextToken" => next_token: String,
    }
}

record! {
    pub struct ListRoutingProfilesRequest {
        "InstanceId" in path => instance_id: String,
        "nextToken" in query => next_token: String,
        "maxResults" in query => max_results: i32,
    }
}

record! {
    pub struct ListRoutingProfilesResult {
        "RoutingProfileSummaryList" => routing_profile_summary_list: Vec<RoutingProfileSummary>,
        "NextToken" => next_token: String,
    }
}

record! {
    pub struct ListSecurityProfilesRequest {
        "InstanceId" in path => instance_id: String,
        "nextToken" in query => next_token: String,
        "maxResults" in query => max_results: i32,
    }
}

record! {
    pub struct ListSecurityProfilesResult {
        "SecurityProfileSummaryList" => security_profile_summary_list: Vec<SecurityProfileSummary>,
        "NextToken" => next_token: String,
    }
}

operation! {
    pub ListQueues: Get "/queues-summary/{InstanceId}", ListQueuesRequest => ListQueuesResult
}

operation! {
    pub ListContactFlows: Get "/contact-flows-summary/{InstanceId}",
        ListContactFlowsRequest => ListContactFlowsResult
}

operation! {
    pub ListHoursOfOperations: Get "/hours-of-operations-summary/{InstanceId}",
        ListHoursOfOperationsRequest => ListHoursOfOperationsResult
}

operation! {
    pub ListPhoneNumbers: Get "/phone-numbers-summary/{InstanceId}",
        ListPhoneNumbersRequest => ListPhoneNumbersResult
}

operation! {
    pub ListRoutingProfiles: Get "/routing-profiles-summary/{InstanceId}",
        ListRoutingProfilesRequest => ListRoutingProfilesResult
}

operation! {
    pub ListSecurityProfiles: Get "/security-profiles-summary/{InstanceId}",
        ListSecurityProfilesRequest => ListSecurityProfilesResult
}
