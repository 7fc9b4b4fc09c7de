//! Purpose: Contact lifecycle and contact attribute operations.
//! Exports: Outbound voice, stop, attribute, federation, and persistent-association records.
//! Role: Typed shapes for the contact-scoped operations.

use super::EmptyResult;
use crate::{operation, record};
use std::collections::BTreeMap;
use time::OffsetDateTime;

record! {
    pub struct StartOutboundVoiceContactRequest {
        "DestinationPhoneNumber" => destination_phone_number: String,
        "ContactFlowId" => contact_flow_id: String,
        "InstanceId" => instance_id: String,
        "ClientToken" => client_token: String,
        "SourcePhoneNumber" => source_phone_number: String,
        "QueueId" => queue_id: String,
        "Attributes" => attributes: BTreeMap<String, String>,
    }
}

record! {
    pub struct StartOutboundVoiceContactResult {
        "ContactId" => contact_id: String,
    }
}

record! {
    pub struct StopContactRequest {
        "ContactId" => contact_id: String,
        "InstanceId" => instance_id: String,
    }
}

record! {
    pub struct GetContactAttributesRequest {
        "InstanceId" in path => instance_id: String,
        "InitialContactId" in path => initial_contact_id: String,
    }
}

record! {
    pub struct GetContactAttributesResult {
        "Attributes" => attributes: BTreeMap<String, String>,
    }
}

record! {
    /// Attributes are merged into the contact; existing keys are overwritten.
    pub struct UpdateContactAttributesRequest {
        "InitialContactId" => initial_contact_id: String,
        "InstanceId" => instance_id: String,
        "Attributes" => attributes: BTreeMap<String, String>,
    }
}

record! {
    pub struct Credentials {
        "AccessToken" => access_token: String,
        "AccessTokenExpiration" => access_token_expiration: OffsetDateTime,
        "RefreshToken" => refresh_token: String,
        "RefreshTokenExpiration" => refresh_token_expiration: OffsetDateTime,
    }
}

record! {
    pub struct GetFederationTokenRequest {
        "InstanceId" in path => instance_id: String,
    }
}

record! {
    pub struct GetFederationTokenResult {
        "Credentials" => credentials: Credentials,
        "SignInUrl" => sign_in_url: String,
        "UserArn" => user_arn: String,
        "UserId" => user_id: String,
    }
}

record! {
    /// Starts a persistent chat session from a past contact.
    pub struct CreatePersistentContactAssociationRequest {
        "InstanceId" in path => instance_id: String,
        "InitialContactId" in path => initial_contact_id: String,
        /// ENTIRE_PAST_SESSION or FROM_SEGMENT.
        "RehydrationType" => rehydration_type: String,
        "SourceContactId" => source_contact_id: String,
        "ClientToken" => client_token: String,
    }
}

record! {
    pub struct CreatePersistentContactAssociationResult {
        "ContinuedFromContactId" => continued_from_contact_id: String,
    }
}

operation! {
    pub StartOutboundVoiceContact: Put "/contact/outbound-voice",
        StartOutboundVoiceContactRequest => StartOutboundVoiceContactResult
}

operation! {
    pub StopContact: Post "/contact/stop", StopContactRequest => EmptyResult
}

operation! {
    pub GetContactAttributes: Get "/contact/attributes/{InstanceId}/{InitialContactId}",
        GetContactAttributesRequest => GetContactAttributesResult
}

operation! {
    pub UpdateContactAttributes: Post "/contact/attributes",
        UpdateContactAttributesRequest => EmptyResult
}

operation! {
    pub GetFederationToken: Get "/user/federate/{InstanceId}",
        GetFederationTokenRequest => GetFederationTokenResult
}

operation! {
    pub CreatePersistentContactAssociation:
        Post "/contact/persistent-contact-association/{InstanceId}/{InitialContactId}",
        CreatePersistentContactAssociationRequest => CreatePersistentContactAssociationResult
}
