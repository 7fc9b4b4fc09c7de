//! Purpose: Runtime index of every operation with type-erased entry points.
//! Exports: `CATALOG`, `CatalogEntry`, `FieldInfo`, `find`.
//! Role: Lets the CLI (and other dynamic callers) marshal and decode by operation name.
//! Invariants: One entry per operation type; names are unique.
#![allow(clippy::result_large_err)]

use crate::api::{HttpRequest, Method, Operation, decode_output, marshall};
use crate::codec::{self, Record};
use crate::core::error::Error;
use crate::model::*;
use serde::Serialize;

/// Introspection row for one request field.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: &'static str,
    pub location: &'static str,
    pub shape: String,
}

pub struct CatalogEntry {
    pub name: &'static str,
    pub method: Method,
    pub uri: &'static str,
    pub input_type: &'static str,
    pub output_type: &'static str,
    input_fields: fn() -> Vec<FieldInfo>,
    marshal_json: fn(&[u8]) -> Result<HttpRequest, Error>,
    normalize_output: fn(&[u8]) -> Result<Vec<u8>, Error>,
}

impl CatalogEntry {
    pub fn input_fields(&self) -> Vec<FieldInfo> {
        (self.input_fields)()
    }

    /// Decodes a request document (wire names) and marshals it.
    ///
    /// A document that is not a JSON object decodes to no request at all and
    /// fails the same way a missing request does.
    pub fn marshal_json(&self, input: &[u8]) -> Result<HttpRequest, Error> {
        (self.marshal_json)(input)
    }

    /// Decodes a response body into the output record and re-encodes it.
    pub fn normalize_output(&self, body: &[u8]) -> Result<Vec<u8>, Error> {
        (self.normalize_output)(body)
    }
}

fn field_infos<R: Record>() -> Vec<FieldInfo> {
    R::fields()
        .iter()
        .map(|field| FieldInfo {
            name: field.name,
            location: field.location.as_str(),
            shape: (field.shape)().to_string(),
        })
        .collect()
}

fn marshal_json<O: Operation>(input: &[u8]) -> Result<HttpRequest, Error> {
    let request = codec::from_slice::<O::Input>(input).map_err(|err| err.with_operation(O::NAME))?;
    marshall::<O>(request.as_ref())
}

fn normalize_output<O: Operation>(body: &[u8]) -> Result<Vec<u8>, Error> {
    let output = decode_output::<O::Output>(body).map_err(|err| err.with_operation(O::NAME))?;
    codec::to_vec(&output)
}

const fn entry<O: Operation>() -> CatalogEntry {
    CatalogEntry {
        name: O::NAME,
        method: O::METHOD,
        uri: O::URI,
        input_type: <O::Input as Record>::TYPE_NAME,
        output_type: <O::Output as Record>::TYPE_NAME,
        input_fields: field_infos::<O::Input>,
        marshal_json: marshal_json::<O>,
        normalize_output: normalize_output::<O>,
    }
}

pub static CATALOG: &[CatalogEntry] = &[
    entry::<CreatePersistentContactAssociation>(),
    entry::<CreateUser>(),
    entry::<DeleteUser>(),
    entry::<DescribeUser>(),
    entry::<DescribeUserHierarchyGroup>(),
    entry::<DescribeUserHierarchyStructure>(),
    entry::<GetContactAttributes>(),
    entry::<GetCurrentMetricData>(),
    entry::<GetFederationToken>(),
    entry::<GetMetricData>(),
    entry::<GetMetricDataV2>(),
    entry::<ListContactFlows>(),
    entry::<ListHoursOfOperations>(),
    entry::<ListPhoneNumbers>(),
    entry::<ListQueues>(),
    entry::<ListRoutingProfiles>(),
    entry::<ListSecurityProfiles>(),
    entry::<ListTagsForResource>(),
    entry::<ListUserHierarchyGroups>(),
    entry::<ListUsers>(),
    entry::<StartOutboundVoiceContact>(),
    entry::<StopContact>(),
    entry::<TagResource>(),
    entry::<UntagResource>(),
    entry::<UpdateContactAttributes>(),
    entry::<UpdateUserHierarchy>(),
    entry::<UpdateUserIdentityInfo>(),
    entry::<UpdateUserPhoneConfig>(),
    entry::<UpdateUserRoutingProfile>(),
    entry::<UpdateUserSecurityProfiles>(),
];

/// Looks an operation up by name, falling back to a case-insensitive match.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.name == name)
        .or_else(|| CATALOG.iter().find(|entry| entry.name.eq_ignore_ascii_case(name)))
}

#[cfg(test)]
mod tests {
    use super::{CATALOG, find};
    use crate::core::error::ErrorKind;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_names_are_unique() {
        let names: BTreeSet<_> = CATALOG.iter().map(|entry| entry.name).collect();
        assert_eq!(names.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 30);
    }

    #[test]
    fn every_uri_placeholder_has_a_path_field() {
        for entry in CATALOG {
            let fields = entry.input_fields();
            let mut rest = entry.uri;
            while let Some(start) = rest.find('{') {
                let end = rest[start..].find('}').expect("closing brace") + start;
                let name = &rest[start + 1..end];
                assert!(
                    fields
                        .iter()
                        .any(|field| field.name == name && field.location == "path"),
                    "{} has no path field for {{{name}}}",
                    entry.name
                );
                rest = &rest[end + 1..];
            }
        }
    }

    #[test]
    fn find_is_case_insensitive_fallback() {
        assert_eq!(find("listqueues").map(|entry| entry.name), Some("ListQueues"));
        assert!(find("ListWidgets").is_none());
    }

    #[test]
    fn non_object_input_is_a_missing_request() {
        let entry = find("StopContact").expect("entry");
        let err = entry.marshal_json(b"null").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            err.message(),
            Some("Invalid argument passed to marshall(StopContactRequest)")
        );
    }
}
