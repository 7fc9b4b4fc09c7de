//! Purpose: Static description of a service operation.
//! Exports: `Method`, `Operation`, and the `operation!` macro.
//! Role: Binds an operation name, HTTP method, and URI template to its request/response records.
//! Invariants: Method and URI template are fixed per operation.

use crate::codec::Record;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

pub trait Operation {
    const NAME: &'static str;
    const METHOD: Method;
    /// Resource path with `{Name}` placeholders for path fields.
    const URI: &'static str;

    type Input: Record;
    type Output: Record;
}

/// Declares a unit type implementing [`Operation`](crate::api::Operation).
///
/// `operation! { pub ListQueues: Get "/queues-summary/{InstanceId}", ListQueuesRequest => ListQueuesResult }`
#[macro_export]
macro_rules! operation {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident: $method:ident $uri:literal, $input:ty => $output:ty
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        $vis struct $name;

        impl $crate::api::Operation for $name {
            const NAME: &'static str = stringify!($name);
            const METHOD: $crate::api::Method = $crate::api::Method::$method;
            const URI: &'static str = $uri;

            type Input = $input;
            type Output = $output;
        }
    };
}
