//! Response bodies: the resource provider and the index template renderer.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::server::error::Error;

/// The logical resources the endpoints serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    IndexTemplate,
    TransactionsCsv,
    TransactionsJson,
    TransactionsXml,
}

impl Resource {
    /// Location of the resource relative to the web root.
    pub fn relative_path(&self) -> &'static str {
        match self {
            Resource::IndexTemplate => "template/index.html",
            Resource::TransactionsCsv => "shared/transactions.csv",
            Resource::TransactionsJson => "shared/transactions.json",
            Resource::TransactionsXml => "shared/transactions.xml",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::IndexTemplate => "index-template",
            Resource::TransactionsCsv => "transactions.csv",
            Resource::TransactionsJson => "transactions.json",
            Resource::TransactionsXml => "transactions.xml",
        };
        f.write_str(name)
    }
}

/// Type alias for a boxed future that yields the bytes of a resource.
pub type ResourceFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>, Error>> + Send + 'a>>;

/// A source of response bodies.
///
/// Implementations are shared by every connection and must not change what
/// they return in the middle of a request.
pub trait ResourceProvider: Send + Sync {
    /// Read the full contents of `resource`.
    fn read(&self, resource: Resource) -> ResourceFuture<'_>;
}

/// Serves resources straight from a directory, reading them on every request.
#[derive(Debug, Clone)]
pub struct FsResources {
    root: PathBuf,
}

impl FsResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceProvider for FsResources {
    fn read(&self, resource: Resource) -> ResourceFuture<'_> {
        let path = self.root.join(resource.relative_path());
        Box::pin(async move {
            tokio::fs::read(&path)
                .await
                .map_err(|source| Error::ResourceUnavailable { resource, source })
        })
    }
}

/// The fields of a serialized object, in the order they were written.
struct OrderedFields(Vec<(String, JsonValue)>);

impl<'de> Deserialize<'de> for OrderedFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = OrderedFields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<OrderedFields, A::Error> {
                let mut fields = Vec::new();
                while let Some(entry) = map.next_entry::<String, JsonValue>()? {
                    fields.push(entry);
                }
                Ok(OrderedFields(fields))
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

/// Replace every `{key}` in `template` with the matching field of `context`.
///
/// `context` must serialize to an object whose values are strings, numbers
/// or booleans. Fields are substituted one after another in declaration
/// order, so text inserted for an earlier field is expanded by later ones.
/// Strings are inserted without quotes; placeholders with no matching field
/// are left untouched.
pub fn render_template<T: Serialize>(template: &[u8], context: &T) -> Result<Vec<u8>, Error> {
    let json = serde_json::to_vec(context)?;
    let OrderedFields(fields) = serde_json::from_slice(&json).map_err(|_| Error::TemplateContext)?;

    let mut rendered = template.to_vec();
    for (key, value) in fields {
        let replacement = match value {
            JsonValue::String(s) => s,
            JsonValue::Number(n) => n.to_string(),
            JsonValue::Bool(b) => b.to_string(),
            _ => return Err(Error::TemplateContext),
        };
        let placeholder = format!("{{{key}}}");
        rendered = replace_all(&rendered, placeholder.as_bytes(), replacement.as_bytes());
    }

    Ok(rendered)
}

/// Replace every non-overlapping occurrence of `from`, scanning left to right.
fn replace_all(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    if from.is_empty() {
        return haystack.to_vec();
    }

    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = rest.windows(from.len()).position(|window| window == from) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(to);
        rest = &rest[pos + from.len()..];
    }
    out.extend_from_slice(rest);
    out
}
