use serde::{Deserialize, Serialize};

use super::utils::OneOrList;
use crate::error::DidDocumentBuilderError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    id: String,
    #[serde(rename = "type")]
    service_type: OneOrList<String>,
    service_endpoint: String,
}

impl Service {
    pub fn new(
        id: String,
        service_type: String,
        service_endpoint: String,
    ) -> Result<Self, DidDocumentBuilderError> {
        if service_type.is_empty() {
            return Err(DidDocumentBuilderError::InvalidInput(
                "Invalid service type: empty string".into(),
            ));
        }
        Ok(Self {
            id,
            service_type: OneOrList::One(service_type),
            service_endpoint,
        })
    }

    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    pub fn service_type(&self) -> &OneOrList<String> {
        &self.service_type
    }

    pub fn service_endpoint(&self) -> &str {
        self.service_endpoint.as_ref()
    }
}
