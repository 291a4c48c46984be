use std::collections::BTreeMap;

use did_parser_nom::{Did, DidUrl};
use serde::{Deserialize, Serialize};

use super::{
    service::Service,
    utils::OneOrList,
    verification_method::{VerificationMethod, VerificationMethodKind},
};
use crate::error::DidDocumentBuilderError;

/// Top level members of a document which can never name a verification relationship.
const STRUCTURAL_FIELDS: [&str; 6] = [
    "@context",
    "id",
    "controller",
    "alsoKnownAs",
    "verificationMethod",
    "service",
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    #[serde(rename = "@context")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    context: Vec<String>,
    id: Did,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    verification_method: Vec<VerificationMethod>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    authentication: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    assertion_method: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    key_agreement: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    capability_invocation: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    capability_delegation: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<OneOrList<Service>>,
    /// Relationships outside of the DID Core vocabulary, keyed by their name.
    #[serde(flatten)]
    extra_relationships: BTreeMap<String, Vec<VerificationMethodKind>>,
}

impl DidDocument {
    pub fn builder(id: Did) -> DidDocumentBuilder {
        DidDocumentBuilder::new(id)
    }

    pub fn context(&self) -> &[String] {
        self.context.as_ref()
    }

    pub fn id(&self) -> &Did {
        &self.id
    }

    pub fn verification_method(&self) -> &[VerificationMethod] {
        self.verification_method.as_ref()
    }

    pub fn authentication(&self) -> &[VerificationMethodKind] {
        self.authentication.as_ref()
    }

    pub fn assertion_method(&self) -> &[VerificationMethodKind] {
        self.assertion_method.as_ref()
    }

    pub fn key_agreement(&self) -> &[VerificationMethodKind] {
        self.key_agreement.as_ref()
    }

    pub fn capability_invocation(&self) -> &[VerificationMethodKind] {
        self.capability_invocation.as_ref()
    }

    pub fn capability_delegation(&self) -> &[VerificationMethodKind] {
        self.capability_delegation.as_ref()
    }

    pub fn service(&self) -> Option<&OneOrList<Service>> {
        self.service.as_ref()
    }

    /// Looks a relationship up by its JSON name, DID Core ones included.
    pub fn relationship(&self, name: &str) -> Option<&[VerificationMethodKind]> {
        let methods = match name {
            "authentication" => &self.authentication,
            "assertionMethod" => &self.assertion_method,
            "keyAgreement" => &self.key_agreement,
            "capabilityInvocation" => &self.capability_invocation,
            "capabilityDelegation" => &self.capability_delegation,
            other => self.extra_relationships.get(other)?,
        };
        Some(methods.as_ref())
    }

    pub fn dereference_key(&self, reference: &DidUrl) -> Option<&VerificationMethod> {
        self.verification_method
            .iter()
            .find(|vm| vm.id() == reference)
    }
}

#[derive(Default, Debug)]
pub struct DidDocumentBuilder {
    context: Vec<String>,
    id: Did,
    verification_method: Vec<VerificationMethod>,
    authentication: Vec<VerificationMethodKind>,
    assertion_method: Vec<VerificationMethodKind>,
    key_agreement: Vec<VerificationMethodKind>,
    capability_invocation: Vec<VerificationMethodKind>,
    capability_delegation: Vec<VerificationMethodKind>,
    service: Vec<Service>,
    extra_relationships: BTreeMap<String, Vec<VerificationMethodKind>>,
}

impl DidDocumentBuilder {
    pub fn new(id: Did) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn add_context(mut self, context: String) -> Self {
        self.context.push(context);
        self
    }

    pub fn add_verification_method(mut self, verification_method: VerificationMethod) -> Self {
        self.verification_method.push(verification_method);
        self
    }

    pub fn add_assertion_method(mut self, method: VerificationMethod) -> Self {
        self.assertion_method
            .push(VerificationMethodKind::Resolved(method));
        self
    }

    pub fn add_assertion_method_reference(mut self, reference: DidUrl) -> Self {
        self.assertion_method
            .push(VerificationMethodKind::Resolvable(reference));
        self
    }

    pub fn add_capability_invocation(mut self, capability_invocation: VerificationMethod) -> Self {
        self.capability_invocation
            .push(VerificationMethodKind::Resolved(capability_invocation));
        self
    }

    pub fn add_capability_invocation_reference(mut self, reference: DidUrl) -> Self {
        self.capability_invocation
            .push(VerificationMethodKind::Resolvable(reference));
        self
    }

    pub fn add_service(mut self, service: Service) -> Self {
        self.service.push(service);
        self
    }

    /// Replaces the relationship called `name` with `methods`.
    ///
    /// DID Core relationships (`assertionMethod`, `capabilityInvocation`, ...) are
    /// overwritten, whatever was added to them before. Any other name becomes an
    /// additional top level relationship, unless it names a structural member of the
    /// document, which is an error.
    pub fn set_relationship(
        mut self,
        name: &str,
        methods: Vec<VerificationMethodKind>,
    ) -> Result<Self, DidDocumentBuilderError> {
        match name {
            "authentication" => self.authentication = methods,
            "assertionMethod" => self.assertion_method = methods,
            "keyAgreement" => self.key_agreement = methods,
            "capabilityInvocation" => self.capability_invocation = methods,
            "capabilityDelegation" => self.capability_delegation = methods,
            reserved if STRUCTURAL_FIELDS.contains(&reserved) => {
                return Err(DidDocumentBuilderError::ReservedField(reserved.to_string()));
            }
            "" => {
                return Err(DidDocumentBuilderError::InvalidInput(
                    "Empty verification relationship name".into(),
                ));
            }
            other => {
                log::trace!("DidDocumentBuilder::set_relationship >> extra relationship {other}");
                self.extra_relationships.insert(other.to_string(), methods);
            }
        }
        Ok(self)
    }

    pub fn build(self) -> DidDocument {
        let service = match self.service.is_empty() {
            true => None,
            false => Some(OneOrList::from(self.service)),
        };
        DidDocument {
            context: self.context,
            id: self.id,
            verification_method: self.verification_method,
            authentication: self.authentication,
            assertion_method: self.assertion_method,
            key_agreement: self.key_agreement,
            capability_invocation: self.capability_invocation,
            capability_delegation: self.capability_delegation,
            service,
            extra_relationships: self.extra_relationships,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::verification_method::{PublicKeyField, VerificationMethodType};

    fn did() -> Did {
        "did:r3c:abc".parse().unwrap()
    }

    fn method(fragment: &str) -> VerificationMethod {
        VerificationMethod::builder()
            .id(did().with_fragment(fragment).unwrap())
            .verification_method_type(VerificationMethodType::Ed25519VerificationKey2020)
            .controller(did().with_fragment("output-0").unwrap())
            .properties(PublicKeyField::Base58 {
                public_key_base58: "key".into(),
            })
            .build()
    }

    #[test]
    fn test_set_relationship_overrides_core_relationship() {
        let doc = DidDocument::builder(did())
            .add_assertion_method(method("input-0"))
            .set_relationship(
                "assertionMethod",
                vec![VerificationMethodKind::Resolved(method("meta-0"))],
            )
            .unwrap()
            .build();

        assert_eq!(doc.assertion_method().len(), 1);
        assert_eq!(
            doc.assertion_method()[0].id().fragment(),
            Some("meta-0")
        );
    }

    #[test]
    fn test_set_relationship_adds_extra_relationship() {
        let doc = DidDocument::builder(did())
            .set_relationship(
                "customPurpose",
                vec![VerificationMethodKind::Resolved(method("meta-0"))],
            )
            .unwrap()
            .build();

        assert_eq!(doc.relationship("customPurpose").map(<[_]>::len), Some(1));
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["customPurpose"].is_array());
    }

    #[test]
    fn test_set_relationship_rejects_structural_fields() {
        for name in STRUCTURAL_FIELDS {
            let res = DidDocument::builder(did()).set_relationship(name, vec![]);
            assert!(matches!(
                res,
                Err(DidDocumentBuilderError::ReservedField(ref field)) if field == name
            ));
        }
    }

    #[test]
    fn test_dereference_key() {
        let doc = DidDocument::builder(did())
            .add_verification_method(method("input-0"))
            .add_verification_method(method("output-0"))
            .build();

        let reference = did().with_fragment("output-0").unwrap();
        assert_eq!(doc.dereference_key(&reference), Some(&method("output-0")));
        let missing = did().with_fragment("meta-0").unwrap();
        assert_eq!(doc.dereference_key(&missing), None);
    }

    #[test]
    fn test_single_service_serializes_as_object() {
        let service = Service::new(
            "https://riddleandcode.com".into(),
            "LinkedDomains".into(),
            "https://main.r3c.network".into(),
        )
        .unwrap();
        let doc = DidDocument::builder(did()).add_service(service).build();

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["service"]["type"], "LinkedDomains");
    }
}
