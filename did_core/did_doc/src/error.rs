#[derive(Debug)]
pub enum DidDocumentBuilderError {
    InvalidInput(String),
    ReservedField(String),
}

impl std::fmt::Display for DidDocumentBuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DidDocumentBuilderError::InvalidInput(input) => {
                write!(f, "Invalid input: {}", input)
            }
            DidDocumentBuilderError::ReservedField(field) => {
                write!(f, "Field {} cannot be used as a verification relationship", field)
            }
        }
    }
}

impl std::error::Error for DidDocumentBuilderError {}
