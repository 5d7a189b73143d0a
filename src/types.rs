use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub struct TestRequest {
    /// Regular expression, delimiter wrapping included if the caller wants it.
    pub pattern: String,
    pub time_format: Option<String>,
    pub sample: String,
}

/// Outcome of a successful submit. Non-empty field_errors is still success;
/// the remote parser reports warnings alongside whatever it extracted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestOutcome {
    pub field_errors: Vec<String>,
    pub extracted_fields: IndexMap<String, String>,
    pub parsed_timestamp: Option<String>,
}
