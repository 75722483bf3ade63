use tracing::debug;

use crate::ports::incoming::forms::BuildFormUseCase;
use domain::form::FormSchema;

/// Form-building use case: a thin lookup over the compiled-in field tables.
pub struct FormService;

impl FormService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn build_form(&self, endpoint_name: &str) -> FormSchema {
        let schema = FormSchema::for_endpoint(endpoint_name);
        debug!(
            "Built form for {}: {} fields, method {}",
            endpoint_name,
            schema.fields.len(),
            schema.method
        );
        schema
    }
}

impl Default for FormService {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildFormUseCase for FormService {
    fn build_form(&self, endpoint_name: &str) -> FormSchema {
        self.build_form(endpoint_name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use domain::endpoint::HttpMethod;

    #[test]
    fn builds_schemas_through_the_use_case_trait() {
        let service: &dyn BuildFormUseCase = &FormService::new();
        let schema = service.build_form("rotate");
        assert_eq!(schema.endpoint, "rotate");
        assert_eq!(schema.method, HttpMethod::Post);
        assert_eq!(schema.fields.len(), 2);
    }
}
