use domain::form::FormSchema;

/// Produces the form description for an endpoint name. Unknown names yield a
/// schema with only the common file field, never an error.
pub trait BuildFormUseCase: Send + Sync {
    fn build_form(&self, endpoint_name: &str) -> FormSchema;
}
