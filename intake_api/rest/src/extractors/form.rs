use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    response::Response,
    Form,
};

use crate::errors::internal_server_error;

/// Text fields of a url-encoded or multipart form body, in submission
/// order.
///
/// Any body that cannot be decoded is rejected with the generic internal
/// server error response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// Returns the first value submitted for `name`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|content_type| content_type.to_str().ok())
            .is_some_and(|content_type| content_type.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(request, state)
                .await
                .map_err(internal_server_error)?;
            return Ok(Self(fields));
        }

        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(internal_server_error)?;

        let mut fields = Vec::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(internal_server_error)?
        {
            let Some(name) = field.name().map(ToOwned::to_owned) else {
                continue;
            };
            if field.file_name().is_some() {
                continue;
            }
            let value = field.text().await.map_err(internal_server_error)?;
            fields.push((name, value));
        }

        Ok(Self(fields))
    }
}
