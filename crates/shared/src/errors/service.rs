use crate::errors::repository::RepositoryError;
use bcrypt::BcryptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Envelope status code for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::Validation(_) => 400,
            ServiceError::Repo(_) | ServiceError::Bcrypt(_) | ServiceError::Internal(_) => 500,
        }
    }

    pub fn is_unexpected(&self) -> bool {
        self.status_code() == 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(ServiceError::NotFound("x".into()).status_code(), 404);
        assert_eq!(ServiceError::Validation("x".into()).status_code(), 400);
        assert_eq!(
            ServiceError::Repo(RepositoryError::ForeignKey("fk".into())).status_code(),
            500
        );
        assert_eq!(ServiceError::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn datastore_constraint_failures_are_unexpected() {
        let err = ServiceError::from(RepositoryError::AlreadyExists("name".into()));
        assert!(err.is_unexpected());
    }
}
