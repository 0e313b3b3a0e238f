use um_core::{User, UserFields};
use um_db::UserRepository;

/// Canonical, validated fields for a test user
pub fn test_fields(first_name: &str, last_name: &str, email: &str) -> UserFields {
    UserFields::normalized(first_name, last_name, email)
        .validated()
        .expect("Test fixture fields must be valid")
}

/// Inserts a user through the repository and returns the stored row
pub async fn insert_test_user(repo: &UserRepository, first_name: &str, email: &str) -> User {
    repo.insert(&test_fields(first_name, "Tester", email))
        .await
        .expect("Failed to insert test user")
}
