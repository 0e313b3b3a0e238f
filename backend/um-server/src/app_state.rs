use um_db::UserRepository;

/// Shared handler state, built once at startup and cloned per request
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
}

impl AppState {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }
}
