use crate::errors::AppError;
use crate::state::AppState;

pub fn require_session(state: &AppState) -> Result<(), AppError> {
    if !state.session.is_signed_in() {
        return Err(AppError::Unauthorized("Sign in required".to_string()));
    }
    Ok(())
}
