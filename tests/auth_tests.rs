#[cfg(test)]
pub mod auth_tests {
    use briefshelf::common::AuthError;
    use briefshelf::services::auth::{MIN_PASSWORD_LEN, password_is_weak, validate_email};

    #[test]
    fn test_validate_email_success() {
        assert!(validate_email("reader@test.com"));
        assert!(validate_email("  reader@test.com  "));
    }

    #[test]
    fn test_validate_email_fails_on_missing_at() {
        assert!(!validate_email("reader.test.com"));
    }

    #[test]
    fn test_validate_email_fails_on_missing_domain_dot() {
        assert!(!validate_email("reader@localhost"));
    }

    #[test]
    fn test_validate_email_fails_on_empty_parts() {
        assert!(!validate_email(""));
        assert!(!validate_email("@test.com"));
        assert!(!validate_email("reader@"));
    }

    #[test]
    fn test_password_is_weak_below_minimum() {
        assert!(password_is_weak(""));
        assert!(password_is_weak("12345"));
        assert!(!password_is_weak(&"x".repeat(MIN_PASSWORD_LEN)));
    }

    #[test]
    fn test_auth_error_code_round_trip() {
        for error in [
            AuthError::InvalidCredentials,
            AuthError::EmailTaken,
            AuthError::WeakPassword,
            AuthError::InvalidEmail,
            AuthError::PopupCancelled,
            AuthError::PopupBlocked,
            AuthError::RateLimited,
            AuthError::Unknown,
        ] {
            assert_eq!(AuthError::from_code(error.code()), error);
        }
    }

    #[test]
    fn test_auth_error_unmapped_code_falls_back_to_unknown() {
        assert_eq!(AuthError::from_code("auth/strange-new-code"), AuthError::Unknown);
        assert_eq!(
            AuthError::from_code("auth/strange-new-code").message(),
            AuthError::Unknown.message()
        );
    }

    #[test]
    fn test_auth_error_messages_are_user_facing() {
        assert_eq!(
            AuthError::InvalidCredentials.message(),
            "Invalid email or password"
        );
        assert_eq!(
            AuthError::WeakPassword.message(),
            "Password must be at least 6 characters"
        );
    }
}
