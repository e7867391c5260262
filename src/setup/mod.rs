//! First-run welcome flow
//!
//! Decides whether a user should land on the welcome screen and records
//! completion in the settings flag store. Persisting the settings is left to
//! the caller.

use crate::config::Settings;
use crate::models::UserRecord;

/// Check if the welcome flow should be shown
///
/// Returns false once welcome has been completed, or when a cached user
/// record identifies a returning user.
pub fn should_show_welcome(settings: &Settings) -> bool {
    if settings.welcome_completed {
        return false;
    }

    !settings
        .cached_user
        .as_ref()
        .is_some_and(UserRecord::is_recognizable)
}

/// Mark welcome as completed and cache the user record
pub fn complete_welcome(settings: &mut Settings, user: UserRecord) {
    settings.welcome_completed = true;
    settings.cached_user = Some(user);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TripLedgerPaths;
    use tempfile::TempDir;

    #[test]
    fn test_first_run_shows_welcome() {
        assert!(should_show_welcome(&Settings::default()));
    }

    #[test]
    fn test_completed_flag_skips_welcome() {
        let settings = Settings {
            welcome_completed: true,
            ..Settings::default()
        };
        assert!(!should_show_welcome(&settings));
    }

    #[test]
    fn test_cached_user_skips_welcome() {
        let settings = Settings {
            cached_user: Some(UserRecord {
                email: "asha@example.com".into(),
                ..UserRecord::default()
            }),
            ..Settings::default()
        };
        assert!(!should_show_welcome(&settings));
    }

    #[test]
    fn test_blank_cached_user_still_shows_welcome() {
        let settings = Settings {
            cached_user: Some(UserRecord {
                name: "   ".into(),
                ..UserRecord::default()
            }),
            ..Settings::default()
        };
        assert!(should_show_welcome(&settings));
    }

    #[test]
    fn test_complete_welcome_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripLedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        complete_welcome(&mut settings, UserRecord::logged_in("Asha", "asha@example.com"));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!should_show_welcome(&loaded));
        assert_eq!(loaded.cached_user.unwrap().email, "asha@example.com");
    }
}
