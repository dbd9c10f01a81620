use std::env;

/// Reads a variable, treating unset and blank values alike.
pub fn optional_env(env_name: &str) -> Option<String> {
    env::var(env_name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// First non-blank value among `env_names`, in order.
pub fn first_env(env_names: &[&str]) -> Option<String> {
    env_names.iter().find_map(|name| optional_env(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_optional_env_present() {
        unsafe {
            std::env::set_var("SSM_ENV_OPT_VAR", "value");
        }
        assert_eq!(optional_env("SSM_ENV_OPT_VAR"), Some("value".to_string()));

        unsafe {
            std::env::remove_var("SSM_ENV_OPT_VAR");
        }
    }

    #[test]
    #[serial]
    fn test_optional_env_blank_is_none() {
        unsafe {
            std::env::set_var("SSM_ENV_BLANK_VAR", "  ");
        }
        assert_eq!(optional_env("SSM_ENV_BLANK_VAR"), None);

        unsafe {
            std::env::remove_var("SSM_ENV_BLANK_VAR");
        }
    }

    #[test]
    #[serial]
    fn test_first_env_prefers_earlier_names() {
        unsafe {
            std::env::remove_var("SSM_ENV_FIRST");
            std::env::set_var("SSM_ENV_SECOND", "second");
            std::env::set_var("SSM_ENV_THIRD", "third");
        }
        assert_eq!(
            first_env(&["SSM_ENV_FIRST", "SSM_ENV_SECOND", "SSM_ENV_THIRD"]),
            Some("second".to_string())
        );

        unsafe {
            std::env::remove_var("SSM_ENV_SECOND");
            std::env::remove_var("SSM_ENV_THIRD");
        }
    }

    #[test]
    #[serial]
    fn test_first_env_all_missing() {
        unsafe {
            std::env::remove_var("SSM_ENV_MISSING_A");
            std::env::remove_var("SSM_ENV_MISSING_B");
        }
        assert_eq!(first_env(&["SSM_ENV_MISSING_A", "SSM_ENV_MISSING_B"]), None);
    }
}
