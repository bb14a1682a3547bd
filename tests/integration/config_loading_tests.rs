//! Configuration loading integration tests
//!
//! Role tables read from YAML files drive the engine.

#[cfg(test)]
mod tests {
    use roster_guard::{Config, GuardError, Permission, RbacSystem, Role};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_example_config_parses() {
        let content = include_str!("../../config/roster-guard.yaml.example");
        let file = write_config(content);

        let config = Config::from_file(file.path()).await.unwrap();
        let rbac = config.build_rbac().unwrap();

        // The example mirrors the built-in table
        assert_eq!(rbac, RbacSystem::new());
    }

    #[tokio::test]
    async fn test_missing_sections_use_defaults() {
        let file = write_config("logging:\n  level: warn\n");

        let config = Config::from_file(file.path()).await.unwrap();
        assert!(config.rbac().uses_builtin_table());
        assert_eq!(config.build_rbac().unwrap(), RbacSystem::new());
    }

    #[tokio::test]
    async fn test_unknown_permission_keys_grant_nothing() {
        let file = write_config(
            r#"
rbac:
  roles:
    admin:
      level: 100
      name: Admin
      description: Full access
      permissions: { updateUserRoles: true, godMode: true }
    player:
      level: 50
      name: Player
      description: Own data
      permissions: { viewReports: true, viewEverything: true }
"#,
        );

        let rbac = Config::from_file(file.path())
            .await
            .unwrap()
            .build_rbac()
            .unwrap();

        assert_eq!(
            rbac.granted_permissions(Role::Player),
            vec![Permission::ViewReports]
        );
        assert!(!rbac.has_permission_key(Role::Player, "viewEverything"));
        assert!(!rbac.has_permission(Role::Admin, Permission::SystemConfiguration));
    }

    #[tokio::test]
    async fn test_second_top_level_role_rejected() {
        let file = write_config(
            r#"
rbac:
  roles:
    admin: { level: 100, name: Admin, description: x }
    manager: { level: 120, name: Manager, description: x }
"#,
        );

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(GuardError::Config(msg)) if msg.contains("manager")));
    }

    #[tokio::test]
    async fn test_malformed_yaml() {
        let file = write_config("rbac: [unclosed");
        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(GuardError::Config(_))));
    }
}
