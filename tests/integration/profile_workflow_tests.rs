//! Profile workflow integration tests
//!
//! Onboarding and role changes end to end over the in-memory store.

#[cfg(test)]
mod tests {
    use crate::common::{ProfileFactory, TestWorkspace, assert_denied};
    use roster_guard::{Module, Role};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_onboarding_then_promotion() {
        let ws = TestWorkspace::new();
        let admin = ws.seed(ProfileFactory::admin()).await;

        let newcomer = Uuid::new_v4();
        let created = ws
            .service
            .create_profile(newcomer, "flash@example.gg", Some("Flash"))
            .await
            .unwrap();
        assert_eq!(created.role(), Some(Role::Pending));
        assert_eq!(
            ws.service.modules_for(newcomer).await.unwrap(),
            vec![Module::Dashboard, Module::Profile]
        );

        let promoted = ws
            .service
            .update_user_role(admin, newcomer, "player")
            .await
            .unwrap();
        assert_eq!(promoted.role_level, Some(50));
        assert_eq!(ws.stored_role(newcomer).await, "player");
    }

    #[tokio::test]
    async fn test_create_profile_is_idempotent() {
        let ws = TestWorkspace::new();
        let id = Uuid::new_v4();

        let first = ws.service.create_profile(id, "a@example.gg", None).await.unwrap();
        let second = ws.service.create_profile(id, "a@example.gg", None).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(ws.store.len(), 1);
    }

    #[tokio::test]
    async fn test_manager_escalation_blocked() {
        let ws = TestWorkspace::new();
        let manager = ws.seed(ProfileFactory::manager()).await;
        let coach = ws.seed(ProfileFactory::coach()).await;

        assert_denied(
            ws.service.update_user_role(manager, coach, "admin").await,
            "Only admins can assign admin role",
        );
        assert_eq!(ws.stored_role(coach).await, "coach");
    }

    #[tokio::test]
    async fn test_manager_cannot_demote_admin() {
        let ws = TestWorkspace::new();
        let manager = ws.seed(ProfileFactory::manager()).await;
        let admin = ws.seed(ProfileFactory::admin()).await;

        assert_denied(
            ws.service.update_user_role(manager, admin, "pending").await,
            "You do not have permission to update this user's role",
        );
        assert_eq!(ws.stored_role(admin).await, "admin");
    }

    #[tokio::test]
    async fn test_player_cannot_change_roles() {
        let ws = TestWorkspace::new();
        let player = ws.seed(ProfileFactory::player()).await;
        let pending = ws.seed(ProfileFactory::pending()).await;

        assert_denied(
            ws.service.update_user_role(player, pending, "player").await,
            "You do not have permission to update user roles",
        );
    }

    #[tokio::test]
    async fn test_legacy_stored_role_is_unknown() {
        let ws = TestWorkspace::new();
        let manager = ws.seed(ProfileFactory::manager()).await;
        let legacy = ws.seed(ProfileFactory::with_role("owner")).await;

        // An unrecognised stored role ranks below everyone
        let updated = ws
            .service
            .update_user_role(manager, legacy, "player")
            .await
            .unwrap();
        assert_eq!(updated.role(), Some(Role::Player));

        // ...and holds no authority itself
        let other = ws.seed(ProfileFactory::with_role("owner")).await;
        assert_denied(
            ws.service.update_user_role(other, legacy, "pending").await,
            "You do not have permission to update user roles",
        );
    }

    #[tokio::test]
    async fn test_admin_can_self_demote() {
        let ws = TestWorkspace::new();
        let admin = ws.seed(ProfileFactory::admin()).await;

        let updated = ws
            .service
            .update_user_role(admin, admin, "manager")
            .await
            .unwrap();
        assert_eq!(updated.role(), Some(Role::Manager));
        assert_eq!(ws.rbac.level(&updated.role), 80);
    }
}
