//! RBAC engine property tests
//!
//! Properties of the built-in role table checked exhaustively over every
//! role and permission key through the public API.

#[cfg(test)]
mod tests {
    use crate::common::AssignmentAssertions;
    use roster_guard::{Module, Permission, RbacSystem, Role};
    use std::sync::Arc;

    const UNKNOWN_ROLES: [&str; 5] = ["", "root", "ADMIN", "admin ", "bogus_role"];

    // ==================== Permission Properties ====================

    #[test]
    fn test_unknown_roles_hold_nothing() {
        let rbac = RbacSystem::new();
        for name in UNKNOWN_ROLES {
            for permission in Permission::ALL {
                assert!(!rbac.has_permission(name, permission), "{:?} {}", name, permission);
            }
            assert!(rbac.available_modules(name).is_empty());
            assert!(rbac.assignable_roles(name).is_empty());
            assert_eq!(rbac.level(name), 0);
        }
    }

    #[test]
    fn test_string_and_typed_roles_agree() {
        let rbac = RbacSystem::new();
        for role in Role::ALL {
            for permission in Permission::ALL {
                assert_eq!(
                    rbac.has_permission(role, permission),
                    rbac.has_permission_key(role.as_str(), permission.as_str())
                );
            }
        }
    }

    #[test]
    fn test_grants_are_monotonic_in_level_for_reports() {
        // Every role allowed reports outranks every role that is not
        let rbac = RbacSystem::new();
        let (with, without): (Vec<Role>, Vec<Role>) = Role::ALL
            .into_iter()
            .partition(|r| rbac.has_permission(*r, Permission::ViewReports));
        for a in &with {
            for b in &without {
                assert!(rbac.has_higher_level(*a, *b));
            }
        }
    }

    // ==================== Level Properties ====================

    #[test]
    fn test_higher_level_is_irreflexive_and_asymmetric() {
        let rbac = RbacSystem::new();
        for a in Role::ALL {
            assert!(!rbac.has_higher_level(a, a));
            for b in Role::ALL {
                assert!(!(rbac.has_higher_level(a, b) && rbac.has_higher_level(b, a)));
            }
        }
    }

    #[test]
    fn test_minimum_level_agrees_with_level() {
        let rbac = RbacSystem::new();
        for role in Role::ALL {
            let level = rbac.level(role);
            assert!(rbac.has_minimum_level(role, 0));
            assert!(rbac.has_minimum_level(role, level));
            assert!(!rbac.has_minimum_level(role, level + 1));
        }
    }

    // ==================== Module Properties ====================

    #[test]
    fn test_modules_bracketed_by_dashboard_and_profile() {
        let rbac = RbacSystem::new();
        for role in Role::ALL {
            let modules = rbac.available_modules(role);
            assert_eq!(modules.first(), Some(&Module::Dashboard));
            assert_eq!(modules.last(), Some(&Module::Profile));
        }
    }

    #[test]
    fn test_player_and_pending_modules() {
        let rbac = RbacSystem::new();
        assert_eq!(
            rbac.available_modules(Role::Player),
            vec![Module::Dashboard, Module::Profile]
        );
        assert_eq!(
            rbac.available_modules(Role::Pending),
            vec![Module::Dashboard, Module::Profile]
        );
    }

    // ==================== Assignment Properties ====================

    #[test]
    fn test_only_admin_may_grant_admin() {
        let rbac = RbacSystem::new();
        for actor in Role::ALL {
            for target in Role::ALL {
                let allowed = rbac.can_update_user_role(actor, target, Role::Admin);
                assert_eq!(allowed, actor == Role::Admin, "{} -> {}", actor, target);
            }
        }
    }

    #[test]
    fn test_updates_require_update_permission() {
        let rbac = RbacSystem::new();
        for actor in Role::ALL {
            if rbac.has_permission(actor, Permission::UpdateUserRoles) {
                continue;
            }
            for target in Role::ALL {
                for proposed in Role::ALL {
                    assert!(!rbac.can_update_user_role(actor, target, proposed));
                }
            }
        }
    }

    #[test]
    fn test_assignable_roles_never_include_admin_for_non_admins() {
        let rbac = RbacSystem::new();
        for actor in Role::ALL.into_iter().filter(|r| *r != Role::Admin) {
            assert!(!rbac.assignable_roles(actor).contains(&Role::Admin));
        }
    }

    #[test]
    fn test_assignable_roles_sit_below_actor() {
        let rbac = RbacSystem::new();
        for actor in Role::ALL.into_iter().filter(|r| *r != Role::Admin) {
            for role in rbac.assignable_roles(actor) {
                assert!(rbac.has_higher_level(actor, role));
            }
        }
    }

    #[test]
    fn test_validation_reasons() {
        let rbac = RbacSystem::new();
        rbac.validate_role_assignment(Role::Manager, "admin")
            .assert_rejected_with("Only admins");
        rbac.validate_role_assignment(Role::Admin, "bogus_role")
            .assert_rejected_with("Invalid role");
        rbac.validate_role_assignment(Role::Analyst, "player")
            .assert_rejected_with("permission");
        rbac.validate_role_assignment(Role::Admin, "coach").assert_valid();
    }

    // ==================== Sharing ====================

    #[test]
    fn test_shared_table_across_threads() {
        let rbac = Arc::new(RbacSystem::new());
        let handles: Vec<_> = Role::ALL
            .into_iter()
            .map(|role| {
                let rbac = Arc::clone(&rbac);
                std::thread::spawn(move || rbac.available_modules(role).len())
            })
            .collect();

        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![6, 6, 4, 3, 2, 2]);
    }
}
