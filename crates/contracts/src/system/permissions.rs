//! ACL permission codes.
//!
//! Codes are dotted `entity.action` strings (`cidades.editar`). The backend
//! returns the flat list of codes granted to the session from
//! `GET /permissoes/usuario`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const ACTION_VIEW: &str = "visualizar";
pub const ACTION_CREATE: &str = "criar";
pub const ACTION_EDIT: &str = "editar";
pub const ACTION_DELETE: &str = "excluir";

/// Endpoint returning the codes granted to the current session
pub const USER_PERMISSIONS_PATH: &str = "/permissoes/usuario";

/// `dados` of `GET /permissoes/usuario`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPermissions {
    #[serde(default)]
    pub permissoes: Vec<String>,
}

pub fn permission_code(prefix: &str, action: &str) -> String {
    format!("{}.{}", prefix, action)
}

/// Codes granted to the current session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantedPermissions {
    codes: BTreeSet<String>,
}

impl GrantedPermissions {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|c| {
                    let c: String = c.into();
                    c.trim().to_string()
                })
                .filter(|c| !c.is_empty())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Membership check. A comma-joined list of codes is granted when ANY
    /// of them is granted.
    pub fn can(&self, codes: &str) -> bool {
        codes
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .any(|c| self.codes.contains(c))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl From<UserPermissions> for GrantedPermissions {
    fn from(value: UserPermissions) -> Self {
        Self::new(value.permissoes)
    }
}

/// Capabilities of one page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionSet {
    pub view: bool,
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
}

impl PermissionSet {
    /// Derive the four capabilities from `{prefix}.visualizar` etc.
    pub fn for_prefix(granted: &GrantedPermissions, prefix: &str) -> Self {
        Self {
            view: granted.can(&permission_code(prefix, ACTION_VIEW)),
            create: granted.can(&permission_code(prefix, ACTION_CREATE)),
            edit: granted.can(&permission_code(prefix, ACTION_EDIT)),
            delete: granted.can(&permission_code(prefix, ACTION_DELETE)),
        }
    }

    pub fn all() -> Self {
        Self {
            view: true,
            create: true,
            edit: true,
            delete: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Drop every write capability, keep `view`
    pub fn read_only(self) -> Self {
        Self {
            view: self.view,
            ..Self::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_code_membership() {
        let granted = GrantedPermissions::new(["cidades.visualizar"]);
        assert!(granted.can("cidades.visualizar"));
        assert!(!granted.can("cidades.editar"));
    }

    #[test]
    fn test_comma_joined_codes_are_or() {
        let granted = GrantedPermissions::new(["a.editar"]);
        assert!(granted.can("a.visualizar,a.editar"));
        assert!(granted.can("a.visualizar, a.editar"));
        assert!(!granted.can("a.visualizar,a.excluir"));
    }

    #[test]
    fn test_empty_codes_never_match() {
        let granted = GrantedPermissions::new(["", "  "]);
        assert!(granted.is_empty());
        assert!(!granted.can(""));
        assert!(!granted.can(","));
    }

    #[test]
    fn test_permission_set_for_prefix() {
        let granted = GrantedPermissions::new(["estados.visualizar", "estados.editar", "cidades.excluir"]);
        let set = PermissionSet::for_prefix(&granted, "estados");
        assert_eq!(
            set,
            PermissionSet {
                view: true,
                create: false,
                edit: true,
                delete: false
            }
        );
        assert_eq!(set.read_only(), PermissionSet { view: true, ..PermissionSet::none() });
    }

    #[test]
    fn test_parses_endpoint_payload() {
        let payload: UserPermissions =
            serde_json::from_str(r#"{"permissoes":["vendas.visualizar"]}"#).unwrap();
        let granted = GrantedPermissions::from(payload);
        assert_eq!(granted.len(), 1);
    }
}
