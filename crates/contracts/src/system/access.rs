//! Role numbers, access tiers and the navigation table.
//!
//! The sidebar, the page switch and the backend route guard all read the
//! same tables below, so a page hidden from a role is also closed on the
//! server.

use serde::{Deserialize, Serialize};

pub const HOME: &str = "home";
pub const SIGNOUT: &str = "signout";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessTier {
    /// Every page, user management included
    Full,
    /// Rent and money pages only
    Restricted,
    /// Nothing but the sign-out entry
    SignOutOnly,
}

const RESTRICTED_KEYS: &[&str] = &[
    HOME,
    "RentManager",
    "ServiceManager",
    "BlockesServices",
    "Salaries",
    "Expenses",
    "Incomes",
    "financial",
    SIGNOUT,
];

impl AccessTier {
    /// `0`/`1` are full access, `3` is restricted, everything else
    /// (or no session at all) may only sign out.
    pub fn from_role(role: Option<i32>) -> Self {
        match role {
            Some(0) | Some(1) => AccessTier::Full,
            Some(3) => AccessTier::Restricted,
            _ => AccessTier::SignOutOnly,
        }
    }

    pub fn allows(&self, key: &str) -> bool {
        match self {
            AccessTier::Full => NAV_ITEMS.iter().any(|item| item.key == key),
            AccessTier::Restricted => RESTRICTED_KEYS.contains(&key),
            AccessTier::SignOutOnly => key == SIGNOUT,
        }
    }

    pub fn can_manage_users(&self) -> bool {
        *self == AccessTier::Full
    }
}

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { key: HOME, label: "صفحه اصلی", icon: "home" },
    NavItem { key: "Workers", label: "کارگران", icon: "workers" },
    NavItem { key: "ProcessingCarpets", label: "قالین های در حال بافت", icon: "loom" },
    NavItem { key: "Importing", label: "قالین های وارداتی", icon: "import" },
    NavItem { key: "SendingCarpets", label: "قالین های صادراتی", icon: "export" },
    NavItem { key: "StaffManager", label: "کارمندان", icon: "staff" },
    NavItem { key: "Salaries", label: "معاشات", icon: "salary" },
    NavItem { key: "Expenses", label: "مصارف", icon: "expense" },
    NavItem { key: "Incomes", label: "عواید", icon: "income" },
    NavItem { key: "financial", label: "برداشت ها", icon: "finance" },
    NavItem { key: "Shopkeepers", label: "دوکانداران", icon: "shop" },
    NavItem { key: "Agreements", label: "قراردادها", icon: "agreement" },
    NavItem { key: "RentManager", label: "کرایه", icon: "rent" },
    NavItem { key: "ServiceManager", label: "خدمات", icon: "service" },
    NavItem { key: "Blockes", label: "واحدها", icon: "unit" },
    NavItem { key: "BlockesServices", label: "خدمات واحدها", icon: "unit-bill" },
    NavItem { key: "CreateUsers", label: "کاربران", icon: "users" },
    NavItem { key: SIGNOUT, label: "خروج", icon: "signout" },
];

/// Menu entries visible to the role, in menu order
pub fn accessible_items(role: Option<i32>) -> Vec<NavItem> {
    let tier = AccessTier::from_role(role);
    NAV_ITEMS
        .iter()
        .copied()
        .filter(|item| tier.allows(item.key))
        .collect()
}

pub fn is_allowed(role: Option<i32>, key: &str) -> bool {
    AccessTier::from_role(role).allows(key)
}

pub fn nav_label(key: &str) -> Option<&'static str> {
    NAV_ITEMS.iter().find(|i| i.key == key).map(|i| i.label)
}

/// REST collection served under `/api/<path>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiResource {
    ImportCarpets,
    ExportCarpets,
    Workers,
    ProcessingCarpets,
    Staff,
    Salaries,
    Expenditure,
    Income,
    Finances,
    Customers,
    Agreements,
    Rent,
    Services,
    Units,
    UnitBills,
    Summary,
}

impl ApiResource {
    pub fn path(&self) -> &'static str {
        match self {
            ApiResource::ImportCarpets => "carpet/import",
            ApiResource::ExportCarpets => "carpet/export",
            ApiResource::Workers => "person",
            ApiResource::ProcessingCarpets => "processing-carpets",
            ApiResource::Staff => "staff",
            ApiResource::Salaries => "salaries",
            ApiResource::Expenditure => "expenditure",
            ApiResource::Income => "income",
            ApiResource::Finances => "finances",
            ApiResource::Customers => "customers",
            ApiResource::Agreements => "agreements",
            ApiResource::Rent => "rent",
            ApiResource::Services => "services",
            ApiResource::Units => "units",
            ApiResource::UnitBills => "unit-bills",
            ApiResource::Summary => "dashboard/summary",
        }
    }

    /// Page that owns the resource: reads and writes
    pub fn owner_key(&self) -> &'static str {
        match self {
            ApiResource::ImportCarpets => "Importing",
            ApiResource::ExportCarpets => "SendingCarpets",
            ApiResource::Workers => "Workers",
            ApiResource::ProcessingCarpets => "ProcessingCarpets",
            ApiResource::Staff => "StaffManager",
            ApiResource::Salaries => "Salaries",
            ApiResource::Expenditure => "Expenses",
            ApiResource::Income => "Incomes",
            ApiResource::Finances => "financial",
            ApiResource::Customers => "Shopkeepers",
            ApiResource::Agreements => "Agreements",
            ApiResource::Rent => "RentManager",
            ApiResource::Services => "ServiceManager",
            ApiResource::Units => "Blockes",
            ApiResource::UnitBills => "BlockesServices",
            ApiResource::Summary => HOME,
        }
    }

    /// Other pages that read the resource to fill their select boxes
    fn reader_keys(&self) -> &'static [&'static str] {
        match self {
            ApiResource::Workers => &["ProcessingCarpets"],
            ApiResource::Staff => &["Salaries"],
            ApiResource::Customers => &["Agreements", "RentManager", "ServiceManager"],
            _ => &[],
        }
    }

    pub fn can_read(&self, role: Option<i32>) -> bool {
        let tier = AccessTier::from_role(role);
        tier.allows(self.owner_key()) || self.reader_keys().iter().any(|k| tier.allows(k))
    }

    pub fn can_write(&self, role: Option<i32>) -> bool {
        self != &ApiResource::Summary && AccessTier::from_role(role).allows(self.owner_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(role: Option<i32>) -> Vec<&'static str> {
        accessible_items(role).iter().map(|i| i.key).collect()
    }

    #[test]
    fn test_full_tier_sees_everything() {
        assert_eq!(keys(Some(0)).len(), NAV_ITEMS.len());
        assert_eq!(keys(Some(1)), keys(Some(0)));
        assert!(AccessTier::from_role(Some(1)).can_manage_users());
    }

    #[test]
    fn test_restricted_tier_in_menu_order() {
        assert_eq!(
            keys(Some(3)),
            vec![
                HOME,
                "Salaries",
                "Expenses",
                "Incomes",
                "financial",
                "RentManager",
                "ServiceManager",
                "BlockesServices",
                SIGNOUT
            ]
        );
    }

    #[test]
    fn test_other_roles_sign_out_only() {
        assert_eq!(keys(Some(2)), vec![SIGNOUT]);
        assert_eq!(keys(Some(-1)), vec![SIGNOUT]);
        assert_eq!(keys(None), vec![SIGNOUT]);
        assert!(!is_allowed(Some(7), HOME));
    }

    #[test]
    fn test_unknown_key_is_never_allowed() {
        assert!(!is_allowed(Some(0), "Nope"));
    }

    #[test]
    fn test_resource_access() {
        assert!(ApiResource::Rent.can_write(Some(3)));
        assert!(ApiResource::Customers.can_read(Some(3)));
        assert!(!ApiResource::Customers.can_write(Some(3)));
        assert!(ApiResource::Staff.can_read(Some(3)));
        assert!(!ApiResource::Workers.can_read(Some(3)));
        assert!(ApiResource::Summary.can_read(Some(3)));
        assert!(!ApiResource::Summary.can_write(Some(0)));
        assert!(!ApiResource::Income.can_read(Some(5)));
        assert!(!ApiResource::Income.can_read(None));
    }

    #[test]
    fn test_property_resources() {
        assert!(ApiResource::Services.can_write(Some(3)));
        assert!(ApiResource::UnitBills.can_write(Some(3)));
        assert!(!ApiResource::Units.can_read(Some(3)));
        assert!(ApiResource::Units.can_write(Some(1)));
        assert!(!ApiResource::UnitBills.can_read(Some(2)));
    }
}
