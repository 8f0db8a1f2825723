//! Session roles.

/// Who is using the console: chosen once at the login menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionRole {
    /// Can add parts to the catalog (requires credentials).
    Admin,
    /// Can search the catalog, fill a cart, and check out.
    Shopper,
}

impl SessionRole {
    /// Map a login menu choice (`1` or `2`) to a role.
    #[must_use]
    pub const fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Admin),
            2 => Some(Self::Shopper),
            _ => None,
        }
    }
}
