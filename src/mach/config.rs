/// Bit set of host capabilities a program may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permission(u8);

impl Permission {
    pub const NONE: Permission = Permission(0);
    pub const MOUSE: Permission = Permission(1 << 0);
    pub const KEYBOARD: Permission = Permission(1 << 1);
    pub const SLEEP: Permission = Permission(1 << 2);
    pub const ALL: Permission = Permission(0b111);

    pub fn from_bits(bits: u8) -> Permission {
        Permission(bits & Permission::ALL.0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: Permission) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn name(self) -> &'static str {
        match self {
            Permission::NONE => "NONE",
            Permission::MOUSE => "MOUSE",
            Permission::KEYBOARD => "KEYBOARD",
            Permission::SLEEP => "SLEEP",
            Permission::ALL => "ALL",
            _ => "MIXED",
        }
    }
}

impl std::ops::BitOr for Permission {
    type Output = Permission;

    fn bitor(self, rhs: Permission) -> Permission {
        Permission(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Permission {
    fn bitor_assign(&mut self, rhs: Permission) {
        self.0 |= rhs.0;
    }
}

/// ## Runtime configuration
///
/// Handed to the runtime when it is built and read-only afterwards.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Operand stack size in bytes.
    pub stack_capacity: usize,
    pub permission: Permission,
}

impl Config {
    pub const DEFAULT_STACK_CAPACITY: usize = 256;

    pub fn with_stack_capacity(self, stack_capacity: usize) -> Config {
        Config {
            stack_capacity,
            ..self
        }
    }

    pub fn with_permission(self, permission: Permission) -> Config {
        Config { permission, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stack_capacity: Config::DEFAULT_STACK_CAPACITY,
            permission: Permission::NONE,
        }
    }
}
