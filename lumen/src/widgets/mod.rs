pub(crate) mod chrome;
pub(crate) mod settings;

use self::settings::{MountId, SettingsWidget};

/// Container for all widget instances.
///
/// The settings form only exists while its screen is open.
pub(crate) struct Widgets {
    pub(crate) settings: Option<SettingsWidget>,
    next_mount_id: u64,
}

impl Widgets {
    pub(crate) fn new() -> Self {
        Self {
            settings: None,
            next_mount_id: 0,
        }
    }

    /// Allocate an id for the next settings form instance.
    pub(crate) fn next_mount_id(&mut self) -> MountId {
        self.next_mount_id += 1;
        MountId(self.next_mount_id)
    }
}
